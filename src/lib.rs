#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;


// Re-exports for public API
pub use domain::board::{assign_teams, generate_board};
pub use domain::clue::{give_clue, validate_clue};
pub use domain::config::{GameConfig, StartingTeamRule};
pub use domain::lifecycle::{end_game, pause_game, rematch, resume_game, start_game};
pub use domain::presence::team_readiness;
pub use domain::roles::{authorize, can_perform, RosterAction};
pub use domain::rules::TimerPreset;
pub use domain::snapshot::{room_phase, room_phase_of, snapshot_for, GameSnapshot, RoomPhase};
pub use domain::state::{
    Card, CardOwner, Clue, GameState, PauseReason, Player, PlayerId, Role, Team, TurnPhase,
};
pub use domain::timing::{deadline, time_remaining};
pub use domain::turns::{end_turn, reveal_card, timeout_turn, RevealOutcome};
pub use domain::votes::{cast_vote, withdraw_vote, VoteOutcome};
pub use errors::domain::{
    DomainError, NotFoundKind, PermissionKind, PreconditionKind, ValidationKind,
};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
