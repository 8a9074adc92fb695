//! Domain layer: pure game rules, types, and transition functions.

pub mod board;
pub mod clue;
pub mod config;
pub mod lifecycle;
pub mod presence;
pub mod roles;
pub mod rules;
pub mod seeding;
pub mod snapshot;
pub mod state;
pub mod timing;
pub mod turns;
pub mod votes;
pub mod words;

#[cfg(test)]
mod tests_clue;
#[cfg(test)]
mod tests_props_board;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use board::{assign_teams, generate_board};
pub use clue::validate_clue;
pub use config::{GameConfig, StartingTeamRule};
pub use rules::{vote_threshold, TimerPreset, BOARD_SIZE};
pub use seeding::{derive_board_seed, random_game_seed};
pub use state::{Card, CardOwner, Clue, GameState, PauseReason, Player, Role, Team, TurnPhase};
