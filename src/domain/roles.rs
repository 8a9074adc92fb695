//! Phase-gated policy for team/role roster changes.
//!
//! The roster itself is mutated by the room-management layer; this policy is
//! the sole authorization check it consults first. While no game is running
//! (lobby, paused, game over) players manage their own assignment and the
//! owner can clear anyone's; mid-game the roster is frozen except for the
//! owner drafting a spectator in as a seeker.

use crate::domain::snapshot::RoomPhase;
use crate::domain::state::Player;
use crate::errors::domain::{DomainError, PermissionKind};

/// Roster mutations the policy knows how to gate.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RosterAction {
    JoinAsHinter,
    JoinAsSeeker,
    LeaveTeam,
    /// Owner drafts a spectator onto a team mid-game, always as a seeker.
    AddSpectatorToTeam,
    RemoveFromTeam,
}

/// Whether `actor` may apply `action` to `target` in the given phase.
pub fn can_perform(
    action: RosterAction,
    actor: &Player,
    target: &Player,
    phase: RoomPhase,
) -> bool {
    let open = matches!(
        phase,
        RoomPhase::Lobby | RoomPhase::Paused | RoomPhase::GameOver
    );

    match action {
        RosterAction::JoinAsHinter | RosterAction::JoinAsSeeker | RosterAction::LeaveTeam => {
            open && actor.id == target.id
        }
        RosterAction::RemoveFromTeam => open && actor.is_owner && !target.is_spectator(),
        RosterAction::AddSpectatorToTeam => {
            phase == RoomPhase::Active && actor.is_owner && target.is_spectator()
        }
    }
}

/// `can_perform` as a transition-style check.
pub fn authorize(
    action: RosterAction,
    actor: &Player,
    target: &Player,
    phase: RoomPhase,
) -> Result<(), DomainError> {
    if can_perform(action, actor, target, phase) {
        Ok(())
    } else {
        Err(DomainError::permission(
            PermissionKind::ActionNotPermittedInPhase,
            format!("{action:?} not permitted in {phase:?}"),
        ))
    }
}
