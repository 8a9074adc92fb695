//! Connectivity readiness checks, evaluated only at turn boundaries.

use crate::domain::state::{PauseReason, Player, Role, Team};

/// Whether `team` has the connected personnel required to play a turn.
///
/// Returns the highest-priority missing requirement, or `None` when the team
/// is ready: no connected member at all beats a missing clue-giver, which
/// beats having no connected seeker.
pub fn team_readiness(players: &[Player], team: Team) -> Option<PauseReason> {
    let members: Vec<&Player> = players.iter().filter(|p| p.is_on(team)).collect();

    if !members.iter().any(|p| p.connected) {
        return Some(PauseReason::TeamDisconnected);
    }
    if !members
        .iter()
        .any(|p| p.role == Some(Role::Hinter) && p.connected)
    {
        return Some(PauseReason::ClueGiverDisconnected);
    }
    if !members
        .iter()
        .any(|p| p.role == Some(Role::Seeker) && p.connected)
    {
        return Some(PauseReason::NoGuessers);
    }
    None
}

/// The team's hinter, connected or not.
pub fn hinter_of(players: &[Player], team: Team) -> Option<&Player> {
    players.iter().find(|p| p.has_role(team, Role::Hinter))
}

/// Full seeker roster size for `team`, disconnected members included.
pub fn rostered_seekers(players: &[Player], team: Team) -> usize {
    players
        .iter()
        .filter(|p| p.has_role(team, Role::Seeker))
        .count()
}
