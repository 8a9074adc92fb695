//! Vote-to-guess coordination for the current clue.
//!
//! Seekers on the guessing team vote per card; once enough distinct
//! teammates agree, the guess is confirmed and the card revealed. Vote state
//! lives inside `GameState` so it is invalidated atomically with every clue
//! and turn change.

use std::collections::{BTreeMap, BTreeSet};

use time::OffsetDateTime;

use crate::domain::presence::rostered_seekers;
use crate::domain::rules::{vote_threshold, BOARD_SIZE};
use crate::domain::state::{find_player, GameState, Player, PlayerId, Role, TurnPhase};
use crate::domain::turns::{reveal_card, RevealOutcome};
use crate::errors::domain::{DomainError, PermissionKind, PreconditionKind};

/// Standing guess votes, card index to distinct voters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteBook {
    by_card: BTreeMap<usize, BTreeSet<PlayerId>>,
}

impl VoteBook {
    pub fn clear(&mut self) {
        self.by_card.clear();
    }

    pub fn remove_card(&mut self, card_index: usize) {
        self.by_card.remove(&card_index);
    }

    /// Records the vote; false if the voter had already voted for this card.
    fn add(&mut self, card_index: usize, voter: &str) -> bool {
        self.by_card
            .entry(card_index)
            .or_default()
            .insert(voter.to_string())
    }

    fn remove(&mut self, card_index: usize, voter: &str) -> bool {
        let Some(voters) = self.by_card.get_mut(&card_index) else {
            return false;
        };
        let removed = voters.remove(voter);
        if voters.is_empty() {
            self.by_card.remove(&card_index);
        }
        removed
    }

    pub fn count(&self, card_index: usize) -> usize {
        self.by_card.get(&card_index).map_or(0, BTreeSet::len)
    }

    /// Per-card distinct-voter counts, for rendering.
    pub fn tallies(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.by_card.iter().map(|(&card, voters)| (card, voters.len()))
    }

    pub fn is_empty(&self) -> bool {
        self.by_card.is_empty()
    }
}

/// Result of casting a vote.
#[derive(Debug, Clone, PartialEq)]
pub enum VoteOutcome {
    /// Vote recorded; more distinct voters needed.
    Pending { votes: usize, needed: usize },
    /// Threshold met; the card was revealed.
    Confirmed(RevealOutcome),
}

/// Cast a guess vote on a card. Only seekers on the current team, only while
/// a clue is live. The threshold is 1 distinct voter for teams rostering up
/// to 3 seekers and 2 for larger teams, counted over the full roster
/// (disconnected members included). Re-votes by the same seeker are no-ops.
pub fn cast_vote(
    state: &mut GameState,
    players: &[Player],
    actor: &str,
    card_index: usize,
    now: OffsetDateTime,
) -> Result<VoteOutcome, DomainError> {
    if state.game_over {
        return Err(DomainError::precondition(
            PreconditionKind::GameOver,
            "game is over",
        ));
    }
    if state.paused {
        return Err(DomainError::precondition(
            PreconditionKind::GamePaused,
            "game is paused",
        ));
    }
    if state.turn_phase != TurnPhase::Guessing {
        return Err(DomainError::precondition(
            PreconditionKind::PhaseMismatch,
            "no clue is live",
        ));
    }

    let voter = find_player(players, actor)?;
    if !voter.is_on(state.current_team) {
        return Err(DomainError::permission(
            PermissionKind::WrongTeam,
            "only the current team votes",
        ));
    }
    if voter.role != Some(Role::Seeker) {
        return Err(DomainError::permission(
            PermissionKind::NotSeeker,
            "only seekers vote on guesses",
        ));
    }

    if card_index >= BOARD_SIZE {
        return Err(DomainError::precondition(
            PreconditionKind::CardOutOfRange,
            format!("card index {card_index} out of range"),
        ));
    }
    if state.board[card_index].revealed {
        return Err(DomainError::precondition(
            PreconditionKind::CardAlreadyRevealed,
            format!("card {card_index} is already revealed"),
        ));
    }

    state.votes.add(card_index, actor);
    let votes = state.votes.count(card_index);
    let needed = vote_threshold(rostered_seekers(players, state.current_team));

    if votes >= needed {
        let outcome = reveal_card(state, players, actor, card_index, now)?;
        return Ok(VoteOutcome::Confirmed(outcome));
    }
    Ok(VoteOutcome::Pending { votes, needed })
}

/// Withdraw a standing vote. Other voters' votes remain. Returns whether a
/// vote was actually removed.
pub fn withdraw_vote(state: &mut GameState, actor: &str, card_index: usize) -> bool {
    state.votes.remove(card_index, actor)
}
