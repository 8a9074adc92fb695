//! Guess resolution and turn-end transitions.

use time::OffsetDateTime;

use crate::domain::lifecycle::auto_pause_check;
use crate::domain::presence::hinter_of;
use crate::domain::rules::BOARD_SIZE;
use crate::domain::state::{
    find_player, require_remaining, CardOwner, GameState, Player, Role, Team, TurnPhase,
};
use crate::errors::domain::{DomainError, PermissionKind, PreconditionKind};

/// What a reveal did to the game, for callers that broadcast outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealOutcome {
    pub owner: CardOwner,
    /// The turn passed to the other team (wrong guess or budget spent).
    pub turn_ended: bool,
    pub game_over: bool,
    pub winner: Option<Team>,
    /// Guess budget after this reveal; `None` once the turn or game ended.
    pub remaining_guesses: Option<u8>,
}

/// Reveal a card for the current team. Invoked by the vote coordinator once
/// a guess is confirmed; each card is revealed at most once.
///
/// Resolution is exhaustive over the card's ownership:
/// - own team: spend a guess; winning reveal or spent budget ends the
///   turn/game
/// - other team or neutral: the turn ends immediately (a gifted reveal can
///   still win the game for the other team)
/// - trap: instant loss, the opposing team wins
pub fn reveal_card(
    state: &mut GameState,
    players: &[Player],
    actor: &str,
    card_index: usize,
    now: OffsetDateTime,
) -> Result<RevealOutcome, DomainError> {
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

    let guesser = find_player(players, actor)?;
    if !guesser.is_on(state.current_team) {
        return Err(DomainError::permission(
            PermissionKind::WrongTeam,
            "only the current team may guess",
        ));
    }
    if guesser.role != Some(Role::Seeker) {
        return Err(DomainError::permission(
            PermissionKind::NotSeeker,
            "only seekers guess cards",
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

    let remaining = require_remaining(state, "reveal_card")?;
    let team = state.current_team;

    state.board[card_index].revealed = true;
    state.board[card_index].revealed_by = Some(actor.to_string());
    state.votes.remove_card(card_index);

    let owner = state.board[card_index].owner;
    tracing::debug!(team = ?team, card_index, owner = ?owner, "card revealed");

    let mut outcome = RevealOutcome {
        owner,
        turn_ended: false,
        game_over: false,
        winner: None,
        remaining_guesses: None,
    };

    match owner {
        CardOwner::Trap => {
            finish_game(state, Some(team.opponent()));
            outcome.game_over = true;
            outcome.winner = Some(team.opponent());
        }
        CardOwner::Neutral => {
            flip_turn(state, players, now);
            outcome.turn_ended = true;
        }
        CardOwner::Red | CardOwner::Blue => {
            let card_team = owner.team().ok_or_else(|| {
                DomainError::invariant("team-owned card must map to a team (reveal_card)")
            })?;
            if card_team == team {
                if state.all_revealed(team) {
                    finish_game(state, Some(team));
                    outcome.game_over = true;
                    outcome.winner = Some(team);
                } else if remaining <= 1 {
                    // Budget spent; the turn passes without an explicit end_turn.
                    flip_turn(state, players, now);
                    outcome.turn_ended = true;
                } else {
                    state.remaining_guesses = Some(remaining - 1);
                    outcome.remaining_guesses = Some(remaining - 1);
                }
            } else {
                // Gifted reveal: may hand the other team their winning card.
                if state.all_revealed(card_team) {
                    finish_game(state, Some(card_team));
                    outcome.game_over = true;
                    outcome.winner = Some(card_team);
                } else {
                    flip_turn(state, players, now);
                    outcome.turn_ended = true;
                }
            }
        }
    }

    Ok(outcome)
}

/// Voluntarily end the turn with guesses left. Only the current team's
/// hinter or the room owner, only while a clue is live.
pub fn end_turn(
    state: &mut GameState,
    players: &[Player],
    actor: &str,
    now: OffsetDateTime,
) -> Result<(), DomainError> {
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
    require_remaining(state, "end_turn")?;

    let caller = find_player(players, actor)?;
    let is_current_hinter =
        hinter_of(players, state.current_team).is_some_and(|h| h.id == caller.id);
    if !is_current_hinter && !caller.is_owner {
        return Err(DomainError::permission(
            PermissionKind::NotHinter,
            "only the current hinter or the owner may end the turn",
        ));
    }

    flip_turn(state, players, now);
    Ok(())
}

/// Timer-expiry path, invoked by the caller that watches the clock. Valid in
/// either sub-state: clue-phase expiry forfeits the clue, guess-phase expiry
/// ends the turn.
pub fn timeout_turn(
    state: &mut GameState,
    players: &[Player],
    now: OffsetDateTime,
) -> Result<(), DomainError> {
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
    tracing::debug!(team = ?state.current_team, phase = ?state.turn_phase, "turn timed out");
    flip_turn(state, players, now);
    Ok(())
}

/// Pass the turn to the other team and re-check that they can actually play.
/// Every transition that changes `current_team` funnels through here so the
/// auto-pause check runs at exactly the turn boundaries.
pub(crate) fn flip_turn(state: &mut GameState, players: &[Player], now: OffsetDateTime) {
    state.clear_clue_state();
    state.current_team = state.current_team.opponent();
    state.turn_phase = TurnPhase::GivingClue;
    state.turn_start = Some(now);
    auto_pause_check(state, players);
}

fn finish_game(state: &mut GameState, winner: Option<Team>) {
    state.game_over = true;
    state.winner = winner;
    state.clear_clue_state();
    state.paused = false;
    state.paused_for_team = None;
    state.pause_reason = None;
    state.turn_start = None;
    tracing::info!(winner = ?winner, "game over");
}
