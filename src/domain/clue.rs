//! Clue validation and the clue-submission transition.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use time::OffsetDateTime;

use crate::domain::rules::MAX_CLUE_COUNT;
use crate::domain::state::{find_player, Clue, GameState, Player, Role, TurnPhase};
use crate::errors::domain::{DomainError, PermissionKind, PreconditionKind, ValidationKind};

/// Words never accepted as clues regardless of the board.
static BLOCKLIST: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["DAMN", "HELL", "CRAP", "PISS", "BASTARD", "BLOODY"]
        .into_iter()
        .collect()
});

/// Validate a clue against the board. Checks run in order; the first failure
/// wins:
///
/// 1. format/blocklist: a single alphabetic token, not blocklisted
/// 2. case-insensitive exact match with a board word
/// 3. containment either way: the clue inside a board word, or a board word
///    inside the clue ("farm" vs "FARMER"; the rule is symmetric, so "war"
///    is also rejected while "DWARF" is on the board)
/// 4. simple plural variant: clue ± "S"/"ES" equals a board word
///
/// Pure and deterministic; must run before every clue submission.
pub fn validate_clue(word: &str, board_words: &[String]) -> Result<(), DomainError> {
    let trimmed = word.trim();
    if trimmed.is_empty() || !trimmed.chars().all(char::is_alphabetic) {
        return Err(DomainError::validation(
            ValidationKind::InvalidFormat,
            "clue must be a single alphabetic word",
        ));
    }
    let clue = trimmed.to_uppercase();
    if BLOCKLIST.contains(clue.as_str()) {
        return Err(DomainError::validation(
            ValidationKind::InvalidFormat,
            "clue is not allowed",
        ));
    }

    for board_word in board_words {
        let board = board_word.to_uppercase();
        if clue == board {
            return Err(DomainError::validation(
                ValidationKind::ExactMatch,
                format!("clue matches the board word '{board}'"),
            ));
        }
    }
    for board_word in board_words {
        let board = board_word.to_uppercase();
        if board.contains(&clue) || clue.contains(&board) {
            return Err(DomainError::validation(
                ValidationKind::AffixCollision,
                format!("clue overlaps the board word '{board}'"),
            ));
        }
    }
    for board_word in board_words {
        let board = board_word.to_uppercase();
        if plural_variant_of(&clue, &board) {
            return Err(DomainError::validation(
                ValidationKind::PluralCollision,
                format!("clue is a plural variant of the board word '{board}'"),
            ));
        }
    }
    Ok(())
}

/// True when `clue ± "S"/"ES"` equals `word` (both uppercase).
pub fn plural_variant_of(clue: &str, word: &str) -> bool {
    if format!("{clue}S") == word || format!("{clue}ES") == word {
        return true;
    }
    if let Some(stem) = clue.strip_suffix("ES") {
        if stem == word {
            return true;
        }
    }
    if let Some(stem) = clue.strip_suffix('S') {
        if stem == word {
            return true;
        }
    }
    false
}

/// Submit a clue for the current team. Only the current team's hinter, only
/// while the machine waits for a clue. On success the clue goes live with
/// `count + 1` guesses and the turn enters the guessing sub-state.
pub fn give_clue(
    state: &mut GameState,
    players: &[Player],
    actor: &str,
    word: &str,
    count: u8,
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
    if state.turn_phase != TurnPhase::GivingClue {
        return Err(DomainError::precondition(
            PreconditionKind::PhaseMismatch,
            "a clue is already live",
        ));
    }

    let giver = find_player(players, actor)?;
    if !giver.is_on(state.current_team) {
        return Err(DomainError::permission(
            PermissionKind::WrongTeam,
            "only the current team may give a clue",
        ));
    }
    if giver.role != Some(Role::Hinter) {
        return Err(DomainError::permission(
            PermissionKind::NotHinter,
            "only the hinter gives clues",
        ));
    }

    if count == 0 || count > MAX_CLUE_COUNT {
        return Err(DomainError::validation(
            ValidationKind::InvalidCount,
            format!("clue count must be 1..={MAX_CLUE_COUNT}"),
        ));
    }

    let board_words: Vec<String> = state.board.iter().map(|c| c.word.clone()).collect();
    validate_clue(word, &board_words)?;

    state.current_clue = Some(Clue {
        word: word.trim().to_uppercase(),
        count,
    });
    state.remaining_guesses = Some(count + 1);
    state.clues_given[state.current_team.index()] += 1;
    state.votes.clear();
    state.turn_phase = TurnPhase::Guessing;
    state.turn_start = Some(now);

    tracing::debug!(team = ?state.current_team, count, "clue went live");
    Ok(())
}
