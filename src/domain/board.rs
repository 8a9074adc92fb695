//! Board generation: word sampling and hidden team assignment.

use rand::seq::{index, SliceRandom};
use rand::Rng;

use crate::domain::rules::{
    BOARD_SIZE, NEUTRAL_CARDS, SECOND_TEAM_CARDS, STARTING_TEAM_CARDS,
};
use crate::domain::state::{Card, CardOwner, Team};
use crate::errors::domain::{DomainError, ValidationKind};

/// Sample 25 unique words from the pool, without replacement.
///
/// The pool is deduplicated case-insensitively first; a pool with fewer than
/// 25 unique words cannot form a board.
pub fn generate_board<R: Rng>(pool: &[String], rng: &mut R) -> Result<Vec<String>, DomainError> {
    let mut seen = std::collections::HashSet::new();
    let unique: Vec<&String> = pool
        .iter()
        .filter(|w| seen.insert(w.to_uppercase()))
        .collect();

    if unique.len() < BOARD_SIZE {
        return Err(DomainError::InsufficientWords {
            needed: BOARD_SIZE,
            available: unique.len(),
        });
    }

    let picks = index::sample(rng, unique.len(), BOARD_SIZE);
    Ok(picks.iter().map(|i| unique[i].to_uppercase()).collect())
}

/// Partition 25 words into hidden ownership groups: 9 for the starting team,
/// 8 for the other, 7 neutral, and the single trap, via Fisher-Yates over
/// the index space.
pub fn assign_teams<R: Rng>(
    words: Vec<String>,
    starting_team: Team,
    rng: &mut R,
) -> Result<Vec<Card>, DomainError> {
    if words.len() != BOARD_SIZE {
        return Err(DomainError::validation(
            ValidationKind::Other("BoardSize".to_string()),
            format!("board needs exactly {BOARD_SIZE} words, got {}", words.len()),
        ));
    }

    let mut owners = Vec::with_capacity(BOARD_SIZE);
    for _ in 0..STARTING_TEAM_CARDS {
        owners.push(CardOwner::from(starting_team));
    }
    for _ in 0..SECOND_TEAM_CARDS {
        owners.push(CardOwner::from(starting_team.opponent()));
    }
    for _ in 0..NEUTRAL_CARDS {
        owners.push(CardOwner::Neutral);
    }
    owners.push(CardOwner::Trap);
    owners.shuffle(rng);

    Ok(words
        .into_iter()
        .zip(owners)
        .map(|(word, owner)| Card::hidden(word, owner))
        .collect())
}
