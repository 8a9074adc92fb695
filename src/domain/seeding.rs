//! RNG seed derivation for deterministic board generation.
//!
//! Each game carries one base seed; the board for match N (rematches
//! increment N) is derived from it, so a stored game regenerates the same
//! boards while distinct games and rematches get fresh ones.

/// Derive the board-generation seed for a given match of a game.
pub fn derive_board_seed(game_seed: u64, match_no: u32) -> u64 {
    game_seed
        .wrapping_add((match_no as u64).wrapping_mul(1_000_003))
        .wrapping_add(1)
}

/// Fresh entropy seed for a new game. Production callers use this so no two
/// games (or trap positions) repeat; tests pass fixed seeds instead.
pub fn random_game_seed() -> u64 {
    rand::random()
}
