use serde::{Deserialize, Serialize};

use crate::domain::rules::TimerPreset;
use crate::domain::state::Team;
use crate::domain::words;

/// How the first-moving team is chosen at game start and on rematch.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum StartingTeamRule {
    Fixed(Team),
    Random,
}

/// Per-game configuration, fixed at `start_game` and carried across
/// rematches. `rng_seed` is the game's base seed; board seeds are derived
/// from it per match so a stored game replays identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub timer: TimerPreset,
    /// Ids of the word packs whose union forms the draw pool.
    pub packs: Vec<String>,
    pub starting_team: StartingTeamRule,
    pub rng_seed: u64,
}

impl GameConfig {
    pub fn new(rng_seed: u64) -> Self {
        Self {
            timer: TimerPreset::Normal,
            packs: vec![words::CLASSIC_PACK_ID.to_string()],
            starting_team: StartingTeamRule::Random,
            rng_seed,
        }
    }
}
