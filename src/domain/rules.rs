use serde::{Deserialize, Serialize};
use time::Duration;

use crate::domain::state::Team;

pub const BOARD_SIZE: usize = 25;
pub const STARTING_TEAM_CARDS: usize = 9;
pub const SECOND_TEAM_CARDS: usize = 8;
pub const NEUTRAL_CARDS: usize = 7;
pub const TRAP_CARDS: usize = 1;

/// Minimum assigned (non-spectator) players to start a game.
pub const MIN_PLAYERS: usize = 4;

/// Largest clue count a 9-card side could ever justify.
pub const MAX_CLUE_COUNT: u8 = 9;

/// Hidden cards a team starts with.
pub fn cards_for_team(team: Team, starting_team: Team) -> usize {
    if team == starting_team {
        STARTING_TEAM_CARDS
    } else {
        SECOND_TEAM_CARDS
    }
}

/// Distinct voters needed to confirm a guess, from the team's full seeker
/// roster (disconnected members included).
pub fn vote_threshold(rostered_seekers: usize) -> usize {
    if rostered_seekers <= 3 {
        1
    } else {
        2
    }
}

/// Turn timer presets (clue-phase / guess-phase seconds).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum TimerPreset {
    /// 60s / 45s
    Fast,
    /// 90s / 60s
    Normal,
    /// 120s / 90s
    Relaxed,
}

impl TimerPreset {
    pub fn clue_duration(self) -> Duration {
        match self {
            TimerPreset::Fast => Duration::seconds(60),
            TimerPreset::Normal => Duration::seconds(90),
            TimerPreset::Relaxed => Duration::seconds(120),
        }
    }

    pub fn guess_duration(self) -> Duration {
        match self {
            TimerPreset::Fast => Duration::seconds(45),
            TimerPreset::Normal => Duration::seconds(60),
            TimerPreset::Relaxed => Duration::seconds(90),
        }
    }
}

/// Each team's first clue of the game gets +50% thinking time.
pub fn first_clue_bonus(base: Duration) -> Duration {
    base * 3 / 2
}
