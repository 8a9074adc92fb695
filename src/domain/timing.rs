//! Soft turn-timer arithmetic. The machine never reads the clock; callers
//! compare wall-clock time against these computed deadlines and invoke
//! `timeout_turn` on expiry.

use time::{Duration, OffsetDateTime};

use crate::domain::rules::first_clue_bonus;
use crate::domain::state::{GameState, TurnPhase};

/// Clue-phase duration for the current team, including the one-time
/// first-clue bonus.
pub fn clue_duration(state: &GameState) -> Duration {
    let base = state.config.timer.clue_duration();
    if state.clues_given[state.current_team.index()] == 0 {
        first_clue_bonus(base)
    } else {
        base
    }
}

/// Guess-phase duration; fixed per preset regardless of clue count.
pub fn guess_duration(state: &GameState) -> Duration {
    state.config.timer.guess_duration()
}

/// Duration of the phase the machine is currently in.
pub fn phase_duration(state: &GameState) -> Duration {
    match state.turn_phase {
        TurnPhase::GivingClue => clue_duration(state),
        TurnPhase::Guessing => guess_duration(state),
    }
}

/// When the current phase expires; `None` while paused, finished, or before
/// a turn baseline exists.
pub fn deadline(state: &GameState) -> Option<OffsetDateTime> {
    if state.paused || state.game_over {
        return None;
    }
    state.turn_start.map(|start| start + phase_duration(state))
}

/// Time left on the current phase, clamped at zero.
pub fn time_remaining(state: &GameState, now: OffsetDateTime) -> Option<Duration> {
    deadline(state).map(|end| (end - now).max(Duration::ZERO))
}
