//! Public snapshot API for observing game state without leaking hidden
//! ownership. Hinters (and anyone once the game is over) see the full board;
//! seekers and spectators see ownership only on revealed cards.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::state::{
    CardOwner, Clue, GameState, PauseReason, Player, PlayerId, Role, Team, TurnPhase,
};
use crate::domain::timing;

/// Derived room phase; drives the open/restricted roster policy.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoomPhase {
    Lobby,
    Active,
    Paused,
    GameOver,
}

/// Phase of a live game state.
pub fn room_phase(state: &GameState) -> RoomPhase {
    if !state.game_started {
        RoomPhase::Lobby
    } else if state.game_over {
        RoomPhase::GameOver
    } else if state.paused {
        RoomPhase::Paused
    } else {
        RoomPhase::Active
    }
}

/// Phase of a room that may not have a game yet.
pub fn room_phase_of(state: Option<&GameState>) -> RoomPhase {
    state.map_or(RoomPhase::Lobby, room_phase)
}

/// One board card as a given viewer sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub word: String,
    pub revealed: bool,
    /// Hidden (`None`) unless revealed, the viewer is a hinter, or the game
    /// is over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<CardOwner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revealed_by: Option<PlayerId>,
}

/// Current-turn facts while a game runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnView {
    pub team: Team,
    pub phase: TurnPhase,
    pub clue: Option<Clue>,
    pub remaining_guesses: Option<u8>,
    pub deadline: Option<OffsetDateTime>,
    /// Distinct-voter tallies per card index.
    pub votes: Vec<VoteTally>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub card: usize,
    pub votes: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PausedView {
    pub turn: TurnView,
    pub for_team: Option<Team>,
    /// `None` for a manual owner pause.
    pub reason: Option<PauseReason>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverView {
    pub winner: Option<Team>,
}

/// Adjacently tagged union of phase-specific snapshot data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseView {
    Lobby,
    Active(TurnView),
    Paused(PausedView),
    GameOver(GameOverView),
}

/// Top-level per-viewer snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Vec<CardView>,
    pub starting_team: Team,
    /// Unrevealed cards left per team, `[red, blue]`.
    pub cards_remaining: [usize; 2],
    pub phase: PhaseView,
}

/// Produce the snapshot `viewer` is allowed to see. `None` is a spectator
/// view.
pub fn snapshot_for(state: &GameState, viewer: Option<&Player>) -> GameSnapshot {
    let viewer_is_hinter = viewer.is_some_and(|p| p.role == Some(Role::Hinter));
    let all_visible = viewer_is_hinter || state.game_over;

    let board = state
        .board
        .iter()
        .map(|card| CardView {
            word: card.word.clone(),
            revealed: card.revealed,
            owner: (card.revealed || all_visible).then_some(card.owner),
            revealed_by: card.revealed_by.clone(),
        })
        .collect();

    let phase = match room_phase(state) {
        RoomPhase::Lobby => PhaseView::Lobby,
        RoomPhase::Active => PhaseView::Active(turn_view(state)),
        RoomPhase::Paused => PhaseView::Paused(PausedView {
            turn: turn_view(state),
            for_team: state.paused_for_team,
            reason: state.pause_reason,
        }),
        RoomPhase::GameOver => PhaseView::GameOver(GameOverView {
            winner: state.winner,
        }),
    };

    GameSnapshot {
        board,
        starting_team: state.starting_team,
        cards_remaining: [
            state.cards_remaining(Team::Red),
            state.cards_remaining(Team::Blue),
        ],
        phase,
    }
}

fn turn_view(state: &GameState) -> TurnView {
    TurnView {
        team: state.current_team,
        phase: state.turn_phase,
        clue: state.current_clue.clone(),
        remaining_guesses: state.remaining_guesses,
        deadline: timing::deadline(state),
        votes: state
            .votes
            .tallies()
            .map(|(card, votes)| VoteTally { card, votes })
            .collect(),
    }
}
