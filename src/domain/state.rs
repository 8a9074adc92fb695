use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::config::GameConfig;
use crate::domain::votes::VoteBook;
use crate::errors::domain::{DomainError, NotFoundKind};

pub type PlayerId = String;

/// One of the two competing teams.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    pub fn opponent(self) -> Team {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }

    /// Index into per-team arrays (`[T; 2]`).
    pub fn index(self) -> usize {
        match self {
            Team::Red => 0,
            Team::Blue => 1,
        }
    }
}

/// Hidden ownership of a board card.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardOwner {
    Red,
    Blue,
    Neutral,
    Trap,
}

impl CardOwner {
    /// The owning team, if the card belongs to one.
    pub fn team(self) -> Option<Team> {
        match self {
            CardOwner::Red => Some(Team::Red),
            CardOwner::Blue => Some(Team::Blue),
            CardOwner::Neutral | CardOwner::Trap => None,
        }
    }
}

impl From<Team> for CardOwner {
    fn from(team: Team) -> Self {
        match team {
            Team::Red => CardOwner::Red,
            Team::Blue => CardOwner::Blue,
        }
    }
}

/// One of the 25 board entries.
///
/// `word` and `owner` are fixed at board generation; `revealed`/`revealed_by`
/// are written at most once, by the reveal transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub word: String,
    pub owner: CardOwner,
    pub revealed: bool,
    pub revealed_by: Option<PlayerId>,
}

impl Card {
    pub fn hidden(word: String, owner: CardOwner) -> Self {
        Self {
            word,
            owner,
            revealed: false,
            revealed_by: None,
        }
    }
}

/// Team role: gives clues or guesses cards.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Hinter,
    Seeker,
}

/// Room participant. A player with no team/role is a spectator.
///
/// Assignment fields are mutated by the roster policy and the `connected`
/// flag by the presence layer; the turn machine only reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub avatar: Option<String>,
    pub team: Option<Team>,
    pub role: Option<Role>,
    pub connected: bool,
    pub last_seen_at: Option<OffsetDateTime>,
    pub is_owner: bool,
}

impl Player {
    pub fn is_spectator(&self) -> bool {
        self.team.is_none()
    }

    pub fn is_on(&self, team: Team) -> bool {
        self.team == Some(team)
    }

    pub fn has_role(&self, team: Team, role: Role) -> bool {
        self.team == Some(team) && self.role == Some(role)
    }
}

/// The active one-word clue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub word: String,
    pub count: u8,
}

/// Sub-state of an active turn.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the current team's hinter to submit a clue.
    GivingClue,
    /// Clue is live; the current team's seekers vote and guess.
    Guessing,
}

/// Why the game auto-paused. Manual pauses record no reason.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PauseReason {
    /// No member of the incoming team is connected.
    TeamDisconnected,
    /// The hinter slot is empty or its occupant is disconnected.
    ClueGiverDisconnected,
    /// No connected seeker on the incoming team.
    NoGuessers,
}

/// Authoritative turn snapshot, owned by the transition functions.
///
/// Created by `start_game`, mutated only through transitions, reset wholesale
/// by `rematch`, and discarded by the caller on return-to-lobby. Every
/// transition is a synchronous function of `(&mut GameState, action)`;
/// serializing concurrent writers is the transport's job.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// The 25-card board.
    pub board: Vec<Card>,
    /// Team holding 9 cards and the first turn.
    pub starting_team: Team,
    /// Team currently giving a clue or guessing.
    pub current_team: Team,
    /// Sub-state of the active turn.
    pub turn_phase: TurnPhase,
    /// Live clue, present only while guessing.
    pub current_clue: Option<Clue>,
    /// Guesses left for the live clue (count + 1 at clue time).
    pub remaining_guesses: Option<u8>,
    pub game_started: bool,
    pub game_over: bool,
    pub winner: Option<Team>,
    pub paused: bool,
    /// Team whose missing personnel triggered an auto-pause.
    pub paused_for_team: Option<Team>,
    /// None while paused manually by the owner.
    pub pause_reason: Option<PauseReason>,
    /// Baseline for the soft turn timer; the caller compares wall-clock
    /// time against this plus the configured duration.
    pub turn_start: Option<OffsetDateTime>,
    /// Clues given so far per team, for the first-clue time bonus.
    pub clues_given: [u32; 2],
    /// Per-clue guess votes; invalidated with every clue/turn change.
    pub votes: VoteBook,
    pub config: GameConfig,
    /// 0 for the initial match, incremented per rematch; feeds board seeding.
    pub match_no: u32,
}

impl GameState {
    /// Unrevealed cards still owned by `team`.
    pub fn cards_remaining(&self, team: Team) -> usize {
        let owner = CardOwner::from(team);
        self.board
            .iter()
            .filter(|c| c.owner == owner && !c.revealed)
            .count()
    }

    pub fn all_revealed(&self, team: Team) -> bool {
        self.cards_remaining(team) == 0
    }

    /// Drop clue, guess budget, and standing votes together. Votes must never
    /// outlive the clue they were cast under.
    pub fn clear_clue_state(&mut self) {
        self.current_clue = None;
        self.remaining_guesses = None;
        self.votes.clear();
    }
}

pub fn find_player<'a>(players: &'a [Player], id: &str) -> Result<&'a Player, DomainError> {
    players
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Player, format!("no player '{id}'")))
}

pub fn require_remaining(state: &GameState, ctx: &'static str) -> Result<u8, DomainError> {
    state
        .remaining_guesses
        .ok_or_else(|| DomainError::invariant(format!("remaining_guesses must be set ({ctx})")))
}
