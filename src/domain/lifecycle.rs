//! Game lifecycle transitions: start, pause, resume, end, rematch.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use time::OffsetDateTime;

use crate::domain::board::{assign_teams, generate_board};
use crate::domain::config::{GameConfig, StartingTeamRule};
use crate::domain::presence::team_readiness;
use crate::domain::rules::MIN_PLAYERS;
use crate::domain::seeding::derive_board_seed;
use crate::domain::state::{find_player, Card, GameState, Player, Team, TurnPhase};
use crate::domain::words;
use crate::errors::domain::{DomainError, PermissionKind, PreconditionKind};

/// Start a new game. Owner-only; requires at least four assigned players
/// across both teams. Generates the board and hands the first turn to the
/// starting team, auto-pausing immediately if that team is short-handed.
pub fn start_game(
    config: GameConfig,
    players: &[Player],
    actor: &str,
    now: OffsetDateTime,
) -> Result<GameState, DomainError> {
    require_owner(players, actor)?;

    let assigned = players.iter().filter(|p| p.team.is_some()).count();
    if assigned < MIN_PLAYERS {
        return Err(DomainError::precondition(
            PreconditionKind::NotEnoughPlayers,
            format!("need {MIN_PLAYERS} assigned players, have {assigned}"),
        ));
    }

    let (board, starting_team) = build_board(&config, 0)?;

    let mut state = GameState {
        board,
        starting_team,
        current_team: starting_team,
        turn_phase: TurnPhase::GivingClue,
        current_clue: None,
        remaining_guesses: None,
        game_started: true,
        game_over: false,
        winner: None,
        paused: false,
        paused_for_team: None,
        pause_reason: None,
        turn_start: Some(now),
        clues_given: [0, 0],
        votes: Default::default(),
        config,
        match_no: 0,
    };

    auto_pause_check(&mut state, players);
    tracing::info!(starting_team = ?starting_team, "game started");
    Ok(state)
}

/// Manual pause by the room owner. Records no reason.
pub fn pause_game(
    state: &mut GameState,
    players: &[Player],
    actor: &str,
) -> Result<(), DomainError> {
    require_owner(players, actor)?;
    if state.game_over {
        return Err(DomainError::precondition(
            PreconditionKind::GameOver,
            "game is over",
        ));
    }
    if state.paused {
        return Err(DomainError::precondition(
            PreconditionKind::PhaseMismatch,
            "game is already paused",
        ));
    }
    state.paused = true;
    state.paused_for_team = None;
    state.pause_reason = None;
    tracing::info!("game paused by owner");
    Ok(())
}

/// Resume a paused game. Owner-only. The team about to play must have a
/// connected hinter and a connected seeker at call time, whatever the state
/// was when the pause began.
pub fn resume_game(
    state: &mut GameState,
    players: &[Player],
    actor: &str,
    now: OffsetDateTime,
) -> Result<(), DomainError> {
    require_owner(players, actor)?;
    if !state.paused {
        return Err(DomainError::precondition(
            PreconditionKind::PhaseMismatch,
            "game is not paused",
        ));
    }

    let team = state.paused_for_team.unwrap_or(state.current_team);
    if let Some(reason) = team_readiness(players, team) {
        return Err(DomainError::precondition(
            PreconditionKind::RolesNotFilled,
            format!("{team:?} cannot play yet: {reason:?}"),
        ));
    }

    state.paused = false;
    state.paused_for_team = None;
    state.pause_reason = None;
    state.turn_start = Some(now);
    tracing::info!(team = ?team, "game resumed");
    Ok(())
}

/// Abort the game without a winner. Owner-only; the room returns to lobby
/// semantics on the caller's side.
pub fn end_game(state: &mut GameState, players: &[Player], actor: &str) -> Result<(), DomainError> {
    require_owner(players, actor)?;
    if state.game_over {
        return Err(DomainError::precondition(
            PreconditionKind::GameOver,
            "game is already over",
        ));
    }
    state.game_over = true;
    state.winner = None;
    state.paused = false;
    state.paused_for_team = None;
    state.pause_reason = None;
    state.clear_clue_state();
    state.turn_start = None;
    tracing::info!("game ended by owner");
    Ok(())
}

/// Start the next match with a fresh board and reset turn state. Owner-only,
/// only once the previous game is over. Team/role assignments are left to
/// the roster layer.
pub fn rematch(
    state: &mut GameState,
    players: &[Player],
    actor: &str,
    now: OffsetDateTime,
) -> Result<(), DomainError> {
    require_owner(players, actor)?;
    if !state.game_over {
        return Err(DomainError::precondition(
            PreconditionKind::PhaseMismatch,
            "rematch requires a finished game",
        ));
    }

    let match_no = state.match_no + 1;
    let (board, starting_team) = build_board(&state.config, match_no)?;

    state.board = board;
    state.starting_team = starting_team;
    state.current_team = starting_team;
    state.turn_phase = TurnPhase::GivingClue;
    state.game_over = false;
    state.winner = None;
    state.paused = false;
    state.paused_for_team = None;
    state.pause_reason = None;
    state.clues_given = [0, 0];
    state.clear_clue_state();
    state.turn_start = Some(now);
    state.match_no = match_no;

    auto_pause_check(state, players);
    tracing::info!(match_no, starting_team = ?starting_team, "rematch started");
    Ok(())
}

/// Turn-boundary connectivity gate: if the incoming team cannot play, force
/// the paused sub-state with the computed reason. Runs only where the
/// current team changes, never on a timer.
pub(crate) fn auto_pause_check(state: &mut GameState, players: &[Player]) {
    if state.game_over || state.paused {
        return;
    }
    if let Some(reason) = team_readiness(players, state.current_team) {
        state.paused = true;
        state.paused_for_team = Some(state.current_team);
        state.pause_reason = Some(reason);
        tracing::info!(team = ?state.current_team, reason = ?reason, "auto-paused");
    }
}

fn build_board(config: &GameConfig, match_no: u32) -> Result<(Vec<Card>, Team), DomainError> {
    let pool = words::combined_pool(&config.packs)?;
    let mut rng = ChaCha8Rng::seed_from_u64(derive_board_seed(config.rng_seed, match_no));
    let starting_team = match config.starting_team {
        StartingTeamRule::Fixed(team) => team,
        StartingTeamRule::Random => {
            if rng.random::<bool>() {
                Team::Red
            } else {
                Team::Blue
            }
        }
    };
    let board_words = generate_board(&pool, &mut rng)?;
    let board = assign_teams(board_words, starting_team, &mut rng)?;
    Ok((board, starting_team))
}

fn require_owner(players: &[Player], actor: &str) -> Result<(), DomainError> {
    let caller = find_player(players, actor)?;
    if !caller.is_owner {
        return Err(DomainError::permission(
            PermissionKind::NotOwner,
            "only the room owner may do this",
        ));
    }
    Ok(())
}
