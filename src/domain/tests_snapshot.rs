use crate::domain::snapshot::{
    room_phase, room_phase_of, snapshot_for, PhaseView, RoomPhase,
};
use crate::domain::state::{CardOwner, Team, TurnPhase};
use crate::domain::test_state_helpers::{guessing_state, standard_roster, test_state};

fn viewer<'a>(players: &'a [crate::domain::state::Player], id: &str) -> &'a crate::domain::state::Player {
    players.iter().find(|p| p.id == id).unwrap()
}

#[test]
fn seekers_see_ownership_only_on_revealed_cards() {
    let players = standard_roster();
    let mut state = guessing_state(Team::Red, 2);
    state.board[0].revealed = true;
    state.board[0].revealed_by = Some("bo".into());

    let snap = snapshot_for(&state, Some(viewer(&players, "bo")));
    assert_eq!(snap.board[0].owner, Some(CardOwner::Red));
    assert_eq!(snap.board[0].revealed_by.as_deref(), Some("bo"));
    assert!(snap.board.iter().skip(1).all(|c| c.owner.is_none()));
    // Words are always visible.
    assert!(snap.board.iter().all(|c| !c.word.is_empty()));
}

#[test]
fn spectators_get_the_seeker_view() {
    let players = standard_roster();
    let state = guessing_state(Team::Red, 2);
    let snap = snapshot_for(&state, Some(viewer(&players, "zoe")));
    assert!(snap.board.iter().all(|c| c.owner.is_none()));
    let anon = snapshot_for(&state, None);
    assert_eq!(anon.board, snap.board);
}

#[test]
fn hinters_see_every_owner() {
    let players = standard_roster();
    let state = guessing_state(Team::Red, 2);
    let snap = snapshot_for(&state, Some(viewer(&players, "cy")));
    assert!(snap.board.iter().all(|c| c.owner.is_some()));
    assert_eq!(snap.board[24].owner, Some(CardOwner::Trap));
}

#[test]
fn game_over_reveals_the_board_to_everyone() {
    let players = standard_roster();
    let mut state = guessing_state(Team::Red, 2);
    state.game_over = true;
    state.winner = Some(Team::Blue);

    let snap = snapshot_for(&state, Some(viewer(&players, "bo")));
    assert!(snap.board.iter().all(|c| c.owner.is_some()));
    assert_eq!(
        snap.phase,
        PhaseView::GameOver(crate::domain::snapshot::GameOverView {
            winner: Some(Team::Blue)
        })
    );
}

#[test]
fn active_phase_carries_the_turn_view() {
    let state = guessing_state(Team::Red, 2);
    let snap = snapshot_for(&state, None);
    match snap.phase {
        PhaseView::Active(turn) => {
            assert_eq!(turn.team, Team::Red);
            assert_eq!(turn.phase, TurnPhase::Guessing);
            assert_eq!(turn.clue.unwrap().word, "PLANET");
            assert_eq!(turn.remaining_guesses, Some(3));
            assert!(turn.deadline.is_some());
        }
        other => panic!("expected active phase, got {other:?}"),
    }
}

#[test]
fn paused_phase_wraps_the_frozen_turn() {
    let mut state = guessing_state(Team::Red, 2);
    state.paused = true;
    state.paused_for_team = Some(Team::Red);
    state.pause_reason = Some(crate::domain::state::PauseReason::NoGuessers);

    let snap = snapshot_for(&state, None);
    match snap.phase {
        PhaseView::Paused(view) => {
            assert_eq!(view.for_team, Some(Team::Red));
            assert_eq!(
                view.reason,
                Some(crate::domain::state::PauseReason::NoGuessers)
            );
            assert_eq!(view.turn.team, Team::Red);
            // The clock is stopped while paused.
            assert_eq!(view.turn.deadline, None);
        }
        other => panic!("expected paused phase, got {other:?}"),
    }
}

#[test]
fn cards_remaining_counts_unrevealed_per_team() {
    let mut state = guessing_state(Team::Red, 2);
    state.board[0].revealed = true;
    state.board[9].revealed = true;
    state.board[10].revealed = true;
    let snap = snapshot_for(&state, None);
    assert_eq!(snap.cards_remaining, [8, 6]);
}

#[test]
fn room_phase_maps_every_state() {
    let mut state = test_state(Team::Red);
    assert_eq!(room_phase(&state), RoomPhase::Active);
    state.paused = true;
    assert_eq!(room_phase(&state), RoomPhase::Paused);
    state.paused = false;
    state.game_over = true;
    assert_eq!(room_phase(&state), RoomPhase::GameOver);
    state.game_started = false;
    state.game_over = false;
    assert_eq!(room_phase(&state), RoomPhase::Lobby);

    assert_eq!(room_phase_of(None), RoomPhase::Lobby);
    let state = test_state(Team::Red);
    assert_eq!(room_phase_of(Some(&state)), RoomPhase::Active);
}

#[test]
fn snapshot_serializes_with_an_adjacent_phase_tag() {
    let state = guessing_state(Team::Red, 2);
    let json = serde_json::to_value(snapshot_for(&state, None)).unwrap();
    assert_eq!(json["phase"]["phase"], "Active");
    assert_eq!(json["phase"]["data"]["clue"]["word"], "PLANET");
    // Hidden owners are omitted from the wire form entirely.
    assert!(json["board"][0].get("owner").is_none());
}
