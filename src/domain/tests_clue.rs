use crate::domain::clue::{give_clue, plural_variant_of, validate_clue};
use crate::domain::state::{Team, TurnPhase};
use crate::domain::test_state_helpers::{now, standard_roster, test_state};
use crate::errors::domain::{DomainError, PermissionKind, PreconditionKind, ValidationKind};

fn board(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn kind_of(err: DomainError) -> ValidationKind {
    match err {
        DomainError::Validation(kind, _) => kind,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn rejects_non_word_input() {
    let b = board(&["CRANE"]);
    assert_eq!(kind_of(validate_clue("", &b).unwrap_err()), ValidationKind::InvalidFormat);
    assert_eq!(
        kind_of(validate_clue("two words", &b).unwrap_err()),
        ValidationKind::InvalidFormat
    );
    assert_eq!(
        kind_of(validate_clue("abc123", &b).unwrap_err()),
        ValidationKind::InvalidFormat
    );
    assert_eq!(
        kind_of(validate_clue("semi-colon", &b).unwrap_err()),
        ValidationKind::InvalidFormat
    );
}

#[test]
fn rejects_blocklisted_words() {
    let b = board(&["CRANE"]);
    assert_eq!(
        kind_of(validate_clue("damn", &b).unwrap_err()),
        ValidationKind::InvalidFormat
    );
}

#[test]
fn rejects_exact_match_case_insensitively() {
    let b = board(&["CRANE", "BRIDGE"]);
    assert_eq!(
        kind_of(validate_clue("crane", &b).unwrap_err()),
        ValidationKind::ExactMatch
    );
    assert_eq!(
        kind_of(validate_clue("Bridge", &b).unwrap_err()),
        ValidationKind::ExactMatch
    );
}

#[test]
fn rejects_clue_contained_in_board_word() {
    let b = board(&["FARMER"]);
    assert_eq!(
        kind_of(validate_clue("farm", &b).unwrap_err()),
        ValidationKind::AffixCollision
    );
}

#[test]
fn rejects_board_word_contained_in_clue() {
    let b = board(&["FARM"]);
    assert_eq!(
        kind_of(validate_clue("farmer", &b).unwrap_err()),
        ValidationKind::AffixCollision
    );
}

#[test]
fn containment_is_symmetric_even_mid_word() {
    // "war" sits inside "DWARF"; the containment rule cuts both ways.
    let b = board(&["DWARF"]);
    assert_eq!(
        kind_of(validate_clue("war", &b).unwrap_err()),
        ValidationKind::AffixCollision
    );
}

#[test]
fn accepts_unrelated_clue() {
    let b = board(&["DWARF", "FARMER", "CRANE"]);
    assert!(validate_clue("ocean", &b).is_ok());
    assert!(validate_clue("Breeze", &b).is_ok());
}

#[test]
fn simple_plurals_collide_as_affixes_first() {
    // Plural pairs always overlap as substrings, so the containment check
    // fires before the plural check; order matters.
    let b = board(&["FARM"]);
    assert_eq!(
        kind_of(validate_clue("farms", &b).unwrap_err()),
        ValidationKind::AffixCollision
    );
}

#[test]
fn plural_variant_detection() {
    assert!(plural_variant_of("CRANE", "CRANES"));
    assert!(plural_variant_of("BOX", "BOXES"));
    assert!(plural_variant_of("CRANES", "CRANE"));
    assert!(plural_variant_of("BOXES", "BOX"));
    assert!(!plural_variant_of("CRANE", "CRANE"));
    assert!(!plural_variant_of("GOOSE", "GEESE"));
}

#[test]
fn give_clue_sets_budget_to_count_plus_one() {
    let mut state = test_state(Team::Red);
    let players = standard_roster();
    give_clue(&mut state, &players, "ana", "ocean", 3, now()).unwrap();
    assert_eq!(state.remaining_guesses, Some(4));
    assert_eq!(state.turn_phase, TurnPhase::Guessing);
    assert_eq!(state.current_clue.as_ref().unwrap().word, "OCEAN");
    assert_eq!(state.clues_given[Team::Red.index()], 1);
}

#[test]
fn give_clue_rejects_wrong_actor() {
    let players = standard_roster();

    // Blue's hinter is not on the current team.
    let mut state = test_state(Team::Red);
    let err = give_clue(&mut state, &players, "cy", "ocean", 2, now()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Permission(PermissionKind::WrongTeam, _)
    ));

    // A seeker on the current team is still not the hinter.
    let err = give_clue(&mut state, &players, "bo", "ocean", 2, now()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Permission(PermissionKind::NotHinter, _)
    ));
}

#[test]
fn give_clue_rejects_out_of_phase_and_paused() {
    let players = standard_roster();

    let mut state = test_state(Team::Red);
    give_clue(&mut state, &players, "ana", "ocean", 2, now()).unwrap();
    let err = give_clue(&mut state, &players, "ana", "breeze", 1, now()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Precondition(PreconditionKind::PhaseMismatch, _)
    ));

    let mut state = test_state(Team::Red);
    state.paused = true;
    let err = give_clue(&mut state, &players, "ana", "ocean", 2, now()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Precondition(PreconditionKind::GamePaused, _)
    ));
}

#[test]
fn give_clue_rejects_bad_count() {
    let players = standard_roster();
    let mut state = test_state(Team::Red);
    for count in [0u8, 10] {
        let err = give_clue(&mut state, &players, "ana", "ocean", count, now()).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::InvalidCount, _)
        ));
    }
}

#[test]
fn give_clue_rejects_board_collision() {
    let players = standard_roster();
    let mut state = test_state(Team::Red);
    // "HARP" is on the test board.
    let err = give_clue(&mut state, &players, "ana", "harp", 2, now()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::ExactMatch, _)
    ));
    assert_eq!(state.turn_phase, TurnPhase::GivingClue);
    assert_eq!(state.current_clue, None);
}
