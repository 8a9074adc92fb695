use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::board::{assign_teams, generate_board};
use crate::domain::rules::{
    cards_for_team, BOARD_SIZE, NEUTRAL_CARDS, TRAP_CARDS,
};
use crate::domain::state::CardOwner;
use crate::domain::test_gens;
use crate::domain::test_prelude::proptest_config;

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn boards_are_always_a_unique_subset_of_the_pool(
        pool in test_gens::pool(BOARD_SIZE, 60),
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let board = generate_board(&pool, &mut rng).unwrap();

        prop_assert_eq!(board.len(), BOARD_SIZE);
        let mut sorted = board.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), BOARD_SIZE);
        for word in &board {
            prop_assert!(pool.contains(word));
        }
    }

    #[test]
    fn assignment_always_matches_the_composition(
        pool in test_gens::pool(BOARD_SIZE, 60),
        starting in test_gens::team(),
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let words = generate_board(&pool, &mut rng).unwrap();
        let cards = assign_teams(words.clone(), starting, &mut rng).unwrap();

        let count = |owner: CardOwner| cards.iter().filter(|c| c.owner == owner).count();
        prop_assert_eq!(count(starting.into()), cards_for_team(starting, starting));
        prop_assert_eq!(
            count(starting.opponent().into()),
            cards_for_team(starting.opponent(), starting)
        );
        prop_assert_eq!(count(CardOwner::Neutral), NEUTRAL_CARDS);
        prop_assert_eq!(count(CardOwner::Trap), TRAP_CARDS);

        // Assignment permutes ownership, never the words.
        let mut dealt: Vec<&String> = cards.iter().map(|c| &c.word).collect();
        let mut expected: Vec<&String> = words.iter().collect();
        dealt.sort();
        expected.sort();
        prop_assert_eq!(dealt, expected);
        prop_assert!(cards.iter().all(|c| !c.revealed));
    }

    #[test]
    fn same_seed_same_board(
        pool in test_gens::pool(BOARD_SIZE, 60),
        starting in test_gens::team(),
        seed in any::<u64>(),
    ) {
        let deal = || {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let words = generate_board(&pool, &mut rng).unwrap();
            assign_teams(words, starting, &mut rng).unwrap()
        };
        prop_assert_eq!(deal(), deal());
    }
}
