//! Property tests over the full dimension range.

use proptest::prelude::*;

use memory_board::{get_unique_cards, validate_dimensions, BoardError, BoardGenerator, CardId};

fn valid_dimensions() -> impl Strategy<Value = (i64, i64)> {
    (1i64..=6, 1i64..=6).prop_filter("one side must be even", |(r, c)| r % 2 == 0 || c % 2 == 0)
}

proptest! {
    #[test]
    fn prop_valid_boards_pair_every_card(
        (rows, columns) in valid_dimensions(),
        seed in any::<u64>()
    ) {
        let game = BoardGenerator::new(seed).create_game(rows, columns).unwrap();

        prop_assert_eq!(game.board.rows() as i64, rows);
        prop_assert_eq!(game.board.columns() as i64, columns);
        prop_assert_eq!(game.unique_cards.len() as i64, rows * columns / 2);

        let mut cells: Vec<CardId> = game.board.cells().collect();
        cells.sort();
        let mut expected = [game.unique_cards.clone(), game.unique_cards.clone()].concat();
        expected.sort();
        prop_assert_eq!(cells, expected);
    }

    #[test]
    fn prop_validation_matches_rules(rows in -10i64..=10, columns in -10i64..=10) {
        let in_range = (1..=6).contains(&rows) && (1..=6).contains(&columns);
        let one_even = rows % 2 == 0 || columns % 2 == 0;
        prop_assert_eq!(validate_dimensions(rows, columns).is_ok(), in_range && one_even);
    }

    #[test]
    fn prop_errors_are_user_errors(
        rows in any::<i64>(),
        columns in any::<i64>(),
        seed in any::<u64>()
    ) {
        if let Err(err) = BoardGenerator::new(seed).create_game(rows, columns) {
            prop_assert!(matches!(err, BoardError::InvalidDimensions(_)));
        }
    }

    #[test]
    fn prop_unique_cards_are_dense(count in -5i64..64) {
        let cards = get_unique_cards(count);
        prop_assert_eq!(cards.len() as i64, count.max(0));
        for (i, card) in cards.iter().enumerate() {
            prop_assert_eq!(card.raw() as usize, i);
        }
    }

    #[test]
    fn prop_seed_reproduces_board((rows, columns) in valid_dimensions(), seed in any::<u64>()) {
        let first = BoardGenerator::new(seed).create_game(rows, columns).unwrap();
        let second = BoardGenerator::new(seed).create_game(rows, columns).unwrap();
        prop_assert_eq!(first, second);
    }
}
