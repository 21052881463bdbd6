//! Property-based tests for decoder consistency over the built-in movements.

use proptest::prelude::*;

use crate::domain::{test_gens, Catalog, Decoder, Seat};

proptest! {
    #![proptest_config(test_gens::proptest_config())]

    /// Property: a seated pair is found at its table, on its side.
    #[test]
    fn prop_seat_and_table_occupants_agree(
        (id, round, pair) in test_gens::id_round_pair(),
    ) {
        let decoder = Decoder::from_id(&Catalog::with_builtins(), id);
        match decoder.seat_of(pair, round) {
            Seat::NotScheduled => {
                prop_assert_eq!(decoder.table_of(pair, round), 0);
                prop_assert_eq!(decoder.opponent_of(pair, round), 0);
            }
            Seat::Sitting { table, .. } => {
                let at_table = decoder.pairs_at(round, table);
                if decoder.is_north_south(pair, round) {
                    prop_assert_eq!(at_table.ns, pair);
                } else {
                    prop_assert_eq!(at_table.ew, pair);
                }
            }
        }
    }

    /// Property: opponents are mutual.
    #[test]
    fn prop_opponent_is_symmetric(
        (id, round, pair) in test_gens::id_round_pair(),
    ) {
        let decoder = Decoder::from_id(&Catalog::with_builtins(), id);
        let opponent = decoder.opponent_of(pair, round);
        if opponent != 0 {
            prop_assert_ne!(opponent, pair);
            prop_assert_eq!(decoder.opponent_of(opponent, round), pair);
            prop_assert_eq!(decoder.table_of(opponent, round), decoder.table_of(pair, round));
            prop_assert_ne!(
                decoder.is_north_south(opponent, round),
                decoder.is_north_south(pair, round)
            );
        }
    }

    /// Property: borrows resolve in one hop to the lender's board.
    #[test]
    fn prop_borrow_is_single_hop(
        (id, round, table) in test_gens::id_round_table(),
    ) {
        let decoder = Decoder::from_id(&Catalog::with_builtins(), id);
        let lender = decoder.borrowed_from(table, round);
        if lender != 0 {
            prop_assert_ne!(lender, table);
            prop_assert_eq!(decoder.borrowed_from(lender, round), 0);
            prop_assert_eq!(decoder.board_at(table, round), decoder.board_at(lender, round));
        }
    }

    /// Property: a table has both seats filled or none.
    #[test]
    fn prop_table_is_full_or_idle(
        (id, round, table) in test_gens::id_round_table(),
    ) {
        let decoder = Decoder::from_id(&Catalog::with_builtins(), id);
        let pairs = decoder.pairs_at(round, table);
        prop_assert_eq!(pairs.ns == 0, pairs.ew == 0);
        prop_assert_eq!(decoder.table_round_info(table, round).is_some(), pairs.ns != 0);
    }
}
