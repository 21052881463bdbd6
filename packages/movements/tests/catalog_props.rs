//! Property tests over the built-in movements.
//!
//! Inputs are drawn from real catalog entries so every generated round,
//! table and pair is in range by construction.

mod common;

use movements::domain::importer::{MAX_BOARDS, MAX_ROUNDS, MAX_TABLES};
use movements::domain::{export_movement, highest_board, parse_movement};
use movements::{Catalog, Decoder, MovementShape};
use movements_test_support::proptest_prelude::proptest_prelude_config;
use once_cell::sync::Lazy;
use proptest::prelude::*;

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::with_builtins);

fn movement_id() -> impl Strategy<Value = usize> {
    0..CATALOG.len()
}

/// Ids whose exported text stays within the importer's limits.
fn importable_id() -> impl Strategy<Value = usize> {
    let ids: Vec<usize> = (0..CATALOG.len())
        .filter(|&id| {
            let d = Decoder::from_id(&CATALOG, id);
            d.rounds() <= MAX_ROUNDS && d.tables() <= MAX_TABLES && highest_board(&d) <= MAX_BOARDS
        })
        .collect();
    proptest::sample::select(ids)
}

fn id_and_round() -> impl Strategy<Value = (usize, u32)> {
    movement_id().prop_flat_map(|id| {
        let rounds = CATALOG.get(id).map_or(1, |r| r.rounds());
        (Just(id), 1..=rounds)
    })
}

fn id_and_board() -> impl Strategy<Value = (usize, u32)> {
    movement_id().prop_flat_map(|id| {
        let tables = CATALOG.get(id).map_or(1, |r| r.tables());
        (Just(id), 1..=tables)
    })
}

proptest! {
    #![proptest_config(proptest_prelude_config())]

    /// Property: a round plays every seated pair exactly once.
    #[test]
    fn prop_round_seats_each_pair_once((id, round) in id_and_round()) {
        let d = Decoder::from_id(&CATALOG, id);
        let mut seen = vec![false; d.pairs() as usize + 1];
        for game in d.round_info(round, false) {
            for pair in [game.pairs.ns, game.pairs.ew] {
                prop_assert!(!seen[pair as usize], "pair {} twice", pair);
                seen[pair as usize] = true;
            }
        }
        for pair in 1..=d.pairs() {
            prop_assert_eq!(seen[pair as usize], d.table_of(pair, round) != 0);
        }
    }

    /// Property: round_info ordering modes return the same games.
    #[test]
    fn prop_orderings_agree((id, round) in id_and_round()) {
        let d = Decoder::from_id(&CATALOG, id);
        let mut by_board = d.round_info(round, true);
        let by_ns = d.round_info(round, false);
        prop_assert!(by_board.windows(2).all(|w| (w[0].board, w[0].pairs.ns) <= (w[1].board, w[1].pairs.ns)));
        prop_assert!(by_ns.windows(2).all(|w| w[0].pairs.ns < w[1].pairs.ns));
        by_board.sort_by_key(|g| g.pairs.ns);
        prop_assert_eq!(by_board, by_ns);
    }

    /// Property: board_info lists exactly the games that play the board.
    #[test]
    fn prop_board_info_matches_rounds((id, board) in id_and_board()) {
        let d = Decoder::from_id(&CATALOG, id);
        let expected = (1..=d.rounds())
            .flat_map(|round| d.round_info(round, false))
            .filter(|g| g.board == board)
            .count();
        let games = d.board_info(board);
        prop_assert_eq!(games.len(), expected);
        prop_assert!(games.iter().all(|g| g.board == board));
    }

    /// Property: an exported movement within import limits parses back to its shape.
    #[test]
    fn prop_export_parses_back(id in importable_id()) {
        let d = Decoder::from_id(&CATALOG, id);
        let parsed = parse_movement(&export_movement(&d).unwrap()).unwrap();
        let record = parsed.into_record();
        prop_assert_eq!(record.shape(), MovementShape::new(d.rounds(), d.tables(), d.pairs()));
        prop_assert_eq!(record.name(), d.name());
    }
}
