//! Exhaustive consistency checks over every built-in movement.

use std::collections::HashSet;

use super::builtin_data::BUILTIN_MOVEMENTS;
use crate::domain::{Board, Catalog, Decoder, Seat};

fn builtin_decoders() -> Vec<Decoder> {
    let catalog = Catalog::with_builtins();
    catalog
        .iter()
        .map(|(id, _)| Decoder::from_id(&catalog, id))
        .collect()
}

#[test]
fn names_are_unique() {
    let mut seen = HashSet::new();
    for encoded in BUILTIN_MOVEMENTS {
        assert!(seen.insert(encoded.name), "duplicate movement {}", encoded.name);
    }
    assert_eq!(seen.len(), 161);
}

#[test]
fn every_table_occupant_sits_where_the_table_says() {
    for decoder in builtin_decoders() {
        for round in 1..=decoder.rounds() {
            for table in 1..=decoder.tables() {
                let pairs = decoder.pairs_at(round, table);
                if pairs.is_empty() {
                    continue;
                }
                assert_ne!(pairs.ns, 0, "{} r{round} t{table}", decoder.name());
                assert_ne!(pairs.ew, 0, "{} r{round} t{table}", decoder.name());
                assert_eq!(decoder.table_of(pairs.ns, round), table);
                assert!(decoder.is_north_south(pairs.ns, round));
                assert_eq!(decoder.table_of(pairs.ew, round), table);
                assert!(!decoder.is_north_south(pairs.ew, round));
            }
        }
    }
}

#[test]
fn borrowed_boards_never_chain() {
    for decoder in builtin_decoders() {
        let record = decoder.record().unwrap();
        for round in 1..=decoder.rounds() {
            for table in 1..=decoder.tables() {
                if let Board::Borrowed(lender) = record.board(table, round) {
                    assert_ne!(lender, table, "{} r{round} t{table}", decoder.name());
                    assert!(lender <= decoder.tables());
                    assert!(
                        matches!(record.board(lender, round), Board::Own(_)),
                        "{} r{round} t{table} borrows from a borrower",
                        decoder.name()
                    );
                }
            }
        }
    }
}

#[test]
fn seated_tables_exist() {
    for decoder in builtin_decoders() {
        for round in 1..=decoder.rounds() {
            for pair in 1..=decoder.pairs() {
                if let Seat::Sitting { table, .. } = decoder.seat_of(pair, round) {
                    assert!(
                        (1..=decoder.tables()).contains(&table),
                        "{} pair {pair} r{round} at table {table}",
                        decoder.name()
                    );
                }
            }
        }
    }
}

#[test]
fn each_round_seats_a_pair_at_most_once() {
    for decoder in builtin_decoders() {
        for round in 1..=decoder.rounds() {
            let mut seated = HashSet::new();
            for game in decoder.round_info(round, false) {
                assert!(seated.insert(game.pairs.ns), "{} r{round}", decoder.name());
                assert!(seated.insert(game.pairs.ew), "{} r{round}", decoder.name());
            }
        }
    }
}

#[test]
fn only_thirteen_pair_stayman_has_sit_outs() {
    let with_sit_outs: Vec<String> = builtin_decoders()
        .into_iter()
        .filter(|decoder| {
            (1..=decoder.rounds()).any(|round| {
                (1..=decoder.pairs()).any(|pair| decoder.table_of(pair, round) == 0)
            })
        })
        .map(|decoder| decoder.name().to_string())
        .collect();
    assert_eq!(with_sit_outs, vec!["6stayr13", "6stayr13.1-5"]);
}
