// Proptest generators over the built-in movements.
// Every generated index is valid for the movement it belongs to.

use proptest::prelude::*;

use super::encoding::BUILTIN_RECORDS;
use super::types::MovementId;

/// Id of a built-in movement in a fresh `Catalog::with_builtins()`.
pub fn builtin_id() -> impl Strategy<Value = MovementId> {
    0..BUILTIN_RECORDS.len()
}

/// A built-in movement and one of its rounds.
pub fn id_and_round() -> impl Strategy<Value = (MovementId, u32)> {
    builtin_id().prop_flat_map(|id| {
        let rounds = BUILTIN_RECORDS[id].rounds();
        (Just(id), 1..=rounds)
    })
}

/// A built-in movement, one of its rounds and one of its pairs.
pub fn id_round_pair() -> impl Strategy<Value = (MovementId, u32, u32)> {
    id_and_round().prop_flat_map(|(id, round)| {
        let pairs = BUILTIN_RECORDS[id].pairs();
        (Just(id), Just(round), 1..=pairs)
    })
}

/// A built-in movement, one of its rounds and one of its tables.
pub fn id_round_table() -> impl Strategy<Value = (MovementId, u32, u32)> {
    id_and_round().prop_flat_map(|(id, round)| {
        let tables = BUILTIN_RECORDS[id].tables();
        (Just(id), Just(round), 1..=tables)
    })
}

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(128);
    ProptestConfig {
        cases,
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}
