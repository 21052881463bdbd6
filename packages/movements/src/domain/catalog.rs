//! Registry of known movements.
//!
//! Entries keep the slot they were registered in for as long as they live. A
//! replacing registration empties the old slot and appends the new record, so
//! an id never changes meaning to a different live movement.

use std::sync::Arc;

use tracing::{info, warn};

use super::encoding::BUILTIN_RECORDS;
use super::record::MovementRecord;
use super::types::MovementId;

/// Movement a new session starts with.
pub const DEFAULT_MOVEMENT: &str = "6multi14";

/// Ordered, named registry of movement records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    slots: Vec<Option<Arc<MovementRecord>>>,
}

impl Catalog {
    /// A catalog with no movements at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A catalog holding every built-in movement, in built-in order.
    pub fn with_builtins() -> Self {
        Self {
            slots: BUILTIN_RECORDS.iter().cloned().map(Some).collect(),
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The record registered under `id`, if that entry is still live.
    pub fn get(&self, id: MovementId) -> Option<&Arc<MovementRecord>> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    /// Live entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (MovementId, &MovementRecord)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_deref().map(|record| (id, record)))
    }

    /// First live entry with exactly this name.
    pub fn find_by_name(&self, name: &str) -> Option<MovementId> {
        self.iter()
            .find(|(_, record)| record.name() == name)
            .map(|(id, _)| id)
    }

    pub fn name_of(&self, id: MovementId) -> Option<&str> {
        self.get(id).map(|record| record.name())
    }

    /// Every movement with exactly `rounds` rounds for `pairs` pairs.
    pub fn find_by_shape(&self, rounds: u32, pairs: u32) -> Vec<MovementId> {
        self.find_by_shape_named(rounds, pairs)
            .into_iter()
            .map(|(id, _)| id)
            .collect()
    }

    /// Same as [`Catalog::find_by_shape`], with the matching names.
    pub fn find_by_shape_named(&self, rounds: u32, pairs: u32) -> Vec<(MovementId, &str)> {
        self.iter()
            .filter(|(_, record)| record.rounds() == rounds && record.pairs() == pairs)
            .map(|(id, record)| (id, record.name()))
            .collect()
    }

    /// Largest round count of any registered movement, `0` when empty.
    pub fn max_rounds(&self) -> u32 {
        self.iter()
            .map(|(_, record)| record.rounds())
            .max()
            .unwrap_or(0)
    }

    /// Id of [`DEFAULT_MOVEMENT`], if registered.
    pub fn default_id(&self) -> Option<MovementId> {
        self.find_by_name(DEFAULT_MOVEMENT)
    }

    /// Add a movement and return its new id.
    ///
    /// With `replace_duplicates`, a live entry with the same name is removed
    /// first; its id is not reused and the new record always lands at the end.
    pub fn register(&mut self, record: MovementRecord, replace_duplicates: bool) -> MovementId {
        if let Some(existing) = self.find_by_name(record.name()) {
            if replace_duplicates {
                warn!(
                    movement = record.name(),
                    replaced_id = existing,
                    "Replacing movement with the same name"
                );
                self.slots[existing] = None;
            } else {
                warn!(
                    movement = record.name(),
                    existing_id = existing,
                    "Registering a second movement with the same name"
                );
            }
        }

        let id = self.slots.len();
        let shape = record.shape();
        info!(
            movement = record.name(),
            id,
            rounds = shape.rounds,
            tables = shape.tables,
            pairs = shape.pairs,
            "Registered movement"
        );
        self.slots.push(Some(Arc::new(record)));
        id
    }
}
