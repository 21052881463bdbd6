//! Domain layer: movement records, their catalog, queries and the text format.

mod builtin_data;
pub mod catalog;
pub mod decoder;
pub mod encoding;
pub mod exporter;
pub mod importer;
pub mod record;
pub mod shared;
pub mod types;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_builtins;
#[cfg(test)]
mod tests_catalog;
#[cfg(test)]
mod tests_decoder;
#[cfg(test)]
mod tests_importer;
#[cfg(test)]
mod tests_props_decoder;

// Re-exports for ergonomics
pub use catalog::{Catalog, DEFAULT_MOVEMENT};
pub use decoder::Decoder;
pub use encoding::EncodedMovement;
pub use exporter::{export_movement, highest_board, write_movement};
pub use importer::{
    import_dir, import_file, import_str, parse_movement, DirImport, MovementHeader,
    ParsedMovement, TableAssignment,
};
pub use record::MovementRecord;
pub use shared::SharedCatalog;
pub use types::{Board, GameInfo, MovementId, MovementShape, NsEw, Orientation, Seat};
