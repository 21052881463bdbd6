#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::MovementConfig;
pub use domain::{
    Board, Catalog, Decoder, GameInfo, MovementId, MovementRecord, MovementShape, NsEw,
    Orientation, Seat, SharedCatalog, DEFAULT_MOVEMENT,
};
pub use errors::{ConfigError, ErrorCode, ImportError, InvalidKind};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
