//! Error handling for the movement engine.

pub mod config;
pub mod error_code;
pub mod import;

pub use config::ConfigError;
pub use error_code::ErrorCode;
pub use import::{ImportError, InvalidKind};
