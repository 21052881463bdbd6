//! Errors surfaced by the command-line tool.

use std::io;
use std::path::PathBuf;

use movements::{ConfigError, ImportError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("no movement named '{0}'")]
    UnknownMovement(String),

    #[error("{what} {value} is outside 1..={max} for movement '{movement}'")]
    OutOfRange {
        what: &'static str,
        value: u32,
        max: u32,
        movement: String,
    },

    #[error("--save needs {} to be set", movements::config::MOVEMENT_DIR_VAR)]
    NoMovementDir,

    #[error("{} already lives in the movement folder", .0.display())]
    AlreadySaved(PathBuf),

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot encode output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(err) => err.code().as_str(),
            Self::Import(err) => err.code().as_str(),
            Self::UnknownMovement(_) => "UNKNOWN_MOVEMENT",
            Self::OutOfRange { .. } => "OUT_OF_RANGE",
            Self::NoMovementDir => "CONFIG_ERROR",
            Self::AlreadySaved(_) => "ALREADY_SAVED",
            Self::Write { .. } => "WRITE_FAILED",
            Self::Json(_) => "OUTPUT_FAILED",
        }
    }
}
