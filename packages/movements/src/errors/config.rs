use std::path::PathBuf;

use thiserror::Error;

use super::error_code::ErrorCode;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("movement folder '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("environment variable '{0}' must not be blank")]
    Blank(&'static str),
}

impl ConfigError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ConfigError
    }
}
