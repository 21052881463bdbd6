//! Movement configuration loaded from environment variables.
//!
//! - `MOVEMENT_DIR`: folder holding previously imported movement files
//!   (`*.asc`), loaded at startup. Optional; must be a directory when set.
//! - `MOVEMENT_DEFAULT`: name of the movement a new session starts with.
//!   Defaults to [`DEFAULT_MOVEMENT`].

use std::env;
use std::path::PathBuf;

use crate::domain::DEFAULT_MOVEMENT;
use crate::errors::ConfigError;

pub const MOVEMENT_DIR_VAR: &str = "MOVEMENT_DIR";
pub const MOVEMENT_DEFAULT_VAR: &str = "MOVEMENT_DEFAULT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementConfig {
    pub movement_dir: Option<PathBuf>,
    pub default_movement: String,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            movement_dir: None,
            default_movement: DEFAULT_MOVEMENT.to_string(),
        }
    }
}

impl MovementConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            movement_dir: movement_dir()?,
            default_movement: default_movement()?,
        })
    }
}

fn movement_dir() -> Result<Option<PathBuf>, ConfigError> {
    let Some(value) = non_empty_var(MOVEMENT_DIR_VAR) else {
        return Ok(None);
    };
    let dir = PathBuf::from(value);
    if !dir.is_dir() {
        return Err(ConfigError::NotADirectory(dir));
    }
    Ok(Some(dir))
}

fn default_movement() -> Result<String, ConfigError> {
    match env::var(MOVEMENT_DEFAULT_VAR) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::Blank(MOVEMENT_DEFAULT_VAR)),
        Ok(value) => Ok(value),
        Err(_) => Ok(DEFAULT_MOVEMENT.to_string()),
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::*;

    fn clear_env() {
        env::remove_var(MOVEMENT_DIR_VAR);
        env::remove_var(MOVEMENT_DEFAULT_VAR);
    }

    #[test]
    #[serial]
    fn defaults_when_unset() {
        clear_env();
        let cfg = MovementConfig::from_env().unwrap();
        assert_eq!(cfg, MovementConfig::default());
        assert_eq!(cfg.default_movement, "6multi14");
        assert!(cfg.movement_dir.is_none());
    }

    #[test]
    #[serial]
    fn reads_existing_folder_and_default_name() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        env::set_var(MOVEMENT_DIR_VAR, dir.path());
        env::set_var(MOVEMENT_DEFAULT_VAR, "7multi16");

        let cfg = MovementConfig::from_env().unwrap();
        assert_eq!(cfg.movement_dir.as_deref(), Some(dir.path()));
        assert_eq!(cfg.default_movement, "7multi16");
        clear_env();
    }

    #[test]
    #[serial]
    fn rejects_missing_folder() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        env::set_var(MOVEMENT_DIR_VAR, &missing);

        let err = MovementConfig::from_env().unwrap_err();
        assert_eq!(err, ConfigError::NotADirectory(missing));
        clear_env();
    }

    #[test]
    #[serial]
    fn rejects_blank_default() {
        clear_env();
        env::set_var(MOVEMENT_DEFAULT_VAR, "   ");
        let err = MovementConfig::from_env().unwrap_err();
        assert_eq!(err, ConfigError::Blank(MOVEMENT_DEFAULT_VAR));
        clear_env();
    }
}
