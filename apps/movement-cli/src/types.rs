//! Shared types for the command-line tool.

use clap::ValueEnum;
use movements::{MovementId, Orientation};
use serde::Serialize;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One row of `list`.
#[derive(Debug, Serialize)]
pub struct MovementSummary {
    pub id: MovementId,
    pub name: String,
    pub rounds: u32,
    pub tables: u32,
    pub pairs: u32,
}

/// Where a pair plays in one round, as shown by `pair`.
#[derive(Debug, Serialize)]
pub struct PairRound {
    pub round: u32,
    /// `0` when the pair sits out.
    pub table: u32,
    pub orientation: Option<Orientation>,
    pub opponent: u32,
    pub board: u32,
}
