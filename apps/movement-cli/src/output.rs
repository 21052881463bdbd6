//! Rendering query results as text tables or JSON.

use movements::{GameInfo, Orientation};
use serde::Serialize;

use crate::error::CliError;
use crate::types::{MovementSummary, OutputFormat, PairRound};

fn json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn movements(format: OutputFormat, rows: &[MovementSummary]) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => json(rows),
        OutputFormat::Text => {
            let mut out = format!("{:>4}  {:<20} {:>6} {:>6} {:>5}\n", "id", "name", "rounds", "tables", "pairs");
            for row in rows {
                out.push_str(&format!(
                    "{:>4}  {:<20} {:>6} {:>6} {:>5}\n",
                    row.id, row.name, row.rounds, row.tables, row.pairs
                ));
            }
            Ok(out)
        }
    }
}

pub fn games(format: OutputFormat, games: &[GameInfo]) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => json(games),
        OutputFormat::Text => {
            let mut out = format!("{:>5} {:>5} {:>4} {:>4}\n", "round", "board", "ns", "ew");
            for game in games {
                out.push_str(&format!(
                    "{:>5} {:>5} {:>4} {:>4}\n",
                    game.round, game.board, game.pairs.ns, game.pairs.ew
                ));
            }
            Ok(out)
        }
    }
}

pub fn pair_rounds(format: OutputFormat, rows: &[PairRound]) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => json(rows),
        OutputFormat::Text => {
            let mut out = format!("{:>5} {:>5} {:>4} {:>8} {:>5}\n", "round", "table", "side", "opponent", "board");
            for row in rows {
                if row.table == 0 {
                    out.push_str(&format!("{:>5} {:>5}\n", row.round, "-"));
                    continue;
                }
                let side = match row.orientation {
                    Some(Orientation::NorthSouth) => "NS",
                    Some(Orientation::EastWest) => "EW",
                    None => "-",
                };
                out.push_str(&format!(
                    "{:>5} {:>5} {:>4} {:>8} {:>5}\n",
                    row.round, row.table, side, row.opponent, row.board
                ));
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use movements::NsEw;

    use super::*;

    #[test]
    fn sit_out_rounds_show_a_dash() {
        let rows = [
            PairRound {
                round: 1,
                table: 3,
                orientation: Some(Orientation::EastWest),
                opponent: 5,
                board: 2,
            },
            PairRound {
                round: 2,
                table: 0,
                orientation: None,
                opponent: 0,
                board: 0,
            },
        ];
        let text = pair_rounds(OutputFormat::Text, &rows).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("EW"));
        assert_eq!(lines[2].trim_end(), "    2     -");
    }

    #[test]
    fn games_encode_as_json_array() {
        let game = GameInfo {
            round: 2,
            board: 4,
            pairs: NsEw { ns: 1, ew: 6 },
        };
        let text = games(OutputFormat::Json, &[game]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["board"], 4);
        assert_eq!(value[0]["pairs"]["ew"], 6);
    }
}
