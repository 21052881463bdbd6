//! Writing movements in the vendor interchange text format read by
//! [`super::importer`].

use std::fmt::Write as _;
use std::io;

use super::decoder::Decoder;
use super::importer::PAIRS_SCHEMA_TYPE;

/// Text form of the bound movement, `None` when the decoder is unbound.
///
/// Borrowed boards are written as the board actually played and idle tables
/// as `0-0 0`, so the output imports back to the same games.
pub fn export_movement(decoder: &Decoder) -> Option<String> {
    if !decoder.is_ok() {
        return None;
    }
    let shape = decoder.shape();
    let boards = highest_board(decoder);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} {} {} {}",
        shape.pairs, shape.tables, shape.rounds, boards, PAIRS_SCHEMA_TYPE
    );
    for round in 1..=shape.rounds {
        let games: Vec<String> = (1..=shape.tables)
            .map(|table| match decoder.table_round_info(table, round) {
                Some(game) => format!("{:2}-{:2} {}", game.pairs.ns, game.pairs.ew, game.board),
                None => format!("{:2}-{:2} {}", 0, 0, 0),
            })
            .collect();
        let _ = writeln!(out, "{}", games.join(" "));
    }
    let _ = writeln!(out, "#<name>{}</name>", decoder.name());
    Some(out)
}

/// Write the bound movement to `writer`. An unbound decoder writes nothing.
pub fn write_movement(decoder: &Decoder, mut writer: impl io::Write) -> io::Result<()> {
    match export_movement(decoder) {
        Some(text) => writer.write_all(text.as_bytes()),
        None => Ok(()),
    }
}

/// Highest board number any game of the movement plays.
pub fn highest_board(decoder: &Decoder) -> u32 {
    (1..=decoder.rounds())
        .flat_map(|round| decoder.round_info(round, false))
        .map(|game| game.board)
        .max()
        .unwrap_or(0)
}
