//! Compact signed encoding of movement tables and its decoding into records.
//!
//! The built-in movements are stored as `i8` rows where the sign carries a
//! second meaning: a negative board borrows the boards of another table, a
//! negative table seats the pair East-West. Decoding turns those into
//! [`Board`] and [`Seat`] values once, so nothing downstream sees the sign.

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::builtin_data::BUILTIN_MOVEMENTS;
use super::record::MovementRecord;
use super::types::{Board, MovementShape, Seat};

/// Static shape of one encoded movement.
#[derive(Debug)]
pub struct EncodedMovement {
    pub name: &'static str,
    pub rounds: u32,
    pub pairs: u32,
    pub tables: u32,
    /// `tables` rows of `rounds` entries.
    pub boards: &'static [i8],
    /// `pairs` rows of `rounds` entries.
    pub seats: &'static [i8],
}

impl EncodedMovement {
    pub fn shape(&self) -> MovementShape {
        MovementShape::new(self.rounds, self.tables, self.pairs)
    }

    pub fn decode(&self) -> MovementRecord {
        let shape = self.shape();
        let rounds = self.rounds as usize;
        debug_assert_eq!(self.boards.len(), rounds * self.tables as usize, "{}", self.name);
        debug_assert_eq!(self.seats.len(), rounds * self.pairs as usize, "{}", self.name);

        let mut record = MovementRecord::blank(self.name, shape);
        for (idx, &raw) in self.boards.iter().enumerate() {
            let table = (idx / rounds) as u32 + 1;
            let round = (idx % rounds) as u32 + 1;
            record.set_board(table, round, decode_board(raw));
        }
        for (idx, &raw) in self.seats.iter().enumerate() {
            let pair = (idx / rounds) as u32 + 1;
            let round = (idx % rounds) as u32 + 1;
            record.set_seat(pair, round, decode_seat(raw));
        }
        record
    }
}

pub fn decode_board(raw: i8) -> Board {
    if raw < 0 {
        Board::Borrowed(u32::from(raw.unsigned_abs()))
    } else {
        Board::Own(raw as u32)
    }
}

pub fn decode_seat(raw: i8) -> Seat {
    match raw {
        0 => Seat::NotScheduled,
        t if t > 0 => Seat::north_south(t as u32),
        t => Seat::east_west(u32::from(t.unsigned_abs())),
    }
}

/// Built-in movements, decoded on first use and shared by every catalog.
pub(crate) static BUILTIN_RECORDS: Lazy<Vec<Arc<MovementRecord>>> = Lazy::new(|| {
    BUILTIN_MOVEMENTS
        .iter()
        .map(|encoded| Arc::new(encoded.decode()))
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_carries_borrow_and_direction() {
        assert_eq!(decode_board(4), Board::Own(4));
        assert_eq!(decode_board(-3), Board::Borrowed(3));
        assert_eq!(decode_board(0), Board::Own(0));

        assert_eq!(decode_seat(0), Seat::NotScheduled);
        assert_eq!(decode_seat(2), Seat::north_south(2));
        assert_eq!(decode_seat(-7), Seat::east_west(7));
        assert_eq!(decode_seat(i8::MIN), Seat::east_west(128));
    }

    #[test]
    fn decode_lays_out_rows_by_table_and_pair() {
        static TINY: EncodedMovement = EncodedMovement {
            name: "tiny",
            rounds: 2,
            pairs: 4,
            tables: 2,
            boards: &[1, 2, 2, -1],
            seats: &[1, 2, -1, -2, 2, 1, -2, -1],
        };
        let rec = TINY.decode();
        assert_eq!(rec.name(), "tiny");
        assert_eq!(rec.board(1, 1), Board::Own(1));
        assert_eq!(rec.board(1, 2), Board::Own(2));
        assert_eq!(rec.board(2, 1), Board::Own(2));
        assert_eq!(rec.board(2, 2), Board::Borrowed(1));
        assert_eq!(rec.seat(2, 1), Seat::east_west(1));
        assert_eq!(rec.seat(3, 2), Seat::north_south(1));
        assert_eq!(rec.seat(4, 2), Seat::east_west(1));
    }

    #[test]
    fn every_builtin_row_has_the_declared_length() {
        for encoded in BUILTIN_MOVEMENTS {
            let rounds = encoded.rounds as usize;
            assert_eq!(encoded.boards.len(), rounds * encoded.tables as usize, "{}", encoded.name);
            assert_eq!(encoded.seats.len(), rounds * encoded.pairs as usize, "{}", encoded.name);
        }
        assert_eq!(BUILTIN_RECORDS.len(), BUILTIN_MOVEMENTS.len());
    }
}
