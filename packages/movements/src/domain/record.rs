//! Owned representation of one movement.

use super::types::{Board, MovementShape, Seat};

/// A movement: its name, its shape and, per round, the board every table plays
/// and the seat every pair takes.
///
/// Storage is row-major: `boards` holds one row of `rounds` entries per table,
/// `seats` one row per pair. All public indices are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementRecord {
    name: String,
    shape: MovementShape,
    boards: Vec<Board>,
    seats: Vec<Seat>,
}

impl MovementRecord {
    /// An empty movement of the given shape: every table has no board and
    /// every pair sits out.
    pub(crate) fn blank(name: impl Into<String>, shape: MovementShape) -> Self {
        let rounds = shape.rounds as usize;
        Self {
            name: name.into(),
            shape,
            boards: vec![Board::default(); rounds * shape.tables as usize],
            seats: vec![Seat::default(); rounds * shape.pairs as usize],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> MovementShape {
        self.shape
    }

    pub fn rounds(&self) -> u32 {
        self.shape.rounds
    }

    pub fn tables(&self) -> u32 {
        self.shape.tables
    }

    pub fn pairs(&self) -> u32 {
        self.shape.pairs
    }

    pub fn board(&self, table: u32, round: u32) -> Board {
        self.boards[self.board_index(table, round)]
    }

    pub fn seat(&self, pair: u32, round: u32) -> Seat {
        self.seats[self.seat_index(pair, round)]
    }

    pub(crate) fn set_board(&mut self, table: u32, round: u32, board: Board) {
        let idx = self.board_index(table, round);
        self.boards[idx] = board;
    }

    pub(crate) fn set_seat(&mut self, pair: u32, round: u32, seat: Seat) {
        let idx = self.seat_index(pair, round);
        self.seats[idx] = seat;
    }

    /// Copy of this movement under another name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    fn board_index(&self, table: u32, round: u32) -> usize {
        debug_assert!(table >= 1 && table <= self.shape.tables, "table {table} out of range");
        debug_assert!(round >= 1 && round <= self.shape.rounds, "round {round} out of range");
        (table as usize - 1) * self.shape.rounds as usize + (round as usize - 1)
    }

    fn seat_index(&self, pair: u32, round: u32) -> usize {
        debug_assert!(pair >= 1 && pair <= self.shape.pairs, "pair {pair} out of range");
        debug_assert!(round >= 1 && round <= self.shape.rounds, "round {round} out of range");
        (pair as usize - 1) * self.shape.rounds as usize + (round as usize - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_record_has_no_games() {
        let rec = MovementRecord::blank("empty", MovementShape::new(3, 2, 4));
        for round in 1..=3 {
            for table in 1..=2 {
                assert_eq!(rec.board(table, round), Board::Own(0));
            }
            for pair in 1..=4 {
                assert_eq!(rec.seat(pair, round), Seat::NotScheduled);
            }
        }
    }

    #[test]
    fn setters_address_the_right_cell() {
        let mut rec = MovementRecord::blank("cells", MovementShape::new(3, 2, 4));
        rec.set_board(2, 3, Board::Borrowed(1));
        rec.set_seat(4, 2, Seat::east_west(2));

        assert_eq!(rec.board(2, 3), Board::Borrowed(1));
        assert_eq!(rec.board(1, 3), Board::Own(0));
        assert_eq!(rec.board(2, 2), Board::Own(0));
        assert_eq!(rec.seat(4, 2), Seat::east_west(2));
        assert_eq!(rec.seat(3, 2), Seat::NotScheduled);
    }

    #[test]
    fn renamed_keeps_data() {
        let mut rec = MovementRecord::blank("a", MovementShape::new(1, 1, 2));
        rec.set_seat(1, 1, Seat::north_south(1));
        let copy = rec.renamed("b");
        assert_eq!(copy.name(), "b");
        assert_eq!(copy.seat(1, 1), Seat::north_south(1));
        assert_eq!(copy.shape(), rec.shape());
    }
}
