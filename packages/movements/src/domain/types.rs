//! Core movement value types: shape, boards, seats and game summaries.

use serde::Serialize;

/// Identifier of a catalog entry: its position in insertion order.
pub type MovementId = usize;

/// Dimensions of a movement.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct MovementShape {
    pub rounds: u32,
    pub tables: u32,
    pub pairs: u32,
}

impl MovementShape {
    pub fn new(rounds: u32, tables: u32, pairs: u32) -> Self {
        Self {
            rounds,
            tables,
            pairs,
        }
    }
}

/// Side of the table a pair plays.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub enum Orientation {
    NorthSouth,
    EastWest,
}

/// Where a pair sits in one round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Seat {
    /// Pair does not play this round (sit-out).
    #[default]
    NotScheduled,
    /// Pair plays at `table` (1-based) on the given side.
    Sitting { table: u32, orientation: Orientation },
}

impl Seat {
    pub fn north_south(table: u32) -> Self {
        Seat::Sitting {
            table,
            orientation: Orientation::NorthSouth,
        }
    }

    pub fn east_west(table: u32) -> Self {
        Seat::Sitting {
            table,
            orientation: Orientation::EastWest,
        }
    }

    /// Table number, `0` when not scheduled.
    pub fn table(self) -> u32 {
        match self {
            Seat::NotScheduled => 0,
            Seat::Sitting { table, .. } => table,
        }
    }

    pub fn orientation(self) -> Option<Orientation> {
        match self {
            Seat::NotScheduled => None,
            Seat::Sitting { orientation, .. } => Some(orientation),
        }
    }

    pub fn is_north_south(self) -> bool {
        self.orientation() == Some(Orientation::NorthSouth)
    }
}

/// Boards played at a table in one round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Board {
    /// The table plays its own board (set) with this number. `0` means no board.
    Own(u32),
    /// The table shares the boards of another table this round.
    Borrowed(u32),
}

impl Default for Board {
    fn default() -> Self {
        Board::Own(0)
    }
}

impl Board {
    /// Table the boards are fetched from, `0` when the table plays its own.
    pub fn lender(self) -> u32 {
        match self {
            Board::Own(_) => 0,
            Board::Borrowed(table) => table,
        }
    }
}

/// The two pairs at one table. `0` marks an empty seat.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize)]
pub struct NsEw {
    pub ns: u32,
    pub ew: u32,
}

impl NsEw {
    pub fn is_empty(&self) -> bool {
        self.ns == 0 && self.ew == 0
    }
}

/// One game: a table in a round, with the board played and the pairs seated.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize)]
pub struct GameInfo {
    pub round: u32,
    pub board: u32,
    pub pairs: NsEw,
}

impl GameInfo {
    /// Ordering used for board-ordered listings: board, then NS pair.
    pub(crate) fn board_order_key(&self) -> (u32, u32) {
        (self.board, self.pairs.ns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_accessors() {
        assert_eq!(Seat::NotScheduled.table(), 0);
        assert_eq!(Seat::NotScheduled.orientation(), None);
        assert!(!Seat::NotScheduled.is_north_south());

        let ns = Seat::north_south(3);
        assert_eq!(ns.table(), 3);
        assert!(ns.is_north_south());

        let ew = Seat::east_west(4);
        assert_eq!(ew.table(), 4);
        assert_eq!(ew.orientation(), Some(Orientation::EastWest));
        assert!(!ew.is_north_south());
    }

    #[test]
    fn board_lender() {
        assert_eq!(Board::Own(7).lender(), 0);
        assert_eq!(Board::Borrowed(2).lender(), 2);
        assert_eq!(Board::default(), Board::Own(0));
    }

    #[test]
    fn game_info_serializes_flat_pairs() {
        let gi = GameInfo {
            round: 1,
            board: 3,
            pairs: NsEw { ns: 5, ew: 6 },
        };
        let json = serde_json::to_value(gi).unwrap();
        assert_eq!(json["board"], 3);
        assert_eq!(json["pairs"]["ns"], 5);
        assert_eq!(json["pairs"]["ew"], 6);
    }
}
