//! Query façade over one catalog entry.
//!
//! A decoder never fails to construct. Binding to an unknown id or name gives
//! a decoder whose [`Decoder::is_ok`] is `false` and whose queries all answer
//! zero or empty, so callers can probe before a session has a movement.
//!
//! Rounds, tables and pairs are 1-based. Passing values outside the bound
//! movement's shape is a caller bug and trips a debug assertion.

use std::sync::Arc;

use tracing::debug;

use super::catalog::Catalog;
use super::record::MovementRecord;
use super::types::{Board, GameInfo, MovementId, MovementShape, NsEw, Orientation, Seat};

#[derive(Debug, Clone, Default)]
pub struct Decoder {
    id: Option<MovementId>,
    record: Option<Arc<MovementRecord>>,
}

impl Decoder {
    /// A decoder bound to nothing.
    pub fn unbound() -> Self {
        Self::default()
    }

    pub fn from_id(catalog: &Catalog, id: MovementId) -> Self {
        match catalog.get(id) {
            Some(record) => Self {
                id: Some(id),
                record: Some(Arc::clone(record)),
            },
            None => {
                debug!(id, "No movement with this id");
                Self::unbound()
            }
        }
    }

    pub fn from_name(catalog: &Catalog, name: &str) -> Self {
        match catalog.find_by_name(name) {
            Some(id) => Self::from_id(catalog, id),
            None => {
                debug!(movement = name, "No movement with this name");
                Self::unbound()
            }
        }
    }

    /// A decoder over a record that is not (or not yet) in a catalog.
    pub fn detached(record: Arc<MovementRecord>) -> Self {
        Self {
            id: None,
            record: Some(record),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.record.is_some()
    }

    pub fn id(&self) -> Option<MovementId> {
        self.id
    }

    pub fn record(&self) -> Option<&MovementRecord> {
        self.record.as_deref()
    }

    /// Movement name, `"???"` when unbound.
    pub fn name(&self) -> &str {
        self.record.as_deref().map_or("???", MovementRecord::name)
    }

    pub fn shape(&self) -> MovementShape {
        self.record
            .as_deref()
            .map_or(MovementShape::new(0, 0, 0), MovementRecord::shape)
    }

    pub fn rounds(&self) -> u32 {
        self.shape().rounds
    }

    pub fn tables(&self) -> u32 {
        self.shape().tables
    }

    pub fn pairs(&self) -> u32 {
        self.shape().pairs
    }

    /// Board number played at `table` in `round`, following a borrow to the
    /// lending table. `0` for table `0` (pair not seated) or when unbound.
    pub fn board_at(&self, table: u32, round: u32) -> u32 {
        let Some(record) = self.record.as_deref() else {
            return 0;
        };
        if table == 0 {
            return 0;
        }
        match record.board(table, round) {
            Board::Own(board) => board,
            Board::Borrowed(lender) => {
                let lent = record.board(lender, round);
                debug_assert!(
                    matches!(lent, Board::Own(_)),
                    "{}: chained borrow at table {table}",
                    record.name()
                );
                match lent {
                    Board::Own(board) => board,
                    Board::Borrowed(_) => 0,
                }
            }
        }
    }

    /// Table whose boards `table` shares in `round`, `0` if it plays its own.
    pub fn borrowed_from(&self, table: u32, round: u32) -> u32 {
        match self.record.as_deref() {
            Some(record) if table != 0 => record.board(table, round).lender(),
            _ => 0,
        }
    }

    pub fn seat_of(&self, pair: u32, round: u32) -> Seat {
        self.record
            .as_deref()
            .map_or(Seat::NotScheduled, |record| record.seat(pair, round))
    }

    /// Table `pair` plays at in `round`, `0` if it sits out.
    pub fn table_of(&self, pair: u32, round: u32) -> u32 {
        self.seat_of(pair, round).table()
    }

    pub fn is_north_south(&self, pair: u32, round: u32) -> bool {
        self.seat_of(pair, round).is_north_south()
    }

    /// The pairs seated at `table` in `round`; `(0, 0)` if the table is idle.
    pub fn pairs_at(&self, round: u32, table: u32) -> NsEw {
        let mut found = NsEw::default();
        let Some(record) = self.record.as_deref() else {
            return found;
        };
        debug_assert!(table >= 1 && table <= record.tables(), "table {table} out of range");

        for pair in 1..=record.pairs() {
            if let Seat::Sitting {
                table: t,
                orientation,
            } = record.seat(pair, round)
            {
                if t != table {
                    continue;
                }
                match orientation {
                    Orientation::NorthSouth => found.ns = pair,
                    Orientation::EastWest => found.ew = pair,
                }
                if found.ns != 0 && found.ew != 0 {
                    break;
                }
            }
        }
        found
    }

    /// The pair `pair` plays against in `round`, `0` if it sits out.
    pub fn opponent_of(&self, pair: u32, round: u32) -> u32 {
        let table = self.table_of(pair, round);
        if table == 0 {
            return 0;
        }
        let at_table = self.pairs_at(round, table);
        if at_table.ns == pair {
            at_table.ew
        } else {
            at_table.ns
        }
    }

    /// The game at `table` in `round`, `None` if the table is idle.
    pub fn table_round_info(&self, table: u32, round: u32) -> Option<GameInfo> {
        if !self.is_ok() {
            return None;
        }
        let pairs = self.pairs_at(round, table);
        if pairs.ns == 0 {
            return None;
        }
        Some(GameInfo {
            round,
            board: self.board_at(table, round),
            pairs,
        })
    }

    /// Every game of `round`, ordered by board then NS pair when
    /// `order_by_board`, else by NS pair.
    pub fn round_info(&self, round: u32, order_by_board: bool) -> Vec<GameInfo> {
        let mut games: Vec<GameInfo> = (1..=self.tables())
            .filter_map(|table| self.table_round_info(table, round))
            .collect();
        if order_by_board {
            games.sort_by_key(GameInfo::board_order_key);
        } else {
            games.sort_by_key(|game| game.pairs.ns);
        }
        games
    }

    /// Every game in the movement that plays `board`, ordered by NS pair.
    pub fn board_info(&self, board: u32) -> Vec<GameInfo> {
        let mut games = Vec::new();
        for round in 1..=self.rounds() {
            for table in 1..=self.tables() {
                if self.board_at(table, round) != board {
                    continue;
                }
                if let Some(game) = self.table_round_info(table, round) {
                    games.push(game);
                }
            }
        }
        games.sort_by_key(GameInfo::board_order_key);
        games
    }
}
