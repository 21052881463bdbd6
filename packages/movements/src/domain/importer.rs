//! Reading movements from the vendor interchange text format.
//!
//! ```text
//! 8 4 5 5 0                     ; pairs tables rounds boards schema-type
//! 1-2 1 3-4 2 5-6 3 7-8 4       ; round 1: NS-EW BOARD for tables 1..=4
//! 1-6 2 5-3 1 7-2 3 8-4 5       ; round 2
//! ...
//! #<name>Short Howell 8</name>
//! ```
//!
//! Blank lines and lines starting with `;` are skipped. Anything after the
//! values a line needs is ignored, which is how inline comments work. The
//! triplet `0-0 0` marks a table that does not play that round.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use super::catalog::Catalog;
use super::record::MovementRecord;
use super::types::{Board, MovementId, MovementShape, Seat};
use crate::errors::import::{ImportError, InvalidKind};

pub const MAX_PAIRS: u32 = 127;
pub const MAX_TABLES: u32 = 20;
pub const MAX_BOARDS: u32 = 10;
pub const MAX_ROUNDS: u32 = 10;

/// Schema type of a pairs movement; individual and mixed movements are refused.
pub const PAIRS_SCHEMA_TYPE: u32 = 0;

/// File extension of movement files kept in the movement folder.
pub const MOVEMENT_FILE_EXTENSION: &str = "asc";

const NAME_OPEN: &str = "#<name>";
const NAME_CLOSE: &str = "</name>";

/// First line of a movement file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementHeader {
    pub pairs: u32,
    pub tables: u32,
    pub rounds: u32,
    pub boards: u32,
    pub schema_type: u32,
}

/// One `NS-EW BOARD` entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableAssignment {
    pub ns: u32,
    pub ew: u32,
    pub board: u32,
}

impl TableAssignment {
    /// `0-0 0`: the table does not play this round.
    pub fn is_idle(&self) -> bool {
        self.ns == 0 && self.ew == 0 && self.board == 0
    }
}

/// A movement file that passed all checks but is not yet registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMovement {
    pub header: MovementHeader,
    pub name: String,
    /// `rounds` rows of `tables` assignments.
    pub rounds: Vec<Vec<TableAssignment>>,
}

impl ParsedMovement {
    /// Assignment at `table` in `round`, both 1-based.
    pub fn assignment(&self, round: u32, table: u32) -> TableAssignment {
        self.rounds[round as usize - 1][table as usize - 1]
    }

    pub fn into_record(self) -> MovementRecord {
        let shape = MovementShape::new(self.header.rounds, self.header.tables, self.header.pairs);
        let mut record = MovementRecord::blank(self.name, shape);
        for (round, tables) in (1u32..).zip(&self.rounds) {
            for (table, assignment) in (1u32..).zip(tables) {
                if assignment.is_idle() {
                    continue;
                }
                record.set_board(table, round, Board::Own(assignment.board));
                record.set_seat(assignment.ns, round, Seat::north_south(table));
                record.set_seat(assignment.ew, round, Seat::east_west(table));
            }
        }
        record
    }
}

/// Outcome of loading a whole movement folder.
#[derive(Debug, Default)]
pub struct DirImport {
    pub imported: Vec<(PathBuf, MovementId)>,
    pub failed: Vec<(PathBuf, ImportError)>,
}

/// Parse movement text without touching any catalog.
pub fn parse_movement(text: &str) -> Result<ParsedMovement, ImportError> {
    let mut lines = DataLines::new(text);

    let (line_no, line) = lines
        .next()
        .ok_or_else(|| ImportError::invalid(InvalidKind::MalformedHeader, lines.end(), ""))?;
    let header = parse_header(line_no, line)?;

    let mut rounds = Vec::with_capacity(header.rounds as usize);
    for _ in 0..header.rounds {
        let (line_no, line) = lines
            .next()
            .ok_or_else(|| ImportError::invalid(InvalidKind::MissingRound, lines.end(), ""))?;
        rounds.push(parse_round(&header, line_no, line)?);
    }

    let (line_no, line) = lines
        .next()
        .ok_or_else(|| ImportError::invalid(InvalidKind::MissingTrailer, lines.end(), ""))?;
    let name = parse_trailer(line)
        .ok_or_else(|| ImportError::invalid(InvalidKind::MalformedTrailer, line_no, line))?;

    Ok(ParsedMovement {
        header,
        name: name.to_string(),
        rounds,
    })
}

/// Parse movement text and register it.
pub fn import_str(
    catalog: &mut Catalog,
    text: &str,
    replace_duplicates: bool,
) -> Result<MovementId, ImportError> {
    register_parsed(catalog, parse_movement(text), replace_duplicates, "<text>")
}

/// Read a movement file and register it.
pub fn import_file(
    catalog: &mut Catalog,
    path: impl AsRef<Path>,
    replace_duplicates: bool,
) -> Result<MovementId, ImportError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| {
        error!(file = %path.display(), error = %source, "Cannot read movement file");
        ImportError::io(path, source)
    })?;
    register_parsed(
        catalog,
        parse_movement(&text),
        replace_duplicates,
        &path.display().to_string(),
    )
}

/// Load every movement file in `dir`, replacing same-named entries.
///
/// Files are taken in name order. A bad file is logged and reported in
/// [`DirImport::failed`]; the remaining files are still loaded.
pub fn import_dir(catalog: &mut Catalog, dir: impl AsRef<Path>) -> Result<DirImport, ImportError> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|source| ImportError::io(dir, source))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && has_movement_extension(path))
        .collect();
    files.sort();

    let mut outcome = DirImport::default();
    for path in files {
        debug!(file = %path.display(), "Loading movement file");
        match import_file(catalog, &path, true) {
            Ok(id) => outcome.imported.push((path, id)),
            Err(err) => outcome.failed.push((path, err)),
        }
    }
    info!(
        folder = %dir.display(),
        imported = outcome.imported.len(),
        failed = outcome.failed.len(),
        "Loaded movement folder"
    );
    Ok(outcome)
}

pub fn has_movement_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(MOVEMENT_FILE_EXTENSION))
}

fn register_parsed(
    catalog: &mut Catalog,
    parsed: Result<ParsedMovement, ImportError>,
    replace_duplicates: bool,
    origin: &str,
) -> Result<MovementId, ImportError> {
    let parsed = parsed.map_err(|err| {
        error!(source = origin, line = err.line(), error = %err, "Error reading movement");
        err
    })?;
    let name = parsed.name.clone();
    let id = catalog.register(parsed.into_record(), replace_duplicates);
    info!(source = origin, movement = %name, id, "Imported movement");
    Ok(id)
}

fn parse_header(line_no: usize, line: &str) -> Result<MovementHeader, ImportError> {
    let malformed = || ImportError::invalid(InvalidKind::MalformedHeader, line_no, line);

    let mut cursor = Cursor::new(line);
    let mut values = [0u32; 5];
    for value in &mut values {
        *value = cursor.number().ok_or_else(malformed)?;
    }
    let [pairs, tables, rounds, boards, schema_type] = values;
    let header = MovementHeader {
        pairs,
        tables,
        rounds,
        boards,
        schema_type,
    };

    let in_range = within(header.pairs, MAX_PAIRS)
        && within(header.tables, MAX_TABLES)
        && within(header.boards, MAX_BOARDS)
        && within(header.rounds, MAX_ROUNDS);
    if !in_range {
        return Err(ImportError::invalid(InvalidKind::HeaderOutOfRange, line_no, line));
    }
    if header.schema_type != PAIRS_SCHEMA_TYPE {
        return Err(ImportError::invalid(
            InvalidKind::UnsupportedSchemaType,
            line_no,
            line,
        ));
    }
    Ok(header)
}

fn parse_round(
    header: &MovementHeader,
    line_no: usize,
    line: &str,
) -> Result<Vec<TableAssignment>, ImportError> {
    let mut cursor = Cursor::new(line);
    let mut tables = Vec::with_capacity(header.tables as usize);
    for _ in 0..header.tables {
        let assignment = cursor
            .triplet()
            .ok_or_else(|| ImportError::invalid(InvalidKind::MalformedRound, line_no, line))?;
        let valid = assignment.is_idle()
            || (within(assignment.ns, header.pairs)
                && within(assignment.ew, header.pairs)
                && within(assignment.board, header.boards));
        if !valid {
            return Err(ImportError::invalid(
                InvalidKind::TripletOutOfRange,
                line_no,
                line,
            ));
        }
        tables.push(assignment);
    }
    Ok(tables)
}

fn parse_trailer(line: &str) -> Option<&str> {
    let start = line.find(NAME_OPEN)? + NAME_OPEN.len();
    let len = line[start..].find(NAME_CLOSE)?;
    Some(&line[start..start + len])
}

fn within(value: u32, max: u32) -> bool {
    (1..=max).contains(&value)
}

/// Non-comment lines with their 1-based line numbers.
struct DataLines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    last_line_no: usize,
}

impl<'a> DataLines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines().enumerate(),
            last_line_no: 0,
        }
    }

    /// Line number reported when the text runs out.
    fn end(&self) -> usize {
        self.last_line_no + 1
    }
}

impl<'a> Iterator for DataLines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        for (idx, raw) in self.inner.by_ref() {
            self.last_line_no = idx + 1;
            let line = raw.trim_start().trim_end_matches('\r');
            if line.is_empty() || line.starts_with(';') {
                continue;
            }
            return Some((idx + 1, line));
        }
        None
    }
}

/// Whitespace-tolerant reader for the numbers and dashes of a data line.
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn number(&mut self) -> Option<u32> {
        self.rest = self.rest.trim_start();
        let len = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        if len == 0 {
            return None;
        }
        let value = self.rest[..len].parse().ok()?;
        self.rest = &self.rest[len..];
        Some(value)
    }

    fn dash(&mut self) -> Option<()> {
        self.rest = self.rest.trim_start().strip_prefix('-')?;
        Some(())
    }

    /// `NS-EW BOARD`, spaces allowed around the dash.
    fn triplet(&mut self) -> Option<TableAssignment> {
        let ns = self.number()?;
        self.dash()?;
        let ew = self.number()?;
        let board = self.number()?;
        Some(TableAssignment { ns, ew, board })
    }
}
