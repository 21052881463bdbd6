//! Errors raised while reading a movement file.
//!
//! Every parse failure carries the raw line that caused it so the caller can
//! show it to the user. Nothing is registered when an import fails.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::error_code::ErrorCode;

/// What was wrong with a movement file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidKind {
    MalformedHeader,
    UnsupportedSchemaType,
    HeaderOutOfRange,
    MalformedRound,
    TripletOutOfRange,
    MissingRound,
    MissingTrailer,
    MalformedTrailer,
}

impl InvalidKind {
    pub const fn code(self) -> ErrorCode {
        match self {
            InvalidKind::MalformedHeader => ErrorCode::MalformedHeader,
            InvalidKind::UnsupportedSchemaType => ErrorCode::UnsupportedSchemaType,
            InvalidKind::HeaderOutOfRange => ErrorCode::HeaderOutOfRange,
            InvalidKind::MalformedRound => ErrorCode::MalformedRound,
            InvalidKind::TripletOutOfRange => ErrorCode::TripletOutOfRange,
            InvalidKind::MissingRound => ErrorCode::MissingRound,
            InvalidKind::MissingTrailer => ErrorCode::MissingTrailer,
            InvalidKind::MalformedTrailer => ErrorCode::MalformedTrailer,
        }
    }

    const fn describe(self) -> &'static str {
        match self {
            InvalidKind::MalformedHeader => "malformed header",
            InvalidKind::UnsupportedSchemaType => "only pair movements (schema type 0) are supported",
            InvalidKind::HeaderOutOfRange => "header value out of range",
            InvalidKind::MalformedRound => "malformed round line",
            InvalidKind::TripletOutOfRange => "pair or board number out of range",
            InvalidKind::MissingRound => "file ends before all rounds were read",
            InvalidKind::MissingTrailer => "file ends before the name line",
            InvalidKind::MalformedTrailer => "name line must look like #<name>...</name>",
        }
    }
}

impl std::fmt::Display for InvalidKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("cannot read movement file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{kind} (line {line_no}): '{line}'")]
    Invalid {
        kind: InvalidKind,
        /// 1-based line number; one past the last line when the file ended early.
        line_no: usize,
        line: String,
    },
}

impl ImportError {
    pub fn invalid(kind: InvalidKind, line_no: usize, line: impl Into<String>) -> Self {
        Self::Invalid {
            kind,
            line_no,
            line: line.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ImportError::Io { .. } => ErrorCode::MovementIo,
            ImportError::Invalid { kind, .. } => kind.code(),
        }
    }

    pub fn kind(&self) -> Option<InvalidKind> {
        match self {
            ImportError::Io { .. } => None,
            ImportError::Invalid { kind, .. } => Some(*kind),
        }
    }

    /// The offending raw line; empty for I/O failures and early end of file.
    pub fn line(&self) -> &str {
        match self {
            ImportError::Io { .. } => "",
            ImportError::Invalid { line, .. } => line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_error_reports_line_and_code() {
        let err = ImportError::invalid(InvalidKind::UnsupportedSchemaType, 1, "8 4 5 5 1");
        assert_eq!(err.code(), ErrorCode::UnsupportedSchemaType);
        assert_eq!(err.kind(), Some(InvalidKind::UnsupportedSchemaType));
        assert_eq!(err.line(), "8 4 5 5 1");
        let msg = err.to_string();
        assert!(msg.contains("line 1"), "{msg}");
        assert!(msg.contains("'8 4 5 5 1'"), "{msg}");
    }

    #[test]
    fn io_error_has_no_line() {
        let err = ImportError::io(
            "missing.asc",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.code(), ErrorCode::MovementIo);
        assert_eq!(err.kind(), None);
        assert_eq!(err.line(), "");
        assert!(err.to_string().contains("missing.asc"));
    }
}
