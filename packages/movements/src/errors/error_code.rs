//! Error codes for movement import and configuration failures.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and are what the command-line tool prints.

use core::fmt;

/// Centralized error codes for the movement engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Import: file access
    /// Movement file could not be read
    MovementIo,

    // Import: header line
    /// Header line is not five integers
    MalformedHeader,
    /// Header declares an individual or mixed movement
    UnsupportedSchemaType,
    /// Header value outside the supported bounds
    HeaderOutOfRange,

    // Import: round lines
    /// Round line does not hold enough `NS-EW BOARD` triplets
    MalformedRound,
    /// Pair or board number outside the header's bounds
    TripletOutOfRange,
    /// File ended before every round was read
    MissingRound,

    // Import: name trailer
    /// File ended before the name line
    MissingTrailer,
    /// Name line lacks the `#<name>...</name>` tags
    MalformedTrailer,

    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MovementIo => "MOVEMENT_IO",

            Self::MalformedHeader => "MALFORMED_HEADER",
            Self::UnsupportedSchemaType => "UNSUPPORTED_SCHEMA_TYPE",
            Self::HeaderOutOfRange => "HEADER_OUT_OF_RANGE",

            Self::MalformedRound => "MALFORMED_ROUND",
            Self::TripletOutOfRange => "TRIPLET_OUT_OF_RANGE",
            Self::MissingRound => "MISSING_ROUND",

            Self::MissingTrailer => "MISSING_TRAILER",
            Self::MalformedTrailer => "MALFORMED_TRAILER",

            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::MovementIo.as_str(), "MOVEMENT_IO");
        assert_eq!(ErrorCode::MalformedHeader.as_str(), "MALFORMED_HEADER");
        assert_eq!(
            ErrorCode::UnsupportedSchemaType.as_str(),
            "UNSUPPORTED_SCHEMA_TYPE"
        );
        assert_eq!(ErrorCode::HeaderOutOfRange.as_str(), "HEADER_OUT_OF_RANGE");
        assert_eq!(ErrorCode::MalformedRound.as_str(), "MALFORMED_ROUND");
        assert_eq!(
            ErrorCode::TripletOutOfRange.as_str(),
            "TRIPLET_OUT_OF_RANGE"
        );
        assert_eq!(ErrorCode::MissingRound.as_str(), "MISSING_ROUND");
        assert_eq!(ErrorCode::MissingTrailer.as_str(), "MISSING_TRAILER");
        assert_eq!(ErrorCode::MalformedTrailer.as_str(), "MALFORMED_TRAILER");
        assert_eq!(ErrorCode::ConfigError.as_str(), "CONFIG_ERROR");
    }

    #[test]
    fn test_display_trait() {
        assert_eq!(format!("{}", ErrorCode::MissingRound), "MISSING_ROUND");
        assert_eq!(
            format!("{}", ErrorCode::UnsupportedSchemaType),
            "UNSUPPORTED_SCHEMA_TYPE"
        );
    }
}
