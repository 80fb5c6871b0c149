//! Error types for sdk-timing.
//!
//! Every failure path produces its own variant so callers can tell a
//! malformed string apart from a platform or clock problem.

use crate::format::Field;

/// Conversion error types covering all operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    #[error("Required output parameter was null: {0}")]
    NullOutputParameter(&'static str),

    #[error("Unexpected time string length: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Error parsing {field}: input {input:?}")]
    FieldParse { field: Field, input: String },

    #[error("Cannot retrieve UTC calendar fields for epoch second {0}")]
    CalendarLookupFailed(i64),

    #[error("Formatting the calendar fields produced no output")]
    Format,

    #[error("System clock reports a time before the Unix epoch")]
    Clock,
}

/// Field-free discriminant of [`TimeError`], handy for matching across an
/// FFI boundary or in assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NullOutputParameter,
    LengthMismatch,
    FieldParse,
    CalendarLookupFailed,
    Format,
    Clock,
}

impl TimeError {
    /// Return the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TimeError::NullOutputParameter(_) => ErrorKind::NullOutputParameter,
            TimeError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            TimeError::FieldParse { .. } => ErrorKind::FieldParse,
            TimeError::CalendarLookupFailed(_) => ErrorKind::CalendarLookupFailed,
            TimeError::Format => ErrorKind::Format,
            TimeError::Clock => ErrorKind::Clock,
        }
    }
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, TimeError>;
