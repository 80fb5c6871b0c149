//! sdk-timing — dependable UTC time conversions for client SDKs.
//!
//! Converts between three representations without touching the platform's
//! timezone database:
//! broken-down UTC calendar fields, the fixed 24-byte timestamp strings
//! exchanged with the service, and signed Unix epoch seconds.

pub mod access;
pub mod calendar;
pub mod clock;
pub mod error;
pub mod format;
pub mod parse;
pub mod utils;

// Re-export primary types
pub use access::{BreakdownPrimitive, ChronoCalendar, Serialized, UtcCalendar};
pub use calendar::{is_leap_year, to_epoch_seconds, BrokenDownTime};
pub use clock::now;
pub use error::{ErrorKind, Result, TimeError};
pub use format::{decode, Encoder, Field, MillisecondTimestamp, ENCODED_LENGTH};
pub use utils::TimeUtils;
