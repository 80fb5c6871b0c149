//! Current-time accessor.
//!
//! Unlike the arithmetic engine and the decoder, which accept pre-1970
//! values, a clock reading before the epoch is treated as unusable.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Result, TimeError};

/// Return the current time as whole seconds since the Unix epoch.
pub fn now() -> Result<i64> {
    epoch_seconds_at(SystemTime::now())
}

/// Whole seconds between the epoch and `reading`, truncated.
///
/// Fails with [`TimeError::Clock`] if `reading` is before the epoch.
pub fn epoch_seconds_at(reading: SystemTime) -> Result<i64> {
    let elapsed = reading.duration_since(UNIX_EPOCH).map_err(|err| {
        log::error!(
            "clock reading is {:?} before the Unix epoch",
            err.duration()
        );
        TimeError::Clock
    })?;
    Ok(i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX))
}
