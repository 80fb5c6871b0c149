//! `TimeUtils` — the conversions grouped behind one handle.

use std::sync::Arc;

use crate::access::UtcCalendar;
use crate::calendar::{to_epoch_seconds, BrokenDownTime};
use crate::clock;
use crate::error::Result;
use crate::format::{decode, Encoder, MillisecondTimestamp};

/// Entry point bundling the four conversions.
///
/// Holds the calendar used for encoding; everything else is stateless.
/// Cloning shares the calendar, and the handle can be used from any number
/// of threads at once.
#[derive(Debug, Clone, Default)]
pub struct TimeUtils {
    encoder: Encoder,
}

impl TimeUtils {
    /// Create a handle backed by [`crate::access::ChronoCalendar`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle that breaks epoch seconds down with `calendar`.
    pub fn with_calendar(calendar: Arc<dyn UtcCalendar>) -> Self {
        Self {
            encoder: Encoder::new(calendar),
        }
    }

    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    /// Convert broken-down UTC fields to epoch seconds. Never fails.
    pub fn convert_to_utc_epoch(&self, utc: &BrokenDownTime) -> i64 {
        to_epoch_seconds(utc)
    }

    /// Decode `YYYY-MM-DDTHH:MM:SS+XXXX` to epoch seconds.
    pub fn convert_iso8601_to_unix(&self, text: &str) -> Result<i64> {
        decode(text)
    }

    /// Current time in whole epoch seconds.
    pub fn current_unix_time(&self) -> Result<i64> {
        clock::now()
    }

    /// Encode a time point as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    pub fn convert_time_to_utc_iso8601(&self, time: MillisecondTimestamp) -> Result<String> {
        self.encoder.encode(time)
    }
}
