//! Fixed-format encoder — millisecond time points to
//! `YYYY-MM-DDTHH:MM:SS.mmmZ`.

use std::fmt::Write as _;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::access::{ChronoCalendar, UtcCalendar};
use crate::calendar::BrokenDownTime;
use crate::error::{Result, TimeError};

use super::{DATE_TIME_LENGTH, ENCODED_LENGTH, LAYOUT};

// ---------------------------------------------------------------------------
// Millisecond time point
// ---------------------------------------------------------------------------

/// A point in time as signed milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MillisecondTimestamp(i64);

impl MillisecondTimestamp {
    pub const UNIX_EPOCH: Self = Self(0);

    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Combine whole epoch seconds with a `0..=999` millisecond remainder;
    /// the inverse of [`split`](Self::split).
    ///
    /// Returns `None` if `millis` is 1000 or more, or if the total does not
    /// fit in an `i64` of milliseconds.
    pub fn from_parts(seconds: i64, millis: u16) -> Option<Self> {
        if millis > 999 {
            return None;
        }
        seconds
            .checked_mul(1000)?
            .checked_add(i64::from(millis))
            .map(Self)
    }

    /// The current system time.
    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    /// Convert a `SystemTime`, rounding toward negative infinity to whole
    /// milliseconds. Pre-epoch times become negative; values beyond the
    /// `i64` range saturate.
    pub fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => Self(i64::try_from(after.as_millis()).unwrap_or(i64::MAX)),
            Err(err) => {
                let before = err.duration();
                let partial = u128::from(before.subsec_nanos() % 1_000_000 != 0);
                let millis = before.as_millis() + partial;
                Self(i64::try_from(millis).map(|m| -m).unwrap_or(i64::MIN))
            }
        }
    }

    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Whole epoch seconds and the `0..=999` millisecond remainder.
    ///
    /// Uses floor division, so a pre-epoch time borrows from the seconds:
    /// `-1 ms` splits into `(-1, 999)`.
    pub fn split(self) -> (i64, u16) {
        (self.0.div_euclid(1000), self.0.rem_euclid(1000) as u16)
    }
}

impl From<SystemTime> for MillisecondTimestamp {
    fn from(time: SystemTime) -> Self {
        Self::from_system_time(time)
    }
}

// ---------------------------------------------------------------------------
// Formatting primitive
// ---------------------------------------------------------------------------

/// Write `YYYY-MM-DDTHH:MM:SS` into `buf`.
///
/// Returns the number of bytes written, or 0 when a field cannot be shown
/// in its fixed width (negative, or too many digits such as year 10000).
/// `buf` is left unspecified when 0 is returned.
pub fn write_fixed(time: &BrokenDownTime, buf: &mut [u8; DATE_TIME_LENGTH]) -> usize {
    for spec in &LAYOUT {
        let value = spec.field.get(time);
        if value < 0 || i64::from(value) >= 10i64.pow(spec.width as u32) {
            return 0;
        }
        let mut rest = value as u32;
        for slot in buf[spec.offset..spec.offset + spec.width].iter_mut().rev() {
            *slot = b'0' + (rest % 10) as u8;
            rest /= 10;
        }
        if let Some(separator) = spec.separator {
            buf[spec.offset + spec.width] = separator;
        }
    }
    DATE_TIME_LENGTH
}

// ---------------------------------------------------------------------------
// Encoder
// ---------------------------------------------------------------------------

/// Encodes time points using an injected [`UtcCalendar`].
///
/// Cheap to clone; clones share the calendar.
#[derive(Clone)]
pub struct Encoder {
    calendar: Arc<dyn UtcCalendar>,
}

impl Encoder {
    pub fn new(calendar: Arc<dyn UtcCalendar>) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &Arc<dyn UtcCalendar> {
        &self.calendar
    }

    /// Encode `time` as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    ///
    /// The result is always exactly 24 bytes.
    pub fn encode(&self, time: MillisecondTimestamp) -> Result<String> {
        let (seconds, millis) = time.split();

        let utc = self.calendar.utc_broken_down(seconds).ok_or_else(|| {
            log::error!("encode failed: cannot retrieve UTC calendar fields for {seconds}");
            TimeError::CalendarLookupFailed(seconds)
        })?;

        let mut buf = [0u8; DATE_TIME_LENGTH];
        let written = write_fixed(&utc, &mut buf);
        if written == 0 {
            log::error!("encode failed: {utc} does not fit the fixed layout");
            return Err(TimeError::Format);
        }
        let date_time = std::str::from_utf8(&buf[..written]).map_err(|_| TimeError::Format)?;

        let mut encoded = String::with_capacity(ENCODED_LENGTH);
        encoded.push_str(date_time);
        write!(encoded, ".{millis:03}Z").map_err(|_| TimeError::Format)?;
        log::debug!("encoded {} ms as {encoded}", time.as_millis());
        Ok(encoded)
    }

    /// Encode a `SystemTime`; see [`MillisecondTimestamp::from_system_time`].
    pub fn encode_system_time(&self, time: SystemTime) -> Result<String> {
        self.encode(MillisecondTimestamp::from_system_time(time))
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(Arc::new(ChronoCalendar))
    }
}

impl std::fmt::Debug for Encoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Encoder").finish_non_exhaustive()
    }
}
