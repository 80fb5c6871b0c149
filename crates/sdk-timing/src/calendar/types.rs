//! Data structures for UTC calendar fields.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Broken-down time
// ---------------------------------------------------------------------------

/// A UTC wall-clock instant split into calendar fields.
///
/// Fields use full values: `year` is e.g. `2018` and `month` runs `1..=12`.
/// `second` may be `60` to carry a leap-second encoding. Nothing here is
/// range-checked; the arithmetic engine gives out-of-range values a defined
/// (if meaningless) result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrokenDownTime {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    /// Always `false`. Carried for parity with C `struct tm`; never consulted.
    #[serde(default)]
    pub is_dst: bool,
}

impl BrokenDownTime {
    /// Create a broken-down time from its calendar and clock fields.
    pub fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            is_dst: false,
        }
    }

    /// Midnight UTC on the given date.
    pub fn date(year: i32, month: i32, day: i32) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }
}

impl std::fmt::Display for BrokenDownTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

// ---------------------------------------------------------------------------
// Leap years
// ---------------------------------------------------------------------------

/// Gregorian leap-year rule: divisible by 4, except centuries not divisible
/// by 400. Holds for proleptic (zero and negative) years as well.
pub fn is_leap_year(year: i32) -> bool {
    is_leap(i64::from(year))
}

pub(crate) fn is_leap(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}
