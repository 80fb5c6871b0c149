//! Calendar arithmetic engine — broken-down UTC fields to epoch seconds.
//!
//! Closed-form and O(1): no iteration over years or days, and no use of
//! the platform's timezone database.

use super::types::{is_leap, BrokenDownTime};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
const DAYS_PER_YEAR: i64 = 365;
const SECONDS_PER_YEAR: i64 = DAYS_PER_YEAR * SECONDS_PER_DAY;

const EPOCH_YEAR: i64 = 1970;

/// Days elapsed before the first of each month in a common year.
const DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Days elapsed before the first of each month in a leap year.
const DAYS_BEFORE_MONTH_LEAP: [i64; 12] = [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

// Offsets that turn "leap years in [1970, 1970 + y)" into plain truncating
// divisions. For y >= 0 the numerator is shifted up to the next multiple
// boundary after the epoch year; for y < 0 it is shifted down past the
// boundary before it, so truncation toward zero counts whole cycles on both
// sides. Both branches yield 0 at y = 0.
const POS_BASE_4: i64 = (EPOCH_YEAR + 3) % 4;
const POS_BASE_100: i64 = (EPOCH_YEAR + 99) % 100;
const POS_BASE_400: i64 = (EPOCH_YEAR + 399) % 400;
const NEG_BASE_4: i64 = 4 - EPOCH_YEAR % 4;
const NEG_BASE_100: i64 = 100 - EPOCH_YEAR % 100;
const NEG_BASE_400: i64 = 400 - EPOCH_YEAR % 400;

// Rust integer division truncates toward zero; the negative branch relies on it.
const _: () = assert!(-1 / 2 == 0);

/// Number of leap days between the epoch year and `1970 + years_since_epoch`.
///
/// For a non-negative offset this counts leap years in
/// `[1970, 1970 + years_since_epoch)`; for a negative offset it is the
/// negated count of leap years in `[1970 + years_since_epoch, 1970)`.
pub fn leap_days_since_epoch(years_since_epoch: i64) -> i64 {
    let y = years_since_epoch;
    if y >= 0 {
        (y + POS_BASE_4) / 4 - (y + POS_BASE_100) / 100 + (y + POS_BASE_400) / 400
    } else {
        (y - NEG_BASE_4) / 4 - (y - NEG_BASE_100) / 100 + (y - NEG_BASE_400) / 400
    }
}

/// Convert broken-down UTC fields into seconds since the Unix epoch.
///
/// Never fails. Months outside `1..=12` carry into the year (month 13 is
/// January of the following year, month 0 is December of the previous
/// one); all other fields contribute linearly, so day 0 is the last day of
/// the previous month and second 60 rolls into the next minute. Pre-1970
/// dates produce negative values.
pub fn to_epoch_seconds(utc: &BrokenDownTime) -> i64 {
    let month_index = i64::from(utc.month) - 1;
    let year = i64::from(utc.year) + month_index.div_euclid(12);
    let month_index = month_index.rem_euclid(12) as usize;

    let years_since_epoch = year - EPOCH_YEAR;
    let mut seconds = years_since_epoch * SECONDS_PER_YEAR
        + leap_days_since_epoch(years_since_epoch) * SECONDS_PER_DAY;

    let days_before_month = if is_leap(year) {
        DAYS_BEFORE_MONTH_LEAP[month_index]
    } else {
        DAYS_BEFORE_MONTH[month_index]
    };
    seconds += days_before_month * SECONDS_PER_DAY;

    seconds += (i64::from(utc.day) - 1) * SECONDS_PER_DAY
        + i64::from(utc.hour) * SECONDS_PER_HOUR
        + i64::from(utc.minute) * SECONDS_PER_MINUTE
        + i64::from(utc.second);
    seconds
}
