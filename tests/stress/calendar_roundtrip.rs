//! Stress test: the arithmetic engine inverts a reference UTC calendar for
//! epoch values spanning ±10000 years, and decoding agrees with it.

use chrono::{DateTime, Datelike, Timelike};

use sdk_timing::{decode, is_leap_year, to_epoch_seconds, BrokenDownTime};

const SECONDS_PER_YEAR_APPROX: i64 = 31_556_952;
const SPAN: i64 = 10_000 * SECONDS_PER_YEAR_APPROX;

/// Reference breakdown from chrono.
fn reference(epoch_seconds: i64) -> BrokenDownTime {
    let dt = DateTime::from_timestamp(epoch_seconds, 0).expect("within chrono range");
    BrokenDownTime::new(
        dt.year(),
        dt.month() as i32,
        dt.day() as i32,
        dt.hour() as i32,
        dt.minute() as i32,
        dt.second() as i32,
    )
}

#[test]
fn stress_roundtrip_across_twenty_thousand_years() {
    // An odd stride so samples land on every time of day and day of month.
    let stride = 7_919_993;
    let mut e = -SPAN;
    let mut checked = 0;
    while e <= SPAN {
        let utc = reference(e);
        assert_eq!(to_epoch_seconds(&utc), e, "round trip failed for {e} ({utc})");
        e += stride;
        checked += 1;
    }
    assert!(checked > 70_000);
}

#[test]
fn stress_roundtrip_every_day_near_epoch() {
    // Every midnight from 1800 to 2200, crossing the epoch in both directions.
    let start = to_epoch_seconds(&BrokenDownTime::date(1800, 1, 1));
    let end = to_epoch_seconds(&BrokenDownTime::date(2200, 1, 1));
    let mut e = start;
    while e < end {
        let utc = reference(e);
        assert_eq!(to_epoch_seconds(&utc), e, "round trip failed for {utc}");
        e += 86_400;
    }
}

#[test]
fn stress_roundtrip_last_second_of_each_year() {
    for year in -10_000..10_000 {
        let utc = BrokenDownTime::new(year, 12, 31, 23, 59, 59);
        let e = to_epoch_seconds(&utc);
        assert_eq!(reference(e), utc);
        assert_eq!(to_epoch_seconds(&BrokenDownTime::date(year + 1, 1, 1)), e + 1);
    }
}

#[test]
fn stress_year_lengths_follow_leap_rule() {
    for year in -10_000..10_000 {
        let len = to_epoch_seconds(&BrokenDownTime::date(year + 1, 1, 1))
            - to_epoch_seconds(&BrokenDownTime::date(year, 1, 1));
        let expected_days = if is_leap_year(year) { 366 } else { 365 };
        assert_eq!(len, expected_days * 86_400, "length of year {year}");
    }
}

#[test]
fn stress_decode_agrees_with_reference_for_four_digit_years() {
    let start = to_epoch_seconds(&BrokenDownTime::date(1, 1, 1));
    let end = to_epoch_seconds(&BrokenDownTime::new(9999, 12, 31, 23, 59, 59));
    let stride = 3_600 * 24 * 97 + 4_021;
    let mut e = start;
    while e <= end {
        let text = DateTime::from_timestamp(e, 0)
            .unwrap()
            .format("%Y-%m-%dT%H:%M:%S+0000")
            .to_string();
        assert_eq!(decode(&text), Ok(e), "decoding {text}");
        e += stride;
    }
}
