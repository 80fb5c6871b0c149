//! Convert Timestamps — decode a service timestamp, do arithmetic on it,
//! and encode the result.
//!
//! Run with:
//!   cargo run --example convert_timestamps -p sdk-timing

use std::sync::Arc;

use sdk_timing::{BrokenDownTime, ChronoCalendar, MillisecondTimestamp, TimeUtils};

fn main() {
    let utils = TimeUtils::with_calendar(Arc::new(ChronoCalendar));

    // ── 1. Decode a fixed-format timestamp ──────────────────────────────────
    //
    // The input layout is YYYY-MM-DDTHH:MM:SS followed by a 5-byte postfix
    // that only has to be present, not meaningful.
    let received = "2017-08-03T19:53:14+0000";
    let seconds = utils
        .convert_iso8601_to_unix(received)
        .expect("decoding should succeed");
    println!("{received} -> {seconds} s since the epoch");

    // ── 2. Calendar fields to epoch seconds ─────────────────────────────────
    let moon_landing = BrokenDownTime::new(1969, 7, 20, 20, 17, 40);
    let before_epoch = utils.convert_to_utc_epoch(&moon_landing);
    println!("{moon_landing} -> {before_epoch} s (negative: before 1970)");

    // ── 3. Encode with millisecond precision ────────────────────────────────
    let later = MillisecondTimestamp::from_parts(seconds + 90, 250).expect("in range");
    let encoded = utils
        .convert_time_to_utc_iso8601(later)
        .expect("encoding should succeed");
    println!("90.25 s later -> {encoded}");

    // ── 4. Errors are distinguishable ───────────────────────────────────────
    match utils.convert_iso8601_to_unix("2017-08-03T19:53:14") {
        Ok(_) => unreachable!("the postfix is missing"),
        Err(e) => println!("rejected: {e} ({:?})", e.kind()),
    }

    match utils.current_unix_time() {
        Ok(now) => println!("now -> {now}"),
        Err(e) => println!("clock unusable: {e}"),
    }
}
