//! Edge case tests: lengths, per-field parse failures, lenient separators
//! and postfix, and fields the decoder does not range-check.

use sdk_timing::format::{decode_broken_down, LAYOUT};
use sdk_timing::{decode, BrokenDownTime, ErrorKind, Field, TimeError, ENCODED_LENGTH};

const VALID: &str = "2017-08-03T19:53:14+0000";

// === Length ===

#[test]
fn edge_every_wrong_length_is_length_mismatch() {
    for len in 0..40 {
        if len == ENCODED_LENGTH {
            continue;
        }
        let text: String = VALID.chars().cycle().take(len).collect();
        assert_eq!(
            decode(&text),
            Err(TimeError::LengthMismatch {
                expected: ENCODED_LENGTH,
                actual: len
            }),
            "length {len}"
        );
    }
}

#[test]
fn edge_length_is_counted_in_bytes() {
    // 23 characters, 24 bytes.
    let text = "2017-08-03T19:53:14+00é";
    assert_eq!(text.chars().count(), 23);
    assert_eq!(decode(text), Ok(1_501_789_994));
}

// === Fields ===

#[test]
fn edge_each_field_reports_itself() {
    for spec in &LAYOUT {
        let mut bytes = VALID.as_bytes().to_vec();
        bytes[spec.offset] = b'x';
        let text = String::from_utf8(bytes).unwrap();
        match decode(&text) {
            Err(TimeError::FieldParse { field, input }) => {
                assert_eq!(field, spec.field);
                assert_eq!(input, text);
            }
            other => panic!("expected FieldParse({}) for {text}, got {other:?}", spec.field),
        }
    }
}

#[test]
fn edge_signed_and_spaced_fields_are_rejected() {
    for text in [
        "+017-08-03T19:53:14+0000",
        "-017-08-03T19:53:14+0000",
        "2017- 8-03T19:53:14+0000",
        "2017-08-+3T19:53:14+0000",
    ] {
        assert_eq!(decode(text).unwrap_err().kind(), ErrorKind::FieldParse, "{text}");
    }
}

#[test]
fn edge_month_field_error_is_month() {
    let err = decode("2017-AB-03T19:53:14+0000").unwrap_err();
    assert!(matches!(
        err,
        TimeError::FieldParse {
            field: Field::Month,
            ..
        }
    ));
}

// === Leniency ===

#[test]
fn edge_postfix_is_not_interpreted() {
    let utc = decode(VALID).unwrap();
    for postfix in ["+0000", "-0000", "+0530", "-1200", "Z    ", "xxxxx", ".123Z"] {
        let text = format!("2017-08-03T19:53:14{postfix}");
        assert_eq!(decode(&text), Ok(utc), "postfix {postfix:?}");
    }
}

#[test]
fn edge_separators_are_not_checked() {
    assert_eq!(decode("2017x08x03x19x53x14+0000"), decode(VALID));
}

#[test]
fn edge_zero_and_overflowing_fields_flow_through() {
    let t = decode_broken_down("0000-00-00T99:99:99+0000").unwrap();
    assert_eq!(t, BrokenDownTime::new(0, 0, 0, 99, 99, 99));
    // Out-of-range fields still produce a value rather than an error.
    assert!(decode("0000-00-00T99:99:99+0000").is_ok());
}

#[test]
fn edge_leap_second_encoding() {
    assert_eq!(
        decode("2016-12-31T23:59:60+0000"),
        decode("2017-01-01T00:00:00+0000")
    );
}

#[test]
fn edge_leap_day_boundaries() {
    let feb28 = decode("1900-02-28T00:00:00+0000").unwrap();
    let mar1 = decode("1900-03-01T00:00:00+0000").unwrap();
    assert_eq!(mar1 - feb28, 86_400, "1900 has no Feb 29");

    let feb28 = decode("2000-02-28T00:00:00+0000").unwrap();
    let mar1 = decode("2000-03-01T00:00:00+0000").unwrap();
    assert_eq!(mar1 - feb28, 2 * 86_400, "2000 has Feb 29");
}
