//! Fixed-format timestamp strings.
//!
//! Both directions share one layout table, so field offsets are defined in
//! exactly one place:
//!
//! ```text
//! decode input:  YYYY-MM-DDTHH:MM:SS+XXXX   (24 bytes, postfix unvalidated)
//! encode output: YYYY-MM-DDTHH:MM:SS.mmmZ   (24 bytes, always UTC)
//! ```

pub mod decode;
pub mod encode;

pub use decode::{decode, decode_broken_down};
pub use encode::{write_fixed, Encoder, MillisecondTimestamp};

use crate::calendar::BrokenDownTime;

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// A calendar or clock field of the fixed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl Field {
    /// Lowercase field name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
        }
    }

    pub(crate) fn get(self, time: &BrokenDownTime) -> i32 {
        match self {
            Field::Year => time.year,
            Field::Month => time.month,
            Field::Day => time.day,
            Field::Hour => time.hour,
            Field::Minute => time.minute,
            Field::Second => time.second,
        }
    }

    pub(crate) fn set(self, time: &mut BrokenDownTime, value: i32) {
        let slot = match self {
            Field::Year => &mut time.year,
            Field::Month => &mut time.month,
            Field::Day => &mut time.day,
            Field::Hour => &mut time.hour,
            Field::Minute => &mut time.minute,
            Field::Second => &mut time.second,
        };
        *slot = value;
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Position of one field inside the fixed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    /// Byte offset of the first digit.
    pub offset: usize,
    /// Number of digits.
    pub width: usize,
    /// Separator written after the field, if any. Not checked when decoding.
    pub separator: Option<u8>,
}

/// Field order, digit width and trailing separator.
const FIELDS: [(Field, usize, Option<u8>); 6] = [
    (Field::Year, 4, Some(b'-')),
    (Field::Month, 2, Some(b'-')),
    (Field::Day, 2, Some(b'T')),
    (Field::Hour, 2, Some(b':')),
    (Field::Minute, 2, Some(b':')),
    (Field::Second, 2, None),
];

/// Width of the trailing `+XXXX` offset-shaped postfix on decode input.
pub const POSTFIX_LENGTH: usize = 1 + 4;

/// Width of the trailing `.mmmZ` on encode output.
pub const MILLIS_SUFFIX_LENGTH: usize = 1 + 3 + 1;

/// The shared layout table.
pub const LAYOUT: [FieldSpec; 6] = build_layout();

/// Length of the `YYYY-MM-DDTHH:MM:SS` prefix.
pub const DATE_TIME_LENGTH: usize = {
    let last = LAYOUT[LAYOUT.len() - 1];
    last.offset + last.width
};

/// Exact length of an encoded timestamp, in bytes, in either direction.
pub const ENCODED_LENGTH: usize = DATE_TIME_LENGTH + POSTFIX_LENGTH;

const _: () = assert!(DATE_TIME_LENGTH + MILLIS_SUFFIX_LENGTH == ENCODED_LENGTH);

const fn build_layout() -> [FieldSpec; 6] {
    let mut layout = [FieldSpec {
        field: Field::Year,
        offset: 0,
        width: 0,
        separator: None,
    }; 6];
    let mut offset = 0;
    let mut i = 0;
    while i < FIELDS.len() {
        let (field, width, separator) = FIELDS[i];
        layout[i] = FieldSpec {
            field,
            offset,
            width,
            separator,
        };
        offset += width;
        if separator.is_some() {
            offset += 1;
        }
        i += 1;
    }
    layout
}
