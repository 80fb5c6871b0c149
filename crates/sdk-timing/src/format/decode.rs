//! Fixed-format decoder — `YYYY-MM-DDTHH:MM:SS+XXXX` to epoch seconds.
//!
//! Fields are sliced at fixed offsets from [`LAYOUT`]; nothing scans for
//! separators. Only the total length and the numeric content of each field
//! are checked, so a wrong separator character or an arbitrary 5-byte
//! postfix is accepted. The postfix is not interpreted as a UTC offset:
//! `+0530` and `+0000` decode to the same instant.

use crate::calendar::{to_epoch_seconds, BrokenDownTime};
use crate::error::{Result, TimeError};
use crate::parse::parse_integer;

use super::{ENCODED_LENGTH, LAYOUT};

/// Decode a fixed-format timestamp into broken-down UTC fields.
pub fn decode_broken_down(text: &str) -> Result<BrokenDownTime> {
    if text.len() != ENCODED_LENGTH {
        log::error!(
            "decode failed: unexpected time string length {} (expected {ENCODED_LENGTH})",
            text.len()
        );
        return Err(TimeError::LengthMismatch {
            expected: ENCODED_LENGTH,
            actual: text.len(),
        });
    }

    let mut time = BrokenDownTime::date(0, 0, 0);
    for spec in &LAYOUT {
        let value = text
            .get(spec.offset..spec.offset + spec.width)
            .and_then(parse_integer)
            .and_then(|v| i32::try_from(v).ok());
        match value {
            Some(v) => spec.field.set(&mut time, v),
            None => {
                log::error!("decode failed: error parsing {}, input: {text:?}", spec.field);
                return Err(TimeError::FieldParse {
                    field: spec.field,
                    input: text.to_string(),
                });
            }
        }
    }
    Ok(time)
}

/// Decode a fixed-format timestamp into seconds since the Unix epoch.
pub fn decode(text: &str) -> Result<i64> {
    let time = decode_broken_down(text)?;
    let seconds = to_epoch_seconds(&time);
    log::debug!("decoded {text:?} as {seconds}");
    Ok(seconds)
}
