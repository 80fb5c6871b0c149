//! sdk-timing C FFI bindings.
//!
//! Provides a C-compatible API for the four UTC conversions: calendar
//! fields to epoch seconds, fixed-format decoding, fixed-format encoding and
//! reading the current time.
//!
#![allow(clippy::doc_overindented_list_items)]
//! # Memory contract
//!
//! - All `*mut c_char` output strings are heap-allocated via [`CString`] and
//!   **must** be freed by the caller using [`st_free_string`].
//! - Opaque `*mut c_void` handles from [`st_time_utils_new`] are
//!   heap-allocated Rust `Box`es and **must** be freed using
//!   [`st_time_utils_free`].
//! - The static string returned by [`st_version`] is baked into the binary;
//!   it must **not** be freed.
//! - Out-parameters are written only when `ST_OK` is returned.
//!
//! # Error codes
//!
//! | Constant              | Value | Meaning                                  |
//! |-----------------------|-------|------------------------------------------|
//! | `ST_OK`               | 0     | Success                                  |
//! | `ST_ERR_NULL_PTR`     | -1    | A required pointer was null              |
//! | `ST_ERR_INVALID_UTF8` | -2    | A string was not valid UTF-8             |
//! | `ST_ERR_LENGTH`       | -3    | Encoded string has the wrong length      |
//! | `ST_ERR_FIELD`        | -4    | A fixed-width field is not numeric       |
//! | `ST_ERR_CALENDAR`     | -5    | UTC calendar breakdown unavailable       |
//! | `ST_ERR_FORMAT`       | -6    | Calendar fields do not fit the layout    |
//! | `ST_ERR_CLOCK`        | -7    | System clock reads before the epoch      |

use std::ffi::{c_void, CStr, CString};
use std::os::raw::c_char;

use sdk_timing::{
    clock, to_epoch_seconds, BrokenDownTime, ErrorKind, MillisecondTimestamp, TimeError,
    TimeUtils,
};

// ── Error codes ───────────────────────────────────────────────────────────────

/// Success.
pub const ST_OK: i32 = 0;
/// A required pointer argument was null.
pub const ST_ERR_NULL_PTR: i32 = -1;
/// A string argument contained invalid UTF-8.
pub const ST_ERR_INVALID_UTF8: i32 = -2;
/// The encoded timestamp did not have the fixed length.
pub const ST_ERR_LENGTH: i32 = -3;
/// A fixed-width field of the encoded timestamp was not numeric.
pub const ST_ERR_FIELD: i32 = -4;
/// The UTC calendar breakdown could not be produced.
pub const ST_ERR_CALENDAR: i32 = -5;
/// The calendar fields could not be formatted into the fixed layout.
pub const ST_ERR_FORMAT: i32 = -6;
/// The system clock reported a time before the Unix epoch.
pub const ST_ERR_CLOCK: i32 = -7;

// ── C types ───────────────────────────────────────────────────────────────────

/// Broken-down UTC time, laid out like the portable part of `struct tm`
/// except that `year` is the full year and `month` is 1-based.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StBrokenDownTime {
    pub year: libc::c_int,
    pub month: libc::c_int,
    pub day: libc::c_int,
    pub hour: libc::c_int,
    pub minute: libc::c_int,
    pub second: libc::c_int,
    /// Ignored on input.
    pub is_dst: libc::c_int,
}

impl From<&StBrokenDownTime> for BrokenDownTime {
    fn from(tm: &StBrokenDownTime) -> Self {
        BrokenDownTime::new(tm.year, tm.month, tm.day, tm.hour, tm.minute, tm.second)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Map a [`TimeError`] to one of the `ST_ERR_*` constants.
fn map_error(e: &TimeError) -> i32 {
    match e.kind() {
        ErrorKind::NullOutputParameter => ST_ERR_NULL_PTR,
        ErrorKind::LengthMismatch => ST_ERR_LENGTH,
        ErrorKind::FieldParse => ST_ERR_FIELD,
        ErrorKind::CalendarLookupFailed => ST_ERR_CALENDAR,
        ErrorKind::Format => ST_ERR_FORMAT,
        ErrorKind::Clock => ST_ERR_CLOCK,
    }
}

/// Report a missing output slot.
fn null_output(name: &'static str) -> i32 {
    let err = TimeError::NullOutputParameter(name);
    log::error!("{err}");
    map_error(&err)
}

/// Convert a `*const c_char` to a `&str`, returning an error code on failure.
///
/// # Safety
///
/// `ptr` must either be null (handled gracefully) or point to a valid,
/// null-terminated C string that remains valid for the duration of `'a`.
unsafe fn cstr_to_str<'a>(ptr: *const c_char) -> Result<&'a str, i32> {
    if ptr.is_null() {
        return Err(ST_ERR_NULL_PTR);
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| ST_ERR_INVALID_UTF8)
}

// ── Version ───────────────────────────────────────────────────────────────────

/// Return the library version string as a null-terminated C string.
///
/// The caller **must not** free this pointer.
#[no_mangle]
pub extern "C" fn st_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

// ── Conversions ───────────────────────────────────────────────────────────────

/// Convert broken-down UTC fields to seconds since the Unix epoch.
///
/// # Parameters
///
/// - `utc_tm`  — calendar fields; `year` is the full year, `month` is 1-12.
///               Out-of-range values are not rejected.
/// - `seconds_out` — receives the epoch seconds.
///
/// # Returns
///
/// `ST_OK` on success; `ST_ERR_NULL_PTR` if either pointer is null.
///
/// # Safety
///
/// Non-null pointers must be valid for reads/writes of their pointee type.
#[no_mangle]
pub unsafe extern "C" fn st_to_epoch_seconds(
    utc_tm: *const StBrokenDownTime,
    seconds_out: *mut i64,
) -> i32 {
    if utc_tm.is_null() {
        return ST_ERR_NULL_PTR;
    }
    if seconds_out.is_null() {
        return null_output("seconds_out");
    }
    *seconds_out = to_epoch_seconds(&BrokenDownTime::from(&*utc_tm));
    ST_OK
}

/// Decode a `YYYY-MM-DDTHH:MM:SS+XXXX` string to epoch seconds.
///
/// # Parameters
///
/// - `text`        — null-terminated, exactly 24 bytes long.
/// - `seconds_out` — receives the epoch seconds.
///
/// # Returns
///
/// `ST_OK` on success; `ST_ERR_LENGTH` or `ST_ERR_FIELD` for malformed
/// input; `ST_ERR_NULL_PTR` / `ST_ERR_INVALID_UTF8` for bad arguments.
///
/// # Safety
///
/// `text` must be null or a valid C string; `seconds_out` must be null or
/// valid for writes.
#[no_mangle]
pub unsafe extern "C" fn st_decode_iso8601(text: *const c_char, seconds_out: *mut i64) -> i32 {
    let text_str = match cstr_to_str(text) {
        Ok(s) => s,
        Err(e) => return e,
    };

    if seconds_out.is_null() {
        return null_output("seconds_out");
    }

    match sdk_timing::decode(text_str) {
        Ok(seconds) => {
            *seconds_out = seconds;
            ST_OK
        }
        Err(e) => map_error(&e),
    }
}

/// Read the system clock as whole seconds since the Unix epoch.
///
/// # Returns
///
/// `ST_OK` on success; `ST_ERR_CLOCK` if the clock reads before 1970.
///
/// # Safety
///
/// `seconds_out` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn st_current_unix_time(seconds_out: *mut i64) -> i32 {
    if seconds_out.is_null() {
        return null_output("seconds_out");
    }
    match clock::now() {
        Ok(seconds) => {
            *seconds_out = seconds;
            ST_OK
        }
        Err(e) => map_error(&e),
    }
}

// ── Encoder handle ────────────────────────────────────────────────────────────

/// Create a conversion handle backed by the default UTC calendar.
///
/// The handle may be shared between threads. Release it with
/// [`st_time_utils_free`].
#[no_mangle]
pub extern "C" fn st_time_utils_new() -> *mut c_void {
    Box::into_raw(Box::new(TimeUtils::new())) as *mut c_void
}

/// Free a handle previously returned by [`st_time_utils_new`].
///
/// Passing `NULL` is a no-op.
///
/// # Safety
///
/// `utils` must be either null or a pointer returned by
/// [`st_time_utils_new`] that has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn st_time_utils_free(utils: *mut c_void) {
    if !utils.is_null() {
        drop(Box::from_raw(utils as *mut TimeUtils));
    }
}

/// Encode milliseconds since the epoch as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
///
/// # Parameters
///
/// - `utils`       — handle from [`st_time_utils_new`].
/// - `millis`      — signed milliseconds since the epoch.
/// - `encoded_out` — on success, receives an owned `*mut c_char` that the
///                   caller must free with [`st_free_string`].
///
/// # Returns
///
/// `ST_OK` on success; `ST_ERR_CALENDAR` or `ST_ERR_FORMAT` when the time
/// point cannot be encoded; `ST_ERR_NULL_PTR` for null arguments.
///
/// # Safety
///
/// `utils` must be null or a live handle; `encoded_out` must be null or
/// valid for writes.
#[no_mangle]
pub unsafe extern "C" fn st_encode_iso8601(
    utils: *const c_void,
    millis: i64,
    encoded_out: *mut *mut c_char,
) -> i32 {
    if utils.is_null() {
        return ST_ERR_NULL_PTR;
    }
    if encoded_out.is_null() {
        return null_output("encoded_out");
    }
    let utils = &*(utils as *const TimeUtils);

    let encoded = match utils.convert_time_to_utc_iso8601(MillisecondTimestamp::from_millis(millis))
    {
        Ok(s) => s,
        Err(e) => return map_error(&e),
    };
    match CString::new(encoded) {
        Ok(cs) => {
            *encoded_out = cs.into_raw();
            ST_OK
        }
        Err(_) => ST_ERR_FORMAT,
    }
}

// ── String cleanup ────────────────────────────────────────────────────────────

/// Free a string that was allocated by this library.
///
/// Passing `NULL` is a no-op.
///
/// # Safety
///
/// `s` must be either null or a pointer that was returned by one of the
/// `st_*` functions in this crate and that has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn st_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
