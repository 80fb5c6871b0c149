//! Safe calendar access — epoch seconds to broken-down UTC fields.
//!
//! The encoder never breaks an epoch value down itself. It is handed a
//! [`UtcCalendar`] at construction and may call it from many threads at
//! once, so every implementation must be `Send + Sync`:
//!
//! - [`ChronoCalendar`] is reentrant and needs no locking.
//! - [`Serialized`] adapts a non-reentrant [`BreakdownPrimitive`] by holding
//!   it behind a mutex.

use std::sync::Mutex;

use chrono::{Datelike, Timelike};

use crate::calendar::BrokenDownTime;

/// Produces broken-down UTC fields for an epoch second.
pub trait UtcCalendar: Send + Sync {
    /// Return the UTC calendar fields for `epoch_seconds`, or `None` when the
    /// value is outside what the implementation can represent.
    fn utc_broken_down(&self, epoch_seconds: i64) -> Option<BrokenDownTime>;
}

// ---------------------------------------------------------------------------
// Chrono-backed calendar
// ---------------------------------------------------------------------------

/// Reentrant calendar backed by `chrono`'s proleptic Gregorian UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoCalendar;

impl UtcCalendar for ChronoCalendar {
    fn utc_broken_down(&self, epoch_seconds: i64) -> Option<BrokenDownTime> {
        let dt = chrono::DateTime::from_timestamp(epoch_seconds, 0)?;
        Some(BrokenDownTime::new(
            dt.year(),
            dt.month() as i32,
            dt.day() as i32,
            dt.hour() as i32,
            dt.minute() as i32,
            dt.second() as i32,
        ))
    }
}

// ---------------------------------------------------------------------------
// Serialized access to a non-reentrant primitive
// ---------------------------------------------------------------------------

/// A calendar breakdown that needs exclusive access while it runs, in the
/// manner of C `gmtime` with its shared static buffer.
pub trait BreakdownPrimitive: Send {
    fn breakdown(&mut self, epoch_seconds: i64) -> Option<BrokenDownTime>;
}

impl<F> BreakdownPrimitive for F
where
    F: FnMut(i64) -> Option<BrokenDownTime> + Send,
{
    fn breakdown(&mut self, epoch_seconds: i64) -> Option<BrokenDownTime> {
        self(epoch_seconds)
    }
}

/// Makes a [`BreakdownPrimitive`] safe for concurrent callers by running
/// one breakdown at a time.
#[derive(Debug, Default)]
pub struct Serialized<P> {
    inner: Mutex<P>,
}

impl<P: BreakdownPrimitive> Serialized<P> {
    pub fn new(primitive: P) -> Self {
        Self {
            inner: Mutex::new(primitive),
        }
    }

    /// Consume the wrapper and return the primitive, if the lock is intact.
    pub fn into_inner(self) -> Option<P> {
        self.inner.into_inner().ok()
    }
}

impl<P: BreakdownPrimitive> UtcCalendar for Serialized<P> {
    fn utc_broken_down(&self, epoch_seconds: i64) -> Option<BrokenDownTime> {
        match self.inner.lock() {
            Ok(mut primitive) => primitive.breakdown(epoch_seconds),
            Err(_) => {
                log::error!("calendar breakdown lock poisoned; refusing epoch second {epoch_seconds}");
                None
            }
        }
    }
}
