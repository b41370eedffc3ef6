//! Clock abstraction for synthesized note fields.
//!
//! Notes missing `id` or `timestamp` get values derived from the current
//! time. The clock is injected so tests get deterministic output; production
//! code uses [`SystemClock`].

use chrono::Utc;

/// Source of "now" for synthesized ids and timestamps.
pub trait Clock {
    /// Current time as unix milliseconds.
    fn now_millis(&self) -> i64;

    /// Current time as unix seconds.
    fn now_secs(&self) -> i64 {
        self.now_millis() / 1000
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Fixed time in unix milliseconds, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}
