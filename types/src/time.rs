//! Timestamp type used throughout the engine.
//!
//! Timestamps are Unix epoch milliseconds (UTC). Millisecond resolution
//! matches the persisted record format; calendar-day bucketing for the
//! daily verification cap uses the device's local timezone.

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A Unix timestamp in milliseconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(millis: u64) -> Self {
        Self(millis)
    }

    /// Get the current system time as a `Timestamp`.
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_millis() as u64;
        Self(millis)
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Milliseconds elapsed since this timestamp (relative to `now`).
    /// Saturates to zero if `now` is earlier.
    pub fn elapsed_since(&self, now: Timestamp) -> u64 {
        now.0.saturating_sub(self.0)
    }

    /// Whether this timestamp + duration has passed relative to `now`.
    pub fn has_expired(&self, duration_millis: u64, now: Timestamp) -> bool {
        now.0 >= self.0.saturating_add(duration_millis)
    }

    /// The local calendar date this timestamp falls on, as `YYYY-MM-DD`.
    ///
    /// The daily verification cap counts submissions per local calendar day
    /// by comparing these strings. Returns an empty string for timestamps
    /// outside the representable chrono range.
    pub fn local_date_string(&self) -> String {
        match Local.timestamp_millis_opt(self.0 as i64).single() {
            Some(dt) => dt.format("%Y-%m-%d").to_string(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_since_forward() {
        let t = Timestamp::new(1_000);
        assert_eq!(t.elapsed_since(Timestamp::new(3_500)), 2_500);
    }

    #[test]
    fn elapsed_since_saturates() {
        let t = Timestamp::new(5_000);
        assert_eq!(t.elapsed_since(Timestamp::new(1_000)), 0);
    }

    #[test]
    fn expiry_boundary() {
        let t = Timestamp::new(10_000);
        assert!(!t.has_expired(1_000, Timestamp::new(10_999)));
        assert!(t.has_expired(1_000, Timestamp::new(11_000)));
    }

    #[test]
    fn same_millisecond_same_local_day() {
        let t = Timestamp::new(1_700_000_000_000);
        assert_eq!(t.local_date_string(), t.local_date_string());
        assert!(!t.local_date_string().is_empty());
    }

    #[test]
    fn distant_timestamps_differ_in_local_day() {
        let a = Timestamp::new(1_700_000_000_000);
        let b = Timestamp::new(1_700_000_000_000 + 3 * 24 * 3_600 * 1_000);
        assert_ne!(a.local_date_string(), b.local_date_string());
    }
}
