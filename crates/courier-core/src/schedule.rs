//! # Schedule Module
//!
//! Order timestamp parsing and rush hour evaluation.
//!
//! ## Rush Hour Evaluation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "2024-01-19T15:00:00Z"                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_order_time ── not ISO-8601? ──► ValidationError (no fee!)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DateTime<Utc> ──► RushWindow::contains                                 │
//! │       │                                                                 │
//! │       ├── weekday == rush day?            (Monday = 0)                  │
//! │       └── hour in [begin, end)?           (half-open: end hour is off)  │
//! │                                                                         │
//! │  Both must hold for the multiplier to apply.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// Timestamp Parsing
// =============================================================================

/// Parses an order timestamp, normalized to UTC.
///
/// ## Rules
/// - Must be ISO-8601 / RFC 3339 with an explicit offset (`Z` or `+hh:mm`)
/// - Any offset is accepted; the weekday and hour are evaluated in UTC
///
/// ## Example
/// ```rust
/// use courier_core::schedule::parse_order_time;
///
/// assert!(parse_order_time("2024-01-15T13:00:00Z").is_ok());
/// assert!(parse_order_time("2024-01-15T13:00:00+02:00").is_ok());
/// assert!(parse_order_time("2024-01-15 13:00").is_err());
/// assert!(parse_order_time("next tuesday").is_err());
/// ```
pub fn parse_order_time(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| ValidationError::InvalidFormat {
            field: "time".to_string(),
            reason: e.to_string(),
        })
}

// =============================================================================
// Rush Window
// =============================================================================

/// A weekly rush hour window: one weekday, a half-open hour range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RushWindow {
    /// Weekday the window falls on (Monday = 0 .. Sunday = 6).
    pub day: u8,

    /// First hour inside the window (inclusive).
    pub begin_hour: u8,

    /// First hour outside the window (exclusive).
    pub end_hour: u8,
}

impl RushWindow {
    /// Checks whether a point in time falls inside the window.
    ///
    /// The hour range is half-open: an order at exactly `end_hour:00` is
    /// outside the window.
    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        let weekday = time.weekday().num_days_from_monday();
        if weekday != self.day as u32 {
            return false;
        }

        let hour = time.hour();
        hour >= self.begin_hour as u32 && hour < self.end_hour as u32
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Friday 15:00-19:00, the default tariff window.
    fn friday_afternoon() -> RushWindow {
        RushWindow {
            day: 4,
            begin_hour: 15,
            end_hour: 19,
        }
    }

    fn parse(raw: &str) -> DateTime<Utc> {
        parse_order_time(raw).expect("test timestamp must parse")
    }

    #[test]
    fn test_outside_rush_hours() {
        let window = friday_afternoon();

        // Monday afternoon
        assert!(!window.contains(parse("2024-01-15T13:00:00Z")));
        // Sunday at an hour that would qualify on Friday
        assert!(!window.contains(parse("2024-01-21T15:00:00Z")));
        // Friday, before the window opens
        assert!(!window.contains(parse("2024-01-19T13:00:00Z")));
        // Friday at exactly end hour: half-open, outside
        assert!(!window.contains(parse("2024-01-19T19:00:00Z")));
    }

    #[test]
    fn test_inside_rush_hours() {
        let window = friday_afternoon();

        assert!(window.contains(parse("2024-01-19T15:00:00Z")));
        assert!(window.contains(parse("2024-01-12T16:00:00Z")));
        assert!(window.contains(parse("2024-01-05T18:59:00Z")));
        assert!(window.contains(parse("2024-01-05T15:01:00Z")));
    }

    #[test]
    fn test_offset_is_normalized_to_utc() {
        let window = friday_afternoon();

        // 17:30+02:00 is 15:30 UTC on Friday: inside
        assert!(window.contains(parse("2024-01-19T17:30:00+02:00")));
        // 15:30-05:00 is 20:30 UTC on Friday: outside
        assert!(!window.contains(parse("2024-01-19T15:30:00-05:00")));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_order_time("").is_err());
        assert!(parse_order_time("next tuesday").is_err());
        assert!(parse_order_time("2024-13-99T25:00:00Z").is_err());
        // Missing explicit offset
        assert!(parse_order_time("2024-01-15T13:00:00").is_err());
    }

    #[test]
    fn test_parse_error_names_the_field() {
        let err = parse_order_time("garbage").expect_err("must fail");
        assert!(err.to_string().starts_with("time has invalid format"));
    }
}
