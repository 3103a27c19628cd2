//! Date window for event searches.

use chrono::{DateTime, Duration, Utc};

use crate::event_window::instant_from_ms;

/// How far a date-unbounded `findEvent` reaches in either direction.
pub const SEARCH_LIMIT_DAYS: i64 = 1000;

/// The window a `findEvent` query covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl Default for SearchRange {
    /// Default window: ±SEARCH_LIMIT_DAYS from now.
    fn default() -> Self {
        let now = Utc::now();
        SearchRange {
            from: now - Duration::days(SEARCH_LIMIT_DAYS),
            to: now + Duration::days(SEARCH_LIMIT_DAYS),
        }
    }
}

impl SearchRange {
    /// Builds the window from optional request timestamps; each missing
    /// side falls back to the search limit.
    pub fn from_epoch_ms(start_ms: Option<i64>, end_ms: Option<i64>) -> Self {
        let defaults = SearchRange::default();
        SearchRange {
            from: start_ms.map(instant_from_ms).unwrap_or(defaults.from),
            to: end_ms.map(instant_from_ms).unwrap_or(defaults.to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_spans_the_search_limit() {
        let range = SearchRange::default();
        assert_eq!((range.to - range.from).num_days(), 2 * SEARCH_LIMIT_DAYS);
    }

    #[test]
    fn test_explicit_bounds_override_the_defaults() {
        let range = SearchRange::from_epoch_ms(Some(1_000_000), None);
        assert_eq!(range.from.timestamp_millis(), 1_000_000);
        assert!(range.to > Utc::now());

        let range = SearchRange::from_epoch_ms(Some(1_000_000), Some(2_000_000));
        assert_eq!(range.to.timestamp_millis(), 2_000_000);
    }
}
