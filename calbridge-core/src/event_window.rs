//! Start/end translation and all-day inference for event saves.

use chrono::{DateTime, Utc};

const SECONDS_PER_DAY: i64 = 60 * 60 * 24;

/// The resolved start/end instants and all-day flag for an event save.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub all_day: bool,
}

impl EventWindow {
    /// Translates request timestamps into store instants.
    ///
    /// An explicit `all_day` flag is taken verbatim. Without one, a
    /// duration that is an exact multiple of a day marks the event
    /// all-day and pulls the end back one second so it falls before the
    /// following midnight; anything else is a timed event ending at
    /// `end_ms`.
    pub fn from_epoch_ms(start_ms: i64, end_ms: i64, all_day: Option<bool>) -> Self {
        let start = instant_from_ms(start_ms);

        if let Some(flag) = all_day {
            return EventWindow {
                start,
                end: instant_from_ms(end_ms),
                all_day: flag,
            };
        }

        let duration_secs = (end_ms - start_ms) / 1000;
        if duration_secs % SECONDS_PER_DAY == 0 {
            EventWindow {
                start,
                end: instant_from_ms(end_ms - 1_000),
                all_day: true,
            }
        } else {
            EventWindow {
                start,
                end: instant_from_ms(end_ms),
                all_day: false,
            }
        }
    }
}

/// Timestamps past chrono's representable range clamp to the maximum
/// instant.
pub(crate) fn instant_from_ms(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: i64 = 86_400_000;

    #[test]
    fn test_exact_day_multiple_becomes_all_day() {
        let start = 1_717_200_000_000;
        let window = EventWindow::from_epoch_ms(start, start + 2 * DAY_MS, None);
        assert!(window.all_day);
        assert_eq!(window.start.timestamp_millis(), start);
        assert_eq!(window.end.timestamp_millis(), start + 2 * DAY_MS - 1_000);
    }

    #[test]
    fn test_explicit_flag_overrides_inference() {
        let start = 1_717_200_000_000;
        let window = EventWindow::from_epoch_ms(start, start + DAY_MS, Some(false));
        assert!(!window.all_day);
        assert_eq!(window.end.timestamp_millis(), start + DAY_MS);

        let window = EventWindow::from_epoch_ms(start, start + 90_000_000, Some(true));
        assert!(window.all_day);
        assert_eq!(window.end.timestamp_millis(), start + 90_000_000);
    }

    #[test]
    fn test_partial_day_duration_stays_timed() {
        let start = 1_717_200_000_000;
        let window = EventWindow::from_epoch_ms(start, start + 3_600_000, None);
        assert!(!window.all_day);
        assert_eq!(window.end.timestamp_millis(), start + 3_600_000);
    }

    #[test]
    fn test_zero_duration_counts_as_all_day() {
        let start = 1_717_200_000_000;
        let window = EventWindow::from_epoch_ms(start, start, None);
        assert!(window.all_day);
        assert_eq!(window.end.timestamp_millis(), start - 1_000);
    }
}
