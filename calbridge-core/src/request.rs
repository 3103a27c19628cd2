//! Typed request payloads and the validation step.
//!
//! Each operation deserializes its `params` object into one of these
//! shapes, then validates required fields before the store is contacted.
//! The message a missing field produces is part of the observable
//! contract, so validation lives here rather than in serde attributes.

use serde::Deserialize;

use crate::components::DateComponents;
use crate::error::BridgeError;

/// Payload for `createEvent` and `updateEvent`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub id: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    /// Epoch milliseconds; must be positive.
    pub start_date: Option<i64>,
    /// Epoch milliseconds; must be positive.
    pub end_date: Option<i64>,
    pub calendar_id: Option<String>,
    pub all_day: Option<bool>,
    /// Seconds relative to the event start; negative fires before.
    pub alarm_offset: Option<f64>,
}

/// Payload for `findEvent`. Every field is an optional filter.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilterPayload {
    pub title: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
}

/// Payload for `createReminder`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPayload {
    pub title: Option<String>,
    pub notes: Option<String>,
    pub start_date: Option<DateComponentPayload>,
    pub due_date: Option<DateComponentPayload>,
    /// Seconds relative to the reminder start; negative fires before.
    pub alarm_offset: Option<f64>,
}

/// Payload for `deleteEvent` / `deleteEventById`.
#[derive(Debug, Default, Deserialize)]
pub struct IdPayload {
    pub id: Option<String>,
}

/// Payload for `findReminderByTitle`.
#[derive(Debug, Default, Deserialize)]
pub struct TitlePayload {
    pub title: Option<String>,
}

/// A not-yet-validated date component object. Accepts any JSON number;
/// fractions truncate toward zero.
#[derive(Debug, Default, Deserialize)]
pub struct DateComponentPayload {
    pub day: Option<f64>,
    pub month: Option<f64>,
    pub year: Option<f64>,
    pub hour: Option<f64>,
    pub minute: Option<f64>,
}

impl DateComponentPayload {
    /// Checks the five subfields in order and reports the first missing
    /// one as `{property}.{field}`.
    pub fn validated(&self, property: &str) -> Result<DateComponents, BridgeError> {
        let day = subfield(self.day, property, "day")?;
        let month = subfield(self.month, property, "month")?;
        let year = subfield(self.year, property, "year")?;
        let hour = subfield(self.hour, property, "hour")?;
        let minute = subfield(self.minute, property, "minute")?;

        Ok(DateComponents {
            day,
            month,
            year,
            hour,
            minute,
        })
    }
}

fn subfield(value: Option<f64>, property: &str, field: &str) -> Result<i64, BridgeError> {
    value
        .map(|v| v as i64)
        .ok_or_else(|| BridgeError::MissingProperty(format!("{property}.{field}")))
}

/// Requires a present, non-empty string field.
pub fn require_text<'a>(value: Option<&'a str>, property: &str) -> Result<&'a str, BridgeError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(BridgeError::MissingProperty(property.to_string())),
    }
}

/// Requires a present, positive epoch-millisecond timestamp.
pub fn require_epoch_ms(value: Option<i64>, property: &str) -> Result<i64, BridgeError> {
    match value {
        Some(ms) if ms > 0 => Ok(ms),
        _ => Err(BridgeError::MissingProperty(property.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_rejects_missing_and_empty() {
        assert_eq!(
            require_text(None, "title").unwrap_err().to_string(),
            "Must provide title property"
        );
        assert_eq!(
            require_text(Some(""), "title").unwrap_err().to_string(),
            "Must provide title property"
        );
        assert_eq!(require_text(Some("Lunch"), "title").unwrap(), "Lunch");
    }

    #[test]
    fn test_require_epoch_ms_rejects_non_positive() {
        assert_eq!(
            require_epoch_ms(None, "startDate").unwrap_err().to_string(),
            "Must provide startDate property"
        );
        assert_eq!(
            require_epoch_ms(Some(0), "startDate").unwrap_err().to_string(),
            "Must provide startDate property"
        );
        assert_eq!(
            require_epoch_ms(Some(-5), "endDate").unwrap_err().to_string(),
            "Must provide endDate property"
        );
        assert_eq!(require_epoch_ms(Some(1), "startDate").unwrap(), 1);
    }

    #[test]
    fn test_date_component_validation_reports_first_missing_subfield() {
        let payload: DateComponentPayload =
            serde_json::from_str(r#"{"month": 6, "year": 2024}"#).unwrap();
        assert_eq!(
            payload.validated("startDate").unwrap_err().to_string(),
            "Must provide startDate.day property"
        );

        let payload: DateComponentPayload =
            serde_json::from_str(r#"{"day": 1, "month": 6, "year": 2024, "hour": 9}"#).unwrap();
        assert_eq!(
            payload.validated("dueDate").unwrap_err().to_string(),
            "Must provide dueDate.minute property"
        );
    }

    #[test]
    fn test_date_component_validation_truncates_fractions() {
        let payload: DateComponentPayload = serde_json::from_str(
            r#"{"day": 1.9, "month": 6, "year": 2024, "hour": 9, "minute": 30}"#,
        )
        .unwrap();
        let components = payload.validated("startDate").unwrap();
        assert_eq!(components.day, 1);
        assert_eq!(components.minute, 30);
    }

    #[test]
    fn test_event_payload_uses_camel_case_wire_names() {
        let payload: EventPayload = serde_json::from_str(
            r#"{"title": "Lunch", "startDate": 1000, "endDate": 2000, "calendarId": "work", "allDay": true, "alarmOffset": -300.0}"#,
        )
        .unwrap();
        assert_eq!(payload.start_date, Some(1000));
        assert_eq!(payload.calendar_id.as_deref(), Some("work"));
        assert_eq!(payload.all_day, Some(true));
        assert_eq!(payload.alarm_offset, Some(-300.0));
    }
}
