//! Response records projected from store entities.

use serde::{Deserialize, Serialize};

use crate::components::DateComponents;

/// Subset projection of a store event. Absent location/notes pass through
/// as nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub title: String,
    pub location: Option<String>,
    pub id: String,
    pub notes: Option<String>,
}

/// Projection of a store reminder; date subcomponents the store never set
/// read as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRecord {
    pub title: String,
    pub id: String,
    pub notes: Option<String>,
    pub start_date: DateComponents,
    pub due_date: DateComponents,
}

/// One entry of `getAvailableCalendars`. `display_name` duplicates `name`
/// for compatibility with the plugin surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarRecord {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub default_calendar: bool,
}

/// `findEvent` response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundEvents {
    pub events: Vec<EventRecord>,
}

/// `findReminderByTitle` response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundReminders {
    pub reminders: Vec<ReminderRecord>,
}

/// `getAvailableCalendars` response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableCalendars {
    pub available_calendars: Vec<CalendarRecord>,
}
