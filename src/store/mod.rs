//! The store seam.
//!
//! [`CalendarStore`] is the injected collaborator every handler talks to:
//! the real implementation wraps the platform store, tests inject
//! [`memory::MemoryStore`]. Handlers never see platform types; they
//! exchange the draft and snapshot values defined here.

#[cfg(target_os = "macos")]
pub mod event_kit;
pub mod memory;

use calbridge_core::components::DateComponents;
use calbridge_core::date_range::SearchRange;
use calbridge_core::entity::EntityKind;
use calbridge_core::error::StoreError;
use calbridge_core::event_window::EventWindow;
use calbridge_core::record::{EventRecord, ReminderRecord};

/// A calendar known to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarData {
    pub id: String,
    pub title: String,
    pub allows_modifications: bool,
}

/// Everything the bridge writes when saving an event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub location: String,
    pub notes: String,
    pub window: EventWindow,
    /// Target calendar for new events; `None` on updates, which keep the
    /// event's current calendar.
    pub calendar_id: Option<String>,
    /// Seconds relative to the event start; negative fires before.
    pub alarm_offset: Option<f64>,
}

/// Read-side projection of a store event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSnapshot {
    pub id: String,
    pub title: String,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// Everything the bridge writes when saving a reminder.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderDraft {
    pub title: String,
    pub notes: String,
    pub start: DateComponents,
    pub due: DateComponents,
    pub alarm_offset: Option<f64>,
}

/// Read-side projection of a store reminder.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderSnapshot {
    pub id: String,
    pub title: String,
    pub notes: Option<String>,
    pub start: Option<DateComponents>,
    pub due: Option<DateComponents>,
}

/// The device calendar/reminders store.
///
/// All methods are synchronous: backends built on completion handlers
/// resolve them before returning, exactly once per call. Implementations
/// hold no per-call state, so one store handle serves every request.
pub trait CalendarStore {
    /// Requests access to a store partition. `Ok(true)` means granted,
    /// `Ok(false)` denied; `Err` carries the platform's failure
    /// description. Called once per operation; the platform caches the
    /// user's decision.
    fn request_access(&self, entity: EntityKind) -> Result<bool, StoreError>;

    /// The calendar new entities land in when none is specified.
    fn default_calendar(&self, entity: EntityKind) -> Option<CalendarData>;

    fn calendar_with_id(&self, id: &str) -> Option<CalendarData>;

    /// Every calendar in a partition, including read-only ones.
    fn calendars(&self, entity: EntityKind) -> Vec<CalendarData>;

    /// Saves an event scoped to the single occurrence; recurrence series
    /// are never edited. An `id` of `None` creates a new event, `Some`
    /// rewrites the named event in place.
    fn save_event(&self, id: Option<&str>, draft: &EventDraft) -> Result<(), StoreError>;

    fn event_with_id(&self, id: &str) -> Option<EventSnapshot>;

    /// Removes the single occurrence of the named event.
    fn remove_event(&self, id: &str) -> Result<(), StoreError>;

    /// Events in any calendar whose occurrence overlaps the range.
    fn events_between(&self, range: &SearchRange) -> Vec<EventSnapshot>;

    /// Saves a reminder into the default reminder calendar with an
    /// immediate commit.
    fn save_reminder(&self, draft: &ReminderDraft) -> Result<(), StoreError>;

    /// Every reminder across all reminder calendars. A store with no
    /// reminder source yields an empty list rather than an error.
    fn fetch_reminders(&self) -> Vec<ReminderSnapshot>;
}

impl From<EventSnapshot> for EventRecord {
    fn from(event: EventSnapshot) -> Self {
        EventRecord {
            title: event.title,
            location: event.location,
            id: event.id,
            notes: event.notes,
        }
    }
}

impl From<ReminderSnapshot> for ReminderRecord {
    fn from(reminder: ReminderSnapshot) -> Self {
        ReminderRecord {
            title: reminder.title,
            id: reminder.id,
            notes: reminder.notes,
            start_date: reminder.start.unwrap_or_default(),
            due_date: reminder.due.unwrap_or_default(),
        }
    }
}
