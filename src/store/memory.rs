//! In-process store double.
//!
//! Backs the test-suite: authorization outcomes are configurable and every
//! mutation is observable, so tests can assert that a rejected call never
//! reached the store.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use calbridge_core::components::DateComponents;
use calbridge_core::date_range::SearchRange;
use calbridge_core::entity::EntityKind;
use calbridge_core::error::StoreError;

use super::{
    CalendarData, CalendarStore, EventDraft, EventSnapshot, ReminderDraft, ReminderSnapshot,
};

/// Authorization outcome the double reports for a partition.
#[derive(Debug, Clone)]
pub enum Access {
    Granted,
    Denied,
    Failed(String),
}

/// A saved event, as the double retains it.
#[derive(Debug, Clone)]
pub struct StoredEvent {
    pub id: String,
    pub title: String,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub all_day: bool,
    pub calendar_id: Option<String>,
    pub alarms: Vec<f64>,
}

/// A saved reminder, as the double retains it.
#[derive(Debug, Clone)]
pub struct StoredReminder {
    pub id: String,
    pub title: String,
    pub notes: Option<String>,
    pub start: Option<DateComponents>,
    pub due: Option<DateComponents>,
    pub alarms: Vec<f64>,
}

struct State {
    event_calendars: Vec<CalendarData>,
    reminder_calendars: Vec<CalendarData>,
    default_event_calendar: Option<String>,
    default_reminder_calendar: Option<String>,
    events: Vec<StoredEvent>,
    reminders: Vec<StoredReminder>,
    event_access: Access,
    reminder_access: Access,
}

pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    /// A store with one writable default calendar per partition and
    /// access granted everywhere.
    pub fn new() -> Self {
        let state = State {
            event_calendars: vec![CalendarData {
                id: "calendar-default".to_string(),
                title: "Personal".to_string(),
                allows_modifications: true,
            }],
            reminder_calendars: vec![CalendarData {
                id: "reminders-default".to_string(),
                title: "Reminders".to_string(),
                allows_modifications: true,
            }],
            default_event_calendar: Some("calendar-default".to_string()),
            default_reminder_calendar: Some("reminders-default".to_string()),
            events: Vec::new(),
            reminders: Vec::new(),
            event_access: Access::Granted,
            reminder_access: Access::Granted,
        };

        MemoryStore {
            state: Mutex::new(state),
        }
    }

    /// Registers an extra event calendar and returns its id.
    pub fn add_event_calendar(&self, title: &str, allows_modifications: bool) -> String {
        let id = Uuid::new_v4().to_string();
        self.state
            .lock()
            .unwrap()
            .event_calendars
            .push(CalendarData {
                id: id.clone(),
                title: title.to_string(),
                allows_modifications,
            });
        id
    }

    pub fn set_access(&self, entity: EntityKind, access: Access) {
        let mut state = self.state.lock().unwrap();
        match entity {
            EntityKind::Event => state.event_access = access,
            EntityKind::Reminder => state.reminder_access = access,
        }
    }

    /// Snapshot of every saved event, in insertion order.
    pub fn saved_events(&self) -> Vec<StoredEvent> {
        self.state.lock().unwrap().events.clone()
    }

    /// Snapshot of every saved reminder, in insertion order.
    pub fn saved_reminders(&self) -> Vec<StoredReminder> {
        self.state.lock().unwrap().reminders.clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarStore for MemoryStore {
    fn request_access(&self, entity: EntityKind) -> Result<bool, StoreError> {
        let state = self.state.lock().unwrap();
        let access = match entity {
            EntityKind::Event => &state.event_access,
            EntityKind::Reminder => &state.reminder_access,
        };
        match access {
            Access::Granted => Ok(true),
            Access::Denied => Ok(false),
            Access::Failed(message) => Err(StoreError::new(message.clone())),
        }
    }

    fn default_calendar(&self, entity: EntityKind) -> Option<CalendarData> {
        let state = self.state.lock().unwrap();
        let (calendars, default) = match entity {
            EntityKind::Event => (&state.event_calendars, &state.default_event_calendar),
            EntityKind::Reminder => (&state.reminder_calendars, &state.default_reminder_calendar),
        };
        let id = default.as_ref()?;
        calendars.iter().find(|calendar| &calendar.id == id).cloned()
    }

    fn calendar_with_id(&self, id: &str) -> Option<CalendarData> {
        let state = self.state.lock().unwrap();
        state
            .event_calendars
            .iter()
            .chain(state.reminder_calendars.iter())
            .find(|calendar| calendar.id == id)
            .cloned()
    }

    fn calendars(&self, entity: EntityKind) -> Vec<CalendarData> {
        let state = self.state.lock().unwrap();
        match entity {
            EntityKind::Event => state.event_calendars.clone(),
            EntityKind::Reminder => state.reminder_calendars.clone(),
        }
    }

    fn save_event(&self, id: Option<&str>, draft: &EventDraft) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap();
        match id {
            None => {
                state.events.push(StoredEvent {
                    id: Uuid::new_v4().to_string(),
                    title: draft.title.clone(),
                    location: Some(draft.location.clone()),
                    notes: Some(draft.notes.clone()),
                    start: draft.window.start,
                    end: draft.window.end,
                    all_day: draft.window.all_day,
                    calendar_id: draft.calendar_id.clone(),
                    alarms: draft.alarm_offset.into_iter().collect(),
                });
                Ok(())
            }
            Some(id) => {
                let event = state
                    .events
                    .iter_mut()
                    .find(|event| event.id == id)
                    .ok_or_else(|| StoreError::new(format!("event {id} is no longer present")))?;
                event.title = draft.title.clone();
                event.location = Some(draft.location.clone());
                event.notes = Some(draft.notes.clone());
                event.start = draft.window.start;
                event.end = draft.window.end;
                event.all_day = draft.window.all_day;
                // calendar membership never changes on update
                if let Some(offset) = draft.alarm_offset {
                    event.alarms.push(offset);
                }
                Ok(())
            }
        }
    }

    fn event_with_id(&self, id: &str) -> Option<EventSnapshot> {
        let state = self.state.lock().unwrap();
        state.events.iter().find(|event| event.id == id).map(snapshot)
    }

    fn remove_event(&self, id: &str) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap();
        let before = state.events.len();
        state.events.retain(|event| event.id != id);
        if state.events.len() == before {
            return Err(StoreError::new(format!("event {id} is no longer present")));
        }
        Ok(())
    }

    fn events_between(&self, range: &SearchRange) -> Vec<EventSnapshot> {
        let state = self.state.lock().unwrap();
        state
            .events
            .iter()
            .filter(|event| event.start <= range.to && event.end >= range.from)
            .map(snapshot)
            .collect()
    }

    fn save_reminder(&self, draft: &ReminderDraft) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap();
        state.reminders.push(StoredReminder {
            id: Uuid::new_v4().to_string(),
            title: draft.title.clone(),
            notes: Some(draft.notes.clone()),
            start: Some(draft.start),
            due: Some(draft.due),
            alarms: draft.alarm_offset.into_iter().collect(),
        });
        Ok(())
    }

    fn fetch_reminders(&self) -> Vec<ReminderSnapshot> {
        let state = self.state.lock().unwrap();
        state
            .reminders
            .iter()
            .map(|reminder| ReminderSnapshot {
                id: reminder.id.clone(),
                title: reminder.title.clone(),
                notes: reminder.notes.clone(),
                start: reminder.start,
                due: reminder.due,
            })
            .collect()
    }
}

fn snapshot(event: &StoredEvent) -> EventSnapshot {
    EventSnapshot {
        id: event.id.clone(),
        title: event.title.clone(),
        location: event.location.clone(),
        notes: event.notes.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calbridge_core::event_window::EventWindow;

    fn draft(title: &str, start_ms: i64, end_ms: i64) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            location: String::new(),
            notes: String::new(),
            window: EventWindow::from_epoch_ms(start_ms, end_ms, Some(false)),
            calendar_id: Some("calendar-default".to_string()),
            alarm_offset: None,
        }
    }

    #[test]
    fn test_update_keeps_the_calendar() {
        let store = MemoryStore::new();
        store.save_event(None, &draft("Gym", 1_000_000, 2_000_000)).unwrap();
        let id = store.saved_events()[0].id.clone();

        let mut moved = draft("Gym (moved)", 3_000_000, 4_000_000);
        moved.calendar_id = None;
        store.save_event(Some(&id), &moved).unwrap();

        let events = store.saved_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Gym (moved)");
        assert_eq!(events[0].calendar_id.as_deref(), Some("calendar-default"));
    }

    #[test]
    fn test_events_between_matches_overlapping_occurrences() {
        let store = MemoryStore::new();
        store.save_event(None, &draft("Early", 1_000_000, 2_000_000)).unwrap();
        store.save_event(None, &draft("Late", 8_000_000, 9_000_000)).unwrap();

        let range = SearchRange::from_epoch_ms(Some(1_500_000), Some(3_000_000));
        let found = store.events_between(&range);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Early");
    }

    #[test]
    fn test_remove_unknown_event_fails() {
        let store = MemoryStore::new();
        assert!(store.remove_event("ghost").is_err());
    }
}
