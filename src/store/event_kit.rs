//! Store implementation backed by the macOS EventKit database.
//!
//! Completion-handler APIs (the access request and the reminder fetch) are
//! bridged onto the calling thread with a one-shot channel, so every trait
//! method resolves exactly once before returning.

use std::sync::mpsc::channel;

use block2::StackBlock;
use objc2::rc::Retained;
use objc2_event_kit::{
    EKAlarm, EKCalendar, EKEntityType, EKEvent, EKEventStore, EKReminder, EKSpan,
};
use objc2_foundation::{
    MainThreadMarker, NSArray, NSDate, NSDateComponents, NSError, NSString,
};

use calbridge_core::components::DateComponents;
use calbridge_core::date_range::SearchRange;
use calbridge_core::entity::EntityKind;
use calbridge_core::error::StoreError;

use super::{
    CalendarData, CalendarStore, EventDraft, EventSnapshot, ReminderDraft, ReminderSnapshot,
};

/// Marker EventKit uses for date components that were never set
/// (NSDateComponentUndefined).
const COMPONENT_UNDEFINED: isize = isize::MAX;

pub struct EventKitStore {
    store: Retained<EKEventStore>,
}

impl EventKitStore {
    pub fn new(mtm: MainThreadMarker) -> Self {
        let store = unsafe { EKEventStore::init(mtm.alloc::<EKEventStore>()) };
        EventKitStore { store }
    }

    fn entity_type(entity: EntityKind) -> EKEntityType {
        match entity {
            EntityKind::Event => EKEntityType::Event,
            EntityKind::Reminder => EKEntityType::Reminder,
        }
    }
}

impl CalendarStore for EventKitStore {
    fn request_access(&self, entity: EntityKind) -> Result<bool, StoreError> {
        let (tx, rx) = channel();
        let completion = StackBlock::new(
            move |granted: objc2::runtime::Bool, error: *mut NSError| {
                let failure = if error.is_null() {
                    None
                } else {
                    Some(unsafe { (*error).localizedDescription().to_string() })
                };
                let _ = tx.send((granted.as_bool(), failure));
            },
        );

        unsafe {
            match entity {
                EntityKind::Event => self
                    .store
                    .requestFullAccessToEventsWithCompletion(&completion as *const _ as *mut _),
                EntityKind::Reminder => self
                    .store
                    .requestFullAccessToRemindersWithCompletion(&completion as *const _ as *mut _),
            }
        }

        match rx.recv() {
            Ok((_, Some(failure))) => Err(StoreError::new(failure)),
            Ok((granted, None)) => Ok(granted),
            Err(_) => Ok(false),
        }
    }

    fn default_calendar(&self, entity: EntityKind) -> Option<CalendarData> {
        unsafe {
            let calendar = match entity {
                EntityKind::Event => self.store.defaultCalendarForNewEvents(),
                EntityKind::Reminder => self.store.defaultCalendarForNewReminders(),
            };
            calendar.map(|calendar| calendar_data(&calendar))
        }
    }

    fn calendar_with_id(&self, id: &str) -> Option<CalendarData> {
        unsafe {
            self.store
                .calendarWithIdentifier(&NSString::from_str(id))
                .map(|calendar| calendar_data(&calendar))
        }
    }

    fn calendars(&self, entity: EntityKind) -> Vec<CalendarData> {
        unsafe {
            self.store
                .calendarsForEntityType(Self::entity_type(entity))
                .to_vec()
                .iter()
                .map(|calendar| calendar_data(calendar))
                .collect()
        }
    }

    fn save_event(&self, id: Option<&str>, draft: &EventDraft) -> Result<(), StoreError> {
        unsafe {
            let event = match id {
                Some(id) => self
                    .store
                    .eventWithIdentifier(&NSString::from_str(id))
                    .ok_or_else(|| StoreError::new(format!("event {id} is no longer present")))?,
                None => EKEvent::eventWithEventStore(&self.store),
            };

            event.setTitle(Some(&NSString::from_str(&draft.title)));
            event.setLocation(Some(&NSString::from_str(&draft.location)));
            event.setNotes(Some(&NSString::from_str(&draft.notes)));
            event.setStartDate(&date(draft.window.start.timestamp() as f64));
            event.setEndDate(&date(draft.window.end.timestamp() as f64));
            event.setAllDay(draft.window.all_day);

            if id.is_none() {
                let calendar = draft
                    .calendar_id
                    .as_deref()
                    .and_then(|id| self.store.calendarWithIdentifier(&NSString::from_str(id)));
                event.setCalendar(calendar.as_deref());
            }

            if let Some(offset) = draft.alarm_offset {
                event.addAlarm(&EKAlarm::alarmWithRelativeOffset(offset));
            }

            self.store
                .saveEvent_span_error(&event, EKSpan::ThisEvent)
                .map_err(|error| StoreError::new(error.localizedDescription().to_string()))
        }
    }

    fn event_with_id(&self, id: &str) -> Option<EventSnapshot> {
        unsafe {
            self.store
                .eventWithIdentifier(&NSString::from_str(id))
                .map(|event| event_snapshot(&event))
        }
    }

    fn remove_event(&self, id: &str) -> Result<(), StoreError> {
        unsafe {
            let event = self
                .store
                .eventWithIdentifier(&NSString::from_str(id))
                .ok_or_else(|| StoreError::new(format!("event {id} is no longer present")))?;

            self.store
                .removeEvent_span_error(&event, EKSpan::ThisEvent)
                .map_err(|error| StoreError::new(error.localizedDescription().to_string()))
        }
    }

    fn events_between(&self, range: &SearchRange) -> Vec<EventSnapshot> {
        unsafe {
            let calendars = self.store.calendarsForEntityType(EKEntityType::Event);
            let predicate = self.store.predicateForEventsWithStartDate_endDate_calendars(
                &date(range.from.timestamp() as f64),
                &date(range.to.timestamp() as f64),
                Some(&calendars),
            );

            self.store
                .eventsMatchingPredicate(&predicate)
                .to_vec()
                .iter()
                .map(|event| event_snapshot(event))
                .collect()
        }
    }

    fn save_reminder(&self, draft: &ReminderDraft) -> Result<(), StoreError> {
        unsafe {
            let reminder = EKReminder::reminderWithEventStore(&self.store);

            reminder.setTitle(Some(&NSString::from_str(&draft.title)));
            reminder.setNotes(Some(&NSString::from_str(&draft.notes)));
            reminder.setCalendar(self.store.defaultCalendarForNewReminders().as_deref());
            reminder.setStartDateComponents(Some(&ns_components(&draft.start)));
            reminder.setDueDateComponents(Some(&ns_components(&draft.due)));

            if let Some(offset) = draft.alarm_offset {
                reminder.addAlarm(&EKAlarm::alarmWithRelativeOffset(offset));
            }

            self.store
                .saveReminder_commit_error(&reminder, true)
                .map_err(|error| StoreError::new(error.localizedDescription().to_string()))
        }
    }

    fn fetch_reminders(&self) -> Vec<ReminderSnapshot> {
        let (tx, rx) = channel();
        unsafe {
            let calendars = self.store.calendarsForEntityType(EKEntityType::Reminder);
            let predicate = self.store.predicateForRemindersInCalendars(Some(&calendars));

            let completion = StackBlock::new(move |reminders: *mut NSArray<EKReminder>| {
                let snapshots = if reminders.is_null() {
                    Vec::new()
                } else {
                    (*reminders)
                        .to_vec()
                        .iter()
                        .map(|reminder| reminder_snapshot(reminder))
                        .collect()
                };
                let _ = tx.send(snapshots);
            });

            self.store.fetchRemindersMatchingPredicate_completion(
                &predicate,
                &completion as *const _ as *mut _,
            );
        }

        rx.recv().unwrap_or_default()
    }
}

fn date(seconds: f64) -> Retained<NSDate> {
    NSDate::dateWithTimeIntervalSince1970(seconds)
}

fn calendar_data(calendar: &EKCalendar) -> CalendarData {
    unsafe {
        CalendarData {
            id: calendar.calendarIdentifier().to_string(),
            title: calendar.title().to_string(),
            allows_modifications: calendar.allowsContentModifications(),
        }
    }
}

fn event_snapshot(event: &EKEvent) -> EventSnapshot {
    unsafe {
        EventSnapshot {
            id: event
                .eventIdentifier()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            title: event.title().to_string(),
            location: event.location().map(|location| location.to_string()),
            notes: event.notes().map(|notes| notes.to_string()),
        }
    }
}

fn reminder_snapshot(reminder: &EKReminder) -> ReminderSnapshot {
    unsafe {
        ReminderSnapshot {
            id: reminder.calendarItemIdentifier().to_string(),
            title: reminder.title().to_string(),
            notes: reminder.notes().map(|notes| notes.to_string()),
            start: reminder
                .startDateComponents()
                .map(|components| date_components(&components)),
            due: reminder
                .dueDateComponents()
                .map(|components| date_components(&components)),
        }
    }
}

fn ns_components(components: &DateComponents) -> Retained<NSDateComponents> {
    let out = NSDateComponents::new();
    out.setYear(components.year as isize);
    out.setMonth(components.month as isize);
    out.setDay(components.day as isize);
    out.setHour(components.hour as isize);
    out.setMinute(components.minute as isize);
    out
}

fn date_components(components: &NSDateComponents) -> DateComponents {
    DateComponents {
        day: defined(components.day()),
        month: defined(components.month()),
        year: defined(components.year()),
        hour: defined(components.hour()),
        minute: defined(components.minute()),
    }
}

fn defined(value: isize) -> i64 {
    if value == COMPONENT_UNDEFINED {
        0
    } else {
        value as i64
    }
}
