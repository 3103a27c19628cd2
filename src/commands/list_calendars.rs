//! `getAvailableCalendars` — enumerates writable event calendars with the
//! default calendar pinned to the front.

use calbridge_core::entity::EntityKind;
use calbridge_core::error::BridgeError;
use calbridge_core::record::{AvailableCalendars, CalendarRecord};

use crate::commands::ensure_access;
use crate::store::{CalendarData, CalendarStore};

pub fn handle<S: CalendarStore>(store: &S) -> Result<AvailableCalendars, BridgeError> {
    ensure_access(store, EntityKind::Event)?;

    let default = store.default_calendar(EntityKind::Event);
    let default_id = default.as_ref().map(|calendar| calendar.id.clone());

    let mut available_calendars: Vec<CalendarRecord> = store
        .calendars(EntityKind::Event)
        .into_iter()
        .filter(|calendar| Some(&calendar.id) != default_id.as_ref())
        .filter(|calendar| calendar.allows_modifications)
        .map(|calendar| record(calendar, false))
        .collect();

    if let Some(default) = default {
        available_calendars.insert(0, record(default, true));
    }

    Ok(AvailableCalendars {
        available_calendars,
    })
}

fn record(calendar: CalendarData, default_calendar: bool) -> CalendarRecord {
    CalendarRecord {
        id: calendar.id,
        name: calendar.title.clone(),
        display_name: calendar.title,
        default_calendar,
    }
}
