//! `createEvent` — validates the payload and saves a new event.

use calbridge_core::entity::EntityKind;
use calbridge_core::error::BridgeError;
use calbridge_core::event_window::EventWindow;
use calbridge_core::request::{require_epoch_ms, require_text, EventPayload};

use crate::commands::{ensure_access, parse_params};
use crate::store::{CalendarStore, EventDraft};

pub fn handle<S: CalendarStore>(store: &S, params: &serde_json::Value) -> Result<(), BridgeError> {
    let payload: EventPayload = parse_params(params)?;

    let title = require_text(payload.title.as_deref(), "title")?.to_string();
    let start_ms = require_epoch_ms(payload.start_date, "startDate")?;
    let end_ms = require_epoch_ms(payload.end_date, "endDate")?;

    ensure_access(store, EntityKind::Event)?;

    // An unresolvable calendarId falls back to the default calendar.
    let calendar_id = payload
        .calendar_id
        .as_deref()
        .and_then(|id| store.calendar_with_id(id))
        .or_else(|| store.default_calendar(EntityKind::Event))
        .map(|calendar| calendar.id);

    let draft = EventDraft {
        title,
        location: payload.location.unwrap_or_default(),
        notes: payload.notes.unwrap_or_default(),
        window: EventWindow::from_epoch_ms(start_ms, end_ms, payload.all_day),
        calendar_id,
        alarm_offset: payload.alarm_offset,
    };

    store.save_event(None, &draft).map_err(BridgeError::SaveEvent)
}
