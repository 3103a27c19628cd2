//! `createReminder` — saves a reminder into the default reminder calendar.

use calbridge_core::entity::EntityKind;
use calbridge_core::error::BridgeError;
use calbridge_core::request::{require_text, ReminderPayload};

use crate::commands::{ensure_access, parse_params};
use crate::store::{CalendarStore, ReminderDraft};

pub fn handle<S: CalendarStore>(store: &S, params: &serde_json::Value) -> Result<(), BridgeError> {
    let payload: ReminderPayload = parse_params(params)?;

    let title = require_text(payload.title.as_deref(), "title")?.to_string();
    let start = payload
        .start_date
        .as_ref()
        .ok_or_else(|| BridgeError::MissingProperty("startDate".to_string()))?
        .validated("startDate")?;
    let due = payload
        .due_date
        .as_ref()
        .ok_or_else(|| BridgeError::MissingProperty("dueDate".to_string()))?
        .validated("dueDate")?;

    ensure_access(store, EntityKind::Reminder)?;

    let draft = ReminderDraft {
        title,
        notes: payload.notes.unwrap_or_default(),
        start,
        due,
        alarm_offset: payload.alarm_offset,
    };

    store.save_reminder(&draft).map_err(BridgeError::SaveReminder)
}
