//! `findReminderByTitle` — fetches every reminder, then filters by title.

use calbridge_core::entity::EntityKind;
use calbridge_core::error::BridgeError;
use calbridge_core::record::{FoundReminders, ReminderRecord};
use calbridge_core::request::{require_text, TitlePayload};

use crate::commands::{ensure_access, parse_params};
use crate::store::CalendarStore;

pub fn handle<S: CalendarStore>(
    store: &S,
    params: &serde_json::Value,
) -> Result<FoundReminders, BridgeError> {
    let payload: TitlePayload = parse_params(params)?;
    let needle = require_text(payload.title.as_deref(), "title")?.to_lowercase();

    ensure_access(store, EntityKind::Reminder)?;

    let reminders = store
        .fetch_reminders()
        .into_iter()
        .filter(|reminder| reminder.title.to_lowercase().contains(&needle))
        .map(ReminderRecord::from)
        .collect();

    Ok(FoundReminders { reminders })
}
