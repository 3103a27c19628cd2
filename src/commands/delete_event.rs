//! `deleteEvent` / `deleteEventById` — removes a single event occurrence.

use calbridge_core::entity::EntityKind;
use calbridge_core::error::BridgeError;
use calbridge_core::request::{require_text, IdPayload};

use crate::commands::{ensure_access, parse_params};
use crate::store::CalendarStore;

pub fn handle<S: CalendarStore>(store: &S, params: &serde_json::Value) -> Result<(), BridgeError> {
    let payload: IdPayload = parse_params(params)?;
    let id = require_text(payload.id.as_deref(), "id")?.to_string();

    ensure_access(store, EntityKind::Event)?;

    if store.event_with_id(&id).is_none() {
        return Err(BridgeError::EventIdNotFound(id));
    }

    store.remove_event(&id).map_err(BridgeError::RemoveEvent)
}
