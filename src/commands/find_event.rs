//! `findEvent` — date-windows the store, then applies the text filter.

use calbridge_core::date_range::SearchRange;
use calbridge_core::entity::EntityKind;
use calbridge_core::error::BridgeError;
use calbridge_core::record::{EventRecord, FoundEvents};
use calbridge_core::request::EventFilterPayload;

use crate::commands::{ensure_access, parse_params};
use crate::search::TextFilter;
use crate::store::CalendarStore;

pub fn handle<S: CalendarStore>(
    store: &S,
    params: &serde_json::Value,
) -> Result<FoundEvents, BridgeError> {
    let payload: EventFilterPayload = parse_params(params)?;

    ensure_access(store, EntityKind::Event)?;

    let range = SearchRange::from_epoch_ms(payload.start_date, payload.end_date);
    let filter = TextFilter::new(payload.title, payload.location, payload.notes);

    let events = store
        .events_between(&range)
        .into_iter()
        .filter(|event| filter.matches_event(event))
        .map(EventRecord::from)
        .collect();

    Ok(FoundEvents { events })
}
