//! One module per bridge operation.
//!
//! Every handler follows the same sequence: deserialize params, validate
//! required fields, pass the authorization gate, perform one store call,
//! map the outcome. Handlers share no state beyond the store handle.

pub mod create_event;
pub mod create_reminder;
pub mod delete_event;
pub mod find_event;
pub mod find_reminder;
pub mod list_calendars;
pub mod open_calendar;
pub mod update_event;

use serde::de::DeserializeOwned;

use calbridge_core::entity::EntityKind;
use calbridge_core::error::BridgeError;

use crate::store::CalendarStore;

/// Requests access to a store partition and maps denial or failure to the
/// caller-visible rejection. Access is re-requested on every call; the
/// platform caches the user's decision.
pub(crate) fn ensure_access<S: CalendarStore>(
    store: &S,
    entity: EntityKind,
) -> Result<(), BridgeError> {
    match store.request_access(entity) {
        Ok(true) => Ok(()),
        Ok(false) => Err(BridgeError::AccessDenied(entity)),
        Err(e) => Err(BridgeError::AccessRequestFailed(entity, e)),
    }
}

/// Deserializes a params object into an operation payload. An absent
/// params object reads as an empty payload, so required-field validation
/// reports the missing field instead of a parse failure.
pub(crate) fn parse_params<T: DeserializeOwned + Default>(
    params: &serde_json::Value,
) -> Result<T, BridgeError> {
    if params.is_null() {
        return Ok(T::default());
    }

    serde_json::from_value(params.clone()).map_err(|e| BridgeError::InvalidParams(e.to_string()))
}
