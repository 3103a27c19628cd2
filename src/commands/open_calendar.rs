//! `openCalendar` — launches the platform calendar application.

use calbridge_core::error::BridgeError;

/// URL scheme the platform registers for its calendar application.
const CALENDAR_URL: &str = "calshow://";

/// Resolves once the open request is dispatched, not once the application
/// is foregrounded.
pub fn handle() -> Result<(), BridgeError> {
    open::that_detached(CALENDAR_URL).map_err(|e| BridgeError::OpenCalendar(e.to_string()))
}
