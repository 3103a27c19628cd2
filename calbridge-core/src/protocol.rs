//! Bridge protocol types.
//!
//! Defines the JSON envelope spoken between a host application and the
//! bridge binary: one `Request` per line on stdin, one `Response` line on
//! stdout. Method names are the bridged plugin surface, so they stay
//! camelCase on the wire.

use serde::{Deserialize, Serialize};

/// Operations the bridge implements.
///
/// `DeleteEvent` and `DeleteEventById` are aliases of the same operation
/// and are dispatched to the same handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    OpenCalendar,
    CreateEvent,
    CreateReminder,
    FindEvent,
    FindReminderByTitle,
    DeleteEvent,
    DeleteEventById,
    UpdateEvent,
    GetAvailableCalendars,
}

/// Request sent from the host application to the bridge.
#[derive(Debug, Serialize, Deserialize)]
pub struct Request {
    pub command: Command,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Response sent from the bridge to the host application.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response<T> {
    Success { data: T },
    Error { error: String },
}

impl<T: Serialize> Response<T> {
    pub fn success(data: T) -> String {
        serde_json::to_string(&Response::Success { data }).unwrap()
    }
}

impl Response<()> {
    pub fn error(msg: &str) -> String {
        serde_json::to_string(&Response::<()>::Error {
            error: msg.to_string(),
        })
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names_match_plugin_surface() {
        let json = serde_json::to_string(&Command::FindReminderByTitle).unwrap();
        assert_eq!(json, "\"findReminderByTitle\"");

        let parsed: Command = serde_json::from_str("\"deleteEventById\"").unwrap();
        assert_eq!(parsed, Command::DeleteEventById);
    }

    #[test]
    fn test_missing_params_default_to_null() {
        let request: Request = serde_json::from_str(r#"{"command":"openCalendar"}"#).unwrap();
        assert_eq!(request.command, Command::OpenCalendar);
        assert!(request.params.is_null());
    }

    #[test]
    fn test_success_and_error_envelopes() {
        assert_eq!(Response::success(()), r#"{"status":"success","data":null}"#);
        assert_eq!(
            Response::error("no"),
            r#"{"status":"error","error":"no"}"#
        );
    }
}
