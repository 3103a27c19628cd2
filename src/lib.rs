//! Bridges the device calendar and reminders store to a host application
//! over a line-oriented JSON call/response protocol.
//!
//! One `Request` per stdin line, one `Response` line on stdout. Each
//! operation validates its payload, requests store authorization, performs
//! a single store read or write, and resolves or rejects the call. The
//! store itself is behind the [`store::CalendarStore`] seam, so the whole
//! surface runs against an in-memory double in tests.

pub mod commands;
pub mod search;
pub mod store;

use std::io::{BufRead, Write};

use serde::Serialize;

use calbridge_core::error::BridgeError;
use calbridge_core::protocol::{Command, Request, Response};

use crate::store::CalendarStore;

/// Reads requests line-by-line from `input` and writes one response line
/// per request to `output`, until `input` is exhausted. Requests are
/// processed strictly in order; a line that fails to parse is answered
/// in-band and the loop continues.
pub fn serve<S: CalendarStore>(
    store: &S,
    input: impl BufRead,
    mut output: impl Write,
) -> std::io::Result<()> {
    for line in input.lines() {
        let line = line?;

        // Skip empty lines
        if line.trim().is_empty() {
            continue;
        }

        let request: Request = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                let response = Response::error(&format!("Failed to parse request: {}", e));
                writeln!(output, "{}", response)?;
                output.flush()?;
                continue;
            }
        };

        let response = handle_request(store, request);

        writeln!(output, "{}", response)?;
        output.flush()?;
    }

    Ok(())
}

/// Dispatches one request to its handler and serializes the outcome.
pub fn handle_request<S: CalendarStore>(store: &S, request: Request) -> String {
    let Request { command, params } = request;

    match command {
        Command::OpenCalendar => respond(command, commands::open_calendar::handle()),
        Command::CreateEvent => respond(command, commands::create_event::handle(store, &params)),
        Command::CreateReminder => {
            respond(command, commands::create_reminder::handle(store, &params))
        }
        Command::FindEvent => respond(command, commands::find_event::handle(store, &params)),
        Command::FindReminderByTitle => {
            respond(command, commands::find_reminder::handle(store, &params))
        }
        Command::DeleteEvent | Command::DeleteEventById => {
            respond(command, commands::delete_event::handle(store, &params))
        }
        Command::UpdateEvent => respond(command, commands::update_event::handle(store, &params)),
        Command::GetAvailableCalendars => respond(command, commands::list_calendars::handle(store)),
    }
}

/// Every rejection is logged before the error response is produced.
fn respond<T: Serialize>(command: Command, result: Result<T, BridgeError>) -> String {
    match result {
        Ok(data) => Response::success(data),
        Err(e) => {
            tracing::warn!(?command, "{e}");
            Response::error(&e.to_string())
        }
    }
}
