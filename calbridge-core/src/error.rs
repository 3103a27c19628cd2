//! Error types for the calbridge ecosystem.
//!
//! Callers pattern-match on message text, so every `#[error]` string below
//! is part of the observable contract and must not drift.

use thiserror::Error;

use crate::entity::EntityKind;

/// A failure inside a store implementation, carrying the platform's own
/// description of what went wrong.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        StoreError(message.into())
    }
}

/// Errors surfaced to the caller. Every error is terminal for its call:
/// no retries, no partial success.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The params object could not be read as the operation's payload.
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// A required field was missing, empty, or non-positive.
    #[error("Must provide {0} property")]
    MissingProperty(String),

    /// The user declined access to a store partition.
    #[error("Access to the {0} store was denied")]
    AccessDenied(EntityKind),

    /// The permission request itself failed before the user could answer.
    #[error("Requesting access to the {0} store failed: {1}")]
    AccessRequestFailed(EntityKind, StoreError),

    /// `updateEvent` could not resolve the event id.
    #[error("Event has not been found")]
    EventNotFound,

    /// `deleteEvent` could not resolve the event id.
    #[error("Event {0} has not been found")]
    EventIdNotFound(String),

    #[error("Failed to save event with error: {0}")]
    SaveEvent(#[source] StoreError),

    #[error("Failed to save reminder with error: {0}")]
    SaveReminder(#[source] StoreError),

    #[error("Failed to remove event with error: {0}")]
    RemoveEvent(#[source] StoreError),

    /// The platform calendar application could not be launched.
    #[error("Failed to open the calendar application: {0}")]
    OpenCalendar(String),
}
