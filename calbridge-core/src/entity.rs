//! Store partitions.

use std::fmt;

/// The two partitions of the device store. The platform grants access per
/// partition, not per store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Event,
    Reminder,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Event => write!(f, "event"),
            EntityKind::Reminder => write!(f, "reminder"),
        }
    }
}
