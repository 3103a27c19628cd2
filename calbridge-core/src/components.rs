//! Calendar-field date tuples.

use serde::{Deserialize, Serialize};

/// A timezone-less calendar date, interpreted by the store's default
/// calendar and locale.
///
/// Reminders carry these verbatim: the bridge never normalizes or
/// range-checks the fields, so a `day` of 31 in a 30-day month is the
/// store's concern. `Default` is all zeros, which is also how absent
/// subcomponents read back out of the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateComponents {
    pub day: i64,
    pub month: i64,
    pub year: i64,
    pub hour: i64,
    pub minute: i64,
}
