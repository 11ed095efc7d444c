//! The booking record owned by a machine instance.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Data carried by a single booking.
///
/// The record is created empty at machine construction. `attendee` and
/// `ticket_count` are stored exactly once, by `submit_details` while in
/// the `New` state; `booking_id` is reassigned on every entry into `New`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct BookingRecord {
    /// Name of the attendee.
    pub attendee: String,
    /// Number of tickets requested.
    pub ticket_count: u32,
    /// Identifier assigned when the machine enters `New`.
    pub booking_id: Uuid,
}

impl BookingRecord {
    /// An empty record, before the machine enters `New` for the first time.
    pub(crate) fn empty() -> Self {
        Self {
            attendee: String::new(),
            ticket_count: 0,
            booking_id: Uuid::nil(),
        }
    }
}
