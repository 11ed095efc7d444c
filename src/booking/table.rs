//! The authoritative transition table.
//!
//! | State   | EnterDetails | Cancel                        | DatePassed                     |
//! |---------|--------------|-------------------------------|--------------------------------|
//! | New     | Pending      | Closed (New Booking Canceled) | Closed (New Booking Expired)   |
//! | Pending | -            | -                             | -                              |
//! | Booked  | -            | Closed (Existing Canceled)    | Closed (Existing Completed)    |
//! | Closed  | -            | -                             | -                              |
//!
//! The lookup is a pure function shared by all machine instances; the
//! machine is an imperative shell around it.

use super::state::BookingState;
use super::trigger::BookingTrigger;

/// Closure reasons assigned by the table.
pub mod reason {
    /// A booking canceled before details were submitted.
    pub const NEW_CANCELED: &str = "New Booking Canceled";
    /// A booking whose date passed before details were submitted.
    pub const NEW_EXPIRED: &str = "New Booking Expired";
    /// A confirmed booking that was canceled.
    pub const EXISTING_CANCELED: &str = "Existing Booking Canceled";
    /// A confirmed booking whose date passed.
    pub const EXISTING_COMPLETED: &str = "Existing Booking Completed";
}

/// Resolve a `(state, trigger)` pair to the next state.
///
/// Returns `None` when the trigger is unsupported in the given state.
/// This match is the entire state machine, one arm per table row.
///
/// # Example
///
/// ```rust
/// use bookflow::booking::table;
/// use bookflow::booking::{BookingState, BookingTrigger};
///
/// let next = table::next_state(&BookingState::New, BookingTrigger::EnterDetails);
/// assert_eq!(next, Some(BookingState::Pending));
///
/// assert!(table::next_state(&BookingState::Pending, BookingTrigger::Cancel).is_none());
/// ```
pub fn next_state(state: &BookingState, trigger: BookingTrigger) -> Option<BookingState> {
    use BookingTrigger::{Cancel, DatePassed, EnterDetails};

    match (state, trigger) {
        (BookingState::New, EnterDetails) => Some(BookingState::Pending),
        (BookingState::New, Cancel) => Some(BookingState::closed(reason::NEW_CANCELED)),
        (BookingState::New, DatePassed) => Some(BookingState::closed(reason::NEW_EXPIRED)),
        (BookingState::Booked, Cancel) => Some(BookingState::closed(reason::EXISTING_CANCELED)),
        (BookingState::Booked, DatePassed) => {
            Some(BookingState::closed(reason::EXISTING_COMPLETED))
        }
        _ => None,
    }
}
