//! Booking machine error types.

use super::trigger::BookingTrigger;
use thiserror::Error;

/// Errors raised by the booking machine.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum BookingError {
    /// The trigger has no table entry for the current state. The machine
    /// is left untouched: state, record, and history are unchanged.
    #[error("trigger '{trigger}' is not supported in state '{state}'")]
    UnsupportedTransition {
        /// Name of the state the machine was in.
        state: String,
        /// The rejected trigger.
        trigger: BookingTrigger,
    },
}
