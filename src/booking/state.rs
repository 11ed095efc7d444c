//! Booking workflow states.

use crate::core::State;
use serde::{Deserialize, Serialize};

/// The four states of the booking workflow.
///
/// Exactly one state is active at any time; a machine starts in `New`.
/// `Closed` is terminal and carries the reason the booking ended.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum BookingState {
    /// Freshly created booking awaiting attendee details.
    New,
    /// Details submitted; no outgoing transitions are defined.
    Pending,
    /// Confirmed booking.
    Booked,
    /// Terminal state, e.g. `Closed { reason: "Existing Booking Canceled" }`.
    Closed {
        /// Why the booking ended, as assigned by the transition table.
        reason: String,
    },
}

impl BookingState {
    /// Build a `Closed` state from any reason text.
    pub fn closed(reason: impl Into<String>) -> Self {
        Self::Closed {
            reason: reason.into(),
        }
    }
}

impl State for BookingState {
    fn name(&self) -> &str {
        match self {
            Self::New => "New",
            Self::Pending => "Pending",
            Self::Booked => "Booked",
            Self::Closed { .. } => "Closed",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Closed { .. })
    }
}
