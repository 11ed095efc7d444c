//! Booking workflow triggers.

use crate::core::Trigger;
use serde::{Deserialize, Serialize};
use std::fmt;

/// External calls that may cause a state transition.
///
/// These are the payload-free tags used for table lookup, error
/// reporting, and history causes. `submit_details` maps to
/// `EnterDetails`; its arguments travel through the machine method.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BookingTrigger {
    /// Attendee details were submitted.
    EnterDetails,
    /// The booking was canceled.
    Cancel,
    /// The booking date passed.
    DatePassed,
}

impl Trigger for BookingTrigger {
    fn name(&self) -> &str {
        match self {
            Self::EnterDetails => "EnterDetails",
            Self::Cancel => "Cancel",
            Self::DatePassed => "DatePassed",
        }
    }
}

impl fmt::Display for BookingTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
