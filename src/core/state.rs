//! Core `State` trait for state machine states.
//!
//! All state machine states must implement this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States represent immutable
/// values that describe the current position in a state machine.
///
/// # Required Traits
///
/// - `Clone`: states must be cloneable for history tracking
/// - `PartialEq`: states must be comparable for transition lookup
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable
///
/// # Example
///
/// ```rust
/// use bookflow::core::State;
/// use bookflow::booking::BookingState;
///
/// let state = BookingState::Booked;
/// assert_eq!(state.name(), "Booked");
/// assert!(!state.is_final());
///
/// let closed = BookingState::closed("Existing Booking Canceled");
/// assert_eq!(closed.name(), "Closed");
/// assert!(closed.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display and notification lines.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Final states represent completion points where no further
    /// transitions are expected.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
