//! Core `Trigger` trait for transition causes.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for the trigger tags that drive a state machine.
///
/// Triggers are small immutable values naming the external call that may
/// cause a transition. They carry no payload; operation arguments travel
/// separately through the machine's methods.
pub trait Trigger:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the trigger's name for display and error reporting.
    fn name(&self) -> &str;
}
