//! Bookflow: a table-driven booking workflow state machine.
//!
//! A booking progresses through four states (New, Pending, Booked, Closed)
//! under three external triggers plus an administrative override. The crate
//! follows a "pure core, imperative shell" split: the transition table and
//! history tracking are pure functions, while [`BookingMachine`] applies
//! their results, owns the booking record, and delivers state entry
//! notifications through an injectable sink.
//!
//! # Core Concepts
//!
//! - **State**: type-safe state representation via the [`core::State`] trait
//! - **Trigger**: external calls that may cause a transition
//! - **Table**: a single pure lookup mapping `(state, trigger)` to the next
//!   state, auditable as data in [`booking::table`]
//! - **Notifications**: one line per state entry, delivered to a
//!   [`NotificationSink`]
//!
//! # Example
//!
//! ```rust
//! use bookflow::{BookingMachine, BookingState, MemorySink};
//!
//! let mut booking = BookingMachine::with_sink(MemorySink::new());
//! booking.submit_details("Ada", 2)?;
//!
//! assert_eq!(booking.current_state(), &BookingState::Pending);
//! assert_eq!(booking.record().attendee, "Ada");
//! assert_eq!(booking.sink().lines(), ["New", "Pending"]);
//! # Ok::<(), bookflow::BookingError>(())
//! ```

pub mod booking;
pub mod core;
pub mod notify;

// Re-export commonly used types
pub use booking::{BookingError, BookingMachine, BookingRecord, BookingState, BookingTrigger};
pub use notify::{ConsoleSink, MemorySink, NotificationSink};
