//! The booking state machine.

use super::error::BookingError;
use super::record::BookingRecord;
use super::state::BookingState;
use super::table;
use super::trigger::BookingTrigger;
use crate::core::{State, StateHistory, StateTransition, TransitionCause};
use crate::notify::{ConsoleSink, NotificationSink};
use chrono::Utc;
use uuid::Uuid;

/// State machine driving a single booking through its workflow.
///
/// The machine owns the booking record and the current state, resolves
/// triggers through the table in [`table`], and records every applied
/// transition in an immutable history. It is generic over the
/// notification sink so callers choose where state entry lines go; the
/// default machine writes them to standard output.
///
/// Triggers take `&mut self`, so exclusive ownership serializes all
/// transitions at the type level.
///
/// # Example
///
/// ```rust
/// use bookflow::{BookingMachine, BookingState, MemorySink};
///
/// let mut booking = BookingMachine::with_sink(MemorySink::new());
/// booking.force_transition(BookingState::Booked);
/// booking.cancel()?;
///
/// assert!(booking.is_closed());
/// assert_eq!(
///     booking.sink().lines(),
///     ["New", "Booked", "Closing - Existing Booking Canceled", "Closed"]
/// );
/// # Ok::<(), bookflow::BookingError>(())
/// ```
pub struct BookingMachine<N: NotificationSink = ConsoleSink> {
    current: BookingState,
    record: BookingRecord,
    history: StateHistory<BookingState, BookingTrigger>,
    sink: N,
}

impl BookingMachine<ConsoleSink> {
    /// Create a machine that prints notifications to standard output.
    ///
    /// The machine starts in `New` with a freshly assigned booking id
    /// and emits the `New` entry line. No failure mode.
    pub fn new() -> Self {
        Self::with_sink(ConsoleSink)
    }
}

impl Default for BookingMachine<ConsoleSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NotificationSink> BookingMachine<N> {
    /// Create a machine delivering notifications to the given sink.
    pub fn with_sink(sink: N) -> Self {
        let mut machine = Self {
            current: BookingState::New,
            record: BookingRecord::empty(),
            history: StateHistory::new(),
            sink,
        };
        machine.enter_state(BookingState::New);
        machine
    }

    /// Submit attendee details.
    ///
    /// Valid only in `New`: stores `attendee` and `ticket_count` into the
    /// record and moves to `Pending`.
    ///
    /// # Errors
    ///
    /// `UnsupportedTransition` in any other state; the record is not
    /// touched on failure.
    pub fn submit_details(
        &mut self,
        attendee: &str,
        ticket_count: u32,
    ) -> Result<(), BookingError> {
        let next = self.resolve(BookingTrigger::EnterDetails)?;
        self.record.attendee = attendee.to_string();
        self.record.ticket_count = ticket_count;
        self.transition(next, TransitionCause::Triggered(BookingTrigger::EnterDetails));
        Ok(())
    }

    /// Cancel the booking.
    ///
    /// Valid in `New` (closes as "New Booking Canceled") and `Booked`
    /// (closes as "Existing Booking Canceled").
    ///
    /// # Errors
    ///
    /// `UnsupportedTransition` in `Pending` or `Closed`.
    pub fn cancel(&mut self) -> Result<(), BookingError> {
        let next = self.resolve(BookingTrigger::Cancel)?;
        self.transition(next, TransitionCause::Triggered(BookingTrigger::Cancel));
        Ok(())
    }

    /// Signal that the booking date has passed.
    ///
    /// Valid in `New` (closes as "New Booking Expired") and `Booked`
    /// (closes as "Existing Booking Completed").
    ///
    /// # Errors
    ///
    /// `UnsupportedTransition` in `Pending` or `Closed`.
    pub fn date_passed(&mut self) -> Result<(), BookingError> {
        let next = self.resolve(BookingTrigger::DatePassed)?;
        self.transition(next, TransitionCause::Triggered(BookingTrigger::DatePassed));
        Ok(())
    }

    /// Administrative override bypassing table validation.
    ///
    /// Always succeeds and emits the entered state's notification lines;
    /// entering `New` this way assigns a fresh booking id. Recorded in
    /// history with cause `Forced`.
    pub fn force_transition(&mut self, state: BookingState) {
        self.transition(state, TransitionCause::Forced);
    }

    /// The active state. Pure accessor.
    pub fn current_state(&self) -> &BookingState {
        &self.current
    }

    /// The booking record. Pure accessor.
    pub fn record(&self) -> &BookingRecord {
        &self.record
    }

    /// Ordered history of applied transitions. Pure accessor.
    pub fn history(&self) -> &StateHistory<BookingState, BookingTrigger> {
        &self.history
    }

    /// Whether the machine has entered its terminal state.
    pub fn is_closed(&self) -> bool {
        self.current.is_final()
    }

    /// The notification sink, e.g. to read back captured lines.
    pub fn sink(&self) -> &N {
        &self.sink
    }

    /// Look up the trigger in the table without applying anything.
    fn resolve(&self, trigger: BookingTrigger) -> Result<BookingState, BookingError> {
        table::next_state(&self.current, trigger).ok_or_else(|| {
            BookingError::UnsupportedTransition {
                state: self.current.name().to_string(),
                trigger,
            }
        })
    }

    /// Record the transition, then apply the state entry effects.
    fn transition(&mut self, next: BookingState, cause: TransitionCause<BookingTrigger>) {
        let entry = StateTransition {
            from: self.current.clone(),
            to: next.clone(),
            cause,
            timestamp: Utc::now(),
        };
        self.history = self.history.record(entry);
        self.enter_state(next);
    }

    /// State entry effects: id assignment for `New`, notification lines.
    ///
    /// Entering any state emits exactly one line naming it; entering
    /// `Closed` emits the reason line first.
    fn enter_state(&mut self, next: BookingState) {
        if next == BookingState::New {
            self.record.booking_id = Uuid::new_v4();
        }
        if let BookingState::Closed { reason } = &next {
            self.sink.notify(&format!("Closing - {reason}"));
        }
        self.current = next;
        self.sink.notify(self.current.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::table::reason;
    use crate::notify::MemorySink;

    fn machine() -> BookingMachine<MemorySink> {
        BookingMachine::with_sink(MemorySink::new())
    }

    #[test]
    fn construction_enters_new() {
        let booking = machine();

        assert_eq!(booking.current_state(), &BookingState::New);
        assert_eq!(booking.sink().lines(), ["New"]);
        assert!(!booking.record().booking_id.is_nil());
        assert!(booking.history().transitions().is_empty());
    }

    #[test]
    fn submit_details_moves_to_pending() {
        let mut booking = machine();

        booking.submit_details("Ada", 2).unwrap();

        assert_eq!(booking.current_state(), &BookingState::Pending);
        assert_eq!(booking.record().attendee, "Ada");
        assert_eq!(booking.record().ticket_count, 2);
        assert_eq!(booking.sink().lines(), ["New", "Pending"]);
    }

    #[test]
    fn cancel_from_new_closes_with_new_reason() {
        let mut booking = machine();

        booking.cancel().unwrap();

        assert_eq!(
            booking.current_state(),
            &BookingState::closed(reason::NEW_CANCELED)
        );
        assert_eq!(
            booking.sink().lines(),
            ["New", "Closing - New Booking Canceled", "Closed"]
        );
    }

    #[test]
    fn date_passed_from_new_expires() {
        let mut booking = machine();

        booking.date_passed().unwrap();

        assert_eq!(
            booking.current_state(),
            &BookingState::closed(reason::NEW_EXPIRED)
        );
    }

    #[test]
    fn cancel_from_booked_closes_with_existing_reason() {
        let mut booking = machine();
        booking.force_transition(BookingState::Booked);

        booking.cancel().unwrap();

        assert_eq!(
            booking.current_state(),
            &BookingState::closed(reason::EXISTING_CANCELED)
        );
    }

    #[test]
    fn date_passed_from_booked_completes() {
        let mut booking = machine();
        booking.force_transition(BookingState::Booked);

        booking.date_passed().unwrap();

        assert_eq!(
            booking.current_state(),
            &BookingState::closed(reason::EXISTING_COMPLETED)
        );
    }

    #[test]
    fn submit_details_fails_outside_new() {
        let mut booking = machine();
        booking.force_transition(BookingState::Booked);

        let err = booking.submit_details("Grace", 4).unwrap_err();

        assert_eq!(
            err,
            BookingError::UnsupportedTransition {
                state: "Booked".to_string(),
                trigger: BookingTrigger::EnterDetails,
            }
        );
        // Failed triggers are no-ops on the record.
        assert!(booking.record().attendee.is_empty());
        assert_eq!(booking.record().ticket_count, 0);
    }

    #[test]
    fn pending_rejects_every_trigger() {
        let mut booking = machine();
        booking.submit_details("Ada", 2).unwrap();

        assert!(booking.submit_details("Ada", 2).is_err());
        assert!(booking.cancel().is_err());
        assert!(booking.date_passed().is_err());

        assert_eq!(booking.current_state(), &BookingState::Pending);
        assert_eq!(booking.sink().lines(), ["New", "Pending"]);
        assert_eq!(booking.history().transitions().len(), 1);
    }

    #[test]
    fn closed_rejects_every_trigger() {
        let mut booking = machine();
        booking.cancel().unwrap();
        let before = booking.current_state().clone();

        assert!(booking.submit_details("Ada", 2).is_err());
        assert!(booking.cancel().is_err());
        assert!(booking.date_passed().is_err());

        assert_eq!(booking.current_state(), &before);
        assert!(booking.is_closed());
    }

    #[test]
    fn forced_close_emits_reason_line_first() {
        let mut booking = machine();

        booking.force_transition(BookingState::closed("Manual Shutdown"));

        assert_eq!(
            booking.sink().lines(),
            ["New", "Closing - Manual Shutdown", "Closed"]
        );
    }

    #[test]
    fn entering_new_assigns_booking_id() {
        let mut booking = machine();

        booking.force_transition(BookingState::New);

        assert!(!booking.record().booking_id.is_nil());
        assert_eq!(booking.sink().lines(), ["New", "New"]);
        // History still records the forced re-entry.
        assert_eq!(booking.history().transitions().len(), 1);
    }

    #[test]
    fn history_tracks_causes_in_order() {
        let mut booking = machine();
        booking.submit_details("Ada", 2).unwrap();
        booking.force_transition(BookingState::Booked);
        booking.date_passed().unwrap();

        let transitions = booking.history().transitions();
        assert_eq!(transitions.len(), 3);
        assert_eq!(
            transitions[0].cause,
            TransitionCause::Triggered(BookingTrigger::EnterDetails)
        );
        assert_eq!(transitions[1].cause, TransitionCause::Forced);
        assert_eq!(
            transitions[2].cause,
            TransitionCause::Triggered(BookingTrigger::DatePassed)
        );

        let path = booking.history().get_path();
        assert_eq!(path[0], &BookingState::New);
        assert_eq!(path[3], &BookingState::closed(reason::EXISTING_COMPLETED));
    }

    #[test]
    fn accessors_are_idempotent() {
        let booking = machine();

        let state1 = booking.current_state().clone();
        let state2 = booking.current_state().clone();
        let record1 = booking.record().clone();
        let record2 = booking.record().clone();

        assert_eq!(state1, state2);
        assert_eq!(record1, record2);
        assert_eq!(booking.sink().lines(), ["New"]);
    }
}
