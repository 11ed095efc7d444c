//! Booking workflow demonstration.
//!
//! Drives the two fixed scenarios: a booking that completes when its
//! date passes, and one that is canceled after confirmation.
//!
//! Run with: cargo run --example booking_scenarios

use bookflow::{BookingError, BookingMachine, BookingState};

fn main() -> Result<(), BookingError> {
    println!("=== Booking Workflow: completed booking ===\n");

    let mut booking = BookingMachine::new();
    booking.submit_details("John Smith", 1)?;
    booking.force_transition(BookingState::Booked);
    booking.date_passed()?;

    println!("\nfinal state: {:?}", booking.current_state());
    println!("record: {:?}\n", booking.record());

    println!("=== Booking Workflow: canceled booking ===\n");

    let mut booking = BookingMachine::new();
    booking.submit_details("John Doe", 3)?;
    booking.force_transition(BookingState::Booked);
    booking.cancel()?;

    println!("\nfinal state: {:?}", booking.current_state());
    println!("record: {:?}", booking.record());

    println!("\n=== Demo Complete ===");
    Ok(())
}
