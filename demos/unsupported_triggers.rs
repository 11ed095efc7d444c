//! Unsupported trigger handling.
//!
//! Shows that triggers without a table entry fail with
//! `UnsupportedTransition` and leave the machine untouched.
//!
//! Run with: cargo run --example unsupported_triggers

use bookflow::BookingMachine;

fn main() {
    println!("=== Unsupported Triggers ===\n");

    let mut booking = BookingMachine::new();
    booking
        .submit_details("Ada Lovelace", 2)
        .expect("EnterDetails is valid in New");

    // Pending is a dead end: every trigger is rejected.
    for (label, result) in [
        ("submit_details", booking.submit_details("Ada Lovelace", 2)),
        ("cancel", booking.cancel()),
        ("date_passed", booking.date_passed()),
    ] {
        match result {
            Err(err) => println!("{label} rejected: {err}"),
            Ok(()) => println!("{label} unexpectedly succeeded"),
        }
    }

    println!("\nstate after rejections: {:?}", booking.current_state());
    println!("record after rejections: {:?}", booking.record());

    println!("\n=== Demo Complete ===");
}
