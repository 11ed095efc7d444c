//! Notification side channel for state entry lines.
//!
//! Entering a state produces exactly one human-readable line naming that
//! state; entering `Closed` is preceded by a `Closing - <reason>` line.
//! The machine delivers lines to whatever sink was injected at
//! construction, so callers decide whether they end up on standard
//! output, in memory, or elsewhere.

/// Receiver for state entry notification lines.
pub trait NotificationSink {
    /// Deliver one notification line.
    fn notify(&mut self, line: &str);
}

/// Sink that prints each line to standard output.
///
/// This is the default sink used by `BookingMachine::new`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Sink that captures lines in memory.
///
/// Used by tests and demos to assert on the exact notification sequence.
///
/// # Example
///
/// ```rust
/// use bookflow::{MemorySink, NotificationSink};
///
/// let mut sink = MemorySink::new();
/// sink.notify("New");
/// sink.notify("Pending");
/// assert_eq!(sink.lines(), ["New", "Pending"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines captured so far, in delivery order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl NotificationSink for MemorySink {
    fn notify(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
