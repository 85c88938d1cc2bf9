use htmlp_common::warning::warn_once;

use crate::stack::RingStack;

/// Message returned by [`DiagnosticStack::pop`] when no error is recorded.
pub const NO_ERROR: &str = "No Error";

/// Bounded stack of human-readable failure messages.
///
/// Diagnostics are a side channel next to the `Result` returned by each
/// failing operation. When the stack is full the oldest message is dropped
/// and the loss is reported as a warning.
#[derive(Debug, Clone)]
pub struct DiagnosticStack {
    messages: RingStack<String>,
}

impl DiagnosticStack {
    /// Create an empty stack holding at most `capacity` messages.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            messages: RingStack::new(capacity),
        }
    }

    /// Record `message`. Empty messages are ignored.
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            return;
        }
        if let Some(evicted) = self.messages.push_evicting(message) {
            warn_once(
                "Diagnostics",
                &format!("diagnostic stack full, dropped: {evicted}"),
            );
        }
    }

    /// Remove and return the most recent message, or [`NO_ERROR`].
    pub fn pop(&mut self) -> String {
        self.messages
            .pop()
            .unwrap_or_else(|| NO_ERROR.to_string())
    }

    /// The most recent message without removing it.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.messages.peek().map(String::as_str)
    }

    /// Returns true if any message is recorded.
    #[must_use]
    pub const fn had_error(&self) -> bool {
        !self.is_empty()
    }

    /// Number of recorded messages.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if no message is recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
