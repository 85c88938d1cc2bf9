use crate::buffer::DEFAULT_CAPACITY;

/// Default number of tokens the replay stack can hold.
pub const DEFAULT_REPLAY_CAPACITY: usize = 16;

/// Default number of messages the diagnostic stack can hold.
pub const DEFAULT_DIAGNOSTIC_CAPACITY: usize = 16;

/// Sizing of the buffers and stacks owned by a [`Tokenizer`](crate::Tokenizer).
///
/// Capacities of zero are raised to one when the tokenizer is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Initial capacity of each token's text buffer.
    pub buffer_capacity: usize,
    /// Number of tokens `peek`/`unget` can hold.
    pub replay_capacity: usize,
    /// Number of diagnostic messages kept.
    pub diagnostic_capacity: usize,
}

impl TokenizerConfig {
    /// Set the initial token buffer capacity.
    #[must_use]
    pub const fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    /// Set the replay stack capacity.
    #[must_use]
    pub const fn with_replay_capacity(mut self, capacity: usize) -> Self {
        self.replay_capacity = capacity;
        self
    }

    /// Set the diagnostic stack capacity.
    #[must_use]
    pub const fn with_diagnostic_capacity(mut self, capacity: usize) -> Self {
        self.diagnostic_capacity = capacity;
        self
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_CAPACITY,
            replay_capacity: DEFAULT_REPLAY_CAPACITY,
            diagnostic_capacity: DEFAULT_DIAGNOSTIC_CAPACITY,
        }
    }
}
