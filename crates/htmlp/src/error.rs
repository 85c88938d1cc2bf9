use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by [`Buffer`](crate::Buffer) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// The initial allocation could not be made.
    #[error("Failed to allocate buffer of {capacity} bytes")]
    Allocation {
        /// Requested capacity, excluding the terminator.
        capacity: usize,
    },
    /// The buffer has no backing storage (it was freed or never allocated).
    #[error("Buffer has no backing storage")]
    DataBuffer,
    /// Growing the buffer failed.
    #[error("Failed to resize buffer to {capacity} bytes")]
    Resize {
        /// Capacity the buffer was growing to.
        capacity: usize,
    },
    /// A write started past the end of the current content.
    #[error("Offset {offset} is past the end of the buffer content ({length} bytes)")]
    Offset {
        /// Requested write offset.
        offset: usize,
        /// Content length at the time of the write.
        length: usize,
    },
}

/// Failures binding a character source.
#[derive(Debug, Error)]
pub enum InitError {
    /// The file could not be opened for reading.
    #[error("Failed to open file '{}': {source}", path.display())]
    File {
        /// Path that was being opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The source text could not be copied into a buffer.
    #[error("Failed to copy source text: {0}")]
    Buffer(#[from] BufferError),
}

/// Failures of tokenizer operations that return a status.
///
/// Malformed input is never reported here; it surfaces as an
/// [`Error`](crate::TokenKind::Error) token instead.
#[derive(Debug, Error)]
pub enum TokenizerError {
    /// The replay stack cannot hold another token.
    #[error("Token replay stack is full ({capacity} tokens)")]
    ReplayOverflow {
        /// Capacity of the replay stack.
        capacity: usize,
    },
    /// No character source is bound.
    #[error("No character source is bound to the tokenizer")]
    NotInitialized,
    /// Seeking a file source back to its start failed.
    #[error("Failed to rewind character source: {0}")]
    Rewind(#[source] io::Error),
}
