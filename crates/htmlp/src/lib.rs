//! Streaming tokenizer for markup-like text.
//!
//! # Scope
//!
//! This crate implements:
//! - **Buffer** - growable, NUL-terminated byte storage with capacity doubling
//! - **Character sources** - file-backed and text-backed byte producers
//! - **Tokenizer** - splits input into open-tag markers, tag text, text runs,
//!   end-of-file and error tokens, with peek and unget over a bounded replay stack
//! - **Diagnostics** - a bounded stack of human-readable failure messages
//!
//! # Not Implemented
//!
//! - Tree construction or nesting validation
//! - Entity decoding
//! - Attribute parsing (tag text is returned verbatim)

/// Growable byte buffer backing all token text.
pub mod buffer;
/// Tokenizer configuration.
pub mod config;
/// Bounded stack of diagnostic messages.
pub mod diagnostics;
/// Error types for buffers, initialization and tokenizer operations.
pub mod error;
/// Character sources the tokenizer reads from.
pub mod source;
/// Fixed-capacity circular stack shared by the replay and diagnostic stacks.
pub mod stack;
/// Tokenizer state machine and token types.
pub mod tokenizer;

pub use buffer::Buffer;
pub use config::TokenizerConfig;
pub use diagnostics::{DiagnosticStack, NO_ERROR};
pub use error::{BufferError, InitError, TokenizerError};
pub use source::{CharacterSource, SourceInfo};
pub use stack::RingStack;
pub use tokenizer::{Token, TokenKind, Tokenizer};
