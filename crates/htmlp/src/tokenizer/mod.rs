//! Tokenizer module.
//!
//! Splits a [`CharacterSource`](crate::CharacterSource) into [`Token`]s by
//! switching on a single lookahead byte.

/// Input, buffer and diagnostic helpers used while producing tokens.
pub mod helpers;
/// Tokenizer state and the public token operations.
pub mod machine;
/// Token types produced by the tokenizer.
pub mod token;

pub use machine::Tokenizer;
pub use token::{EOF_TEXT, Token, TokenKind, UNDEFINED_TEXT, UNTERMINATED_TAG};
