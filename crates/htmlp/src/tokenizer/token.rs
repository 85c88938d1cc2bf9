use std::borrow::Cow;
use std::fmt;

use strum_macros::{Display, EnumIter};

use crate::buffer::Buffer;
use crate::error::BufferError;

/// Text carried by [`TokenKind::EndOfFile`] tokens.
pub const EOF_TEXT: &str = "EOF";
/// Text carried by [`TokenKind::Undefined`] tokens.
pub const UNDEFINED_TEXT: &str = "UNDEFINED";
/// Text carried by the [`TokenKind::Error`] token for a tag missing its `>`.
pub const UNTERMINATED_TAG: &str = "Unterminated html tag";

/// Classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// The input is exhausted. Text is `"EOF"`.
    #[strum(to_string = "EOF")]
    EndOfFile,
    /// A tag with nothing between `<` and `>`.
    Empty,
    /// A `<` marking the start of a tag. Text is empty.
    OpenTag,
    /// The text of a tag up to its closing `>`, e.g. `div class="x"` or `/p`.
    CloseTag,
    /// A run of text outside any tag, trailing whitespace removed.
    String,
    /// A stray `>` outside any tag. Text is `"UNDEFINED"`.
    Undefined,
    /// Malformed input or an internal failure. Text is the message.
    Error,
}

/// A classified span of input.
///
/// Every token owns its own copy of its text, so it stays valid after the
/// tokenizer moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: Buffer,
}

impl Token {
    /// Create a token holding a copy of `text`.
    ///
    /// # Errors
    ///
    /// Returns a [`BufferError`] if the text buffer cannot be allocated.
    pub fn new(kind: TokenKind, text: &[u8]) -> Result<Self, BufferError> {
        Ok(Self {
            kind,
            text: Buffer::from_bytes(text)?,
        })
    }

    pub(crate) const fn from_buffer(kind: TokenKind, text: Buffer) -> Self {
        Self { kind, text }
    }

    /// The token's classification.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token's text, decoded as UTF-8 with invalid sequences replaced.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        self.text.to_str_lossy()
    }

    /// The token's raw text bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// The buffer holding the token's text.
    #[must_use]
    pub const fn buffer(&self) -> &Buffer {
        &self.text
    }

    /// Returns true if this is an end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfFile)
    }

    /// Returns true if this is an error token.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.text)
    }
}
