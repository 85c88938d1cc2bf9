//! Helper functions for the tokenizer.
//!
//! - Input handling: reading into the lookahead byte, skipping whitespace
//! - Token construction: allocating text buffers, text runs, trimming
//! - Failure reporting: diagnostics and deduplicated warnings

use std::fmt;

use htmlp_common::warning::warn_once;

use crate::buffer::Buffer;
use crate::error::BufferError;

use super::machine::Tokenizer;
use super::token::{Token, TokenKind};

/// Warning reported for a tag that hits `<` or end of input before `>`.
pub(super) const UNTERMINATED_TAG_WARNING: &str = "unterminated html tag";

// =============================================================================
// Input Helpers
// =============================================================================

impl Tokenizer {
    /// Read the next byte from the bound source.
    ///
    /// A read failure is recorded and treated as end of stream.
    pub(super) fn read_byte(&mut self) -> Option<u8> {
        let source = self.source.as_mut()?;
        match source.next_byte() {
            Ok(byte) => byte,
            Err(e) => {
                let message = format!("Failed to read {}: {e}", source.describe());
                warn_once("Tokenizer", &message);
                self.diagnostics.push(message);
                None
            }
        }
    }

    /// Consume the lookahead byte and load the next one.
    pub(super) fn advance(&mut self) {
        if self.lookahead.is_some() {
            self.position += 1;
            self.lookahead = self.read_byte();
        }
    }

    pub(super) fn skip_whitespace(&mut self) {
        while self.lookahead.is_some_and(Self::is_whitespace_byte) {
            self.advance();
        }
    }

    /// Space, tab, line feed and carriage return.
    pub(super) const fn is_whitespace_byte(byte: u8) -> bool {
        matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
    }
}

// =============================================================================
// Token Construction Helpers
// =============================================================================

impl Tokenizer {
    /// Allocate an empty text buffer, or the error token reporting why not.
    pub(super) fn new_buffer(&mut self) -> Result<Buffer, Token> {
        Buffer::with_capacity(self.config.buffer_capacity).map_err(|e| self.buffer_failure(&e))
    }

    pub(super) fn make_token(&mut self, kind: TokenKind, text: &[u8]) -> Token {
        let mut buffer = match self.new_buffer() {
            Ok(buffer) => buffer,
            Err(token) => return token,
        };
        match buffer.write(text) {
            Ok(()) => Token::from_buffer(kind, buffer),
            Err(e) => self.buffer_failure(&e),
        }
    }

    /// Collect text up to the next `<`, `>` or end of stream.
    pub(super) fn text_run(&mut self) -> Token {
        let mut text = match self.new_buffer() {
            Ok(text) => text,
            Err(token) => return token,
        };
        while let Some(byte) = self.lookahead {
            if matches!(byte, b'<' | b'>') {
                break;
            }
            if let Err(e) = text.append(byte) {
                return self.buffer_failure(&e);
            }
            self.advance();
        }

        Self::trim_trailing_whitespace(&mut text);
        Token::from_buffer(TokenKind::String, text)
    }

    pub(super) fn trim_trailing_whitespace(text: &mut Buffer) {
        let len = text
            .as_bytes()
            .iter()
            .rposition(|&b| !Self::is_whitespace_byte(b))
            .map_or(0, |last| last + 1);
        text.truncate(len);
    }
}

// =============================================================================
// Failure Reporting
// =============================================================================

impl Tokenizer {
    /// Push `error` onto the diagnostic stack.
    pub(super) fn note(&mut self, error: &impl fmt::Display) {
        self.diagnostics.push(error.to_string());
    }

    /// Record a buffer failure and return it as an error token.
    pub(super) fn buffer_failure(&mut self, error: &BufferError) -> Token {
        self.note(error);
        let text = Buffer::from_bytes(error.to_string().as_bytes()).unwrap_or_default();
        Token::from_buffer(TokenKind::Error, text)
    }

    /// Warn about a tag that never reached its `>`.
    ///
    /// The message is fixed so the warning set stays bounded no matter how
    /// many tags are malformed.
    pub(super) fn log_parse_error() {
        warn_once("Tokenizer", UNTERMINATED_TAG_WARNING);
    }
}
