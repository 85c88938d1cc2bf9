use crate::config::TokenizerConfig;
use crate::diagnostics::DiagnosticStack;
use crate::error::{InitError, TokenizerError};
use crate::source::{CharacterSource, SourceInfo};
use crate::stack::RingStack;

use super::token::{EOF_TEXT, Token, TokenKind, UNDEFINED_TEXT, UNTERMINATED_TAG};

/// A streaming tokenizer over one [`CharacterSource`].
///
/// The tokenizer keeps a single lookahead byte. Each call to
/// [`get_token`](Self::get_token) skips whitespace and then switches on that
/// byte:
///
/// - end of stream produces [`TokenKind::EndOfFile`], and keeps producing it
/// - `<` produces an [`TokenKind::OpenTag`] marker and enters the tag
/// - inside a tag, the text up to `>` produces a [`TokenKind::CloseTag`]
///   (or [`TokenKind::Empty`] for `<>`)
/// - a stray `>` produces [`TokenKind::Undefined`]
/// - anything else produces a [`TokenKind::String`] covering the text run
///
/// Tokens pushed back with [`unget_token`](Self::unget_token) or observed
/// with [`peek_token`](Self::peek_token) are replayed before any new input is
/// read.
///
/// # Example
/// ```
/// use htmlp::{SourceInfo, TokenKind, Tokenizer};
///
/// let mut tokenizer = Tokenizer::open(&SourceInfo::text("<p>hi</p>")).unwrap();
/// let kinds: Vec<TokenKind> = tokenizer.by_ref().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::OpenTag,
///         TokenKind::CloseTag,
///         TokenKind::String,
///         TokenKind::OpenTag,
///         TokenKind::CloseTag,
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct Tokenizer {
    pub(super) config: TokenizerConfig,
    pub(super) source: Option<CharacterSource>,
    /// Next unconsumed byte; `None` at end of stream.
    pub(super) lookahead: Option<u8>,
    /// Byte offset of `lookahead` in the input.
    pub(super) position: usize,
    /// Set after an open-tag marker until the tag's text has been produced.
    pub(super) in_tag: bool,
    pub(super) replay: RingStack<Token>,
    pub(super) diagnostics: DiagnosticStack,
}

impl Tokenizer {
    /// Create a tokenizer with no source bound. It produces only
    /// end-of-file tokens until [`init`](Self::init) is called.
    #[must_use]
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            config,
            source: None,
            lookahead: None,
            position: 0,
            in_tag: false,
            replay: RingStack::new(config.replay_capacity),
            diagnostics: DiagnosticStack::new(config.diagnostic_capacity),
        }
    }

    /// Create a tokenizer with the default configuration and bind `info`.
    ///
    /// # Errors
    ///
    /// See [`Tokenizer::init`].
    pub fn open(info: &SourceInfo) -> Result<Self, InitError> {
        let mut tokenizer = Self::default();
        tokenizer.init(info)?;
        Ok(tokenizer)
    }

    /// Bind the source described by `info` and load the first lookahead byte.
    ///
    /// Any previously bound source is released and pending replay tokens are
    /// dropped. Recorded diagnostics are kept.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::File`] if the file cannot be opened or
    /// [`InitError::Buffer`] if the text cannot be copied. The message is
    /// also pushed onto the diagnostic stack.
    pub fn init(&mut self, info: &SourceInfo) -> Result<(), InitError> {
        self.free();
        self.replay.clear();

        let source = match CharacterSource::open(info) {
            Ok(source) => source,
            Err(e) => {
                self.note(&e);
                return Err(e);
            }
        };
        self.source = Some(source);
        self.lookahead = self.read_byte();
        Ok(())
    }

    /// Release the bound source. Calling this more than once is harmless.
    pub fn free(&mut self) {
        self.source = None;
        self.lookahead = None;
        self.position = 0;
        self.in_tag = false;
    }

    /// Returns true if a source is bound.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.source.is_some()
    }

    /// Byte offset of the next unconsumed input byte.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Produce the next token.
    ///
    /// Replayed tokens are returned first. Malformed input is reported
    /// in-band as a [`TokenKind::Error`] token, so callers should check the
    /// kind of every token.
    pub fn get_token(&mut self) -> Token {
        if let Some(token) = self.replay.pop() {
            return token;
        }

        self.skip_whitespace();

        if self.in_tag {
            return self.close_tag();
        }

        match self.lookahead {
            None => self.make_token(TokenKind::EndOfFile, EOF_TEXT.as_bytes()),
            Some(b'<') => {
                self.advance();
                self.in_tag = true;
                self.make_token(TokenKind::OpenTag, b"")
            }
            Some(b'>') => {
                self.advance();
                self.make_token(TokenKind::Undefined, UNDEFINED_TEXT.as_bytes())
            }
            Some(_) => self.text_run(),
        }
    }

    /// Produce the text of the current tag, consuming its closing `>`.
    ///
    /// This is what [`get_token`](Self::get_token) runs after an open-tag
    /// marker; it can also be called directly. Reaching `<` or the end of
    /// input first yields an [`UNTERMINATED_TAG`] error token and leaves the
    /// `<` unconsumed.
    pub fn close_tag(&mut self) -> Token {
        self.in_tag = false;
        let mut text = match self.new_buffer() {
            Ok(text) => text,
            Err(token) => return token,
        };

        loop {
            match self.lookahead {
                Some(b'>') => {
                    self.advance();
                    break;
                }
                Some(b'<') | None => {
                    Self::log_parse_error();
                    return self.make_token(TokenKind::Error, UNTERMINATED_TAG.as_bytes());
                }
                Some(byte) => {
                    if let Err(e) = text.append(byte) {
                        return self.buffer_failure(&e);
                    }
                    self.advance();
                }
            }
        }

        Self::trim_trailing_whitespace(&mut text);
        let kind = if text.is_empty() {
            TokenKind::Empty
        } else {
            TokenKind::CloseTag
        };
        Token::from_buffer(kind, text)
    }

    /// Produce the next token and keep it queued, so the following
    /// [`get_token`](Self::get_token) returns it again.
    pub fn peek_token(&mut self) -> Token {
        let token = self.get_token();
        // get_token either popped an entry or found the stack empty.
        let pushed = self.replay.push(token.clone());
        debug_assert!(pushed.is_ok(), "replay stack full after a pop");
        token
    }

    /// Queue `token` to be returned by the next [`get_token`](Self::get_token).
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::ReplayOverflow`] if the replay stack is full.
    /// The token is dropped and the message pushed onto the diagnostic stack.
    pub fn unget_token(&mut self, token: Token) -> Result<(), TokenizerError> {
        if self.replay.push(token).is_err() {
            let e = TokenizerError::ReplayOverflow {
                capacity: self.replay.capacity(),
            };
            self.note(&e);
            return Err(e);
        }
        Ok(())
    }

    /// Move back to the start of the input.
    ///
    /// Works for both file and text sources. Replayed tokens and diagnostics
    /// are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::NotInitialized`] if no source is bound, or
    /// [`TokenizerError::Rewind`] if seeking the file fails.
    pub fn rewind(&mut self) -> Result<(), TokenizerError> {
        let result = match self.source.as_mut() {
            None => Err(TokenizerError::NotInitialized),
            Some(source) => source.rewind().map_err(TokenizerError::Rewind),
        };
        if let Err(e) = result {
            self.note(&e);
            return Err(e);
        }

        self.position = 0;
        self.in_tag = false;
        self.lookahead = self.read_byte();
        Ok(())
    }

    /// Returns true if any diagnostic is recorded.
    #[must_use]
    pub const fn had_error(&self) -> bool {
        self.diagnostics.had_error()
    }

    /// Pop the most recent diagnostic, or [`NO_ERROR`](crate::NO_ERROR).
    pub fn get_error(&mut self) -> String {
        self.diagnostics.pop()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(TokenizerConfig::default())
    }
}

/// Yields tokens up to, but not including, the end-of-file token.
impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.get_token();
        if token.is_eof() { None } else { Some(token) }
    }
}
