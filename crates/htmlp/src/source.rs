use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Read, Seek};
use std::path::{Path, PathBuf};

use crate::buffer::Buffer;
use crate::error::InitError;

/// Describes where a [`Tokenizer`](crate::Tokenizer) should read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInfo {
    /// Read the file at this path.
    File(PathBuf),
    /// Read this literal text.
    Text(String),
}

impl SourceInfo {
    /// Describe a file source.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Describe an in-memory text source.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }
}

/// A producer of input bytes, one at a time.
///
/// `Ok(None)` from [`next_byte`](Self::next_byte) is the end-of-stream
/// sentinel; it is returned again on every later call.
#[derive(Debug)]
pub enum CharacterSource {
    /// Buffered reads from an open file.
    File {
        /// Path the file was opened from.
        path: PathBuf,
        /// Reader positioned at the next unread byte.
        reader: BufReader<File>,
    },
    /// Bytes copied from caller-provided text.
    Text {
        /// Owned copy of the whole input.
        buffer: Buffer,
        /// Index of the next unread byte.
        cursor: usize,
    },
}

impl CharacterSource {
    /// Bind the source described by `info`.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::File`] if the file cannot be opened, or
    /// [`InitError::Buffer`] if the text cannot be copied.
    pub fn open(info: &SourceInfo) -> Result<Self, InitError> {
        match info {
            SourceInfo::File(path) => Self::open_file(path),
            SourceInfo::Text(content) => Ok(Self::Text {
                buffer: Buffer::from_bytes(content.as_bytes())?,
                cursor: 0,
            }),
        }
    }

    fn open_file(path: &Path) -> Result<Self, InitError> {
        let file = File::open(path).map_err(|source| InitError::File {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::File {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
        })
    }

    /// Consume and return the next byte, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if a file read fails.
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        match self {
            Self::File { reader, .. } => {
                let mut byte = [0u8];
                match reader.read_exact(&mut byte) {
                    Ok(()) => Ok(Some(byte[0])),
                    Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
                    Err(e) => Err(e),
                }
            }
            Self::Text { buffer, cursor } => {
                let byte = buffer.as_bytes().get(*cursor).copied();
                if byte.is_some() {
                    *cursor += 1;
                }
                Ok(byte)
            }
        }
    }

    /// Move back to the first byte of the input.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if seeking the file fails.
    pub fn rewind(&mut self) -> io::Result<()> {
        match self {
            Self::File { reader, .. } => reader.rewind(),
            Self::Text { cursor, .. } => {
                *cursor = 0;
                Ok(())
            }
        }
    }

    /// Short description used in diagnostics, e.g. the file path.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::File { path, .. } => path.display().to_string(),
            Self::Text { buffer, .. } => format!("<text, {} bytes>", buffer.len()),
        }
    }
}
