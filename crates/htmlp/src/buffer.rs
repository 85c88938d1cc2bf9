use std::borrow::Cow;
use std::fmt;

use crate::error::BufferError;

/// Capacity of a buffer created with [`Buffer::new`].
pub const DEFAULT_CAPACITY: usize = 32;

/// A growable byte sequence that is always NUL-terminated.
///
/// Storage holds `capacity + 1` bytes so the byte at index `len()` is always
/// a terminator. Every byte past the content is kept zeroed. When an append
/// or write would overflow, capacity doubles until the content fits; there is
/// no shrink operation.
///
/// A default-constructed or freed buffer has no backing storage. Mutating
/// operations on it fail with [`BufferError::DataBuffer`].
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    /// Empty when unallocated, otherwise `capacity + 1` bytes.
    data: Vec<u8>,
    length: usize,
}

impl Buffer {
    /// Allocate a zero-filled buffer with [`DEFAULT_CAPACITY`].
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] if the storage cannot be allocated.
    pub fn new() -> Result<Self, BufferError> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Allocate a zero-filled buffer holding at least `capacity` bytes.
    ///
    /// A requested capacity of zero is raised to one so doubling can make
    /// progress.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] if the storage cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, BufferError> {
        let capacity = capacity.max(1);
        let data = zeroed(capacity).ok_or(BufferError::Allocation { capacity })?;
        Ok(Self { data, length: 0 })
    }

    /// Allocate a buffer and copy `bytes` into it.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] or [`BufferError::Resize`] if the
    /// storage cannot be allocated.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BufferError> {
        let mut buffer = Self::new()?;
        buffer.write(bytes)?;
        Ok(buffer)
    }

    /// Number of content bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns true if the buffer holds no content.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of content bytes the buffer can hold without growing.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len().saturating_sub(1)
    }

    /// Returns true if the buffer has backing storage.
    #[must_use]
    pub fn is_allocated(&self) -> bool {
        !self.data.is_empty()
    }

    /// The content bytes, without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.length]
    }

    /// The content bytes followed by the NUL terminator.
    ///
    /// Empty when the buffer has no backing storage.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.data.get(..=self.length).unwrap_or_default()
    }

    /// The content decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// Zero the content and reset the length. Capacity is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::DataBuffer`] if the buffer has no storage.
    pub fn clear(&mut self) -> Result<(), BufferError> {
        self.check_storage()?;
        self.data.fill(0);
        self.length = 0;
        Ok(())
    }

    /// Append a single byte, doubling capacity first if the buffer is full.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::DataBuffer`] if the buffer has no storage, or
    /// [`BufferError::Resize`] if growing fails.
    pub fn append(&mut self, byte: u8) -> Result<(), BufferError> {
        self.check_storage()?;
        self.reserve_for(self.length + 1)?;
        self.data[self.length] = byte;
        self.length += 1;
        Ok(())
    }

    /// Replace the content with `text`. Equivalent to `insert(text, 0)`.
    ///
    /// # Errors
    ///
    /// See [`Buffer::insert`].
    pub fn write(&mut self, text: &[u8]) -> Result<(), BufferError> {
        self.insert(text, 0)
    }

    /// Copy `text` into the buffer starting at `offset`.
    ///
    /// The content afterwards ends where `text` ends; anything previously
    /// stored past that point is discarded. An empty `text` is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::DataBuffer`] if the buffer has no storage,
    /// [`BufferError::Offset`] if `offset` is past the current content, or
    /// [`BufferError::Resize`] if growing fails.
    pub fn insert(&mut self, text: &[u8], offset: usize) -> Result<(), BufferError> {
        self.check_storage()?;
        if text.is_empty() {
            return Ok(());
        }
        if offset > self.length {
            return Err(BufferError::Offset {
                offset,
                length: self.length,
            });
        }

        let end = offset + text.len();
        self.reserve_for(end)?;
        self.data[offset..end].copy_from_slice(text);
        if end < self.length {
            self.data[end..self.length].fill(0);
        }
        self.length = end;
        Ok(())
    }

    /// Shorten the content to `len` bytes, zeroing the released bytes.
    ///
    /// Has no effect if `len` is not shorter than the current content.
    pub fn truncate(&mut self, len: usize) {
        if len < self.length {
            self.data[len..self.length].fill(0);
            self.length = len;
        }
    }

    /// Release the storage. Calling this more than once is harmless.
    pub fn free(&mut self) {
        self.data = Vec::new();
        self.length = 0;
    }

    fn check_storage(&self) -> Result<(), BufferError> {
        if self.is_allocated() {
            Ok(())
        } else {
            Err(BufferError::DataBuffer)
        }
    }

    /// Double the capacity until `needed` content bytes fit.
    fn reserve_for(&mut self, needed: usize) -> Result<(), BufferError> {
        let mut capacity = self.capacity();
        if needed <= capacity {
            return Ok(());
        }
        while capacity < needed {
            capacity = capacity
                .checked_mul(2)
                .ok_or(BufferError::Resize { capacity: needed })?;
        }

        let total = capacity
            .checked_add(1)
            .ok_or(BufferError::Resize { capacity })?;
        self.data
            .try_reserve_exact(total - self.data.len())
            .map_err(|_| BufferError::Resize { capacity })?;
        self.data.resize(total, 0);
        Ok(())
    }
}

/// Allocate `capacity + 1` zeroed bytes, or `None` if allocation fails.
fn zeroed(capacity: usize) -> Option<Vec<u8>> {
    let total = capacity.checked_add(1)?;
    let mut data = Vec::new();
    data.try_reserve_exact(total).ok()?;
    data.resize(total, 0);
    Some(data)
}

impl PartialEq for Buffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Buffer {}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_zeroed() {
        let buffer = Buffer::new().unwrap();
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), DEFAULT_CAPACITY);
        assert!(buffer.data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let mut buffer = Buffer::with_capacity(0).unwrap();
        assert_eq!(buffer.capacity(), 1);
        for byte in b"abc" {
            buffer.append(*byte).unwrap();
        }
        assert_eq!(buffer.capacity(), 4);
        assert_eq!(buffer.as_bytes(), b"abc");
    }

    #[test]
    fn test_append_grows_by_doubling() {
        let mut buffer = Buffer::with_capacity(4).unwrap();
        for byte in b"abcde" {
            buffer.append(*byte).unwrap();
        }
        assert_eq!(buffer.capacity(), 8);
        assert_eq!(buffer.as_bytes_with_nul(), b"abcde\0");
    }

    #[test]
    fn test_insert_shorter_text_zeroes_tail() {
        let mut buffer = Buffer::from_bytes(b"hello world").unwrap();
        buffer.insert(b"p", 4).unwrap();
        assert_eq!(buffer.as_bytes(), b"hellp");
        assert!(buffer.data[5..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_truncate_keeps_capacity() {
        let mut buffer = Buffer::from_bytes(b"text  \n").unwrap();
        let capacity = buffer.capacity();
        buffer.truncate(4);
        assert_eq!(buffer.as_bytes_with_nul(), b"text\0");
        assert_eq!(buffer.capacity(), capacity);
        buffer.truncate(10);
        assert_eq!(buffer.len(), 4);
    }
}
