//! Integration tests for the growable byte buffer.

use htmlp::buffer::DEFAULT_CAPACITY;
use htmlp::{Buffer, BufferError};
use proptest::prelude::*;

#[test]
fn test_write_round_trip() {
    let mut buffer = Buffer::new().unwrap();
    buffer.write(b"<html>").unwrap();
    assert_eq!(buffer.as_bytes(), b"<html>");
    assert_eq!(buffer.as_bytes_with_nul(), b"<html>\0");
    assert_eq!(buffer.len(), 6);
    assert_eq!(buffer.to_string(), "<html>");
}

#[test]
fn test_write_empty_is_noop() {
    let mut buffer = Buffer::from_bytes(b"kept").unwrap();
    buffer.write(b"").unwrap();
    assert_eq!(buffer.as_bytes(), b"kept");
}

#[test]
fn test_insert_appends_at_end() {
    let mut buffer = Buffer::from_bytes(b"foo").unwrap();
    buffer.insert(b"bar", 3).unwrap();
    assert_eq!(buffer.as_bytes(), b"foobar");
}

#[test]
fn test_insert_past_end_fails() {
    let mut buffer = Buffer::from_bytes(b"foo").unwrap();
    assert_eq!(
        buffer.insert(b"bar", 4),
        Err(BufferError::Offset {
            offset: 4,
            length: 3
        })
    );
    assert_eq!(buffer.as_bytes(), b"foo");
}

#[test]
fn test_clear_preserves_capacity() {
    let mut buffer = Buffer::with_capacity(2).unwrap();
    buffer.write(b"grow past two").unwrap();
    let capacity = buffer.capacity();
    buffer.clear().unwrap();
    assert!(buffer.is_empty());
    assert_eq!(buffer.capacity(), capacity);
    assert_eq!(buffer.as_bytes_with_nul(), b"\0");
}

#[test]
fn test_write_grows_to_power_of_two() {
    let mut buffer = Buffer::with_capacity(4).unwrap();
    buffer.write(&[b'x'; 17]).unwrap();
    assert_eq!(buffer.capacity(), 32);
    assert_eq!(buffer.len(), 17);
}

#[test]
fn test_free_is_idempotent() {
    let mut buffer = Buffer::from_bytes(b"data").unwrap();
    buffer.free();
    buffer.free();
    assert!(!buffer.is_allocated());
    assert_eq!(buffer.len(), 0);
    assert_eq!(buffer.capacity(), 0);
    assert!(buffer.as_bytes_with_nul().is_empty());
}

#[test]
fn test_operations_without_storage_fail() {
    let mut buffer = Buffer::default();
    assert_eq!(buffer.append(b'a'), Err(BufferError::DataBuffer));
    assert_eq!(buffer.write(b"abc"), Err(BufferError::DataBuffer));
    assert_eq!(buffer.clear(), Err(BufferError::DataBuffer));
    assert!(buffer.is_empty());
    assert!(!buffer.is_allocated());
}

#[test]
fn test_equality_ignores_capacity() {
    let small = Buffer::from_bytes(b"same").unwrap();
    let mut large = Buffer::with_capacity(256).unwrap();
    large.write(b"same").unwrap();
    assert_eq!(small, large);
}

proptest! {
    #[test]
    fn prop_write_round_trip(text in prop::collection::vec(any::<u8>(), 0..10_000)) {
        let mut buffer = Buffer::new().unwrap();
        buffer.write(&text).unwrap();
        prop_assert_eq!(buffer.as_bytes(), &text[..]);
        prop_assert_eq!(buffer.len(), text.len());
        prop_assert_eq!(buffer.as_bytes_with_nul().last(), Some(&0));
    }

    #[test]
    fn prop_append_keeps_bytes_and_doubles(text in prop::collection::vec(any::<u8>(), 0..2_000)) {
        let mut buffer = Buffer::new().unwrap();
        for &byte in &text {
            buffer.append(byte).unwrap();
        }
        prop_assert_eq!(buffer.as_bytes(), &text[..]);

        let capacity = buffer.capacity();
        prop_assert!(capacity >= buffer.len());
        prop_assert_eq!(capacity % DEFAULT_CAPACITY, 0);
        prop_assert!((capacity / DEFAULT_CAPACITY).is_power_of_two());
    }
}
