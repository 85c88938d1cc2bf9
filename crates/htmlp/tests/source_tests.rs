//! Integration tests for file- and text-backed character sources.

use std::io::Write;

use htmlp::{CharacterSource, InitError, SourceInfo, TokenKind, Tokenizer};
use tempfile::NamedTempFile;

/// Helper to write `content` to a temporary file
fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn drain(source: &mut CharacterSource) -> Vec<u8> {
    let mut bytes = Vec::new();
    while let Some(byte) = source.next_byte().unwrap() {
        bytes.push(byte);
    }
    bytes
}

#[test]
fn test_text_source_bytes_and_rewind() {
    let mut source = CharacterSource::open(&SourceInfo::text("ab")).unwrap();
    assert_eq!(drain(&mut source), b"ab");
    assert_eq!(source.next_byte().unwrap(), None);
    source.rewind().unwrap();
    assert_eq!(drain(&mut source), b"ab");
}

#[test]
fn test_file_source_bytes_and_rewind() {
    let file = temp_file("<x>");
    let mut source = CharacterSource::open(&SourceInfo::file(file.path())).unwrap();
    assert_eq!(drain(&mut source), b"<x>");
    assert_eq!(source.next_byte().unwrap(), None);
    source.rewind().unwrap();
    assert_eq!(drain(&mut source), b"<x>");
    assert_eq!(source.describe(), file.path().display().to_string());
}

#[test]
fn test_tokenize_file() {
    let file = temp_file("<div>\n  Hello\n</div>\n");
    let tokenizer = Tokenizer::open(&SourceInfo::file(file.path())).unwrap();
    let tokens: Vec<(TokenKind, String)> = tokenizer
        .map(|token| (token.kind(), token.text().into_owned()))
        .collect();
    assert_eq!(
        tokens,
        [
            (TokenKind::OpenTag, String::new()),
            (TokenKind::CloseTag, "div".to_string()),
            (TokenKind::String, "Hello".to_string()),
            (TokenKind::OpenTag, String::new()),
            (TokenKind::CloseTag, "/div".to_string()),
        ]
    );
}

#[test]
fn test_rewind_file_tokenizer() {
    let file = temp_file("<a>text");
    let mut tokenizer = Tokenizer::open(&SourceInfo::file(file.path())).unwrap();
    let first_pass: Vec<_> = tokenizer.by_ref().collect();
    tokenizer.rewind().unwrap();
    let second_pass: Vec<_> = tokenizer.by_ref().collect();
    assert_eq!(first_pass.len(), 3);
    assert_eq!(first_pass, second_pass);
}

#[test]
fn test_missing_file_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.html");

    let mut tokenizer = Tokenizer::default();
    let result = tokenizer.init(&SourceInfo::file(&path));
    assert!(matches!(result, Err(InitError::File { .. })));
    assert!(tokenizer.had_error());
    assert!(
        tokenizer
            .get_error()
            .starts_with(&format!("Failed to open file '{}'", path.display()))
    );
    assert!(!tokenizer.had_error());
    assert!(tokenizer.get_token().is_eof());
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_ends_stream_with_diagnostic() {
    // Opening a directory succeeds on unix, reading it fails.
    let dir = tempfile::tempdir().unwrap();
    let mut tokenizer = Tokenizer::default();
    tokenizer.init(&SourceInfo::file(dir.path())).unwrap();

    let token = tokenizer.get_token();
    assert_eq!(token.kind(), TokenKind::EndOfFile);
    assert_eq!(token.text(), "EOF");
    assert!(tokenizer.get_token().is_eof());
    assert!(tokenizer.had_error());
    assert!(tokenizer.get_error().starts_with("Failed to read"));
}
