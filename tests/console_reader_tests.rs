//! Line reader editing-semantics tests

mod common;

use common::TestOutput;
use rust_soc_demo::console::LineReader;

fn feed(reader: &mut LineReader, out: &mut TestOutput, bytes: &[u8]) -> Option<String> {
    let mut submitted = None;
    for &b in bytes {
        if let Some(line) = reader.process_byte(b, out) {
            submitted = Some(line.to_string());
        }
    }
    submitted
}

#[test]
fn test_accumulates_and_echoes_verbatim() {
    let mut reader = LineReader::new();
    let mut out = TestOutput::new();

    let line = feed(&mut reader, &mut out, b"hello world\n");

    assert_eq!(line.as_deref(), Some("hello world"));
    // Every character echoed, then the newline
    assert_eq!(out.0, "hello world\n");
}

#[test]
fn test_no_line_until_enter() {
    let mut reader = LineReader::new();
    let mut out = TestOutput::new();

    assert!(feed(&mut reader, &mut out, b"help").is_none());
    assert_eq!(reader.pending(), "help");
}

#[test]
fn test_carriage_return_submits_too() {
    let mut reader = LineReader::new();
    let mut out = TestOutput::new();

    let line = feed(&mut reader, &mut out, b"reboot\r");
    assert_eq!(line.as_deref(), Some("reboot"));
}

#[test]
fn test_backspace_erases_and_echoes_erase_sequence() {
    let mut reader = LineReader::new();
    let mut out = TestOutput::new();

    let line = feed(&mut reader, &mut out, b"lex\x08d\n");

    assert_eq!(line.as_deref(), Some("led"));
    assert!(out.contains("\x08 \x08"));
}

#[test]
fn test_delete_behaves_like_backspace() {
    let mut reader = LineReader::new();
    let mut out = TestOutput::new();

    let line = feed(&mut reader, &mut out, b"ax\x7fbc\n");
    assert_eq!(line.as_deref(), Some("abc"));
}

#[test]
fn test_backspace_on_empty_line_is_noop() {
    let mut reader = LineReader::new();
    let mut out = TestOutput::new();

    assert!(feed(&mut reader, &mut out, b"\x08\x7f").is_none());

    // No underflow and no erase sequence emitted
    assert_eq!(out.0, "");
    assert_eq!(reader.pending(), "");
}

#[test]
fn test_bell_is_ignored() {
    let mut reader = LineReader::new();
    let mut out = TestOutput::new();

    let line = feed(&mut reader, &mut out, b"he\x07lp\n");

    assert_eq!(line.as_deref(), Some("help"));
    assert!(!out.contains("\x07"));
}

#[test]
fn test_nul_is_never_buffered() {
    let mut reader = LineReader::new();
    let mut out = TestOutput::new();

    let line = feed(&mut reader, &mut out, b"a\x00b\n");

    assert_eq!(line.as_deref(), Some("ab"));
}

#[test]
fn test_overflow_truncates_to_63_chars() {
    let mut reader = LineReader::new();
    let mut out = TestOutput::new();

    let mut input = vec![b'x'; 100];
    input.push(b'\n');
    let line = feed(&mut reader, &mut out, &input).unwrap();

    assert_eq!(line.len(), 63);
    // Dropped characters are not echoed either
    assert_eq!(out.count("x"), 63);
}

#[test]
fn test_overflow_is_not_carried_into_next_line() {
    let mut reader = LineReader::new();
    let mut out = TestOutput::new();

    let mut input = vec![b'x'; 100];
    input.push(b'\n');
    feed(&mut reader, &mut out, &input);

    let line = feed(&mut reader, &mut out, b"ok\n");
    assert_eq!(line.as_deref(), Some("ok"));
}
