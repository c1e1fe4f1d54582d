//! Integration tests for cling-input.
//!
//! Cursors are driven through mocks so the tests behave the same in a
//! terminal and in CI.

use cling_input::{InputError, MockStdin, StdinCursor, StdinReader};
use proptest::prelude::*;

#[test]
fn piped_lines_then_sentinel() {
    let mut cursor = StdinCursor::open(&MockStdin::piped("a\nb\n")).unwrap();

    assert_eq!(cursor.read_line().unwrap().as_deref(), Some("a\n"));
    assert_eq!(cursor.read_line().unwrap().as_deref(), Some("b\n"));
    assert_eq!(cursor.read_line().unwrap(), None);
}

#[test]
fn each_open_gets_its_own_stream() {
    let stdin = MockStdin::piped("one\n");

    let mut first = StdinCursor::open(&stdin).unwrap();
    let mut second = StdinCursor::open(&stdin).unwrap();

    assert_eq!(first.read_line().unwrap().as_deref(), Some("one\n"));
    assert_eq!(first.read_line().unwrap(), None);
    assert_eq!(second.read_line().unwrap().as_deref(), Some("one\n"));
}

#[test]
fn boxed_reader_opens_cursor() {
    let stdin: Box<dyn StdinReader> = Box::new(MockStdin::piped("boxed\n"));
    let mut cursor = StdinCursor::open(&stdin).unwrap();
    assert_eq!(cursor.read_line().unwrap().as_deref(), Some("boxed\n"));
}

#[test]
fn unavailable_stdin_reports_open_error() {
    match StdinCursor::open(&MockStdin::unavailable()) {
        Err(InputError::Unavailable(err)) => {
            assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

#[test]
fn terminal_mock_reads_nothing() {
    let mut cursor = StdinCursor::open(&MockStdin::terminal()).unwrap();
    assert_eq!(cursor.read_line().unwrap(), None);
}

proptest! {
    /// Lines come back in order, newline included, followed by the sentinel.
    #[test]
    fn cursor_replays_lines_in_order(lines in prop::collection::vec("[a-z0-9 ]{0,12}", 0..20)) {
        let input: String = lines.iter().map(|l| format!("{l}\n")).collect();
        let mut cursor = StdinCursor::open(&MockStdin::piped(input)).unwrap();

        for line in &lines {
            let got = cursor.read_line().unwrap();
            prop_assert_eq!(got, Some(format!("{line}\n")));
        }
        prop_assert_eq!(cursor.read_line().unwrap(), None);
        prop_assert_eq!(cursor.lines_read(), lines.len());
    }
}
