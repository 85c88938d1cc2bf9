//! Integration tests for the diagnostic stack.

use htmlp::{DiagnosticStack, NO_ERROR};

#[test]
fn test_pop_order_is_lifo() {
    let mut stack = DiagnosticStack::new(8);
    stack.push("m1");
    stack.push("m2");
    stack.push("m3");
    assert!(stack.had_error());
    assert_eq!(stack.pop(), "m3");
    assert_eq!(stack.pop(), "m2");
    assert_eq!(stack.pop(), "m1");
    assert_eq!(stack.pop(), NO_ERROR);
    assert!(!stack.had_error());
}

#[test]
fn test_empty_stack_reports_no_error() {
    let mut stack = DiagnosticStack::new(1);
    assert_eq!(stack.pop(), "No Error");
    assert_eq!(stack.last(), None);
}
