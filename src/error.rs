//! Error types shared by the container adapters.

use core::fmt;

/// The error returned when a value-returning operation is invoked on an
/// empty container.
///
/// Returned by the stack and queue adapters from `pop`, `dequeue`, and
/// `peek`, where a sentinel value cannot be distinguished from a
/// legitimately stored element.
///
/// # Examples
///
/// ```
/// use linked_dsa::prelude::*;
///
/// let mut stack: LinkedStack<i32> = LinkedStack::new();
/// assert_eq!(stack.pop(), Err(EmptyError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyError;

impl fmt::Display for EmptyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("container is empty")
    }
}

impl std::error::Error for EmptyError {}
