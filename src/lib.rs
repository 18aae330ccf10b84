//! Classic linked data structures with owned nodes.
//!
//! Six independent containers: a [singly linked list], a doubly linked
//! list, circular variants of both, and stack/queue adapters built over
//! singly-linked chains. None of them depend on each other, and none of
//! them provide internal synchronization.
//!
//! [singly linked list]: https://en.wikipedia.org/wiki/Linked_list

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod collections;
pub mod error;

/// Linked Data Structures Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{doubly, queue, singly, stack};

    #[doc(no_inline)]
    pub use super::collections::circular_doubly_linked_list::CircularDoubly;
    #[doc(no_inline)]
    pub use super::collections::circular_singly_linked_list::CircularSingly;
    #[doc(no_inline)]
    pub use super::collections::doubly_linked_list::DoublyLinked;
    #[doc(no_inline)]
    pub use super::collections::linked_queue::LinkedQueue;
    #[doc(no_inline)]
    pub use super::collections::linked_stack::LinkedStack;
    #[doc(no_inline)]
    pub use super::collections::singly_linked_list::SinglyLinked;

    #[doc(no_inline)]
    pub use super::error::EmptyError;
}
