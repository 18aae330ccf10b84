//! Collection Types.

pub mod circular_doubly_linked_list;
pub mod circular_singly_linked_list;
pub mod doubly_linked_list;
pub mod linked_queue;
pub mod linked_stack;
pub mod singly_linked_list;

/// Collections Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{doubly, queue, singly, stack};

    #[doc(no_inline)]
    pub use super::circular_doubly_linked_list::CircularDoubly;
    #[doc(no_inline)]
    pub use super::circular_singly_linked_list::CircularSingly;
    #[doc(no_inline)]
    pub use super::doubly_linked_list::DoublyLinked;
    #[doc(no_inline)]
    pub use super::linked_queue::LinkedQueue;
    #[doc(no_inline)]
    pub use super::linked_stack::LinkedStack;
    #[doc(no_inline)]
    pub use super::singly_linked_list::SinglyLinked;

    #[doc(no_inline)]
    pub use crate::error::EmptyError;
}
