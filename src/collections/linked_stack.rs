//! A LIFO stack backed by a singly-linked chain of owned nodes.

use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::error::EmptyError;

/// Creates a `LinkedStack` containing the arguments, pushed in order.
///
/// # Examples
///
/// ```
/// use linked_dsa::prelude::*;
///
/// let mut stack = stack![1, 2, 3];
/// assert_eq!(stack.pop(), Ok(3));
/// ```
#[macro_export]
macro_rules! stack {
    () => {
        $crate::collections::linked_stack::LinkedStack::new()
    };
    ($($elem:expr),+ $(,)?) => {{
        let mut stack = $crate::collections::linked_stack::LinkedStack::new();
        $(stack.push($elem);)+
        stack
    }};
}

/// A LIFO stack backed by a singly-linked chain.
///
/// Only a `top` reference is kept; push, pop, and peek are *constant*
/// time. `pop` and `peek` return [`EmptyError`] rather than a sentinel,
/// so any `T` — including `Option`s storing `None` — can be held without
/// ambiguity.
///
/// # Examples
///
/// ```
/// use linked_dsa::prelude::*;
///
/// let mut stack = LinkedStack::new();
/// stack.push(Some("hello"));
/// stack.push(None);
/// stack.push(Some("world"));
///
/// assert_eq!(stack.pop(), Ok(Some("world")));
/// assert_eq!(stack.pop(), Ok(None));
/// assert_eq!(stack.pop(), Ok(Some("hello")));
/// assert_eq!(stack.pop(), Err(EmptyError));
/// ```
pub struct LinkedStack<T> {
    /// Pointer to the top of the stack.
    top: Option<NonNull<Node<T>>>,
    /// Number of allocated nodes in the stack.
    len: usize,
    /// In order to tell the drop checker that we do own values of type T,
    /// and therefore may drop some T's when we drop.
    _marker: PhantomData<T>,
}

struct Node<T> {
    /// Pointer to the node beneath this one.
    next: Option<NonNull<Node<T>>>,
    /// The node's data.
    elem: T,
}

/// An iterator that borrows a `LinkedStack<T>` immutably, top to bottom.
#[derive(Debug)]
pub struct Iter<'a, T> {
    /// Pointer to the next node to yield.
    curr: Option<NonNull<Node<T>>>,
    /// Number of elements left to yield.
    len: usize,
    _marker: PhantomData<&'a T>,
}

impl<T> LinkedStack<T> {
    /// Creates a new, empty `LinkedStack`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let stack: LinkedStack<i32> = LinkedStack::new();
    /// assert!(stack.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            top: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Pushes an element onto the top of the stack.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut stack = LinkedStack::new();
    /// stack.push(1);
    /// stack.push(2);
    ///
    /// assert_eq!(stack.len(), 2);
    /// assert_eq!(stack.peek(), Ok(&2));
    /// ```
    pub fn push(&mut self, elem: T) {
        unsafe {
            let new_node = NonNull::new_unchecked(Box::into_raw(Box::new(Node {
                next: self.top,
                elem,
            })));

            self.top = Some(new_node);
            self.len += 1;
        }
    }

    /// Removes the top element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the stack is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut stack = stack![1, 2];
    ///
    /// assert_eq!(stack.pop(), Ok(2));
    /// assert_eq!(stack.pop(), Ok(1));
    /// assert_eq!(stack.pop(), Err(EmptyError));
    /// ```
    pub fn pop(&mut self) -> Result<T, EmptyError> {
        let top = self.top.ok_or(EmptyError)?;

        unsafe {
            // Box the node being removed so the destructor for T can be
            // invoked when returning.
            let boxed_node = Box::from_raw(top.as_ptr());

            self.top = boxed_node.next;
            self.len -= 1;

            Ok(boxed_node.elem)
            // `boxed_node` handles it's deallocation...
        }
    }

    /// Returns a reference to the top element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the stack is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let stack = stack![1, 2];
    ///
    /// assert_eq!(stack.peek(), Ok(&2));
    /// assert_eq!(stack.len(), 2);
    /// ```
    pub fn peek(&self) -> Result<&T, EmptyError> {
        match self.top {
            Some(top) => unsafe { Ok(&(*top.as_ptr()).elem) },
            None => Err(EmptyError),
        }
    }

    /// Removes every element from the stack.
    ///
    /// The chain is released node by node; a recursive teardown of a long
    /// chain would overflow the call stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut stack = stack![1, 2, 3];
    /// stack.clear();
    ///
    /// assert!(stack.is_empty());
    /// assert_eq!(stack.len(), 0);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop().is_ok() {}
    }

    /// Returns an immutable iterator over the stack, top to bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let stack = stack![1, 2, 3];
    /// assert!(stack.iter().eq([&3, &2, &1]));
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            curr: self.top,
            len: self.len,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the stack.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack contains no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T: PartialEq> LinkedStack<T> {
    /// Returns `true` if some element in the stack equals `elem`.
    ///
    /// Equality follows `T`'s `PartialEq`; for `Option` payloads two
    /// `None`s compare equal, matching absent-value semantics.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time, scanning from the top.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let stack = stack![Some(1), None];
    ///
    /// assert!(stack.contains(&None));
    /// assert!(stack.contains(&Some(1)));
    /// assert!(!stack.contains(&Some(2)));
    /// ```
    pub fn contains(&self, elem: &T) -> bool {
        self.iter().any(|e| e == elem)
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a LinkedStack<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len > 0 {
            self.curr.map(|curr| unsafe {
                self.len -= 1;
                self.curr = (*curr.as_ptr()).next;
                &(*curr.as_ptr()).elem
            })
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

unsafe impl<T: Send> Send for LinkedStack<T> {}
unsafe impl<T: Sync> Sync for LinkedStack<T> {}

unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}
unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}
