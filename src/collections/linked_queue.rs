//! A FIFO queue backed by a singly-linked chain of owned nodes.

use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::error::EmptyError;

/// Creates a `LinkedQueue` containing the arguments, enqueued in order.
///
/// # Examples
///
/// ```
/// use linked_dsa::prelude::*;
///
/// let mut queue = queue![1, 2, 3];
/// assert_eq!(queue.dequeue(), Ok(1));
/// ```
#[macro_export]
macro_rules! queue {
    () => {
        $crate::collections::linked_queue::LinkedQueue::new()
    };
    ($($elem:expr),+ $(,)?) => {{
        let mut queue = $crate::collections::linked_queue::LinkedQueue::new();
        $(queue.enqueue($elem);)+
        queue
    }};
}

/// A FIFO queue backed by a singly-linked chain.
///
/// Elements enter at the rear and leave at the front, both in *constant*
/// time. When the last element is dequeued the rear reference is reset
/// along with the front, so a stale rear can never be observed by a later
/// enqueue.
///
/// # Examples
///
/// ```
/// use linked_dsa::prelude::*;
///
/// let mut queue = LinkedQueue::new();
/// queue.enqueue("a");
/// queue.enqueue("b");
///
/// assert_eq!(queue.dequeue(), Ok("a"));
/// assert_eq!(queue.dequeue(), Ok("b"));
/// assert_eq!(queue.dequeue(), Err(EmptyError));
/// ```
pub struct LinkedQueue<T> {
    /// Pointer to the front of the queue.
    front: Option<NonNull<Node<T>>>,
    /// Pointer to the rear of the queue.
    rear: Option<NonNull<Node<T>>>,
    /// Number of allocated nodes in the queue.
    len: usize,
    /// In order to tell the drop checker that we do own values of type T,
    /// and therefore may drop some T's when we drop.
    _marker: PhantomData<T>,
}

struct Node<T> {
    /// Pointer to the next node toward the rear.
    next: Option<NonNull<Node<T>>>,
    /// The node's data.
    elem: T,
}

/// An iterator that borrows a `LinkedQueue<T>` immutably, front to rear.
#[derive(Debug)]
pub struct Iter<'a, T> {
    /// Pointer to the next node to yield.
    curr: Option<NonNull<Node<T>>>,
    /// Number of elements left to yield.
    len: usize,
    _marker: PhantomData<&'a T>,
}

impl<T> LinkedQueue<T> {
    /// Creates a new, empty `LinkedQueue`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let queue: LinkedQueue<i32> = LinkedQueue::new();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            front: None,
            rear: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Appends an element at the rear of the queue.
    ///
    /// An enqueue into an empty queue makes the new node both the front
    /// and the rear.
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
    /// let mut queue = LinkedQueue::new();
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    ///
    /// assert_eq!(queue.len(), 2);
    /// assert_eq!(queue.peek(), Ok(&1));
    /// ```
    pub fn enqueue(&mut self, elem: T) {
        unsafe {
            let new_node = NonNull::new_unchecked(Box::into_raw(Box::new(Node {
                next: None,
                elem,
            })));

            if let Some(rear) = self.rear {
                (*rear.as_ptr()).next = Some(new_node);
            } else {
                self.front = Some(new_node);
            }

            self.rear = Some(new_node);
            self.len += 1;
        }
    }

    /// Removes the front element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
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
    /// let mut queue = queue![1, 2];
    ///
    /// assert_eq!(queue.dequeue(), Ok(1));
    /// assert_eq!(queue.dequeue(), Ok(2));
    /// assert_eq!(queue.dequeue(), Err(EmptyError));
    /// ```
    pub fn dequeue(&mut self) -> Result<T, EmptyError> {
        let front = self.front.ok_or(EmptyError)?;

        unsafe {
            // Box the node being removed so the destructor for T can be
            // invoked when returning.
            let boxed_node = Box::from_raw(front.as_ptr());

            self.front = boxed_node.next;

            // The queue just became empty; a dangling rear must not
            // survive into the next enqueue.
            if self.front.is_none() {
                self.rear = None;
            }

            self.len -= 1;

            Ok(boxed_node.elem)
            // `boxed_node` handles it's deallocation...
        }
    }

    /// Returns a reference to the front element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let queue = queue![1, 2];
    ///
    /// assert_eq!(queue.peek(), Ok(&1));
    /// assert_eq!(queue.len(), 2);
    /// ```
    pub fn peek(&self) -> Result<&T, EmptyError> {
        match self.front {
            Some(front) => unsafe { Ok(&(*front.as_ptr()).elem) },
            None => Err(EmptyError),
        }
    }

    /// Removes every element from the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut queue = queue![1, 2, 3];
    /// queue.clear();
    ///
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.dequeue().is_ok() {}
    }

    /// Returns an immutable iterator over the queue, front to rear.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let queue = queue![1, 2, 3];
    /// assert!(queue.iter().eq([&1, &2, &3]));
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            curr: self.front,
            len: self.len,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue contains no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T: PartialEq> LinkedQueue<T> {
    /// Returns `true` if some element in the queue equals `elem`.
    ///
    /// Equality follows `T`'s `PartialEq`; for `Option` payloads two
    /// `None`s compare equal, matching absent-value semantics.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time, scanning from the front.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let queue = queue![Some(1), None];
    ///
    /// assert!(queue.contains(&None));
    /// assert!(!queue.contains(&Some(2)));
    /// ```
    pub fn contains(&self, elem: &T) -> bool {
        self.iter().any(|e| e == elem)
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
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

unsafe impl<T: Send> Send for LinkedQueue<T> {}
unsafe impl<T: Sync> Sync for LinkedQueue<T> {}

unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}
unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::VecDeque;

    #[test]
    fn test_basic_fifo() {
        let mut queue = LinkedQueue::new();

        assert_eq!(queue.dequeue(), Err(EmptyError));
        assert_eq!(queue.peek(), Err(EmptyError));

        queue.enqueue(10);
        queue.enqueue(20);
        queue.enqueue(30);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Ok(&10));
        assert_eq!(queue.dequeue(), Ok(10));
        assert_eq!(queue.dequeue(), Ok(20));
        assert_eq!(queue.dequeue(), Ok(30));
        assert_eq!(queue.dequeue(), Err(EmptyError));
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_rear_reset_after_drain() {
        // Scenario: dequeue the only element, observe the empty state,
        // then confirm a later enqueue lands as both front and rear.
        let mut queue = LinkedQueue::new();
        queue.enqueue("a");
        queue.enqueue("b");

        assert_eq!(queue.dequeue(), Ok("a"));
        assert_eq!(queue.dequeue(), Ok("b"));
        assert_eq!(queue.peek(), Err(EmptyError));
        assert!(queue.is_empty());

        queue.enqueue("c");
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.peek(), Ok(&"c"));
        // A stale rear would have chained "d" behind the freed "b" node.
        queue.enqueue("d");
        assert!(queue.iter().eq([&"c", &"d"]));
    }

    #[test]
    fn test_contains() {
        let queue = queue![Some(1), None, Some(3)];

        assert!(queue.contains(&Some(1)));
        assert!(queue.contains(&None));
        assert!(!queue.contains(&Some(2)));
    }

    #[test]
    fn test_clear() {
        let mut queue = queue![1, 2, 3];

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), Err(EmptyError));

        queue.enqueue(4);
        assert_eq!(queue.peek(), Ok(&4));
    }

    #[test]
    fn test_iter_front_to_rear() {
        let queue = queue![1, 2, 3];

        assert!(queue.iter().eq([&1, &2, &3]));
        assert_eq!(queue.iter().count(), queue.len());
    }

    #[test]
    fn test_peek_idempotent() {
        let queue = queue![7];
        for _ in 0..3 {
            assert_eq!(queue.peek(), Ok(&7));
            assert_eq!(queue.len(), 1);
            assert!(!queue.is_empty());
        }
    }

    #[test]
    fn test_random_ops_match_vecdeque() {
        use rand::Rng;

        let mut rng = rand::rng();
        let mut queue: LinkedQueue<u32> = LinkedQueue::new();
        let mut model: VecDeque<u32> = VecDeque::new();

        for _ in 0..1_000 {
            if rng.random_bool(0.5) {
                let v = rng.random();
                queue.enqueue(v);
                model.push_back(v);
            } else {
                assert_eq!(queue.dequeue().ok(), model.pop_front());
            }
            assert_eq!(queue.len(), model.len());
            assert!(queue.iter().eq(model.iter()));
        }
    }
}
