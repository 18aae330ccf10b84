//! A circular [doubly-linked list] with owned nodes.
//!
//! Both ends of the chain are joined: the head's back link points at the
//! tail and the tail's forward link points at the head, so every node in
//! a non-empty ring has live links in both directions.
//!
//! [doubly-linked list]: https://en.wikipedia.org/wiki/Doubly_linked_list

use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

/// A circular doubly-linked list with owned nodes.
///
/// The ring invariant — `head.prev` is the tail and `tail.next` is the
/// head — holds after every successful operation. Back links are
/// navigational only; all deallocation is driven by the list itself.
pub struct CircularDoubly<T> {
    /// Pointer to the head of the ring.
    head: Option<NonNull<Node<T>>>,
    /// Pointer to the tail of the ring.
    tail: Option<NonNull<Node<T>>>,
    /// Number of allocated nodes in the ring.
    len: usize,
    /// In order to tell the drop checker that we do own values of type T,
    /// and therefore may drop some T's when we drop.
    _marker: PhantomData<T>,
}

struct Node<T> {
    /// Pointer to the next node in the ring.
    next: Option<NonNull<Node<T>>>,
    /// Pointer to the previous node in the ring.
    prev: Option<NonNull<Node<T>>>,
    /// The node's data.
    elem: T,
}

/// An iterator that borrows a `CircularDoubly<T>` immutably.
///
/// Yields exactly `len` elements forward from the head.
#[derive(Debug)]
pub struct Iter<'a, T> {
    /// Pointer to the next node to yield.
    curr: Option<NonNull<Node<T>>>,
    /// Number of elements left to yield.
    len: usize,
    _marker: PhantomData<&'a T>,
}

impl<T> CircularDoubly<T> {
    /// Creates a new, empty `CircularDoubly`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let ring: CircularDoubly<i32> = CircularDoubly::new();
    /// assert!(ring.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns an immutable reference to the head element, or [`None`] if
    /// the ring is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        unsafe { self.head.map(|head| &(*head.as_ptr()).elem) }
    }

    /// Returns an immutable reference to the tail element, or [`None`] if
    /// the ring is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        unsafe { self.tail.map(|tail| &(*tail.as_ptr()).elem) }
    }

    /// Appends an element behind the tail, rejoining the ring on both
    /// sides.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. Four links change: the old tail's forward link,
    /// the new node's two links, and the head's back link.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut ring = CircularDoubly::new();
    /// ring.push_back(1);
    /// ring.push_back(2);
    ///
    /// assert_eq!(ring.len(), 2);
    /// assert!(ring.iter().eq([&1, &2]));
    /// ```
    pub fn push_back(&mut self, elem: T) {
        unsafe {
            let new_node = NonNull::new_unchecked(Box::into_raw(Box::new(Node {
                next: None,
                prev: None,
                elem,
            })));

            match (self.head, self.tail) {
                (Some(head), Some(tail)) => {
                    (*tail.as_ptr()).next = Some(new_node);
                    (*new_node.as_ptr()).prev = Some(tail);
                    (*new_node.as_ptr()).next = Some(head);
                    (*head.as_ptr()).prev = Some(new_node);
                }
                _ => {
                    // A single node closes the ring onto itself.
                    (*new_node.as_ptr()).next = Some(new_node);
                    (*new_node.as_ptr()).prev = Some(new_node);
                    self.head = Some(new_node);
                }
            }

            self.tail = Some(new_node);
            self.len += 1;
        }
    }

    /// Prepends an element before the head, rejoining the ring on both
    /// sides.
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
    /// let mut ring = CircularDoubly::new();
    /// ring.push_back(2);
    /// ring.push_front(1);
    ///
    /// assert_eq!(ring.front(), Some(&1));
    /// assert_eq!(ring.back(), Some(&2));
    /// ```
    pub fn push_front(&mut self, elem: T) {
        unsafe {
            let new_node = NonNull::new_unchecked(Box::into_raw(Box::new(Node {
                next: None,
                prev: None,
                elem,
            })));

            match (self.head, self.tail) {
                (Some(head), Some(tail)) => {
                    (*new_node.as_ptr()).next = Some(head);
                    (*new_node.as_ptr()).prev = Some(tail);
                    (*head.as_ptr()).prev = Some(new_node);
                    (*tail.as_ptr()).next = Some(new_node);
                }
                _ => {
                    (*new_node.as_ptr()).next = Some(new_node);
                    (*new_node.as_ptr()).prev = Some(new_node);
                    self.tail = Some(new_node);
                }
            }

            self.head = Some(new_node);
            self.len += 1;
        }
    }

    /// Inserts an element so that it occupies index `idx`, preserving both
    /// ring links.
    ///
    /// Returns `false`, without mutating the ring, if `idx > len`. Index
    /// `0` prepends and index `len` appends. Interior insertion scans
    /// forward from the head; this variant keeps no directional shortcut.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut ring = CircularDoubly::new();
    /// ring.push_back(1);
    /// ring.push_back(3);
    ///
    /// assert!(ring.insert_at(2, 1));
    /// assert!(ring.iter().eq([&1, &2, &3]));
    ///
    /// assert!(!ring.insert_at(9, 9));
    /// ```
    pub fn insert_at(&mut self, elem: T, idx: usize) -> bool {
        if idx > self.len {
            return false;
        }
        if idx == 0 {
            self.push_front(elem);
            return true;
        }
        if idx == self.len {
            self.push_back(elem);
            return true;
        }

        // Interior insert after the node at `idx - 1`.
        let Some(prev) = self.node_at(idx - 1) else {
            return false;
        };

        unsafe {
            let new_node = NonNull::new_unchecked(Box::into_raw(Box::new(Node {
                next: (*prev.as_ptr()).next,
                prev: Some(prev),
                elem,
            })));

            if let Some(next) = (*prev.as_ptr()).next {
                (*next.as_ptr()).prev = Some(new_node);
            }
            (*prev.as_ptr()).next = Some(new_node);
        }

        self.len += 1;
        true
    }

    /// Removes the head element and returns it, or [`None`] if the ring is
    /// empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The back link makes both ring ends reachable
    /// without a scan.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut ring = CircularDoubly::new();
    /// ring.push_back(1);
    /// ring.push_back(2);
    ///
    /// assert_eq!(ring.pop_front(), Some(1));
    /// assert_eq!(ring.pop_front(), Some(2));
    /// assert_eq!(ring.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|head| unsafe {
            let boxed_node = Box::from_raw(head.as_ptr());

            if self.len == 1 {
                self.head = None;
                self.tail = None;
            } else {
                self.head = boxed_node.next;
                if let (Some(new_head), Some(tail)) = (self.head, self.tail) {
                    (*new_head.as_ptr()).prev = Some(tail);
                    (*tail.as_ptr()).next = Some(new_head);
                }
            }

            self.len -= 1;

            boxed_node.elem
            // `boxed_node` handles it's deallocation...
        })
    }

    /// Removes the tail element and returns it, or [`None`] if the ring is
    /// empty.
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
    /// let mut ring = CircularDoubly::new();
    /// ring.push_back(1);
    /// ring.push_back(2);
    ///
    /// assert_eq!(ring.pop_back(), Some(2));
    /// assert_eq!(ring.pop_back(), Some(1));
    /// assert_eq!(ring.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|tail| unsafe {
            let boxed_node = Box::from_raw(tail.as_ptr());

            if self.len == 1 {
                self.head = None;
                self.tail = None;
            } else {
                self.tail = boxed_node.prev;
                if let (Some(head), Some(new_tail)) = (self.head, self.tail) {
                    (*new_tail.as_ptr()).next = Some(head);
                    (*head.as_ptr()).prev = Some(new_tail);
                }
            }

            self.len -= 1;

            boxed_node.elem
            // `boxed_node` handles it's deallocation...
        })
    }

    /// Removes the element at index `idx` and returns it, or [`None`] if
    /// `idx >= len`.
    ///
    /// Boundary indices delegate to [`pop_front`](Self::pop_front) and
    /// [`pop_back`](Self::pop_back); interior removal scans forward from
    /// the head and relinks both directions.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut ring = CircularDoubly::new();
    /// ring.push_back(1);
    /// ring.push_back(2);
    /// ring.push_back(3);
    ///
    /// assert_eq!(ring.remove_at(1), Some(2));
    /// assert_eq!(ring.remove_at(5), None);
    /// assert!(ring.iter().eq([&1, &3]));
    /// ```
    pub fn remove_at(&mut self, idx: usize) -> Option<T> {
        if idx >= self.len {
            return None;
        }
        if idx == 0 {
            return self.pop_front();
        }
        if idx == self.len - 1 {
            return self.pop_back();
        }

        let curr = self.node_at(idx)?;
        unsafe {
            let boxed_node = Box::from_raw(curr.as_ptr());

            // `idx` is interior here, so both neighbors exist and neither
            // is the removed node itself.
            if let (Some(prev), Some(next)) = (boxed_node.prev, boxed_node.next) {
                (*prev.as_ptr()).next = boxed_node.next;
                (*next.as_ptr()).prev = boxed_node.prev;
            }

            self.len -= 1;

            Some(boxed_node.elem)
            // `boxed_node` handles it's deallocation...
        }
    }

    /// Returns an immutable iterator over the ring: exactly `len` elements
    /// forward from the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut ring = CircularDoubly::new();
    /// ring.push_back(1);
    /// ring.push_back(2);
    ///
    /// assert!(ring.iter().eq([&1, &2]));
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            curr: self.head,
            len: self.len,
            _marker: PhantomData,
        }
    }

    /// Returns the number of nodes in the ring.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the ring contains no nodes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Walks `idx` forward steps from the head. Returns [`None`] when
    /// `idx` is out of range.
    fn node_at(&self, idx: usize) -> Option<NonNull<Node<T>>> {
        if idx >= self.len {
            return None;
        }

        let mut curr = self.head;
        for _ in 0..idx {
            curr = unsafe { (*curr?.as_ptr()).next };
        }
        curr
    }

    /// Checks the ring invariant in both directions: `len` forward steps
    /// from the head return to the head, `head.prev` is the tail, and
    /// `tail.next` is the head.
    #[cfg(test)]
    fn check_ring(&self) {
        match (self.head, self.tail) {
            (Some(head), Some(tail)) => unsafe {
                let mut curr = head;
                for _ in 0..self.len {
                    curr = (*curr.as_ptr()).next.unwrap();
                }
                assert_eq!(curr, head);

                assert_eq!((*head.as_ptr()).prev, Some(tail));
                assert_eq!((*tail.as_ptr()).next, Some(head));

                let mut curr = tail;
                for _ in 0..self.len {
                    curr = (*curr.as_ptr()).prev.unwrap();
                }
                assert_eq!(curr, tail);
            },
            (None, None) => assert_eq!(self.len, 0),
            _ => panic!("head and tail must be set together"),
        }
    }
}

impl<T> Drop for CircularDoubly<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T> Default for CircularDoubly<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularDoubly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a CircularDoubly<T> {
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

unsafe impl<T: Send> Send for CircularDoubly<T> {}
unsafe impl<T: Sync> Sync for CircularDoubly<T> {}

unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}
unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}

#[cfg(test)]
mod test {
    use super::*;

    fn ring_from<T: Clone>(v: &[T]) -> CircularDoubly<T> {
        let mut ring = CircularDoubly::new();
        for elem in v {
            ring.push_back(elem.clone());
        }
        ring
    }

    #[test]
    fn test_basic_push() {
        let mut ring = CircularDoubly::new();
        ring.check_ring();

        ring.push_back(2);
        ring.check_ring();
        ring.push_front(1);
        ring.check_ring();
        ring.push_back(3);
        ring.check_ring();

        assert_eq!(ring.len(), 3);
        assert!(ring.iter().eq([&1, &2, &3]));
        assert_eq!(ring.front(), Some(&1));
        assert_eq!(ring.back(), Some(&3));
    }

    #[test]
    fn test_pop_front_and_back() {
        let mut ring = ring_from(&[1, 2, 3, 4]);

        assert_eq!(ring.pop_front(), Some(1));
        ring.check_ring();
        assert_eq!(ring.pop_back(), Some(4));
        ring.check_ring();
        assert_eq!(ring.pop_front(), Some(2));
        ring.check_ring();
        assert_eq!(ring.pop_back(), Some(3));
        ring.check_ring();

        assert_eq!(ring.pop_front(), None);
        assert_eq!(ring.pop_back(), None);
        assert_eq!(ring.len(), 0);
    }

    #[test]
    fn test_round_trip() {
        let mut ring = ring_from(&[1, 2, 3]);

        ring.push_back(4);
        assert_eq!(ring.pop_back(), Some(4));
        assert_eq!(ring.len(), 3);
        assert!(ring.iter().eq([&1, &2, &3]));
        ring.check_ring();

        ring.push_front(0);
        assert_eq!(ring.pop_front(), Some(0));
        assert_eq!(ring.len(), 3);
        assert!(ring.iter().eq([&1, &2, &3]));
        ring.check_ring();
    }

    #[test]
    fn test_insert_at() {
        let mut ring = ring_from(&[1, 4]);

        assert!(ring.insert_at(2, 1));
        ring.check_ring();
        assert!(ring.insert_at(3, 2));
        ring.check_ring();
        assert!(ring.insert_at(0, 0));
        ring.check_ring();
        assert!(ring.insert_at(5, 5));
        ring.check_ring();

        assert!(ring.iter().eq([&0, &1, &2, &3, &4, &5]));

        assert!(!ring.insert_at(9, 7));
        assert_eq!(ring.len(), 6);
    }

    #[test]
    fn test_remove_at() {
        let mut ring = ring_from(&[1, 2, 3, 4, 5]);

        // Interior double relink.
        assert_eq!(ring.remove_at(2), Some(3));
        ring.check_ring();
        // Boundaries delegate to the pops.
        assert_eq!(ring.remove_at(0), Some(1));
        ring.check_ring();
        assert_eq!(ring.remove_at(2), Some(5));
        ring.check_ring();

        assert!(ring.iter().eq([&2, &4]));
        assert_eq!(ring.remove_at(2), None);
        assert_eq!(ring.remove_at(usize::MAX), None);
        assert_eq!(ring.len(), 2);
    }

    #[test]
    fn test_single_node_self_loop() {
        let mut ring = ring_from(&[42]);
        ring.check_ring();

        assert_eq!(ring.front(), ring.back());
        assert_eq!(ring.pop_back(), Some(42));
        assert!(ring.is_empty());
        ring.check_ring();
    }

    #[test]
    fn test_len_matches_traversal() {
        let mut ring = CircularDoubly::new();
        for i in 0..50 {
            if i % 2 == 0 {
                ring.push_back(i);
            } else {
                ring.push_front(i);
            }
            assert_eq!(ring.len(), ring.iter().count());
            ring.check_ring();
        }
        while ring.pop_front().is_some() {
            assert_eq!(ring.len(), ring.iter().count());
            ring.check_ring();
        }
    }

    #[test]
    fn test_query_idempotence() {
        let ring = ring_from(&[7, 8]);
        for _ in 0..3 {
            assert_eq!(ring.len(), 2);
            assert!(!ring.is_empty());
            assert_eq!(ring.front(), Some(&7));
            assert_eq!(ring.back(), Some(&8));
        }
    }
}
