//! A circular [singly-linked list] with owned nodes.
//!
//! The last node links back to the first, so traversal from the head
//! returns to the head after exactly `len` steps and no forward link in a
//! non-empty list is ever null.
//!
//! [singly-linked list]: https://en.wikipedia.org/wiki/Linked_list

use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

/// A circular singly-linked list with owned nodes.
///
/// The ring invariant — the tail's forward link points at the head — is
/// re-established after every successful structural change. Forward links
/// own their successor for reclamation purposes only in the sense that
/// the list drives all deallocation; the closing link from tail to head
/// is purely navigational.
pub struct CircularSingly<T> {
    /// Pointer to the head of the ring.
    head: Option<NonNull<Node<T>>>,
    /// Pointer to the tail of the ring. `tail.next` is always the head.
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
    /// The node's data.
    elem: T,
}

/// An iterator that borrows a `CircularSingly<T>` immutably.
///
/// Yields exactly `len` elements starting at the head; the ring never
/// terminates on a null link, so the pass is bounded by count.
#[derive(Debug)]
pub struct Iter<'a, T> {
    /// Pointer to the next node to yield.
    curr: Option<NonNull<Node<T>>>,
    /// Number of elements left to yield.
    len: usize,
    _marker: PhantomData<&'a T>,
}

impl<T> CircularSingly<T> {
    /// Creates a new, empty `CircularSingly`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let ring: CircularSingly<i32> = CircularSingly::new();
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

    /// Appends an element behind the tail, closing the ring back to the
    /// head.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. Only the tail link and the closing link are
    /// touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut ring = CircularSingly::new();
    /// ring.push_back(1);
    /// ring.push_back(2);
    ///
    /// assert_eq!(ring.len(), 2);
    /// assert_eq!(ring.back(), Some(&2));
    /// ```
    pub fn push_back(&mut self, elem: T) {
        unsafe {
            let new_node = NonNull::new_unchecked(Box::into_raw(Box::new(Node {
                next: None,
                elem,
            })));

            if let Some(tail) = self.tail {
                // Splice behind the old tail and close the ring.
                (*new_node.as_ptr()).next = self.head;
                (*tail.as_ptr()).next = Some(new_node);
            } else {
                // A single node is its own successor.
                (*new_node.as_ptr()).next = Some(new_node);
                self.head = Some(new_node);
            }

            self.tail = Some(new_node);
            self.len += 1;
        }
    }

    /// Prepends an element before the head, closing the ring from the
    /// tail.
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
    /// let mut ring = CircularSingly::new();
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
                elem,
            })));

            if let Some(tail) = self.tail {
                (*new_node.as_ptr()).next = self.head;
                self.head = Some(new_node);
                // Re-point the closing link at the new head.
                (*tail.as_ptr()).next = self.head;
            } else {
                (*new_node.as_ptr()).next = Some(new_node);
                self.head = Some(new_node);
                self.tail = Some(new_node);
            }

            self.len += 1;
        }
    }

    /// Inserts an element so that it occupies index `idx`, preserving the
    /// ring.
    ///
    /// Returns `false`, without mutating the ring, if `idx > len`. Index
    /// `0` prepends and index `len` appends.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time for interior indices; the walk follows forward
    /// links from the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut ring = CircularSingly::new();
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

        // Interior insert: the node before `idx` exists and is not the
        // tail, so the closing link is untouched.
        let Some(prev) = self.node_at(idx - 1) else {
            return false;
        };

        unsafe {
            let new_node = NonNull::new_unchecked(Box::into_raw(Box::new(Node {
                next: (*prev.as_ptr()).next,
                elem,
            })));

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
    /// Takes *O*(1) time. The head advances and the closing link is
    /// re-pointed at the new head.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut ring = CircularSingly::new();
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
                if let Some(tail) = self.tail {
                    (*tail.as_ptr()).next = self.head;
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
    /// Takes *O*(*n*) time. With no back links, the node before the tail
    /// is found by scanning forward from the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut ring = CircularSingly::new();
    /// ring.push_back(1);
    /// ring.push_back(2);
    ///
    /// assert_eq!(ring.pop_back(), Some(2));
    /// assert_eq!(ring.pop_back(), Some(1));
    /// assert_eq!(ring.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;

        unsafe {
            if self.len == 1 {
                self.head = None;
                self.tail = None;
            } else {
                // Scan for the node whose successor is the old tail.
                let mut curr = self.head?;
                while (*curr.as_ptr()).next != Some(tail) {
                    curr = (*curr.as_ptr()).next?;
                }

                (*curr.as_ptr()).next = self.head;
                self.tail = Some(curr);
            }

            self.len -= 1;

            let boxed_node = Box::from_raw(tail.as_ptr());
            Some(boxed_node.elem)
        }
    }

    /// Removes the element at index `idx` and returns it, or [`None`] if
    /// `idx >= len`.
    ///
    /// Boundary indices delegate to [`pop_front`](Self::pop_front) and
    /// [`pop_back`](Self::pop_back); interior removal relinks around the
    /// node without touching the closing link.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut ring = CircularSingly::new();
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

        let prev = self.node_at(idx - 1)?;
        unsafe {
            let curr = (*prev.as_ptr()).next?;
            let boxed_node = Box::from_raw(curr.as_ptr());

            (*prev.as_ptr()).next = boxed_node.next;
            self.len -= 1;

            Some(boxed_node.elem)
            // `boxed_node` handles it's deallocation...
        }
    }

    /// Returns a reference to the first element matching `predicate`, or
    /// [`None`] if no element matches.
    ///
    /// The scan is bounded to a single pass around the ring.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut ring = CircularSingly::new();
    /// ring.push_back(1);
    /// ring.push_back(2);
    /// ring.push_back(3);
    ///
    /// assert_eq!(ring.find(|&e| e > 1), Some(&2));
    /// assert_eq!(ring.find(|&e| e > 9), None);
    /// ```
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|&e| predicate(e))
    }

    /// Returns an immutable iterator over the ring: exactly `len` elements
    /// starting at the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut ring = CircularSingly::new();
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

    /// Checks the ring invariant: `len - 1` steps from the head land on
    /// the tail, and the tail links back to the head.
    #[cfg(test)]
    fn check_ring(&self) {
        match (self.head, self.tail) {
            (Some(head), Some(tail)) => unsafe {
                let mut curr = head;
                for _ in 0..self.len - 1 {
                    curr = (*curr.as_ptr()).next.unwrap();
                }
                assert_eq!(Some(curr), self.tail);
                assert_eq!((*tail.as_ptr()).next, Some(head));
            },
            (None, None) => assert_eq!(self.len, 0),
            _ => panic!("head and tail must be set together"),
        }
    }
}

impl<T> Drop for CircularSingly<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T> Default for CircularSingly<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularSingly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a CircularSingly<T> {
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

unsafe impl<T: Send> Send for CircularSingly<T> {}
unsafe impl<T: Sync> Sync for CircularSingly<T> {}

unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}
unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}

#[cfg(test)]
mod test {
    use super::*;

    fn ring_from<T: Clone>(v: &[T]) -> CircularSingly<T> {
        let mut ring = CircularSingly::new();
        for elem in v {
            ring.push_back(elem.clone());
        }
        ring
    }

    #[test]
    fn test_basic_push() {
        let mut ring = CircularSingly::new();
        ring.check_ring();

        ring.push_back(1);
        ring.check_ring();
        assert_eq!(ring.front(), Some(&1));
        assert_eq!(ring.back(), Some(&1));

        ring.push_back(2);
        ring.check_ring();
        ring.push_front(0);
        ring.check_ring();

        assert_eq!(ring.len(), 3);
        assert!(ring.iter().eq([&0, &1, &2]));
    }

    #[test]
    fn test_ring_traversal_repeats() {
        // Scenario: three floats traverse in insertion order and the pass
        // repeats when requested again.
        let ring = ring_from(&[1.5, 10.6, 2.8]);

        assert_eq!(ring.len(), 3);
        assert!(ring.iter().eq([&1.5, &10.6, &2.8]));
        assert!(ring.iter().eq([&1.5, &10.6, &2.8]));

        let mut iter = ring.iter();
        assert_eq!(iter.len(), 3);
        iter.by_ref().for_each(drop);
        // One pass is exactly `len` steps; the iterator is exhausted.
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_pop_front() {
        let mut ring = ring_from(&[1, 2, 3]);

        assert_eq!(ring.pop_front(), Some(1));
        ring.check_ring();
        assert_eq!(ring.pop_front(), Some(2));
        ring.check_ring();
        assert_eq!(ring.pop_front(), Some(3));
        ring.check_ring();
        assert_eq!(ring.pop_front(), None);
        assert_eq!(ring.len(), 0);
    }

    #[test]
    fn test_pop_back() {
        let mut ring = ring_from(&[1, 2, 3]);

        assert_eq!(ring.pop_back(), Some(3));
        ring.check_ring();
        assert_eq!(ring.pop_back(), Some(2));
        ring.check_ring();
        assert_eq!(ring.pop_back(), Some(1));
        ring.check_ring();
        assert_eq!(ring.pop_back(), None);
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
        assert_eq!(ring.back(), Some(&5));
    }

    #[test]
    fn test_insert_at_out_of_range() {
        let mut ring = ring_from(&[1, 2]);

        assert!(!ring.insert_at(9, 3));
        assert_eq!(ring.len(), 2);
        ring.check_ring();
        assert!(ring.iter().eq([&1, &2]));
    }

    #[test]
    fn test_remove_at() {
        let mut ring = ring_from(&[1, 2, 3, 4, 5]);

        // Interior.
        assert_eq!(ring.remove_at(2), Some(3));
        ring.check_ring();
        // Boundaries delegate to the pops.
        assert_eq!(ring.remove_at(0), Some(1));
        ring.check_ring();
        assert_eq!(ring.remove_at(2), Some(5));
        ring.check_ring();

        assert!(ring.iter().eq([&2, &4]));
        assert_eq!(ring.remove_at(2), None);
        assert_eq!(ring.len(), 2);
    }

    #[test]
    fn test_find() {
        let ring = ring_from(&["a", "bb", "ccc"]);

        assert_eq!(ring.find(|e| e.len() == 2), Some(&"bb"));
        assert_eq!(ring.find(|e| e.len() == 9), None);

        let empty: CircularSingly<&str> = CircularSingly::new();
        assert_eq!(empty.find(|_| true), None);
    }

    #[test]
    fn test_len_matches_traversal() {
        let mut ring = CircularSingly::new();
        for i in 0..50 {
            ring.push_back(i);
            assert_eq!(ring.len(), ring.iter().count());
            ring.check_ring();
        }
        while ring.pop_back().is_some() {
            assert_eq!(ring.len(), ring.iter().count());
            ring.check_ring();
        }
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
}
