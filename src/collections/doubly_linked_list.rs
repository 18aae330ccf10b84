//! A [doubly-linked list] with owned nodes.
//!
//! The `DoublyLinked` list allows pushing, popping, and accessing elements
//! at either end in *constant* time, and positional access bounded by the
//! nearer end.
//!
//! [doubly-linked list]: https://en.wikipedia.org/wiki/Doubly_linked_list

use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

/// Creates a `DoublyLinked` containing the arguments.
///
/// # Examples
///
/// ```
/// use linked_dsa::prelude::*;
///
/// let mut list = doubly![1, 2, 3];
/// assert_eq!(list.len(), 3);
/// assert!(list.iter().eq([&1, &2, &3]));
///
/// assert_eq!(list.pop_back(), Some(3));
/// assert_eq!(list.pop_front(), Some(1));
/// ```
#[macro_export]
macro_rules! doubly {
    () => {
        $crate::collections::doubly_linked_list::DoublyLinked::new()
    };
    ($($elem:expr),+ $(,)?) => {{
        let mut list = $crate::collections::doubly_linked_list::DoublyLinked::new();
        $(list.push_back($elem);)+
        list
    }};
}

/// A [doubly-linked list] with owned nodes.
///
/// Each node carries an owning forward link and a non-owning back link
/// used for navigation only. Positional operations walk from whichever
/// end is nearer to the requested index.
///
/// [doubly-linked list]: https://en.wikipedia.org/wiki/Doubly_linked_list
pub struct DoublyLinked<T> {
    /// Pointer to the head of the list.
    head: Option<NonNull<Node<T>>>,
    /// Pointer to the tail of the list.
    tail: Option<NonNull<Node<T>>>,
    /// Number of initialized nodes.
    len: usize,
    /// In order to tell the drop checker that we do own values of type T,
    /// and therefore may drop some T's when we drop.
    _marker: PhantomData<T>,
}

struct Node<T> {
    /// Pointer to the next node in sequence.
    next: Option<NonNull<Node<T>>>,
    /// Pointer to the previous node in sequence.
    prev: Option<NonNull<Node<T>>>,
    /// The node's data.
    elem: T,
}

/// An iterator that moves out of a `DoublyLinked<T>`.
#[derive(Debug)]
pub struct IntoIter<T> {
    list: DoublyLinked<T>,
}

/// An iterator that borrows a `DoublyLinked<T>` immutably.
///
/// Iterates front to back; reverse with [`Iterator::rev`] for the
/// back-to-front traversal.
#[derive(Debug)]
pub struct Iter<'a, T> {
    /// Pointer to the next node from the front.
    head: Option<NonNull<Node<T>>>,
    /// Pointer to the next node from the back.
    tail: Option<NonNull<Node<T>>>,
    /// Number of elements left to yield.
    len: usize,
    _marker: PhantomData<&'a T>,
}

/// An iterator that borrows a `DoublyLinked<T>` mutably.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    /// Pointer to the next node from the front.
    head: Option<NonNull<Node<T>>>,
    /// Pointer to the next node from the back.
    tail: Option<NonNull<Node<T>>>,
    /// Number of elements left to yield.
    len: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<T> DoublyLinked<T> {
    /// Constructs a new, empty `DoublyLinked<T>`.
    ///
    /// The list will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let list: DoublyLinked<i32> = DoublyLinked::new();
    /// assert!(list.is_empty());
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

    /// Returns an immutable reference to the first element of the list, or
    /// [`None`] if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let list = doubly![3, 4];
    /// assert_eq!(list.front(), Some(&3));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        unsafe { self.head.map(|head| &(*head.as_ptr()).elem) }
    }

    /// Returns a mutable reference to the first element of the list, or
    /// [`None`] if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list = doubly![3, 4];
    /// assert_eq!(list.front_mut(), Some(&mut 3));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        unsafe { self.head.map(|head| &mut (*head.as_ptr()).elem) }
    }

    /// Returns an immutable reference to the last element of the list, or
    /// [`None`] if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let list = doubly![3, 4];
    /// assert_eq!(list.back(), Some(&4));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        unsafe { self.tail.map(|tail| &(*tail.as_ptr()).elem) }
    }

    /// Returns a mutable reference to the last element of the list, or
    /// [`None`] if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list = doubly![3, 4];
    /// assert_eq!(list.back_mut(), Some(&mut 4));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        unsafe { self.tail.map(|tail| &mut (*tail.as_ptr()).elem) }
    }

    /// Prepends an element to the front of the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. Both the head link and the old head's back link
    /// are updated; no traversal occurs.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list: DoublyLinked<i32> = DoublyLinked::new();
    /// list.push_front(3);
    /// list.push_front(4);
    /// assert_eq!(list.pop_front(), Some(4));
    /// ```
    pub fn push_front(&mut self, elem: T) {
        unsafe {
            let new_node = NonNull::new_unchecked(Box::into_raw(Box::new(Node {
                next: None,
                prev: None,
                elem,
            })));

            if let Some(head) = self.head {
                // There is at least a valid `head` node.
                (*head.as_ptr()).prev = Some(new_node);
                (*new_node.as_ptr()).next = self.head;
            } else {
                self.tail = Some(new_node);
            }

            self.head = Some(new_node);
            self.len += 1;
        }
    }

    /// Appends an element to the back of the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. Both the tail link and the old tail's forward
    /// link are updated; no traversal occurs.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list: DoublyLinked<i32> = DoublyLinked::new();
    /// list.push_back(3);
    /// list.push_back(4);
    /// assert_eq!(list.pop_back(), Some(4));
    /// ```
    pub fn push_back(&mut self, elem: T) {
        unsafe {
            let new_node = NonNull::new_unchecked(Box::into_raw(Box::new(Node {
                next: None,
                prev: None,
                elem,
            })));

            if let Some(tail) = self.tail {
                // There is at least a valid `tail` node.
                (*tail.as_ptr()).next = Some(new_node);
                (*new_node.as_ptr()).prev = self.tail;
            } else {
                self.head = Some(new_node);
            }

            self.tail = Some(new_node);
            self.len += 1;
        }
    }

    /// Removes the first element from the list and returns it, or [`None`]
    /// if it is empty.
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
    /// let mut list = doubly![5, 4, 3];
    ///
    /// assert_eq!(list.pop_front(), Some(5));
    /// assert_eq!(list.pop_front(), Some(4));
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|head| unsafe {
            // Node is boxed before being removed so the destructor for T can
            // be invoked when returning.
            let boxed_node = Box::from_raw(head.as_ptr());

            let elem = boxed_node.elem;
            self.head = boxed_node.next;

            if let Some(new_head) = self.head {
                // There are at least two valid nodes.
                (*new_head.as_ptr()).prev = None;
            } else {
                self.tail = None;
            }

            self.len -= 1;

            elem
            // `boxed_node` handles it's deallocation...
        })
    }

    /// Removes the last element from the list and returns it, or [`None`]
    /// if it is empty.
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
    /// let mut list = doubly![5, 4, 3];
    ///
    /// assert_eq!(list.pop_back(), Some(3));
    /// assert_eq!(list.pop_back(), Some(4));
    /// assert_eq!(list.pop_back(), Some(5));
    /// assert_eq!(list.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|tail| unsafe {
            // Box the node being removed so the destructor for T can be
            // invoked when returning.
            let boxed_node = Box::from_raw(tail.as_ptr());

            let elem = boxed_node.elem;
            self.tail = boxed_node.prev;

            if let Some(new_tail) = self.tail {
                // There are at least two valid nodes.
                (*new_tail.as_ptr()).next = None;
            } else {
                self.head = None;
            }

            self.len -= 1;

            elem
            // `boxed_node` handles it's deallocation...
        })
    }

    /// Inserts an element so that it occupies index `idx`, shifting every
    /// element after it one position toward the back.
    ///
    /// Returns `false`, without mutating the list, if `idx > len`. Index
    /// `0` prepends and index `len` appends.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(min(`idx`, `len - idx`)) time. The walk starts from the
    /// head when the index lies in the front half and from the tail
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list = doubly![1, 2, 4, 5];
    ///
    /// assert!(list.insert_at(3, 2));
    /// assert!(list.iter().eq([&1, &2, &3, &4, &5]));
    ///
    /// assert!(!list.insert_at(9, 10));
    /// assert_eq!(list.len(), 5);
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

        // `idx` is interior here, so the node and its predecessor exist.
        let Some(curr) = self.node_at(idx) else {
            return false;
        };

        unsafe {
            let new_node = NonNull::new_unchecked(Box::into_raw(Box::new(Node {
                next: Some(curr),
                prev: (*curr.as_ptr()).prev,
                elem,
            })));

            if let Some(prev) = (*curr.as_ptr()).prev {
                (*prev.as_ptr()).next = Some(new_node);
            }
            (*curr.as_ptr()).prev = Some(new_node);
        }

        self.len += 1;
        true
    }

    /// Removes the element at index `idx` and returns it, or [`None`] if
    /// `idx >= len`.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(min(`idx`, `len - idx`)) time, like
    /// [`insert_at`](Self::insert_at). Boundary indices delegate to
    /// [`pop_front`](Self::pop_front) and [`pop_back`](Self::pop_back).
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list = doubly![1, 2, 3];
    ///
    /// assert_eq!(list.remove_at(1), Some(2));
    /// assert_eq!(list.remove_at(5), None);
    /// assert!(list.iter().eq([&1, &3]));
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

            // `idx` is interior here, so both neighbors exist.
            if let Some(prev) = boxed_node.prev {
                (*prev.as_ptr()).next = boxed_node.next;
            }
            if let Some(next) = boxed_node.next {
                (*next.as_ptr()).prev = boxed_node.prev;
            }

            self.len -= 1;

            Some(boxed_node.elem)
            // `boxed_node` handles it's deallocation...
        }
    }

    /// Clears the list, removing all nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list = doubly![3, 4, 5];
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns an immutable iterator over the list.
    ///
    /// The iterator is double-ended: `iter()` traverses front to back and
    /// `iter().rev()` back to front.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let list = doubly!["Hello", "World"];
    ///
    /// assert!(list.iter().eq([&"Hello", &"World"]));
    /// assert!(list.iter().rev().eq([&"World", &"Hello"]));
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head,
            tail: self.tail,
            len: self.len,
            _marker: PhantomData,
        }
    }

    /// Returns a mutable iterator over the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list = doubly![1, 2, 3];
    /// for elem in list.iter_mut() {
    ///     *elem *= 10;
    /// }
    /// assert!(list.iter().eq([&10, &20, &30]));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            head: self.head,
            tail: self.tail,
            len: self.len,
            _marker: PhantomData,
        }
    }

    /// Returns the number of nodes in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no nodes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Walks to the node at `idx` from whichever end is nearer, bounding
    /// the walk to min(`idx`, `len - idx`) steps. Returns [`None`] when
    /// `idx` is out of range.
    fn node_at(&self, idx: usize) -> Option<NonNull<Node<T>>> {
        if idx >= self.len {
            return None;
        }

        unsafe {
            if idx <= self.len / 2 {
                let mut curr = self.head;
                for _ in 0..idx {
                    curr = (*curr?.as_ptr()).next;
                }
                curr
            } else {
                let mut curr = self.tail;
                for _ in 0..(self.len - 1 - idx) {
                    curr = (*curr?.as_ptr()).prev;
                }
                curr
            }
        }
    }
}

impl<T> Drop for DoublyLinked<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T> Default for DoublyLinked<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinked<T> {
    fn clone(&self) -> Self {
        let mut list = Self::new();
        for elem in self {
            list.push_back(elem.clone());
        }
        list
    }
}

impl<T> Extend<T> for DoublyLinked<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push_back(elem);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinked<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for DoublyLinked<T> {}

impl<T> IntoIterator for DoublyLinked<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinked<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinked<T> {
    type IntoIter = IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len > 0 {
            self.head.map(|head| unsafe {
                self.len -= 1;
                self.head = (*head.as_ptr()).next;
                &(*head.as_ptr()).elem
            })
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len > 0 {
            self.tail.map(|tail| unsafe {
                self.len -= 1;
                self.tail = (*tail.as_ptr()).prev;
                &(*tail.as_ptr()).elem
            })
        } else {
            None
        }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len > 0 {
            self.head.map(|head| unsafe {
                self.len -= 1;
                self.head = (*head.as_ptr()).next;
                &mut (*head.as_ptr()).elem
            })
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len > 0 {
            self.tail.map(|tail| unsafe {
                self.len -= 1;
                self.tail = (*tail.as_ptr()).prev;
                &mut (*tail.as_ptr()).elem
            })
        } else {
            None
        }
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

unsafe impl<T: Send> Send for DoublyLinked<T> {}
unsafe impl<T: Sync> Sync for DoublyLinked<T> {}

unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}
unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}

unsafe impl<'a, T: Send> Send for IterMut<'a, T> {}
unsafe impl<'a, T: Sync> Sync for IterMut<'a, T> {}

#[allow(dead_code)]
fn assert_properties() {
    fn is_send<T: Send>() {}
    fn is_sync<T: Sync>() {}

    is_send::<DoublyLinked<i32>>();
    is_sync::<DoublyLinked<i32>>();

    is_send::<IntoIter<i32>>();
    is_sync::<IntoIter<i32>>();

    is_send::<Iter<'_, i32>>();
    is_sync::<Iter<'_, i32>>();

    is_send::<IterMut<'_, i32>>();
    is_sync::<IterMut<'_, i32>>();

    fn doubly_covariant<'a, T>(x: DoublyLinked<&'static T>) -> DoublyLinked<&'a T> {
        x
    }
    fn iter_covariant<'i, 'a, T>(x: Iter<'i, &'static T>) -> Iter<'i, &'a T> {
        x
    }
    fn into_iter_covariant<'a, T>(x: IntoIter<&'static T>) -> IntoIter<&'a T> {
        x
    }
}
