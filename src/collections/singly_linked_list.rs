//! A [singly-linked list] with owned nodes.
//!
//! [singly-linked list]: https://en.wikipedia.org/wiki/Linked_list

use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

/// Creates a `SinglyLinked` containing the arguments.
///
/// # Examples
///
/// ```
/// use linked_dsa::prelude::*;
///
/// let list = singly![1, 2, 3];
/// assert_eq!(list.len(), 3);
/// assert!(list.iter().eq([&1, &2, &3]));
/// ```
#[macro_export]
macro_rules! singly {
    () => {
        $crate::collections::singly_linked_list::SinglyLinked::new()
    };
    ($($elem:expr),+ $(,)?) => {{
        let mut list = $crate::collections::singly_linked_list::SinglyLinked::new();
        $(list.push_back($elem);)+
        list
    }};
}

/// A [singly-linked list] with owned nodes.
///
/// Elements can be appended or prepended in *constant* time and inserted
/// at an arbitrary index. The list exposes no removal operations; nodes
/// live until the list itself is dropped.
///
/// [singly-linked list]: https://en.wikipedia.org/wiki/Linked_list
pub struct SinglyLinked<T> {
    /// Pointer to the head of the list.
    head: Option<NonNull<Node<T>>>,
    /// Pointer to the tail of the list.
    tail: Option<NonNull<Node<T>>>,
    /// Number of allocated nodes in the list.
    len: usize,
    /// In order to tell the drop checker that we do own values of type `T`,
    /// and therefore may drop some `T`'s when we drop.
    _marker: PhantomData<T>,
}

struct Node<T> {
    /// Pointer to the next node in sequence.
    next: Option<NonNull<Node<T>>>,
    /// The node's data.
    elem: T,
}

/// An iterator that borrows a `SinglyLinked<T>` immutably.
///
/// One call to [`SinglyLinked::iter`] produces one forward pass over the
/// list; request a fresh iterator to traverse again.
#[derive(Debug)]
pub struct Iter<'a, T> {
    /// Pointer to the next node to yield.
    head: Option<NonNull<Node<T>>>,
    /// Number of elements left to yield.
    len: usize,
    _marker: PhantomData<&'a T>,
}

impl<T> SinglyLinked<T> {
    /// Creates a new, empty `SinglyLinked`.
    ///
    /// The list will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let list: SinglyLinked<i32> = SinglyLinked::new();
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
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The list maintains a reference to the `head`, or
    /// first node, making it a *constant* time operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let list = singly![4, 3];
    /// assert_eq!(list.front(), Some(&4));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        unsafe { self.head.map(|head| &(*head.as_ptr()).elem) }
    }

    /// Returns an immutable reference to the last element of the list, or
    /// [`None`] if it is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The list maintains a reference to the `tail`, or
    /// last node, making it a *constant* time operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let list = singly![4, 3];
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        unsafe { self.tail.map(|tail| &(*tail.as_ptr()).elem) }
    }

    /// Prepends an element to the front of the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. A singly linked list can prepend nodes in
    /// *constant* time since only pointers are manipulated, regardless of
    /// the number of nodes within the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list: SinglyLinked<i32> = SinglyLinked::new();
    /// list.push_front(3);
    /// list.push_front(4);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&4));
    /// ```
    pub fn push_front(&mut self, elem: T) {
        unsafe {
            let new_node = NonNull::new_unchecked(Box::into_raw(Box::new(Node {
                next: self.head,
                elem,
            })));

            if self.head.is_none() {
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
    /// Takes *O*(1) time. The list maintains a reference to the `tail`, or
    /// last node, making it a *constant* time operation. If no `tail`
    /// reference was maintained, it would take *O*(*n*) time to traverse to
    /// the last node and append the new node.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list: SinglyLinked<i32> = SinglyLinked::new();
    /// list.push_back(3);
    /// list.push_back(4);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.back(), Some(&4));
    /// ```
    pub fn push_back(&mut self, elem: T) {
        unsafe {
            let new_node = NonNull::new_unchecked(Box::into_raw(Box::new(Node {
                next: None,
                elem,
            })));

            if let Some(tail) = self.tail {
                (*tail.as_ptr()).next = Some(new_node);
            } else {
                self.head = Some(new_node);
            }

            self.tail = Some(new_node);
            self.len += 1;
        }
    }

    /// Inserts an element so that it occupies index `idx`, shifting every
    /// element after it one position toward the back.
    ///
    /// Returns `false`, without mutating the list, if `idx > len`. Index
    /// `0` prepends and index `len` appends.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The list is linearly traversed, following
    /// pointers until reaching the node before the index. Insertion itself
    /// is a *constant* time operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let mut list = singly![1, 3];
    ///
    /// assert!(list.insert_at(2, 1));
    /// assert!(list.iter().eq([&1, &2, &3]));
    ///
    /// assert!(!list.insert_at(9, 7));
    /// assert_eq!(list.len(), 3);
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

        // `idx` is interior here, so both neighbors exist.
        let (prev, curr) = self.traverse(idx);
        let (Some(prev), Some(curr)) = (prev, curr) else {
            return false;
        };

        unsafe {
            let new_node = NonNull::new_unchecked(Box::into_raw(Box::new(Node {
                next: Some(curr),
                elem,
            })));

            (*prev.as_ptr()).next = Some(new_node);
        }

        self.len += 1;
        true
    }

    /// Returns an immutable iterator over the list, from front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let list = singly![1, 2, 3];
    /// assert!(list.iter().eq([&1, &2, &3]));
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head,
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

    /// Unlinks and returns the first element. Not public: this list
    /// deliberately exposes no removal; the unlink path exists for `Drop`.
    fn unlink_front(&mut self) -> Option<T> {
        self.head.map(|head| unsafe {
            // Box the node being removed so the destructor for T can be
            // invoked when returning.
            let boxed_node = Box::from_raw(head.as_ptr());

            self.head = boxed_node.next;
            if self.head.is_none() {
                self.tail = None;
            }

            self.len -= 1;

            boxed_node.elem
            // `boxed_node` handles it's deallocation...
        })
    }

    /// Traverses the list to the provided index, returning a pair of
    /// pointers `(prev, curr)`: the node before the index and the node at
    /// the index. Either may be [`None`]; `prev` is [`None`] for index 0
    /// and `curr` is [`None`] when the index is past the tail.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The list is linearly traversed, following
    /// pointers until reaching the node corresponding to the index.
    fn traverse(&self, mut idx: usize) -> (Option<NonNull<Node<T>>>, Option<NonNull<Node<T>>>) {
        let mut curr = self.head;
        // So we don't fall in the case where `prev` and `curr` alias.
        let mut prev = None;

        while idx > 0 {
            let Some(node) = curr else { break };
            prev = Some(node);
            curr = unsafe { (*node.as_ptr()).next };
            idx -= 1;
        }

        (prev, curr)
    }
}

impl<T: PartialEq> SinglyLinked<T> {
    /// Searches the list for the first element equal to `elem` and returns
    /// a reference to it, or [`None`] if no element matches.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The list is linearly traversed, following
    /// pointers until a matching element is found.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_dsa::prelude::*;
    ///
    /// let list = singly![1, 2, 3];
    ///
    /// assert_eq!(list.search(&2), Some(&2));
    /// assert_eq!(list.search(&9), None);
    /// ```
    pub fn search(&self, elem: &T) -> Option<&T> {
        self.iter().find(|&e| e == elem)
    }
}

impl<T> Drop for SinglyLinked<T> {
    fn drop(&mut self) {
        while self.unlink_front().is_some() {}
    }
}

impl<T> Default for SinglyLinked<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinked<T> {
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

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

unsafe impl<T: Send> Send for SinglyLinked<T> {}
unsafe impl<T: Sync> Sync for SinglyLinked<T> {}

unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}
unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_basic_push() {
        let mut list = SinglyLinked::new();

        // Try to break an empty list
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);

        list.push_back(10);
        assert_eq!(list.len(), 1);
        assert_eq!(list.front(), Some(&10));
        assert_eq!(list.back(), Some(&10));

        list.push_front(20);
        assert_eq!(list.len(), 2);
        assert_eq!(list.front(), Some(&20));
        assert_eq!(list.back(), Some(&10));

        list.push_back(30);
        assert_eq!(list.len(), 3);
        assert!(list.iter().eq([&20, &10, &30]));
    }

    #[test]
    fn test_push_back_order() {
        // Scenario: pushing 1, 2, 3 via push_back traverses as [1, 2, 3].
        let mut list = SinglyLinked::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        assert_eq!(list.len(), 3);
        assert!(list.iter().eq([&1, &2, &3]));
    }

    #[test]
    fn test_insert_at() {
        let mut list = singly![1, 4];

        assert!(list.insert_at(2, 1));
        assert!(list.insert_at(3, 2));
        assert!(list.iter().eq([&1, &2, &3, &4]));
        assert_eq!(list.len(), 4);

        // Boundary delegation.
        assert!(list.insert_at(0, 0));
        assert!(list.insert_at(5, 5));
        assert!(list.iter().eq([&0, &1, &2, &3, &4, &5]));
        assert_eq!(list.front(), Some(&0));
        assert_eq!(list.back(), Some(&5));
    }

    #[test]
    fn test_insert_at_out_of_range() {
        let mut list = singly![1, 2];

        assert!(!list.insert_at(9, 3));
        assert!(!list.insert_at(9, usize::MAX));
        assert_eq!(list.len(), 2);
        assert!(list.iter().eq([&1, &2]));

        let mut empty: SinglyLinked<i32> = SinglyLinked::new();
        assert!(!empty.insert_at(9, 1));
        assert!(empty.is_empty());
        assert!(empty.insert_at(9, 0));
        assert!(empty.iter().eq([&9]));
    }

    #[test]
    fn test_search() {
        let list = singly!["a", "b", "c"];

        assert_eq!(list.search(&"a"), Some(&"a"));
        assert_eq!(list.search(&"c"), Some(&"c"));
        assert_eq!(list.search(&"z"), None);

        let empty: SinglyLinked<&str> = SinglyLinked::new();
        assert_eq!(empty.search(&"a"), None);
    }

    #[test]
    fn test_iter_one_shot() {
        let list = singly![1, 2, 3];

        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);

        // A fresh traversal starts over.
        assert!(list.iter().eq([&1, &2, &3]));
    }

    #[test]
    fn test_len_matches_traversal() {
        let mut list = SinglyLinked::new();
        for i in 0..100 {
            if i % 2 == 0 {
                list.push_back(i);
            } else {
                list.push_front(i);
            }
            assert_eq!(list.len(), list.iter().count());
        }
        list.insert_at(1000, 50);
        assert_eq!(list.len(), list.iter().count());
    }

    #[test]
    fn test_query_idempotence() {
        let list = singly![7];
        for _ in 0..3 {
            assert_eq!(list.len(), 1);
            assert!(!list.is_empty());
            assert_eq!(list.front(), Some(&7));
        }
    }

    #[test]
    fn test_debug() {
        let list = singly![1, 2, 3];
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }

    #[test]
    fn test_drop_owned_values() {
        // Nodes own their payloads; dropping the list drops them.
        let list = singly![String::from("a"), String::from("b")];
        drop(list);
    }
}
