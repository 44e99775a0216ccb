//! Singly linked list implementation.
//!
//! This module provides the core [`LinkedList`] type and related
//! functionality. The list stores its nodes in a slot arena and identifies
//! them by [`Ptr`] handles, so restructuring operations such as
//! [`reverse`](LinkedList::reverse) relink nodes without moving them.
//!
//! # Examples
//!
//! ```
//! use strand_list::linked_list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.add_first(3);
//! list.add_first(8);
//! list.add_last(5);
//!
//! // Iteration runs head to tail
//! let values: Vec<_> = list.iter().collect();
//! assert_eq!(values, [&8, &3, &5]);
//! ```

use alloc::string::String;
use core::fmt::Display;
use core::fmt::Write as _;

use crate::Ptr;
use crate::arena::Arena;

mod iter;

pub use iter::IntoIter;
pub use iter::Iter;

/// A singly linked list with stable node handles.
///
/// Nodes are allocated from an internal arena and linked head to tail by
/// forward references only. Each insertion returns a [`Ptr`] identifying the
/// new node; handles remain valid until the node is deleted, even across
/// [`reverse`](Self::reverse).
///
/// Absence is always signalled through `Option` — no operation panics or
/// errors for an empty list or an out-of-range index.
///
/// Every traversing operation expects the chain to be acyclic. The one
/// deliberate exception is the [`create_cycle`](Self::create_cycle) test
/// fixture, after which only [`has_cycle`](Self::has_cycle),
/// [`is_empty`](Self::is_empty), and the `ptr_*` accessors remain safe to
/// call.
///
/// # Examples
///
/// ```
/// use strand_list::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.add_first(5);
/// list.add_first(3);
/// list.add_first(8);
///
/// assert_eq!(list.visit(), "8, 3, 5");
/// assert_eq!(list.length(), 3);
/// assert_eq!(list.find_max(), Some(&8));
/// ```
pub struct LinkedList<T> {
    head: Ptr,
    nodes: Arena<T>,
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> LinkedList<T> {
    /// Creates a new, empty linked list.
    ///
    /// The list does not allocate until the first value is inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// list.add_first(1);
    /// assert!(!list.is_empty());
    /// ```
    pub fn new() -> Self {
        LinkedList {
            head: Ptr::null(),
            nodes: Arena::new(),
        }
    }

    /// Creates a new linked list with room for at least `capacity` nodes
    /// before the arena reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let list: LinkedList<i32> = LinkedList::with_capacity(10);
    /// assert_eq!(list.length(), 0);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        LinkedList {
            head: Ptr::null(),
            nodes: Arena::with_capacity(capacity),
        }
    }

    /// Returns `true` if the list contains no nodes. O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert!(list.is_empty());
    /// list.add_first("a");
    /// assert!(!list.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.head.is_null()
    }

    /// Removes all nodes from the list.
    ///
    /// Previously returned handles become invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.add_first(1);
    /// list.add_first(2);
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.head = Ptr::null();
        self.nodes.clear();
    }

    /// Returns the value at the head of the list, or `None` if the list is
    /// empty. O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.get_first(), None);
    ///
    /// list.add_first(5);
    /// list.add_first(3);
    /// assert_eq!(list.get_first(), Some(&3));
    /// ```
    pub fn get_first(&self) -> Option<&T> {
        self.head
            .optional()
            .map(|ptr| self.nodes.slot(ptr).value())
    }

    /// Inserts `value` at the head of the list and returns the handle of the
    /// new head node. O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// let ptr = list.add_first(5);
    ///
    /// assert_eq!(list.get_first(), Some(&5));
    /// assert_eq!(list.ptr_get(ptr), Some(&5));
    /// assert_eq!(list.head_ptr(), Some(ptr));
    /// ```
    pub fn add_first(&mut self, value: T) -> Ptr {
        let ptr = self.nodes.alloc(value, self.head);
        self.head = ptr;
        ptr
    }

    /// Appends `value` as the new terminal node and returns its handle.
    ///
    /// Walks the full chain to find the tail, so this is O(n). On an empty
    /// list the new node becomes the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.add_last(1);
    /// list.add_last(2);
    /// list.add_last(3);
    ///
    /// assert_eq!(list.visit(), "1, 2, 3");
    /// ```
    pub fn add_last(&mut self, value: T) -> Ptr {
        let ptr = self.nodes.alloc(value, Ptr::null());
        let Some(mut current) = self.head.optional() else {
            self.head = ptr;
            return ptr;
        };
        while let Some(next) = self.nodes.slot(current).next().optional() {
            current = next;
        }
        *self.nodes.slot_mut(current).next_mut() = ptr;
        ptr
    }

    /// Returns `true` if some node's value equals `value`. O(n).
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.add_first(3);
    /// list.add_first(8);
    ///
    /// assert!(list.search(&3));
    /// assert!(!list.search(&7));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == value)
    }

    /// Returns the number of nodes reachable from the head.
    ///
    /// Counts by traversal, so this is O(n). Use
    /// [`is_empty`](Self::is_empty) for an O(1) emptiness check.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.length(), 0);
    ///
    /// list.add_first(1);
    /// list.add_first(2);
    /// assert_eq!(list.length(), 2);
    /// ```
    pub fn length(&self) -> usize {
        self.iter().count()
    }

    /// Returns the handle of the node at the given 0-based position, or
    /// `None` if `index >= length`. O(n).
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.add_last("a");
    /// let ptr = list.add_last("b");
    ///
    /// assert_eq!(list.get_node_at_index(1), Some(ptr));
    /// assert_eq!(list.get_node_at_index(2), None);
    /// ```
    pub fn get_node_at_index(&self, index: usize) -> Option<Ptr> {
        let mut current = self.head.optional()?;
        for _ in 0..index {
            current = self.nodes.slot(current).next().optional()?;
        }
        Some(current)
    }

    /// Returns the value at the given 0-based position, or `None` if
    /// `index >= length`. O(n).
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.add_last(10);
    /// list.add_last(20);
    ///
    /// assert_eq!(list.get_at_index(0), Some(&10));
    /// assert_eq!(list.get_at_index(1), Some(&20));
    /// assert_eq!(list.get_at_index(5), None);
    /// ```
    pub fn get_at_index(&self, index: usize) -> Option<&T> {
        self.get_node_at_index(index)
            .map(|ptr| self.nodes.slot(ptr).value())
    }

    /// Returns the value of the terminal node, or `None` if the list is
    /// empty. Single pass, O(n).
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.get_last(), None);
    ///
    /// list.add_first(5);
    /// list.add_first(3);
    /// assert_eq!(list.get_last(), Some(&5));
    /// ```
    pub fn get_last(&self) -> Option<&T> {
        let mut current = self.head.optional()?;
        while let Some(next) = self.nodes.slot(current).next().optional() {
            current = next;
        }
        Some(self.nodes.slot(current).value())
    }

    /// Returns the maximum value in the list, or `None` if the list is
    /// empty. Single traversal, O(n).
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.add_first(5);
    /// list.add_first(8);
    /// list.add_first(3);
    ///
    /// assert_eq!(list.find_max(), Some(&8));
    /// ```
    pub fn find_max(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.iter().max()
    }

    /// Removes the first node (in traversal order from the head) whose value
    /// equals `value`, and returns the removed value.
    ///
    /// Returns `None` without modifying the list if no node matches. Exactly
    /// one node is removed even when the value occurs multiple times. O(n).
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.add_first(5);
    /// list.add_first(3);
    /// list.add_first(8);
    ///
    /// assert_eq!(list.delete(&3), Some(3));
    /// assert_eq!(list.visit(), "8, 5");
    /// assert_eq!(list.delete(&7), None);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let head = self.head.optional()?;
        if self.nodes.slot(head).value() == value {
            self.head = self.nodes.slot(head).next();
            return Some(self.nodes.free(head).into_value());
        }

        let mut current = head;
        while let Some(next) = self.nodes.slot(current).next().optional() {
            if self.nodes.slot(next).value() == value {
                let after = self.nodes.slot(next).next();
                *self.nodes.slot_mut(current).next_mut() = after;
                return Some(self.nodes.free(next).into_value());
            }
            current = next;
        }

        None
    }

    /// Renders all values in head-to-tail order, joined by `", "`.
    ///
    /// Pure function, no mutation and no output side effect. An empty list
    /// renders as the empty string. O(n) time and space.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.visit(), "");
    ///
    /// list.add_last(1);
    /// list.add_last(2);
    /// list.add_last(3);
    /// assert_eq!(list.visit(), "1, 2, 3");
    /// ```
    pub fn visit(&self) -> String
    where
        T: Display,
    {
        let mut rendered = String::new();
        for value in self.iter() {
            if !rendered.is_empty() {
                rendered.push_str(", ");
            }
            // Writing into a String cannot fail.
            let _ = write!(rendered, "{value}");
        }
        rendered
    }

    /// Reverses the list in place.
    ///
    /// Only the forward links and the head change; the nodes themselves are
    /// reused, so existing handles keep pointing at the same values. Lists
    /// of zero or one node are left untouched. O(n) time, O(1) extra space.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// let ptr = list.add_last(8);
    /// list.add_last(5);
    ///
    /// list.reverse();
    /// assert_eq!(list.visit(), "5, 8");
    /// assert_eq!(list.ptr_get(ptr), Some(&8));
    /// ```
    pub fn reverse(&mut self) {
        let mut prev = Ptr::null();
        let mut current = self.head;
        while let Some(ptr) = current.optional() {
            let next = self.nodes.slot(ptr).next();
            *self.nodes.slot_mut(ptr).next_mut() = prev;
            prev = ptr;
            current = next;
        }
        self.head = prev;
    }

    /// Returns the value of the middle node, or `None` if the list is empty.
    ///
    /// For a list of length n the middle is the node at index n / 2
    /// (0-based, integer division) — for even lengths this is the **later**
    /// of the two middle nodes. Uses a slow/fast cursor pair, O(n) time,
    /// O(1) extra space.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.find_middle_value(), None);
    ///
    /// for value in [1, 2, 3, 4, 5] {
    ///     list.add_last(value);
    /// }
    /// assert_eq!(list.find_middle_value(), Some(&3));
    ///
    /// list.add_last(6);
    /// // Even length: the later middle, index 3 of [1..=6]
    /// assert_eq!(list.find_middle_value(), Some(&4));
    /// ```
    pub fn find_middle_value(&self) -> Option<&T> {
        let mut slow = self.head.optional()?;
        let mut fast = slow;
        // The fast cursor covers two links per slow link. When it runs off
        // the end, slow sits on the middle node.
        while let Some(step) = self.nodes.slot(fast).next().optional() {
            slow = self.nodes.slot(slow).next().optional()?;
            match self.nodes.slot(step).next().optional() {
                Some(two) => fast = two,
                // Even length: slow already moved onto the later middle.
                None => break,
            }
        }
        Some(self.nodes.slot(slow).value())
    }

    /// Returns the value of the node `n` positions before the terminal node,
    /// where `n = 0` names the terminal node itself.
    ///
    /// Returns `None` if `n >= length`. Single pass with two cursors offset
    /// by n + 1 links, O(n) time, O(1) extra space.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// for value in [1, 2, 3] {
    ///     list.add_last(value);
    /// }
    ///
    /// assert_eq!(list.find_nth_from_end(0), Some(&3));
    /// assert_eq!(list.find_nth_from_end(2), Some(&1));
    /// assert_eq!(list.find_nth_from_end(5), None);
    /// ```
    pub fn find_nth_from_end(&self, n: usize) -> Option<&T> {
        // Put the lead cursor n + 1 links ahead; if the chain is shorter
        // than that, the target does not exist.
        let mut lead = self.head;
        for _ in 0..=n {
            lead = self.nodes.slot(lead.optional()?).next();
        }

        let mut trail = self.head.optional()?;
        while let Some(ptr) = lead.optional() {
            lead = self.nodes.slot(ptr).next();
            trail = self.nodes.slot(trail).next().optional()?;
        }
        Some(self.nodes.slot(trail).value())
    }

    /// Returns `true` if following forward links from the head re-visits a
    /// node, i.e. the chain contains a cycle.
    ///
    /// Floyd's tortoise-and-hare: two cursors advance at rates one and two;
    /// they meet iff a cycle exists, and the fast cursor reaches an absent
    /// link first otherwise. O(n) time, O(1) extra space — no visited set.
    ///
    /// This is the only traversing operation that is safe to call after
    /// [`create_cycle`](Self::create_cycle).
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// for value in [1, 2, 3] {
    ///     list.add_last(value);
    /// }
    /// assert!(!list.has_cycle());
    ///
    /// list.create_cycle();
    /// assert!(list.has_cycle());
    /// ```
    pub fn has_cycle(&self) -> bool {
        let mut slow = self.head;
        let mut fast = self.head;

        loop {
            let Some(hare) = fast.optional() else {
                return false;
            };
            let Some(step) = self.nodes.slot(hare).next().optional() else {
                return false;
            };
            fast = self.nodes.slot(step).next();

            // The tortoise trails the hare, so it cannot run off the end
            // before the hare does.
            let Some(tortoise) = slow.optional() else {
                return false;
            };
            slow = self.nodes.slot(tortoise).next();

            if slow == fast {
                return true;
            }
        }
    }

    /// Relinks the terminal node's forward link back to the head,
    /// deliberately violating the acyclic invariant. Test fixture for
    /// [`has_cycle`](Self::has_cycle); no-op on an empty list.
    ///
    /// After this call the chain never reaches an absent link, so every
    /// traversing operation other than `has_cycle` would fail to terminate.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.create_cycle(); // empty: nothing happens
    /// assert!(!list.has_cycle());
    ///
    /// list.add_first(1);
    /// list.create_cycle();
    /// assert!(list.has_cycle());
    /// ```
    pub fn create_cycle(&mut self) {
        let Some(mut current) = self.head.optional() else {
            return;
        };
        while let Some(next) = self.nodes.slot(current).next().optional() {
            current = next;
        }
        *self.nodes.slot_mut(current).next_mut() = self.head;
    }

    /// Returns the handle of the head node, or `None` if the list is empty.
    /// O(1).
    pub fn head_ptr(&self) -> Option<Ptr> {
        self.head.optional()
    }

    /// Returns the value of the node identified by `ptr`, or `None` if the
    /// handle does not refer to a live node. O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// let ptr = list.add_first(42);
    /// assert_eq!(list.ptr_get(ptr), Some(&42));
    ///
    /// list.delete(&42);
    /// assert_eq!(list.ptr_get(ptr), None);
    /// ```
    pub fn ptr_get(&self, ptr: Ptr) -> Option<&T> {
        if self.nodes.is_occupied(ptr) {
            Some(&self.nodes[ptr])
        } else {
            None
        }
    }

    /// Returns a mutable reference to the value of the node identified by
    /// `ptr`, or `None` if the handle does not refer to a live node. O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// let ptr = list.add_first(1);
    ///
    /// if let Some(value) = list.ptr_get_mut(ptr) {
    ///     *value = 10;
    /// }
    /// assert_eq!(list.get_first(), Some(&10));
    /// ```
    pub fn ptr_get_mut(&mut self, ptr: Ptr) -> Option<&mut T> {
        if self.nodes.is_occupied(ptr) {
            Some(&mut self.nodes[ptr])
        } else {
            None
        }
    }

    /// Returns an iterator over the values in head-to-tail order.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.add_last(1);
    /// list.add_last(2);
    ///
    /// let values: Vec<_> = list.iter().collect();
    /// assert_eq!(values, [&1, &2]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head,
            nodes: &self.nodes,
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = LinkedList::with_capacity(iter.size_hint().0);
        let mut tail = Ptr::null();
        for value in iter {
            let ptr = list.nodes.alloc(value, Ptr::null());
            match tail.optional() {
                Some(tail) => *list.nodes.slot_mut(tail).next_mut() = ptr,
                None => list.head = ptr,
            }
            tail = ptr;
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use core::assert_eq;

    use super::*;

    #[test]
    fn test_new_and_default() {
        let list: LinkedList<i32> = LinkedList::default();
        assert!(list.is_empty());
        assert_eq!(list.length(), 0);
        assert_eq!(list.head_ptr(), None);
    }

    #[test]
    fn test_empty_list_queries() {
        let list: LinkedList<i32> = LinkedList::new();
        assert_eq!(list.get_first(), None);
        assert_eq!(list.get_last(), None);
        assert_eq!(list.length(), 0);
        assert_eq!(list.visit(), "");
        assert_eq!(list.find_max(), None);
        assert_eq!(list.find_middle_value(), None);
        assert_eq!(list.find_nth_from_end(0), None);
        assert!(!list.search(&1));
        assert!(!list.has_cycle());
    }

    #[test]
    fn test_add_first_ordering() {
        let mut list = LinkedList::new();
        list.add_first(5);
        list.add_first(3);
        list.add_first(8);

        assert_eq!(list.visit(), "8, 3, 5");
        assert_eq!(list.get_first(), Some(&8));
        assert_eq!(list.get_last(), Some(&5));
        assert_eq!(list.find_max(), Some(&8));
    }

    #[test]
    fn test_add_first_returns_head_ptr() {
        let mut list = LinkedList::new();
        let ptr1 = list.add_first(1);
        assert_eq!(list.head_ptr(), Some(ptr1));

        let ptr2 = list.add_first(2);
        assert_ne!(ptr1, ptr2);
        assert_eq!(list.head_ptr(), Some(ptr2));
        assert_eq!(list.ptr_get(ptr1), Some(&1));
        assert_eq!(list.ptr_get(ptr2), Some(&2));
    }

    #[test]
    fn test_add_last() {
        let mut list = LinkedList::new();
        let ptr1 = list.add_last(1);
        assert_eq!(list.head_ptr(), Some(ptr1));

        list.add_last(2);
        let ptr3 = list.add_last(3);

        assert_eq!(list.visit(), "1, 2, 3");
        assert_eq!(list.get_last(), Some(&3));
        assert_eq!(list.get_node_at_index(2), Some(ptr3));
    }

    #[test]
    fn test_mixed_insertion() {
        let mut list = LinkedList::new();
        list.add_last(1);
        list.add_first(2);
        list.add_last(3);
        list.add_first(4);

        assert_eq!(list.visit(), "4, 2, 1, 3");
        assert_eq!(list.length(), 4);
    }

    #[test]
    fn test_search() {
        let mut list = LinkedList::new();
        for value in [5, 3, 8] {
            list.add_first(value);
        }

        assert!(list.search(&5));
        assert!(list.search(&3));
        assert!(list.search(&8));
        assert!(!list.search(&7));
    }

    #[test]
    fn test_search_agrees_with_visit() {
        let mut list = LinkedList::new();
        for value in [4, 1, 4, 2] {
            list.add_last(value);
        }

        let rendered = list.visit();
        for value in 0..6 {
            assert_eq!(
                list.search(&value),
                rendered.split(", ").any(|s| s == value.to_string()),
            );
        }
    }

    #[test]
    fn test_length_tracks_inserts_and_deletes() {
        let mut list = LinkedList::new();
        assert_eq!(list.length(), 0);

        list.add_first(1);
        list.add_last(2);
        list.add_first(3);
        assert_eq!(list.length(), 3);

        assert_eq!(list.delete(&2), Some(2));
        assert_eq!(list.length(), 2);

        // Ineffective delete leaves the length unchanged
        assert_eq!(list.delete(&99), None);
        assert_eq!(list.length(), 2);
    }

    #[test]
    fn test_get_at_index_matches_iteration_order() {
        let mut list = LinkedList::new();
        for value in [7, 2, 9, 4] {
            list.add_last(value);
        }

        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, [7, 2, 9, 4]);

        for (index, value) in values.iter().enumerate() {
            assert_eq!(list.get_at_index(index), Some(value));
        }
        assert_eq!(list.get_at_index(values.len()), None);
        assert_eq!(list.get_at_index(usize::MAX), None);
    }

    #[test]
    fn test_get_node_at_index() {
        let mut list = LinkedList::new();
        let ptr1 = list.add_last("a");
        let ptr2 = list.add_last("b");

        assert_eq!(list.get_node_at_index(0), Some(ptr1));
        assert_eq!(list.get_node_at_index(1), Some(ptr2));
        assert_eq!(list.get_node_at_index(2), None);

        let empty: LinkedList<i32> = LinkedList::new();
        assert_eq!(empty.get_node_at_index(0), None);
    }

    #[test]
    fn test_get_last_single_node() {
        let mut list = LinkedList::new();
        list.add_first(42);
        assert_eq!(list.get_last(), Some(&42));
        assert_eq!(list.get_first(), Some(&42));
    }

    #[test]
    fn test_find_max_matches_independent_maximum() {
        // Deterministic pseudo-random values
        let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;
        let mut values = Vec::new();
        for _ in 0..50 {
            seed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            values.push((seed >> 33) as u32);
        }

        let list: LinkedList<u32> = values.iter().copied().collect();
        assert_eq!(list.find_max(), values.iter().max());
    }

    #[test]
    fn test_delete_head() {
        let mut list = LinkedList::new();
        for value in [5, 3, 8] {
            list.add_first(value);
        }

        assert_eq!(list.delete(&8), Some(8));
        assert_eq!(list.visit(), "3, 5");
        assert_eq!(list.get_first(), Some(&3));
    }

    #[test]
    fn test_delete_middle() {
        let mut list = LinkedList::new();
        for value in [5, 3, 8] {
            list.add_first(value);
        }

        assert_eq!(list.delete(&3), Some(3));
        assert_eq!(list.visit(), "8, 5");
        assert_eq!(list.length(), 2);
    }

    #[test]
    fn test_delete_tail() {
        let mut list = LinkedList::new();
        for value in [1, 2, 3] {
            list.add_last(value);
        }

        assert_eq!(list.delete(&3), Some(3));
        assert_eq!(list.visit(), "1, 2");
        assert_eq!(list.get_last(), Some(&2));
    }

    #[test]
    fn test_delete_only_first_occurrence() {
        let mut list = LinkedList::new();
        for value in [1, 2, 1, 3, 1] {
            list.add_last(value);
        }

        assert_eq!(list.delete(&1), Some(1));
        assert_eq!(list.visit(), "2, 1, 3, 1");

        assert_eq!(list.delete(&1), Some(1));
        assert_eq!(list.visit(), "2, 3, 1");
    }

    #[test]
    fn test_delete_head_with_duplicate_successor() {
        let mut list = LinkedList::new();
        for value in [7, 7, 4] {
            list.add_last(value);
        }

        // Only the head occurrence goes
        assert_eq!(list.delete(&7), Some(7));
        assert_eq!(list.visit(), "7, 4");
    }

    #[test]
    fn test_delete_on_empty_and_missing() {
        let mut list: LinkedList<i32> = LinkedList::new();
        assert_eq!(list.delete(&1), None);

        list.add_first(2);
        assert_eq!(list.delete(&1), None);
        assert_eq!(list.visit(), "2");
    }

    #[test]
    fn test_delete_to_empty() {
        let mut list = LinkedList::new();
        list.add_first(1);
        assert_eq!(list.delete(&1), Some(1));
        assert!(list.is_empty());
        assert_eq!(list.get_first(), None);
    }

    #[test]
    fn test_deleted_slot_is_reused() {
        let mut list = LinkedList::new();
        let ptr1 = list.add_first(1);
        list.add_first(2);

        list.delete(&1);
        assert_eq!(list.ptr_get(ptr1), None);

        // Handles are non-generational: the freed slot comes back
        let ptr3 = list.add_last(3);
        assert_eq!(ptr3, ptr1);
        assert_eq!(list.visit(), "2, 3");
    }

    #[test]
    fn test_visit_single_value_has_no_separator() {
        let mut list = LinkedList::new();
        list.add_first(42);
        assert_eq!(list.visit(), "42");
    }

    #[test]
    fn test_reverse() {
        let mut list = LinkedList::new();
        list.add_first(5);
        list.add_first(8);

        list.reverse();
        assert_eq!(list.visit(), "5, 8");
        assert_eq!(list.get_first(), Some(&5));
        assert_eq!(list.get_last(), Some(&8));
    }

    #[test]
    fn test_reverse_small_lists() {
        let mut empty: LinkedList<i32> = LinkedList::new();
        empty.reverse();
        assert!(empty.is_empty());

        let mut single = LinkedList::new();
        let ptr = single.add_first(1);
        single.reverse();
        assert_eq!(single.visit(), "1");
        assert_eq!(single.head_ptr(), Some(ptr));
    }

    #[test]
    fn test_reverse_preserves_node_identity() {
        let mut list = LinkedList::new();
        let ptrs: Vec<_> = [1, 2, 3, 4].into_iter().map(|v| list.add_last(v)).collect();

        list.reverse();

        // Same nodes, same handles, opposite traversal order
        assert_eq!(list.visit(), "4, 3, 2, 1");
        for (ptr, value) in ptrs.iter().zip([1, 2, 3, 4]) {
            assert_eq!(list.ptr_get(*ptr), Some(&value));
        }
        assert_eq!(list.head_ptr(), Some(ptrs[3]));
    }

    #[test]
    fn test_reverse_is_involution() {
        let mut list = LinkedList::new();
        let ptrs: Vec<_> = [9, 8, 7].into_iter().map(|v| list.add_last(v)).collect();

        list.reverse();
        list.reverse();

        assert_eq!(list.visit(), "9, 8, 7");
        assert_eq!(list.head_ptr(), Some(ptrs[0]));
        for (index, ptr) in ptrs.iter().enumerate() {
            assert_eq!(list.get_node_at_index(index), Some(*ptr));
        }
    }

    #[test]
    fn test_find_middle_value_odd_length() {
        let list: LinkedList<i32> = [1, 2, 3, 4, 5].into_iter().collect();
        assert_eq!(list.find_middle_value(), Some(&3));
    }

    #[test]
    fn test_find_middle_value_even_length() {
        // Even length: the later of the two middle nodes
        let list: LinkedList<i32> = [1, 2, 3, 4].into_iter().collect();
        assert_eq!(list.find_middle_value(), Some(&3));

        let list: LinkedList<i32> = [1, 2].into_iter().collect();
        assert_eq!(list.find_middle_value(), Some(&2));
    }

    #[test]
    fn test_find_middle_value_single_node() {
        let mut list = LinkedList::new();
        list.add_first(42);
        assert_eq!(list.find_middle_value(), Some(&42));
    }

    #[test]
    fn test_find_middle_value_matches_indexed_lookup() {
        let mut list = LinkedList::new();
        for length in 1..=9 {
            list.add_last(length);
            assert_eq!(
                list.find_middle_value(),
                list.get_at_index(length as usize / 2),
            );
        }
    }

    #[test]
    fn test_find_nth_from_end() {
        let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();

        assert_eq!(list.find_nth_from_end(0), Some(&3));
        assert_eq!(list.find_nth_from_end(1), Some(&2));
        assert_eq!(list.find_nth_from_end(2), Some(&1));
        assert_eq!(list.find_nth_from_end(3), None);
        assert_eq!(list.find_nth_from_end(5), None);
    }

    #[test]
    fn test_find_nth_from_end_single_node() {
        let mut list = LinkedList::new();
        list.add_first(42);
        assert_eq!(list.find_nth_from_end(0), Some(&42));
        assert_eq!(list.find_nth_from_end(1), None);
    }

    #[test]
    fn test_has_cycle_acyclic() {
        let mut list = LinkedList::new();
        for value in [1, 2, 3] {
            list.add_last(value);
        }
        assert!(!list.has_cycle());
    }

    #[test]
    fn test_create_cycle_then_has_cycle() {
        let mut list = LinkedList::new();
        for value in [1, 2, 3] {
            list.add_last(value);
        }

        list.create_cycle();
        assert!(list.has_cycle());
    }

    #[test]
    fn test_create_cycle_on_empty_is_noop() {
        let mut list: LinkedList<i32> = LinkedList::new();
        list.create_cycle();
        assert!(!list.has_cycle());
        assert!(list.is_empty());
    }

    #[test]
    fn test_create_cycle_single_node() {
        let mut list = LinkedList::new();
        list.add_first(1);
        list.create_cycle();
        assert!(list.has_cycle());
    }

    #[test]
    fn test_has_cycle_even_and_odd_lengths() {
        for length in 1..=8 {
            let mut list: LinkedList<i32> = (0..length).collect();
            assert!(!list.has_cycle());
            list.create_cycle();
            assert!(list.has_cycle());
        }
    }

    #[test]
    fn test_ptr_get_after_clear() {
        let mut list = LinkedList::new();
        let ptr = list.add_first(1);
        list.clear();
        assert_eq!(list.ptr_get(ptr), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_ptr_get_mut() {
        let mut list = LinkedList::new();
        let ptr = list.add_first(1);

        *list.ptr_get_mut(ptr).expect("node is live") = 10;
        assert_eq!(list.get_first(), Some(&10));

        list.delete(&10);
        assert_eq!(list.ptr_get_mut(ptr), None);
    }

    #[test]
    fn test_iter_and_into_iterator() {
        let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();

        let borrowed: Vec<_> = (&list).into_iter().copied().collect();
        assert_eq!(borrowed, [1, 2, 3]);

        let owned: Vec<_> = list.into_iter().collect();
        assert_eq!(owned, [1, 2, 3]);
    }

    #[test]
    fn test_from_iterator_empty() {
        let list: LinkedList<i32> = core::iter::empty().collect();
        assert!(list.is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        let mut cloned = list.clone();

        cloned.delete(&2);
        cloned.reverse();

        assert_eq!(list.visit(), "1, 2, 3");
        assert_eq!(cloned.visit(), "3, 1");
    }

    #[test]
    fn test_debug_format() {
        let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");

        let empty: LinkedList<i32> = LinkedList::new();
        assert_eq!(format!("{empty:?}"), "[]");
    }

    #[test]
    fn test_non_copy_values() {
        let mut list = LinkedList::new();
        list.add_last("alpha".to_string());
        list.add_last("beta".to_string());

        assert!(list.search(&"beta".to_string()));
        assert_eq!(list.delete(&"alpha".to_string()), Some("alpha".to_string()));
        assert_eq!(list.visit(), "beta");
    }
}
