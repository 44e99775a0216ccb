#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

mod arena;
pub mod linked_list;

extern crate alloc;

pub use linked_list::IntoIter;
pub use linked_list::Iter;
pub use linked_list::LinkedList;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
/// A handle identifying a node in a [`LinkedList`].
///
/// This is an opaque handle returned by insertion operations and by
/// [`LinkedList::get_node_at_index`]. It provides O(1) access to the node's
/// value via [`LinkedList::ptr_get`] without re-walking the chain, and it
/// stays valid across restructuring operations such as
/// [`LinkedList::reverse`], which relink nodes without moving them. It is
/// **non-generational**: once a node is deleted, its handle may be re-used
/// for a later insertion.
///
/// # Examples
///
/// ```
/// use strand_list::LinkedList;
///
/// let mut list = LinkedList::new();
/// let ptr = list.add_first(42);
///
/// // Use the handle for direct access
/// assert_eq!(list.ptr_get(ptr), Some(&42));
/// ```
pub struct Ptr(u32);

impl core::fmt::Debug for Ptr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_null() {
            write!(f, "Ptr(null)")
        } else {
            write!(f, "Ptr({})", self.0 - 1)
        }
    }
}

impl Ptr {
    // Slot indices are stored offset by one so that zero acts as the in-band
    // null link.
    pub(crate) const fn null() -> Self {
        Ptr(0)
    }

    pub(crate) const fn is_null(self) -> bool {
        self.0 == 0
    }

    pub(crate) fn optional(self) -> Option<Ptr> {
        if self.is_null() {
            None
        } else {
            Some(self)
        }
    }

    pub(crate) fn unchecked_from(index: usize) -> Self {
        debug_assert!(
            index < u32::MAX as usize,
            "Index too large to fit in Ptr: {index}"
        );
        Ptr(index as u32 + 1)
    }

    pub(crate) fn unchecked_get(self) -> usize {
        debug_assert!(!self.is_null(), "Attempted to dereference a null Ptr");
        self.0 as usize - 1
    }
}
