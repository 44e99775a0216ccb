use crate::Ptr;
use crate::arena::Arena;
use crate::linked_list::LinkedList;

#[derive(Debug, Clone, Copy)]
/// An iterator over the values of a `LinkedList`.
///
/// This struct is created by the [`iter`] method on [`LinkedList`]. See its
/// documentation for more.
///
/// [`iter`]: LinkedList::iter
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
/// for value in list.iter() {
///     println!("{value}");
/// }
/// ```
pub struct Iter<'a, T> {
    pub(crate) current: Ptr,
    pub(crate) nodes: &'a Arena<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.current.optional()?;
        let slot = self.nodes.slot(ptr);
        self.current = slot.next();
        Some(slot.value())
    }
}

#[derive(Debug)]
/// An owning iterator over the values of a `LinkedList`.
///
/// This struct is created by the [`into_iter`] method on [`LinkedList`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
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
/// for value in list {
///     println!("{value}");
/// }
/// ```
pub struct IntoIter<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let head = self.list.head.optional()?;
        self.list.head = self.list.nodes.slot(head).next();
        Some(self.list.nodes.free(head).into_value())
    }
}
