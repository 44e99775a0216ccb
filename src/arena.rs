use alloc::vec::Vec;
use core::clone::Clone;
use core::ops::Index;
use core::ops::IndexMut;
use core::panic;

use crate::Ptr;

#[cold]
#[inline(never)]
fn assert_vacant() -> ! {
    panic!("Attempted to access value of vacant slot");
}

#[derive(Debug, Clone, Copy)]
enum ValueOrVacant<T> {
    Vacant,
    Value(T),
}

/// A single arena slot. The `next` field doubles as the forward link of an
/// occupied node and as the free-list link of a vacant one.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Slot<T> {
    next: Ptr,
    data: ValueOrVacant<T>,
}

impl<T> Slot<T> {
    pub(crate) fn next(&self) -> Ptr {
        self.next
    }

    pub(crate) fn next_mut(&mut self) -> &mut Ptr {
        &mut self.next
    }

    pub(crate) fn into_value(self) -> T {
        match self.data {
            ValueOrVacant::Value(value) => value,
            ValueOrVacant::Vacant => assert_vacant(),
        }
    }

    pub(crate) fn value(&self) -> &T {
        match &self.data {
            ValueOrVacant::Value(value) => value,
            ValueOrVacant::Vacant => assert_vacant(),
        }
    }

    pub(crate) fn value_mut(&mut self) -> &mut T {
        match &mut self.data {
            ValueOrVacant::Value(value) => value,
            ValueOrVacant::Vacant => assert_vacant(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Ptr,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_head: Ptr::null(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            free_head: Ptr::null(),
        }
    }

    pub(crate) fn slot(&self, ptr: Ptr) -> &Slot<T> {
        &self.slots[ptr.unchecked_get()]
    }

    pub(crate) fn slot_mut(&mut self, ptr: Ptr) -> &mut Slot<T> {
        &mut self.slots[ptr.unchecked_get()]
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = Ptr::null();
    }

    pub(crate) fn alloc(&mut self, value: T, next: Ptr) -> Ptr {
        if !self.free_head.is_null() {
            let old = core::mem::replace(
                &mut self.slots[self.free_head.unchecked_get()],
                Slot {
                    next,
                    data: ValueOrVacant::Value(value),
                },
            );
            let ptr = self.free_head;
            self.free_head = old.next;
            ptr
        } else {
            let ptr = Ptr::unchecked_from(self.slots.len());
            self.slots.push(Slot {
                next,
                data: ValueOrVacant::Value(value),
            });
            ptr
        }
    }

    pub(crate) fn is_occupied(&self, ptr: Ptr) -> bool {
        if ptr.is_null() {
            return false;
        }
        matches!(
            self.slots.get(ptr.unchecked_get()).map(|slot| &slot.data),
            Some(ValueOrVacant::Value(_))
        )
    }

    pub(crate) fn free(&mut self, ptr: Ptr) -> Slot<T> {
        assert!(self.is_occupied(ptr), "Pointer to free must be occupied");
        let result = core::mem::replace(
            &mut self.slots[ptr.unchecked_get()],
            Slot {
                next: self.free_head,
                data: ValueOrVacant::Vacant,
            },
        );
        self.free_head = ptr;

        result
    }
}

impl<T> Index<Ptr> for Arena<T> {
    type Output = T;

    fn index(&self, index: Ptr) -> &Self::Output {
        self.slots[index.unchecked_get()].value()
    }
}

impl<T> IndexMut<Ptr> for Arena<T> {
    fn index_mut(&mut self, index: Ptr) -> &mut Self::Output {
        self.slots[index.unchecked_get()].value_mut()
    }
}
