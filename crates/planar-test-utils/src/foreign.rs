//! Stand-in for structs owned by the native side.
//!
//! A [`ForeignBuffer`] holds a fixed array of foreign-layout structs that
//! Rust code only reaches through views, the way engine-owned memory
//! would be.

#![allow(unsafe_code)]

use std::cell::UnsafeCell;
use std::ptr::NonNull;

use planar_arena::Block;
use planar_core::ForeignLayout;

/// Fixed-size array of `T` reachable through aliasing views.
pub struct ForeignBuffer<T: ForeignLayout> {
    cells: Box<[UnsafeCell<T>]>,
}

impl<T: ForeignLayout> ForeignBuffer<T> {
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            cells: values.into_iter().map(UnsafeCell::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Borrowed view over element `index`. Panics if out of range.
    pub fn view(&self, index: usize) -> Block<'_, T> {
        let ptr = self.slot(index);
        // SAFETY: the element lives in `self.cells`, which stays allocated
        // for the borrow of `self`. Access is through `UnsafeCell`, so
        // writes through shared views are permitted.
        unsafe { Block::from_raw(ptr) }
    }

    /// Current value of element `index`, as the native side would read it.
    pub fn read(&self, index: usize) -> T {
        // SAFETY: in bounds and aligned; no reference to the contents exists.
        unsafe { self.slot(index).as_ptr().read() }
    }

    /// Overwrite element `index`, as the native side would.
    pub fn write(&self, index: usize, value: T) {
        // SAFETY: as in `read`.
        unsafe { self.slot(index).as_ptr().write(value) }
    }

    fn slot(&self, index: usize) -> NonNull<T> {
        // `UnsafeCell<T>` has the layout of `T`.
        NonNull::from(&self.cells[index]).cast::<T>()
    }
}
