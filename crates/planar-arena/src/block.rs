//! Owned and borrowed foreign-layout blocks.
//!
//! A [`Block`] is a typed pointer to one `T` in foreign memory plus a record
//! of who keeps that memory alive:
//!
//! - **Owned, auto scope:** the block owns a dedicated region, released when
//!   the block drops. This is the default arena for values created without
//!   an explicit [`ScopedArena`].
//! - **Owned, arena scope:** carved from a caller-supplied arena and
//!   released when the arena drops.
//! - **Borrowed:** aliases memory owned elsewhere, either a field of another
//!   block ([`Block::field`]) or memory handed over by the native side
//!   ([`Block::from_raw`]).
//!
//! Access is by value only: [`Block::get`] copies out, [`Block::set`] copies
//! in. No `&T` or `&mut T` into block memory is ever created, which is what
//! makes any number of simultaneously live views over the same bytes sound.
//! Writes through one view are visible through every other view immediately.

#![allow(unsafe_code)]

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use bytemuck::Zeroable;
use planar_core::{Field, ForeignLayout};

use crate::arena::ScopedArena;
use crate::raw::RawRegion;

/// Which scope keeps an owned block's memory alive.
enum Scope<'a> {
    /// Dedicated region owned by the block itself.
    Auto(RawRegion),
    /// Shared caller arena; released when the arena drops.
    Arena(PhantomData<&'a ScopedArena>),
}

/// Whether a block owns its memory.
enum Storage<'a> {
    Owned(Scope<'a>),
    /// No lifetime tracking beyond `'a`, which the creator chose.
    Borrowed(PhantomData<&'a ()>),
}

/// One `T` in foreign-layout memory, owned or borrowed.
///
/// Blocks are neither `Send` nor `Sync`: values built on them follow
/// single-threaded value semantics.
pub struct Block<'a, T: ForeignLayout> {
    ptr: NonNull<T>,
    storage: Storage<'a>,
}

impl<T: ForeignLayout> Block<'static, T> {
    /// Owned block in its own auto-scoped region, initialized to `value`.
    pub fn auto(value: T) -> Self {
        let region = RawRegion::zeroed(std::alloc::Layout::new::<T>());
        let ptr = region.base().cast::<T>();
        let mut block = Self {
            ptr,
            storage: Storage::Owned(Scope::Auto(region)),
        };
        block.set(value);
        block
    }

    /// Owned, zero-filled block in its own auto-scoped region.
    pub fn auto_zeroed() -> Self {
        Self::auto(T::zeroed())
    }
}

impl<'a, T: ForeignLayout> Block<'a, T> {
    /// Block carved from `arena` at `ptr`.
    pub(crate) fn in_arena(ptr: NonNull<T>, _arena: &'a ScopedArena) -> Self {
        Self {
            ptr,
            storage: Storage::Owned(Scope::Arena(PhantomData)),
        }
    }

    /// View over a `T` owned elsewhere. Nothing is allocated.
    ///
    /// # Safety
    ///
    /// For all of `'a`, `ptr` must be aligned for `T` and point to
    /// `size_of::<T>()` bytes that stay allocated and are not accessed
    /// through a `&T` or `&mut T` elsewhere while this block is used.
    /// Keeping the owner alive is the caller's responsibility; the block
    /// cannot detect a dangling pointer.
    pub unsafe fn from_raw(ptr: NonNull<T>) -> Self {
        Self {
            ptr,
            storage: Storage::Borrowed(PhantomData),
        }
    }

    /// Copy the current value out.
    #[inline]
    pub fn get(&self) -> T {
        // SAFETY: `ptr` is aligned and live for `'a` (owned blocks by
        // construction, borrowed blocks per the `from_raw`/`field`
        // contract). `T: Pod`, so any bytes there are a valid `T`.
        unsafe { self.ptr.as_ptr().read() }
    }

    /// Overwrite the value in place.
    #[inline]
    pub fn set(&mut self, value: T) {
        // SAFETY: as in `get`; no reference into the block exists, so the
        // write cannot invalidate one.
        unsafe { self.ptr.as_ptr().write(value) }
    }

    /// Read, modify, and write back the value, returning the closure's result.
    #[inline]
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut value = self.get();
        let result = f(&mut value);
        self.set(value);
        result
    }

    /// Borrowed view over the `U` embedded at `field` inside this block.
    ///
    /// The view aliases this block's memory and cannot outlive the borrow
    /// of `self`.
    pub fn field<U: ForeignLayout>(&self, field: Field<T, U>) -> Block<'_, U> {
        // SAFETY: `Field::new` guarantees `offset + size_of::<U>() <=
        // size_of::<T>()`, `offset` is a multiple of `align_of::<U>()` and
        // `align_of::<U>() <= align_of::<T>()`, so the projected pointer is
        // in bounds, non-null and aligned. It lives as long as `self`.
        let ptr = unsafe { self.ptr.cast::<u8>().add(field.offset()).cast::<U>() };
        Block {
            ptr,
            storage: Storage::Borrowed(PhantomData),
        }
    }

    /// Raw pointer to the block, for handing to the native side.
    ///
    /// Writes through it are visible to every view of this block.
    #[inline]
    pub fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// The block's address.
    #[inline]
    pub fn as_non_null(&self) -> NonNull<T> {
        self.ptr
    }

    /// Whether this block owns its memory.
    pub fn is_owned(&self) -> bool {
        matches!(self.storage, Storage::Owned(_))
    }

    /// Whether this block aliases memory owned elsewhere.
    pub fn is_view(&self) -> bool {
        matches!(self.storage, Storage::Borrowed(_))
    }

    /// Whether this block lives in its own auto-scoped region.
    pub fn is_auto(&self) -> bool {
        matches!(self.storage, Storage::Owned(Scope::Auto(_)))
    }

    /// Whether `self` and `other` cover the same address.
    pub fn aliases<U: ForeignLayout>(&self, other: &Block<'_, U>) -> bool {
        let a = self.ptr.as_ptr() as usize;
        let b = other.ptr.as_ptr() as usize;
        a < b + std::mem::size_of::<U>() && b < a + std::mem::size_of::<T>()
    }
}

impl<T: ForeignLayout + fmt::Debug> fmt::Debug for Block<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.storage {
            Storage::Owned(Scope::Auto(_)) => "auto",
            Storage::Owned(Scope::Arena(_)) => "arena",
            Storage::Borrowed(_) => "view",
        };
        f.debug_struct("Block")
            .field("layout", &T::NAME)
            .field("kind", &kind)
            .field("ptr", &self.ptr)
            .field("value", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar_core::{RawRot, RawTransform, RawVec2};

    #[test]
    fn auto_block_round_trip() {
        let mut block = Block::auto(RawVec2::new(1.0, 2.0));
        assert!(block.is_owned());
        assert!(block.is_auto());
        assert_eq!(block.get(), RawVec2::new(1.0, 2.0));
        block.set(RawVec2::new(3.0, 4.0));
        assert_eq!(block.get().y, 4.0);
    }

    #[test]
    fn auto_zeroed_is_zero() {
        let block = Block::<RawTransform>::auto_zeroed();
        let floats: [f32; 4] = bytemuck::cast(block.get());
        assert_eq!(floats, [0.0; 4]);
    }

    #[test]
    fn update_returns_closure_result() {
        let mut block = Block::auto(RawVec2::new(2.0, 3.0));
        let len_sq = block.update(|v| {
            v.x *= 2.0;
            v.x * v.x + v.y * v.y
        });
        assert_eq!(len_sq, 25.0);
        assert_eq!(block.get().x, 4.0);
    }

    #[test]
    fn field_views_alias_parent() {
        let block = Block::auto(RawTransform::IDENTITY);
        let mut p = block.field(RawTransform::POSITION);
        let mut q = block.field(RawTransform::ROTATION);
        assert!(p.is_view());
        assert!(p.aliases(&block));
        assert!(!p.aliases(&q));

        p.set(RawVec2::new(5.0, 6.0));
        q.set(RawRot::new(0.0, 1.0));
        assert_eq!(block.get().p, RawVec2::new(5.0, 6.0));
        assert_eq!(block.get().q, RawRot::new(0.0, 1.0));
    }

    #[test]
    fn two_views_see_each_other() {
        let block = Block::auto(RawTransform::IDENTITY);
        let mut first = block.field(RawTransform::POSITION);
        let second = block.field(RawTransform::POSITION);
        first.set(RawVec2::new(7.0, 8.0));
        assert_eq!(second.get(), RawVec2::new(7.0, 8.0));
    }

    #[test]
    fn raw_view_over_foreign_memory() {
        let mut foreign = Box::new(RawVec2::new(1.0, 1.0));
        let ptr = NonNull::from(foreign.as_mut());
        {
            // SAFETY: `foreign` outlives the view and is not otherwise
            // accessed while the view is used.
            let mut view = unsafe { Block::from_raw(ptr) };
            assert!(view.is_view());
            assert!(!view.is_owned());
            view.update(|v| v.y = 9.0);
        }
        assert_eq!(foreign.y, 9.0);
    }

    #[test]
    fn pointer_writes_are_visible() {
        let block = Block::auto(RawRot::IDENTITY);
        // SAFETY: the block is live and aligned; this stands in for the
        // native side writing through the pointer it was handed.
        unsafe { block.as_ptr().write(RawRot::new(0.6, 0.8)) };
        assert_eq!(block.get(), RawRot::new(0.6, 0.8));
    }

    #[test]
    fn debug_reports_kind() {
        let block = Block::auto(RawVec2::ZERO);
        let view = block.field(planar_core::Field::<RawVec2, RawVec2>::new(0));
        assert!(format!("{block:?}").contains("auto"));
        assert!(format!("{view:?}").contains("view"));
    }
}
