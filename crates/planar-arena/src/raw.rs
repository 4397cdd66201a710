//! Low-level heap regions backing arena and auto-scoped blocks.
//!
//! The only place in the crate that talks to the global allocator. Each
//! `unsafe` block carries a `// SAFETY:` comment.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// Alignment every region guarantees at its base address.
pub(crate) const REGION_ALIGN: usize = 16;

/// A zeroed heap allocation at a fixed address, freed on drop.
///
/// The address never changes while the region is alive, including when the
/// `RawRegion` value itself is moved, so pointers into it stay valid for as
/// long as the region is owned by someone.
pub(crate) struct RawRegion {
    ptr: NonNull<u8>,
    layout: Layout,
}

impl RawRegion {
    /// Allocate `layout`, zeroed. A zero-sized request is rounded up to one
    /// byte so the region always has a unique address.
    ///
    /// Global allocator failure is unrecoverable and routed to
    /// [`alloc::handle_alloc_error`].
    pub(crate) fn zeroed(layout: Layout) -> Self {
        let layout = if layout.size() == 0 {
            // align came from a valid Layout, and size 1 cannot overflow.
            Layout::from_size_align(1, layout.align()).unwrap_or(layout)
        } else {
            layout
        };
        debug_assert!(layout.size() > 0);
        // SAFETY: `layout` has non-zero size (ensured above).
        let raw = unsafe { alloc::alloc_zeroed(layout) };
        let ptr = match NonNull::new(raw) {
            Some(ptr) => ptr,
            None => alloc::handle_alloc_error(layout),
        };
        Self { ptr, layout }
    }

    /// Base address.
    pub(crate) fn base(&self) -> NonNull<u8> {
        self.ptr
    }

    /// Usable size in bytes.
    pub(crate) fn len(&self) -> usize {
        self.layout.size()
    }
}

impl Drop for RawRegion {
    fn drop(&mut self) {
        // SAFETY: `ptr` was returned by `alloc_zeroed` with exactly this
        // layout and has not been freed.
        unsafe { alloc::dealloc(self.ptr.as_ptr(), self.layout) }
    }
}

impl std::fmt::Debug for RawRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawRegion")
            .field("base", &self.ptr)
            .field("len", &self.layout.size())
            .finish()
    }
}
