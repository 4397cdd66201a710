//! Caller-supplied arenas with a single release point.
//!
//! A [`ScopedArena`] hands out zeroed, layout-described blocks and frees
//! them all at once when it drops. It has no per-block free. Blocks
//! allocated from it borrow the arena, so the compiler keeps them from
//! outliving the release.

use std::cell::{Cell, RefCell};
use std::ptr::NonNull;

use planar_core::{ForeignLayout, LayoutDescriptor};

use crate::block::Block;
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::raw::REGION_ALIGN;
use crate::region::RegionList;

/// Lifetime-bounded allocator for foreign-layout blocks.
///
/// Single-threaded: allocation goes through interior mutability so any
/// number of live blocks can share one `&ScopedArena`.
///
/// ```
/// use planar_arena::ScopedArena;
/// use planar_core::RawVec2;
///
/// let arena = ScopedArena::new();
/// let a = arena.alloc(RawVec2::new(1.0, 2.0)).unwrap();
/// let b = arena.alloc(RawVec2::new(3.0, 4.0)).unwrap();
/// assert_eq!(a.get().x + b.get().x, 4.0);
/// assert_eq!(arena.block_count(), 2);
/// // `a`, `b` and their memory are released when `arena` drops.
/// ```
#[derive(Debug)]
pub struct ScopedArena {
    config: ArenaConfig,
    regions: RefCell<RegionList>,
    blocks: Cell<usize>,
}

impl ScopedArena {
    /// Arena with the default configuration.
    pub fn new() -> Self {
        let config = ArenaConfig::new();
        Self::build(config)
    }

    /// Arena with a custom configuration.
    pub fn with_config(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ArenaConfig) -> Self {
        let regions = RegionList::new(config.region_bytes, config.max_regions);
        Self {
            config,
            regions: RefCell::new(regions),
            blocks: Cell::new(0),
        }
    }

    /// Carve a zeroed block sized and aligned per `layout`.
    ///
    /// The block stays valid until the arena drops. Fails without side
    /// effects if the descriptor is invalid, needs more than region
    /// alignment, or the arena is out of capacity.
    pub fn allocate(&self, layout: &LayoutDescriptor) -> Result<NonNull<u8>, ArenaError> {
        layout.validate()?;
        if layout.align() > REGION_ALIGN {
            return Err(ArenaError::UnsupportedAlignment {
                align: layout.align(),
                max: REGION_ALIGN,
            });
        }
        let ptr = self
            .regions
            .borrow_mut()
            .alloc(layout.size(), layout.align())?;
        self.blocks.set(self.blocks.get() + 1);
        Ok(ptr)
    }

    /// Carve a block for `T` and initialize it with `value`.
    pub fn alloc<T: ForeignLayout>(&self, value: T) -> Result<Block<'_, T>, ArenaError> {
        let ptr = self.allocate(&T::descriptor())?.cast::<T>();
        let mut block = Block::in_arena(ptr, self);
        block.set(value);
        Ok(block)
    }

    /// The configuration this arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Number of blocks handed out.
    pub fn block_count(&self) -> usize {
        self.blocks.get()
    }

    /// Bytes handed out, including alignment padding.
    pub fn used_bytes(&self) -> usize {
        self.regions.borrow().used_bytes()
    }

    /// Bytes currently reserved from the global allocator.
    pub fn reserved_bytes(&self) -> usize {
        self.regions.borrow().reserved_bytes()
    }

    /// Upper bound on bytes this arena can reserve.
    pub fn capacity_bytes(&self) -> usize {
        self.config.capacity_bytes()
    }

    /// Number of regions allocated so far.
    pub fn region_count(&self) -> usize {
        self.regions.borrow().region_count()
    }
}

impl Default for ScopedArena {
    fn default() -> Self {
        Self::new()
    }
}
