//! Fixed-address regions and growable region lists.
//!
//! A [`Region`] is a zeroed heap allocation with a bump cursor. A
//! [`RegionList`] appends new regions when the current one is full, up to
//! a configured limit. Regions are never reset or freed individually; the
//! whole list is released when it drops.

use std::alloc::Layout;
use std::ptr::NonNull;

use smallvec::SmallVec;

use crate::error::ArenaError;
use crate::raw::{RawRegion, REGION_ALIGN};

/// A single region with bump allocation.
#[derive(Debug)]
pub struct Region {
    raw: RawRegion,
    /// Next free byte.
    cursor: usize,
}

impl Region {
    /// Allocate a zeroed region of `bytes` bytes, aligned to the region alignment.
    pub fn new(bytes: usize) -> Result<Self, ArenaError> {
        let layout =
            Layout::from_size_align(bytes, REGION_ALIGN).map_err(|_| ArenaError::InvalidConfig {
                reason: format!("region of {bytes} bytes exceeds the address space"),
            })?;
        Ok(Self {
            raw: RawRegion::zeroed(layout),
            cursor: 0,
        })
    }

    /// Bump-allocate `size` bytes aligned to `align`.
    ///
    /// Returns `None` if the region has no room left. The returned bytes
    /// are zero: regions start zeroed and bytes are never handed out twice.
    pub fn alloc(&mut self, size: usize, align: usize) -> Option<NonNull<u8>> {
        debug_assert!(align.is_power_of_two() && align <= REGION_ALIGN);
        let start = self.cursor.checked_add(align - 1)? & !(align - 1);
        let end = start.checked_add(size)?;
        if end > self.raw.len() {
            return None;
        }
        self.cursor = end;
        // `start <= len`, so the pointer stays within the allocation.
        NonNull::new(self.raw.base().as_ptr().wrapping_add(start))
    }

    /// Bytes handed out so far, including alignment padding.
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Total size in bytes.
    pub fn capacity(&self) -> usize {
        self.raw.len()
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.raw.len() - self.cursor
    }
}

/// A growable list of [`Region`]s with overflow-based bump allocation.
///
/// Requests that do not fit in the current region go entirely into a new
/// region; there is no splitting across regions.
#[derive(Debug)]
pub struct RegionList {
    regions: SmallVec<[Region; 4]>,
    region_bytes: usize,
    max_regions: u16,
}

impl RegionList {
    /// Create an empty list. The first region is allocated on first use.
    pub fn new(region_bytes: usize, max_regions: u16) -> Self {
        Self {
            regions: SmallVec::new(),
            region_bytes,
            max_regions,
        }
    }

    /// Bump-allocate `size` bytes aligned to `align`, growing if needed.
    ///
    /// Returns `Err(ArenaError::CapacityExceeded)` if the request is larger
    /// than a region or `max_regions` would be exceeded.
    pub fn alloc(&mut self, size: usize, align: usize) -> Result<NonNull<u8>, ArenaError> {
        if size > self.region_bytes {
            return Err(ArenaError::CapacityExceeded {
                requested: size,
                capacity: self.region_bytes,
            });
        }

        if let Some(ptr) = self.regions.last_mut().and_then(|r| r.alloc(size, align)) {
            return Ok(ptr);
        }

        if self.regions.len() >= self.max_regions as usize {
            return Err(ArenaError::CapacityExceeded {
                requested: size,
                capacity: self.capacity_bytes(),
            });
        }

        let mut region = Region::new(self.region_bytes)?;
        tracing::trace!(
            region = self.regions.len(),
            bytes = self.region_bytes,
            "arena growing new region"
        );
        // size <= region_bytes and the region is fresh, so this fits.
        let ptr = region.alloc(size, align).ok_or(ArenaError::CapacityExceeded {
            requested: size,
            capacity: self.region_bytes,
        })?;
        self.regions.push(region);
        Ok(ptr)
    }

    /// Number of regions allocated so far.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Bytes handed out across all regions.
    pub fn used_bytes(&self) -> usize {
        self.regions.iter().map(Region::used).sum()
    }

    /// Bytes currently reserved from the global allocator.
    pub fn reserved_bytes(&self) -> usize {
        self.regions.iter().map(Region::capacity).sum()
    }

    /// Upper bound on bytes this list can ever reserve.
    pub fn capacity_bytes(&self) -> usize {
        self.region_bytes.saturating_mul(self.max_regions as usize)
    }
}
