//! Arena configuration parameters.

use crate::error::ArenaError;
use crate::raw::REGION_ALIGN;

/// Configuration for a [`ScopedArena`](crate::ScopedArena).
///
/// Controls region sizing and the total number of regions. Validated at
/// arena construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Size of each region in bytes.
    ///
    /// Default: 4096. Must be a non-zero multiple of the region alignment.
    /// No single block may be larger than one region.
    pub region_bytes: usize,

    /// Maximum number of regions the arena may hold.
    ///
    /// Default: 64, i.e. 256 KiB at the default region size.
    pub max_regions: u16,
}

impl ArenaConfig {
    /// Default region size in bytes.
    pub const DEFAULT_REGION_BYTES: usize = 4096;

    /// Default maximum region count.
    pub const DEFAULT_MAX_REGIONS: u16 = 64;

    /// Config with default values.
    pub fn new() -> Self {
        Self {
            region_bytes: Self::DEFAULT_REGION_BYTES,
            max_regions: Self::DEFAULT_MAX_REGIONS,
        }
    }

    /// Replace the region size.
    pub fn with_region_bytes(mut self, region_bytes: usize) -> Self {
        self.region_bytes = region_bytes;
        self
    }

    /// Replace the region limit.
    pub fn with_max_regions(mut self, max_regions: u16) -> Self {
        self.max_regions = max_regions;
        self
    }

    /// Total bytes the arena can ever hand out.
    pub fn capacity_bytes(&self) -> usize {
        self.region_bytes.saturating_mul(self.max_regions as usize)
    }

    /// Check that an arena can be built from this config.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.region_bytes == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "region_bytes must be non-zero".to_string(),
            });
        }
        if self.region_bytes % REGION_ALIGN != 0 {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "region_bytes ({}) must be a multiple of {REGION_ALIGN}",
                    self.region_bytes
                ),
            });
        }
        if self.max_regions == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "max_regions must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_256k() {
        let config = ArenaConfig::new();
        assert_eq!(config.capacity_bytes(), 256 * 1024);
        config.validate().unwrap();
    }

    #[test]
    fn zero_region_rejected() {
        let config = ArenaConfig::new().with_region_bytes(0);
        assert!(matches!(
            config.validate(),
            Err(ArenaError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn unaligned_region_rejected() {
        let config = ArenaConfig::new().with_region_bytes(REGION_ALIGN + 4);
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_regions_rejected() {
        let config = ArenaConfig::new().with_max_regions(0);
        assert!(config.validate().is_err());
    }
}
