//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use planar_core::LayoutError;

/// Errors that can occur while carving a block out of an arena.
///
/// All of them are fatal to the allocation: no partial block is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Region pool is full, or the request is larger than a region.
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// Capacity that could not satisfy the request, in bytes.
        capacity: usize,
    },
    /// The layout descriptor failed validation.
    InvalidLayout(LayoutError),
    /// The layout needs stronger alignment than regions provide.
    UnsupportedAlignment {
        /// Alignment requested by the layout.
        align: usize,
        /// Largest alignment a region guarantees.
        max: usize,
    },
    /// The arena configuration is unusable.
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, capacity {capacity} bytes"
                )
            }
            Self::InvalidLayout(e) => write!(f, "invalid layout: {e}"),
            Self::UnsupportedAlignment { align, max } => {
                write!(f, "alignment {align} exceeds region alignment {max}")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid arena config: {reason}"),
        }
    }
}

impl Error for ArenaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidLayout(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LayoutError> for ArenaError {
    fn from(e: LayoutError) -> Self {
        Self::InvalidLayout(e)
    }
}
