//! Planar: 2D geometry values laid out for in-place use by a native engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Planar sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use planar::prelude::*;
//!
//! // Once per process, before any validity check.
//! planar::init();
//!
//! let body = Transform::from_xy_angle(1.0, 2.0, 0.0);
//! body.position().add_xy(0.5, 0.5);
//! body.rotation().set_angle(std::f32::consts::FRAC_PI_2);
//! assert_eq!(body.x(), 1.5);
//! assert!(planar::validity::is_valid_rotation(&body.rotation()));
//!
//! // Values sharing one release point.
//! let arena = ScopedArena::new();
//! let v = Vec2::new_in(&arena, 3.0, 4.0).unwrap();
//! assert_eq!(v.length(), 5.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `planar-core` | Foreign structs, layout descriptors, errors |
//! | [`arena`] | `planar-arena` | `ScopedArena`, `Block` |
//! | [`ffi`] | `planar-ffi` | Engine readiness, gateway, reference engine |
//! | [`math`] | `planar-math` | `Vec2`, `Rot`, `Transform` |
//! | [`validity`] | | Engine predicates over value types |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Foreign structs, layout descriptors and errors (`planar-core`).
pub use planar_core as types;

/// Scoped arenas and owned/borrowed blocks (`planar-arena`).
pub use planar_arena as arena;

/// Engine readiness, validity gateway and reference engine (`planar-ffi`).
pub use planar_ffi as ffi;

/// Geometry value types (`planar-math`).
pub use planar_math as math;

pub mod validity;

/// Make the reference engine ready for this process.
///
/// Idempotent. Processes that load an external engine call
/// [`ffi::init`] with their own loader instead, before anything else
/// touches the engine.
pub fn init() -> &'static ffi::Engine {
    planar_ffi::ensure_ready()
}

/// Common imports for typical Planar usage.
///
/// ```rust
/// use planar::prelude::*;
/// ```
pub mod prelude {
    // Values
    pub use planar_math::{Rot, Transform, Vec2};

    // Memory
    pub use planar_arena::{ArenaConfig, Block, ScopedArena};

    // Foreign layouts
    pub use planar_core::{ForeignLayout, RawRot, RawTransform, RawVec2};

    // Errors
    pub use planar_arena::ArenaError;
    pub use planar_core::{EngineError, LayoutError};

    // Engine
    pub use planar_ffi::{EngineLoader, StaticEngine};
}
