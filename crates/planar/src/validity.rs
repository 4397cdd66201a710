//! Engine validity predicates over value types.
//!
//! Thin wrappers around the gateway in `planar-ffi`. The engine must be
//! ready; see [`crate::init`].

use planar_math::{Rot, Vec2};

/// Whether the engine accepts `value`: not NaN, not infinite.
pub fn is_valid_float(value: f32) -> bool {
    planar_ffi::is_valid_float(value)
}

/// Whether the engine accepts `v`: both components finite.
///
/// Agrees with [`Vec2::is_valid`], which answers locally.
pub fn is_valid_vec2(v: &Vec2<'_>) -> bool {
    planar_ffi::is_valid_vec2(v.block())
}

/// Whether the engine accepts `q`: finite and normalized.
pub fn is_valid_rotation(q: &Rot<'_>) -> bool {
    planar_ffi::is_valid_rotation(q.block())
}
