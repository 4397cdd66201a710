//! Reference engine: C ABI validity predicates.
//!
//! These are the symbols a native engine exports. Arguments are the
//! foreign structs passed by value, so no pointer crosses the boundary.

use planar_core::{RawRot, RawVec2};

/// Half-width of the window around 1 inside which `c² + s²` counts as
/// normalized.
pub const NORMALIZATION_TOLERANCE: f32 = 6.0e-4;

/// True if `value` is neither NaN nor infinite.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn planar_is_valid_float(value: f32) -> bool {
    value.is_finite()
}

/// True if both components of `v` are finite.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn planar_is_valid_vec2(v: RawVec2) -> bool {
    planar_is_valid_float(v.x) && planar_is_valid_float(v.y)
}

/// True if `q` has finite components and `c² + s²` lies strictly inside
/// `1 ± NORMALIZATION_TOLERANCE`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn planar_is_valid_rotation(q: RawRot) -> bool {
    if !planar_is_valid_float(q.c) || !planar_is_valid_float(q.s) {
        return false;
    }
    let qq = q.c * q.c + q.s * q.s;
    1.0 - NORMALIZATION_TOLERANCE < qq && qq < 1.0 + NORMALIZATION_TOLERANCE
}
