//! Bit-level float identity used for value equality and hashing.
//!
//! Value types compare components by identity rather than IEEE `==`: every
//! NaN equals every other NaN, while `0.0` and `-0.0` stay distinct. This
//! keeps `Eq` and `Hash` consistent for types holding `f32`.

/// Bit pattern every NaN collapses to.
pub const CANONICAL_NAN_BITS: u32 = 0x7fc0_0000;

/// Bits of `v`, with all NaN payloads collapsed to [`CANONICAL_NAN_BITS`].
#[inline]
pub fn canonical_bits(v: f32) -> u32 {
    if v.is_nan() {
        CANONICAL_NAN_BITS
    } else {
        v.to_bits()
    }
}

/// Whether `a` and `b` are the same value under bit identity.
#[inline]
pub fn same_value(a: f32, b: f32) -> bool {
    canonical_bits(a) == canonical_bits(b)
}
