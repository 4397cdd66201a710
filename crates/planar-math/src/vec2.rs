//! Two-component vector.

use std::fmt;
use std::hash::{Hash, Hasher};

use planar_arena::{ArenaError, Block, ScopedArena};
use planar_core::float::{canonical_bits, same_value};
use planar_core::RawVec2;

/// A 2D vector in a foreign-layout block.
///
/// Mutators write through to the block and return `&mut Self` so calls
/// can be chained:
///
/// ```
/// use planar_math::Vec2;
///
/// let mut v = Vec2::new(1.0, 1.0);
/// v.add_xy(2.0, 3.0).mul(2.0).sub_xy(1.0, 1.0);
/// assert_eq!((v.x(), v.y()), (5.0, 7.0));
/// ```
pub struct Vec2<'a> {
    block: Block<'a, RawVec2>,
}

impl Vec2<'static> {
    /// `(0, 0)` in its own block.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// `(x, y)` in its own block.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            block: Block::auto(RawVec2::new(x, y)),
        }
    }

    /// `(1, 0)`.
    pub fn unit_x() -> Self {
        Self::new(1.0, 0.0)
    }

    /// `(0, 1)`.
    pub fn unit_y() -> Self {
        Self::new(0.0, 1.0)
    }

    pub(crate) fn from_raw(raw: RawVec2) -> Self {
        Self {
            block: Block::auto(raw),
        }
    }
}

#[allow(clippy::should_implement_trait)]
impl<'a> Vec2<'a> {
    /// `(x, y)` allocated from `arena`.
    pub fn new_in(arena: &'a ScopedArena, x: f32, y: f32) -> Result<Self, ArenaError> {
        Ok(Self {
            block: arena.alloc(RawVec2::new(x, y))?,
        })
    }

    /// Wrap an existing block. If the block is borrowed, the vector is a
    /// view and every write lands in the block's owner.
    pub fn from_block(block: Block<'a, RawVec2>) -> Self {
        Self { block }
    }

    /// Independent owned copy, even when `self` is a view.
    pub fn copy(&self) -> Vec2<'static> {
        Vec2::from_raw(self.raw())
    }

    /// Independent copy allocated from `arena`.
    pub fn copy_in<'b>(&self, arena: &'b ScopedArena) -> Result<Vec2<'b>, ArenaError> {
        Vec2::new_in(arena, self.x(), self.y())
    }

    /// X component.
    #[inline]
    pub fn x(&self) -> f32 {
        self.block.get().x
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> f32 {
        self.block.get().y
    }

    /// Current components as a plain struct.
    #[inline]
    pub fn raw(&self) -> RawVec2 {
        self.block.get()
    }

    /// The underlying block.
    pub fn block(&self) -> &Block<'a, RawVec2> {
        &self.block
    }

    /// Pointer to the foreign struct, for handing to native code.
    pub fn as_ptr(&self) -> *mut RawVec2 {
        self.block.as_ptr()
    }

    /// Whether this vector aliases memory it does not own.
    pub fn is_view(&self) -> bool {
        self.block.is_view()
    }

    /// Set the x component.
    pub fn set_x(&mut self, x: f32) -> &mut Self {
        self.block.update(|v| v.x = x);
        self
    }

    /// Set the y component.
    pub fn set_y(&mut self, y: f32) -> &mut Self {
        self.block.update(|v| v.y = y);
        self
    }

    /// Set both components.
    pub fn set(&mut self, x: f32, y: f32) -> &mut Self {
        self.block.set(RawVec2::new(x, y));
        self
    }

    /// Copy the components of `other` into this vector.
    pub fn set_vec(&mut self, other: &Vec2<'_>) -> &mut Self {
        self.block.set(other.raw());
        self
    }

    /// Reset to `(0, 0)`.
    #[allow(clippy::wrong_self_convention)]
    pub fn to_zero(&mut self) -> &mut Self {
        self.set(0.0, 0.0)
    }

    /// Flip both components.
    pub fn negate(&mut self) -> &mut Self {
        self.block.update(|v| {
            v.x = -v.x;
            v.y = -v.y;
        });
        self
    }

    /// Add `other` component-wise.
    pub fn add(&mut self, other: &Vec2<'_>) -> &mut Self {
        let o = other.raw();
        self.add_xy(o.x, o.y)
    }

    /// Add `(x, y)`.
    pub fn add_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.block.update(|v| {
            v.x += x;
            v.y += y;
        });
        self
    }

    /// Subtract `other` component-wise.
    pub fn sub(&mut self, other: &Vec2<'_>) -> &mut Self {
        let o = other.raw();
        self.sub_xy(o.x, o.y)
    }

    /// Subtract `(x, y)`.
    pub fn sub_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.block.update(|v| {
            v.x -= x;
            v.y -= y;
        });
        self
    }

    /// Scale both components by `scalar`.
    pub fn mul(&mut self, scalar: f32) -> &mut Self {
        self.mul_xy(scalar, scalar)
    }

    /// Scale by `x` and `y` separately.
    pub fn mul_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.block.update(|v| {
            v.x *= x;
            v.y *= y;
        });
        self
    }

    /// Multiply component-wise by `other`.
    pub fn mul_vec(&mut self, other: &Vec2<'_>) -> &mut Self {
        let o = other.raw();
        self.mul_xy(o.x, o.y)
    }

    /// Divide both components by `scalar`. Zero yields infinities or NaN.
    pub fn div(&mut self, scalar: f32) -> &mut Self {
        self.div_xy(scalar, scalar)
    }

    /// Divide by `x` and `y` separately.
    pub fn div_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.block.update(|v| {
            v.x /= x;
            v.y /= y;
        });
        self
    }

    /// Divide component-wise by `other`.
    pub fn div_vec(&mut self, other: &Vec2<'_>) -> &mut Self {
        let o = other.raw();
        self.div_xy(o.x, o.y)
    }

    /// Dot product.
    pub fn dot(&self, other: &Vec2<'_>) -> f32 {
        let (a, b) = (self.raw(), other.raw());
        a.x * b.x + a.y * b.y
    }

    /// Z component of the 3D cross product: `x1*y2 - y1*x2`.
    pub fn cross(&self, other: &Vec2<'_>) -> f32 {
        let (a, b) = (self.raw(), other.raw());
        a.x * b.y - a.y * b.x
    }

    /// Cross with a scalar z axis: `(s*y, -s*x)` as a new vector.
    pub fn cross_scalar(&self, s: f32) -> Vec2<'static> {
        let v = self.raw();
        Vec2::new(s * v.y, -s * v.x)
    }

    /// Euclidean length.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length.
    pub fn length_squared(&self) -> f32 {
        let v = self.raw();
        v.x * v.x + v.y * v.y
    }

    /// Distance to `other`.
    pub fn distance(&self, other: &Vec2<'_>) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance to `other`.
    pub fn distance_squared(&self, other: &Vec2<'_>) -> f32 {
        let (a, b) = (self.raw(), other.raw());
        let (dx, dy) = (a.x - b.x, a.y - b.y);
        dx * dx + dy * dy
    }

    /// Scale to unit length. A zero vector is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len > 0.0 {
            self.mul(1.0 / len);
        }
        self
    }

    /// Scale to `target` length.
    ///
    /// A zero vector produces NaN components: there is no direction to
    /// scale along, and the result is left for [`Vec2::is_valid`] to catch.
    pub fn normalize_to(&mut self, target: f32) -> &mut Self {
        let len = self.length();
        self.mul(1.0 / len * target)
    }

    /// Whether both components are finite.
    pub fn is_valid(&self) -> bool {
        let v = self.raw();
        v.x.is_finite() && v.y.is_finite()
    }
}

impl Clone for Vec2<'_> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl Default for Vec2<'_> {
    fn default() -> Self {
        Vec2::zero()
    }
}

impl PartialEq<Vec2<'_>> for Vec2<'_> {
    fn eq(&self, other: &Vec2<'_>) -> bool {
        let (a, b) = (self.raw(), other.raw());
        same_value(a.x, b.x) && same_value(a.y, b.y)
    }
}

impl Eq for Vec2<'_> {}

impl Hash for Vec2<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let v = self.raw();
        canonical_bits(v.x).hash(state);
        canonical_bits(v.y).hash(state);
    }
}

impl fmt::Display for Vec2<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.raw();
        write!(f, "Vec2({:.3}, {:.3})", v.x, v.y)
    }
}

impl fmt::Debug for Vec2<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.raw();
        f.debug_struct("Vec2")
            .field("x", &v.x)
            .field("y", &v.y)
            .field("view", &self.is_view())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar_core::RawTransform;

    #[test]
    fn constructors() {
        assert_eq!(Vec2::zero().raw(), RawVec2::ZERO);
        assert_eq!(Vec2::unit_x().raw(), RawVec2::new(1.0, 0.0));
        assert_eq!(Vec2::unit_y().raw(), RawVec2::new(0.0, 1.0));
        let v = Vec2::new(2.5, -1.0);
        assert_eq!((v.x(), v.y()), (2.5, -1.0));
        assert!(!v.is_view());
        assert_eq!(Vec2::default(), Vec2::zero());
    }

    #[test]
    fn arena_vectors_share_release_point() {
        let arena = ScopedArena::new();
        let a = Vec2::new_in(&arena, 1.0, 2.0).unwrap();
        let b = a.copy_in(&arena).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.as_ptr(), b.as_ptr());
        assert_eq!(arena.block_count(), 2);
    }

    #[test]
    fn algebra() {
        let v = Vec2::new(3.0, 4.0);
        let w = Vec2::new(2.0, 1.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.dot(&w), 10.0);
        assert_eq!(v.cross(&w), -5.0);
        assert_eq!(v.cross_scalar(2.0).raw(), RawVec2::new(8.0, -6.0));
        assert_eq!(v.distance_squared(&w), 10.0);
        assert_eq!(Vec2::zero().distance(&v), 5.0);
    }

    #[test]
    fn chained_mutators() {
        let mut v = Vec2::new(1.0, 1.0);
        v.add_xy(2.0, 3.0).mul(2.0).sub_xy(1.0, 1.0);
        assert_eq!(v.raw(), RawVec2::new(5.0, 7.0));

        v.negate().div(-5.0);
        assert_eq!(v.raw(), RawVec2::new(1.0, 1.4));

        let w = Vec2::new(2.0, 4.0);
        v.set(1.0, 1.0).mul_vec(&w).add(&w).sub(&Vec2::unit_x());
        assert_eq!(v.raw(), RawVec2::new(3.0, 8.0));
        v.div_vec(&w).mul_xy(2.0, 1.0).div_xy(1.0, 2.0);
        assert_eq!(v.raw(), RawVec2::new(3.0, 1.0));
        v.to_zero();
        assert_eq!(v, Vec2::zero());
    }

    #[test]
    fn division_by_zero_propagates() {
        let mut v = Vec2::new(1.0, 0.0);
        v.div(0.0);
        assert_eq!(v.x(), f32::INFINITY);
        assert!(v.y().is_nan());
        assert!(!v.is_valid());
    }

    #[test]
    fn normalize_policies() {
        let mut v = Vec2::new(3.0, 4.0);
        v.normalize();
        assert!((v.length() - 1.0).abs() < 1e-6);

        let mut z = Vec2::zero();
        z.normalize();
        assert_eq!(z.raw(), RawVec2::ZERO);

        let mut v = Vec2::new(0.0, 2.0);
        v.normalize_to(5.0);
        assert_eq!(v.raw(), RawVec2::new(0.0, 5.0));

        let mut z = Vec2::zero();
        z.normalize_to(1.0);
        assert!(!z.is_valid());
    }

    #[test]
    fn normalize_scales_by_inverse_length() {
        let mut v = Vec2::new(1.11, 1.732_050_8);
        v.normalize();
        assert_eq!(v.x().to_bits(), 0x3f0a_2109);
        assert_eq!(v.y().to_bits(), 0x3f57_8993);

        let mut v = Vec2::new(1.11, 1.732_050_8);
        v.normalize_to(3.0);
        assert_eq!(v.x().to_bits(), 0x3fcf_318d);
        assert_eq!(v.y().to_bits(), 0x4021_a72e);
    }

    #[test]
    fn validity_is_local() {
        assert!(Vec2::new(1.0, 1.0).is_valid());
        assert!(!Vec2::new(f32::NAN, 1.0).is_valid());
        assert!(!Vec2::new(1.0, f32::NEG_INFINITY).is_valid());
    }

    #[test]
    fn view_writes_reach_owner() {
        let owner = Block::auto(RawTransform::IDENTITY);
        let mut view = Vec2::from_block(owner.field(RawTransform::POSITION));
        assert!(view.is_view());
        view.set(4.0, 5.0);
        assert_eq!(owner.get().p, RawVec2::new(4.0, 5.0));
    }

    #[test]
    fn copy_is_independent_of_view() {
        let owner = Block::auto(RawTransform::IDENTITY);
        let mut view = Vec2::from_block(owner.field(RawTransform::POSITION));
        let mut copy = view.copy();
        assert!(!copy.is_view());
        copy.set_x(9.0);
        assert_eq!(view.x(), 0.0);
        view.set_y(3.0);
        assert_eq!(copy.y(), 0.0);
    }

    #[test]
    fn clone_is_a_copy() {
        let v = Vec2::new(1.0, 2.0);
        let mut c = v.clone();
        c.set_x(0.0);
        assert_eq!(v.x(), 1.0);
    }

    #[test]
    fn equality_uses_bit_identity() {
        assert_eq!(Vec2::new(f32::NAN, 1.0), Vec2::new(f32::NAN, 1.0));
        assert_ne!(Vec2::new(0.0, 1.0), Vec2::new(-0.0, 1.0));

        let mut set = std::collections::HashSet::new();
        set.insert(Vec2::new(1.0, 2.0));
        assert!(set.contains(&Vec2::new(1.0, 2.0)));
    }

    #[test]
    fn display_format() {
        assert_eq!(Vec2::new(1.0, -2.5).to_string(), "Vec2(1.000, -2.500)");
    }
}
