//! Rotation as a unit complex number.
//!
//! Stored as (cosine, sine) so rotating a vector needs no trigonometry.
//! Setters write components verbatim; nothing renormalizes. Whether a
//! rotation is close enough to unit length is the native engine's call,
//! asked through [`Rot::is_valid`].

use std::fmt;
use std::hash::{Hash, Hasher};

use planar_arena::{ArenaError, Block, ScopedArena};
use planar_core::float::{canonical_bits, same_value};
use planar_core::RawRot;

use crate::vec2::Vec2;

/// A 2D rotation in a foreign-layout block.
pub struct Rot<'a> {
    block: Block<'a, RawRot>,
}

impl Rot<'static> {
    /// No rotation: `c = 1`, `s = 0`.
    pub fn identity() -> Self {
        Self::new(1.0, 0.0)
    }

    /// Rotation by `radians`.
    pub fn from_radians(radians: f32) -> Self {
        Self::from_raw(RawRot::from_angle(radians))
    }

    /// Rotation by `degrees`.
    pub fn from_degrees(degrees: f32) -> Self {
        Self::from_radians(f64::from(degrees).to_radians() as f32)
    }

    /// Rotation with explicit components, stored as given.
    pub fn new(c: f32, s: f32) -> Self {
        Self::from_raw(RawRot::new(c, s))
    }

    fn from_raw(raw: RawRot) -> Self {
        Self {
            block: Block::auto(raw),
        }
    }
}

impl<'a> Rot<'a> {
    /// Explicit components allocated from `arena`.
    pub fn new_in(arena: &'a ScopedArena, c: f32, s: f32) -> Result<Self, ArenaError> {
        Ok(Self {
            block: arena.alloc(RawRot::new(c, s))?,
        })
    }

    /// Rotation by `radians` allocated from `arena`.
    pub fn from_radians_in(arena: &'a ScopedArena, radians: f32) -> Result<Self, ArenaError> {
        Ok(Self {
            block: arena.alloc(RawRot::from_angle(radians))?,
        })
    }

    /// Wrap an existing block. If the block is borrowed, the rotation is a
    /// view and every write lands in the block's owner.
    pub fn from_block(block: Block<'a, RawRot>) -> Self {
        Self { block }
    }

    /// Independent owned copy, even when `self` is a view.
    pub fn copy(&self) -> Rot<'static> {
        Rot::from_raw(self.raw())
    }

    /// Independent copy allocated from `arena`.
    pub fn copy_in<'b>(&self, arena: &'b ScopedArena) -> Result<Rot<'b>, ArenaError> {
        let raw = self.raw();
        Rot::new_in(arena, raw.c, raw.s)
    }

    /// Cosine component.
    #[inline]
    pub fn c(&self) -> f32 {
        self.block.get().c
    }

    /// Sine component.
    #[inline]
    pub fn s(&self) -> f32 {
        self.block.get().s
    }

    /// Current components as a plain struct.
    #[inline]
    pub fn raw(&self) -> RawRot {
        self.block.get()
    }

    /// The underlying block.
    pub fn block(&self) -> &Block<'a, RawRot> {
        &self.block
    }

    /// Pointer to the foreign struct, for handing to native code.
    pub fn as_ptr(&self) -> *mut RawRot {
        self.block.as_ptr()
    }

    /// Whether this rotation aliases memory it does not own.
    pub fn is_view(&self) -> bool {
        self.block.is_view()
    }

    /// Set the cosine component.
    pub fn set_c(&mut self, c: f32) -> &mut Self {
        self.block.update(|q| q.c = c);
        self
    }

    /// Set the sine component.
    pub fn set_s(&mut self, s: f32) -> &mut Self {
        self.block.update(|q| q.s = s);
        self
    }

    /// Set both components.
    pub fn set(&mut self, c: f32, s: f32) -> &mut Self {
        self.block.set(RawRot::new(c, s));
        self
    }

    /// Copy the components of `other` into this rotation.
    pub fn set_rot(&mut self, other: &Rot<'_>) -> &mut Self {
        self.block.set(other.raw());
        self
    }

    /// Angle in radians, in `(-π, π]`.
    pub fn angle(&self) -> f32 {
        let q = self.raw();
        f64::from(q.s).atan2(f64::from(q.c)) as f32
    }

    /// Overwrite both components from `radians`.
    pub fn set_angle(&mut self, radians: f32) -> &mut Self {
        self.block.set(RawRot::from_angle(radians));
        self
    }

    /// Reset to the identity rotation.
    #[allow(clippy::wrong_self_convention)]
    pub fn to_identity(&mut self) -> &mut Self {
        self.block.set(RawRot::IDENTITY);
        self
    }

    /// Exactly `c == 1 && s == 0`, no tolerance.
    pub fn is_identity(&self) -> bool {
        let q = self.raw();
        q.c == 1.0 && q.s == 0.0
    }

    /// Rotated x axis: `(c, s)`.
    pub fn x_axis(&self) -> Vec2<'static> {
        let q = self.raw();
        Vec2::new(q.c, q.s)
    }

    /// Rotated y axis: `(-s, c)`.
    pub fn y_axis(&self) -> Vec2<'static> {
        let q = self.raw();
        Vec2::new(-q.s, q.c)
    }

    /// Whether the engine accepts this rotation: finite and normalized
    /// within its tolerance.
    ///
    /// Requires a ready engine; see [`planar_ffi::init`].
    pub fn is_valid(&self) -> bool {
        planar_ffi::is_valid_rotation(&self.block)
    }
}

impl Clone for Rot<'_> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl Default for Rot<'_> {
    fn default() -> Self {
        Rot::identity()
    }
}

impl PartialEq<Rot<'_>> for Rot<'_> {
    fn eq(&self, other: &Rot<'_>) -> bool {
        let (a, b) = (self.raw(), other.raw());
        same_value(a.c, b.c) && same_value(a.s, b.s)
    }
}

impl Eq for Rot<'_> {}

impl Hash for Rot<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let q = self.raw();
        canonical_bits(q.c).hash(state);
        canonical_bits(q.s).hash(state);
    }
}

impl fmt::Display for Rot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let q = self.raw();
        write!(
            f,
            "Rot(c={:.3}, s={:.3}, angle={:.3} degrees)",
            q.c,
            q.s,
            f64::from(self.angle()).to_degrees()
        )
    }
}

impl fmt::Debug for Rot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let q = self.raw();
        f.debug_struct("Rot")
            .field("c", &q.c)
            .field("s", &q.s)
            .field("view", &self.is_view())
            .finish()
    }
}
