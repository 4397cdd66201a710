//! Rigid transform: position plus rotation in one contiguous block.
//!
//! [`Transform::position`] and [`Transform::rotation`] hand out views over
//! the transform's own sub-blocks, never copies. The transform's storage
//! is never replaced; setters only overwrite its contents.

use std::fmt;
use std::hash::{Hash, Hasher};

use planar_arena::{ArenaError, Block, ScopedArena};
use planar_core::float::{canonical_bits, same_value};
use planar_core::{RawRot, RawTransform, RawVec2};

use crate::rot::Rot;
use crate::vec2::Vec2;

/// A 2D transform in a foreign-layout block.
///
/// ```
/// use planar_math::Transform;
///
/// let t = Transform::identity();
/// t.position().set_x(3.0);
/// assert_eq!(t.x(), 3.0);
/// ```
pub struct Transform<'a> {
    block: Block<'a, RawTransform>,
}

impl Transform<'static> {
    /// Position `(0, 0)`, identity rotation.
    pub fn identity() -> Self {
        Self::from_raw(RawTransform::IDENTITY)
    }

    /// Given position, identity rotation.
    pub fn from_position(position: &Vec2<'_>) -> Self {
        Self::from_raw(RawTransform::new(position.raw(), RawRot::IDENTITY))
    }

    /// Given position, rotated by `angle` radians.
    pub fn from_position_angle(position: &Vec2<'_>, angle: f32) -> Self {
        Self::from_raw(RawTransform::new(position.raw(), RawRot::from_angle(angle)))
    }

    /// Given position and rotation, copied in.
    pub fn new(position: &Vec2<'_>, rotation: &Rot<'_>) -> Self {
        Self::from_raw(RawTransform::new(position.raw(), rotation.raw()))
    }

    /// Position `(x, y)`, rotated by `angle` radians.
    pub fn from_xy_angle(x: f32, y: f32, angle: f32) -> Self {
        Self::from_raw(RawTransform::new(
            RawVec2::new(x, y),
            RawRot::from_angle(angle),
        ))
    }

    fn from_raw(raw: RawTransform) -> Self {
        Self {
            block: Block::auto(raw),
        }
    }
}

impl<'a> Transform<'a> {
    /// Given position and rotation, allocated from `arena`.
    pub fn new_in(
        arena: &'a ScopedArena,
        position: &Vec2<'_>,
        rotation: &Rot<'_>,
    ) -> Result<Self, ArenaError> {
        let raw = RawTransform::new(position.raw(), rotation.raw());
        Ok(Self {
            block: arena.alloc(raw)?,
        })
    }

    /// Wrap an existing block. If the block is borrowed, the transform is a
    /// view and every write lands in the block's owner.
    pub fn from_block(block: Block<'a, RawTransform>) -> Self {
        Self { block }
    }

    /// Independent owned copy with its own position and rotation.
    pub fn copy(&self) -> Transform<'static> {
        Transform::from_raw(self.raw())
    }

    /// Independent copy allocated from `arena`.
    pub fn copy_in<'b>(&self, arena: &'b ScopedArena) -> Result<Transform<'b>, ArenaError> {
        Ok(Transform {
            block: arena.alloc(self.raw())?,
        })
    }

    /// Current contents as a plain struct.
    #[inline]
    pub fn raw(&self) -> RawTransform {
        self.block.get()
    }

    /// The underlying block.
    pub fn block(&self) -> &Block<'a, RawTransform> {
        &self.block
    }

    /// Pointer to the foreign struct, for handing to native code.
    pub fn as_ptr(&self) -> *mut RawTransform {
        self.block.as_ptr()
    }

    /// Whether this transform aliases memory it does not own.
    pub fn is_view(&self) -> bool {
        self.block.is_view()
    }

    /// View of the position. Writes through it move the transform.
    pub fn position(&self) -> Vec2<'_> {
        Vec2::from_block(self.block.field(RawTransform::POSITION))
    }

    /// View of the rotation. Writes through it rotate the transform.
    pub fn rotation(&self) -> Rot<'_> {
        Rot::from_block(self.block.field(RawTransform::ROTATION))
    }

    /// Position x.
    pub fn x(&self) -> f32 {
        self.position().x()
    }

    /// Position y.
    pub fn y(&self) -> f32 {
        self.position().y()
    }

    /// Rotation angle in radians.
    pub fn angle(&self) -> f32 {
        self.rotation().angle()
    }

    /// Set position x.
    pub fn set_x(&mut self, x: f32) -> &mut Self {
        self.position().set_x(x);
        self
    }

    /// Set position y.
    pub fn set_y(&mut self, y: f32) -> &mut Self {
        self.position().set_y(y);
        self
    }

    /// Copy `position` into the position sub-block.
    pub fn set_position(&mut self, position: &Vec2<'_>) -> &mut Self {
        self.position().set_vec(position);
        self
    }

    /// Set the position to `(x, y)`.
    pub fn set_position_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.position().set(x, y);
        self
    }

    /// Copy `rotation` into the rotation sub-block.
    pub fn set_rotation(&mut self, rotation: &Rot<'_>) -> &mut Self {
        self.rotation().set_rot(rotation);
        self
    }

    /// Set the rotation to `angle` radians.
    pub fn set_rotation_angle(&mut self, angle: f32) -> &mut Self {
        self.rotation().set_angle(angle);
        self
    }

    /// Copy both `position` and `rotation` in.
    pub fn set(&mut self, position: &Vec2<'_>, rotation: &Rot<'_>) -> &mut Self {
        self.block
            .set(RawTransform::new(position.raw(), rotation.raw()));
        self
    }

    /// Set position `(x, y)` and rotation `angle` radians.
    pub fn set_xy_angle(&mut self, x: f32, y: f32, angle: f32) -> &mut Self {
        self.block.set(RawTransform::new(
            RawVec2::new(x, y),
            RawRot::from_angle(angle),
        ));
        self
    }

    /// Reset to position `(0, 0)` and identity rotation, in place.
    #[allow(clippy::wrong_self_convention)]
    pub fn to_identity(&mut self) -> &mut Self {
        self.block.set(RawTransform::IDENTITY);
        self
    }
}

impl Clone for Transform<'_> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl Default for Transform<'_> {
    fn default() -> Self {
        Transform::identity()
    }
}

impl PartialEq<Transform<'_>> for Transform<'_> {
    fn eq(&self, other: &Transform<'_>) -> bool {
        let a: [f32; 4] = components(self.raw());
        let b: [f32; 4] = components(other.raw());
        a.iter().zip(b.iter()).all(|(&x, &y)| same_value(x, y))
    }
}

impl Eq for Transform<'_> {}

impl Hash for Transform<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for v in components(self.raw()) {
            canonical_bits(v).hash(state);
        }
    }
}

fn components(raw: RawTransform) -> [f32; 4] {
    [raw.p.x, raw.p.y, raw.q.c, raw.q.s]
}

impl fmt::Display for Transform<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transform{{p=({:.2}, {:.2}), q={:.2}}}",
            self.x(),
            self.y(),
            self.angle()
        )
    }
}

impl fmt::Debug for Transform<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.raw();
        f.debug_struct("Transform")
            .field("p", &raw.p)
            .field("q", &raw.q)
            .field("view", &self.is_view())
            .finish()
    }
}
