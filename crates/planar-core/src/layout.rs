//! Foreign layouts shared with the native engine.
//!
//! The `Raw*` structs are the exact byte layout the engine reads and writes:
//! `repr(C)`, `f32` fields only, no padding. A [`LayoutDescriptor`] describes
//! the same information as data (size, alignment, ordered fields) so the arena
//! can carve blocks without knowing the Rust type, and so the layout contract
//! can be checked in tests.
//!
//! Composite layouts expose their sub-structs through typed [`Field`]
//! projections, which the arena turns into aliasing views.

use std::alloc::Layout;
use std::fmt;
use std::marker::PhantomData;
use std::mem::{align_of, offset_of, size_of};

use bytemuck::{Pod, Zeroable};
use indexmap::IndexMap;

use crate::error::LayoutError;

/// A type with a fixed, engine-agreed byte layout.
///
/// `Pod` guarantees any bit pattern is a valid value, so blocks written by
/// the native side (or freshly zeroed) can always be read back.
pub trait ForeignLayout: Pod {
    /// Layout name used in diagnostics and in the generated C header.
    const NAME: &'static str;

    /// The data description of this layout.
    fn descriptor() -> LayoutDescriptor;
}

/// 2D vector as laid out by the engine.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct RawVec2 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
}

impl RawVec2 {
    /// `(0, 0)`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl ForeignLayout for RawVec2 {
    const NAME: &'static str = "RawVec2";

    fn descriptor() -> LayoutDescriptor {
        LayoutDescriptor::of::<Self>(Self::NAME)
            .with_field(FieldLayout::f32("x", offset_of!(RawVec2, x)))
            .with_field(FieldLayout::f32("y", offset_of!(RawVec2, y)))
    }
}

/// Rotation as a unit complex number (cosine, sine), as laid out by the engine.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct RawRot {
    /// Cosine component.
    pub c: f32,
    /// Sine component.
    pub s: f32,
}

impl RawRot {
    /// Angle zero: `c = 1, s = 0`.
    pub const IDENTITY: Self = Self { c: 1.0, s: 0.0 };

    /// Create from components. No normalization is applied.
    pub const fn new(c: f32, s: f32) -> Self {
        Self { c, s }
    }

    /// Components for `angle` radians, evaluated in `f64` and rounded.
    pub fn from_angle(angle: f32) -> Self {
        let angle = f64::from(angle);
        Self {
            c: angle.cos() as f32,
            s: angle.sin() as f32,
        }
    }
}

impl ForeignLayout for RawRot {
    const NAME: &'static str = "RawRot";

    fn descriptor() -> LayoutDescriptor {
        LayoutDescriptor::of::<Self>(Self::NAME)
            .with_field(FieldLayout::f32("c", offset_of!(RawRot, c)))
            .with_field(FieldLayout::f32("s", offset_of!(RawRot, s)))
    }
}

/// Position plus rotation, contiguous, in that order.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct RawTransform {
    /// Position.
    pub p: RawVec2,
    /// Rotation.
    pub q: RawRot,
}

impl RawTransform {
    /// Origin with identity rotation.
    pub const IDENTITY: Self = Self {
        p: RawVec2::ZERO,
        q: RawRot::IDENTITY,
    };

    /// Projection onto the embedded position.
    pub const POSITION: Field<RawTransform, RawVec2> = Field::new(offset_of!(RawTransform, p));

    /// Projection onto the embedded rotation.
    pub const ROTATION: Field<RawTransform, RawRot> = Field::new(offset_of!(RawTransform, q));

    /// Create from parts.
    pub const fn new(p: RawVec2, q: RawRot) -> Self {
        Self { p, q }
    }
}

impl ForeignLayout for RawTransform {
    const NAME: &'static str = "RawTransform";

    fn descriptor() -> LayoutDescriptor {
        LayoutDescriptor::of::<Self>(Self::NAME)
            .with_field(FieldLayout::nested::<RawVec2>(
                "p",
                Self::POSITION.offset(),
            ))
            .with_field(FieldLayout::nested::<RawRot>(
                "q",
                Self::ROTATION.offset(),
            ))
    }
}

// The engine's headers hard-code these sizes.
const _: () = assert!(size_of::<RawVec2>() == 8 && align_of::<RawVec2>() == 4);
const _: () = assert!(size_of::<RawRot>() == 8 && align_of::<RawRot>() == 4);
const _: () = assert!(size_of::<RawTransform>() == 16 && align_of::<RawTransform>() == 4);

/// What a field holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// A single `f32`.
    F32,
    /// An embedded foreign struct, by layout name.
    Struct(&'static str),
}

/// Placement of one field inside a [`LayoutDescriptor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldLayout {
    /// Field name.
    pub name: &'static str,
    /// Byte offset from the start of the enclosing layout.
    pub offset: usize,
    /// Size in bytes.
    pub size: usize,
    /// Required alignment in bytes.
    pub align: usize,
    /// What the field holds.
    pub kind: FieldKind,
}

impl FieldLayout {
    /// An `f32` field at `offset`.
    pub const fn f32(name: &'static str, offset: usize) -> Self {
        Self {
            name,
            offset,
            size: size_of::<f32>(),
            align: align_of::<f32>(),
            kind: FieldKind::F32,
        }
    }

    /// An embedded `U` at `offset`.
    pub fn nested<U: ForeignLayout>(name: &'static str, offset: usize) -> Self {
        Self {
            name,
            offset,
            size: size_of::<U>(),
            align: align_of::<U>(),
            kind: FieldKind::Struct(U::NAME),
        }
    }

    /// One past the last byte of the field.
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.size)
    }
}

/// Byte layout of a foreign struct: size, alignment, and ordered fields.
///
/// Fields are kept in declaration order (`IndexMap`), which for a valid
/// descriptor is also ascending offset order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutDescriptor {
    name: &'static str,
    size: usize,
    align: usize,
    fields: IndexMap<&'static str, FieldLayout>,
    duplicate: Option<&'static str>,
}

impl LayoutDescriptor {
    /// An empty descriptor with explicit size and alignment.
    pub fn new(name: &'static str, size: usize, align: usize) -> Self {
        Self {
            name,
            size,
            align,
            fields: IndexMap::new(),
            duplicate: None,
        }
    }

    /// An empty descriptor sized and aligned like `T`.
    pub fn of<T>(name: &'static str) -> Self {
        Self::new(name, size_of::<T>(), align_of::<T>())
    }

    /// Append a field. Declaring a name twice is reported by [`validate`](Self::validate).
    pub fn with_field(mut self, field: FieldLayout) -> Self {
        if self.fields.insert(field.name, field).is_some() && self.duplicate.is_none() {
            self.duplicate = Some(field.name);
        }
        self
    }

    /// Layout name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Size in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Alignment in bytes.
    pub fn align(&self) -> usize {
        self.align
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldLayout> {
        self.fields.get(name)
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldLayout> {
        self.fields.values()
    }

    /// Number of declared fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Check that this descriptor describes a real C struct.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.size == 0 {
            return Err(LayoutError::ZeroSize { layout: self.name });
        }
        if !self.align.is_power_of_two() {
            return Err(LayoutError::InvalidAlignment {
                layout: self.name,
                align: self.align,
            });
        }
        if self.size % self.align != 0 {
            return Err(LayoutError::SizeNotMultipleOfAlign {
                layout: self.name,
                size: self.size,
                align: self.align,
            });
        }
        if let Some(field) = self.duplicate {
            return Err(LayoutError::DuplicateField { field });
        }

        let mut previous: Option<&FieldLayout> = None;
        for field in self.fields.values() {
            if field.end() > self.size || field.size > self.size {
                return Err(LayoutError::FieldOutOfBounds {
                    field: field.name,
                    end: field.end(),
                    size: self.size,
                });
            }
            if !field.align.is_power_of_two() || field.offset % field.align != 0 {
                return Err(LayoutError::MisalignedField {
                    field: field.name,
                    offset: field.offset,
                    align: field.align,
                });
            }
            if let Some(prev) = previous {
                if field.offset < prev.end() {
                    return Err(LayoutError::OverlappingFields {
                        first: prev.name,
                        second: field.name,
                    });
                }
            }
            previous = Some(field);
        }
        Ok(())
    }

    /// The equivalent allocator layout, after validation.
    pub fn to_std_layout(&self) -> Result<Layout, LayoutError> {
        self.validate()?;
        Layout::from_size_align(self.size, self.align).map_err(|_| LayoutError::InvalidAlignment {
            layout: self.name,
            align: self.align,
        })
    }
}

impl fmt::Display for LayoutDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(size={}, align={})", self.name, self.size, self.align)
    }
}

/// Typed projection from a composite layout `T` onto an embedded `U`.
///
/// Construction is `const` and rejects, at compile time when used in a
/// constant, any offset that would place `U` outside `T` or misalign it.
pub struct Field<T, U> {
    offset: usize,
    marker: PhantomData<fn(T) -> U>,
}

impl<T, U> Field<T, U> {
    /// Projection at byte `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `U` does not fit inside `T` at `offset`, if `offset` is not
    /// a multiple of `U`'s alignment, or if `U` is more strictly aligned
    /// than `T`.
    pub const fn new(offset: usize) -> Self {
        assert!(
            offset <= size_of::<T>() && size_of::<U>() <= size_of::<T>() - offset,
            "field projection out of bounds"
        );
        assert!(offset % align_of::<U>() == 0, "field projection misaligned");
        assert!(
            align_of::<U>() <= align_of::<T>(),
            "field more strictly aligned than its container"
        );
        Self {
            offset,
            marker: PhantomData,
        }
    }

    /// Byte offset of `U` inside `T`.
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

impl<T, U> Clone for Field<T, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, U> Copy for Field<T, U> {}

impl<T, U> fmt::Debug for Field<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("offset", &self.offset).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_descriptors_validate() {
        RawVec2::descriptor().validate().unwrap();
        RawRot::descriptor().validate().unwrap();
        RawTransform::descriptor().validate().unwrap();
    }

    #[test]
    fn transform_fields_are_position_then_rotation() {
        let desc = RawTransform::descriptor();
        let names: Vec<_> = desc.fields().map(|f| f.name).collect();
        assert_eq!(names, ["p", "q"]);

        let p = desc.field("p").unwrap();
        let q = desc.field("q").unwrap();
        assert_eq!(p.offset, 0);
        assert_eq!(p.size, 8);
        assert_eq!(q.offset, 8);
        assert_eq!(q.size, 8);
        assert!(p.end() <= q.offset);
        assert_eq!(p.kind, FieldKind::Struct("RawVec2"));
        assert_eq!(q.kind, FieldKind::Struct("RawRot"));
    }

    #[test]
    fn projections_match_descriptor_offsets() {
        let desc = RawTransform::descriptor();
        assert_eq!(RawTransform::POSITION.offset(), desc.field("p").unwrap().offset);
        assert_eq!(RawTransform::ROTATION.offset(), desc.field("q").unwrap().offset);
    }

    #[test]
    fn std_layout_matches_rust_layout() {
        let layout = RawTransform::descriptor().to_std_layout().unwrap();
        assert_eq!(layout, Layout::new::<RawTransform>());
    }

    #[test]
    fn bytes_follow_field_order() {
        let t = RawTransform::new(RawVec2::new(1.0, 2.0), RawRot::new(3.0, 4.0));
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&t));
        assert_eq!(floats, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn zero_size_rejected() {
        let desc = LayoutDescriptor::new("empty", 0, 4);
        assert_eq!(desc.validate(), Err(LayoutError::ZeroSize { layout: "empty" }));
    }

    #[test]
    fn non_power_of_two_alignment_rejected() {
        let desc = LayoutDescriptor::new("odd", 12, 3);
        assert!(matches!(
            desc.validate(),
            Err(LayoutError::InvalidAlignment { align: 3, .. })
        ));
    }

    #[test]
    fn size_must_be_multiple_of_align() {
        let desc = LayoutDescriptor::new("ragged", 6, 4);
        assert!(matches!(
            desc.validate(),
            Err(LayoutError::SizeNotMultipleOfAlign { size: 6, align: 4, .. })
        ));
    }

    #[test]
    fn overlapping_fields_rejected() {
        let desc = LayoutDescriptor::new("overlap", 8, 4)
            .with_field(FieldLayout::nested::<RawVec2>("a", 0))
            .with_field(FieldLayout::f32("b", 4));
        assert_eq!(
            desc.validate(),
            Err(LayoutError::OverlappingFields {
                first: "a",
                second: "b"
            })
        );
    }

    #[test]
    fn field_past_end_rejected() {
        let desc = LayoutDescriptor::new("short", 8, 4).with_field(FieldLayout::f32("z", 8));
        assert!(matches!(
            desc.validate(),
            Err(LayoutError::FieldOutOfBounds { field: "z", end: 12, size: 8 })
        ));
    }

    #[test]
    fn misaligned_field_rejected() {
        let desc = LayoutDescriptor::new("skew", 8, 4).with_field(FieldLayout::f32("x", 2));
        assert!(matches!(
            desc.validate(),
            Err(LayoutError::MisalignedField { field: "x", offset: 2, .. })
        ));
    }

    #[test]
    fn duplicate_field_rejected() {
        let desc = LayoutDescriptor::new("dup", 8, 4)
            .with_field(FieldLayout::f32("x", 0))
            .with_field(FieldLayout::f32("x", 4));
        assert_eq!(
            desc.validate(),
            Err(LayoutError::DuplicateField { field: "x" })
        );
    }

    #[test]
    fn rot_from_angle_is_unit() {
        let q = RawRot::from_angle(std::f32::consts::FRAC_PI_2);
        assert!(q.c.abs() < 1e-6);
        assert!((q.s - 1.0).abs() < 1e-6);
    }

    #[test]
    fn display_names_layout() {
        assert_eq!(
            RawTransform::descriptor().to_string(),
            "RawTransform(size=16, align=4)"
        );
    }
}
