//! 2D geometry values stored in foreign-layout memory.
//!
//! [`Vec2`], [`Rot`] and [`Transform`] each wrap one
//! [`Block`](planar_arena::Block) holding the matching C struct from
//! `planar-core`. A value either owns its block (allocated from the auto
//! scope or a caller's [`ScopedArena`](planar_arena::ScopedArena)) or is a
//! view over memory owned elsewhere. [`Transform::position`] and
//! [`Transform::rotation`] return views: writing through them writes the
//! transform.
//!
//! All arithmetic follows IEEE-754 without guards. Degenerate results
//! (division by zero, normalizing to a length from zero) surface as
//! infinities or NaN and are detected afterwards with `is_valid`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod rot;
pub mod transform;
pub mod vec2;

pub use rot::Rot;
pub use transform::Transform;
pub use vec2::Vec2;
