//! Foreign layout descriptors and error types for Planar geometry values.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! C-compatible structs shared with the native engine (`RawVec2`, `RawRot`,
//! `RawTransform`), the [`LayoutDescriptor`] that describes their byte
//! layout, typed [`Field`] projections into composite layouts, and the error
//! types used across the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod float;
pub mod layout;

pub use error::{EngineError, LayoutError};
pub use layout::{
    Field, FieldKind, FieldLayout, ForeignLayout, LayoutDescriptor, RawRot, RawTransform, RawVec2,
};
