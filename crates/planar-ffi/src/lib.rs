//! Native boundary for Planar geometry values.
//!
//! Three layers, leaves first:
//!
//! - [`native`]: the reference engine, a set of `extern "C"` validity
//!   predicates over the foreign structs from `planar-core`. Built into the
//!   `cdylib` so C callers get the same symbols an external engine exports.
//! - [`engine`]: process-wide engine readiness. An [`EngineLoader`] produces
//!   an [`EngineVTable`]; [`init`] installs it exactly once.
//! - [`gateway`]: the pure predicates value types call. They read an
//!   aliased block and forward to the ready engine.
//!
//! This crate is one of two that may contain `unsafe` code (along with
//! `planar-arena`).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod engine;
pub mod gateway;
pub mod native;

pub use engine::{
    engine, ensure_ready, init, try_engine, Engine, EngineLoader, EngineSlot, EngineVTable,
    StaticEngine,
};
pub use gateway::{is_valid_float, is_valid_rotation, is_valid_vec2};
