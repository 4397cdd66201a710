//! Scoped allocation for foreign-layout values.
//!
//! Every Planar value lives in a [`Block`]: a fixed-size, layout-described
//! piece of memory that is either owned (carved from an arena) or borrowed
//! (aliasing memory owned elsewhere). This crate is one of two that may
//! contain `unsafe` code (along with `planar-ffi`); it is confined to the
//! `raw` and `block` modules.
//!
//! # Architecture
//!
//! ```text
//! ScopedArena (caller-supplied, shared release point)
//! └── RegionList → Region[] (bump-allocated, zeroed, fixed address)
//!
//! Block<'a, T>
//! ├── Owned(Scope::Auto(RawRegion))        default arena, freed with the block
//! ├── Owned(Scope::Arena(&'a ScopedArena)) freed when the arena drops
//! └── Borrowed                             aliases memory owned elsewhere
//! ```
//!
//! # Release model
//!
//! Arenas have no per-block free. Dropping a [`ScopedArena`] releases every
//! region at once; the `'a` lifetime on arena blocks keeps them from
//! outliving it. Views created with [`Block::from_raw`] carry no lifetime
//! guarantee of their own.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena;
pub mod block;
pub mod config;
pub mod error;
mod raw;
pub mod region;

// Public re-exports for the primary API surface.
pub use arena::ScopedArena;
pub use block::Block;
pub use config::ArenaConfig;
pub use error::ArenaError;
