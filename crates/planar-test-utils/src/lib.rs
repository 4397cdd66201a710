//! Test utilities and mock engine loaders for Planar development.
//!
//! Provides a one-call ready engine ([`ready_engine`]), mock
//! [`EngineLoader`]s for exercising initialization paths, a
//! [`ForeignBuffer`] that stands in for memory owned by the native side,
//! and tolerance asserts for float results.

#![deny(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod foreign;

use std::sync::atomic::{AtomicUsize, Ordering};

use planar_core::EngineError;
use planar_ffi::{Engine, EngineLoader, EngineVTable};

pub use foreign::ForeignBuffer;

/// Install the reference engine for this test process and return it.
pub fn ready_engine() -> &'static Engine {
    planar_ffi::ensure_ready()
}

/// Loader that always fails with a fixed error.
pub struct FailingLoader {
    error: EngineError,
}

impl FailingLoader {
    pub fn new(error: EngineError) -> Self {
        Self { error }
    }

    /// Fails as an unsupported platform.
    pub fn unsupported(os: &str) -> Self {
        Self::new(EngineError::UnsupportedPlatform { os: os.into() })
    }
}

impl EngineLoader for FailingLoader {
    fn name(&self) -> &str {
        "failing"
    }

    fn load(&self) -> Result<EngineVTable, EngineError> {
        Err(self.error.clone())
    }
}

/// Loader that hands out the reference engine and counts how often it ran.
pub struct CountingLoader {
    loads: AtomicUsize,
}

impl CountingLoader {
    pub fn new() -> Self {
        Self {
            loads: AtomicUsize::new(0),
        }
    }

    /// Number of times [`EngineLoader::load`] has been called.
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl Default for CountingLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineLoader for CountingLoader {
    fn name(&self) -> &str {
        "counting"
    }

    fn load(&self) -> Result<EngineVTable, EngineError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(EngineVTable::REFERENCE)
    }
}

/// Assert `actual` is within `tolerance` of `expected`.
#[track_caller]
pub fn assert_close(actual: f32, expected: f32, tolerance: f32) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

/// Assert two angles in radians are within `tolerance` on the circle.
#[track_caller]
pub fn assert_angle_close(actual: f32, expected: f32, tolerance: f32) {
    let tau = std::f32::consts::TAU;
    let diff = (actual - expected).rem_euclid(tau);
    let dist = diff.min(tau - diff);
    assert!(
        dist <= tolerance,
        "expected angle {expected} ± {tolerance}, got {actual}"
    );
}
