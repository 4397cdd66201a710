//! Integration test: process-wide engine initialization.
//!
//! Runs as its own test binary so the global engine starts empty. Kept to
//! a single test so the steps happen in order.

use planar::ffi;
use planar::prelude::*;
use planar_test_utils::{CountingLoader, FailingLoader};

#[test]
fn initialization_lifecycle() {
    assert!(ffi::try_engine().is_none());

    // A failing loader reports the error and leaves the process uninitialized.
    let err = ffi::init(&FailingLoader::unsupported("plan9")).unwrap_err();
    assert_eq!(err, EngineError::UnsupportedPlatform { os: "plan9".into() });
    assert!(ffi::try_engine().is_none());

    // The first successful loader wins and runs once.
    let loader = CountingLoader::new();
    let engine = ffi::init(&loader).unwrap();
    assert_eq!(engine.source(), "counting");
    ffi::init(&loader).unwrap();
    assert_eq!(loader.loads(), 1);

    // Later initializers, including the facade's, reuse it.
    let again = planar::init();
    assert!(std::ptr::eq(engine, again));
    assert_eq!(ffi::engine().source(), "counting");

    assert!(!Rot::new(2.0, 2.0).is_valid());
}
