//! Process-wide native engine readiness.
//!
//! An engine is a table of C ABI predicates ([`EngineVTable`]). Where the
//! table comes from is the loader's business: [`StaticEngine`] binds the
//! reference engine linked into this crate, while an external loader can
//! locate a shared library and resolve the same symbols.
//!
//! Initialization is explicit and happens once per process. Nothing in the
//! value types triggers it; callers run [`init`] (or [`ensure_ready`])
//! before the first validity check. Once an engine is installed it is never
//! replaced.

use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

use planar_core::{EngineError, RawRot, RawVec2};

use crate::native;

/// C ABI predicate table exported by a native engine.
#[derive(Clone, Copy)]
pub struct EngineVTable {
    /// `bool planar_is_valid_float(float)`.
    pub is_valid_float: extern "C" fn(f32) -> bool,
    /// `bool planar_is_valid_vec2(RawVec2)`.
    pub is_valid_vec2: extern "C" fn(RawVec2) -> bool,
    /// `bool planar_is_valid_rotation(RawRot)`.
    pub is_valid_rotation: extern "C" fn(RawRot) -> bool,
}

impl EngineVTable {
    /// Table of the reference engine built into this crate.
    pub const REFERENCE: Self = Self {
        is_valid_float: native::planar_is_valid_float,
        is_valid_vec2: native::planar_is_valid_vec2,
        is_valid_rotation: native::planar_is_valid_rotation,
    };
}

impl fmt::Debug for EngineVTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineVTable")
            .field("is_valid_float", &(self.is_valid_float as *const ()))
            .field("is_valid_vec2", &(self.is_valid_vec2 as *const ()))
            .field("is_valid_rotation", &(self.is_valid_rotation as *const ()))
            .finish()
    }
}

/// Produces an engine's predicate table.
///
/// Implementations that open shared libraries, extract them to disk, or
/// detect the platform live outside this crate and report failure through
/// [`EngineError`].
pub trait EngineLoader {
    /// Short description of where the engine comes from, for logs.
    fn name(&self) -> &str;

    /// Resolve the engine's predicates.
    fn load(&self) -> Result<EngineVTable, EngineError>;
}

/// Loader for the reference engine linked into this crate. Never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticEngine;

impl EngineLoader for StaticEngine {
    fn name(&self) -> &str {
        "static reference engine"
    }

    fn load(&self) -> Result<EngineVTable, EngineError> {
        Ok(EngineVTable::REFERENCE)
    }
}

/// A ready engine.
#[derive(Debug)]
pub struct Engine {
    vtable: EngineVTable,
    source: String,
}

impl Engine {
    /// Wrap a resolved table. `source` names the loader, for logs.
    pub fn new(vtable: EngineVTable, source: impl Into<String>) -> Self {
        Self {
            vtable,
            source: source.into(),
        }
    }

    /// Name of the loader that produced this engine.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The engine's predicate table.
    pub fn vtable(&self) -> &EngineVTable {
        &self.vtable
    }

    /// Engine float predicate.
    #[inline]
    pub fn is_valid_float(&self, value: f32) -> bool {
        (self.vtable.is_valid_float)(value)
    }

    /// Engine vector predicate.
    #[inline]
    pub fn is_valid_vec2(&self, v: RawVec2) -> bool {
        (self.vtable.is_valid_vec2)(v)
    }

    /// Engine rotation predicate.
    #[inline]
    pub fn is_valid_rotation(&self, q: RawRot) -> bool {
        (self.vtable.is_valid_rotation)(q)
    }
}

/// Initialize-once holder for an [`Engine`].
///
/// Concurrent initializers serialize on a mutex so a loader runs at most
/// once per successful initialization. Readers never lock.
#[derive(Debug)]
pub struct EngineSlot {
    engine: OnceLock<Engine>,
    init_lock: Mutex<()>,
}

impl EngineSlot {
    /// An empty slot.
    pub const fn new() -> Self {
        Self {
            engine: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// Install an engine from `loader` unless one is already installed.
    ///
    /// Idempotent: later calls return the existing engine without running
    /// their loader. A failing loader leaves the slot empty.
    pub fn init(&self, loader: &dyn EngineLoader) -> Result<&Engine, EngineError> {
        if let Some(engine) = self.engine.get() {
            tracing::debug!(
                engine = engine.source(),
                requested = loader.name(),
                "native engine already initialized"
            );
            return Ok(engine);
        }

        // The guarded value is `()`, so a poisoned lock carries no broken state.
        let _guard = self
            .init_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(engine) = self.engine.get() {
            return Ok(engine);
        }

        let vtable = loader.load().map_err(|e| {
            tracing::error!(loader = loader.name(), error = %e, "native engine failed to load");
            e
        })?;
        let engine = self
            .engine
            .get_or_init(|| Engine::new(vtable, loader.name()));
        tracing::info!(engine = engine.source(), "native engine ready");
        Ok(engine)
    }

    /// The installed engine, if any.
    pub fn get(&self) -> Option<&Engine> {
        self.engine.get()
    }

    /// Whether an engine is installed.
    pub fn is_ready(&self) -> bool {
        self.engine.get().is_some()
    }
}

impl Default for EngineSlot {
    fn default() -> Self {
        Self::new()
    }
}

static ENGINE: EngineSlot = EngineSlot::new();

/// Install the process-wide engine from `loader`. See [`EngineSlot::init`].
pub fn init(loader: &dyn EngineLoader) -> Result<&'static Engine, EngineError> {
    ENGINE.init(loader)
}

/// Install the reference engine unless an engine is already installed.
pub fn ensure_ready() -> &'static Engine {
    match ENGINE.init(&StaticEngine) {
        Ok(engine) => engine,
        // StaticEngine::load is infallible; a failure here means a loader
        // contract was broken, and continuing would reach the gateway
        // without an engine.
        Err(e) => abort_not_ready(&e.to_string()),
    }
}

/// The process-wide engine, if one is installed.
pub fn try_engine() -> Option<&'static Engine> {
    ENGINE.get()
}

/// The process-wide engine.
///
/// Aborts the process if no engine has been installed: validity checks
/// have no meaningful answer without one.
pub fn engine() -> &'static Engine {
    match ENGINE.get() {
        Some(engine) => engine,
        None => abort_not_ready("no engine installed; call planar_ffi::init first"),
    }
}

fn abort_not_ready(reason: &str) -> ! {
    tracing::error!(reason, "native engine not ready, aborting");
    eprintln!("planar: native engine not ready: {reason}");
    std::process::abort()
}
