//! Runtime detection of the optional backends the overlay can use.
//!
//! Detection happens once per process; everything else branches on the
//! resulting [`CapabilityFlags`] and never on how a backend was found.

use once_cell::sync::OnceCell;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Env var that switches the gesture backend off at runtime.
pub const DISABLE_GESTURES_ENV: &str = "LOG_OVERLAY_DISABLE_GESTURES";

/// Cargo features that together make up the gesture backend.
pub const GESTURE_FEATURES: [&str; 2] = ["drag-gestures", "spring-animation"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilityFlags {
    pub gesture_backend_available: bool,
    pub clipboard_available: bool,
}

/// Attempts to bring up each optional backend.
pub trait BackendLoader {
    fn load_gesture_backend(&self) -> anyhow::Result<()>;
    fn load_clipboard(&self) -> anyhow::Result<()>;
}

/// Loader for the backends compiled into this binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBackends;

impl BackendLoader for SystemBackends {
    fn load_gesture_backend(&self) -> anyhow::Result<()> {
        let missing = missing_gesture_features();
        if !missing.is_empty() {
            anyhow::bail!("features not compiled in: {}", missing.join(", "));
        }
        if std::env::var_os(DISABLE_GESTURES_ENV).is_some() {
            anyhow::bail!("disabled through {DISABLE_GESTURES_ENV}");
        }
        Ok(())
    }

    fn load_clipboard(&self) -> anyhow::Result<()> {
        arboard::Clipboard::new()?;
        Ok(())
    }
}

/// Gesture backend features missing from this build.
pub fn missing_gesture_features() -> Vec<&'static str> {
    let mut missing = Vec::new();
    if !cfg!(feature = "drag-gestures") {
        missing.push(GESTURE_FEATURES[0]);
    }
    if !cfg!(feature = "spring-animation") {
        missing.push(GESTURE_FEATURES[1]);
    }
    missing
}

static CAPABILITIES: OnceCell<CapabilityFlags> = OnceCell::new();

/// Process-wide capability flags, probed on first use.
pub fn probe() -> CapabilityFlags {
    *CAPABILITIES.get_or_init(|| probe_with(&SystemBackends))
}

/// Probe `loader` without touching the process-wide cache.
pub fn probe_with(loader: &dyn BackendLoader) -> CapabilityFlags {
    let flags = CapabilityFlags {
        gesture_backend_available: attempt("gesture", || loader.load_gesture_backend()),
        clipboard_available: attempt("clipboard", || loader.load_clipboard()),
    };
    tracing::debug!(?flags, "capability probe finished");
    flags
}

fn attempt<F>(name: &str, load: F) -> bool
where
    F: FnOnce() -> anyhow::Result<()>,
{
    match catch_unwind(AssertUnwindSafe(load)) {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            tracing::info!("{name} backend unavailable: {e}");
            false
        }
        Err(_) => {
            tracing::info!("{name} backend panicked while loading");
            false
        }
    }
}
