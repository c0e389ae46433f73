use std::sync::atomic::{AtomicBool, Ordering};

/// Initialization that must happen at most once per process, recorded
/// as explicit state on the composition root rather than in ambient
/// globals.
#[derive(Debug, Default)]
pub struct StartupState {
    assets_materialized: AtomicBool,
}

impl StartupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assets_materialized(&self) -> bool {
        self.assets_materialized.load(Ordering::Acquire)
    }

    /// Claim the materialization slot. Returns true for the caller that
    /// gets to run it; every later caller sees false.
    pub fn claim_assets_materialization(&self) -> bool {
        !self.assets_materialized.swap(true, Ordering::AcqRel)
    }
}
