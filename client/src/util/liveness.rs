//! Per-view liveness flag.
//!
//! In-flight requests are never cancelled. A view installs a flag, and its
//! async tasks check it before writing results, so a response that lands
//! after the view unmounted is dropped.

#[cfg(test)]
#[path = "liveness_test.rs"]
mod liveness_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Flag tied to the current reactive owner; cleared in `on_cleanup`.
    pub fn install() -> Self {
        let flag = Self::new();
        let cleared = flag.clone();
        on_cleanup(move || cleared.kill());
        flag
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    fn kill(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}
