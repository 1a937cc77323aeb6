//! In-memory metric storage.
//!
//! Two independent namespaces:
//! - `gauge name -> f64` (overwrite)
//! - `counter name -> i64` (accumulate)
//!
//! Each map sits behind its own `RwLock`, so a gauge write never waits on a
//! counter write. Guards are dropped before returning; nothing here awaits.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::protocol::MetricUpdate;

/// Process-wide metric store. Construct once and share via `Arc`.
#[derive(Debug, Default)]
pub struct MemStorage {
    gauges: RwLock<HashMap<String, f64>>,
    counters: RwLock<HashMap<String, i64>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the gauge value for `name`.
    pub fn set_gauge(&self, name: &str, value: f64) {
        // A writer that panicked cannot leave a half-written f64 behind,
        // so a poisoned map is still consistent.
        let mut gauges = self.gauges.write().unwrap_or_else(PoisonError::into_inner);
        gauges.insert(name.to_string(), value);
        tracing::trace!(name, value, "gauge set");
    }

    /// Add `delta` to the counter for `name` (absent counts as 0).
    ///
    /// Overflow wraps instead of panicking.
    pub fn add_counter(&self, name: &str, delta: i64) {
        let mut counters = self.counters.write().unwrap_or_else(PoisonError::into_inner);
        let slot = counters.entry(name.to_string()).or_insert(0);
        *slot = slot.wrapping_add(delta);
        tracing::trace!(name, delta, total = *slot, "counter added");
    }

    pub fn get_gauge(&self, name: &str) -> Option<f64> {
        let gauges = self.gauges.read().unwrap_or_else(PoisonError::into_inner);
        gauges.get(name).copied()
    }

    pub fn get_counter(&self, name: &str) -> Option<i64> {
        let counters = self.counters.read().unwrap_or_else(PoisonError::into_inner);
        counters.get(name).copied()
    }

    /// Apply a decoded update: gauges overwrite, counters accumulate.
    pub fn apply(&self, update: &MetricUpdate) {
        match update {
            MetricUpdate::Gauge { name, value } => self.set_gauge(name, *value),
            MetricUpdate::Counter { name, delta } => self.add_counter(name, *delta),
        }
    }
}
