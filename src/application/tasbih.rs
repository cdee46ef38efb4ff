//! Persisted tasbih counter.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::port::outbound::storage::{KeyValueStore, TASBIH_KEY};

/// Count at which the completion message is shown.
pub const TASBIH_MILESTONE: u64 = 100;

/// Counter state after an increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TasbihTick {
    pub count: u64,
    /// This increment reached [`TASBIH_MILESTONE`].
    pub milestone: bool,
}

pub struct Tasbih {
    store: Arc<dyn KeyValueStore>,
}

impl Tasbih {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Current count; a missing or non-numeric value reads as 0.
    pub fn count(&self) -> Result<u64> {
        let Some(raw) = self.store.get(TASBIH_KEY)? else {
            return Ok(0);
        };
        Ok(raw.trim().parse().unwrap_or_else(|_| {
            warn!(value = %raw, "Ignoring non-numeric tasbih count");
            0
        }))
    }

    pub fn increment(&self) -> Result<TasbihTick> {
        self.add(1)
    }

    /// Add `times` in one step; the milestone fires if the count passes
    /// through 100.
    pub fn add(&self, times: u64) -> Result<TasbihTick> {
        let before = self.count()?;
        let count = before.saturating_add(times);
        self.store.set(TASBIH_KEY, &count.to_string())?;

        let milestone = before < TASBIH_MILESTONE && count >= TASBIH_MILESTONE;
        if milestone {
            info!(count, "Tasbih milestone reached");
        }
        Ok(TasbihTick { count, milestone })
    }

    pub fn reset(&self) -> Result<()> {
        self.store.set(TASBIH_KEY, "0")?;
        info!("Tasbih counter reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::storage::MemoryStore;

    fn tasbih_with(entries: &[(&str, &str)]) -> Tasbih {
        Tasbih::new(Arc::new(MemoryStore::with_entries(entries.iter().copied())))
    }

    #[test]
    fn starts_at_zero() {
        assert_eq!(tasbih_with(&[]).count().expect("count"), 0);
    }

    #[test]
    fn garbage_reads_as_zero() {
        assert_eq!(tasbih_with(&[(TASBIH_KEY, "abc")]).count().expect("count"), 0);
    }

    #[test]
    fn milestone_fires_once_at_one_hundred() {
        let tasbih = tasbih_with(&[(TASBIH_KEY, "98")]);

        let tick = tasbih.increment().expect("increment");
        assert_eq!(tick, TasbihTick { count: 99, milestone: false });

        let tick = tasbih.increment().expect("increment");
        assert_eq!(tick, TasbihTick { count: 100, milestone: true });

        let tick = tasbih.increment().expect("increment");
        assert!(!tick.milestone);
        assert_eq!(tick.count, 101);
    }

    #[test]
    fn bulk_add_crossing_one_hundred_is_a_milestone() {
        let tasbih = tasbih_with(&[(TASBIH_KEY, "90")]);
        let tick = tasbih.add(33).expect("add");
        assert_eq!(tick.count, 123);
        assert!(tick.milestone);
    }

    #[test]
    fn reset_persists_zero() {
        let tasbih = tasbih_with(&[(TASBIH_KEY, "57")]);
        tasbih.reset().expect("reset");
        assert_eq!(tasbih.count().expect("count"), 0);
        assert!(tasbih.increment().expect("increment").count == 1);
    }
}
