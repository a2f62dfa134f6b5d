//! Sample store collaborator: string-keyed lookup of stored trend series.

use std::collections::HashMap;

use eyre::{Result, WrapErr};
use parking_lot::RwLock;
use tracing::warn;

use crate::data_types::TrendSeries;

/// Namespace prepended to instrument codes to form storage keys.
pub const KEY_PREFIX: &str = "fundTrendData:";

pub fn storage_key(code: &str) -> String {
    format!("{KEY_PREFIX}{code}")
}

/// Read side of a key-value store holding serialized series.
pub trait SampleStore {
    fn get(&self, key: &str) -> Option<String>;
}

/// Thread-safe in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.write().insert(key.into(), value.into());
    }

    /// Serializes `series` under the namespaced key for `code`.
    pub fn put_series(&self, code: &str, series: &TrendSeries) -> Result<()> {
        let raw = serde_json::to_string(series).wrap_err("failed to encode series")?;
        self.insert(storage_key(code), raw);
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.entries.write().remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl SampleStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }
}

pub fn decode_series(raw: &str) -> Result<TrendSeries> {
    serde_json::from_str(raw).wrap_err("stored series is not a valid trend entry")
}

/// Reads the series for `code`, keeping the `max_points` most recent samples.
///
/// Missing or undecodable entries yield the empty series.
pub fn load_series(store: &dyn SampleStore, code: &str, max_points: usize) -> TrendSeries {
    if code.is_empty() {
        return TrendSeries::empty();
    }
    let key = storage_key(code);
    let Some(raw) = store.get(&key) else {
        return TrendSeries::empty();
    };
    if raw.is_empty() {
        return TrendSeries::empty();
    }

    match decode_series(&raw) {
        Ok(mut series) => {
            series.truncate_front(max_points);
            series
        }
        Err(e) => {
            warn!(key = %key, error = %e, "discarding corrupt trend entry");
            TrendSeries::empty()
        }
    }
}
