//! Serialized row state and the key-value store it is kept in.
//!
//! The stored value is a JSON array with one object per row, mapping the
//! submitted field name (`student_id[]`) to its value.

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_SNAPSHOT_KEY: &str = "signupForm";

/// Opaque string storage, e.g. the browser's session storage.
pub trait SnapshotStore {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
    fn remove(&mut self, key: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(pub Vec<BTreeMap<String, String>>);

impl Snapshot {
    pub fn to_json(&self) -> Result<String, FormError> {
        serde_json::to_string(self).map_err(|e| FormError::Snapshot(e.to_string()))
    }

    pub fn from_json(raw: &str) -> Result<Self, FormError> {
        serde_json::from_str(raw).map_err(|e| FormError::Snapshot(e.to_string()))
    }
}

/// In-process store, used off-browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_json_shape() {
        let mut row = BTreeMap::new();
        row.insert("student_id[]".to_string(), "2024001".to_string());
        row.insert("fullname[]".to_string(), "山田".to_string());
        let snapshot = Snapshot(vec![row]);
        let json = snapshot.to_json().unwrap();
        assert_eq!(json, r#"[{"fullname[]":"山田","student_id[]":"2024001"}]"#);
        assert_eq!(Snapshot::from_json(&json).unwrap(), snapshot);
    }

    #[test]
    fn test_snapshot_rejects_malformed_json() {
        assert!(matches!(
            Snapshot::from_json("{not json"),
            Err(FormError::Snapshot(_))
        ));
        assert!(matches!(
            Snapshot::from_json(r#"{"a":"b"}"#),
            Err(FormError::Snapshot(_))
        ));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load("k").unwrap(), None);
        store.save("k", "v").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.load("k").unwrap(), None);
    }
}
