pub mod local;
pub mod remote;

pub use local::LocalFileStore;
pub use remote::SheetsStore;

use crate::config::{DeskConfig, StoreBackend};
use crate::core::{DeskError, FileRecord, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use std::sync::Arc;

/// Operation tag sent with every persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StoreAction {
    Create,
    Update,
    Delete,
}

impl StoreAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for StoreAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Store client - pluggable persistence for the case file collection.
///
/// Every write carries the complete record; there are no partial updates.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Short label for logs and the CLI banner
    fn describe(&self) -> String;

    /// The entire stored collection
    async fn fetch_all(&self) -> Result<Vec<FileRecord>>;

    /// Apply one record-level operation
    async fn persist(&self, record: &FileRecord, action: StoreAction) -> Result<()>;
}

/// Picks the store implementation once, from configuration.
pub fn open_store(config: &DeskConfig) -> Result<Arc<dyn FileStore>> {
    match config.backend()? {
        StoreBackend::Remote { endpoint } => {
            tracing::info!(%endpoint, "using sheet service store");
            Ok(Arc::new(SheetsStore::new(endpoint)))
        }
        StoreBackend::Local { path } => {
            tracing::warn!(
                path = %path.display(),
                "sheet endpoint not configured, using local fallback store"
            );
            Ok(Arc::new(LocalFileStore::new(path)))
        }
    }
}

/// Decodes a stored JSON array of record objects.
pub(crate) fn decode_collection(value: JsonValue) -> Result<Vec<FileRecord>> {
    match value {
        JsonValue::Array(rows) => rows.iter().map(FileRecord::from_json).collect(),
        other => Err(DeskError::Decode(format!(
            "expected an array of records, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_wire_names() {
        assert_eq!(serde_json::to_value(StoreAction::Create).unwrap(), json!("CREATE"));
        let action: StoreAction = serde_json::from_value(json!("DELETE")).unwrap();
        assert_eq!(action, StoreAction::Delete);
        assert!(serde_json::from_value::<StoreAction>(json!("delete")).is_err());
    }

    #[test]
    fn test_decode_collection_requires_array() {
        assert!(decode_collection(json!([])).unwrap().is_empty());
        let err = decode_collection(json!({"status": "success"})).unwrap_err();
        assert!(err.to_string().contains("an object"));
    }
}
