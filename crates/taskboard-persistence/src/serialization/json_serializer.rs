use crate::traits::Serializer;
use taskboard_core::{TaskboardError, TaskboardResult};

/// Compact JSON, matching what a browser's `JSON.stringify` would store.
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync> Serializer<T>
    for JsonSerializer
{
    fn serialize(&self, data: &T) -> TaskboardResult<String> {
        serde_json::to_string(data).map_err(|e| TaskboardError::Serialization(e.to_string()))
    }

    fn deserialize(&self, raw: &str) -> TaskboardResult<T> {
        serde_json::from_str(raw).map_err(|e| TaskboardError::Serialization(e.to_string()))
    }
}
