use async_trait::async_trait;
use taskboard_core::TaskboardResult;

/// String records addressed by key.
///
/// This is the whole storage contract the board needs: the board state and
/// the remembered login each live under one key. Implementations decide
/// where the bytes go.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// `None` when no record exists under `key`.
    async fn get(&self, key: &str) -> TaskboardResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> TaskboardResult<()>;

    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> TaskboardResult<()>;
}

/// Serialization strategy for stored records.
pub trait Serializer<T: Send + Sync>: Send + Sync {
    fn serialize(&self, data: &T) -> TaskboardResult<String>;

    fn deserialize(&self, raw: &str) -> TaskboardResult<T>;
}
