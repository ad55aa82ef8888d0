use crate::serialization::JsonSerializer;
use crate::traits::{KeyValueStore, Serializer};
use std::sync::Arc;
use taskboard_core::{TaskboardError, TaskboardResult};
use taskboard_domain::BoardState;

/// Record key the board state is stored under.
pub const BOARD_STATE_KEY: &str = "boardState";

/// Loads and saves the whole [`BoardState`] as a single JSON record.
#[derive(Clone)]
pub struct BoardPersistence {
    store: Arc<dyn KeyValueStore>,
    max_log_entries: Option<usize>,
}

impl BoardPersistence {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            max_log_entries: None,
        }
    }

    /// Persist at most `limit` of the newest log entries. The in-memory log
    /// is not affected.
    pub fn with_log_cap(mut self, limit: Option<usize>) -> Self {
        self.max_log_entries = limit;
        self
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// The stored board, or `None` when there is no usable record.
    ///
    /// Malformed records and read failures are logged and reported as
    /// absent; the caller starts from an empty board.
    pub async fn load(&self) -> Option<BoardState> {
        let raw = match self.store.get(BOARD_STATE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No stored {} record", BOARD_STATE_KEY);
                return None;
            }
            Err(e) => {
                tracing::error!("Failed to read {}: {}", BOARD_STATE_KEY, e);
                return None;
            }
        };

        match decode(&raw) {
            Ok(state) => {
                tracing::info!(
                    "Loaded board with {} tasks and {} log entries",
                    state.tasks.len(),
                    state.activity_log.len()
                );
                Some(state)
            }
            Err(e) => {
                tracing::error!("Discarding stored {}: {}", BOARD_STATE_KEY, e);
                None
            }
        }
    }

    pub async fn save(&self, state: &BoardState) -> TaskboardResult<()> {
        let raw = match self.max_log_entries {
            Some(limit) if state.activity_log.len() > limit => {
                let mut capped = state.clone();
                capped.truncate_activity(limit);
                JsonSerializer.serialize(&capped)?
            }
            _ => JsonSerializer.serialize(state)?,
        };

        if let Err(e) = self.store.set(BOARD_STATE_KEY, &raw).await {
            tracing::error!("Failed to save {}: {}", BOARD_STATE_KEY, e);
            return Err(e);
        }
        Ok(())
    }
}

/// Both collections must be present as arrays before the typed decode runs,
/// so a record missing either one is rejected as a whole.
///
/// The typed decode is strict as well: one task with an unknown priority or
/// an unparseable date discards the whole record. A half-read board is never
/// handed to the store, since the next save would overwrite the stored copy
/// with it.
fn decode(raw: &str) -> TaskboardResult<BoardState> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| TaskboardError::Serialization(e.to_string()))?;

    for field in ["tasks", "activityLog"] {
        if !value.get(field).is_some_and(serde_json::Value::is_array) {
            return Err(TaskboardError::Serialization(format!(
                "`{}` is missing or not an array",
                field
            )));
        }
    }

    serde_json::from_value(value).map_err(|e| TaskboardError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FileKeyValueStore, MemoryKeyValueStore};
    use async_trait::async_trait;
    use mockall::mock;
    use taskboard_core::SequentialStamper;
    use taskboard_domain::{reduce_with, Action, TaskDraft, TaskStatus};
    use tempfile::tempdir;

    mock! {
        pub Store {}

        #[async_trait]
        impl KeyValueStore for Store {
            async fn get(&self, key: &str) -> TaskboardResult<Option<String>>;
            async fn set(&self, key: &str, value: &str) -> TaskboardResult<()>;
            async fn remove(&self, key: &str) -> TaskboardResult<()>;
        }
    }

    fn sample_state() -> BoardState {
        let mut stamper = SequentialStamper::new("t");
        let state = reduce_with(
            BoardState::new(),
            Action::AddTask(TaskDraft::new("Write spec")),
            &mut stamper,
        );
        let id = state.tasks[0].id.clone();
        reduce_with(
            state,
            Action::MoveTask {
                id,
                new_status: TaskStatus::Doing,
            },
            &mut stamper,
        )
    }

    fn memory(raw: &str) -> BoardPersistence {
        BoardPersistence::new(Arc::new(MemoryKeyValueStore::with_record(
            BOARD_STATE_KEY,
            raw,
        )))
    }

    #[tokio::test]
    async fn test_load_absent_is_none() {
        let persistence = BoardPersistence::new(Arc::new(MemoryKeyValueStore::new()));
        assert!(persistence.load().await.is_none());
    }

    #[tokio::test]
    async fn test_roundtrip() {
        let persistence = BoardPersistence::new(Arc::new(MemoryKeyValueStore::new()));
        let state = sample_state();

        persistence.save(&state).await.unwrap();
        assert_eq!(persistence.load().await, Some(state));
    }

    #[tokio::test]
    async fn test_roundtrip_through_files() {
        let dir = tempdir().unwrap();
        let persistence = BoardPersistence::new(Arc::new(FileKeyValueStore::new(dir.path())));
        let state = sample_state();

        persistence.save(&state).await.unwrap();

        let reopened = BoardPersistence::new(Arc::new(FileKeyValueStore::new(dir.path())));
        assert_eq!(reopened.load().await, Some(state));
    }

    #[tokio::test]
    async fn test_malformed_json_is_none() {
        assert!(memory("{not json").load().await.is_none());
        assert!(memory("[]").load().await.is_none());
        assert!(memory("null").load().await.is_none());
    }

    #[tokio::test]
    async fn test_missing_activity_log_is_rejected() {
        let persistence = memory(
            r#"{"tasks":[{"id":"a","title":"A","status":"todo","createdAt":"2024-01-01T00:00:00Z"}]}"#,
        );
        assert!(persistence.load().await.is_none());
    }

    #[tokio::test]
    async fn test_non_array_fields_are_rejected() {
        assert!(memory(r#"{"tasks":{},"activityLog":[]}"#).load().await.is_none());
        assert!(memory(r#"{"tasks":[],"activityLog":"x"}"#).load().await.is_none());
    }

    #[tokio::test]
    async fn test_unknown_priority_discards_board() {
        let persistence = memory(
            r#"{"tasks":[{"id":"a","title":"A","priority":"urgent","status":"todo","createdAt":"2024-01-01T00:00:00.000Z"}],"activityLog":[]}"#,
        );
        assert!(persistence.load().await.is_none());
    }

    #[tokio::test]
    async fn test_empty_arrays_load() {
        let state = memory(r#"{"tasks":[],"activityLog":[]}"#).load().await;
        assert_eq!(state, Some(BoardState::default()));
    }

    #[tokio::test]
    async fn test_log_cap_trims_persisted_copy_only() {
        let persistence =
            BoardPersistence::new(Arc::new(MemoryKeyValueStore::new())).with_log_cap(Some(1));
        let state = sample_state();
        assert_eq!(state.activity_log.len(), 2);

        persistence.save(&state).await.unwrap();
        let loaded = persistence.load().await.unwrap();

        assert_eq!(loaded.tasks, state.tasks);
        assert_eq!(loaded.activity_log, state.activity_log[..1].to_vec());
        assert_eq!(state.activity_log.len(), 2);
    }

    #[tokio::test]
    async fn test_read_failure_is_none() {
        let mut store = MockStore::new();
        store
            .expect_get()
            .returning(|_| Err(TaskboardError::Internal("disk gone".to_string())));

        let persistence = BoardPersistence::new(Arc::new(store));
        assert!(persistence.load().await.is_none());
    }

    #[tokio::test]
    async fn test_write_failure_is_returned() {
        let mut store = MockStore::new();
        store
            .expect_set()
            .withf(|key, _| key.to_string() == BOARD_STATE_KEY)
            .times(1)
            .returning(|_, _| Err(TaskboardError::Internal("quota exceeded".to_string())));

        let persistence = BoardPersistence::new(Arc::new(store));
        let err = persistence.save(&sample_state()).await.unwrap_err();
        assert!(matches!(err, TaskboardError::Internal(_)));
    }
}
