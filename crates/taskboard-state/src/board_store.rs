use std::mem;

use taskboard_core::{
    LogEntry, Stamper, SystemStamper, TaskboardError, TaskboardResult,
    DEFAULT_ACTIVITY_DISPLAY_LIMIT,
};
use taskboard_domain::{
    derive_view, move_action_for_drop, reduce_with, Action, BoardState, BoardView, Task,
    TaskDraft, TaskStatus, TaskUpdate, ViewQuery,
};
use taskboard_persistence::BoardPersistence;

/// Owns the live board and keeps the stored record in step with it.
///
/// All changes go through [`BoardStore::dispatch`], which runs the reducer and
/// then saves. Saving is suppressed until [`BoardStore::hydrate`] has run so
/// the empty starting board never overwrites a stored one.
pub struct BoardStore<S: Stamper = SystemStamper> {
    state: BoardState,
    persistence: BoardPersistence,
    stamper: S,
    hydrated: bool,
    activity_display_limit: usize,
}

impl BoardStore<SystemStamper> {
    pub fn new(persistence: BoardPersistence) -> Self {
        Self::with_stamper(persistence, SystemStamper)
    }
}

impl<S: Stamper> BoardStore<S> {
    pub fn with_stamper(persistence: BoardPersistence, stamper: S) -> Self {
        Self {
            state: BoardState::default(),
            persistence,
            stamper,
            hydrated: false,
            activity_display_limit: DEFAULT_ACTIVITY_DISPLAY_LIMIT,
        }
    }

    pub fn with_activity_display_limit(mut self, limit: usize) -> Self {
        self.activity_display_limit = limit;
        self
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Load the stored board once. Returns whether a stored board was found.
    pub async fn hydrate(&mut self) -> bool {
        if self.hydrated {
            return false;
        }

        let loaded = match self.persistence.load().await {
            Some(stored) => {
                self.apply(Action::SetState(stored));
                true
            }
            None => false,
        };
        self.hydrated = true;
        tracing::info!(
            "Board hydrated ({} tasks, stored record: {})",
            self.state.tasks.len(),
            loaded
        );
        loaded
    }

    /// Reduce `action` into the board and save the result.
    ///
    /// The in-memory board keeps the change even when the save fails; the
    /// save error is returned to the caller.
    pub async fn dispatch(&mut self, action: Action) -> TaskboardResult<()> {
        self.apply(action);
        if !self.hydrated {
            tracing::debug!("Skipping save before hydration");
            return Ok(());
        }
        self.persistence.save(&self.state).await
    }

    fn apply(&mut self, action: Action) {
        tracing::debug!("Dispatching {}", action.kind());
        let current = mem::take(&mut self.state);
        self.state = reduce_with(current, action, &mut self.stamper);
    }

    pub fn task(&self, id: &str) -> TaskboardResult<&Task> {
        self.state
            .find_task(id)
            .ok_or_else(|| TaskboardError::NotFound(format!("Task {}", id)))
    }

    pub async fn add_task(&mut self, draft: TaskDraft) -> TaskboardResult<Task> {
        validate_title(&draft.title)?;
        self.dispatch(Action::AddTask(draft)).await?;
        self.state
            .tasks
            .last()
            .cloned()
            .ok_or_else(|| TaskboardError::Internal("Added task is missing".to_string()))
    }

    pub async fn update_task(&mut self, id: &str, updates: TaskUpdate) -> TaskboardResult<Task> {
        self.task(id)?;
        if updates.is_empty() {
            return Err(TaskboardError::Validation(
                "No fields to update".to_string(),
            ));
        }
        if let Some(title) = &updates.title {
            validate_title(title)?;
        }
        if let Some(status) = updates.status.as_ref().filter(|s| !s.is_column()) {
            return Err(TaskboardError::Validation(format!(
                "Invalid status: {}. Use todo, doing or done",
                status
            )));
        }

        self.dispatch(Action::UpdateTask {
            id: id.to_string(),
            updates,
        })
        .await?;
        self.task(id).cloned()
    }

    pub async fn move_task(&mut self, id: &str, status: TaskStatus) -> TaskboardResult<Task> {
        self.task(id)?;
        if !status.is_column() {
            return Err(TaskboardError::Validation(format!(
                "Invalid status: {}. Use todo, doing or done",
                status
            )));
        }

        self.dispatch(Action::MoveTask {
            id: id.to_string(),
            new_status: status,
        })
        .await?;
        self.task(id).cloned()
    }

    pub async fn delete_task(&mut self, id: &str) -> TaskboardResult<Task> {
        let removed = self.task(id)?.clone();
        self.dispatch(Action::DeleteTask(id.to_string())).await?;
        Ok(removed)
    }

    pub async fn reset(&mut self) -> TaskboardResult<()> {
        self.dispatch(Action::ResetBoard).await
    }

    /// Apply a drop of `active_id` onto `target_id`. Returns the new status,
    /// or `None` when the drop moves nothing.
    pub async fn drop_task(
        &mut self,
        active_id: &str,
        target_id: Option<&str>,
    ) -> TaskboardResult<Option<TaskStatus>> {
        match move_action_for_drop(active_id, target_id, &self.state.tasks) {
            Some(action) => {
                let status = match &action {
                    Action::MoveTask { new_status, .. } => Some(new_status.clone()),
                    _ => None,
                };
                self.dispatch(action).await?;
                Ok(status)
            }
            None => {
                tracing::debug!("Drop of {} onto {:?} changes nothing", active_id, target_id);
                Ok(None)
            }
        }
    }

    pub fn view(&self, query: &ViewQuery) -> BoardView<'_> {
        derive_view(&self.state.tasks, query)
    }

    /// The newest entries, up to the configured display limit.
    pub fn recent_activity(&self) -> &[LogEntry] {
        self.state.recent_activity(self.activity_display_limit)
    }
}

fn validate_title(title: &str) -> TaskboardResult<()> {
    if title.trim().is_empty() {
        return Err(TaskboardError::Validation(
            "Task title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use std::sync::Arc;
    use taskboard_core::SequentialStamper;
    use taskboard_domain::{PriorityFilter, TaskPriority};
    use taskboard_persistence::{
        FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, BOARD_STATE_KEY,
    };

    mock! {
        pub Store {}

        #[async_trait]
        impl KeyValueStore for Store {
            async fn get(&self, key: &str) -> TaskboardResult<Option<String>>;
            async fn set(&self, key: &str, value: &str) -> TaskboardResult<()>;
            async fn remove(&self, key: &str) -> TaskboardResult<()>;
        }
    }

    fn store_over(records: Arc<dyn KeyValueStore>) -> BoardStore<SequentialStamper> {
        BoardStore::with_stamper(
            BoardPersistence::new(records),
            SequentialStamper::new("t"),
        )
    }

    async fn hydrated() -> (Arc<MemoryKeyValueStore>, BoardStore<SequentialStamper>) {
        let records = Arc::new(MemoryKeyValueStore::new());
        let mut store = store_over(records.clone());
        store.hydrate().await;
        (records, store)
    }

    #[tokio::test]
    async fn test_no_save_before_hydration() {
        let records = Arc::new(MemoryKeyValueStore::with_record(
            BOARD_STATE_KEY,
            r#"{"tasks":[],"activityLog":[{"id":"x","action":"kept","timestamp":"2024-01-01T00:00:00Z"}]}"#,
        ));
        let mut store = store_over(records.clone());

        store.dispatch(Action::ResetBoard).await.unwrap();
        let raw = records.get(BOARD_STATE_KEY).await.unwrap().unwrap();
        assert!(raw.contains("kept"));

        assert!(store.hydrate().await);
        assert_eq!(store.state().activity_log[0].action, "kept");
        assert!(!store.hydrate().await);
    }

    #[tokio::test]
    async fn test_hydrate_without_record_starts_empty() {
        let (records, store) = hydrated().await;
        assert!(store.is_hydrated());
        assert_eq!(store.state(), &BoardState::default());
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_persists_after_hydration() {
        let (records, mut store) = hydrated().await;

        let task = store.add_task(TaskDraft::new("Write spec")).await.unwrap();
        assert_eq!(task.status, TaskStatus::Todo);

        let reopened = BoardPersistence::new(records).load().await.unwrap();
        assert_eq!(&reopened, store.state());
    }

    #[tokio::test]
    async fn test_state_survives_restart_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let id = {
            let mut store = store_over(Arc::new(FileKeyValueStore::new(dir.path())));
            store.hydrate().await;
            let task = store.add_task(TaskDraft::new("Persisted")).await.unwrap();
            store.move_task(&task.id, TaskStatus::Done).await.unwrap();
            task.id
        };

        let mut store = store_over(Arc::new(FileKeyValueStore::new(dir.path())));
        store.hydrate().await;
        assert_eq!(store.task(&id).unwrap().status, TaskStatus::Done);
        assert_eq!(store.state().activity_log.len(), 2);
    }

    #[tokio::test]
    async fn test_typed_ops_validate() {
        let (_, mut store) = hydrated().await;

        let err = store.add_task(TaskDraft::new("   ")).await.unwrap_err();
        assert!(matches!(err, TaskboardError::Validation(_)));

        let err = store
            .move_task("missing", TaskStatus::Done)
            .await
            .unwrap_err();
        assert!(matches!(err, TaskboardError::NotFound(_)));

        let task = store.add_task(TaskDraft::new("Real")).await.unwrap();
        let err = store
            .move_task(&task.id, TaskStatus::from("blocked"))
            .await
            .unwrap_err();
        assert!(matches!(err, TaskboardError::Validation(_)));

        let err = store
            .update_task(&task.id, TaskUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TaskboardError::Validation(_)));

        let err = store
            .update_task(
                &task.id,
                TaskUpdate {
                    status: Some(TaskStatus::from("blocked")),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, TaskboardError::Validation(_)));

        let err = store.delete_task("missing").await.unwrap_err();
        assert!(matches!(err, TaskboardError::NotFound(_)));

        // Rejected operations leave no log entries behind
        assert_eq!(store.state().activity_log.len(), 1);
    }

    #[tokio::test]
    async fn test_raw_dispatch_stays_lenient() {
        let (_, mut store) = hydrated().await;
        store
            .dispatch(Action::DeleteTask("ghost".to_string()))
            .await
            .unwrap();
        assert_eq!(
            store.state().activity_log[0].action,
            "Task \"Unknown\" deleted"
        );
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let (_, mut store) = hydrated().await;
        let task = store.add_task(TaskDraft::new("Draft")).await.unwrap();

        let updated = store
            .update_task(
                &task.id,
                TaskUpdate {
                    title: Some("Final".to_string()),
                    priority: Some(TaskPriority::High),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Final");
        assert_eq!(updated.priority, TaskPriority::High);

        let removed = store.delete_task(&task.id).await.unwrap();
        assert_eq!(removed.title, "Final");
        assert!(store.state().tasks.is_empty());
        assert_eq!(store.state().activity_log[0].action, "Task \"Final\" deleted");
    }

    #[tokio::test]
    async fn test_drop_task() {
        let (_, mut store) = hydrated().await;
        let a = store.add_task(TaskDraft::new("A")).await.unwrap();
        let b = store.add_task(TaskDraft::new("B")).await.unwrap();
        store.move_task(&b.id, TaskStatus::Doing).await.unwrap();
        let log_len = store.state().activity_log.len();

        let moved = store.drop_task(&a.id, Some(b.id.as_str())).await.unwrap();
        assert_eq!(moved, Some(TaskStatus::Doing));
        assert_eq!(store.task(&a.id).unwrap().status, TaskStatus::Doing);

        let unchanged = store.drop_task(&a.id, Some("doing-column")).await.unwrap();
        assert_eq!(unchanged, None);
        assert_eq!(store.state().activity_log.len(), log_len + 1);
    }

    #[tokio::test]
    async fn test_view_and_recent_activity() {
        let (_, store) = hydrated().await;
        let mut store = store.with_activity_display_limit(2);
        store
            .add_task(TaskDraft::new("Alpha").with_priority(TaskPriority::High))
            .await
            .unwrap();
        store.add_task(TaskDraft::new("Beta")).await.unwrap();
        store.add_task(TaskDraft::new("Gamma")).await.unwrap();

        let view = store.view(&ViewQuery::new().with_priority(PriorityFilter::Only(TaskPriority::High)));
        assert_eq!(view.todo.len(), 1);
        assert_eq!(view.todo[0].title, "Alpha");

        let recent = store.recent_activity();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].action, "Task \"Gamma\" created");
        assert_eq!(store.state().activity_log.len(), 3);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_memory_state() {
        let mut records = MockStore::new();
        records.expect_get().returning(|_| Ok(None));
        records
            .expect_set()
            .returning(|_, _| Err(TaskboardError::Internal("quota exceeded".to_string())));

        let mut store = store_over(Arc::new(records));
        store.hydrate().await;

        let err = store
            .dispatch(Action::AddTask(TaskDraft::new("Unsaved")))
            .await
            .unwrap_err();
        assert!(matches!(err, TaskboardError::Internal(_)));
        assert_eq!(store.state().tasks.len(), 1);
    }
}
