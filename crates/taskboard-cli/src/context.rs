use std::path::{Path, PathBuf};
use std::sync::Arc;

use taskboard_core::{AppConfig, TaskboardError};
use taskboard_persistence::{BoardPersistence, FileKeyValueStore, KeyValueStore};
use taskboard_state::{AuthSession, BoardStore, StaticCredentials};

/// Everything one CLI invocation (or one shell session) works against.
///
/// Both the board store and the login session share the same record store,
/// built once here and passed in.
pub struct CliContext {
    pub board: BoardStore,
    pub session: AuthSession,
    data_dir: PathBuf,
}

impl CliContext {
    pub async fn open(data_dir: Option<PathBuf>, config: AppConfig) -> anyhow::Result<Self> {
        let data_dir = data_dir
            .or_else(|| config.effective_data_dir())
            .ok_or_else(|| anyhow::anyhow!("No data directory; pass --data-dir"))?;
        tracing::debug!("Using data directory {}", data_dir.display());

        let records: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(&data_dir));
        let persistence =
            BoardPersistence::new(records.clone()).with_log_cap(config.max_persisted_log_entries);
        let credentials = Arc::new(StaticCredentials::from(config.effective_credentials()));

        let mut board = BoardStore::new(persistence)
            .with_activity_display_limit(config.effective_activity_display_limit());
        let mut session = AuthSession::new(records, credentials);

        session.resolve().await;
        board.hydrate().await;

        Ok(Self {
            board,
            session,
            data_dir,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn require_auth(&self) -> Result<(), TaskboardError> {
        self.session.require_authenticated()
    }
}
