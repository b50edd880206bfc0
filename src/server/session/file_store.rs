use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use dioxus_logger::tracing;
use time::OffsetDateTime;
use tokio::fs;
use tower_sessions::{
    session::{Id, Record},
    session_store, ExpiredDeletion, SessionStore,
};

const RECORD_EXTENSION: &str = "json";

/// Session store keeping one JSON file per session in a directory.
///
/// Records are written to a temporary file and renamed into place so a concurrent
/// reader never observes a partially written session. Expired records are treated as
/// missing on load and removed by [`ExpiredDeletion::delete_expired`].
#[derive(Clone, Debug)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, id: &Id) -> PathBuf {
        self.dir.join(format!("{}.{}", id, RECORD_EXTENSION))
    }

    async fn read_record(path: &Path) -> session_store::Result<Option<Record>> {
        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(session_store::Error::Backend(e.to_string())),
        };

        let record = serde_json::from_slice(&bytes)
            .map_err(|e| session_store::Error::Decode(e.to_string()))?;

        Ok(Some(record))
    }

    async fn remove_file(path: &Path) -> session_store::Result<()> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(session_store::Error::Backend(e.to_string())),
        }
    }
}

fn is_expired(record: &Record) -> bool {
    record.expiry_date <= OffsetDateTime::now_utc()
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        while fs::try_exists(self.record_path(&record.id))
            .await
            .map_err(|e| session_store::Error::Backend(e.to_string()))?
        {
            record.id = Id::default();
        }

        self.save(record).await
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        let bytes =
            serde_json::to_vec(record).map_err(|e| session_store::Error::Encode(e.to_string()))?;

        let path = self.record_path(&record.id);
        let tmp_path = self.dir.join(format!(
            ".{}.{:016x}.tmp",
            record.id,
            rand::random::<u64>()
        ));

        fs::write(&tmp_path, bytes)
            .await
            .map_err(|e| session_store::Error::Backend(e.to_string()))?;

        if let Err(e) = fs::rename(&tmp_path, &path).await {
            let _ = fs::remove_file(&tmp_path).await;

            return Err(session_store::Error::Backend(e.to_string()));
        }

        Ok(())
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let path = self.record_path(session_id);

        match Self::read_record(&path).await? {
            Some(record) if is_expired(&record) => {
                Self::remove_file(&path).await?;

                Ok(None)
            }
            record => Ok(record),
        }
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        Self::remove_file(&self.record_path(session_id)).await
    }
}

#[async_trait]
impl ExpiredDeletion for FileSessionStore {
    async fn delete_expired(&self) -> session_store::Result<()> {
        let mut entries = fs::read_dir(&self.dir)
            .await
            .map_err(|e| session_store::Error::Backend(e.to_string()))?;

        let mut deleted = 0;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| session_store::Error::Backend(e.to_string()))?
        {
            let path = entry.path();

            if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }

            let expired = match Self::read_record(&path).await {
                Ok(Some(record)) => is_expired(&record),
                Ok(None) => false,
                Err(e) => {
                    tracing::warn!("Removing unreadable session file {}: {}", path.display(), e);
                    true
                }
            };

            if expired {
                Self::remove_file(&path).await?;
                deleted += 1;
            }
        }

        if deleted > 0 {
            tracing::info!("Deleted {} expired sessions", deleted);
        }

        Ok(())
    }
}
