use super::{FileStore, StoreAction, decode_collection};
use crate::core::{DeskError, FileRecord, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

/// Degraded-mode store: the whole collection in one JSON file.
///
/// CREATE prepends, UPDATE replaces by `FILE_ID`, DELETE removes by
/// `FILE_ID`; the file is rewritten in full after each write.
pub struct LocalFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl LocalFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<FileRecord>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(DeskError::Storage(format!(
                    "failed to read '{}': {}",
                    self.path.display(),
                    err
                )));
            }
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        decode_collection(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    fn describe(&self) -> String {
        format!("local file {}", self.path.display())
    }

    async fn fetch_all(&self) -> Result<Vec<FileRecord>> {
        self.read_all().await
    }

    async fn persist(&self, record: &FileRecord, action: StoreAction) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read_all().await?;

        match action {
            StoreAction::Create => records.insert(0, record.clone()),
            StoreAction::Update => {
                if let Some(slot) = records.iter_mut().find(|r| r.id() == record.id()) {
                    *slot = record.clone();
                }
            }
            StoreAction::Delete => records.retain(|r| r.id() != record.id()),
        }

        let bytes = serde_json::to_vec_pretty(&records)?;
        atomic_write(&self.path, &bytes).await?;
        tracing::debug!(%action, file_id = record.id(), total = records.len(), "local store rewritten");
        Ok(())
    }
}

pub(crate) async fn atomic_write(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(|err| {
            DeskError::Storage(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                err
            ))
        })?;
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes).await.map_err(|err| {
        DeskError::Storage(format!("failed to write '{}': {}", tmp.display(), err))
    })?;

    fs::rename(&tmp, path).await.map_err(|err| {
        DeskError::Storage(format!(
            "failed to move '{}' to '{}': {}",
            tmp.display(),
            path.display(),
            err
        ))
    })?;
    Ok(())
}
