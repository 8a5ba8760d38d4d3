use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::store::StoreError;
use crate::store::{GiveawayRecord, GiveawayStore};

/// Flat-file giveaway store.
///
/// Keeps every pending record in one JSON object mapping message id to record.
/// The whole file is read and rewritten on each mutation; a mutex serializes
/// every operation, readers included, so two lifecycle tasks cannot interleave
/// their read-modify-write cycles and no reader can observe a half-written
/// file. A missing file reads as an empty map.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> Result<HashMap<String, GiveawayRecord>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_all(&self, all: &HashMap<String, GiveawayRecord>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_vec_pretty(all)?;
        tokio::fs::write(&self.path, json).await?;

        Ok(())
    }
}

#[async_trait]
impl GiveawayStore for FileStore {
    async fn put(&self, record: &GiveawayRecord) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;

        let mut all = self.read_all().await?;
        all.insert(record.message_id.clone(), record.clone());
        self.write_all(&all).await
    }

    async fn get(&self, message_id: &str) -> Result<Option<GiveawayRecord>, StoreError> {
        let _guard = self.lock.lock().await;

        let all = self.read_all().await?;

        Ok(all.get(message_id).cloned())
    }

    async fn delete(&self, message_id: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;

        let mut all = self.read_all().await?;
        if all.remove(message_id).is_some() {
            self.write_all(&all).await?;
        }

        Ok(())
    }

    async fn list(&self) -> Result<Vec<GiveawayRecord>, StoreError> {
        let _guard = self.lock.lock().await;

        let all = self.read_all().await?;

        Ok(all.into_values().collect())
    }
}
