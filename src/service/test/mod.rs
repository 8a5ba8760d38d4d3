//! Giveaway service tests.
//!
//! Timing tests run on tokio's paused clock, so every mock here is purely
//! in-memory: no hidden I/O threads that could race the auto-advanced timers.
//! The database-backed store has its own tests under `crate::store::test`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::channel::{AnnouncementChannel, GiveawayAnnouncement};
use crate::error::channel::ChannelError;
use crate::error::store::StoreError;
use crate::service::giveaway::{GiveawayConfig, GiveawayService, StartGiveawayParams};
use crate::store::{GiveawayRecord, GiveawayStore};

mod start;

/// Everything the mock channel was asked to post, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Post {
    Announce {
        channel_id: u64,
        prize: String,
        winners: i32,
    },
    NoEntries {
        channel_id: u64,
    },
    Result {
        channel_id: u64,
        prize: String,
        winner_ids: Vec<u64>,
    },
}

/// In-memory announcement channel with toggleable failure modes.
#[derive(Default)]
pub struct MockChannel {
    pub entrants: Mutex<Vec<u64>>,
    pub posts: Mutex<Vec<Post>>,
    next_message_id: AtomicU64,
    pub unresolvable: AtomicBool,
    pub fail_publish: AtomicBool,
    pub fail_fetch: AtomicBool,
}

impl MockChannel {
    pub fn with_entrants(entrants: Vec<u64>) -> Self {
        let channel = Self::default();
        *channel.entrants.lock().unwrap() = entrants;
        channel
    }

    pub fn posts(&self) -> Vec<Post> {
        self.posts.lock().unwrap().clone()
    }

    fn discord_error() -> ChannelError {
        // Any serenity error works; url parsing gives us one without I/O.
        ChannelError::from(serenity::Error::Url("mock failure".to_string()))
    }
}

#[async_trait]
impl AnnouncementChannel for MockChannel {
    async fn resolve(&self, _channel_id: u64) -> bool {
        !self.unresolvable.load(Ordering::SeqCst)
    }

    async fn announce(
        &self,
        channel_id: u64,
        announcement: &GiveawayAnnouncement,
    ) -> Result<u64, ChannelError> {
        if self.fail_publish.load(Ordering::SeqCst) {
            return Err(Self::discord_error());
        }

        self.posts.lock().unwrap().push(Post::Announce {
            channel_id,
            prize: announcement.prize.clone(),
            winners: announcement.winners,
        });

        Ok(self.next_message_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn fetch_entrants(
        &self,
        _channel_id: u64,
        _message_id: u64,
    ) -> Result<Vec<u64>, ChannelError> {
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(Self::discord_error());
        }

        Ok(self.entrants.lock().unwrap().clone())
    }

    async fn post_no_entries(&self, channel_id: u64) -> Result<(), ChannelError> {
        self.posts
            .lock()
            .unwrap()
            .push(Post::NoEntries { channel_id });

        Ok(())
    }

    async fn post_result(
        &self,
        channel_id: u64,
        prize: &str,
        winner_ids: &[u64],
    ) -> Result<(), ChannelError> {
        self.posts.lock().unwrap().push(Post::Result {
            channel_id,
            prize: prize.to_string(),
            winner_ids: winner_ids.to_vec(),
        });

        Ok(())
    }
}

/// In-memory giveaway store for timing tests.
#[derive(Default)]
pub struct MemoryStore {
    pub records: Mutex<HashMap<String, GiveawayRecord>>,
}

#[async_trait]
impl GiveawayStore for MemoryStore {
    async fn put(&self, record: &GiveawayRecord) -> Result<(), StoreError> {
        self.records
            .lock()
            .unwrap()
            .insert(record.message_id.clone(), record.clone());

        Ok(())
    }

    async fn get(&self, message_id: &str) -> Result<Option<GiveawayRecord>, StoreError> {
        Ok(self.records.lock().unwrap().get(message_id).cloned())
    }

    async fn delete(&self, message_id: &str) -> Result<(), StoreError> {
        self.records.lock().unwrap().remove(message_id);

        Ok(())
    }

    async fn list(&self) -> Result<Vec<GiveawayRecord>, StoreError> {
        Ok(self.records.lock().unwrap().values().cloned().collect())
    }
}

/// Store whose every operation fails, for best-effort contract tests.
pub struct FailingStore;

fn store_down() -> StoreError {
    StoreError::Io(std::io::Error::other("store down"))
}

#[async_trait]
impl GiveawayStore for FailingStore {
    async fn put(&self, _record: &GiveawayRecord) -> Result<(), StoreError> {
        Err(store_down())
    }

    async fn get(&self, _message_id: &str) -> Result<Option<GiveawayRecord>, StoreError> {
        Err(store_down())
    }

    async fn delete(&self, _message_id: &str) -> Result<(), StoreError> {
        Err(store_down())
    }

    async fn list(&self) -> Result<Vec<GiveawayRecord>, StoreError> {
        Err(store_down())
    }
}

/// Builds a service over the given mocks with no default channel configured.
pub fn service(
    channel: &Arc<MockChannel>,
    store: &Arc<MemoryStore>,
) -> GiveawayService {
    GiveawayService::new(
        channel.clone(),
        store.clone(),
        GiveawayConfig::default(),
    )
}

/// Start parameters with sensible test defaults.
pub fn start_params(duration_spec: &str, winners: u32, prize: &str) -> StartGiveawayParams {
    StartGiveawayParams {
        origin_channel_id: 200,
        duration_spec: duration_spec.to_string(),
        winners,
        prize: prize.to_string(),
        host_id: 300,
    }
}
