//! Giveaway persistence layer.
//!
//! A pending giveaway is persisted as a `GiveawayRecord` keyed by its
//! announcement message id. Two interchangeable backends implement the
//! `GiveawayStore` contract: a SeaORM database store and a flat JSON file
//! store. Which one runs is an explicit configuration choice (see
//! [`crate::config::StoreConfig`]).

pub mod database;
pub mod file;

#[cfg(test)]
mod test;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::store::StoreError;

/// Persisted state of a pending giveaway.
///
/// Records are immutable once written: `start` creates one, its conclusion
/// task deletes it, and nothing mutates it in between. A record existing in
/// the store is what marks the giveaway as pending.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiveawayRecord {
    /// Discord message id of the announcement; primary key.
    pub message_id: String,
    /// Channel the announcement was posted in.
    pub channel_id: String,
    /// Free-text prize description.
    pub prize: String,
    /// Number of winners to draw at conclusion.
    pub winners: i32,
    /// When the draw occurs.
    pub ends_at: DateTime<Utc>,
    /// User id of the host who started the giveaway.
    pub host_id: String,
}

/// Storage contract for pending giveaway records.
///
/// Each record has a single writer (its own lifecycle), so implementations
/// only need to serialize individual operations, not coordinate concurrent
/// writers of the same key.
#[async_trait]
pub trait GiveawayStore: Send + Sync {
    /// Persists a new record.
    async fn put(&self, record: &GiveawayRecord) -> Result<(), StoreError>;

    /// Fetches a record by announcement message id.
    async fn get(&self, message_id: &str) -> Result<Option<GiveawayRecord>, StoreError>;

    /// Removes a record. Removing an absent record is not an error.
    async fn delete(&self, message_id: &str) -> Result<(), StoreError>;

    /// Lists every pending record, for the boot-time reconciliation pass.
    async fn list(&self) -> Result<Vec<GiveawayRecord>, StoreError>;
}
