//! Announcement channel collaborator.
//!
//! The giveaway service talks to Discord only through the
//! [`AnnouncementChannel`] trait: publish the announcement, attach the entry
//! reaction, read back who entered, and post the conclusion messages. The
//! production implementation is the Serenity adapter in [`discord`]; tests
//! substitute an in-memory mock.

pub mod discord;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::channel::ChannelError;

/// Content of a giveaway announcement.
#[derive(Clone, Debug)]
pub struct GiveawayAnnouncement {
    pub prize: String,
    pub winners: i32,
    pub ends_at: DateTime<Utc>,
    pub host_id: u64,
}

/// Channel operations the giveaway lifecycle needs.
///
/// All ids are raw Discord snowflakes; implementations own the conversion to
/// their client library's id types.
#[async_trait]
pub trait AnnouncementChannel: Send + Sync {
    /// Returns whether the channel can be fetched at all.
    ///
    /// `start` calls this before publishing so an unresolvable destination
    /// fails without side effects.
    async fn resolve(&self, channel_id: u64) -> bool;

    /// Publishes the announcement and attaches the entry reaction.
    ///
    /// Returns the id of the published message, which becomes the giveaway's
    /// primary key.
    async fn announce(
        &self,
        channel_id: u64,
        announcement: &GiveawayAnnouncement,
    ) -> Result<u64, ChannelError>;

    /// Fetches the distinct non-bot users who applied the entry reaction.
    async fn fetch_entrants(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<Vec<u64>, ChannelError>;

    /// Posts the "no valid entries" notice for a giveaway nobody entered.
    async fn post_no_entries(&self, channel_id: u64) -> Result<(), ChannelError>;

    /// Posts the conclusion message listing the prize and drawn winners.
    async fn post_result(
        &self,
        channel_id: u64,
        prize: &str,
        winner_ids: &[u64],
    ) -> Result<(), ChannelError>;
}
