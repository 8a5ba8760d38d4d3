//! Giveaway lifecycle manager.
//!
//! Owns a giveaway from creation to conclusion: validates the duration,
//! publishes the announcement, persists the record, schedules the one-shot
//! conclusion, draws winners at expiry, publishes the result, and removes the
//! record. A record has exactly two states: pending (present in the store)
//! and concluded (absent). There is no cancellation.
//!
//! `start` surfaces its errors to the caller. The scheduled conclusion runs in
//! the background with nobody to report to, so every failure there is logged
//! and swallowed; that best-effort contract is deliberate and tested.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::Rng;

use crate::channel::{AnnouncementChannel, GiveawayAnnouncement};
use crate::duration::parse_duration;
use crate::error::giveaway::GiveawayError;
use crate::store::{GiveawayRecord, GiveawayStore};

/// Configuration the manager is constructed with. No ambient globals.
#[derive(Clone, Debug, Default)]
pub struct GiveawayConfig {
    /// Channel giveaways are announced in. When unset, announcements go to the
    /// channel the command originated from.
    pub default_channel_id: Option<u64>,
}

/// Parameters for starting a giveaway.
pub struct StartGiveawayParams {
    /// Channel the command was issued from; the fallback destination.
    pub origin_channel_id: u64,
    /// Human duration expression, e.g. "10s", "1h", "2d".
    pub duration_spec: String,
    /// Requested number of winners. Values below 1 are treated as 1; values
    /// beyond the stored range are capped.
    pub winners: u32,
    /// Free-text prize description.
    pub prize: String,
    /// User who started the giveaway.
    pub host_id: u64,
}

/// The giveaway lifecycle manager.
///
/// Cheap to clone; each scheduled conclusion task carries its own clone.
#[derive(Clone)]
pub struct GiveawayService {
    channel: Arc<dyn AnnouncementChannel>,
    store: Arc<dyn GiveawayStore>,
    config: GiveawayConfig,
}

impl GiveawayService {
    pub fn new(
        channel: Arc<dyn AnnouncementChannel>,
        store: Arc<dyn GiveawayStore>,
        config: GiveawayConfig,
    ) -> Self {
        Self {
            channel,
            store,
            config,
        }
    }

    /// Starts a giveaway and returns the announcement message id.
    ///
    /// Validation failures (`InvalidDuration`, `ChannelUnavailable`) and
    /// publish failures happen before any state exists, so they leave no
    /// record and no timer. A store failure after a successful publish is
    /// logged and swallowed: the announcement stays up and the conclusion
    /// timer still runs.
    ///
    /// # Errors
    /// - `GiveawayError::InvalidDuration` - duration expression did not parse
    ///   to a positive duration
    /// - `GiveawayError::ChannelUnavailable` - destination channel cannot be
    ///   fetched
    /// - `GiveawayError::Publish` - announcement creation failed
    pub async fn start(&self, params: StartGiveawayParams) -> Result<String, GiveawayError> {
        let delay = parse_duration(&params.duration_spec)
            .ok_or_else(|| GiveawayError::InvalidDuration(params.duration_spec.clone()))?;

        let channel_id = self
            .config
            .default_channel_id
            .unwrap_or(params.origin_channel_id);
        if !self.channel.resolve(channel_id).await {
            return Err(GiveawayError::ChannelUnavailable(channel_id));
        }

        let winners = i32::try_from(params.winners).unwrap_or(i32::MAX).max(1);
        let millis = i64::try_from(delay.as_millis()).unwrap_or(i64::MAX);
        let ends_at = Utc::now()
            .checked_add_signed(chrono::Duration::milliseconds(millis))
            .unwrap_or(chrono::DateTime::<Utc>::MAX_UTC);

        let announcement = GiveawayAnnouncement {
            prize: params.prize.clone(),
            winners,
            ends_at,
            host_id: params.host_id,
        };
        let message_id = self
            .channel
            .announce(channel_id, &announcement)
            .await
            .map_err(GiveawayError::Publish)?;

        let record = GiveawayRecord {
            message_id: message_id.to_string(),
            channel_id: channel_id.to_string(),
            prize: params.prize,
            winners,
            ends_at,
            host_id: params.host_id.to_string(),
        };

        // Best-effort: the announcement is already public, so a failed write
        // must not fail the command. The giveaway will not conclude in that
        // case, because conclusion requires a pending record.
        if let Err(e) = self.store.put(&record).await {
            tracing::warn!("Failed to persist giveaway {}: {}", record.message_id, e);
        }

        self.schedule_conclusion(record.clone(), delay);

        tracing::info!(
            "Started giveaway {} in channel {} ending at {}",
            record.message_id,
            record.channel_id,
            record.ends_at
        );

        Ok(record.message_id)
    }

    /// Re-schedules every pending record after a restart.
    ///
    /// In-memory timers die with the process; the store is what survives.
    /// Each pending record gets a fresh timer for its remaining delay, and
    /// past-due records conclude immediately.
    ///
    /// Returns the number of records re-scheduled.
    pub async fn reconcile(&self) -> Result<usize, GiveawayError> {
        let records = self.store.list().await?;
        let count = records.len();
        let now = Utc::now();

        for record in records {
            let delay = (record.ends_at - now).to_std().unwrap_or(Duration::ZERO);

            if delay.is_zero() {
                tracing::info!("Giveaway {} past due, concluding now", record.message_id);
            } else {
                tracing::info!("Rescheduling giveaway {} in {:?}", record.message_id, delay);
            }
            self.schedule_conclusion(record, delay);
        }

        Ok(count)
    }

    /// Registers the one-shot conclusion timer for a record.
    ///
    /// Exactly one timer exists per `start`; nothing re-arms it.
    fn schedule_conclusion(&self, record: GiveawayRecord, delay: Duration) {
        let service = self.clone();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            service.conclude(&record).await;
        });
    }

    /// Concludes a giveaway: draws winners, posts the result, deletes the record.
    ///
    /// Invoked by the scheduled timer, never by a user command. A record that
    /// is no longer pending makes this a no-op, so a stray second invocation
    /// cannot double-announce. Every failure in here is logged and swallowed
    /// by design: conclusion is a background task with no caller to surface
    /// errors to.
    pub async fn conclude(&self, record: &GiveawayRecord) {
        // The store's pending record is authoritative: absent means already
        // concluded (or never persisted), so there is nothing to draw.
        match self.store.get(&record.message_id).await {
            Ok(None) => {
                tracing::debug!("Giveaway {} already concluded", record.message_id);
                return;
            }
            Ok(Some(_)) => {}
            // A store outage should not stop the draw; the delete below will
            // also fail and log, leaving the record for the next reconcile.
            Err(e) => {
                tracing::warn!("Store read failed concluding {}: {}", record.message_id, e)
            }
        }

        let (channel_id, message_id) = match (
            record.channel_id.parse::<u64>(),
            record.message_id.parse::<u64>(),
        ) {
            (Ok(c), Ok(m)) => (c, m),
            _ => {
                tracing::warn!("Giveaway {} has malformed ids; dropping it", record.message_id);
                self.delete_record(&record.message_id).await;
                return;
            }
        };

        let entrants = match self.channel.fetch_entrants(channel_id, message_id).await {
            Ok(entrants) => entrants,
            Err(e) => {
                // Announcement deleted or unreachable. Still remove the record
                // so the store does not leak entries.
                let err = GiveawayError::ConclusionFetch(e);
                tracing::warn!("Giveaway {}: {}", record.message_id, err);
                self.delete_record(&record.message_id).await;
                return;
            }
        };

        if entrants.is_empty() {
            if let Err(e) = self.channel.post_no_entries(channel_id).await {
                tracing::warn!("Giveaway {}: failed to post notice: {}", record.message_id, e);
            }
            self.delete_record(&record.message_id).await;
            return;
        }

        let winner_ids = pick_winners(entrants, record.winners.max(1) as usize);
        if let Err(e) = self
            .channel
            .post_result(channel_id, &record.prize, &winner_ids)
            .await
        {
            tracing::warn!("Giveaway {}: failed to post result: {}", record.message_id, e);
        }

        self.delete_record(&record.message_id).await;

        tracing::info!(
            "Concluded giveaway {} with {} winner(s)",
            record.message_id,
            winner_ids.len()
        );
    }

    /// Best-effort record deletion for conclusion paths.
    async fn delete_record(&self, message_id: &str) {
        if let Err(e) = self.store.delete(message_id).await {
            tracing::warn!("Failed to delete giveaway record {}: {}", message_id, e);
        }
    }
}

/// Draws `count` winners uniformly without replacement.
///
/// Each draw removes a uniformly random element from the remaining pool, so
/// there are no duplicate winners and every subset is equally likely. Produces
/// fewer than `count` winners when the pool is smaller than `count`.
pub(crate) fn pick_winners(mut pool: Vec<u64>, count: usize) -> Vec<u64> {
    let mut rng = rand::rng();
    let mut winners = Vec::new();

    while winners.len() < count && !pool.is_empty() {
        let index = rng.random_range(0..pool.len());
        winners.push(pool.remove(index));
    }

    winners
}
