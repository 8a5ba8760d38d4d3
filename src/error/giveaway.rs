use thiserror::Error;

use crate::error::{channel::ChannelError, store::StoreError};

/// Errors from the giveaway lifecycle manager.
///
/// Only `start` propagates these to a caller. The scheduled conclusion task
/// logs and swallows every failure it hits; that best-effort behavior is part
/// of the conclusion contract, not an accident.
#[derive(Error, Debug)]
pub enum GiveawayError {
    /// The duration expression did not parse to a positive duration.
    ///
    /// Reported before any side effect: no announcement, no record, no timer.
    #[error("invalid duration: {0:?}")]
    InvalidDuration(String),

    /// The destination channel could not be resolved.
    ///
    /// Reported before any side effect.
    #[error("giveaway channel {0} is unavailable")]
    ChannelUnavailable(u64),

    /// Publishing the announcement failed; no record or timer was created.
    #[error("failed to publish announcement: {0}")]
    Publish(#[source] ChannelError),

    /// A store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The announcement or its reactions were unavailable at conclusion time.
    ///
    /// Never surfaced to a user; the conclusion task logs it and still deletes
    /// the persisted record.
    #[error("announcement unavailable at conclusion: {0}")]
    ConclusionFetch(#[source] ChannelError),
}
