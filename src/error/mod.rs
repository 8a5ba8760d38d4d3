//! Error types for the giveboard application.
//!
//! This module provides the application's error hierarchy. `AppError` is the
//! top-level error type returned from startup and `main`, aggregating the
//! domain-specific errors of the giveaway subsystem. Most variants use `#[from]`
//! for automatic conversion with `?`.

pub mod channel;
pub mod config;
pub mod giveaway;
pub mod store;

use thiserror::Error;

use crate::error::{config::ConfigError, giveaway::GiveawayError, store::StoreError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),

    /// Giveaway lifecycle error surfaced to the caller of `start`.
    #[error(transparent)]
    Giveaway(#[from] GiveawayError),

    /// Giveaway store error outside of a lifecycle operation (startup reconciliation).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),

    /// I/O error from the liveness listener or the flat-file store directory setup.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::Discord(Box::new(err))
    }
}
