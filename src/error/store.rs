use thiserror::Error;

/// Errors from a giveaway store backend.
///
/// Both backends surface their failures through this one type so callers can
/// treat the store as a single capability regardless of which backend is
/// configured.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database operation error from the SeaORM backend.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Filesystem error from the flat-file backend.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The flat-file backend could not encode or decode the giveaway map.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
