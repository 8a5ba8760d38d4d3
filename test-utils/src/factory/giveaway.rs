//! Giveaway factory for creating test giveaway rows.
//!
//! Provides factory methods for inserting giveaway entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test giveaways with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::giveaway::GiveawayFactory;
///
/// let giveaway = GiveawayFactory::new(&db)
///     .prize("Nitro")
///     .winners(2)
///     .ends_at(Utc::now() + chrono::Duration::minutes(10))
///     .build()
///     .await?;
/// ```
pub struct GiveawayFactory<'a> {
    db: &'a DatabaseConnection,
    message_id: String,
    channel_id: String,
    prize: String,
    winners: i32,
    ends_at: chrono::DateTime<Utc>,
    host_id: String,
}

impl<'a> GiveawayFactory<'a> {
    /// Creates a new GiveawayFactory with default values.
    ///
    /// Defaults:
    /// - message_id / channel_id / host_id: unique ids from the shared counter
    /// - prize: `"Prize {id}"`
    /// - winners: `1`
    /// - ends_at: 1 hour from now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `GiveawayFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            message_id: format!("{}", 1_000_000 + id),
            channel_id: format!("{}", 2_000_000 + id),
            prize: format!("Prize {}", id),
            winners: 1,
            ends_at: Utc::now() + chrono::Duration::hours(1),
            host_id: format!("{}", 3_000_000 + id),
        }
    }

    /// Sets the announcement message id.
    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    /// Sets the announcement channel id.
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    /// Sets the prize description.
    pub fn prize(mut self, prize: impl Into<String>) -> Self {
        self.prize = prize.into();
        self
    }

    /// Sets the number of winners to draw.
    pub fn winners(mut self, winners: i32) -> Self {
        self.winners = winners;
        self
    }

    /// Sets the conclusion time.
    pub fn ends_at(mut self, ends_at: chrono::DateTime<Utc>) -> Self {
        self.ends_at = ends_at;
        self
    }

    /// Sets the host user id.
    pub fn host_id(mut self, host_id: impl Into<String>) -> Self {
        self.host_id = host_id.into();
        self
    }

    /// Inserts the giveaway into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created giveaway row
    /// - `Err(DbErr)` - Database error
    pub async fn build(self) -> Result<entity::giveaway::Model, DbErr> {
        entity::giveaway::ActiveModel {
            message_id: ActiveValue::Set(self.message_id),
            channel_id: ActiveValue::Set(self.channel_id),
            prize: ActiveValue::Set(self.prize),
            winners: ActiveValue::Set(self.winners),
            ends_at: ActiveValue::Set(self.ends_at),
            host_id: ActiveValue::Set(self.host_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a giveaway with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created giveaway row
/// - `Err(DbErr)` - Database error
pub async fn create_giveaway(db: &DatabaseConnection) -> Result<entity::giveaway::Model, DbErr> {
    GiveawayFactory::new(db).build().await
}
