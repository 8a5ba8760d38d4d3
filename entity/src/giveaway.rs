use sea_orm::entity::prelude::*;

/// An active giveaway, keyed by the Discord message id of its announcement.
///
/// A row exists only while the giveaway is pending; the conclusion task deletes
/// it once winners have been drawn (or the giveaway ended with no entries).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "giveaway")]
pub struct Model {
    /// Discord message id of the announcement message.
    #[sea_orm(primary_key, auto_increment = false)]
    pub message_id: String,
    /// Discord channel the announcement was posted in.
    pub channel_id: String,
    /// Free-text prize description.
    pub prize: String,
    /// Number of winners to draw at conclusion.
    pub winners: i32,
    /// When the draw occurs.
    pub ends_at: DateTimeUtc,
    /// Discord user id of the host who started the giveaway.
    pub host_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
