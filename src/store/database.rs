use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};

use crate::error::store::StoreError;
use crate::store::{GiveawayRecord, GiveawayStore};

/// SeaORM-backed giveaway store.
///
/// Stores each record as a row of the `giveaway` table. The connection is a
/// pool handle, so the store is cheap to clone and share.
#[derive(Clone)]
pub struct DatabaseStore {
    db: DatabaseConnection,
}

impl DatabaseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<entity::giveaway::Model> for GiveawayRecord {
    fn from(model: entity::giveaway::Model) -> Self {
        GiveawayRecord {
            message_id: model.message_id,
            channel_id: model.channel_id,
            prize: model.prize,
            winners: model.winners,
            ends_at: model.ends_at,
            host_id: model.host_id,
        }
    }
}

#[async_trait]
impl GiveawayStore for DatabaseStore {
    async fn put(&self, record: &GiveawayRecord) -> Result<(), StoreError> {
        entity::giveaway::ActiveModel {
            message_id: ActiveValue::Set(record.message_id.clone()),
            channel_id: ActiveValue::Set(record.channel_id.clone()),
            prize: ActiveValue::Set(record.prize.clone()),
            winners: ActiveValue::Set(record.winners),
            ends_at: ActiveValue::Set(record.ends_at),
            host_id: ActiveValue::Set(record.host_id.clone()),
        }
        .insert(&self.db)
        .await?;

        Ok(())
    }

    async fn get(&self, message_id: &str) -> Result<Option<GiveawayRecord>, StoreError> {
        let model = entity::prelude::Giveaway::find_by_id(message_id)
            .one(&self.db)
            .await?;

        Ok(model.map(GiveawayRecord::from))
    }

    async fn delete(&self, message_id: &str) -> Result<(), StoreError> {
        entity::prelude::Giveaway::delete_by_id(message_id)
            .exec(&self.db)
            .await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<GiveawayRecord>, StoreError> {
        let models = entity::prelude::Giveaway::find().all(&self.db).await?;

        Ok(models.into_iter().map(GiveawayRecord::from).collect())
    }
}
