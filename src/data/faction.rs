use sea_orm::{
    sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::model::{db::FactionModel, faction::Faction};

pub struct FactionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FactionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert the static faction rows, leaving existing rows untouched
    pub async fn seed(&self) -> Result<(), DbErr> {
        let factions = Faction::ALL
            .into_iter()
            .map(|faction| entity::faction::ActiveModel {
                faction_id: ActiveValue::Set(faction.id()),
                faction_name: ActiveValue::Set(faction.name().to_string()),
            });

        entity::prelude::Faction::insert_many(factions)
            .on_conflict(
                OnConflict::column(entity::faction::Column::FactionId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn all(&self) -> Result<Vec<FactionModel>, DbErr> {
        entity::prelude::Faction::find()
            .order_by_asc(entity::faction::Column::FactionId)
            .all(self.db)
            .await
    }
}
