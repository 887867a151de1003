use sea_orm::{
    sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::model::db::ConnectedRealmModel;

pub struct ConnectedRealmRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConnectedRealmRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a connected realm or replace the stored values of an existing one
    pub async fn upsert(&self, realm: ConnectedRealmModel) -> Result<ConnectedRealmModel, DbErr> {
        let connected_realm_id = realm.connected_realm_id;

        let model = entity::connected_realm::ActiveModel {
            connected_realm_id: ActiveValue::Set(realm.connected_realm_id),
            region: ActiveValue::Set(realm.region),
            name: ActiveValue::Set(realm.name),
            timezone: ActiveValue::Set(realm.timezone),
            alliance_href: ActiveValue::Set(realm.alliance_href),
            horde_href: ActiveValue::Set(realm.horde_href),
            neutral_href: ActiveValue::Set(realm.neutral_href),
        };

        entity::prelude::ConnectedRealm::insert(model)
            .on_conflict(
                OnConflict::column(entity::connected_realm::Column::ConnectedRealmId)
                    .update_columns([
                        entity::connected_realm::Column::Region,
                        entity::connected_realm::Column::Name,
                        entity::connected_realm::Column::Timezone,
                        entity::connected_realm::Column::AllianceHref,
                        entity::connected_realm::Column::HordeHref,
                        entity::connected_realm::Column::NeutralHref,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.find_by_id(connected_realm_id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "connected realm {} after upsert",
                connected_realm_id
            )))
    }

    /// Get a connected realm using its Blizzard connected realm ID
    pub async fn find_by_id(
        &self,
        connected_realm_id: i64,
    ) -> Result<Option<ConnectedRealmModel>, DbErr> {
        entity::prelude::ConnectedRealm::find_by_id(connected_realm_id)
            .one(self.db)
            .await
    }

    /// Every catalogued connected realm, ordered by ID
    pub async fn all(&self) -> Result<Vec<ConnectedRealmModel>, DbErr> {
        entity::prelude::ConnectedRealm::find()
            .order_by_asc(entity::connected_realm::Column::ConnectedRealmId)
            .all(self.db)
            .await
    }

    /// Delete every connected realm, returning the number of deleted rows
    ///
    /// Fails while auctions still reference a realm.
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::ConnectedRealm::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
