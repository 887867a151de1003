use blizzard::model::item::Item;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationDef,
};

use crate::model::db::ItemModel;

pub struct ItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert an item unless it already exists, stored items are never updated
    ///
    /// The row is keyed by `item_id`, the ID the item was requested under, rather than the ID
    /// echoed in the response body.
    pub async fn insert(&self, item_id: i64, item: &Item) -> Result<u64, DbErr> {
        let model = entity::item::ActiveModel {
            item_id: ActiveValue::Set(item_id),
            item_class_id: ActiveValue::Set(item.item_class.id),
            item_class: ActiveValue::Set(item.item_class.name.clone()),
            item_subclass_id: ActiveValue::Set(item.item_subclass.id),
            item_subclass: ActiveValue::Set(item.item_subclass.name.clone()),
            quality: ActiveValue::Set(item.quality.name.clone()),
            name: ActiveValue::Set(item.name.clone()),
        };

        entity::prelude::Item::insert(model)
            .on_conflict(
                OnConflict::column(entity::item::Column::ItemId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await
    }

    pub async fn find_by_id(&self, item_id: i64) -> Result<Option<ItemModel>, DbErr> {
        entity::prelude::Item::find_by_id(item_id).one(self.db).await
    }

    /// Distinct item IDs referenced by auctions but absent from the item table, ascending
    pub async fn find_missing_item_ids(&self) -> Result<Vec<i64>, DbErr> {
        entity::prelude::Auction::find()
            .select_only()
            .column(entity::auction::Column::ItemId)
            .distinct()
            .join(JoinType::LeftJoin, auction_item_relation())
            .filter(entity::item::Column::ItemId.is_null())
            .order_by_asc(entity::auction::Column::ItemId)
            .into_tuple::<i64>()
            .all(self.db)
            .await
    }
}

/// Join from auctions to items, not declared on the entity since the schema has no
/// foreign key between them
fn auction_item_relation() -> RelationDef {
    entity::auction::Entity::belongs_to(entity::item::Entity)
        .from(entity::auction::Column::ItemId)
        .to(entity::item::Column::ItemId)
        .into()
}
