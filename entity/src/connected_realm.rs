use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "connected_realm")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub connected_realm_id: i64,
    pub region: i32,
    pub name: String,
    pub timezone: Option<String>,
    pub alliance_href: Option<String>,
    pub horde_href: Option<String>,
    pub neutral_href: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::auction::Entity")]
    Auction,
}

impl Related<super::auction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Auction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
