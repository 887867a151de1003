use blackwater_test_utils::prelude::*;

use crate::data::{
    auction::{AuctionRepository, PricePoint},
    faction::FactionRepository,
    item::ItemRepository,
    realm::ConnectedRealmRepository,
};

mod auction {
    use super::*;

    mod price_history;
    mod upsert;
}

mod faction {
    use super::*;

    mod seed;
}

mod item {
    use super::*;

    mod find_missing_item_ids;
    mod insert;
}

mod realm {
    use super::*;

    mod delete_all;
    mod upsert;
}
