use crate::{model::item::Item, Client, Error, Namespace};

pub struct ItemEndpoints<'a> {
    client: &'a Client,
}

impl<'a> ItemEndpoints<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Get item detail, served from the static namespace.
    pub async fn get(&self, item_id: i64) -> Result<Item, Error> {
        self.client
            .get(
                &format!("/data/wow/item/{}", item_id),
                Namespace::Static,
                &[],
            )
            .await
    }
}
