use crate::{
    model::{
        common::SearchResponse,
        realm::{ConnectedRealm, ConnectedRealmRef},
    },
    Client, Error, Namespace,
};

pub struct RealmEndpoints<'a> {
    client: &'a Client,
}

impl<'a> RealmEndpoints<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Search connected realms that are up and contain a realm called `name`.
    ///
    /// The name is matched against the client's locale.
    pub async fn search(&self, name: &str) -> Result<SearchResponse<ConnectedRealmRef>, Error> {
        let name_key = format!("realms.name.{}", self.client.locale());

        self.client
            .get(
                "/data/wow/search/connected-realm",
                Namespace::Dynamic,
                &[("status.type", "UP"), (name_key.as_str(), name)],
            )
            .await
    }

    /// Get a connected realm by its identifier.
    pub async fn get(&self, connected_realm_id: i64) -> Result<ConnectedRealm, Error> {
        self.client
            .get(
                &format!("/data/wow/connected-realm/{}", connected_realm_id),
                Namespace::Dynamic,
                &[],
            )
            .await
    }
}
