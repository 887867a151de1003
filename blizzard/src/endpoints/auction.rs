use crate::{
    model::auction::{AuctionHouseIndex, AuctionSnapshot},
    Client, Error,
};

pub struct AuctionEndpoints<'a> {
    client: &'a Client,
}

impl<'a> AuctionEndpoints<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Get the auction house index behind a connected realm's `auctions` reference.
    pub async fn index_at(&self, href: &str) -> Result<AuctionHouseIndex, Error> {
        self.client.fetch_href(href).await
    }

    /// Get the listing snapshot behind an auction house reference.
    ///
    /// Snapshots are served gzip compressed.
    pub async fn snapshot(&self, href: &str) -> Result<AuctionSnapshot, Error> {
        self.client.fetch_href(href).await
    }
}
