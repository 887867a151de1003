//! Endpoint groups of the game data API.
//!
//! Each group borrows the [`Client`] and exposes one method per endpoint, e.g.
//! `client.auction().snapshot(href)`.

pub mod auction;
pub mod item;
pub mod realm;

use crate::Client;

impl Client {
    /// Connected realm search and detail endpoints.
    pub fn realm(&self) -> realm::RealmEndpoints<'_> {
        realm::RealmEndpoints::new(self)
    }

    /// Auction house index and snapshot endpoints.
    pub fn auction(&self) -> auction::AuctionEndpoints<'_> {
        auction::AuctionEndpoints::new(self)
    }

    /// Item detail endpoint.
    pub fn item(&self) -> item::ItemEndpoints<'_> {
        item::ItemEndpoints::new(self)
    }
}
