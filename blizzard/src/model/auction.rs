use serde::{Deserialize, Serialize};

use crate::model::common::{Link, LocalizedString};

/// Auction houses of a connected realm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionHouseIndex {
    #[serde(default)]
    pub auctions: Vec<AuctionHouseRef>,
}

/// One auction house with the reference to its listing snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionHouseRef {
    pub key: Link,
    pub name: LocalizedString,
    pub id: i64,
}

/// Every listing of one auction house at fetch time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionSnapshot {
    #[serde(default)]
    pub auctions: Vec<Auction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    pub id: i64,
    pub item: ItemRef,
    /// Bid-only listings carry no buyout and are stored as 0
    #[serde(default)]
    pub buyout: i64,
    pub quantity: i64,
    pub time_left: TimeLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRef {
    pub id: i64,
}

/// Coarse remaining duration of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeLeft {
    Short,
    Medium,
    Long,
    VeryLong,
}

impl TimeLeft {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "SHORT",
            Self::Medium => "MEDIUM",
            Self::Long => "LONG",
            Self::VeryLong => "VERY_LONG",
        }
    }
}
