use std::fmt;
use std::str::FromStr;

use crate::{error::Error, model::db::ConnectedRealmModel};

/// Auction house faction.
///
/// Identifiers match the seeded rows of the `faction` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Faction {
    Alliance,
    Horde,
    Neutral,
}

impl Faction {
    /// Every faction in ingestion order.
    pub const ALL: [Faction; 3] = [Faction::Alliance, Faction::Horde, Faction::Neutral];

    pub fn id(&self) -> i32 {
        match self {
            Self::Alliance => 0,
            Self::Horde => 1,
            Self::Neutral => 2,
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Alliance => "Alliance",
            Self::Horde => "Horde",
            Self::Neutral => "Neutral",
        }
    }

    /// Snapshot reference stored for this faction's auction house, if any.
    pub fn href<'a>(&self, realm: &'a ConnectedRealmModel) -> Option<&'a str> {
        let href = match self {
            Self::Alliance => realm.alliance_href.as_deref(),
            Self::Horde => realm.horde_href.as_deref(),
            Self::Neutral => realm.neutral_href.as_deref(),
        };

        href.filter(|h| !h.is_empty())
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Faction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "alliance" | "0" => Ok(Self::Alliance),
            "horde" | "1" => Ok(Self::Horde),
            "neutral" | "2" => Ok(Self::Neutral),
            other => Err(Error::ParseError(format!("unknown faction '{}'", other))),
        }
    }
}
