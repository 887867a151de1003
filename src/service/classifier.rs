//! Mapping of auction houses to factions.
//!
//! Classic connected realms expose three auction houses. Their numeric IDs are stable across
//! realms and locales, their display names are not, so the default strategy matches on ID and
//! only falls back to English display names for houses with an unknown ID.

use blizzard::model::auction::{AuctionHouseIndex, AuctionHouseRef};

use crate::model::faction::Faction;

/// Strategy deciding which faction an auction house belongs to.
pub trait FactionClassifier: Send + Sync {
    fn classify(&self, house: &AuctionHouseRef) -> Option<Faction>;
}

/// Classifies by auction house ID (2 = Alliance, 6 = Horde, 7 = Neutral).
#[derive(Debug, Default, Clone, Copy)]
pub struct AuctionHouseIdClassifier;

impl FactionClassifier for AuctionHouseIdClassifier {
    fn classify(&self, house: &AuctionHouseRef) -> Option<Faction> {
        match house.id {
            2 => Some(Faction::Alliance),
            6 => Some(Faction::Horde),
            7 => Some(Faction::Neutral),
            _ => None,
        }
    }
}

/// Classifies by display name in any returned locale.
#[derive(Debug, Clone)]
pub struct DisplayNameClassifier {
    labels: Vec<(String, Faction)>,
}

impl DisplayNameClassifier {
    pub fn new(labels: Vec<(String, Faction)>) -> Self {
        Self { labels }
    }
}

impl Default for DisplayNameClassifier {
    fn default() -> Self {
        Self::new(vec![
            ("Alliance Auction House".to_string(), Faction::Alliance),
            ("Horde Auction House".to_string(), Faction::Horde),
            ("Blackwater Auction House".to_string(), Faction::Neutral),
        ])
    }
}

impl FactionClassifier for DisplayNameClassifier {
    fn classify(&self, house: &AuctionHouseRef) -> Option<Faction> {
        self.labels
            .iter()
            .find(|(label, _)| house.name.contains(label))
            .map(|(_, faction)| *faction)
    }
}

/// Tries `primary` first and consults `fallback` only when it has no answer.
#[derive(Debug, Clone, Default)]
pub struct FallbackClassifier<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackClassifier<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: FactionClassifier, F: FactionClassifier> FactionClassifier for FallbackClassifier<P, F> {
    fn classify(&self, house: &AuctionHouseRef) -> Option<Faction> {
        self.primary
            .classify(house)
            .or_else(|| self.fallback.classify(house))
    }
}

/// ID based classification with display name fallback.
pub fn default_classifier() -> FallbackClassifier<AuctionHouseIdClassifier, DisplayNameClassifier>
{
    FallbackClassifier::new(AuctionHouseIdClassifier, DisplayNameClassifier::default())
}

/// Snapshot references of a connected realm's auction houses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HouseReferences {
    pub alliance: Option<String>,
    pub horde: Option<String>,
    pub neutral: Option<String>,
}

impl HouseReferences {
    fn slot(&mut self, faction: Faction) -> &mut Option<String> {
        match faction {
            Faction::Alliance => &mut self.alliance,
            Faction::Horde => &mut self.horde,
            Faction::Neutral => &mut self.neutral,
        }
    }
}

/// Assign each auction house of `index` to its faction, the first house per faction wins.
pub fn classify_houses(
    classifier: &dyn FactionClassifier,
    index: &AuctionHouseIndex,
) -> HouseReferences {
    let mut references = HouseReferences::default();

    for house in &index.auctions {
        let Some(faction) = classifier.classify(house) else {
            tracing::warn!("Unrecognised auction house {} ({:?})", house.id, house.name);
            continue;
        };

        let slot = references.slot(faction);
        if slot.is_none() && !house.key.href.is_empty() {
            *slot = Some(house.key.href.clone());
        }
    }

    references
}
