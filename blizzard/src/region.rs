use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Blizzard API region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Eu,
    Us,
}

impl Region {
    /// Lowercase region code used in hostnames and namespaces.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eu => "eu",
            Self::Us => "us",
        }
    }

    /// Numeric region code stored alongside connected realms.
    pub fn code(&self) -> i32 {
        match self {
            Self::Eu => 0,
            Self::Us => 1,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Eu),
            1 => Some(Self::Us),
            _ => None,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game flavour whose data is requested, selects the namespace suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameVersion {
    /// Classic Era (`classic1x`)
    #[default]
    Era,
    /// Classic progression realms (`classic`)
    Progression,
    /// Retail
    Retail,
}

impl FromStr for GameVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "era" | "classic1x" => Ok(Self::Era),
            "progression" | "classic" => Ok(Self::Progression),
            "retail" => Ok(Self::Retail),
            other => Err(Error::ConfigError(format!("unknown game version '{}'", other))),
        }
    }
}

/// Namespace category of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// Data that changes over time such as realms and auctions
    Dynamic,
    /// Data that only changes with patches such as items
    Static,
}

impl Namespace {
    /// Full namespace value, e.g. `dynamic-classic1x-eu`.
    pub fn value(&self, version: GameVersion, region: Region) -> String {
        let kind = match self {
            Self::Dynamic => "dynamic",
            Self::Static => "static",
        };

        match version {
            GameVersion::Era => format!("{}-classic1x-{}", kind, region),
            GameVersion::Progression => format!("{}-classic-{}", kind, region),
            GameVersion::Retail => format!("{}-{}", kind, region),
        }
    }
}
