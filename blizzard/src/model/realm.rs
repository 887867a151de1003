use serde::{Deserialize, Serialize};

use crate::model::common::{Link, LocalizedString};

/// Connected realm as returned inside search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedRealmRef {
    pub id: i64,
}

/// Connected realm detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedRealm {
    pub id: i64,
    #[serde(default)]
    pub realms: Vec<Realm>,
    pub auctions: Link,
}

impl ConnectedRealm {
    /// Timezone of the first member realm, members of a connected realm share it.
    pub fn timezone(&self) -> Option<&str> {
        self.realms.iter().find_map(|r| r.timezone.as_deref())
    }
}

/// Member realm of a connected realm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Realm {
    pub id: i64,
    pub name: LocalizedString,
    #[serde(default)]
    pub timezone: Option<String>,
}
