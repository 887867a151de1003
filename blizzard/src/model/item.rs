use serde::{Deserialize, Serialize};

/// Item detail from the static namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub quality: Quality,
    pub item_class: ItemClassRef,
    pub item_subclass: ItemClassRef,
    #[serde(default)]
    pub level: i64,
    #[serde(default)]
    pub required_level: i64,
    #[serde(default)]
    pub sell_price: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quality {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub name: String,
}

/// Item class or subclass reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemClassRef {
    pub id: i64,
    pub name: String,
}
