//! JSON deserialization structures for the catalog documents.

use serde::Deserialize;

/// Top-level shape of `monsters.json`.
#[derive(Deserialize)]
pub struct MonsterCatalog {
    pub monsters: Vec<MonsterRecord>,
}

/// One monster record. Only the type id matters here; stats and loot
/// references are the simulator's business.
#[derive(Deserialize)]
pub struct MonsterRecord {
    #[serde(rename = "type")]
    pub type_id: String,
}

/// Top-level shape of a loot-table document.
#[derive(Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemRecord>,
}

/// One item record within a loot table.
#[derive(Deserialize)]
pub struct ItemRecord {
    #[serde(rename = "type")]
    pub type_id: String,
}
