//! Catalog scanning: raw type ids out of the JSON documents.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CodegenError;
use crate::models::{ItemCatalog, MonsterCatalog};

/// Read the monster catalog and return its type ids in document order.
pub fn monster_type_ids(path: &Path) -> Result<Vec<String>, CodegenError> {
    let catalog: MonsterCatalog = read_catalog(path)?;
    Ok(catalog.monsters.into_iter().map(|m| m.type_id).collect())
}

/// Read every loot-table document under `dir` and return the concatenated
/// type ids, file by file then in document order.
///
/// Files are visited in lexicographic path order so the result does not
/// depend on filesystem enumeration order.
pub fn item_type_ids(dir: &Path) -> Result<Vec<String>, CodegenError> {
    let pattern = dir.join("*.json");
    let mut paths: Vec<PathBuf> =
        glob::glob(&pattern.to_string_lossy())?.collect::<Result<_, _>>()?;
    paths.sort();

    let mut ids = Vec::new();
    for path in &paths {
        let catalog: ItemCatalog = read_catalog(path)?;
        ids.extend(catalog.items.into_iter().map(|i| i.type_id));
    }
    Ok(ids)
}

fn read_catalog<T>(path: &Path) -> Result<T, CodegenError>
where
    T: serde::de::DeserializeOwned,
{
    let text = fs::read_to_string(path).map_err(|source| CodegenError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CodegenError::CatalogParse {
        path: path.to_path_buf(),
        source,
    })
}
