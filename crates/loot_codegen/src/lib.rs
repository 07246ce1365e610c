//! loot_codegen - enum bindings generator for the loot simulator.
//!
//! Scans the monster and loot-table catalogs and regenerates the C++
//! header declaring `MonsterType`/`TreasureType` plus the string
//! serialization tables the simulator uses for save data and dispatch.

pub mod catalog;
pub mod emit;
pub mod error;
pub mod helpers;
pub mod mapping;
pub mod models;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::CodegenError;
use crate::mapping::EnumMapping;

/// Fixed input/output locations for one generator run.
#[derive(Debug)]
pub struct Paths {
    pub monster_catalog: PathBuf,
    pub loot_tables: PathBuf,
    pub output: PathBuf,
}

impl Paths {
    /// Standard repository layout relative to `root`.
    pub fn repo_default(root: &Path) -> Self {
        Paths {
            monster_catalog: root.join("resources/monsters.json"),
            loot_tables: root.join("resources/loot-tables"),
            output: root
                .join("loot-simulator/generated")
                .join(emit::HEADER_FILE_NAME),
        }
    }
}

/// Run the whole pipeline: scan both catalogs, build the two mappings,
/// render the header, write it out in one truncating call.
///
/// Catalogs are fully read before the output file is touched, so an input
/// failure leaves any previously generated header intact. Only the output
/// directory is created up front.
pub fn generate_all(paths: &Paths) -> Result<(), CodegenError> {
    if let Some(dir) = paths.output.parent() {
        fs::create_dir_all(dir).map_err(|source| CodegenError::OutputDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let monster_ids = catalog::monster_type_ids(&paths.monster_catalog)?;
    let item_ids = catalog::item_type_ids(&paths.loot_tables)?;

    let monsters = EnumMapping::from_ids(monster_ids);
    let treasures = EnumMapping::from_ids(item_ids);
    info!(
        monster_types = monsters.len(),
        treasure_types = treasures.len(),
        "catalogs scanned"
    );

    let code = emit::header(&monsters, &treasures);
    fs::write(&paths.output, code).map_err(|source| CodegenError::OutputWrite {
        path: paths.output.clone(),
        source,
    })?;
    info!(path = %paths.output.display(), "bindings header written");
    Ok(())
}
