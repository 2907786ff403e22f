//! Loading tables and asset cards from disk.

use std::fs;
use std::path::{Path, PathBuf};

use skald_assets::{Asset, AssetLibrary};
use skald_core::{OracleTable, TableRegistry};

use crate::def::TableDef;
use crate::error::{DataError, DataResult};

/// Filename reserved for asset cards inside a data directory.
pub const ASSET_FILE: &str = "assets.json";

/// Load one file of table definitions.
pub fn load_tables(path: &Path) -> DataResult<Vec<OracleTable>> {
    let text = fs::read_to_string(path)?;
    let defs: Vec<TableDef> = serde_json::from_str(&text).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    defs.into_iter().map(TableDef::into_table).collect()
}

/// Load every `*.json` table file in a directory, in lexicographic order,
/// into a registry. The file named [`ASSET_FILE`] holds asset cards and is
/// skipped; load it with [`load_assets`].
pub fn load_dir(dir: &Path) -> DataResult<TableRegistry> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "json")
                && path.file_name().is_some_and(|name| name != ASSET_FILE)
        })
        .collect();
    paths.sort();

    let mut registry = TableRegistry::new();
    for path in &paths {
        for table in load_tables(path)? {
            registry.insert(table);
        }
    }
    Ok(registry)
}

/// Load one file of asset cards.
pub fn load_assets(path: &Path) -> DataResult<AssetLibrary> {
    let text = fs::read_to_string(path)?;
    let assets: Vec<Asset> = serde_json::from_str(&text).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let mut library = AssetLibrary::new();
    for asset in assets {
        library.insert(asset);
    }
    Ok(library)
}
