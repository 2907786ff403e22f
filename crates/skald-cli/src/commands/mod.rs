pub mod asset;
pub mod check;
pub mod init;
pub mod list;
pub mod planet;
pub mod play;
pub mod roll;
pub mod settlement;
pub mod show;

use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use skald_assets::AssetLibrary;
use skald_core::{Game, RollResult, TableRegistry};

/// Load every table file in the data directory.
fn load_registry(dir: &Path) -> Result<TableRegistry, String> {
    let registry = skald_data::load_dir(dir).map_err(|e| e.to_string())?;
    if registry.is_empty() {
        return Err(format!(
            "no oracle tables in {}; run `skald init` to create a starter set",
            dir.display()
        ));
    }
    Ok(registry)
}

/// Load the asset cards, if the directory carries any.
fn load_library(dir: &Path) -> Result<AssetLibrary, String> {
    let path = dir.join(skald_data::ASSET_FILE);
    if !path.exists() {
        return Ok(AssetLibrary::new());
    }
    skald_data::load_assets(&path).map_err(|e| e.to_string())
}

/// Seeded RNG, or OS entropy when no seed is given.
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn parse_game(game: Option<&str>) -> Result<Option<Game>, String> {
    match game {
        None => Ok(None),
        Some(s) => Game::parse(s)
            .map(Some)
            .ok_or_else(|| format!("unknown game \"{s}\" (try ironsworn or starforged)")),
    }
}

/// Print a resolution as a depth-indented tree.
fn print_results(results: &[RollResult]) {
    for result in results {
        let indent = "  ".repeat(result.depth as usize);
        match &result.table_name {
            Some(name) => {
                println!("{indent}{}: [{}] {}", name.bold(), result.roll, result.text());
            }
            None => println!("{indent}[{}] {}", result.roll, result.text()),
        }
    }
}
