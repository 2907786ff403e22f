use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use skald_core::game::{game_label, game_matches};

pub fn run(dir: &Path, game: Option<&str>) -> Result<(), String> {
    let registry = super::load_registry(dir)?;
    let filter = super::parse_game(game)?;

    let tables: Vec<_> = registry
        .iter()
        .filter(|t| game_matches(t.game, filter))
        .collect();

    if tables.is_empty() {
        println!("  No tables found.");
        return Ok(());
    }

    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec!["Name", "Game", "Die", "Entries", "Aliases"]);

    for table in &tables {
        let aliases = if table.aliases.is_empty() {
            "—".to_string()
        } else {
            table.aliases.join(", ")
        };
        out.add_row(vec![
            table.name.clone(),
            game_label(table.game).to_string(),
            format!("d{}", table.die),
            table.entries.len().to_string(),
            aliases,
        ]);
    }

    println!("{out}");
    println!();
    println!("  {} tables", tables.len());

    Ok(())
}
