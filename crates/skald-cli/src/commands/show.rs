use std::path::Path;

use colored::Colorize;

use skald_core::game::game_label;
use skald_core::lookup;

pub fn run(dir: &Path, name: &str, game: Option<&str>) -> Result<(), String> {
    let registry = super::load_registry(dir)?;
    let filter = super::parse_game(game)?;

    let candidates = registry.find_candidates(name, filter);
    if candidates.is_empty() {
        return Err(format!("unknown oracle table: {name}"));
    }

    for (i, table) in candidates.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "  {} [{}] (d{})",
            table.name.bold(),
            game_label(table.game).dimmed(),
            table.die
        );
        if !table.aliases.is_empty() {
            println!("  also known as: {}", table.aliases.join(", "));
        }
        println!();

        let spans = lookup::entry_spans(table);
        for (entry, span) in table.entries.iter().zip(spans) {
            let span_str = match span {
                Some((min, max)) if min == max => min.to_string(),
                Some((min, max)) => format!("{min}-{max}"),
                None => "—".to_string(),
            };
            let nested = match &entry.table {
                Some(sub) => format!("  {}", format!("(rolls a nested d{})", sub.die).dimmed()),
                None => String::new(),
            };
            println!("  {:>7}  {}{nested}", span_str, entry.description);
        }
    }

    Ok(())
}
