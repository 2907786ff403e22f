use std::path::Path;

use colored::Colorize;

use skald_core::game::game_label;

pub fn run(dir: &Path, name: &str, game: Option<&str>, inputs: &[String]) -> Result<(), String> {
    let library = super::load_library(dir)?;
    let filter = super::parse_game(game)?;

    if library.is_empty() {
        return Err(format!(
            "no asset cards in {}; run `skald init` to create a starter set",
            dir.display()
        ));
    }

    let mut asset = library
        .find(name, filter)
        .cloned()
        .ok_or_else(|| format!("unknown asset: {name}"))?;
    asset.fill_inputs(inputs.iter().cloned());

    println!(
        "  {} [{}] ({})",
        asset.name.bold(),
        asset.category,
        game_label(asset.game).dimmed()
    );
    if !asset.description.is_empty() {
        println!();
        println!("  {}", asset.description);
    }

    if !asset.abilities.is_empty() {
        println!();
        for ability in &asset.abilities {
            let mark = if ability.enabled { "[x]" } else { "[ ]" };
            println!("  {mark} {}", ability.text);
        }
    }

    if !asset.input_fields.is_empty() {
        println!();
        for field in &asset.input_fields {
            match &field.value {
                Some(value) => println!("  {}: {value}", field.name),
                None => println!("  {}: —", field.name),
            }
        }
    }

    if asset.counter.is_some() || asset.meter.is_some() || asset.toggle.is_some() {
        println!();
    }
    if let Some(counter) = &asset.counter {
        println!("  {counter}");
    }
    if let Some(meter) = &asset.meter {
        println!("  {meter}");
    }
    if let Some(toggle) = &asset.toggle {
        for field in &toggle.fields {
            let mark = if field.active { "*" } else { " " };
            println!("  {mark} {}: {}", field.name, field.text());
        }
    }

    Ok(())
}
