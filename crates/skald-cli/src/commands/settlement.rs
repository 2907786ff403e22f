use std::path::Path;

use colored::Colorize;

use skald_forged::{Settlement, SpaceRegion};

pub fn run(
    dir: &Path,
    region: &str,
    name: Option<&str>,
    seed: Option<u64>,
) -> Result<(), String> {
    let registry = super::load_registry(dir)?;
    let region = SpaceRegion::parse(region)
        .ok_or_else(|| format!("unknown region \"{region}\" (try terminus, outlands, expanse)"))?;
    let mut rng = super::make_rng(seed);

    let mut settlement =
        Settlement::generate(&registry, region, name, &mut rng).map_err(|e| e.to_string())?;
    settlement
        .add_project(&registry, &mut rng)
        .map_err(|e| e.to_string())?;
    settlement
        .reveal_trouble(&registry, &mut rng)
        .map_err(|e| e.to_string())?;
    settlement
        .reveal_initial_contact(&registry, &mut rng)
        .map_err(|e| e.to_string())?;

    println!(
        "  {} [{} settlement]",
        settlement.name.bold(),
        settlement.region.to_string().dimmed()
    );
    println!();
    println!("  location:        {}", settlement.location);
    println!("  first look:      {}", settlement.first_look);
    println!("  authority:       {}", settlement.authority);
    println!("  population:      {}", settlement.population);
    println!("  projects:        {}", settlement.projects.join(", "));
    if let Some(trouble) = &settlement.trouble {
        println!("  trouble:         {trouble}");
    }
    if let Some(contact) = &settlement.initial_contact {
        println!("  initial contact: {contact}");
    }

    Ok(())
}
