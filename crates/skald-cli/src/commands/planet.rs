use std::path::Path;

use colored::Colorize;

use skald_core::{Game, OracleRoller};
use skald_forged::{MAX_CLOSER_LOOKS, Planet, SpaceRegion};

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

    let name = match name {
        Some(name) => name.to_string(),
        None => {
            let mut results = OracleRoller::new(&registry)
                .with_game(Some(Game::Starforged))
                .resolve("Planet Name", &mut rng)
                .map_err(|e| e.to_string())?;
            match results.pop() {
                Some(last) => last.entry.description,
                None => return Err("the planet name oracle produced no result".into()),
            }
        }
    };

    let mut planet =
        Planet::generate(&registry, name, region, &mut rng).map_err(|e| e.to_string())?;
    for _ in 0..MAX_CLOSER_LOOKS {
        planet
            .reveal_closer_look(&registry, &mut rng)
            .map_err(|e| e.to_string())?;
    }
    planet
        .reveal_life(&registry, &mut rng)
        .map_err(|e| e.to_string())?;

    println!("  {} [{}]", planet.name.bold(), planet.class.dimmed());
    println!();
    println!("  region:      {}", planet.region);
    println!("  from space:  {}", planet.observed_from_space);
    for look in &planet.closer_looks {
        println!("  closer look: {look}");
    }
    if let Some(life) = &planet.life {
        println!("  life:        {life}");
    }

    Ok(())
}
