use std::path::Path;

use skald_core::OracleRoller;

pub fn run(
    dir: &Path,
    reference: &str,
    game: Option<&str>,
    limit: Option<u32>,
    json: bool,
    seed: Option<u64>,
) -> Result<(), String> {
    let registry = super::load_registry(dir)?;
    let game = super::parse_game(game)?;
    let mut rng = super::make_rng(seed);

    let mut roller = OracleRoller::new(&registry).with_game(game);
    if let Some(limit) = limit {
        roller = roller.with_depth_limit(limit);
    }

    let results = roller.resolve(reference, &mut rng).map_err(|e| e.to_string())?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&results).map_err(|e| e.to_string())?;
        println!("{rendered}");
    } else {
        super::print_results(&results);
    }

    Ok(())
}
