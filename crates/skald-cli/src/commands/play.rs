use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use skald_core::OracleRoller;

pub fn run(dir: &Path, game: Option<&str>, seed: Option<u64>) -> Result<(), String> {
    let registry = super::load_registry(dir)?;
    let game = super::parse_game(game)?;
    let mut rng = super::make_rng(seed);

    println!("  {} the oracle dialogue", "Starting".bold());
    println!("  Type a table name, \"[a/b]\" for a group, or \"[3x]\" to re-roll the last table.");
    println!("  Type 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();
    let mut continuation: Option<String> = None;

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        let mut roller = OracleRoller::new(&registry).with_game(game);
        if let Some(table) = &continuation {
            roller = roller.with_continuation(table.clone());
        }

        match roller.resolve(input, &mut rng) {
            Ok(results) => {
                super::print_results(&results);
                println!();
                if let Some(last) = results.iter().rev().find_map(|r| r.table_name.clone()) {
                    continuation = Some(last);
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
