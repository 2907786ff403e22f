//! CLI frontend for the Skald oracle engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "skald",
    about = "Skald — an oracle engine for solo tabletop play",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a table reference and print the rolled results
    Roll {
        /// Table name or reference expression (e.g. "Action", "[Action/Theme]", "[3x]")
        #[arg(required = true)]
        reference: Vec<String>,

        /// Restrict matching to one game (ironsworn, starforged)
        #[arg(short, long)]
        game: Option<String>,

        /// Cap on chained/nested expansion depth
        #[arg(long)]
        limit: Option<u32>,

        /// Emit the result sequence as JSON
        #[arg(long)]
        json: bool,

        /// RNG seed for deterministic rolls (default: OS entropy)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Directory containing oracle data files
        #[arg(short, long, default_value = "oracles")]
        dir: PathBuf,
    },

    /// List the loaded oracle tables
    List {
        /// Restrict to one game (ironsworn, starforged)
        #[arg(short, long)]
        game: Option<String>,

        /// Directory containing oracle data files
        #[arg(short, long, default_value = "oracles")]
        dir: PathBuf,
    },

    /// Show one table's entries and their roll spans
    Show {
        /// Table name (case-insensitive)
        #[arg(required = true)]
        name: Vec<String>,

        /// Restrict matching to one game (ironsworn, starforged)
        #[arg(short, long)]
        game: Option<String>,

        /// Directory containing oracle data files
        #[arg(short, long, default_value = "oracles")]
        dir: PathBuf,
    },

    /// Validate the loaded tables and report problems
    Check {
        /// Directory containing oracle data files
        #[arg(short, long, default_value = "oracles")]
        dir: PathBuf,
    },

    /// Create a starter oracle data directory
    Init {
        /// Directory to create
        #[arg(short, long, default_value = "oracles")]
        dir: PathBuf,
    },

    /// Generate a Starforged settlement
    Settlement {
        /// Region of the Forge (terminus, outlands, expanse)
        region: String,

        /// Settlement name (default: rolled from the name oracle)
        #[arg(short, long)]
        name: Option<String>,

        /// RNG seed for deterministic rolls (default: OS entropy)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Directory containing oracle data files
        #[arg(short, long, default_value = "oracles")]
        dir: PathBuf,
    },

    /// Generate a Starforged planet
    Planet {
        /// Region of the Forge (terminus, outlands, expanse)
        region: String,

        /// Planet name (default: rolled from the name oracle)
        #[arg(short, long)]
        name: Option<String>,

        /// RNG seed for deterministic rolls (default: OS entropy)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Directory containing oracle data files
        #[arg(short, long, default_value = "oracles")]
        dir: PathBuf,
    },

    /// Look up an asset card and render it
    Asset {
        /// Card name (case-insensitive)
        #[arg(required = true)]
        name: Vec<String>,

        /// Restrict matching to one game (ironsworn, starforged)
        #[arg(short, long)]
        game: Option<String>,

        /// Fill the card's input fields positionally
        #[arg(short, long)]
        input: Vec<String>,

        /// Directory containing oracle data files
        #[arg(short, long, default_value = "oracles")]
        dir: PathBuf,
    },

    /// Interactive loop: each line is a reference expression
    Play {
        /// Restrict matching to one game (ironsworn, starforged)
        #[arg(short, long)]
        game: Option<String>,

        /// RNG seed for deterministic rolls (default: OS entropy)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Directory containing oracle data files
        #[arg(short, long, default_value = "oracles")]
        dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            reference,
            game,
            limit,
            json,
            seed,
            dir,
        } => commands::roll::run(&dir, &reference.join(" "), game.as_deref(), limit, json, seed),
        Commands::List { game, dir } => commands::list::run(&dir, game.as_deref()),
        Commands::Show { name, game, dir } => {
            commands::show::run(&dir, &name.join(" "), game.as_deref())
        }
        Commands::Check { dir } => commands::check::run(&dir),
        Commands::Init { dir } => commands::init::run(&dir),
        Commands::Settlement {
            region,
            name,
            seed,
            dir,
        } => commands::settlement::run(&dir, &region, name.as_deref(), seed),
        Commands::Planet {
            region,
            name,
            seed,
            dir,
        } => commands::planet::run(&dir, &region, name.as_deref(), seed),
        Commands::Asset {
            name,
            game,
            input,
            dir,
        } => commands::asset::run(&dir, &name.join(" "), game.as_deref(), &input),
        Commands::Play { game, seed, dir } => commands::play::run(&dir, game.as_deref(), seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
