//! pokequest: suggest Pokémon for event quest lists
//!
//! Reads a numbered quest block (from a file or stdin), classifies each line
//! and prints the best species to catch for it.

mod config;
mod render;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pq_core::{MatchEngine, SuggestOptions, is_quest_block};
use pq_data::load_pokedex;

use crate::config::Config;

/// Pokémon event quest helper
#[derive(Parser, Debug)]
#[command(name = "pokequest")]
#[command(author, version, about = "Suggest Pokémon for event quests", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,

    /// Directory holding the species, spawn-rate and gender tables
    #[arg(long = "data-dir", global = true)]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a single quest line and print its descriptor
    Parse {
        /// Quest line, e.g. "Catch 10 Water-type Pokémon in Kanto"
        line: String,
    },

    /// Suggest Pokémon for every numbered line of a quest block
    Suggest {
        /// Quest block file (stdin when omitted)
        file: Option<PathBuf>,

        /// Pokémon per quest (1-5)
        #[arg(short = 'n', long = "count")]
        count: Option<usize>,

        /// Include gender quests
        #[arg(short = 'g', long = "gender")]
        gender: bool,

        /// Skip gender quests, even when the config file enables them
        #[arg(long = "no-gender", conflicts_with = "gender")]
        no_gender: bool,

        /// Print the report as JSON
        #[arg(long = "json")]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }

    match args.command {
        Command::Parse { line } => {
            let quest = pq_core::parse(&line);
            println!("{}", serde_json::to_string_pretty(&quest)?);
        }
        Command::Suggest {
            file,
            count,
            gender,
            no_gender,
            json,
        } => {
            let options = SuggestOptions::new(
                count.unwrap_or(config.count),
                include_gender(gender, no_gender, &config),
            )?;

            let block = read_block(file.as_ref())?;
            if !is_quest_block(&block) {
                warn!("input has no quest heading, suggesting for numbered lines anyway");
            }
            let dex = load_pokedex(&config.data_paths())
                .with_context(|| format!("failed to load tables from {:?}", config.data_dir))?;
            let engine = MatchEngine::new(&dex);

            let report = pq_core::suggest(&engine, &block, &options);
            if report.quests_parsed == 0 {
                bail!("no numbered quest lines found in input");
            }
            info!(
                "{} quests parsed, {} with suggestions",
                report.quests_parsed,
                report.details.len()
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if report.is_empty() {
                println!("No suggestions for these quests.");
            } else {
                print!("{}", render::render_report(&report, options.count));
            }
        }
    }

    Ok(())
}

/// `--gender` and `--no-gender` override the config; with neither, the config decides
fn include_gender(gender: bool, no_gender: bool, config: &Config) -> bool {
    match (gender, no_gender) {
        (true, _) => true,
        (_, true) => false,
        _ => config.include_gender,
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn read_block(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {path:?}"))
        }
        None => {
            let mut block = String::new();
            std::io::stdin()
                .read_to_string(&mut block)
                .context("failed to read quest block from stdin")?;
            Ok(block)
        }
    }
}
