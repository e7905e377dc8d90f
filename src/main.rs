use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use family_tree_generator::genealogy::{load_inputs, GenerationEngine};
use family_tree_generator::menu::{self, Menu};

#[derive(Parser, Debug)]
#[command(name = "family_tree_generator")]
#[command(about = "Generate a synthetic multi-generation family tree from demographic tables")]
struct Args {
    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory holding the six demographic CSV files (embedded defaults if not specified)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// JSON file with generation parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Birth year of the two founders
    #[arg(long)]
    epoch_year: Option<i32>,

    /// Last year anything may happen in the simulation
    #[arg(long)]
    horizon_year: Option<i32>,

    /// Print every query once and exit instead of opening the menu
    #[arg(long)]
    report: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    println!("Reading files...");
    let (data, mut config) = load_inputs(args.data_dir.as_deref(), args.config.as_deref())
        .context("failed to load generation inputs")?;
    if let Some(year) = args.epoch_year {
        config.epoch_year = year;
    }
    if let Some(year) = args.horizon_year {
        config.horizon_year = year;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    println!("Using seed: {}", seed);

    println!("Generating family tree...");
    let mut engine = GenerationEngine::new(seed);
    let tree = engine.generate(&data, &config);
    println!("Generated tree with {} people", tree.total_count());
    info!("Epoch {} to horizon {}", config.epoch_year, config.horizon_year);

    let stdout = io::stdout();
    if args.report {
        menu::write_report(&mut stdout.lock(), &tree)?;
        return Ok(());
    }

    let stdin = io::stdin();
    Menu::new(&tree, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}
