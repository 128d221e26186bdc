//! Wordle Word Lists - CLI
//!
//! Generates `<N>letter/words.txt` and `<N>letter/answers.txt` for lengths 2-10.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_lists::{
    commands::{GenerateConfig, run_generate, run_stats, run_verify},
    output::{print_generate_report, print_statistics, print_verify_report},
    wordlists::{SeedSet, loader::load_from_dir},
};

#[derive(Parser)]
#[command(
    name = "wordle_lists",
    about = "Generate guess and answer word lists for 2-10 letter Wordle",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output directory for the <N>letter/ buckets
    #[arg(short, long, global = true, default_value = "data")]
    output: PathBuf,

    /// Directory of <N>letter.txt seed files (default: embedded seeds)
    #[arg(long, global = true)]
    seeds: Option<PathBuf>,

    /// Suppress the progress bar and report
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and write all word lists (default)
    Generate,

    /// Check an existing output directory against the file contract
    Verify,

    /// Show per-length counts without writing anything
    Stats,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("wordle_lists={default_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load seeds from `--seeds` or fall back to the embedded vocabularies
fn load_seeds(seeds_dir: Option<&Path>) -> Result<SeedSet> {
    match seeds_dir {
        Some(dir) => {
            if !dir.is_dir() {
                bail!("Seed directory {} does not exist", dir.display());
            }
            load_from_dir(dir)
                .with_context(|| format!("Failed to load seeds from {}", dir.display()))
        }
        None => Ok(SeedSet::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Generate if no command given
    let command = cli.command.unwrap_or(Commands::Generate);

    match command {
        Commands::Generate => run_generate_command(&cli.output, cli.seeds.as_deref(), cli.quiet),
        Commands::Verify => run_verify_command(&cli.output, cli.quiet),
        Commands::Stats => run_stats_command(cli.seeds.as_deref(), cli.quiet),
    }
}

fn run_generate_command(output: &Path, seeds_dir: Option<&Path>, quiet: bool) -> Result<()> {
    let seeds = load_seeds(seeds_dir)?;
    debug!(tokens = seeds.total_tokens(), "seed vocabularies ready");

    let config = GenerateConfig::new(output).with_progress(!quiet);
    let report = run_generate(&seeds, &config)
        .with_context(|| format!("Failed to generate word lists in {}", output.display()))?;

    if !quiet {
        print_generate_report(&report);
    }
    Ok(())
}

fn run_verify_command(output: &Path, quiet: bool) -> Result<()> {
    let report = run_verify(output)
        .with_context(|| format!("Failed to verify word lists in {}", output.display()))?;

    if !quiet {
        print_verify_report(&report);
    }

    if !report.is_clean() {
        bail!("{} contract violations in {}", report.violation_count(), output.display());
    }
    Ok(())
}

fn run_stats_command(seeds_dir: Option<&Path>, quiet: bool) -> Result<()> {
    let seeds = load_seeds(seeds_dir)?;
    let stats = run_stats(&seeds);

    if !quiet {
        print_statistics(&stats);
    }
    Ok(())
}
