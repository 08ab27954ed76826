//! Bestiary CLI.
//!
//! Usage:
//!   bestiary [rank] [--roster PATH] [--strategy pairwise|round-robin] [--json]
//!   bestiary bout <A> <B> [--roster PATH]
//!   bestiary export <PATH>
//!
//! `-v` logs every bout, `-vv` every attack.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bestiary::config::RankConfig;
use bestiary::logging::setup_logging;
use bestiary::ranking::{rank, Strategy};
use bestiary::report::{bout_transcript, RankReport};
use bestiary::source::{load_or_empty, RosterFile};
use bestiary::{build_info, builtin_roster, fight};
use clap::{Args, Parser, Subcommand};

/// Rank monsters by simulated combat
#[derive(Parser)]
#[command(name = "bestiary")]
#[command(about = "Rank monsters by simulated one-on-one combat", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log detail (-v bouts, -vv attacks)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Rank the roster strongest first (default)
    Rank(RankArgs),

    /// Fight two monsters and print the transcript
    Bout(BoutArgs),

    /// Write the built-in roster to a roster file
    Export(ExportArgs),
}

#[derive(Args, Default)]
struct RankArgs {
    /// Roster file to load instead of the built-in roster
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Ordering strategy
    #[arg(long, value_enum, default_value_t = Strategy::Pairwise)]
    strategy: Strategy,

    /// Print a JSON report instead of tables
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct BoutArgs {
    /// Label of the first monster
    a: String,

    /// Label of the second monster
    b: String,

    /// Roster file to load instead of the built-in roster
    #[arg(long)]
    roster: Option<PathBuf>,
}

#[derive(Args)]
struct ExportArgs {
    /// Destination file
    path: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    tracing::debug!("{}", build_info::summary());

    match cli.command.unwrap_or(Command::Rank(RankArgs::default())) {
        Command::Rank(args) => run_rank(args),
        Command::Bout(args) => run_bout(args),
        Command::Export(args) => run_export(args),
    }
}

fn config_for(roster: Option<PathBuf>) -> RankConfig {
    let config = RankConfig::from_env();
    match roster {
        Some(path) => config.with_roster_path(path),
        None => config,
    }
}

fn run_rank(args: RankArgs) -> Result<()> {
    let mut config = config_for(args.roster).with_strategy(args.strategy);
    config.json = args.json;

    let source = config.record_source();
    let roster = load_or_empty(source.as_ref());
    let ranking = rank(roster.as_slice(), config.strategy);
    let report = RankReport::new(source.describe(), roster, ranking);

    if config.json {
        println!("{}", report.to_json());
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

fn run_bout(args: BoutArgs) -> Result<()> {
    let source = config_for(args.roster).record_source();
    let roster = load_or_empty(source.as_ref());

    let a = roster
        .find(&args.a)
        .with_context(|| format!("cannot fight from {}", source.describe()))?;
    let b = roster
        .find(&args.b)
        .with_context(|| format!("cannot fight from {}", source.describe()))?;

    let outcome = fight(a, b);
    print!("{}", bout_transcript(a, b, &outcome));
    Ok(())
}

fn run_export(args: ExportArgs) -> Result<()> {
    let file = RosterFile::new(&args.path);
    let roster = builtin_roster();
    file.save(&roster)
        .with_context(|| format!("failed to write {}", args.path.display()))?;
    println!("Wrote {} monsters to {}", roster.len(), args.path.display());
    Ok(())
}
