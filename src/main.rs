use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use saju::config::ScoringWeights;
use saju::error::SajuResult;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON weights file; explicit flags still win over its values.
    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score and rank candidate names against one chart.
    Evaluate(cmd::evaluate::EvaluateArgs),
    /// Print the hidden-stem table.
    Tables(cmd::inspect::TablesArgs),
    /// Classify relations among two or three branches.
    Relate(cmd::inspect::RelateArgs),
    /// Root strength of a stem in each branch.
    Root(cmd::inspect::RootArgs),
}

fn run_evaluate(
    args: cmd::evaluate::EvaluateArgs,
    weights_path: Option<&str>,
    sub_matches: &clap::ArgMatches,
) -> SajuResult<()> {
    let mut config = args.config.clone();
    if let Some(path) = weights_path {
        info!("⚖️  Loading Weights from: {}", path);
        let mut file_weights = ScoringWeights::load_from_file(path)?;
        file_weights.merge_from_cli(&args.config.weights, sub_matches);
        config.weights = file_weights;
    } else {
        warn!("⚠️  No external weights loaded. Using embedded defaults.");
    }
    cmd::evaluate::run(args, config)
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Evaluate(args) => {
            // Weight flags live on the subcommand, not the root.
            let sub_matches = matches.subcommand_matches("evaluate").unwrap_or(&matches);
            run_evaluate(args, cli.weights.as_deref(), sub_matches)
        }
        Commands::Tables(args) => cmd::inspect::run_tables(args),
        Commands::Relate(args) => cmd::inspect::run_relate(args),
        Commands::Root(args) => cmd::inspect::run_root(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
