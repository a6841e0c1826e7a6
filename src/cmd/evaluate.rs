use crate::reports;
use clap::Args;
use saju::api::{self, EvaluationRequest};
use saju::config::Config;
use saju::error::SajuResult;
use saju::scorer::loader::load_candidates_from_file;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Request JSON: four pillars plus the resolved favorable set and strength.
    #[arg(short, long)]
    pub request: PathBuf,

    /// Candidate CSV: `label,char,element,char,element,...`.
    #[arg(short = 'n', long)]
    pub candidates: PathBuf,

    /// Writes the full ranked report, traces included, as JSON.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Prints the trace of the best candidate.
    #[arg(long, default_value_t = false)]
    pub trace: bool,
}

pub fn run(args: EvaluateArgs, config: Config) -> SajuResult<()> {
    info!("📂 Loading request: {}", args.request.display());
    let request = EvaluationRequest::load_from_file(&args.request)?;

    info!("📂 Loading candidates: {}", args.candidates.display());
    let candidates = load_candidates_from_file(&args.candidates)?;

    let report = api::evaluate(&request, &candidates, &config)?;

    reports::print_ranking(&report, config.batch.top);
    reports::print_failures(&report.failures);
    if args.trace {
        if let Some(best) = report.results.first() {
            reports::print_trace(best);
        }
    }

    if let Some(path) = &args.json {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &report)?;
        info!("💾 Report written to {}", path.display());
    }
    Ok(())
}
