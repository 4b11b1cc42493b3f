//! Generate command implementation

use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

use super::utils::{parse_manifest_file, ManifestArgs};
use crate::activity::{default_since, parse_since, ActivityScorer, ActivityWindow, GitLog};
use crate::render::{write_mindmap, write_report};

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Count commits since this date (YYYY-MM-DD, default: one year ago)
    #[arg(short, long, value_name = "DATE")]
    pub since: Option<String>,

    /// Only count commits authored by the subsystem's maintainers
    #[arg(short, long)]
    pub author: bool,

    /// Output mind map file ('-' for stdout)
    #[arg(short, long, value_name = "FILE", default_value = "linux-kernel.mm")]
    pub output: PathBuf,

    /// Title of the mind map root node
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Also write a JSON summary report
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Omit timestamps from the report for reproducible diffs
    #[arg(long)]
    pub no_timestamp: bool,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let config = args.manifest.load_config(args.title.clone())?;

    let today = Local::now().date_naive();
    let since = match args.since.as_deref() {
        Some(value) => parse_since(value)?,
        None => default_since(today),
    };
    let window = ActivityWindow::new(since, today)?;
    tracing::info!(
        "Counting commits since {} ({} days, scaling {:.3})",
        window.since(),
        window.days(),
        window.scaling_factor()
    );

    let records = parse_manifest_file(
        &args.manifest.manifest_file(),
        &config,
        args.manifest.policy(),
    )?;

    let history = GitLog::new(&args.manifest.path);
    let scorer = ActivityScorer::new(&history, window, args.author);
    let scored = scorer.score_all(records);

    write_mindmap(&args.output, &config.title, &scored)?;
    tracing::info!("Wrote mind map to {}", args.output.display());

    if let Some(report_path) = args.report.as_ref() {
        write_report(report_path, &scored, &window, args.author, !args.no_timestamp)?;
        tracing::info!("Wrote report to {}", report_path.display());
    }

    let failed = scored.iter().filter(|s| s.commits.is_none()).count();
    if failed > 0 {
        eprintln!("info: {failed} subsystem(s) could not be queried and are marked unknown");
    }
    if args.output.as_os_str() != "-" {
        println!("Wrote {} subsystems to {}", scored.len(), args.output.display());
    }

    Ok(())
}
