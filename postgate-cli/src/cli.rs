//! Argument parsing and the top-level run flow.

use std::io;

use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser};
use postgate::{DiffSourceConfig, RuleConfig, check_repository, output};

#[derive(Parser, Debug)]
#[command(
    name = "postgate",
    version,
    about = "Reject merges that add draft or stale blog posts"
)]
pub struct Cli {
    /// Reference the diff is taken against
    #[arg(long, default_value = postgate::DEFAULT_BASE)]
    base: String,

    /// Content directory prefix that marks a path as a post
    #[arg(long = "posts-dir", default_value = postgate::DEFAULT_POSTS_PREFIX)]
    posts_dir: String,

    /// Number of leading lines scanned for metadata
    #[arg(long, default_value_t = postgate::DEFAULT_HEADER_LINES)]
    header_lines: usize,

    /// Exclude candidate posts matching this glob (repeatable)
    #[arg(long)]
    exclude: Vec<String>,

    /// Override the reference date (YYYY-MM-DD); defaults to the local
    /// system date
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Print the run report as JSON to stdout
    #[arg(long)]
    json: bool,

    /// Print a human-readable run summary to stdout
    #[arg(long, conflicts_with = "json")]
    summary: bool,

    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);

    let mut source = DiffSourceConfig::default();
    source.base = cli.base;
    source.posts_prefix = cli.posts_dir;
    source.exclude = cli.exclude;

    let mut rules = RuleConfig::default();
    rules.header_lines = cli.header_lines;

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    tracing::info!(%today, base = %source.base, "running merge gate");

    let report = check_repository(&source, &rules, today)?;

    if cli.json {
        output::write_json(&report, &mut io::stdout())?;
    } else if cli.summary {
        output::write_human(&report, &mut io::stdout())?;
    }
    Ok(())
}
