//! # postgate
//!
//! Merge-gate validation for newly added blog posts.
//!
//! The gate enumerates files added in the current change set, keeps the
//! ones under the posts content directory, reads a fixed window of
//! header lines from each, and checks two rules: the post must not be a
//! draft, and its publish date must be the reference date the gate was
//! run with. The first violated rule aborts the whole run.
//!
//! The crate separates the **rule engine** (driven by a plain list of
//! paths) from the **diff source** (a git subprocess), so the engine can
//! be exercised against fixtures without a repository.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use postgate::{check_repository, DiffSourceConfig, RuleConfig};
//!
//! let source = DiffSourceConfig::default();
//! let rules = RuleConfig::default();
//! let today = chrono::Local::now().date_naive();
//!
//! let report = check_repository(&source, &rules, today).unwrap();
//! println!("Posts checked: {}", report.posts_checked());
//! ```

mod config;
mod diff;
mod error;
mod metadata;
pub mod output;
mod report;
mod rules;

pub use config::{
    DEFAULT_BASE, DEFAULT_HEADER_LINES, DEFAULT_POSTS_PREFIX, DiffSourceConfig, RuleConfig,
};
pub use diff::{added_paths, added_paths_in};
pub use error::{EnvironmentError, GateError, RuleViolation};
pub use metadata::{extract_pairs, read_header_block};
pub use report::GateReport;
pub use rules::{evaluate_post, parse_post_date};

use std::path::Path;

use chrono::NaiveDate;
use glob::Pattern;

/// Check a change set given as a plain list of added paths.
///
/// This is the rule-engine entry point: no subprocess is involved, so
/// tests can drive it from a fixture list. Paths not under
/// `source.posts_prefix` are never opened. Candidates matching an
/// exclude pattern are skipped before being read. `today` is the
/// reference calendar date for the date rule — callers decide where it
/// comes from.
///
/// # Errors
///
/// Returns the first [`RuleViolation`] or [`EnvironmentError`]
/// encountered, in enumerator order and then extraction order. Nothing
/// after the first error is inspected.
pub fn check_paths(
    added: &[String],
    source: &DiffSourceConfig,
    rules_config: &RuleConfig,
    today: NaiveDate,
) -> Result<GateReport, GateError> {
    let exclude_patterns = compile_excludes(&source.exclude)?;

    let mut posts = Vec::new();
    let mut excluded = 0;
    for path in added {
        if !path.starts_with(&source.posts_prefix) {
            continue;
        }
        if matches_exclude(path, &exclude_patterns) {
            tracing::debug!(path = %path, "candidate excluded by pattern");
            excluded += 1;
            continue;
        }

        tracing::debug!(path = %path, "checking post header");
        let block = metadata::read_header_block(Path::new(path), rules_config.header_lines)?;
        let pairs = metadata::extract_pairs(&block);
        rules::evaluate_post(Path::new(path), &pairs, today)?;
        posts.push(path.clone());
    }

    Ok(GateReport {
        added_files: added.len(),
        excluded,
        posts,
    })
}

/// Check the repository in the current working directory.
///
/// Enumerates added files with git against `source.base`, then applies
/// [`check_paths`].
///
/// # Errors
///
/// Returns [`EnvironmentError::GitDiff`] if the diff cannot be taken,
/// otherwise the same contract as [`check_paths`].
pub fn check_repository(
    source: &DiffSourceConfig,
    rules_config: &RuleConfig,
    today: NaiveDate,
) -> Result<GateReport, GateError> {
    let added = diff::added_paths(&source.base)?;
    check_paths(&added, source, rules_config, today)
}

/// Check a candidate path against the exclude patterns.
///
/// A pattern matches either the full path or the bare file name, so
/// `*wip*` works without spelling out directory components.
fn matches_exclude(path: &str, patterns: &[Pattern]) -> bool {
    patterns.iter().any(|pat| {
        pat.matches(path)
            || Path::new(path)
                .file_name()
                .is_some_and(|name| pat.matches(&name.to_string_lossy()))
    })
}

fn compile_excludes(patterns: &[String]) -> Result<Vec<Pattern>, EnvironmentError> {
    patterns
        .iter()
        .map(|pat| {
            Pattern::new(pat).map_err(|source| EnvironmentError::InvalidExclude {
                pattern: pat.clone(),
                source,
            })
        })
        .collect()
}
