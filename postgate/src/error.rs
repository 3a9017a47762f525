//! Error types for the merge gate.
//!
//! Two tiers, both fatal: a `RuleViolation` means a post was read
//! successfully and failed a check; an `EnvironmentError` means the gate
//! could not even inspect the change set. Neither is ever downgraded to
//! a warning — the run aborts at the first error of either kind.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// A post failed one of the merge rules.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RuleViolation {
    /// The post carries `draft: true` (any letter casing of the value).
    #[error("draft is enabled in {} (draft: {value}); disable it before merging", .file.display())]
    DraftEnabled {
        /// The offending post file.
        file: PathBuf,
        /// The raw value of the `draft` key as written in the header.
        value: String,
    },

    /// The post's publish date is not the current calendar date.
    #[error("stale date in {}: post is dated {post_date}, today is {today}", .file.display())]
    DateMismatch {
        /// The offending post file.
        file: PathBuf,
        /// The calendar date parsed from the post header.
        post_date: NaiveDate,
        /// The reference date the gate was run with.
        today: NaiveDate,
    },
}

/// The gate could not inspect the change set.
///
/// These are infrastructure failures (bad git state, unreadable files,
/// malformed headers), distinct from a post legitimately failing a rule.
/// CI must treat them as failed checks all the same.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnvironmentError {
    /// The git subprocess could not be spawned or exited non-zero.
    #[error("git diff against {base} failed: {detail}")]
    GitDiff {
        /// The reference the diff was taken against.
        base: String,
        /// Spawn error or captured stderr from git.
        detail: String,
    },

    /// A post file could not be opened or read.
    #[error("failed to read {}", .file.display())]
    Io {
        /// The file that could not be read.
        file: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A post file ended before the full header window was read.
    #[error("{} has only {lines} line(s); expected at least {expected} header lines", .file.display())]
    TruncatedHeader {
        /// The file that is too short.
        file: PathBuf,
        /// How many lines the file actually has.
        lines: usize,
        /// The configured header window.
        expected: usize,
    },

    /// A `date` value in a post header is not a parseable date/time.
    #[error("unparsable date in {}: {value:?}", .file.display())]
    UnparsableDate {
        /// The file carrying the bad value.
        file: PathBuf,
        /// The raw value that failed to parse.
        value: String,
        /// The parse error from the last format attempted.
        #[source]
        source: chrono::ParseError,
    },

    /// An exclude glob supplied in the source config is malformed.
    #[error("invalid exclude pattern {pattern:?}")]
    InvalidExclude {
        /// The pattern that failed to compile.
        pattern: String,
        /// The underlying glob error.
        #[source]
        source: glob::PatternError,
    },
}

/// Umbrella error returned by the public gate API.
#[derive(Debug, Error)]
pub enum GateError {
    /// A post failed a merge rule.
    #[error(transparent)]
    Violation(#[from] RuleViolation),
    /// The gate could not inspect the change set.
    #[error(transparent)]
    Environment(#[from] EnvironmentError),
}
