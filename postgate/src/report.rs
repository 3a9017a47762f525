//! Gate run report types.

use serde::Serialize;

/// Summary of a fully successful gate run.
///
/// A report only exists when no rule was violated and the environment
/// held up end to end — the first violation or environment failure
/// aborts the run with an error instead, so there is nothing partial to
/// report.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct GateReport {
    /// Total number of added files reported by the diff.
    pub added_files: usize,
    /// Candidate posts removed by exclude patterns before being read.
    pub excluded: usize,
    /// Posts that were read and passed every rule, in check order.
    pub posts: Vec<String>,
}

impl GateReport {
    /// Number of posts that were read and checked.
    #[must_use]
    pub fn posts_checked(&self) -> usize {
        self.posts.len()
    }
}
