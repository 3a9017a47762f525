//! Configuration types for the merge gate.
//!
//! Split into core rule config (universal) and source-specific config
//! (how the change set is discovered). The rule engine never sees git
//! concerns; the diff source never sees rule concerns.

/// Default diff base: the merge target branch.
pub const DEFAULT_BASE: &str = "origin/main";

/// Default content directory prefix for posts.
pub const DEFAULT_POSTS_PREFIX: &str = "content/posts/";

/// Default number of header lines scanned for metadata.
pub const DEFAULT_HEADER_LINES: usize = 10;

/// Core rule config — applies regardless of where paths come from.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct RuleConfig {
    /// How many leading lines of each post form the metadata window.
    ///
    /// Exactly this many lines are read; a shorter file is a fatal
    /// error. Metadata declared after this window is invisible to the
    /// gate, and body text inside the window that happens to look like
    /// `key: value` is treated as metadata. That trade-off is accepted:
    /// the window is a heuristic, not a front-matter parser.
    pub header_lines: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            header_lines: DEFAULT_HEADER_LINES,
        }
    }
}

/// Diff-source options: where the set of added files comes from and
/// which of them count as posts.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct DiffSourceConfig {
    /// Reference the diff is taken against (branch or commit).
    pub base: String,
    /// String prefix a path must carry to be treated as a post.
    /// Matched on the raw path string as reported by the diff.
    pub posts_prefix: String,
    /// Exclude patterns (glob format) applied to candidate post paths.
    pub exclude: Vec<String>,
}

impl Default for DiffSourceConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE.to_owned(),
            posts_prefix: DEFAULT_POSTS_PREFIX.to_owned(),
            exclude: Vec::new(),
        }
    }
}
