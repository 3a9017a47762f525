//! Added-file enumeration via the version-control CLI.
//!
//! The diff step is the only subprocess boundary in the gate. It is kept
//! behind a narrow function returning plain path strings so the rule
//! engine can be driven from a fixture list in tests.

use std::path::Path;
use std::process::Command;

use crate::error::EnvironmentError;

/// List the files added between `base` and the current checkout,
/// resolved against the repository at `repo_root`.
///
/// Runs `git diff --name-only --diff-filter=A <base> HEAD` and splits
/// stdout into one path per line, in the order git reports. Modified,
/// deleted, and renamed files are not listed. A trailing newline in the
/// output is tolerated.
///
/// # Errors
///
/// Returns [`EnvironmentError::GitDiff`] if git cannot be spawned or
/// exits non-zero (bad reference, not a repository); captured stderr is
/// included in the message. There is no partial or degraded mode.
pub fn added_paths_in(repo_root: &Path, base: &str) -> Result<Vec<String>, EnvironmentError> {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo_root)
        .args(["diff", "--name-only", "--diff-filter=A", base, "HEAD"])
        .output()
        .map_err(|err| EnvironmentError::GitDiff {
            base: base.to_owned(),
            detail: format!("failed to run git: {err}"),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(EnvironmentError::GitDiff {
            base: base.to_owned(),
            detail: format!("{}: {}", output.status, stderr.trim()),
        });
    }

    let paths: Vec<String> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(ToOwned::to_owned)
        .collect();
    tracing::debug!(base, count = paths.len(), "enumerated added files");
    Ok(paths)
}

/// List the files added between `base` and the current checkout,
/// resolved against the current working directory.
///
/// # Errors
///
/// Same contract as [`added_paths_in`].
pub fn added_paths(base: &str) -> Result<Vec<String>, EnvironmentError> {
    added_paths_in(Path::new("."), base)
}
