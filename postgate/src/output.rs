//! Shared output formatting for gate reports.
//!
//! Provides JSON and plain-text formatters for `GateReport`.
//! Color/terminal formatting is intentionally excluded from this core
//! module — that concern belongs to the CLI layer.

use std::io::Write;

use crate::report::GateReport;

/// Format a `GateReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &GateReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `GateReport` as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &GateReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  POST MERGE GATE")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  Files added:    {}", report.added_files)?;
    writeln!(writer, "  Posts checked:  {}", report.posts_checked())?;
    writeln!(writer, "  Excluded:       {}", report.excluded)?;
    writeln!(writer)?;

    if !report.posts.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        for post in &report.posts {
            writeln!(writer, "  ok  {post}")?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(
        writer,
        "\u{2713} All {} post(s) passed the merge gate",
        report.posts_checked()
    )?;
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}
