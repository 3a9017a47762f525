//! Merge rules applied to extracted header pairs.
//!
//! Two rules, no shared state: the draft flag must be off, and the
//! publish date must be the reference date the gate was run with.
//! Evaluation is first-violation-wins — the run aborts on the first
//! failed rule and nothing else is inspected.

use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{EnvironmentError, GateError, RuleViolation};

/// Date-and-time layouts accepted for the `date` key, without offset.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-and-time layouts accepted for the `date` key, with a UTC offset.
const DATE_TIME_OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

/// Parse a header `date` value down to its calendar date.
///
/// Accepts an extended-format date (`2023-01-01`), optionally followed by
/// a time of day and a UTC offset. Time of day and offset are dropped —
/// only the calendar date takes part in the comparison, and an offset is
/// not converted to any other zone.
///
/// # Errors
///
/// Returns the parse error for the plain-date layout if no accepted
/// layout matches.
pub fn parse_post_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    let date_err = match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => return Ok(date),
        Err(err) => err,
    };
    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt.date());
        }
    }
    for format in DATE_TIME_OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Ok(dt.date_naive());
        }
    }
    Err(date_err)
}

/// Evaluate every header pair of one post against the merge rules.
///
/// Pairs are visited in extraction order; duplicate keys are evaluated
/// independently. Keys are matched case-sensitively. For the draft rule
/// only the literal value `true` (any letter casing) triggers — other
/// truthy spellings such as `yes` or `1` do not.
///
/// # Errors
///
/// Returns [`RuleViolation::DraftEnabled`] or
/// [`RuleViolation::DateMismatch`] for the first violated rule, and
/// [`EnvironmentError::UnparsableDate`] if a `date` value does not parse.
pub fn evaluate_post(
    file: &Path,
    pairs: &[(String, String)],
    today: NaiveDate,
) -> Result<(), GateError> {
    for (key, value) in pairs {
        if key == "draft" && value.eq_ignore_ascii_case("true") {
            return Err(RuleViolation::DraftEnabled {
                file: file.to_owned(),
                value: value.clone(),
            }
            .into());
        }

        if key == "date" {
            let post_date =
                parse_post_date(value).map_err(|source| EnvironmentError::UnparsableDate {
                    file: file.to_owned(),
                    value: value.clone(),
                    source,
                })?;
            if post_date != today {
                return Err(RuleViolation::DateMismatch {
                    file: file.to_owned(),
                    post_date,
                    today,
                }
                .into());
            }
        }
    }
    Ok(())
}
