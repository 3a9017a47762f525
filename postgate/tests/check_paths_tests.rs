//! Integration tests for `postgate::check_paths`.

use std::fs;

use chrono::NaiveDate;
use postgate::{
    check_paths, DiffSourceConfig, EnvironmentError, GateError, RuleConfig, RuleViolation,
};
use tempfile::TempDir;

fn today() -> NaiveDate {
    "2023-01-02".parse().unwrap()
}

/// A scratch content tree with a `content/posts/` directory, plus a
/// source config whose prefix points into it.
fn content_tree() -> (TempDir, DiffSourceConfig) {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("content/posts")).unwrap();

    let mut source = DiffSourceConfig::default();
    source.posts_prefix = format!("{}/content/posts/", tmp.path().display());
    (tmp, source)
}

fn write_post(tmp: &TempDir, name: &str, header: &[&str]) -> String {
    let path = tmp.path().join("content/posts").join(name);
    let mut content: String = header.join("\n");
    content.push('\n');
    // Pad the body so the file always covers the default header window.
    for _ in header.len()..12 {
        content.push_str("body text\n");
    }
    fs::write(&path, content).unwrap();
    path.display().to_string()
}

#[test]
fn test_clean_post_passes() {
    let (tmp, source) = content_tree();
    let post = write_post(
        &tmp,
        "foo.md",
        &["---", "title: Foo", "draft: false", "date: 2023-01-02", "---"],
    );

    let report = check_paths(&[post.clone()], &source, &RuleConfig::default(), today()).unwrap();
    assert_eq!(report.added_files, 1);
    assert_eq!(report.posts_checked(), 1);
    assert_eq!(report.posts, vec![post]);
}

#[test]
fn test_draft_post_fails_with_draft_error() {
    let (tmp, source) = content_tree();
    let post = write_post(
        &tmp,
        "foo.md",
        &["---", "title: Foo", "draft: true", "date: 2023-01-02", "---"],
    );

    let err = check_paths(&[post], &source, &RuleConfig::default(), today()).unwrap_err();
    assert!(
        matches!(
            err,
            GateError::Violation(RuleViolation::DraftEnabled { .. })
        ),
        "got: {err}"
    );
}

#[test]
fn test_worked_example_draft_wins_over_stale_date() {
    // title, draft: true, date: 2023-01-01 — the draft pair is extracted
    // first, so the draft rule fires even though the date is stale too.
    let (tmp, source) = content_tree();
    let post = write_post(
        &tmp,
        "foo.md",
        &["title: Foo", "draft: true", "date: 2023-01-01"],
    );

    let err = check_paths(&[post], &source, &RuleConfig::default(), today()).unwrap_err();
    assert!(matches!(
        err,
        GateError::Violation(RuleViolation::DraftEnabled { .. })
    ));
}

#[test]
fn test_stale_date_reports_both_dates() {
    let (tmp, source) = content_tree();
    let post = write_post(&tmp, "foo.md", &["title: Foo", "date: 2023-01-01"]);

    let err = check_paths(&[post], &source, &RuleConfig::default(), today()).unwrap_err();
    match err {
        GateError::Violation(RuleViolation::DateMismatch {
            post_date, today, ..
        }) => {
            assert_eq!(post_date.to_string(), "2023-01-01");
            assert_eq!(today.to_string(), "2023-01-02");
        }
        other => panic!("expected DateMismatch, got: {other}"),
    }
}

#[test]
fn test_non_post_paths_are_never_opened() {
    // Paths outside the posts prefix do not exist on disk; if the gate
    // tried to open them the run would fail with an I/O error. The empty
    // path from a trailing diff newline is tolerated the same way.
    let (tmp, source) = content_tree();
    let post = write_post(&tmp, "foo.md", &["date: 2023-01-02"]);
    let added = vec![
        "README.md".to_owned(),
        "static/logo.svg".to_owned(),
        String::new(),
        post,
    ];

    let report = check_paths(&added, &source, &RuleConfig::default(), today()).unwrap();
    assert_eq!(report.added_files, 4);
    assert_eq!(report.posts_checked(), 1);
}

#[test]
fn test_missing_post_file_is_fatal() {
    let (tmp, source) = content_tree();
    drop(tmp);
    let ghost = format!("{}missing.md", source.posts_prefix);

    let err = check_paths(&[ghost], &source, &RuleConfig::default(), today()).unwrap_err();
    assert!(matches!(
        err,
        GateError::Environment(EnvironmentError::Io { .. })
    ));
}

#[test]
fn test_short_post_file_is_fatal() {
    let (tmp, source) = content_tree();
    let path = tmp.path().join("content/posts/short.md");
    fs::write(&path, "title: Foo\ndate: 2023-01-02\n").unwrap();

    let err = check_paths(
        &[path.display().to_string()],
        &source,
        &RuleConfig::default(),
        today(),
    )
    .unwrap_err();
    assert!(
        matches!(
            err,
            GateError::Environment(EnvironmentError::TruncatedHeader { lines: 2, .. })
        ),
        "got: {err}"
    );
}

#[test]
fn test_metadata_past_header_window_is_invisible() {
    // draft: true on line 11 — outside the 10-line window, so it cannot
    // fail the run.
    let (tmp, source) = content_tree();
    let path = tmp.path().join("content/posts/late.md");
    let mut content = String::from("title: Foo\ndate: 2023-01-02\n");
    for _ in 0..8 {
        content.push_str("body text\n");
    }
    content.push_str("draft: true\n");
    fs::write(&path, content).unwrap();

    let report = check_paths(
        &[path.display().to_string()],
        &source,
        &RuleConfig::default(),
        today(),
    )
    .unwrap();
    assert_eq!(report.posts_checked(), 1);
}

#[test]
fn test_exclude_pattern_skips_before_reading() {
    // The excluded candidate is too short to pass the header read; the
    // run only succeeds because the pattern removes it first.
    let (tmp, mut source) = content_tree();
    let path = tmp.path().join("content/posts/skipme.md");
    fs::write(&path, "short\n").unwrap();
    source.exclude = vec!["*skipme.md".to_owned()];

    let report = check_paths(
        &[path.display().to_string()],
        &source,
        &RuleConfig::default(),
        today(),
    )
    .unwrap();
    assert_eq!(report.posts_checked(), 0);
    assert_eq!(report.excluded, 1);
}

#[test]
fn test_invalid_exclude_pattern_is_fatal() {
    let (_tmp, mut source) = content_tree();
    source.exclude = vec!["a[".to_owned()];

    let err = check_paths(&[], &source, &RuleConfig::default(), today()).unwrap_err();
    assert!(matches!(
        err,
        GateError::Environment(EnvironmentError::InvalidExclude { .. })
    ));
}

#[test]
fn test_first_file_violation_stops_the_run() {
    // Both posts would fail; only the first (in enumerator order) is
    // reported.
    let (tmp, source) = content_tree();
    let first = write_post(&tmp, "a.md", &["title: A", "date: 2023-01-01"]);
    let second = write_post(&tmp, "b.md", &["title: B", "draft: true"]);

    let err =
        check_paths(&[first, second], &source, &RuleConfig::default(), today()).unwrap_err();
    assert!(matches!(
        err,
        GateError::Violation(RuleViolation::DateMismatch { .. })
    ));
}

#[test]
fn test_idempotent_for_fixed_inputs() {
    let (tmp, source) = content_tree();
    let post = write_post(&tmp, "foo.md", &["title: Foo", "date: 2023-01-01"]);
    let added = vec![post];

    let first = check_paths(&added, &source, &RuleConfig::default(), today());
    let second = check_paths(&added, &source, &RuleConfig::default(), today());
    assert_eq!(
        first.unwrap_err().to_string(),
        second.unwrap_err().to_string()
    );
}

#[test]
fn test_json_report_contract() {
    let (tmp, source) = content_tree();
    let post = write_post(&tmp, "foo.md", &["title: Foo", "date: 2023-01-02"]);

    let report = check_paths(&[post], &source, &RuleConfig::default(), today()).unwrap();
    let mut buf = Vec::new();
    postgate::output::write_json(&report, &mut buf).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    assert!(json.get("added_files").is_some());
    assert!(json.get("excluded").is_some());
    assert!(json.get("posts").is_some());
    assert_eq!(json["posts"].as_array().unwrap().len(), 1);
}

#[test]
fn test_write_human_success_output() {
    let (tmp, source) = content_tree();
    let post = write_post(&tmp, "foo.md", &["title: Foo", "date: 2023-01-02"]);

    let report = check_paths(&[post], &source, &RuleConfig::default(), today()).unwrap();
    let mut buf = Vec::new();
    postgate::output::write_human(&report, &mut buf).unwrap();
    let output = String::from_utf8(buf).unwrap();

    assert!(
        output.contains("POST MERGE GATE"),
        "missing header, got: {output}"
    );
    assert!(output.contains("Posts checked:  1"), "missing post count");
    assert!(
        output.contains("All 1 post(s) passed"),
        "missing success line"
    );
}
