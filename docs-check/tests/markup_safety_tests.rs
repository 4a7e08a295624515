#![allow(clippy::unwrap_used)]
//! Integration tests for `docs_check::check_markup_safety`.

use std::fs;
use std::path::PathBuf;

use docs_check::{CheckError, FencePolicy, MarkupSafetyConfig, ViolationKind, check_markup_safety};
use tempfile::TempDir;

fn meta_dir() -> TempDir {
    TempDir::new().unwrap()
}

fn write(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).unwrap();
}

#[test]
fn test_clean_directory_passes() {
    let tmp = meta_dir();
    write(&tmp, "repo-map.md", "# Repo map\n\n- `src/` holds the code\n");
    write(&tmp, "symbol-index.md", "# Symbols\n\n```rust\nfn main() {}\n```\n");

    let report = check_markup_safety(&MarkupSafetyConfig::new(tmp.path())).unwrap();
    assert!(report.ok, "unexpected: {:?}", report.violations);
    assert_eq!(report.scanned_files, 2);
    assert_eq!(report.violations_count(), 0);
}

#[test]
fn test_reports_every_violation_across_files() {
    let tmp = meta_dir();
    write(&tmp, "a.md", "line one\nuses <Widget>\n");
    write(&tmp, "b.md", "map{key}\nfine\nalso } here\n");

    let report = check_markup_safety(&MarkupSafetyConfig::new(tmp.path())).unwrap();
    assert!(!report.ok);
    assert_eq!(report.scanned_files, 2);

    let rendered: Vec<String> = report
        .violations
        .iter()
        .map(|v| v.format_human_readable())
        .collect();
    assert_eq!(
        rendered,
        vec![
            "a.md:2 contains raw '<' that looks like JSX",
            "b.md:1 contains raw '{' or '}'",
            "b.md:3 contains raw '{' or '}'",
        ]
    );
}

#[test]
fn test_fenced_content_is_exempt() {
    let tmp = meta_dir();
    write(
        &tmp,
        "code-index.md",
        "# Index\n```\n<Foo>\nlet x = {};\n```\nafter <Foo\n",
    );

    let report = check_markup_safety(&MarkupSafetyConfig::new(tmp.path())).unwrap();
    assert_eq!(report.violations_count(), 1);
    let v = &report.violations[0];
    assert_eq!(v.kind, ViolationKind::InlineTag);
    assert_eq!(v.line, 6);
    assert_eq!(v.file, PathBuf::from("code-index.md"));
}

#[test]
fn test_comparisons_are_not_flagged() {
    let tmp = meta_dir();
    write(&tmp, "limits.md", "a < b\nvalue <= 5\nx<3\n");

    let report = check_markup_safety(&MarkupSafetyConfig::new(tmp.path())).unwrap();
    assert!(report.ok, "unexpected: {:?}", report.violations);
}

#[test]
fn test_other_extensions_and_subdirectories_ignored() {
    let tmp = meta_dir();
    write(&tmp, "data.json", "{\"a\": 1}\n");
    write(&tmp, "page.mdx", "<Tabs>\n");
    fs::create_dir(tmp.path().join("nested")).unwrap();
    fs::write(tmp.path().join("nested/deep.md"), "{oops}\n").unwrap();

    let report = check_markup_safety(&MarkupSafetyConfig::new(tmp.path())).unwrap();
    assert!(report.ok);
    assert_eq!(report.scanned_files, 0);
}

#[test]
fn test_custom_extensions() {
    let tmp = meta_dir();
    write(&tmp, "page.mdx", "<Tabs>\n");

    let mut config = MarkupSafetyConfig::new(tmp.path());
    config.extensions = vec!["md".to_owned(), "mdx".to_owned()];
    let report = check_markup_safety(&config).unwrap();
    assert_eq!(report.scanned_files, 1);
    assert_eq!(report.violations_count(), 1);
}

#[test]
fn test_unterminated_fence_policy() {
    let tmp = meta_dir();
    write(&tmp, "broken.md", "intro\n```\n{never checked}\n");

    let strict = check_markup_safety(&MarkupSafetyConfig::new(tmp.path())).unwrap();
    assert_eq!(strict.violations_count(), 1);
    assert_eq!(strict.violations[0].kind, ViolationKind::UnterminatedFence);
    assert_eq!(strict.violations[0].line, 2);

    let mut config = MarkupSafetyConfig::new(tmp.path());
    config.fence_policy = FencePolicy::Permissive;
    let permissive = check_markup_safety(&config).unwrap();
    assert!(permissive.ok);
}

#[test]
fn test_runs_are_idempotent() {
    let tmp = meta_dir();
    write(&tmp, "a.md", "<b>\n{\n");
    let config = MarkupSafetyConfig::new(tmp.path());

    let first = check_markup_safety(&config).unwrap();
    let second = check_markup_safety(&config).unwrap();
    assert_eq!(first.violations, second.violations);
    assert_eq!(first.ok, second.ok);
}

#[test]
fn test_missing_directory_is_fatal() {
    let tmp = meta_dir();
    let result = check_markup_safety(&MarkupSafetyConfig::new(tmp.path().join("_meta")));
    let err = result.unwrap_err();
    assert!(matches!(err, CheckError::MissingPath { .. }), "got: {err}");
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_unreadable_content_is_fatal() {
    let tmp = meta_dir();
    fs::write(tmp.path().join("binary.md"), [0xc3, 0x28]).unwrap();
    let err = check_markup_safety(&MarkupSafetyConfig::new(tmp.path())).unwrap_err();
    assert!(matches!(err, CheckError::InvalidEncoding { .. }), "got: {err}");
}
