//! Integration tests for the inspect command
//!
//! These drive the command layer against annotation documents on disk.

use conforma_cli::cli::{InspectArgs, KindArg};
use conforma_cli::commands::inspect_rules;
use conforma_cli::Config;
use conforma_domain::RuleKind;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_document(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn args(files: Vec<PathBuf>) -> InspectArgs {
    InspectArgs {
        files,
        collection: None,
        kind: None,
    }
}

const RELEASE_RULES: &str = r#"[
    {
        "path": "data.policy.release.cve.deny",
        "annotations": {
            "title": "No critical CVEs",
            "custom": {"short_name": "cve_blockers", "collections": ["minimal", "redhat"]}
        }
    },
    {
        "path": "data.policy.release.cve.warn",
        "annotations": {
            "title": "No high CVEs",
            "custom": {"short_name": "cve_warnings", "collections": ["redhat"]}
        }
    }
]"#;

const PIPELINE_RULE: &str = r#"{
    "path": "data.policy.pipeline.basic.deny",
    "annotations": {"custom": {"short_name": "expected_kind"}}
}"#;

#[test]
fn test_inspect_multiple_documents() {
    let release = write_document(RELEASE_RULES);
    let pipeline = write_document(PIPELINE_RULE);

    let rules = inspect_rules(
        &args(vec![release.path().to_path_buf(), pipeline.path().to_path_buf()]),
        &Config::default(),
    )
    .unwrap();

    let codes: Vec<&str> = rules.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["cve.cve_blockers", "cve.cve_warnings", "basic.expected_kind"]);
}

#[test]
fn test_inspect_filters() {
    let release = write_document(RELEASE_RULES);
    let pipeline = write_document(PIPELINE_RULE);
    let files = vec![release.path().to_path_buf(), pipeline.path().to_path_buf()];

    let mut by_collection = args(files.clone());
    by_collection.collection = Some("minimal".to_string());
    let rules = inspect_rules(&by_collection, &Config::default()).unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].short_name, "cve_blockers");

    let mut by_kind = args(files);
    by_kind.kind = Some(KindArg::Deny);
    let rules = inspect_rules(&by_kind, &Config::default()).unwrap();
    assert_eq!(rules.len(), 2);
    assert!(rules.iter().all(|r| r.kind == RuleKind::Deny));
}

#[test]
fn test_inspect_uses_configured_categories() {
    let pipeline = write_document(PIPELINE_RULE);
    let mut config = Config::default();
    config.extractor.rule_categories.clear();

    let rules = inspect_rules(&args(vec![pipeline.path().to_path_buf()]), &config).unwrap();
    assert_eq!(rules[0].code, "pipeline.basic.expected_kind");
}

#[test]
fn test_inspect_missing_file() {
    let result = inspect_rules(&args(vec![PathBuf::from("/nonexistent/rules.json")]), &Config::default());
    assert!(result.is_err());
}

#[test]
fn test_inspect_invalid_document() {
    let broken = write_document("not json at all");
    let result = inspect_rules(&args(vec![broken.path().to_path_buf()]), &Config::default());
    assert!(result.is_err());
}
