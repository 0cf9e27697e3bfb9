//! Parse annotation documents into annotation references

use crate::error::ExtractorError;
use conforma_domain::AnnotationRef;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

/// Parse a JSON annotation document
///
/// The document is either a single annotation object or an array of them.
/// Array entries that do not deserialize are skipped with a warning so one
/// broken rule does not hide the rest of the bundle.
pub fn parse_annotation_document(input: &str) -> Result<Vec<AnnotationRef>, ExtractorError> {
    let json: Value = serde_json::from_str(input.trim())?;

    let entries = match json {
        Value::Array(items) => items,
        obj @ Value::Object(_) => vec![obj],
        _ => {
            return Err(ExtractorError::InvalidFormat(
                "Expected a JSON object or array".to_string(),
            ))
        }
    };

    let mut refs = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<AnnotationRef>(entry) {
            Ok(a) => refs.push(a),
            Err(e) => warn!("Skipping annotation {}: {}", idx, e),
        }
    }

    Ok(refs)
}

/// Read and parse an annotation document from disk
pub fn load_annotation_document<P: AsRef<Path>>(path: P) -> Result<Vec<AnnotationRef>, ExtractorError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let refs = parse_annotation_document(&contents)?;
    debug!("Loaded {} annotations from {}", refs.len(), path.display());
    Ok(refs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_object() {
        let refs = parse_annotation_document(r#"{"path": "data.policy.release.cve.deny"}"#).unwrap();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].path.to_string(), "data.policy.release.cve.deny");
    }

    #[test]
    fn test_parse_array() {
        let refs = parse_annotation_document(
            r#"[
                {"path": ["data", "policy", "release", "cve", "deny"]},
                {"path": "data.policy.pipeline.basic.warn", "package": {"path": "data.policy.pipeline.basic"}}
            ]"#,
        )
        .unwrap();
        assert_eq!(refs.len(), 2);
        assert!(refs[1].package.is_some());
    }

    #[test]
    fn test_parse_partial_success() {
        let refs = parse_annotation_document(
            r#"[
                {"path": "data.a.deny"},
                {"path": {"not": "a path"}},
                {"path": "data.b.warn", "annotations": {"title": 5}},
                {"path": "data.c.deny"}
            ]"#,
        )
        .unwrap();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[1].path.to_string(), "data.c.deny");
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_annotation_document("This is not JSON");
        assert!(matches!(result, Err(ExtractorError::JsonParse(_))));
    }

    #[test]
    fn test_parse_scalar_document() {
        let result = parse_annotation_document("42");
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_annotation_document("/nonexistent/annotations.json");
        assert!(matches!(result, Err(ExtractorError::Io(_))));
    }
}
