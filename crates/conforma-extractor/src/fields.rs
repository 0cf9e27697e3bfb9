//! Readers for the `custom` annotation map
//!
//! Each reader is total: a missing key or a value of an unexpected shape
//! yields the empty default instead of an error.

use crate::config::ExtractorConfig;
use crate::xref;
use conforma_domain::{AnnotationRef, CustomValue};
use tracing::trace;

/// `short_name`, rendered through its canonical text
pub fn short_name(a: &AnnotationRef) -> String {
    a.custom("short_name")
        .and_then(CustomValue::to_text)
        .unwrap_or_default()
}

/// `collections`; only string elements of a list are kept
pub fn collections(a: &AnnotationRef) -> Vec<String> {
    let Some(value) = a.custom("collections") else {
        return Vec::new();
    };

    match value.as_list() {
        Some(items) => items
            .iter()
            .filter_map(|item| {
                let collection = item.as_str();
                if collection.is_none() {
                    trace!(?item, "skipping non-string collection");
                }
                collection.map(str::to_string)
            })
            .collect(),
        None => Vec::new(),
    }
}

/// `depends_on`; list elements and lone scalars are coerced to text
pub fn depends_on(a: &AnnotationRef) -> Vec<String> {
    match a.custom("depends_on") {
        Some(CustomValue::List(items)) => items.iter().filter_map(CustomValue::to_text).collect(),
        Some(value) => value.to_text().into_iter().collect(),
        None => Vec::new(),
    }
}

/// A scalar custom value as text
///
/// Strings get their full-form xref macros resolved to URLs. Timestamps,
/// numbers and booleans are coerced to their canonical text. Lists and
/// unrecognized shapes give an empty string.
pub fn custom_string(a: &AnnotationRef, key: &str, config: &ExtractorConfig) -> String {
    match a.custom(key) {
        Some(CustomValue::String(s)) => xref::resolve_urls(s, config),
        Some(CustomValue::List(_)) | Some(CustomValue::Other) | None => String::new(),
        Some(scalar) => scalar.to_text().unwrap_or_default(),
    }
}

/// `effective_on`
pub fn effective_on(a: &AnnotationRef, config: &ExtractorConfig) -> String {
    custom_string(a, "effective_on", config)
}

/// `solution`; strings have xref macros reduced to labels, other scalars
/// use their canonical text
pub fn solution(a: &AnnotationRef) -> String {
    match a.custom("solution") {
        Some(CustomValue::String(s)) => xref::unlink(s),
        Some(CustomValue::List(_)) | Some(CustomValue::Other) | None => String::new(),
        Some(scalar) => scalar.to_text().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use conforma_domain::{Annotations, Ref};

    fn rule(custom: &[(&str, CustomValue)]) -> AnnotationRef {
        let annotations = custom
            .iter()
            .fold(Annotations::default(), |acc, (k, v)| acc.with_custom(*k, v.clone()));
        AnnotationRef::new(Ref::parse("data.policy.release.pkg.deny")).with_annotations(annotations)
    }

    #[test]
    fn test_short_name_coercion() {
        assert_eq!(short_name(&rule(&[("short_name", "no_cve".into())])), "no_cve");
        assert_eq!(short_name(&rule(&[("short_name", 42i64.into())])), "42");
        assert_eq!(short_name(&rule(&[("short_name", true.into())])), "true");
        assert_eq!(short_name(&rule(&[("short_name", CustomValue::Other)])), "");
        assert_eq!(short_name(&rule(&[])), "");
    }

    #[test]
    fn test_collections_drop_non_strings() {
        let value = CustomValue::List(vec!["a".into(), CustomValue::Integer(5), "b".into()]);
        assert_eq!(collections(&rule(&[("collections", value)])), vec!["a", "b"]);
    }

    #[test]
    fn test_collections_scalar_is_empty() {
        assert!(collections(&rule(&[("collections", "minimal".into())])).is_empty());
        assert!(collections(&rule(&[])).is_empty());
    }

    #[test]
    fn test_depends_on_scalar_and_list() {
        assert_eq!(depends_on(&rule(&[("depends_on", "single".into())])), vec!["single"]);
        assert_eq!(
            depends_on(&rule(&[("depends_on", vec!["a", "b"].into())])),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_depends_on_coerces_elements() {
        let value = CustomValue::List(vec!["a".into(), CustomValue::Integer(5), CustomValue::Bool(false)]);
        assert_eq!(depends_on(&rule(&[("depends_on", value)])), vec!["a", "5", "false"]);
        assert_eq!(depends_on(&rule(&[("depends_on", 7i64.into())])), vec!["7"]);
    }

    #[test]
    fn test_depends_on_absent_or_other() {
        assert!(depends_on(&rule(&[])).is_empty());
        assert!(depends_on(&rule(&[("depends_on", CustomValue::Other)])).is_empty());
    }

    #[test]
    fn test_effective_on_timestamp() {
        let ts = DateTime::parse_from_rfc3339("2022-01-01T00:00:00Z").unwrap();
        let config = ExtractorConfig::default();
        assert_eq!(
            effective_on(&rule(&[("effective_on", ts.into())]), &config),
            "2022-01-01T00:00:00Z"
        );
    }

    #[test]
    fn test_effective_on_string_and_list() {
        let config = ExtractorConfig::default();
        assert_eq!(
            effective_on(&rule(&[("effective_on", "2023-06-01T00:00:00Z".into())]), &config),
            "2023-06-01T00:00:00Z"
        );
        assert_eq!(
            effective_on(&rule(&[("effective_on", vec!["2023"].into())]), &config),
            ""
        );
    }

    #[test]
    fn test_custom_string_resolves_urls() {
        let config = ExtractorConfig::default();
        let a = rule(&[("link", "xref:mod:ROOT:file.adoc#anchor[Some Label]".into())]);
        assert_eq!(
            custom_string(&a, "link", &config),
            "https://conforma.dev/docs/mod/file.html#anchor"
        );
    }

    #[test]
    fn test_solution_unlinks() {
        let a = rule(&[(
            "solution",
            "Follow xref:mod:ROOT:file.adoc#anchor[the guide] and retry.".into(),
        )]);
        assert_eq!(solution(&a), "Follow the guide and retry.");
    }

    #[test]
    fn test_solution_scalar_coercion() {
        let ts = DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z").unwrap();
        assert_eq!(solution(&rule(&[("solution", ts.into())])), "2024-01-02T03:04:05Z");
        assert_eq!(solution(&rule(&[("solution", 3i64.into())])), "3");
        assert_eq!(solution(&rule(&[("solution", true.into())])), "true");
    }

    #[test]
    fn test_solution_list_or_absent() {
        assert_eq!(solution(&rule(&[("solution", vec!["a"].into())])), "");
        assert_eq!(solution(&rule(&[("solution", CustomValue::Other)])), "");
        assert_eq!(solution(&rule(&[])), "");
    }
}
