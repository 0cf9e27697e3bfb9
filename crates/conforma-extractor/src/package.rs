//! Package and code package derivation

use crate::config::{ExtractorConfig, DATA_ROOT, POLICY_NAMESPACE};
use conforma_domain::{AnnotationRef, Term};

/// Package segments of a rule, without the data root
///
/// The explicit package declaration wins. Without one, the rule path minus
/// its last term (the rule name) is used.
pub fn package_segments(a: &AnnotationRef) -> Vec<String> {
    let terms: &[Term] = match a.package_path() {
        Some(path) => path.terms(),
        None => a.path.parent(),
    };

    let mut segments: Vec<String> = terms.iter().map(Term::unquoted).collect();
    if segments.first().map(String::as_str) == Some(DATA_ROOT) {
        segments.remove(0);
    }
    segments
}

/// Dotted package name, e.g. `policy.release.attestation`
pub fn package_name(a: &AnnotationRef) -> String {
    package_segments(a).join(".")
}

/// Package name used in rule codes
///
/// Drops a leading `policy` segment, then a leading known rule category.
/// The category check always looks at whatever segment is first at that
/// point, so a package that merely starts with a category-like name loses
/// that segment too.
pub fn code_package(a: &AnnotationRef, config: &ExtractorConfig) -> String {
    let segments = package_segments(a);
    let mut rest: &[String] = &segments;

    if let Some((first, tail)) = rest.split_first() {
        if first == POLICY_NAMESPACE {
            rest = tail;
        }
    }

    if let Some((first, tail)) = rest.split_first() {
        if config.is_rule_category(first) {
            rest = tail;
        }
    }

    rest.join(".")
}
