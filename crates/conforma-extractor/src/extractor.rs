//! Core Extractor implementation

use crate::config::{ExtractorConfig, POLICY_NAMESPACE};
use crate::fields;
use crate::package;
use crate::xref;
use conforma_domain::{AnnotationRef, RuleInfo, RuleKind};
use std::sync::LazyLock;
use tracing::debug;

static DEFAULT_EXTRACTOR: LazyLock<RuleExtractor> = LazyLock::new(RuleExtractor::default);

/// Extract rule metadata with the default configuration
///
/// # Examples
///
/// ```
/// use conforma_domain::{AnnotationRef, Annotations, Ref, RuleKind};
///
/// let rule = AnnotationRef::new(Ref::parse("data.policy.release.cve.deny"))
///     .with_annotations(Annotations::default().with_custom("short_name", "no_cve"));
///
/// let info = conforma_extractor::extract(&rule);
/// assert_eq!(info.code, "cve.no_cve");
/// assert_eq!(info.kind, RuleKind::Deny);
/// ```
pub fn extract(a: &AnnotationRef) -> RuleInfo {
    DEFAULT_EXTRACTOR.extract(a)
}

/// Derives [`RuleInfo`] records from annotation references
///
/// Holds only immutable configuration, so one instance can be shared across
/// threads and called concurrently.
#[derive(Debug, Clone, Default)]
pub struct RuleExtractor {
    config: ExtractorConfig,
}

impl RuleExtractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract the metadata record of one rule
    pub fn extract(&self, a: &AnnotationRef) -> RuleInfo {
        let short_name = fields::short_name(a);
        let code_package = package::code_package(a, &self.config);
        let code = if code_package.is_empty() {
            short_name.clone()
        } else {
            format!("{}.{}", code_package, short_name)
        };

        let info = RuleInfo {
            code,
            code_package,
            collections: fields::collections(a),
            depends_on: fields::depends_on(a),
            description: a.description().map(xref::unlink).unwrap_or_default(),
            documentation_url: self.documentation_url(a, &short_name),
            effective_on: fields::effective_on(a, &self.config),
            kind: kind(a),
            package: package::package_name(a),
            short_name,
            solution: fields::solution(a),
            title: a.title().unwrap_or_default().to_string(),
        };

        debug!(path = %a.path, code = %info.code, kind = %info.kind, "extracted rule metadata");
        info
    }

    /// Documentation link for rules shaped like `data.policy.<category>.<package>.<rule>`
    ///
    /// Any other path shape, or a missing short name, gives an empty string.
    fn documentation_url(&self, a: &AnnotationRef, short_name: &str) -> String {
        let path = a.path.to_string();
        let segments: Vec<&str> = path.split('.').collect();

        match segments.as_slice() {
            [_, namespace, category, pkg, _]
                if *namespace == POLICY_NAMESPACE && !short_name.is_empty() =>
            {
                self.config.rule_doc_url(category, pkg, short_name)
            }
            _ => String::new(),
        }
    }
}

fn kind(a: &AnnotationRef) -> RuleKind {
    a.path
        .last()
        .map(|term| RuleKind::from_rule_name(&term.unquoted()))
        .unwrap_or_default()
}
