//! Configuration for the Extractor
//!
//! The known rule categories and the documentation URL layout are data, not
//! behavior. Defaults match the published Conforma policy library; callers
//! can override them from TOML.

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Leading path segment that denotes the data root
pub const DATA_ROOT: &str = "data";

/// Namespace segment that precedes rule categories in package paths
pub const POLICY_NAMESPACE: &str = "policy";

/// Top-level groupings of the policy library, stripped from rule codes
// TODO: read categories from package annotations once the policy library publishes them
pub const DEFAULT_RULE_CATEGORIES: &[&str] = &["build_task", "pipeline", "release", "task"];

/// Base URL of the documentation site
pub const DEFAULT_DOCS_BASE_URL: &str = "https://conforma.dev/docs";

/// Documentation module hosting the policy rule pages
pub const DEFAULT_POLICY_DOCS_MODULE: &str = "ec-policies";

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Category names dropped from the front of code packages
    pub rule_categories: BTreeSet<String>,

    /// Documentation site root, without trailing slash
    pub docs_base_url: String,

    /// Module of the documentation site holding rule pages
    pub policy_docs_module: String,
}

impl ExtractorConfig {
    /// Whether `segment` names a known rule category
    pub fn is_rule_category(&self, segment: &str) -> bool {
        self.rule_categories.contains(segment)
    }

    /// URL of an anchor inside a documentation module
    pub fn xref_url(&self, module: &str, file: &str, anchor: &str) -> String {
        format!("{}/{}/{}.html#{}", self.base_url(), module, file, anchor)
    }

    /// URL of a rule's entry on its category page
    pub fn rule_doc_url(&self, category: &str, package: &str, short_name: &str) -> String {
        format!(
            "{}/{}/{}_policy.html#{}__{}",
            self.base_url(),
            self.policy_docs_module,
            category,
            package,
            short_name
        )
    }

    fn base_url(&self) -> &str {
        self.docs_base_url.trim_end_matches('/')
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        let base = self.base_url();
        if base.is_empty() {
            return Err(ExtractorError::Config("docs_base_url must not be empty".to_string()));
        }
        if !base.starts_with("https://") && !base.starts_with("http://") {
            return Err(ExtractorError::Config(format!(
                "docs_base_url must be an http(s) URL, got '{}'",
                self.docs_base_url
            )));
        }
        if self.policy_docs_module.trim().is_empty() {
            return Err(ExtractorError::Config("policy_docs_module must not be empty".to_string()));
        }
        if self.rule_categories.iter().any(|c| c.trim().is_empty()) {
            return Err(ExtractorError::Config("rule_categories must not contain blank names".to_string()));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ExtractorError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            rule_categories: DEFAULT_RULE_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            docs_base_url: DEFAULT_DOCS_BASE_URL.to_string(),
            policy_docs_module: DEFAULT_POLICY_DOCS_MODULE.to_string(),
        }
    }
}
