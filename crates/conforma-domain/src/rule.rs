//! Rule metadata record - the extractor's output

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a rule, derived from the rule name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Failing the rule is a violation
    Deny,

    /// Failing the rule is a warning
    Warn,

    /// Anything else (helpers, tests, unnamed rules)
    #[default]
    Other,
}

impl RuleKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Deny => "deny",
            RuleKind::Warn => "warn",
            RuleKind::Other => "other",
        }
    }

    /// Classify a rule by its (unquoted) name
    pub fn from_rule_name(name: &str) -> Self {
        match name {
            "deny" => RuleKind::Deny,
            "warn" => RuleKind::Warn,
            _ => RuleKind::Other,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deny" => Ok(RuleKind::Deny),
            "warn" => Ok(RuleKind::Warn),
            "other" => Ok(RuleKind::Other),
            _ => Err(format!("Invalid rule kind: {}", s)),
        }
    }
}

/// Normalized metadata for one policy rule
///
/// Built once per rule and never mutated afterwards. Serializes with the
/// PascalCase field names used in compliance reports (`Code`,
/// `DocumentationUrl`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RuleInfo {
    /// `CodePackage.ShortName`, or just the short name
    pub code: String,

    /// Package path without the data root, `policy` and category prefixes
    pub code_package: String,

    /// Collections the rule belongs to
    pub collections: Vec<String>,

    /// Codes of rules this rule depends on
    pub depends_on: Vec<String>,

    /// Description with xref markup reduced to labels
    pub description: String,

    /// Link to the rule documentation, empty when unknown
    pub documentation_url: String,

    /// Date from which the rule is enforced
    pub effective_on: String,

    /// Deny, warn or other
    pub kind: RuleKind,

    /// Dotted package path without the data root
    pub package: String,

    /// Short rule name
    pub short_name: String,

    /// Suggested remediation with xref markup reduced to labels
    pub solution: String,

    /// Rule title
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_rule_name() {
        assert_eq!(RuleKind::from_rule_name("deny"), RuleKind::Deny);
        assert_eq!(RuleKind::from_rule_name("warn"), RuleKind::Warn);
        assert_eq!(RuleKind::from_rule_name("violation"), RuleKind::Other);
        assert_eq!(RuleKind::from_rule_name(""), RuleKind::Other);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("DENY".parse::<RuleKind>(), Ok(RuleKind::Deny));
        assert!("fatal".parse::<RuleKind>().is_err());
    }

    #[test]
    fn test_default_rule_info() {
        let info = RuleInfo::default();
        assert_eq!(info.kind, RuleKind::Other);
        assert!(info.code.is_empty());
        assert!(info.collections.is_empty());
    }

    #[test]
    fn test_report_field_names() {
        let info = RuleInfo {
            code: "cve.no_cve".into(),
            kind: RuleKind::Deny,
            documentation_url: "https://example.com".into(),
            ..RuleInfo::default()
        };

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["Code"], "cve.no_cve");
        assert_eq!(json["Kind"], "deny");
        assert_eq!(json["DocumentationUrl"], "https://example.com");
        assert!(json["CodePackage"].is_string());
        assert!(json["DependsOn"].is_array());
        assert!(json["EffectiveOn"].is_string());
        assert!(json["ShortName"].is_string());
    }
}
