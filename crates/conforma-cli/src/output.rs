//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use conforma_domain::RuleInfo;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format rule metadata output.
    pub fn format_rules(&self, rules: &[RuleInfo]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(rules)?),
            OutputFormat::Table => Ok(self.format_rules_table(rules)),
            OutputFormat::Quiet => Ok(self.format_rules_quiet(rules)),
        }
    }

    /// Format rules as a table.
    fn format_rules_table(&self, rules: &[RuleInfo]) -> String {
        if rules.is_empty() {
            return self.colorize("No rules found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Code", "Kind", "Title", "Collections", "Depends On", "Documentation"]);

        for rule in rules {
            let collections = rule.collections.join(", ");
            let depends_on = rule.depends_on.join(", ");
            builder.push_record([
                rule.code.as_str(),
                rule.kind.as_str(),
                rule.title.as_str(),
                collections.as_str(),
                depends_on.as_str(),
                rule.documentation_url.as_str(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format rules in quiet mode (codes only).
    fn format_rules_quiet(&self, rules: &[RuleInfo]) -> String {
        let codes: Vec<&str> = rules.iter().map(|r| r.code.as_str()).collect();
        codes.join("\n")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conforma_domain::RuleKind;

    fn create_test_rule() -> RuleInfo {
        RuleInfo {
            code: "cve.no_cve".to_string(),
            code_package: "cve".to_string(),
            collections: vec!["minimal".to_string(), "redhat".to_string()],
            kind: RuleKind::Deny,
            package: "policy.release.cve".to_string(),
            short_name: "no_cve".to_string(),
            title: "No critical CVEs".to_string(),
            documentation_url: "https://conforma.dev/docs/ec-policies/release_policy.html#cve__no_cve"
                .to_string(),
            ..RuleInfo::default()
        }
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_rules(&[create_test_rule()]).unwrap();
        assert!(output.contains("\"Code\": \"cve.no_cve\""));
        assert!(output.contains("\"Kind\": \"deny\""));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let mut other = create_test_rule();
        other.code = "cve.other".to_string();
        let output = formatter.format_rules(&[create_test_rule(), other]).unwrap();
        assert_eq!(output, "cve.no_cve\ncve.other");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_rules(&[create_test_rule()]).unwrap();
        assert!(output.contains("Code"));
        assert!(output.contains("minimal, redhat"));
        assert!(output.contains("No critical CVEs"));
    }

    #[test]
    fn test_empty_rules() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_rules(&[]).unwrap();
        assert!(output.contains("No rules found"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.info("note"), "ℹ note");
        assert_eq!(formatter.warning("careful"), "⚠ careful");
    }
}
