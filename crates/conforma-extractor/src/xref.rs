//! AsciiDoc cross-reference normalization
//!
//! Rule annotations link to other documentation pages with xref macros.
//! Two shapes are recognized by one pattern:
//!
//! ```text
//! xref:ec-cli:ROOT:configuration.adoc#data-sources[data sources]   full form
//! xref:release_policy.adoc[release policy]                          simple form
//! ```
//!
//! Groups: 1 = module, 2 = file, 3 = anchor (full form only), 4 = label.

use crate::config::ExtractorConfig;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Character classes are spelled out as ASCII to keep `\w`/`\s` from
/// matching Unicode letters and spaces.
static XREF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"xref:(?:([^:]+):ROOT:(.+?)\.adoc#([^\[]+)|[A-Za-z0-9_.$#]+)\[([A-Za-z0-9_\t\n\x0C\r /.]+)\]",
    )
    .expect("xref regex is valid")
});

/// Whether `text` contains any xref macro
pub fn contains_xref(text: &str) -> bool {
    XREF_REGEX.is_match(text)
}

/// Replace every xref macro with its label
///
/// # Examples
///
/// ```
/// use conforma_extractor::xref::unlink;
///
/// let text = "Check xref:ec-cli:ROOT:configuration.adoc#data[the data docs].";
/// assert_eq!(unlink(text), "Check the data docs.");
/// ```
pub fn unlink(text: &str) -> String {
    XREF_REGEX.replace_all(text, "${4}").into_owned()
}

/// Replace full-form xref macros with documentation URLs
///
/// Simple-form (or otherwise incomplete) macros fall back to their label.
///
/// # Examples
///
/// ```
/// use conforma_extractor::{xref::resolve_urls, ExtractorConfig};
///
/// let config = ExtractorConfig::default();
/// assert_eq!(
///     resolve_urls("xref:mod:ROOT:file.adoc#anchor[Some Label]", &config),
///     "https://conforma.dev/docs/mod/file.html#anchor"
/// );
/// ```
pub fn resolve_urls(text: &str, config: &ExtractorConfig) -> String {
    XREF_REGEX
        .replace_all(text, |caps: &Captures| {
            let group = |i: usize| caps.get(i).map(|m| m.as_str()).filter(|s| !s.is_empty());
            match (group(1), group(2), group(3)) {
                (Some(module), Some(file), Some(anchor)) => config.xref_url(module, file, anchor),
                _ => group(4).unwrap_or_default().to_string(),
            }
        })
        .into_owned()
}
