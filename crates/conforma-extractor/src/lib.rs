//! Conforma Rule Metadata Extractor
//!
//! Derives a normalized [`RuleInfo`](conforma_domain::RuleInfo) record from
//! the annotations attached to each policy rule.
//!
//! # Overview
//!
//! A policy engine reports every annotated rule as an annotation reference:
//! the rule path, an optional package declaration, and the METADATA block
//! (title, description, `custom` map). The extractor turns that loosely
//! typed tree into the record used for violation reports, documentation
//! links, collection filters and dependency resolution.
//!
//! # Architecture
//!
//! ```text
//! annotation document → AnnotationRef → RuleExtractor → RuleInfo → RuleCatalog
//! ```
//!
//! # Key Features
//!
//! - **Total extraction**: missing or mis-shaped metadata degrades to empty values
//! - **Package derivation**: explicit package or rule path, with data root,
//!   `policy` and rule-category prefixes stripped for codes
//! - **Xref normalization**: AsciiDoc links reduced to labels or resolved to URLs
//! - **Parallel catalogs**: one extraction per rule across a rayon pool
//!
//! # Example Usage
//!
//! ```
//! use conforma_extractor::{parse_annotation_document, RuleCatalog, RuleExtractor};
//!
//! # fn example() -> Result<(), conforma_extractor::ExtractorError> {
//! let refs = parse_annotation_document(r#"[{
//!     "path": "data.policy.release.cve.deny",
//!     "annotations": {"title": "No CVEs", "custom": {"short_name": "no_cve"}}
//! }]"#)?;
//!
//! let catalog = RuleCatalog::build(&RuleExtractor::default(), &refs);
//! let rule = catalog.get("cve.no_cve").expect("rule is in the catalog");
//! assert_eq!(rule.title, "No CVEs");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod catalog;
mod config;
mod document;
mod error;
mod extractor;
pub mod fields;
pub mod package;
pub mod xref;


pub use catalog::RuleCatalog;
pub use config::{
    ExtractorConfig, DATA_ROOT, DEFAULT_DOCS_BASE_URL, DEFAULT_POLICY_DOCS_MODULE,
    DEFAULT_RULE_CATEGORIES, POLICY_NAMESPACE,
};
pub use document::{load_annotation_document, parse_annotation_document};
pub use error::ExtractorError;
pub use extractor::{extract, RuleExtractor};
