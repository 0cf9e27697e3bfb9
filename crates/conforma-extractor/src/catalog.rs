//! Rule catalog built from a whole policy bundle

use crate::extractor::RuleExtractor;
use conforma_domain::{AnnotationRef, RuleInfo, RuleKind};
use rayon::prelude::*;
use tracing::info;

/// Extracted metadata for every rule of a bundle, in input order
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    rules: Vec<RuleInfo>,
}

impl RuleCatalog {
    /// Extract every rule in parallel
    pub fn build(extractor: &RuleExtractor, refs: &[AnnotationRef]) -> Self {
        let rules: Vec<RuleInfo> = refs.par_iter().map(|a| extractor.extract(a)).collect();
        info!("Built rule catalog with {} rules", rules.len());
        Self { rules }
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All rules in input order
    pub fn iter(&self) -> impl Iterator<Item = &RuleInfo> {
        self.rules.iter()
    }

    /// First rule with the given code
    pub fn get(&self, code: &str) -> Option<&RuleInfo> {
        self.rules.iter().find(|r| r.code == code)
    }

    /// Rules that list `collection` among their collections
    pub fn in_collection<'a>(&'a self, collection: &'a str) -> impl Iterator<Item = &'a RuleInfo> + 'a {
        self.rules
            .iter()
            .filter(move |r| r.collections.iter().any(|c| c == collection))
    }

    /// Rules of the given kind
    pub fn of_kind(&self, kind: RuleKind) -> impl Iterator<Item = &RuleInfo> {
        self.rules.iter().filter(move |r| r.kind == kind)
    }
}

impl From<Vec<RuleInfo>> for RuleCatalog {
    fn from(rules: Vec<RuleInfo>) -> Self {
        Self { rules }
    }
}
