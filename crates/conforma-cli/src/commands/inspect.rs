//! Inspect command implementation.

use crate::cli::InspectArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use conforma_domain::{RuleInfo, RuleKind};
use conforma_extractor::{load_annotation_document, RuleCatalog, RuleExtractor};
use tracing::info;

/// Execute the inspect command.
pub fn execute_inspect(args: InspectArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let rules = inspect_rules(&args, config)?;
    println!("{}", formatter.format_rules(&rules)?);
    Ok(())
}

/// Load every document, extract the catalog and apply the filters.
pub fn inspect_rules(args: &InspectArgs, config: &Config) -> Result<Vec<RuleInfo>> {
    let mut refs = Vec::new();
    for file in &args.files {
        refs.extend(load_annotation_document(file)?);
    }
    info!("Loaded {} annotations from {} file(s)", refs.len(), args.files.len());

    let extractor = RuleExtractor::new(config.extractor.clone());
    let catalog = RuleCatalog::build(&extractor, &refs);

    let kind: Option<RuleKind> = args.kind.map(Into::into);
    let rules = catalog
        .iter()
        .filter(|r| match &args.collection {
            Some(collection) => r.collections.iter().any(|c| c == collection),
            None => true,
        })
        .filter(|r| kind.map_or(true, |k| r.kind == k))
        .cloned()
        .collect();

    Ok(rules)
}
