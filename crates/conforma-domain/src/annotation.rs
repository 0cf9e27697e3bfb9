//! Annotation reference - the extractor's input
//!
//! Mirrors what a policy engine reports for every annotated rule: where the
//! rule lives, which package declared it and what its METADATA block says.
//! Every part is optional so that incomplete metadata still produces a
//! record.

use crate::custom::CustomValue;
use crate::term::Ref;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Explicit package declaration of a rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Package {
    /// Package path, e.g. `data.policy.release.attestation`
    #[serde(default)]
    pub path: Ref,
}

/// METADATA annotations attached to a rule
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Annotations {
    /// Short human readable title
    #[serde(default)]
    pub title: Option<String>,

    /// Free text description, may embed xref markup
    #[serde(default)]
    pub description: Option<String>,

    /// Open-ended custom key/value map
    #[serde(default)]
    pub custom: Option<BTreeMap<String, CustomValue>>,
}

impl Annotations {
    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Insert a custom value, creating the map if needed
    pub fn with_custom(mut self, key: impl Into<String>, value: impl Into<CustomValue>) -> Self {
        self.custom
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}

/// A rule together with its package and annotations
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnnotationRef {
    /// Full rule path, ending with the rule name
    #[serde(default)]
    pub path: Ref,

    /// Package declaration, when the engine reports one
    #[serde(default)]
    pub package: Option<Package>,

    /// Annotations, when the rule has a METADATA block
    #[serde(default)]
    pub annotations: Option<Annotations>,
}

impl AnnotationRef {
    /// Create a reference for a rule path with nothing else attached
    pub fn new(path: Ref) -> Self {
        Self {
            path,
            ..Self::default()
        }
    }

    /// Attach an explicit package declaration
    pub fn with_package(mut self, path: Ref) -> Self {
        self.package = Some(Package { path });
        self
    }

    /// Attach annotations
    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = Some(annotations);
        self
    }

    /// Package path, if a package declaration is present
    pub fn package_path(&self) -> Option<&Ref> {
        self.package.as_ref().map(|p| &p.path)
    }

    /// Title annotation
    pub fn title(&self) -> Option<&str> {
        self.annotations.as_ref()?.title.as_deref()
    }

    /// Description annotation
    pub fn description(&self) -> Option<&str> {
        self.annotations.as_ref()?.description.as_deref()
    }

    /// Look up a custom annotation value
    pub fn custom(&self, key: &str) -> Option<&CustomValue> {
        self.annotations.as_ref()?.custom.as_ref()?.get(key)
    }
}
