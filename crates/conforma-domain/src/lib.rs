//! Conforma Domain Layer
//!
//! Value types shared by the rule metadata extractor and its callers.
//! Nothing in this crate performs I/O; every type is a plain immutable
//! value that can be built in code or deserialized from an annotation
//! document.
//!
//! ## Key Concepts
//!
//! - **Annotation reference**: a policy rule's path, its optional package
//!   declaration and its optional METADATA annotations
//! - **Term / Ref**: one segment of a rule path and the ordered path itself
//! - **Custom value**: a loosely-typed entry of the `custom` annotation map
//! - **Rule info**: the normalized metadata record derived for each rule
//!
//! ## Architecture
//!
//! - Input types (`AnnotationRef` and friends) only implement `Deserialize`
//! - The output type (`RuleInfo`) round-trips through serde with the field
//!   names used in compliance reports
//! - Derivation logic lives in `conforma-extractor`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod annotation;
pub mod custom;
pub mod rule;
pub mod term;

// Re-exports for convenience
pub use annotation::{AnnotationRef, Annotations, Package};
pub use custom::CustomValue;
pub use rule::{RuleInfo, RuleKind};
pub use term::{Ref, Term};
