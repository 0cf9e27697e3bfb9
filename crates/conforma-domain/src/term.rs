//! Path terms and references
//!
//! A rule lives at a reference such as `data.policy.release.attestation.deny`.
//! The first term is the root variable (`data`), the remaining terms are
//! string keys. The canonical text form mirrors how a policy engine prints
//! references: identifier-like keys are joined with `.`, anything else is
//! wrapped in brackets.

use serde::Deserialize;
use std::fmt;

/// A single segment of a reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// Variable term, e.g. the `data` root
    Var(String),

    /// String key
    String(String),

    /// Integer key
    Number(i64),

    /// Boolean key
    Bool(bool),
}

impl Term {
    /// Canonical text with surrounding double quotes removed
    ///
    /// # Examples
    ///
    /// ```
    /// use conforma_domain::Term;
    ///
    /// assert_eq!(Term::String("deny".into()).to_string(), "\"deny\"");
    /// assert_eq!(Term::String("deny".into()).unquoted(), "deny");
    /// ```
    pub fn unquoted(&self) -> String {
        self.to_string().trim_matches('"').to_string()
    }

    fn is_identifier(&self) -> bool {
        match self {
            Term::String(s) => is_identifier(s),
            _ => false,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(name) => f.write_str(name),
            Term::String(s) => write!(f, "{:?}", s),
            Term::Number(n) => write!(f, "{}", n),
            Term::Bool(b) => write!(f, "{}", b),
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Ordered sequence of terms identifying a rule or package
///
/// Deserializes from either a dotted string (`"data.policy.x.deny"`) or an
/// array of segments (`["data", "policy", "x", "deny"]`). In both cases the
/// first textual segment becomes the root variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RefRepr")]
pub struct Ref(Vec<Term>);

impl Ref {
    /// Create a reference from explicit terms
    pub fn new(terms: Vec<Term>) -> Self {
        Self(terms)
    }

    /// Build a reference from plain segments; the first one is the root variable
    ///
    /// # Examples
    ///
    /// ```
    /// use conforma_domain::Ref;
    ///
    /// let path = Ref::from_segments(["data", "policy", "release", "cve", "deny"]);
    /// assert_eq!(path.to_string(), "data.policy.release.cve.deny");
    /// ```
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms = segments
            .into_iter()
            .enumerate()
            .map(|(idx, s)| {
                if idx == 0 {
                    Term::Var(s.into())
                } else {
                    Term::String(s.into())
                }
            })
            .collect();
        Self(terms)
    }

    /// Parse a dotted reference; an empty string gives an empty reference
    pub fn parse(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::default();
        }
        Self::from_segments(dotted.split('.'))
    }

    /// All terms in order
    pub fn terms(&self) -> &[Term] {
        &self.0
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the reference has no terms
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last term, usually the rule name
    pub fn last(&self) -> Option<&Term> {
        self.0.last()
    }

    /// Every term except the last one
    pub fn parent(&self) -> &[Term] {
        match self.0.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }
}

impl fmt::Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, term) in self.0.iter().enumerate() {
            if idx == 0 {
                write!(f, "{}", term)?;
            } else if term.is_identifier() {
                write!(f, ".{}", term.unquoted())?;
            } else {
                write!(f, "[{}]", term)?;
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RefRepr {
    Dotted(String),
    Segments(Vec<SegmentRepr>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SegmentRepr {
    Text(String),
    Number(i64),
    Bool(bool),
}

impl From<RefRepr> for Ref {
    fn from(repr: RefRepr) -> Self {
        match repr {
            RefRepr::Dotted(s) => Ref::parse(&s),
            RefRepr::Segments(segments) => Ref(segments
                .into_iter()
                .enumerate()
                .map(|(idx, segment)| match segment {
                    SegmentRepr::Text(s) if idx == 0 => Term::Var(s),
                    SegmentRepr::Text(s) => Term::String(s),
                    SegmentRepr::Number(n) => Term::Number(n),
                    SegmentRepr::Bool(b) => Term::Bool(b),
                })
                .collect()),
        }
    }
}
