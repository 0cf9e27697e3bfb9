//! Loosely-typed values of the `custom` annotation map
//!
//! Policy authors may put anything under `custom`. The extractor only cares
//! about strings, lists and scalars with an obvious text form; every other
//! shape (null, nested maps) collapses into [`CustomValue::Other`] and is
//! treated as if the key were absent.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use std::fmt;

/// A single value from the `custom` annotation map
#[derive(Debug, Clone, PartialEq)]
pub enum CustomValue {
    /// Plain string
    String(String),

    /// Integer scalar
    Integer(i64),

    /// Integer scalar above `i64::MAX`
    Unsigned(u64),

    /// Floating point scalar
    Float(f64),

    /// Boolean scalar
    Bool(bool),

    /// Date-time value, rendered as RFC 3339
    Timestamp(DateTime<FixedOffset>),

    /// List of untyped values
    List(Vec<CustomValue>),

    /// Null, maps and anything else the extractor does not inspect
    Other,
}

impl CustomValue {
    /// Borrow the value if it is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CustomValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the elements if the value is a list
    pub fn as_list(&self) -> Option<&[CustomValue]> {
        match self {
            CustomValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Canonical text form, `None` for [`CustomValue::Other`]
    ///
    /// Lists render as their element texts separated by spaces inside
    /// brackets; elements without a text form are left out.
    ///
    /// # Examples
    ///
    /// ```
    /// use conforma_domain::CustomValue;
    ///
    /// assert_eq!(CustomValue::Integer(5).to_text().as_deref(), Some("5"));
    /// assert_eq!(CustomValue::Bool(true).to_text().as_deref(), Some("true"));
    /// assert_eq!(CustomValue::Other.to_text(), None);
    /// ```
    pub fn to_text(&self) -> Option<String> {
        match self {
            CustomValue::String(s) => Some(s.clone()),
            CustomValue::Integer(n) => Some(n.to_string()),
            CustomValue::Unsigned(n) => Some(n.to_string()),
            CustomValue::Float(n) => Some(float_text(*n)),
            CustomValue::Bool(b) => Some(b.to_string()),
            CustomValue::Timestamp(ts) => Some(ts.to_rfc3339_opts(SecondsFormat::Secs, true)),
            CustomValue::List(items) => {
                let texts: Vec<String> = items.iter().filter_map(CustomValue::to_text).collect();
                Some(format!("[{}]", texts.join(" ")))
            }
            CustomValue::Other => None,
        }
    }
}

/// Shortest round-trip digits, switching to exponent form (`1e+21`,
/// `1e-05`) when the decimal exponent is below -4 or at least 21.
fn float_text(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let sci = format!("{:e}", n);
    let parts = sci
        .split_once('e')
        .and_then(|(mantissa, exp)| Some((mantissa, exp.parse::<i32>().ok()?)));
    match parts {
        Some((mantissa, exp)) if n != 0.0 && !(-4..21).contains(&exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        _ => n.to_string(),
    }
}

impl From<&str> for CustomValue {
    fn from(s: &str) -> Self {
        CustomValue::String(s.to_string())
    }
}

impl From<String> for CustomValue {
    fn from(s: String) -> Self {
        CustomValue::String(s)
    }
}

impl From<i64> for CustomValue {
    fn from(n: i64) -> Self {
        CustomValue::Integer(n)
    }
}

impl From<f64> for CustomValue {
    fn from(n: f64) -> Self {
        CustomValue::Float(n)
    }
}

impl From<bool> for CustomValue {
    fn from(b: bool) -> Self {
        CustomValue::Bool(b)
    }
}

impl From<DateTime<FixedOffset>> for CustomValue {
    fn from(ts: DateTime<FixedOffset>) -> Self {
        CustomValue::Timestamp(ts)
    }
}

impl<T: Into<CustomValue>> From<Vec<T>> for CustomValue {
    fn from(items: Vec<T>) -> Self {
        CustomValue::List(items.into_iter().map(Into::into).collect())
    }
}

struct CustomValueVisitor;

impl<'de> Visitor<'de> for CustomValueVisitor {
    type Value = CustomValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any annotation value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(CustomValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(CustomValue::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(match i64::try_from(v) {
            Ok(n) => CustomValue::Integer(n),
            Err(_) => CustomValue::Unsigned(v),
        })
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(CustomValue::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(CustomValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(CustomValue::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(CustomValue::Other)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(CustomValue::Other)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        CustomValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<CustomValue>()? {
            items.push(item);
        }
        Ok(CustomValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(CustomValue::Other)
    }
}

impl<'de> Deserialize<'de> for CustomValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CustomValueVisitor)
    }
}
