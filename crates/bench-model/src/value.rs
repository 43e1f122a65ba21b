use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Literal token the upstream data uses for "not applicable".
pub const NA_SENTINEL: &str = "NA";

// ---------------------------------------------------------------------------
// RawValue – a single field as delivered by the fetch collaborator
// ---------------------------------------------------------------------------

/// A field value exactly as decoded from the source payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Number(f64),
    Bool(bool),
    /// JSON `null`.
    Missing,
}

impl RawValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The number when the raw value is natively numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// True only for the exact, case-sensitive `"NA"` sentinel.
    pub fn is_na(&self) -> bool {
        matches!(self, RawValue::Text(s) if s == NA_SENTINEL)
    }

    /// Looser check used by exclusion passes: any casing of `"na"`.
    pub fn is_na_ignore_case(&self) -> bool {
        matches!(self, RawValue::Text(s) if s.eq_ignore_ascii_case(NA_SENTINEL))
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Text(s) => write!(f, "{s}"),
            RawValue::Number(n) => write!(f, "{n}"),
            RawValue::Bool(b) => write!(f, "{b}"),
            RawValue::Missing => Ok(()),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl Serialize for RawValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RawValue::Text(s) => serializer.serialize_str(s),
            RawValue::Number(n) => serializer.serialize_f64(*n),
            RawValue::Bool(b) => serializer.serialize_bool(*b),
            RawValue::Missing => serializer.serialize_none(),
        }
    }
}

struct RawValueVisitor;

impl<'de> Visitor<'de> for RawValueVisitor {
    type Value = RawValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean or null")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<RawValue, E> {
        Ok(RawValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RawValue, E> {
        Ok(RawValue::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RawValue, E> {
        Ok(RawValue::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<RawValue, E> {
        Ok(RawValue::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RawValue, E> {
        Ok(RawValue::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<RawValue, E> {
        Ok(RawValue::Text(v))
    }

    fn visit_none<E: de::Error>(self) -> Result<RawValue, E> {
        Ok(RawValue::Missing)
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawValue, E> {
        Ok(RawValue::Missing)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<RawValue, D::Error> {
        deserializer.deserialize_any(RawValueVisitor)
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawValueVisitor)
    }
}

// ---------------------------------------------------------------------------
// CanonicalValue – the comparable form produced by normalization
// ---------------------------------------------------------------------------

/// Normalized, comparable form of a field value.
///
/// Sizes, speeds, dates and flags all collapse to `Number`. `Missing` covers
/// both the `"NA"` sentinel and values that failed to parse; query operations
/// drop it rather than compare it.
#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CanonicalValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CanonicalValue::Missing)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CanonicalValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Total order: numbers before text, missing last.
    /// Text compares byte-wise, case-sensitive.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        fn rank(v: &CanonicalValue) -> u8 {
            match v {
                CanonicalValue::Number(_) => 0,
                CanonicalValue::Text(_) => 1,
                CanonicalValue::Missing => 2,
            }
        }
        match (self, other) {
            (CanonicalValue::Number(a), CanonicalValue::Number(b)) => a.total_cmp(b),
            (CanonicalValue::Text(a), CanonicalValue::Text(b)) => a.cmp(b),
            _ => rank(self).cmp(&rank(other)),
        }
    }
}

impl fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalValue::Text(s) => write!(f, "{s}"),
            CanonicalValue::Number(n) => write!(f, "{n}"),
            CanonicalValue::Missing => write!(f, "<missing>"),
        }
    }
}
