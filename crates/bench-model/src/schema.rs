use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::category::Category;
use crate::error::ModelError;
use crate::record::Record;

/// Declared interpretation of a field's raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    /// Free text, compared verbatim.
    String,
    /// Plain number, possibly decorated (`"$1,299.99"`).
    Number,
    /// Truthy/falsy flag coerced to 0 or 1.
    Bool,
    /// Physical size with a KB..PB suffix.
    Size,
    /// Clock speed with a kHz..GHz suffix.
    Speed,
    /// "Mon YYYY" release date.
    Date,
}

impl SemanticType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::String => "string",
            SemanticType::Number => "number",
            SemanticType::Bool => "bool",
            SemanticType::Size => "size",
            SemanticType::Speed => "speed",
            SemanticType::Date => "date",
        }
    }

    /// Whether equality filters on this type compare parsed numbers
    /// instead of substrings.
    pub fn is_numeric(&self) -> bool {
        matches!(self, SemanticType::Number)
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SemanticType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "string" | "text" => Ok(SemanticType::String),
            "number" | "numeric" => Ok(SemanticType::Number),
            "bool" | "boolean" => Ok(SemanticType::Bool),
            "size" => Ok(SemanticType::Size),
            "speed" | "frequency" => Ok(SemanticType::Speed),
            "date" => Ok(SemanticType::Date),
            _ => Err(ModelError::UnknownSemanticType(s.to_string())),
        }
    }
}

/// Immutable field name → semantic type mapping for one dataset category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Schema {
    fields: BTreeMap<String, SemanticType>,
}

impl Schema {
    pub fn new<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, SemanticType)>,
        K: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(|(k, t)| (k.into(), t)).collect(),
        }
    }

    /// The fixed schema published by the given benchmark site.
    pub fn for_category(category: Category) -> Self {
        use SemanticType::{Bool, Date, Number, Size, Speed, String};
        match category {
            Category::Cpu => Self::new([
                ("cat", String),
                ("cores", Number),
                ("cpuCount", Number),
                ("cpumark", Number),
                ("date", Date),
                ("href", String),
                ("id", Number),
                ("logicals", Number),
                ("name", String),
                ("output", Bool),
                ("powerPerf", Number),
                ("price", Number),
                ("rank", Number),
                ("samples", Number),
                ("socket", String),
                ("speed", Number),
                ("tdp", Number),
                ("thread", Number),
                ("threadValue", Number),
                ("turbo", Number),
                ("value", Number),
            ]),
            Category::Gpu => Self::new([
                ("bus", String),
                ("cat", String),
                ("coreClk", Number),
                ("date", Date),
                ("g2d", Number),
                ("g3d", Number),
                ("href", String),
                ("id", Number),
                ("memClk", Speed),
                ("memSize", Size),
                ("name", String),
                ("output", Bool),
                ("powerPerf", Number),
                ("price", Number),
                ("rank", Number),
                ("samples", Number),
                ("tdp", Number),
                ("value", Number),
            ]),
            Category::Storage => Self::new([
                ("date", Date),
                ("diskmark", Number),
                ("href", String),
                ("id", Number),
                ("name", String),
                ("output", Bool),
                ("price", Number),
                ("rank", Number),
                ("samples", Number),
                ("size", Size),
                ("type", String),
                ("value", Number),
            ]),
        }
    }

    /// Declared type of `field`, if the schema knows it.
    pub fn type_of(&self, field: &str) -> Option<SemanticType> {
        self.fields.get(field).copied()
    }

    /// Declared type of `field`, falling back to [`SemanticType::String`].
    pub fn resolve(&self, field: &str) -> SemanticType {
        self.type_of(field).unwrap_or(SemanticType::String)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, SemanticType)> {
        self.fields.iter().map(|(name, ty)| (name.as_str(), *ty))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Record keys that the schema does not declare.
    pub fn unknown_fields<'r>(&self, record: &'r Record) -> Vec<&'r str> {
        record
            .field_names()
            .filter(|name| !self.fields.contains_key(*name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpu_schema_has_unit_fields() {
        let schema = Schema::for_category(Category::Gpu);
        assert_eq!(schema.type_of("memSize"), Some(SemanticType::Size));
        assert_eq!(schema.type_of("memClk"), Some(SemanticType::Speed));
        assert_eq!(schema.type_of("socket"), None);
        assert_eq!(schema.resolve("socket"), SemanticType::String);
    }

    #[test]
    fn schema_sizes_per_category() {
        assert_eq!(Schema::for_category(Category::Cpu).len(), 21);
        assert_eq!(Schema::for_category(Category::Gpu).len(), 18);
        assert_eq!(Schema::for_category(Category::Storage).len(), 12);
    }

    #[test]
    fn semantic_type_round_trips_through_str() {
        for ty in [
            SemanticType::String,
            SemanticType::Number,
            SemanticType::Bool,
            SemanticType::Size,
            SemanticType::Speed,
            SemanticType::Date,
        ] {
            assert_eq!(ty.as_str().parse::<SemanticType>(), Ok(ty));
        }
        assert!("numbers".parse::<SemanticType>().is_err());
    }
}
