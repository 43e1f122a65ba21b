//! Semantic-type dispatch.
//!
//! Normalization is a pure function of the raw value and its declared type.
//! The `"NA"` sentinel and JSON null become [`CanonicalValue::Missing`] before
//! any type-specific parsing happens.

use bench_model::{CanonicalValue, RawValue, SemanticType};

use crate::error::ValueError;
use crate::normalization::date::parse_month_year;
use crate::normalization::numeric::{parse_bool_flag, parse_lenient_f64};
use crate::normalization::units::{FREQUENCY_UNITS, SIZE_UNITS, convert_units};

fn shape(raw: &RawValue) -> &'static str {
    match raw {
        RawValue::Text(_) => "text",
        RawValue::Number(_) => "number",
        RawValue::Bool(_) => "bool",
        RawValue::Missing => "null",
    }
}

/// Normalizes `raw` as `semantic_type`, reporting why a value is unusable.
///
/// `Ok(CanonicalValue::Missing)` means the value is absent (`"NA"` or null);
/// `Err` means it was present but malformed.
pub fn try_normalize(
    raw: &RawValue,
    semantic_type: SemanticType,
) -> Result<CanonicalValue, ValueError> {
    if raw.is_na() || matches!(raw, RawValue::Missing) {
        return Ok(CanonicalValue::Missing);
    }
    let wrong_shape = || ValueError::WrongShape {
        semantic_type: semantic_type.as_str(),
        found: shape(raw),
    };

    let value = match (semantic_type, raw) {
        (SemanticType::String, raw) => CanonicalValue::Text(raw.to_string()),

        (SemanticType::Number, RawValue::Number(n)) => CanonicalValue::Number(*n),
        (SemanticType::Number, RawValue::Text(s)) => {
            CanonicalValue::Number(parse_lenient_f64(s)?)
        }
        (SemanticType::Number | SemanticType::Bool, RawValue::Bool(b)) => {
            CanonicalValue::Number(f64::from(u8::from(*b)))
        }

        (SemanticType::Bool, RawValue::Number(n)) => {
            CanonicalValue::Number(if *n != 0.0 { 1.0 } else { 0.0 })
        }
        (SemanticType::Bool, RawValue::Text(s)) => {
            CanonicalValue::Number(parse_bool_flag(s)? as f64)
        }

        (SemanticType::Size, RawValue::Text(s)) => {
            CanonicalValue::Number(convert_units(s, SIZE_UNITS)? as f64)
        }
        (SemanticType::Speed, RawValue::Text(s)) => {
            CanonicalValue::Number(convert_units(s, FREQUENCY_UNITS)? as f64)
        }
        (SemanticType::Size | SemanticType::Speed, RawValue::Number(n)) => {
            CanonicalValue::Number(n.trunc())
        }

        (SemanticType::Date, RawValue::Text(s)) => {
            CanonicalValue::Number(parse_month_year(s)? as f64)
        }

        _ => return Err(wrong_shape()),
    };
    Ok(value)
}

/// Normalizes `raw` as `semantic_type`; malformed values become missing.
pub fn normalize_value(raw: &RawValue, semantic_type: SemanticType) -> CanonicalValue {
    try_normalize(raw, semantic_type).unwrap_or_else(|error| {
        tracing::debug!(%error, semantic_type = %semantic_type, "unparsable value treated as missing");
        CanonicalValue::Missing
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_keeps_case_and_renders_numbers() {
        assert_eq!(
            normalize_value(&RawValue::from("LGA1151"), SemanticType::String),
            CanonicalValue::Text("LGA1151".to_string())
        );
        assert_eq!(
            normalize_value(&RawValue::Number(95.0), SemanticType::String),
            CanonicalValue::Text("95".to_string())
        );
    }

    #[test]
    fn date_from_number_is_wrong_shape() {
        assert!(matches!(
            try_normalize(&RawValue::Number(2021.0), SemanticType::Date),
            Err(ValueError::WrongShape { .. })
        ));
    }
}
