//! Unit-suffix magnitudes.
//!
//! A vocabulary is an ordered list of suffixes; the suffix at position `i`
//! scales by `1000^(i + 1)`. Suffixes outside the vocabulary, or no suffix at
//! all, leave the number in base units.

use crate::error::ValueError;
use crate::normalization::numeric::parse_lenient_f64;

/// Ordered unit suffixes for one physical quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitVocabulary {
    pub name: &'static str,
    pub units: &'static [&'static str],
}

/// Storage sizes, decimal multiples of a byte.
pub const SIZE_UNITS: UnitVocabulary = UnitVocabulary {
    name: "size",
    units: &["kb", "mb", "gb", "tb", "pb"],
};

/// Clock frequencies, decimal multiples of a hertz.
pub const FREQUENCY_UNITS: UnitVocabulary = UnitVocabulary {
    name: "frequency",
    units: &["khz", "mhz", "ghz"],
};

impl UnitVocabulary {
    /// Multiplier for `unit` (case-insensitive), or `None` if unrecognized.
    pub fn scale(&self, unit: &str) -> Option<f64> {
        self.units
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(unit))
            .map(|index| 1000f64.powi(index as i32 + 1))
    }
}

/// 2^63, the first magnitude outside `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Converts `"<number> <unit>"` to an integer magnitude in base units.
///
/// Only the first two whitespace-separated tokens are read. The result is
/// truncated toward zero; magnitudes outside `i64` are
/// [`ValueError::OutOfRange`].
pub fn convert_units(raw: &str, vocabulary: UnitVocabulary) -> Result<i64, ValueError> {
    let mut tokens = raw.split_whitespace();
    let number_token = tokens.next().unwrap_or_default();
    let unit_token = tokens.next();

    let mut magnitude = parse_lenient_f64(number_token)?;
    match unit_token.map(|unit| (unit, vocabulary.scale(unit))) {
        Some((_, Some(scale))) => magnitude *= scale,
        Some((unit, None)) => {
            tracing::debug!(
                raw,
                unit,
                vocabulary = vocabulary.name,
                "unrecognized unit suffix, keeping base units"
            );
        }
        None => {}
    }
    let magnitude = magnitude.trunc();
    if !(-I64_LIMIT..I64_LIMIT).contains(&magnitude) {
        return Err(ValueError::OutOfRange(raw.to_string()));
    }
    Ok(magnitude as i64)
}
