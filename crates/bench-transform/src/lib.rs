//! Benchmark value normalization.
//!
//! This crate turns free-form field values into comparable canonical values:
//!
//! - **units**: size (KB..PB) and frequency (kHz..GHz) suffix parsing
//! - **date**: "Mon YYYY" release dates to epoch seconds
//! - **numeric**: lenient number extraction and flag coercion
//! - **value**: semantic-type dispatch producing a [`CanonicalValue`]
//!
//! [`CanonicalValue`]: bench_model::CanonicalValue

pub mod error;
pub mod normalization;

pub use error::ValueError;
pub use normalization::{
    FREQUENCY_UNITS, SIZE_UNITS, UnitVocabulary, convert_units, normalize_value,
    parse_bool_flag, parse_lenient_f64, parse_month_year, try_normalize,
};
