//! Normalization functions for benchmark field values.
//!
//! - **units**: unit-suffix magnitudes (base-1000 scaling)
//! - **date**: month-name dates
//! - **numeric**: number and flag coercion
//! - **value**: typed dispatch over the above

pub mod date;
pub mod numeric;
pub mod units;
pub mod value;

pub use date::parse_month_year;
pub use numeric::{parse_bool_flag, parse_lenient_f64};
pub use units::{FREQUENCY_UNITS, SIZE_UNITS, UnitVocabulary, convert_units};
pub use value::{normalize_value, try_normalize};
