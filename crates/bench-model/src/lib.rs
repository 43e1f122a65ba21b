//! Data model for benchmark datasets.
//!
//! - **category**: the three supported benchmark sites and their endpoints
//! - **schema**: field name → semantic type mapping, one per category
//! - **value**: raw record values and their canonical (comparable) form
//! - **record**: a single decoded benchmark row

pub mod category;
pub mod error;
pub mod order;
pub mod record;
pub mod schema;
pub mod value;

pub use category::Category;
pub use error::{ModelError, Result};
pub use order::SortOrder;
pub use record::Record;
pub use schema::{Schema, SemanticType};
pub use value::{CanonicalValue, NA_SENTINEL, RawValue};
