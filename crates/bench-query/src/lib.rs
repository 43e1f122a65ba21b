//! Query engine over a snapshot of benchmark records.
//!
//! All operations are read-only and take the [`Schema`] explicitly:
//!
//! - **search**: token-overlap ranking on the `name` field
//! - **sort**: typed sort on one field, missing values dropped
//! - **filter**: exclusion, equality/substring filters and permissive sort
//! - **store**: immutable snapshots and atomic snapshot replacement
//!
//! [`Schema`]: bench_model::Schema

pub mod filter;
pub mod search;
pub mod sort;
pub mod store;

pub use filter::{FilterQuery, PermissiveKey, filter_and_sort};
pub use search::{SearchHit, search, tokenize};
pub use sort::{SortRequest, SortedEntry, sorted_list};
pub use store::{Catalog, RecordStore, find_by_id};
