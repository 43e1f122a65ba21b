use std::sync::{Arc, PoisonError, RwLock};

use bench_model::{Category, ModelError, Record, Schema};
use tracing::debug;

use crate::filter::{FilterQuery, filter_and_sort};
use crate::search::{SearchHit, search};
use crate::sort::{SortRequest, SortedEntry, sorted_list};

/// First record whose coerced `id` equals `id`.
pub fn find_by_id(records: &[Record], id: i64) -> Option<&Record> {
    records.iter().find(|record| record.id() == Some(id))
}

/// One immutable snapshot of a category's records and its schema.
#[derive(Debug, Clone)]
pub struct RecordStore {
    category: Category,
    schema: Schema,
    records: Arc<[Record]>,
}

impl RecordStore {
    /// Builds a snapshot using the category's published schema.
    pub fn new(category: Category, records: Vec<Record>) -> Self {
        Self::with_schema(category, Schema::for_category(category), records)
    }

    /// Builds a snapshot from a domain selector such as `www.cpubenchmark.net`.
    pub fn from_domain(domain: &str, records: Vec<Record>) -> Result<Self, ModelError> {
        let category: Category = domain.parse()?;
        Ok(Self::new(category, records))
    }

    pub fn with_schema(category: Category, schema: Schema, records: Vec<Record>) -> Self {
        if let Some(first) = records.first() {
            let unknown = schema.unknown_fields(first);
            if !unknown.is_empty() {
                debug!(%category, ?unknown, "records carry fields outside the schema");
            }
        }
        debug!(%category, records = records.len(), "record store built");
        Self {
            category,
            schema,
            records: records.into(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn search(&self, query: &str, limit: Option<usize>) -> Vec<SearchHit<'_>> {
        search(&self.records, query, limit)
    }

    pub fn get_item(&self, id: i64) -> Option<&Record> {
        find_by_id(&self.records, id)
    }

    pub fn sorted_list(&self, request: &SortRequest) -> Vec<SortedEntry<'_>> {
        sorted_list(&self.schema, &self.records, request)
    }

    pub fn filter_and_sort(&self, query: &FilterQuery) -> Vec<&Record> {
        filter_and_sort(&self.schema, &self.records, query)
    }
}

/// Holder of the current [`RecordStore`] snapshot.
///
/// Readers take an `Arc` to the whole snapshot; a refresh swaps the reference
/// in one step, so a query never sees a half-replaced collection.
#[derive(Debug)]
pub struct Catalog {
    current: RwLock<Arc<RecordStore>>,
}

impl Catalog {
    pub fn new(store: RecordStore) -> Self {
        Self {
            current: RwLock::new(Arc::new(store)),
        }
    }

    pub fn snapshot(&self) -> Arc<RecordStore> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Installs `store` and returns the snapshot it replaced.
    pub fn replace(&self, store: RecordStore) -> Arc<RecordStore> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        debug!(category = %store.category(), records = store.len(), "catalog snapshot replaced");
        std::mem::replace(&mut *guard, Arc::new(store))
    }
}
