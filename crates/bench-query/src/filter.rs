use std::cmp::Ordering;

use bench_model::{RawValue, Record, Schema, SortOrder};
use tracing::{debug, warn};

/// Text values the permissive sort treats as absent.
const MISSING_TOKENS: [&str; 6] = ["", "na", "n/a", "none", "null", "nan"];

/// Multi-criteria filter with an optional permissive sort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQuery {
    /// `(field, value)` pairs, applied in order.
    pub filters: Vec<(String, String)>,
    pub sort_field: Option<String>,
    pub order: SortOrder,
    /// Applied after sorting.
    pub limit: Option<usize>,
    /// Fields whose `"na"` rows (any casing) are dropped before filtering.
    pub exclude_na: Vec<String>,
}

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_field = Some(field.into());
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn excluding_na(mut self, field: impl Into<String>) -> Self {
        self.exclude_na.push(field.into());
        self
    }
}

/// Sort key for [`filter_and_sort`]: numbers, then lowercased text, then missing.
#[derive(Debug, Clone, PartialEq)]
pub enum PermissiveKey {
    Number(f64),
    Text(String),
    Missing,
}

impl PermissiveKey {
    pub fn from_raw(raw: Option<&RawValue>) -> Self {
        match raw {
            None | Some(RawValue::Missing) => PermissiveKey::Missing,
            Some(RawValue::Number(n)) if n.is_nan() => PermissiveKey::Missing,
            Some(RawValue::Number(n)) => PermissiveKey::Number(*n),
            Some(RawValue::Bool(b)) => PermissiveKey::Number(f64::from(u8::from(*b))),
            Some(RawValue::Text(s)) => {
                let trimmed = s.trim();
                let lowered = trimmed.to_lowercase();
                if MISSING_TOKENS.contains(&lowered.as_str()) {
                    return PermissiveKey::Missing;
                }
                match trimmed.parse::<f64>() {
                    Ok(n) if !n.is_nan() => PermissiveKey::Number(n),
                    _ => PermissiveKey::Text(lowered),
                }
            }
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, PermissiveKey::Missing)
    }

    fn cmp_present(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PermissiveKey::Number(a), PermissiveKey::Number(b)) => a.total_cmp(b),
            (PermissiveKey::Text(a), PermissiveKey::Text(b)) => a.cmp(b),
            (PermissiveKey::Number(_), _) => Ordering::Less,
            (_, PermissiveKey::Number(_)) => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }
}

fn contains_ignore_case(raw: Option<&RawValue>, needle: &str) -> bool {
    match raw {
        None | Some(RawValue::Missing) => false,
        Some(value) => value.to_string().to_lowercase().contains(needle),
    }
}

fn apply_filter<'a>(
    schema: &Schema,
    records: Vec<&'a Record>,
    field: &str,
    value: &str,
) -> Vec<&'a Record> {
    let numeric = schema.type_of(field).is_some_and(|ty| ty.is_numeric());
    if numeric {
        let Ok(target) = value.trim().parse::<f64>() else {
            warn!(field, value, "numeric filter value is not a number, filter skipped");
            return records;
        };
        return records
            .into_iter()
            .filter(|record| record.get(field).and_then(RawValue::as_f64) == Some(target))
            .collect();
    }

    let needle = value.to_lowercase();
    records
        .into_iter()
        .filter(|record| contains_ignore_case(record.get(field), &needle))
        .collect()
}

/// Sorts by [`PermissiveKey`]; missing keys go last in either direction.
fn permissive_sort<'a>(records: Vec<&'a Record>, field: &str, order: SortOrder) -> Vec<&'a Record> {
    let (mut present, missing): (Vec<_>, Vec<_>) = records
        .into_iter()
        .map(|record| (PermissiveKey::from_raw(record.get(field)), record))
        .partition(|(key, _)| !key.is_missing());

    present.sort_by(|(a, _), (b, _)| a.cmp_present(b));
    if order.is_descending() {
        present.reverse();
    }
    present
        .into_iter()
        .chain(missing)
        .map(|(_, record)| record)
        .collect()
}

/// Filters then optionally sorts the collection.
///
/// 1. rows whose raw value for an `exclude_na` field is `"na"` (any case) go;
/// 2. each filter keeps exact numeric matches for `number` fields, and
///    case-insensitive substring matches otherwise;
/// 3. the permissive sort runs when `sort_field` exists on some remaining row;
/// 4. `limit` truncates the sorted result.
pub fn filter_and_sort<'a>(
    schema: &Schema,
    records: &'a [Record],
    query: &FilterQuery,
) -> Vec<&'a Record> {
    let mut selected: Vec<&'a Record> = records.iter().collect();

    for field in &query.exclude_na {
        selected.retain(|record| !record.get(field).is_some_and(RawValue::is_na_ignore_case));
    }

    for (field, value) in &query.filters {
        let before = selected.len();
        selected = apply_filter(schema, selected, field, value);
        debug!(field = %field, value = %value, before, after = selected.len(), "filter applied");
    }

    if let Some(field) = &query.sort_field {
        if selected.iter().any(|record| record.contains(field)) {
            selected = permissive_sort(selected, field, query.order);
        } else {
            debug!(field = %field, "sort field absent from every record, order unchanged");
        }
    }

    if let Some(limit) = query.limit {
        selected.truncate(limit);
    }
    selected
}
