use bench_model::{CanonicalValue, Record, Schema, SemanticType, SortOrder};
use bench_transform::normalize_value;
use tracing::debug;

/// Parameters for a typed single-field sort.
#[derive(Debug, Clone, PartialEq)]
pub struct SortRequest {
    pub field: String,
    pub order: SortOrder,
    pub limit: Option<usize>,
    /// Interpret the field as this type instead of the schema's.
    pub type_override: Option<SemanticType>,
}

impl SortRequest {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::default(),
            limit: None,
            type_override: None,
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_type(mut self, semantic_type: Option<SemanticType>) -> Self {
        self.type_override = semantic_type;
        self
    }

    /// Type used for normalization: override, then schema, then string.
    pub fn semantic_type(&self, schema: &Schema) -> SemanticType {
        if let Some(semantic_type) = self.type_override {
            return semantic_type;
        }
        schema.type_of(&self.field).unwrap_or_else(|| {
            debug!(field = %self.field, "field not in schema, sorting as string");
            SemanticType::String
        })
    }
}

/// A record paired with the canonical value it was sorted by.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedEntry<'a> {
    pub record: &'a Record,
    pub value: CanonicalValue,
}

/// Sorts records by the canonical value of one field.
///
/// Records whose value is absent, `"NA"` or unparsable are dropped. The sort is
/// stable ascending; descending is its exact reverse.
pub fn sorted_list<'a>(
    schema: &Schema,
    records: &'a [Record],
    request: &SortRequest,
) -> Vec<SortedEntry<'a>> {
    let semantic_type = request.semantic_type(schema);

    let mut entries: Vec<SortedEntry<'a>> = records
        .iter()
        .filter_map(|record| {
            let raw = record.get(&request.field)?;
            let value = normalize_value(raw, semantic_type);
            (!value.is_missing()).then_some(SortedEntry { record, value })
        })
        .collect();
    let dropped = records.len() - entries.len();

    entries.sort_by(|a, b| a.value.total_cmp(&b.value));
    if request.order.is_descending() {
        entries.reverse();
    }
    if let Some(limit) = request.limit {
        entries.truncate(limit);
    }
    debug!(
        field = %request.field,
        semantic_type = %semantic_type,
        order = %request.order,
        dropped,
        returned = entries.len(),
        "sorted list built"
    );
    entries
}
