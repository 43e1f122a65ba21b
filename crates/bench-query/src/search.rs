use std::collections::HashSet;

use bench_model::Record;
use tracing::debug;

/// A search match and the number of distinct query tokens it shares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    pub record: &'a Record,
    pub matches: usize,
}

/// Lowercased whitespace tokens, deduplicated.
pub fn tokenize(text: &str) -> HashSet<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Ranks records by how many query tokens appear in their `name`.
///
/// Records without a shared token are dropped. Ties keep collection order.
pub fn search<'a>(records: &'a [Record], query: &str, limit: Option<usize>) -> Vec<SearchHit<'a>> {
    let query_tokens = tokenize(query);
    if query_tokens.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit<'a>> = records
        .iter()
        .filter_map(|record| {
            let name_tokens = tokenize(record.name()?);
            let matches = name_tokens.intersection(&query_tokens).count();
            (matches > 0).then_some(SearchHit { record, matches })
        })
        .collect();

    // `sort_by` is stable, so equal counts stay in collection order.
    hits.sort_by(|a, b| b.matches.cmp(&a.matches));
    let total = hits.len();
    if let Some(limit) = limit {
        hits.truncate(limit);
    }
    debug!(query, total, returned = hits.len(), "search complete");
    hits
}
