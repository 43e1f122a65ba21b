//! Tests for token-overlap search.

mod common;

use bench_model::Record;
use bench_query::search;

use crate::common::cpu_records;

#[test]
fn ranks_by_shared_tokens() {
    let records = cpu_records();
    let hits = search(&records, "Intel Core i7", Some(5));

    assert!(hits.len() <= 5);
    assert!(hits.iter().all(|hit| hit.matches >= 1));
    assert!(hits.windows(2).all(|pair| pair[0].matches >= pair[1].matches));

    let ranked: Vec<(Option<i64>, usize)> =
        hits.iter().map(|hit| (hit.record.id(), hit.matches)).collect();
    // "i7" is not a token of "i7-8700K", so the i7 parts tie with the i5.
    assert_eq!(
        ranked,
        vec![(Some(1), 2), (Some(3), 2), (Some(5), 2), (Some(4), 1)]
    );
}

#[test]
fn ties_keep_collection_order() {
    let records = cpu_records();
    let hits = search(&records, "amd", None);
    let order: Vec<Option<i64>> = hits.iter().map(|hit| hit.record.id()).collect();
    assert_eq!(order, vec![Some(2), Some(6)]);
}

#[test]
fn matching_is_case_insensitive_and_deduplicated() {
    let records = cpu_records();
    let hits = search(&records, "RYZEN ryzen", None);
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|hit| hit.matches == 1));
}

#[test]
fn limit_truncates() {
    let records = cpu_records();
    assert_eq!(search(&records, "intel", Some(2)).len(), 2);
    assert_eq!(search(&records, "intel", Some(0)).len(), 0);
}

#[test]
fn empty_query_and_nameless_records_match_nothing() {
    let records = vec![Record::new([("id", "9")])];
    assert!(search(&records, "intel", None).is_empty());
    assert!(search(&cpu_records(), "   ", None).is_empty());
}
