//! Shared record fixtures for query tests.

#![allow(dead_code)]

use bench_model::{Category, RawValue, Record};
use bench_query::RecordStore;

pub fn cpu(id: i64, name: &str, price: RawValue, socket: &str, date: &str) -> Record {
    Record::new([
        ("id", RawValue::from(id.to_string())),
        ("name", RawValue::from(name)),
        ("price", price),
        ("socket", RawValue::from(socket)),
        ("date", RawValue::from(date)),
    ])
}

pub fn cpu_records() -> Vec<Record> {
    vec![
        cpu(1, "Intel Core i7-8700K @ 3.70GHz", RawValue::from("$299.99"), "LGA1151", "Oct 2017"),
        cpu(2, "AMD Ryzen 7 5800X", RawValue::Number(449.0), "AM4", "Nov 2020"),
        cpu(3, "Intel Core i5-2500K @ 3.30GHz", RawValue::from("NA"), "LGA1155", "Jan 2011"),
        cpu(4, "Intel Xeon E5-2670 @ 2.60GHz", RawValue::from("$89.50"), "LGA 2011", "Mar 2012"),
        cpu(5, "Intel Core i7-4960X @ 3.60GHz", RawValue::Number(1099.0), "LGA 2011-v3", "NA"),
        cpu(6, "AMD Ryzen 5 3600", RawValue::from("na"), "AM4", "Jul 2019"),
    ]
}

pub fn cpu_store() -> RecordStore {
    RecordStore::new(Category::Cpu, cpu_records())
}

pub fn ids(records: &[&Record]) -> Vec<i64> {
    records.iter().filter_map(|record| record.id()).collect()
}
