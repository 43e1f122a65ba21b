//! Integration tests for result tables.

use bench_cli::args::display_columns;
use bench_cli::render::{item_table, record_table, schema_table};
use bench_model::{Category, RawValue, Record, Schema};

fn gpu() -> Record {
    Record::new([
        ("id", RawValue::from("3")),
        ("name", RawValue::from("GeForce RTX 3080")),
        ("memSize", RawValue::from("10 GB")),
        ("price", RawValue::from("NA")),
        ("firmware", RawValue::from("94.02")),
    ])
}

#[test]
fn record_table_shows_projected_values() {
    let record = gpu();
    let columns = display_columns(&["memSize", "price"]);
    let rendered = record_table(&[&record], &columns).to_string();

    assert!(rendered.contains("GeForce RTX 3080"));
    assert!(rendered.contains("10 GB"));
    assert!(rendered.contains("NA"));
    assert!(!rendered.contains("94.02"));
}

#[test]
fn item_table_lists_every_field_with_its_type() {
    let record = gpu();
    let schema = Schema::for_category(Category::Gpu);
    let table = item_table(&record, &schema);

    assert_eq!(table.row_iter().count(), record.len());
    let rendered = table.to_string();
    assert!(rendered.contains("size"));
    assert!(rendered.contains("firmware"));
}

#[test]
fn schema_table_lists_declared_fields() {
    let schema = Schema::for_category(Category::Storage);
    let table = schema_table(&schema);
    assert_eq!(table.row_iter().count(), schema.len());
}
