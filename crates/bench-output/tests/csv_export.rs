//! Tests for CSV export.

use bench_model::{Category, RawValue, Record, SortOrder};
use bench_output::{ExportError, export_csv, resolve_columns, write_csv};
use bench_query::{RecordStore, SortRequest};
use insta::assert_snapshot;

fn records() -> Vec<Record> {
    vec![
        Record::new([
            ("id", RawValue::from("1")),
            ("name", RawValue::from("Intel Core i7-8700K @ 3.70GHz")),
            ("price", RawValue::from("$299.99")),
            ("socket", RawValue::from("LGA1151")),
        ]),
        Record::new([
            ("id", RawValue::from("2")),
            ("name", RawValue::from("AMD Ryzen 7 5800X")),
            ("price", RawValue::Number(449.0)),
        ]),
        Record::new([
            ("id", RawValue::from("3")),
            ("name", RawValue::from("Intel Core i9-9900K, boxed")),
            ("price", RawValue::from("NA")),
            ("socket", RawValue::Missing),
        ]),
    ]
}

fn render(records: &[&Record], columns: &[String]) -> String {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, records, columns).expect("write csv");
    String::from_utf8(buffer).expect("utf8")
}

#[test]
fn default_columns_come_from_first_record() {
    let records = records();
    let refs: Vec<&Record> = records.iter().collect();
    let columns = resolve_columns(&refs, None);
    assert_eq!(columns, vec!["id", "name", "price", "socket"]);

    assert_snapshot!(render(&refs, &columns), @r#"
    id,name,price,socket
    1,Intel Core i7-8700K @ 3.70GHz,$299.99,LGA1151
    2,AMD Ryzen 7 5800X,449,
    3,"Intel Core i9-9900K, boxed",NA,
    "#);
}

#[test]
fn projection_selects_and_orders_columns() {
    let records = records();
    let refs: Vec<&Record> = records.iter().collect();
    let columns = vec!["price".to_string(), "id".to_string(), "tdp".to_string()];

    assert_snapshot!(render(&refs, &columns), @r"
    price,id,tdp
    $299.99,1,
    449,2,
    NA,3,
    ");
}

#[test]
fn empty_input_without_projection_writes_nothing() {
    assert_eq!(render(&[], &resolve_columns(&[], None)), "");
}

#[test]
fn sorted_list_round_trips_through_file() {
    let store = RecordStore::new(Category::Cpu, records());
    let sorted = store.sorted_list(&SortRequest::new("price").with_order(SortOrder::Ascending));
    let refs: Vec<&Record> = sorted.iter().map(|entry| entry.record).collect();
    let columns = vec!["id".to_string(), "name".to_string(), "price".to_string()];

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cpus.csv");
    let summary = export_csv(&path, &refs, Some(&columns)).expect("export");
    assert_eq!(summary.rows, 2);
    assert_eq!(summary.columns, columns);

    let mut reader = csv::Reader::from_path(&path).expect("open export");
    let headers: Vec<String> = reader
        .headers()
        .expect("headers")
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers, columns);

    let rows: Vec<csv::StringRecord> = reader.records().map(|row| row.expect("row")).collect();
    assert_eq!(rows.len(), refs.len());
    for (row, record) in rows.iter().zip(&refs) {
        for (index, column) in columns.iter().enumerate() {
            let expected = record.get(column).map(ToString::to_string).unwrap_or_default();
            assert_eq!(row.get(index), Some(expected.as_str()));
        }
    }
}

#[test]
fn unwritable_destination_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing-dir").join("out.csv");
    let records = records();
    let refs: Vec<&Record> = records.iter().collect();

    let err = export_csv(&path, &refs, None).unwrap_err();
    assert!(matches!(err, ExportError::Io(_)));
}
