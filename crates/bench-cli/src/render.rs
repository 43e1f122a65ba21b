//! Terminal tables for query results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bench_model::{CanonicalValue, RawValue, Record, Schema, SemanticType};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn value_cell(raw: Option<&RawValue>) -> Cell {
    match raw {
        None | Some(RawValue::Missing) => dim_cell("-"),
        Some(raw) if raw.is_na_ignore_case() => dim_cell(raw),
        Some(raw) => Cell::new(raw),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// One row per record, projected onto `columns`.
pub fn record_table(records: &[&Record], columns: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(columns.iter().map(|column| header_cell(column)));
    apply_table_style(&mut table);
    for record in records {
        table.add_row(columns.iter().map(|column| value_cell(record.get(column))));
    }
    table
}

/// Records with an extra trailing column (match count, sort key, ...).
pub fn annotated_table<T: ToString>(
    rows: &[(&Record, T)],
    columns: &[String],
    annotation: &str,
) -> Table {
    let mut table = Table::new();
    let mut header: Vec<Cell> = columns.iter().map(|column| header_cell(column)).collect();
    header.push(header_cell(annotation));
    table.set_header(header);
    apply_table_style(&mut table);
    for (record, note) in rows {
        let mut row: Vec<Cell> = columns
            .iter()
            .map(|column| value_cell(record.get(column)))
            .collect();
        row.push(Cell::new(note.to_string()).fg(Color::Green));
        table.add_row(row);
    }
    align_column(&mut table, columns.len(), CellAlignment::Right);
    table
}

/// Field / value listing of a single record, with the schema type of each field.
pub fn item_table(record: &Record, schema: &Schema) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Type"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    for (field, raw) in record.iter() {
        let type_cell = match schema.type_of(field) {
            Some(semantic_type) => Cell::new(semantic_type),
            None => dim_cell("?"),
        };
        table.add_row(vec![Cell::new(field), type_cell, value_cell(Some(raw))]);
    }
    table
}

/// The fields a schema declares and how each is interpreted.
pub fn schema_table(schema: &Schema) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Type")]);
    apply_table_style(&mut table);
    for (field, semantic_type) in schema.fields() {
        let type_cell = match semantic_type {
            SemanticType::String => Cell::new(semantic_type),
            _ => Cell::new(semantic_type).fg(Color::Blue),
        };
        table.add_row(vec![Cell::new(field), type_cell]);
    }
    table
}

/// Canonical values as shown next to sorted results.
pub fn format_canonical(value: &CanonicalValue, semantic_type: SemanticType) -> String {
    match (value, semantic_type) {
        (CanonicalValue::Number(n), SemanticType::Bool) => {
            let label = if *n != 0.0 { "yes" } else { "no" };
            label.to_string()
        }
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_table_has_one_row_per_record() {
        let first = Record::new([("id", "1"), ("name", "Ryzen")]);
        let second = Record::new([("id", "2")]);
        let columns = vec!["id".to_string(), "name".to_string()];
        let mut table = record_table(&[&first, &second], &columns);
        assert_eq!(table.row_iter().count(), 2);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn annotated_table_adds_column() {
        let record = Record::new([("id", "1"), ("name", "Ryzen")]);
        let columns = vec!["id".to_string(), "name".to_string()];
        let mut table = annotated_table(&[(&record, 3usize)], &columns, "Matches");
        assert_eq!(table.column_count(), 3);
        assert!(table.to_string().contains("Matches"));
    }

    #[test]
    fn bool_canonical_values_read_as_yes_no() {
        assert_eq!(
            format_canonical(&CanonicalValue::Number(1.0), SemanticType::Bool),
            "yes"
        );
        assert_eq!(
            format_canonical(&CanonicalValue::Number(2.5e9), SemanticType::Speed),
            "2500000000"
        );
    }
}
