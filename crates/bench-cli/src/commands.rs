use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use bench_cli::args::display_columns;
use bench_cli::render::{annotated_table, format_canonical, item_table, record_table, schema_table};
use bench_ingest::{FetchConfig, fetch_records, load_records, save_payload};
use bench_model::{Record, Schema};
use bench_output::export_csv;
use bench_query::{FilterQuery, RecordStore, SortRequest};

use crate::cli::{ExportArgs, FilterArgs, ItemArgs, SchemaArgs, SearchArgs, SortedArgs, SourceArgs};

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let schema = Schema::for_category(args.category);
    println!("Category: {} ({})", args.category, args.category.domain());
    println!("{}", schema_table(&schema));
    Ok(())
}

pub fn run_search(args: &SearchArgs) -> Result<()> {
    let store = load_store(&args.source)?;
    let query = args.query.join(" ");
    let hits = store.search(&query, args.limit);

    let columns = columns_or(&args.export, display_columns(&[]));
    let rows: Vec<(&Record, usize)> = hits.iter().map(|hit| (hit.record, hit.matches)).collect();
    println!("{}", annotated_table(&rows, &columns, "Matches"));
    println!("{} result(s) for {:?}", rows.len(), query);

    let records: Vec<&Record> = rows.iter().map(|(record, _)| *record).collect();
    export_if_requested(&args.export, &records)
}

pub fn run_item(args: &ItemArgs) -> Result<()> {
    let store = load_store(&args.source)?;
    let record = store
        .get_item(args.id)
        .ok_or_else(|| anyhow!("no {} record with id {}", store.category(), args.id))?;
    println!("{}", item_table(record, store.schema()));
    Ok(())
}

pub fn run_sorted(args: &SortedArgs) -> Result<()> {
    let store = load_store(&args.source)?;
    let request = SortRequest::new(&args.field)
        .with_order(args.order.into())
        .with_limit(args.limit)
        .with_type(args.semantic_type.map(Into::into));
    let semantic_type = request.semantic_type(store.schema());
    let entries = store.sorted_list(&request);

    let columns = columns_or(&args.export, display_columns(&[args.field.as_str()]));
    let rows: Vec<(&Record, String)> = entries
        .iter()
        .map(|entry| (entry.record, format_canonical(&entry.value, semantic_type)))
        .collect();
    println!(
        "{}",
        annotated_table(&rows, &columns, &format!("{} ({semantic_type})", args.field))
    );
    println!(
        "{} of {} record(s) have a usable {}",
        rows.len(),
        store.len(),
        args.field
    );

    let records: Vec<&Record> = rows.iter().map(|(record, _)| *record).collect();
    export_if_requested(&args.export, &records)
}

pub fn run_filter(args: &FilterArgs) -> Result<()> {
    let store = load_store(&args.source)?;
    let mut query = FilterQuery::new().with_limit(args.limit);
    for (field, value) in &args.filters {
        query = query.with_filter(field, value);
    }
    for field in &args.exclude_na {
        query = query.excluding_na(field);
    }
    if let Some(field) = &args.sort {
        query = query.with_sort(field, args.order.into());
    }
    let records = store.filter_and_sort(&query);

    let extra: Vec<&str> = args
        .filters
        .iter()
        .map(|(field, _)| field.as_str())
        .chain(args.sort.as_deref())
        .collect();
    let columns = columns_or(&args.export, display_columns(&extra));
    println!("{}", record_table(&records, &columns));
    println!("{} of {} record(s) matched", records.len(), store.len());

    export_if_requested(&args.export, &records)
}

/// Loads records from a saved payload or the live site into a snapshot.
fn load_store(source: &SourceArgs) -> Result<RecordStore> {
    let span = info_span!("load", category = %source.category);
    let _guard = span.enter();
    let start = Instant::now();

    let records = match &source.input {
        Some(path) => load_records(path)
            .with_context(|| format!("load saved payload {}", path.display()))?,
        None => {
            let config = FetchConfig::default().with_timeout(Duration::from_secs(source.timeout));
            let records = fetch_records(source.category, &config)
                .with_context(|| format!("fetch {} records", source.category.domain()))?;
            if let Some(path) = &source.save {
                save_payload(path, &records)
                    .with_context(|| format!("save payload {}", path.display()))?;
                info!(path = %path.display(), "payload saved");
            }
            records
        }
    };
    info!(
        records = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "records loaded"
    );
    Ok(RecordStore::new(source.category, records))
}

fn columns_or(export: &ExportArgs, default: Vec<String>) -> Vec<String> {
    export.columns.clone().unwrap_or(default)
}

fn export_if_requested(export: &ExportArgs, records: &[&Record]) -> Result<()> {
    let Some(path) = &export.export else {
        return Ok(());
    };
    let summary = export_csv(path, records, export.columns.as_deref())
        .with_context(|| format!("export {}", path.display()))?;
    println!(
        "Exported {} row(s) x {} column(s) to {}",
        summary.rows,
        summary.columns.len(),
        summary.path.display()
    );
    Ok(())
}
