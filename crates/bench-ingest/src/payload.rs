//! Payload decoding and on-disk payloads.
//!
//! The data endpoint answers `{"data": [ {..record..}, ... ]}`. Saved payloads
//! use the same shape; a bare top-level array is accepted as well.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use bench_model::Record;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Wrapped { data: Vec<Record> },
    Bare(Vec<Record>),
}

impl Payload {
    fn into_records(self) -> Vec<Record> {
        match self {
            Payload::Wrapped { data } | Payload::Bare(data) => data,
        }
    }
}

#[derive(Serialize)]
struct PayloadRef<'a> {
    data: &'a [Record],
}

/// Decodes a payload body into records.
pub fn parse_payload(text: &str) -> Result<Vec<Record>> {
    let payload: Payload = serde_json::from_str(text)?;
    Ok(payload.into_records())
}

/// Reads a payload saved with [`save_payload`] (or captured by hand).
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let reader = BufReader::new(File::open(path)?);
    let payload: Payload = serde_json::from_reader(reader)?;
    let records = payload.into_records();
    tracing::debug!(path = %path.display(), records = records.len(), "loaded saved payload");
    Ok(records)
}

/// Writes records in the endpoint's `{"data": [...]}` shape.
pub fn write_payload<W: Write>(writer: W, records: &[Record]) -> Result<()> {
    serde_json::to_writer_pretty(writer, &PayloadRef { data: records })?;
    Ok(())
}

/// Saves records to `path` so a fetch can be replayed offline.
pub fn save_payload(path: &Path, records: &[Record]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_payload(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}
