use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{PipelineError, Result};

/// One line of the input list. `None` when the field is empty or holds a
/// missing-value marker.
pub type RawRecord = Option<String>;

/// Field values that spreadsheet and dataframe exports write for a missing cell.
pub const MISSING_VALUE_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn to_raw_record(field: &str) -> RawRecord {
    if MISSING_VALUE_MARKERS.contains(&field) {
        None
    } else {
        Some(field.to_string())
    }
}

/// Reads a headerless single-column CSV of addresses.
///
/// Blank lines are skipped. A record with more than one column, or a quoted
/// field running over several lines, fails the whole read with
/// [`PipelineError::MalformedInput`].
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>> {
    if !path.exists() {
        return Err(PipelineError::InputNotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    read_records_from(file)
}

pub fn read_records_from<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|pos| pos.line()).unwrap_or(0);
        if record.len() != 1 {
            return Err(PipelineError::MalformedInput {
                line,
                reason: format!("expected 1 column, found {}", record.len()),
            });
        }
        // An unbalanced quote swallows the following lines into one field.
        if record[0].contains(['\n', '\r']) {
            return Err(PipelineError::MalformedInput {
                line,
                reason: "quoted field spans multiple lines".to_string(),
            });
        }
        records.push(to_raw_record(&record[0]));
    }

    tracing::debug!(records = records.len(), "loaded input records");
    Ok(records)
}
