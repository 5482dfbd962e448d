use crate::core::{FileRecord, Result};
use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde_json::Value as JsonValue;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn export_file_name(date: NaiveDate) -> String {
    format!("files_export_{}.csv", date.format("%Y-%m-%d"))
}

/// Writes the whole collection as CSV and returns the number of data rows.
///
/// The header is the key list of the first record. Every field is quoted and
/// structured values are written as compact JSON. An empty collection writes
/// nothing at all.
pub fn export_csv<W: Write>(records: &[FileRecord], writer: W) -> Result<usize> {
    let Some(first) = records.first() else {
        return Ok(0);
    };

    let mut csv = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    let header: Vec<String> = first.to_json_object().keys().cloned().collect();
    csv.write_record(&header)?;

    for record in records {
        let row: Vec<String> = record
            .to_json_object()
            .into_iter()
            .map(|(_, value)| cell_text(value))
            .collect();
        csv.write_record(&row)?;
    }

    csv.flush()?;
    Ok(records.len())
}

fn cell_text(value: JsonValue) -> String {
    match value {
        JsonValue::String(s) => s,
        other => other.to_string(),
    }
}

/// Exports into `dir` under the dated file name. Returns `None` without
/// touching the filesystem when there is nothing to export.
pub fn export_to_dir(records: &[FileRecord], dir: &Path, date: NaiveDate) -> Result<Option<PathBuf>> {
    if records.is_empty() {
        return Ok(None);
    }
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(date));
    let file = std::fs::File::create(&path)?;
    let rows = export_csv(records, std::io::BufWriter::new(file))?;
    tracing::info!(path = %path.display(), rows, "exported case files");
    Ok(Some(path))
}
