//! Text projections of case files for list and detail screens.

use crate::core::{FieldValue, FileRecord, Result};
use crate::fields::handlers;
use crate::schema::{FieldDescriptor, Schema, ids};
use serde::Serialize;
use std::fmt::Write;

/// Shown for a field with no value.
pub const EMPTY_PLACEHOLDER: &str = "-";

pub fn display_value(field: &FieldDescriptor, value: &FieldValue) -> Result<String> {
    if value.is_empty() {
        return Ok(EMPTY_PLACEHOLDER.to_string());
    }
    Ok(handlers().for_field(field)?.display(field, value))
}

/// Section by section listing of the visible fields, then the timestamps.
pub fn render_detail(record: &FileRecord) -> Result<String> {
    let schema = Schema::global();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} [{}]",
        or_placeholder(record.text(ids::DEATH_PERSON_NAME)),
        or_placeholder(record.text(ids::FILE_STATUS))
    );
    let _ = writeln!(
        out,
        "FILE_ID: {} | Intimation: {}",
        record.id(),
        or_placeholder(record.text(ids::INTIMATION_NO))
    );

    for section in schema.sections() {
        let _ = writeln!(out, "\n== {} ==", section.title());
        for field in schema.section_fields(*section) {
            let value = display_value(field, record.get(field.id)?)?;
            let _ = writeln!(out, "{}: {}", field.header, value);
        }
    }

    let _ = writeln!(
        out,
        "\nCreated: {}  Updated: {}",
        record.created_at().date_string(),
        record.updated_at().date_string()
    );
    Ok(out)
}

fn or_placeholder(text: &str) -> &str {
    if text.is_empty() { EMPTY_PLACEHOLDER } else { text }
}

/// One line of the directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow {
    pub file_id: String,
    pub intimation_no: String,
    pub name: String,
    pub mid: String,
    pub district: String,
    pub status: String,
    pub accident_type: String,
}

impl ListRow {
    pub const HEADERS: [&'static str; 7] = [
        "FILE ID",
        "INTIMATION NO",
        "NAME",
        "MID",
        "DISTRICT",
        "STATUS",
        "ACCIDENT TYPE",
    ];

    pub fn from_record(record: &FileRecord) -> Self {
        let text = |id: &str| record.text(id).to_string();
        Self {
            file_id: record.id().to_string(),
            intimation_no: text(ids::INTIMATION_NO),
            name: text(ids::DEATH_PERSON_NAME),
            mid: text(ids::MID),
            district: text(ids::DISTRICT),
            status: text(ids::FILE_STATUS),
            accident_type: text(ids::TYPE_OF_ACCIDENT),
        }
    }

    pub fn cells(&self) -> [&str; 7] {
        [
            &self.file_id,
            &self.intimation_no,
            &self.name,
            &self.mid,
            &self.district,
            &self.status,
            &self.accident_type,
        ]
    }
}
