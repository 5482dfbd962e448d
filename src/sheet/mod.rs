//! Spreadsheet service
//!
//! An in-process stand-in for the spreadsheet web app that the remote store
//! talks to. The table only knows about rows of cells and a `FILE_ID` column;
//! it never interprets record contents.

pub mod server;

pub use server::{SheetState, sheet_router};

use crate::core::{DeskError, Result};
use crate::schema::ids;
use crate::storage::StoreAction;
use crate::storage::local::atomic_write;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::path::Path;

/// A write request as the sheet receives it.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetCommand {
    pub action: StoreAction,
    pub data: Map<String, JsonValue>,
}

/// Header row plus data rows of scalar cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetTable {
    headers: Vec<String>,
    rows: Vec<Vec<JsonValue>>,
}

impl SheetTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Applies one command. Returns whether the table changed.
    ///
    /// The header row is taken from the first written object. UPDATE and
    /// DELETE of an id that has no row do nothing.
    pub fn apply(&mut self, command: &SheetCommand) -> bool {
        if self.headers.is_empty() {
            self.headers = command.data.keys().cloned().collect();
        }

        match command.action {
            StoreAction::Create => {
                let row = self.encode_row(&command.data);
                self.rows.push(row);
                true
            }
            StoreAction::Update => match self.find_row(&command.data) {
                Some(index) => {
                    self.rows[index] = self.encode_row(&command.data);
                    true
                }
                None => false,
            },
            StoreAction::Delete => match self.find_row(&command.data) {
                Some(index) => {
                    self.rows.remove(index);
                    true
                }
                None => false,
            },
        }
    }

    fn find_row(&self, data: &Map<String, JsonValue>) -> Option<usize> {
        let column = self.headers.iter().position(|h| h == ids::FILE_ID)?;
        let wanted = data.get(ids::FILE_ID)?;
        self.rows
            .iter()
            .position(|row| row.get(column) == Some(wanted))
    }

    fn encode_row(&self, data: &Map<String, JsonValue>) -> Vec<JsonValue> {
        self.headers
            .iter()
            .map(|header| encode_cell(data.get(header)))
            .collect()
    }

    /// Every row as an object keyed by the header row.
    pub fn to_objects(&self) -> Vec<JsonValue> {
        self.rows
            .iter()
            .map(|row| {
                let object: Map<String, JsonValue> = self
                    .headers
                    .iter()
                    .enumerate()
                    .map(|(i, header)| {
                        let cell = row.get(i).cloned().unwrap_or(JsonValue::String(String::new()));
                        (header.clone(), decode_cell(cell))
                    })
                    .collect();
                JsonValue::Object(object)
            })
            .collect()
    }

    pub async fn load(path: &Path) -> Result<Self> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::new()),
            Err(err) => Err(DeskError::Storage(format!(
                "failed to read sheet '{}': {}",
                path.display(),
                err
            ))),
        }
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(self)?;
        atomic_write(path, &bytes).await
    }
}

/// Objects and arrays are stored as compact JSON text; a missing value is an
/// empty cell.
fn encode_cell(value: Option<&JsonValue>) -> JsonValue {
    match value {
        None | Some(JsonValue::Null) => JsonValue::String(String::new()),
        Some(structured @ (JsonValue::Array(_) | JsonValue::Object(_))) => {
            JsonValue::String(structured.to_string())
        }
        Some(scalar) => scalar.clone(),
    }
}

/// Text cells that look like JSON are parsed back; on failure the text is
/// returned unchanged.
fn decode_cell(cell: JsonValue) -> JsonValue {
    match cell {
        JsonValue::String(text) if text.starts_with('[') || text.starts_with('{') => {
            serde_json::from_str(&text).unwrap_or(JsonValue::String(text))
        }
        other => other,
    }
}
