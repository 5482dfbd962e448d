use super::{SheetCommand, SheetTable};
use crate::core::{DeskError, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{Value as JsonValue, json};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct SheetState {
    table: Arc<Mutex<SheetTable>>,
    backing: Option<Arc<PathBuf>>,
}

impl SheetState {
    pub fn in_memory() -> Self {
        Self {
            table: Arc::new(Mutex::new(SheetTable::new())),
            backing: None,
        }
    }

    /// Sheet kept in a JSON file, rewritten after every change.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let table = SheetTable::load(&path).await?;
        tracing::info!(path = %path.display(), rows = table.len(), "sheet opened");
        Ok(Self {
            table: Arc::new(Mutex::new(table)),
            backing: Some(Arc::new(path)),
        })
    }

    pub async fn snapshot(&self) -> SheetTable {
        self.table.lock().await.clone()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug)]
pub enum SheetError {
    Payload(String),
    Internal(String),
}

impl From<DeskError> for SheetError {
    fn from(err: DeskError) -> Self {
        match err {
            DeskError::Decode(msg) => Self::Payload(msg),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for SheetError {
    fn into_response(self) -> Response {
        let (status, error, code) = match self {
            SheetError::Payload(msg) => (StatusCode::BAD_REQUEST, msg, "bad_payload"),
            SheetError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, "internal_error"),
        };
        let body = Json(ErrorResponse {
            error,
            code: code.to_string(),
        });
        (status, body).into_response()
    }
}

/// `GET /` lists the rows, `POST /` applies `{action, data}`.
pub fn sheet_router(state: SheetState) -> Router {
    Router::new()
        .route("/", get(list_rows).post(apply_command))
        .with_state(state)
}

async fn list_rows(State(state): State<SheetState>) -> Json<Vec<JsonValue>> {
    let table = state.table.lock().await;
    Json(table.to_objects())
}

/// The body is read as plain text whatever its content type.
async fn apply_command(
    State(state): State<SheetState>,
    body: String,
) -> std::result::Result<Json<JsonValue>, SheetError> {
    let command: SheetCommand = serde_json::from_str(&body)
        .map_err(|e| SheetError::Payload(format!("malformed command: {}", e)))?;

    let mut table = state.table.lock().await;
    let changed = table.apply(&command);
    tracing::debug!(action = %command.action, changed, rows = table.len(), "sheet command");

    if changed {
        if let Some(path) = &state.backing {
            table.save(path).await?;
        }
    }

    Ok(Json(json!({ "status": "success" })))
}
