// ============================================================================
// Intimation Desk Library
// ============================================================================

pub mod collection;
pub mod config;
pub mod core;
pub mod fields;
pub mod lifecycle;
pub mod schema;
pub mod sheet;
pub mod storage;
pub mod view;

// Re-export main types for convenience
pub use collection::{DashboardSummary, ListQuery, SortDirection, SortKey, StatusFilter};
pub use config::{DeskConfig, StoreBackend};
pub use core::{ContactEntry, DeskError, FieldValue, FileId, FileRecord, Result, Timestamp};
pub use lifecycle::{Confirm, FileManager, LoadState, Notice, Notifier, Outcome};
pub use schema::{FieldDescriptor, FieldKind, Schema, Section};
pub use storage::{FileStore, LocalFileStore, SheetsStore, StoreAction, open_store};

/// Startup self-check: the field catalog is consistent and every field kind
/// has a handler.
pub fn verify_registry() -> Result<()> {
    Schema::global().validate()?;
    fields::handlers().validate()
}

/// Checks the registry, picks the store from `config` and returns a manager
/// that still has to be loaded.
pub fn open_manager(config: &DeskConfig) -> Result<FileManager> {
    verify_registry()?;
    let store = open_store(config)?;
    Ok(FileManager::new(store))
}
