//! Field kind handlers
//!
//! One handler per `FieldKind`, held in a registry keyed by the kind. The
//! handler owns everything kind-specific: the empty value, parsing of form
//! input, lenient decoding of stored data and display text.

mod choice;
mod contacts;
mod link;
mod temporal;
mod text;

pub use choice::{MultiSelectHandler, SelectHandler, toggle_option};
pub use contacts::{ContactListHandler, parse_contacts};
pub use link::LinkHandler;
pub use temporal::{DateHandler, DateTimeHandler};
pub use text::{NumericHandler, TextHandler};

use crate::core::{DeskError, FieldValue, Result};
use crate::schema::{FieldDescriptor, FieldKind};
use lazy_static::lazy_static;
use serde_json::Value as JsonValue;
use std::collections::HashMap;

pub trait FieldHandler: Send + Sync {
    fn kind(&self) -> FieldKind;

    fn empty(&self) -> FieldValue {
        FieldValue::Text(String::new())
    }

    /// Form input to a typed value. Empty input clears the field.
    fn parse(&self, field: &FieldDescriptor, input: &str) -> Result<FieldValue>;

    /// Store data to a typed value. Accepts anything the sheet can hand back.
    fn decode(&self, _field: &FieldDescriptor, value: &JsonValue) -> Result<FieldValue> {
        Ok(FieldValue::Text(scalar_text(value)))
    }

    /// Shape check for values assigned directly.
    fn check(&self, field: &FieldDescriptor, value: &FieldValue) -> Result<()> {
        match value {
            FieldValue::Text(_) => Ok(()),
            other => Err(shape_error(field, other)),
        }
    }

    fn display(&self, _field: &FieldDescriptor, value: &FieldValue) -> String {
        value.to_cell_text()
    }

    fn sortable(&self) -> bool {
        true
    }
}

/// Text form of a scalar cell. Numbers and booleans come back from the sheet
/// as JSON scalars; null is an empty cell.
pub(crate) fn scalar_text(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::String(s) => s.clone(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

pub(crate) fn shape_error(field: &FieldDescriptor, value: &FieldValue) -> DeskError {
    DeskError::invalid(
        field.id,
        format!("{} field cannot hold a {} value", field.kind, value.type_name()),
    )
}

// ============================================================================
// REGISTRY
// ============================================================================

pub struct HandlerRegistry {
    handlers: HashMap<FieldKind, Box<dyn FieldHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register(&mut self, handler: Box<dyn FieldHandler>) {
        tracing::trace!(kind = %handler.kind(), "registered field handler");
        self.handlers.insert(handler.kind(), handler);
    }

    pub fn with_default_handlers() -> Self {
        let mut registry = Self::new();

        registry.register(Box::new(TextHandler::short()));
        registry.register(Box::new(TextHandler::long()));
        registry.register(Box::new(NumericHandler));
        registry.register(Box::new(SelectHandler));
        registry.register(Box::new(MultiSelectHandler));
        registry.register(Box::new(DateHandler));
        registry.register(Box::new(DateTimeHandler));
        registry.register(Box::new(LinkHandler));
        registry.register(Box::new(ContactListHandler));

        registry
    }

    pub fn get(&self, kind: FieldKind) -> Option<&dyn FieldHandler> {
        self.handlers.get(&kind).map(|boxed| &**boxed)
    }

    pub fn for_field(&self, field: &FieldDescriptor) -> Result<&dyn FieldHandler> {
        self.get(field.kind).ok_or_else(|| {
            DeskError::Schema(format!(
                "no handler registered for {} (field '{}')",
                field.kind, field.id
            ))
        })
    }

    pub fn empty_value(&self, field: &FieldDescriptor) -> FieldValue {
        self.get(field.kind)
            .map(|handler| handler.empty())
            .unwrap_or_else(|| FieldValue::Text(String::new()))
    }

    /// Every kind must have exactly one handler.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<_> = FieldKind::ALL
            .iter()
            .filter(|kind| !self.handlers.contains_key(kind))
            .map(|kind| kind.name())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DeskError::Schema(format!(
                "missing field handlers: {}",
                missing.join(", ")
            )))
        }
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::with_default_handlers()
    }
}

lazy_static! {
    static ref HANDLERS: HandlerRegistry = HandlerRegistry::with_default_handlers();
}

/// The process-wide handler registry.
pub fn handlers() -> &'static HandlerRegistry {
    &HANDLERS
}
