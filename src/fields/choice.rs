use super::{FieldHandler, scalar_text, shape_error};
use crate::core::{DeskError, FieldValue, Result};
use crate::schema::{FieldDescriptor, FieldKind};
use serde_json::Value as JsonValue;

fn require_option(field: &FieldDescriptor, option: &str) -> Result<()> {
    if field.allows(option) {
        Ok(())
    } else {
        Err(DeskError::invalid(
            field.id,
            format!("'{}' is not one of the allowed options", option),
        ))
    }
}

/// Single choice from the field's closed option set.
pub struct SelectHandler;

impl FieldHandler for SelectHandler {
    fn kind(&self) -> FieldKind {
        FieldKind::Select
    }

    fn parse(&self, field: &FieldDescriptor, input: &str) -> Result<FieldValue> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(FieldValue::text(""));
        }
        require_option(field, input)?;
        Ok(FieldValue::text(input))
    }
}

/// Any number of choices from the option set, in the order they were picked.
pub struct MultiSelectHandler;

impl FieldHandler for MultiSelectHandler {
    fn kind(&self) -> FieldKind {
        FieldKind::MultiSelect
    }

    fn empty(&self) -> FieldValue {
        FieldValue::Tags(Vec::new())
    }

    /// Comma separated options; repeats are dropped.
    fn parse(&self, field: &FieldDescriptor, input: &str) -> Result<FieldValue> {
        let mut picked: Vec<String> = Vec::new();
        for option in input.split(',').map(str::trim).filter(|o| !o.is_empty()) {
            require_option(field, option)?;
            if !picked.iter().any(|p| p == option) {
                picked.push(option.to_string());
            }
        }
        Ok(FieldValue::Tags(picked))
    }

    fn decode(&self, _field: &FieldDescriptor, value: &JsonValue) -> Result<FieldValue> {
        let tags = match value {
            JsonValue::Null => Vec::new(),
            JsonValue::Array(items) => items.iter().map(scalar_text).collect(),
            JsonValue::String(s) if s.trim().is_empty() => Vec::new(),
            JsonValue::String(s) if s.starts_with('[') => {
                match serde_json::from_str::<Vec<JsonValue>>(s) {
                    Ok(items) => items.iter().map(scalar_text).collect(),
                    Err(_) => vec![s.clone()],
                }
            }
            other => vec![scalar_text(other)],
        };
        Ok(FieldValue::Tags(tags))
    }

    fn check(&self, field: &FieldDescriptor, value: &FieldValue) -> Result<()> {
        match value {
            FieldValue::Tags(_) => Ok(()),
            other => Err(shape_error(field, other)),
        }
    }

    fn display(&self, _field: &FieldDescriptor, value: &FieldValue) -> String {
        value.as_tags().map(|tags| tags.join(", ")).unwrap_or_default()
    }

    fn sortable(&self) -> bool {
        false
    }
}

/// Checkbox behaviour of the multi-select: add the option if absent, remove
/// it if present.
pub fn toggle_option(field: &FieldDescriptor, tags: &mut Vec<String>, option: &str) -> Result<()> {
    require_option(field, option)?;
    if let Some(position) = tags.iter().position(|t| t == option) {
        tags.remove(position);
    } else {
        tags.push(option.to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use serde_json::json;

    fn docs_field() -> &'static FieldDescriptor {
        Schema::global().require("RESUBMISSION_REQ_DOCS").unwrap()
    }

    #[test]
    fn test_select_rejects_unknown_option() {
        let field = Schema::global().require("FILE_STATUS").unwrap();
        assert_eq!(
            SelectHandler.parse(field, "Closed at Party").unwrap(),
            FieldValue::text("Closed at Party")
        );
        assert!(SelectHandler.parse(field, "Lost").is_err());
    }

    #[test]
    fn test_multi_select_parse_keeps_pick_order() {
        let value = MultiSelectHandler
            .parse(docs_field(), "Pan, FIR, Pan")
            .unwrap();
        assert_eq!(value, FieldValue::Tags(vec!["Pan".into(), "FIR".into()]));
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut tags = vec!["FIR".to_string()];
        toggle_option(docs_field(), &mut tags, "Aadhar").unwrap();
        assert_eq!(tags, vec!["FIR", "Aadhar"]);
        toggle_option(docs_field(), &mut tags, "FIR").unwrap();
        assert_eq!(tags, vec!["Aadhar"]);
        assert!(toggle_option(docs_field(), &mut tags, "Passport").is_err());
    }

    #[test]
    fn test_decode_sheet_cells() {
        let field = docs_field();
        assert_eq!(
            MultiSelectHandler.decode(field, &json!("[\"FIR\",\"Pan\"]")).unwrap(),
            FieldValue::Tags(vec!["FIR".into(), "Pan".into()])
        );
        assert_eq!(
            MultiSelectHandler.decode(field, &json!("")).unwrap(),
            FieldValue::Tags(vec![])
        );
        assert_eq!(
            MultiSelectHandler.decode(field, &json!("[broken")).unwrap(),
            FieldValue::Tags(vec!["[broken".into()])
        );
    }
}
