use super::temporal::parse_date;
use super::{FieldHandler, shape_error};
use crate::core::{ContactEntry, DeskError, FieldValue, Result};
use crate::schema::{FieldDescriptor, FieldKind};
use serde_json::Value as JsonValue;

/// Repeatable name/phone rows; dated lists carry a date per row.
pub struct ContactListHandler;

impl FieldHandler for ContactListHandler {
    fn kind(&self) -> FieldKind {
        FieldKind::ContactList
    }

    fn empty(&self) -> FieldValue {
        FieldValue::Contacts(Vec::new())
    }

    fn parse(&self, field: &FieldDescriptor, input: &str) -> Result<FieldValue> {
        parse_contacts(field, input).map(FieldValue::Contacts)
    }

    fn decode(&self, field: &FieldDescriptor, value: &JsonValue) -> Result<FieldValue> {
        let mut entries: Vec<ContactEntry> = match value {
            JsonValue::Null => Vec::new(),
            JsonValue::String(s) if s.trim().is_empty() => Vec::new(),
            JsonValue::String(s) => serde_json::from_str(s).map_err(|e| {
                DeskError::Decode(format!("{}: unreadable contact list: {}", field.id, e))
            })?,
            other => serde_json::from_value(other.clone()).map_err(|e| {
                DeskError::Decode(format!("{}: unreadable contact list: {}", field.id, e))
            })?,
        };
        for entry in &mut entries {
            if field.dated {
                entry.date.get_or_insert_with(String::new);
            } else {
                entry.date = None;
            }
        }
        Ok(FieldValue::Contacts(entries))
    }

    fn check(&self, field: &FieldDescriptor, value: &FieldValue) -> Result<()> {
        match value {
            FieldValue::Contacts(_) => Ok(()),
            other => Err(shape_error(field, other)),
        }
    }

    fn display(&self, _field: &FieldDescriptor, value: &FieldValue) -> String {
        let Some(entries) = value.as_contacts() else {
            return String::new();
        };
        entries
            .iter()
            .map(|entry| match entry.date.as_deref() {
                Some(date) if !date.is_empty() => {
                    format!("{} ({}) on {}", entry.name, entry.phone, date)
                }
                _ => format!("{} ({})", entry.name, entry.phone),
            })
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn sortable(&self) -> bool {
        false
    }
}

/// Parses `name|phone[|date]` rows separated by `;`.
///
/// Rows of a dated list always carry a date key, empty when not given.
pub fn parse_contacts(field: &FieldDescriptor, input: &str) -> Result<Vec<ContactEntry>> {
    let mut entries = Vec::new();
    for row in input.split(';').map(str::trim).filter(|r| !r.is_empty()) {
        let parts: Vec<&str> = row.split('|').map(str::trim).collect();
        let (name, phone, date) = match parts.as_slice() {
            [name] => (*name, "", None),
            [name, phone] => (*name, *phone, None),
            [name, phone, date] if field.dated => (*name, *phone, Some(*date)),
            _ => {
                return Err(DeskError::invalid(
                    field.id,
                    format!("cannot read contact row '{}'", row),
                ));
            }
        };

        let mut entry = ContactEntry::new(name, phone);
        if field.dated {
            let date = date.unwrap_or_default();
            if !date.is_empty() {
                parse_date(field, date)?;
            }
            entry = entry.with_date(date);
        }
        entries.push(entry);
    }
    Ok(entries)
}
