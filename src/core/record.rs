use super::{ContactEntry, DeskError, FieldValue, FileId, Result, Timestamp};
use crate::fields::{handlers, toggle_option};
use crate::schema::{DEFAULT_FILE_STATUS, FieldDescriptor, Schema, ids};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};

/// One intimation case file.
///
/// Values are held densely in schema order, so every record carries every
/// field. `FILE_ID` lives in the first slot and never changes once the record
/// exists.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    values: Vec<FieldValue>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl FileRecord {
    /// A fresh record as the create form starts it.
    pub fn draft(file_id: FileId) -> Self {
        let schema = Schema::global();
        let mut values: Vec<FieldValue> = schema
            .fields()
            .iter()
            .map(|field| handlers().empty_value(field))
            .collect();
        values[0] = FieldValue::Text(file_id.as_str().to_string());
        if let Some(position) = schema.position(ids::FILE_STATUS) {
            values[position] = FieldValue::text(DEFAULT_FILE_STATUS);
        }

        let now = Timestamp::now();
        Self {
            values,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &str {
        self.values[0].as_text().unwrap_or_default()
    }

    pub fn file_id(&self) -> FileId {
        FileId::new(self.id())
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    pub fn set_created_at(&mut self, at: Timestamp) {
        self.created_at = at;
    }

    pub fn set_updated_at(&mut self, at: Timestamp) {
        self.updated_at = at;
    }

    pub fn get(&self, field_id: &str) -> Result<&FieldValue> {
        let position = Schema::global()
            .position(field_id)
            .ok_or_else(|| DeskError::UnknownField(field_id.to_string()))?;
        Ok(&self.values[position])
    }

    /// Scalar text of a field; empty for sequences and unknown ids.
    pub fn text(&self, field_id: &str) -> &str {
        self.get(field_id)
            .ok()
            .and_then(FieldValue::as_text)
            .unwrap_or_default()
    }

    /// Stores an already typed value after a shape check.
    pub fn set(&mut self, field_id: &str, value: FieldValue) -> Result<()> {
        let (position, field) = Self::writable(field_id)?;
        handlers().for_field(field)?.check(field, &value)?;
        self.values[position] = value;
        Ok(())
    }

    /// Applies raw form input through the field's handler.
    pub fn assign(&mut self, field_id: &str, input: &str) -> Result<()> {
        let (position, field) = Self::writable(field_id)?;
        self.values[position] = handlers().for_field(field)?.parse(field, input)?;
        Ok(())
    }

    pub fn toggle_option(&mut self, field_id: &str, option: &str) -> Result<()> {
        let (position, field) = Self::writable(field_id)?;
        match &mut self.values[position] {
            FieldValue::Tags(tags) => toggle_option(field, tags, option),
            other => Err(DeskError::invalid(
                field.id,
                format!("cannot toggle an option on a {} value", other.type_name()),
            )),
        }
    }

    // ========================================================================
    // Contact lists
    // ========================================================================

    pub fn push_contact(&mut self, field_id: &str, entry: ContactEntry) -> Result<()> {
        let (field, entries) = self.contacts_mut(field_id)?;
        entries.push(Self::shape_contact(field, entry));
        Ok(())
    }

    pub fn update_contact(&mut self, field_id: &str, index: usize, entry: ContactEntry) -> Result<()> {
        let (field, entries) = self.contacts_mut(field_id)?;
        let len = entries.len();
        let slot = entries.get_mut(index).ok_or_else(|| {
            DeskError::invalid(field.id, format!("no contact row {} (have {})", index, len))
        })?;
        *slot = Self::shape_contact(field, entry);
        Ok(())
    }

    pub fn remove_contact(&mut self, field_id: &str, index: usize) -> Result<ContactEntry> {
        let (field, entries) = self.contacts_mut(field_id)?;
        if index >= entries.len() {
            return Err(DeskError::invalid(
                field.id,
                format!("no contact row {} (have {})", index, entries.len()),
            ));
        }
        Ok(entries.remove(index))
    }

    fn contacts_mut(&mut self, field_id: &str) -> Result<(&'static FieldDescriptor, &mut Vec<ContactEntry>)> {
        let (position, field) = Self::writable(field_id)?;
        match &mut self.values[position] {
            FieldValue::Contacts(entries) => Ok((field, entries)),
            _ => Err(DeskError::invalid(
                field.id,
                format!("{} field has no contact rows", field.kind),
            )),
        }
    }

    /// Dated lists always carry the date key, undated lists never do.
    fn shape_contact(field: &FieldDescriptor, mut entry: ContactEntry) -> ContactEntry {
        if field.dated {
            entry.date.get_or_insert_with(String::new);
        } else {
            entry.date = None;
        }
        entry
    }

    fn writable(field_id: &str) -> Result<(usize, &'static FieldDescriptor)> {
        if field_id == ids::FILE_ID {
            return Err(DeskError::ImmutableField(field_id.to_string()));
        }
        if field_id == ids::CREATED_AT || field_id == ids::UPDATED_AT {
            return Err(DeskError::ImmutableField(field_id.to_string()));
        }
        let schema = Schema::global();
        let field = schema.require(field_id)?;
        let position = schema
            .position(field_id)
            .ok_or_else(|| DeskError::UnknownField(field_id.to_string()))?;
        Ok((position, field))
    }

    // ========================================================================
    // JSON mapping
    // ========================================================================

    /// Key order of the flat mapping: schema order, then the timestamps.
    pub fn keys() -> impl Iterator<Item = &'static str> {
        Schema::global()
            .fields()
            .iter()
            .map(|field| field.id)
            .chain([ids::CREATED_AT, ids::UPDATED_AT])
    }

    /// Field values paired with their descriptors, in schema order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static FieldDescriptor, &FieldValue)> {
        Schema::global().fields().iter().zip(self.values.iter())
    }

    pub fn to_json_object(&self) -> Map<String, JsonValue> {
        let mut object = Map::new();
        for (field, value) in self.entries() {
            object.insert(field.id.to_string(), value.to_json());
        }
        object.insert(
            ids::CREATED_AT.to_string(),
            JsonValue::String(self.created_at.to_iso_string()),
        );
        object.insert(
            ids::UPDATED_AT.to_string(),
            JsonValue::String(self.updated_at.to_iso_string()),
        );
        object
    }

    pub fn to_json(&self) -> JsonValue {
        JsonValue::Object(self.to_json_object())
    }

    /// Builds a record from a store row. Unknown keys are rejected, missing
    /// keys take the kind's empty value.
    pub fn from_json_object(object: &Map<String, JsonValue>) -> Result<Self> {
        let schema = Schema::global();
        if let Some(unknown) = object.keys().find(|key| {
            schema.position(key).is_none() && *key != ids::CREATED_AT && *key != ids::UPDATED_AT
        }) {
            return Err(DeskError::Decode(format!(
                "record carries unknown field '{}'",
                unknown
            )));
        }

        let registry = handlers();
        let mut values = Vec::with_capacity(schema.len());
        for field in schema.fields() {
            let value = match object.get(field.id) {
                Some(raw) => registry.for_field(field)?.decode(field, raw)?,
                None => registry.empty_value(field),
            };
            values.push(value);
        }

        if values[0].as_text().is_none_or(str::is_empty) {
            return Err(DeskError::Decode(format!(
                "record without {}",
                ids::FILE_ID
            )));
        }

        let stamp = |key: &str| -> Timestamp {
            match object.get(key) {
                Some(raw) => Timestamp::from_json(raw).unwrap_or_else(|| {
                    tracing::warn!(key, value = %raw, "unreadable timestamp, using epoch");
                    Timestamp::epoch()
                }),
                None => Timestamp::epoch(),
            }
        };

        Ok(Self {
            values,
            created_at: stamp(ids::CREATED_AT),
            updated_at: stamp(ids::UPDATED_AT),
        })
    }

    pub fn from_json(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::Object(object) => Self::from_json_object(object),
            other => Err(DeskError::Decode(format!(
                "expected a record object, found {}",
                other
            ))),
        }
    }
}

impl Serialize for FileRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json_object().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FileRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        Self::from_json(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft() -> FileRecord {
        FileRecord::draft(FileId::new("A1"))
    }

    #[test]
    fn test_draft_defaults() {
        let record = draft();
        assert_eq!(record.id(), "A1");
        assert_eq!(record.text(ids::FILE_STATUS), DEFAULT_FILE_STATUS);
        assert_eq!(
            record.get("RESUBMISSION_REQ_DOCS").unwrap(),
            &FieldValue::Tags(vec![])
        );
        assert_eq!(
            record.get(ids::CONTACT_DETAILS).unwrap(),
            &FieldValue::Contacts(vec![])
        );
        assert_eq!(record.created_at(), record.updated_at());
    }

    #[test]
    fn test_file_id_is_immutable() {
        let mut record = draft();
        let err = record.assign(ids::FILE_ID, "B2").unwrap_err();
        assert!(matches!(err, DeskError::ImmutableField(_)));
        let err = record.set(ids::FILE_ID, FieldValue::text("B2")).unwrap_err();
        assert!(matches!(err, DeskError::ImmutableField(_)));
        assert_eq!(record.id(), "A1");
    }

    #[test]
    fn test_set_checks_shape() {
        let mut record = draft();
        assert!(
            record
                .set(ids::CONTACT_DETAILS, FieldValue::text("Ravi"))
                .is_err()
        );
        record
            .set(ids::DEATH_PERSON_NAME, FieldValue::text("Rao"))
            .unwrap();
        assert_eq!(record.text(ids::DEATH_PERSON_NAME), "Rao");
    }

    #[test]
    fn test_contact_editing_keeps_date_shape() {
        let mut record = draft();
        record
            .push_contact(ids::RESUBMISSION_INFORMATION, ContactEntry::new("Gopi", "900"))
            .unwrap();
        record
            .push_contact(
                ids::CONTACT_DETAILS,
                ContactEntry::new("Ravi", "901").with_date("2024-01-01"),
            )
            .unwrap();
        record
            .update_contact(ids::CONTACT_DETAILS, 0, ContactEntry::new("Ravi K", "901"))
            .unwrap();

        let dated = record.get(ids::RESUBMISSION_INFORMATION).unwrap();
        assert_eq!(dated.as_contacts().unwrap()[0].date.as_deref(), Some(""));
        let plain = record.get(ids::CONTACT_DETAILS).unwrap();
        assert_eq!(plain.as_contacts().unwrap()[0], ContactEntry::new("Ravi K", "901"));

        assert!(record.remove_contact(ids::CONTACT_DETAILS, 3).is_err());
        record.remove_contact(ids::CONTACT_DETAILS, 0).unwrap();
        assert!(record.get(ids::CONTACT_DETAILS).unwrap().is_empty());
    }

    #[test]
    fn test_json_keys_follow_schema_then_timestamps() {
        let object = draft().to_json_object();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        let expected: Vec<&str> = FileRecord::keys().collect();
        assert_eq!(keys, expected);
        assert_eq!(keys[0], ids::FILE_ID);
        assert_eq!(keys[keys.len() - 1], ids::UPDATED_AT);
    }

    #[test]
    fn test_decode_defaults_missing_and_rejects_unknown() {
        let record = FileRecord::from_json(&json!({
            "FILE_ID": "X9",
            "DEATH_PERSON_NAME": "Rao",
            "createdAt": "2024-01-02T03:04:05.000Z"
        }))
        .unwrap();
        assert_eq!(record.text(ids::DEATH_PERSON_NAME), "Rao");
        assert_eq!(record.text(ids::FILE_STATUS), "");
        assert!(record.get("RESUBMISSION_REQ_DOCS").unwrap().is_empty());
        assert_eq!(record.updated_at(), Timestamp::epoch());

        let err = FileRecord::from_json(&json!({"FILE_ID": "X9", "COLOR": "red"})).unwrap_err();
        assert!(matches!(err, DeskError::Decode(_)));
        assert!(FileRecord::from_json(&json!({"MID": "1"})).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut record = draft();
        record.assign("RESUBMISSION_REQ_DOCS", "FIR, Pan").unwrap();
        record.assign(ids::MID, "4410").unwrap();
        let text = serde_json::to_string(&record).unwrap();
        let back: FileRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(back, record);
    }
}
