use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One row of a repeatable contact field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl ContactEntry {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            date: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// Value held by a record field.
///
/// Scalar kinds (text, numbers, dates, links, selects) are all kept as text,
/// exactly as they are entered and stored. Multi-selects hold tags in the
/// order they were picked and contact lists hold their entries in user order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Tags(Vec<String>),
    Contacts(Vec<ContactEntry>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "TEXT",
            Self::Tags(_) => "TAGS",
            Self::Contacts(_) => "CONTACTS",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_tags(&self) -> Option<&[String]> {
        match self {
            Self::Tags(tags) => Some(tags),
            _ => None,
        }
    }

    pub fn as_contacts(&self) -> Option<&[ContactEntry]> {
        match self {
            Self::Contacts(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Tags(tags) => tags.is_empty(),
            Self::Contacts(entries) => entries.is_empty(),
        }
    }

    pub fn is_structured(&self) -> bool {
        !matches!(self, Self::Text(_))
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Text(s) => JsonValue::String(s.clone()),
            Self::Tags(tags) => JsonValue::from(tags.clone()),
            Self::Contacts(entries) => {
                serde_json::to_value(entries).unwrap_or(JsonValue::Array(Vec::new()))
            }
        }
    }

    /// Single-cell rendering: text as-is, sequences as compact JSON.
    pub fn to_cell_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            _ => self.to_json().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_without_date_omits_key() {
        let json = serde_json::to_string(&ContactEntry::new("Ravi", "9876543210")).unwrap();
        assert_eq!(json, r#"{"name":"Ravi","phone":"9876543210"}"#);

        let dated = ContactEntry::new("Ravi", "9876543210").with_date("2024-05-01");
        let json = serde_json::to_string(&dated).unwrap();
        assert!(json.contains(r#""date":"2024-05-01""#));
    }

    #[test]
    fn test_cell_text_flattens_sequences() {
        let tags = FieldValue::Tags(vec!["FIR".into(), "Aadhar".into()]);
        assert_eq!(tags.to_cell_text(), r#"["FIR","Aadhar"]"#);
        assert_eq!(FieldValue::text("plain").to_cell_text(), "plain");
        assert!(FieldValue::Contacts(vec![]).is_empty());
    }
}
