//! Schema registry
//!
//! Declarative description of every case file field. The registry is static:
//! nothing mutates it at runtime, and `Schema::validate` is run once at
//! startup to make sure the catalog is self-consistent.

pub mod catalog;

use crate::core::{DeskError, Result};
use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

pub use catalog::{DEFAULT_FILE_STATUS, ids, statuses};

// ============================================================================
// FIELD KIND
// ============================================================================

/// Input kind of a field; selects the handler used to parse, decode and
/// display its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldKind {
    ShortText,
    Numeric,
    Select,
    MultiSelect,
    LongText,
    Date,
    DateTime,
    Link,
    ContactList,
}

impl FieldKind {
    pub const ALL: [FieldKind; 9] = [
        FieldKind::ShortText,
        FieldKind::Numeric,
        FieldKind::Select,
        FieldKind::MultiSelect,
        FieldKind::LongText,
        FieldKind::Date,
        FieldKind::DateTime,
        FieldKind::Link,
        FieldKind::ContactList,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ShortText => "TEXT",
            Self::Numeric => "NUMBER",
            Self::Select => "DROPDOWN",
            Self::MultiSelect => "MULTISELECT",
            Self::LongText => "TEXTAREA",
            Self::Date => "DATE",
            Self::DateTime => "DATETIME",
            Self::Link => "LINK",
            Self::ContactList => "DYNAMIC_CONTACTS",
        }
    }

    /// Kinds whose options form a closed value set.
    pub fn has_options(&self) -> bool {
        matches!(self, Self::Select | Self::MultiSelect)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// SECTION
// ============================================================================

/// Display grouping. The order of `Section::ALL` is the global section order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Section {
    FileInformation,
    Address,
    Scanning,
    FileStatus,
    Resubmission,
    LetterDistribution,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::FileInformation,
        Section::Address,
        Section::Scanning,
        Section::FileStatus,
        Section::Resubmission,
        Section::LetterDistribution,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::FileInformation => "File Information",
            Self::Address => "Address",
            Self::Scanning => "Scanning",
            Self::FileStatus => "File Status",
            Self::Resubmission => "Resubmission",
            Self::LetterDistribution => "File Letter Distribution",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// ============================================================================
// FIELD DESCRIPTOR
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub id: &'static str,
    pub header: &'static str,
    pub kind: FieldKind,
    pub section: Section,
    pub description: Option<&'static str>,
    pub options: &'static [&'static str],
    pub hidden: bool,
    /// Contact lists only: every entry carries a date as well.
    pub dated: bool,
}

pub(crate) const fn field(
    id: &'static str,
    header: &'static str,
    kind: FieldKind,
    section: Section,
) -> FieldDescriptor {
    FieldDescriptor {
        id,
        header,
        kind,
        section,
        description: None,
        options: &[],
        hidden: false,
        dated: false,
    }
}

impl FieldDescriptor {
    pub(crate) const fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub(crate) const fn with_options(mut self, options: &'static [&'static str]) -> Self {
        self.options = options;
        self
    }

    pub(crate) const fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub(crate) const fn dated(mut self) -> Self {
        self.dated = true;
        self
    }

    pub fn allows(&self, option: &str) -> bool {
        self.options.contains(&option)
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

pub struct Schema {
    fields: &'static [FieldDescriptor],
    positions: HashMap<&'static str, usize>,
}

lazy_static! {
    static ref SCHEMA: Schema = Schema::new(catalog::FIELDS);
}

impl Schema {
    fn new(fields: &'static [FieldDescriptor]) -> Self {
        let positions = fields
            .iter()
            .enumerate()
            .map(|(position, descriptor)| (descriptor.id, position))
            .collect();
        Self { fields, positions }
    }

    /// The process-wide case file schema.
    pub fn global() -> &'static Schema {
        &SCHEMA
    }

    pub fn sections(&self) -> &'static [Section] {
        &Section::ALL
    }

    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, id: &str) -> Option<&'static FieldDescriptor> {
        self.positions.get(id).map(|&position| &self.fields[position])
    }

    pub fn require(&self, id: &str) -> Result<&'static FieldDescriptor> {
        self.field(id)
            .ok_or_else(|| DeskError::UnknownField(id.to_string()))
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Visible fields of a section, in display order.
    pub fn section_fields(&self, section: Section) -> impl Iterator<Item = &'static FieldDescriptor> {
        self.fields
            .iter()
            .filter(move |f| f.section == section && !f.hidden)
    }

    /// Self-consistency check of the catalog.
    pub fn validate(&self) -> Result<()> {
        let first = self
            .fields
            .first()
            .ok_or_else(|| DeskError::Schema("schema has no fields".to_string()))?;
        if first.id != ids::FILE_ID {
            return Err(DeskError::Schema(format!(
                "'{}' must be the first field, found '{}'",
                ids::FILE_ID,
                first.id
            )));
        }

        let mut seen = HashSet::new();
        let mut last_section = Section::ALL[0];
        for descriptor in self.fields {
            if !seen.insert(descriptor.id) {
                return Err(DeskError::Schema(format!(
                    "duplicate field id '{}'",
                    descriptor.id
                )));
            }
            if descriptor.id == ids::CREATED_AT || descriptor.id == ids::UPDATED_AT {
                return Err(DeskError::Schema(format!(
                    "'{}' is system managed and cannot be declared",
                    descriptor.id
                )));
            }
            if descriptor.section < last_section {
                return Err(DeskError::Schema(format!(
                    "field '{}' is out of section order",
                    descriptor.id
                )));
            }
            last_section = descriptor.section;

            if descriptor.kind.has_options() == descriptor.options.is_empty() {
                return Err(DeskError::Schema(format!(
                    "field '{}' of kind {} has mismatched options",
                    descriptor.id, descriptor.kind
                )));
            }
            if descriptor.dated && descriptor.kind != FieldKind::ContactList {
                return Err(DeskError::Schema(format!(
                    "only contact lists can be dated, '{}' is {}",
                    descriptor.id, descriptor.kind
                )));
            }
        }

        for section in Section::ALL {
            if self.section_fields(section).next().is_none() {
                return Err(DeskError::Schema(format!(
                    "section '{}' has no visible fields",
                    section
                )));
            }
        }

        let status = self.require(ids::FILE_STATUS)?;
        if !status.allows(DEFAULT_FILE_STATUS) {
            return Err(DeskError::Schema(format!(
                "default status '{}' is not a {} option",
                DEFAULT_FILE_STATUS,
                ids::FILE_STATUS
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_consistent() {
        Schema::global().validate().unwrap();
        assert_eq!(Schema::global().len(), 46);
    }

    #[test]
    fn test_section_fields_skip_hidden_and_keep_order() {
        let schema = Schema::global();
        let scanning: Vec<_> = schema
            .section_fields(Section::Scanning)
            .map(|f| f.id)
            .collect();
        assert_eq!(scanning, vec!["FILE_NO", "SCANNED_DATE", "SCANNING_REMARKS"]);

        assert!(
            schema
                .section_fields(Section::FileInformation)
                .all(|f| f.id != ids::FILE_ID)
        );
    }

    #[test]
    fn test_dated_contact_list() {
        let schema = Schema::global();
        assert!(schema.require(ids::RESUBMISSION_INFORMATION).unwrap().dated);
        assert!(!schema.require(ids::CONTACT_DETAILS).unwrap().dated);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = Schema::global().require("NOT_A_FIELD").unwrap_err();
        assert!(matches!(err, DeskError::UnknownField(_)));
    }

    #[test]
    fn test_duplicate_ids_fail_validation() {
        static BROKEN: &[FieldDescriptor] = &[
            field(ids::FILE_ID, "FILE ID", FieldKind::ShortText, Section::FileInformation),
            field(ids::FILE_ID, "FILE ID", FieldKind::ShortText, Section::FileInformation),
        ];
        let err = Schema::new(BROKEN).validate().unwrap_err();
        assert!(matches!(err, DeskError::Schema(_)));
    }
}
