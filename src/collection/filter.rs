use crate::core::FileRecord;
use crate::schema::ids;
use std::fmt;

/// Label of the sentinel that disables status filtering.
pub const ALL_STATUSES: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    /// `"All"` is the sentinel; anything else is an exact status.
    pub fn parse(label: &str) -> Self {
        if label == ALL_STATUSES {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_STATUSES,
            Self::Only(status) => status,
        }
    }

    pub fn matches(&self, record: &FileRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => record.text(ids::FILE_STATUS) == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Free-text search: the subject name contains the query ignoring case, or
/// either identifier number contains it verbatim.
pub fn matches_search(record: &FileRecord, query: &str) -> bool {
    record
        .text(ids::DEATH_PERSON_NAME)
        .to_lowercase()
        .contains(&query.to_lowercase())
        || record.text(ids::INTIMATION_NO).contains(query)
        || record.text(ids::MID).contains(query)
}

/// Records passing both the search and the status filter, in input order.
pub fn filter_records<'a>(
    records: &'a [FileRecord],
    query: &str,
    status: &StatusFilter,
) -> Vec<&'a FileRecord> {
    records
        .iter()
        .filter(|record| matches_search(record, query) && status.matches(record))
        .collect()
}
