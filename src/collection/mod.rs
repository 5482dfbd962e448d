//! Collection engine
//!
//! Stateless operations over a slice of case files: search and status
//! filtering, multi-key sorting, grouping counts and CSV export.

pub mod aggregate;
pub mod export;
pub mod filter;
pub mod sort;

pub use aggregate::{ACCIDENT_CHART_LIMIT, DashboardSummary, GroupCount, count_by, status_choices};
pub use export::{export_csv, export_file_name, export_to_dir};
pub use filter::{ALL_STATUSES, StatusFilter, filter_records, matches_search};
pub use sort::{RecordComparator, SortDirection, SortField, SortKey, compare_text, sort_records};

use crate::core::{FileRecord, Result};

/// Search, status filter and sort of the list view, held as one value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub search: String,
    pub status: StatusFilter,
    pub sort: SortKey,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// True when nothing narrows or reorders the newest-first list.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Column header click: a new key starts ascending, the same ascending
    /// key flips to descending, anything else goes back to ascending.
    pub fn toggle_sort(&mut self, field_id: &str) -> Result<()> {
        let field = SortField::resolve(field_id)?;
        let direction = if self.sort.field == field && self.sort.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.sort = SortKey::new(field, direction);
        Ok(())
    }

    pub fn apply<'a>(&self, records: &'a [FileRecord]) -> Vec<&'a FileRecord> {
        let mut rows = filter_records(records, &self.search, &self.status);
        sort_records(&mut rows, std::slice::from_ref(&self.sort));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ids;

    #[test]
    fn test_default_query_and_reset() {
        let mut query = ListQuery::new();
        assert!(query.is_default());
        query = query.with_search("rao");
        assert!(!query.is_default());
        query.reset();
        assert!(query.is_default());
    }

    #[test]
    fn test_toggle_sort_cycles_direction() {
        let mut query = ListQuery::new();
        query.toggle_sort(ids::DISTRICT).unwrap();
        assert_eq!(query.sort.direction, SortDirection::Ascending);
        query.toggle_sort(ids::DISTRICT).unwrap();
        assert_eq!(query.sort.direction, SortDirection::Descending);
        query.toggle_sort(ids::DISTRICT).unwrap();
        assert_eq!(query.sort.direction, SortDirection::Ascending);

        query.toggle_sort(ids::CREATED_AT).unwrap();
        assert_eq!(query.sort.field, SortField::CreatedAt);
        assert_eq!(query.sort.direction, SortDirection::Ascending);
        assert!(query.toggle_sort(ids::CONTACT_DETAILS).is_err());
    }
}
