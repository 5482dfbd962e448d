// ============================================================================
// src/collection/sort.rs - Case file ordering
// ============================================================================
//
// - Stable sort: equal keys keep their relative order
// - Missing values (empty text) sort last in both directions
// - Finite numbers rank before text and compare numerically
// - Text compares case-folded, lowercase first on a tie
//
// ============================================================================

use crate::core::{DeskError, FileRecord, Result, Timestamp};
use crate::fields::handlers;
use crate::schema::{FieldDescriptor, Schema, ids};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

// ============================================================================
// SORT DIRECTION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn is_descending(&self) -> bool {
        matches!(self, Self::Descending)
    }

    pub fn flip(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

// ============================================================================
// SORT KEY
// ============================================================================

/// What a record is ordered by: a scalar schema field or one of the
/// system timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Field(&'static FieldDescriptor),
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Resolves a field id. Multi-selects and contact lists are refused.
    pub fn resolve(field_id: &str) -> Result<Self> {
        match field_id {
            ids::CREATED_AT => Ok(Self::CreatedAt),
            ids::UPDATED_AT => Ok(Self::UpdatedAt),
            _ => {
                let field = Schema::global().require(field_id)?;
                if handlers().for_field(field)?.sortable() {
                    Ok(Self::Field(field))
                } else {
                    Err(DeskError::NotSortable(field_id.to_string()))
                }
            }
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Field(field) => field.id,
            Self::CreatedAt => ids::CREATED_AT,
            Self::UpdatedAt => ids::UPDATED_AT,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn parse(field_id: &str, direction: SortDirection) -> Result<Self> {
        Ok(Self::new(SortField::resolve(field_id)?, direction))
    }

    /// Canonical working order of the collection.
    pub fn newest_first() -> Self {
        Self::new(SortField::CreatedAt, SortDirection::Descending)
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::newest_first()
    }
}

// ============================================================================
// RECORD COMPARATOR
// ============================================================================

/// Compares records key by key; later keys only break ties.
pub struct RecordComparator<'a> {
    keys: &'a [SortKey],
}

impl<'a> RecordComparator<'a> {
    pub fn new(keys: &'a [SortKey]) -> Self {
        Self { keys }
    }

    pub fn compare(&self, a: &FileRecord, b: &FileRecord) -> Ordering {
        self.keys
            .iter()
            .map(|key| compare_by_key(a, b, key))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

fn compare_by_key(a: &FileRecord, b: &FileRecord, key: &SortKey) -> Ordering {
    match key.field {
        SortField::CreatedAt => key.direction.apply(compare_stamps(a.created_at(), b.created_at())),
        SortField::UpdatedAt => key.direction.apply(compare_stamps(a.updated_at(), b.updated_at())),
        SortField::Field(field) => compare_text(a.text(field.id), b.text(field.id), key.direction),
    }
}

fn compare_stamps(a: Timestamp, b: Timestamp) -> Ordering {
    a.cmp(&b)
}

/// Direction-aware comparison of two cell texts.
///
/// Every value that reads as a finite number ranks before every other
/// value; numbers compare numerically among themselves and the rest as
/// case-folded text. Empty values come last in both directions.
pub fn compare_text(a: &str, b: &str, direction: SortDirection) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    match (a.is_empty(), b.is_empty()) {
        (true, _) => return Ordering::Greater,
        (_, true) => return Ordering::Less,
        _ => {}
    }

    let ordering = match (as_number(a), as_number(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => locale_cmp(a, b),
    };
    direction.apply(ordering)
}

fn as_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Case-insensitive first; on a tie lowercase sorts before uppercase at the
/// first differing character.
fn locale_cmp(a: &str, b: &str) -> Ordering {
    let case_key = |c: char| (c.is_uppercase(), c);
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.chars().map(case_key).cmp(b.chars().map(case_key)))
}

// ============================================================================
// SORTING
// ============================================================================

/// Stable in-place sort. Works on owned records and on borrowed views such
/// as the output of a filter.
pub fn sort_records<R: Borrow<FileRecord>>(records: &mut [R], keys: &[SortKey]) {
    if records.len() < 2 || keys.is_empty() {
        return;
    }
    let comparator = RecordComparator::new(keys);
    records.sort_by(|a, b| comparator.compare(a.borrow(), b.borrow()));
}
