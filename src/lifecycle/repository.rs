use crate::collection::{SortKey, sort_records};
use crate::core::FileRecord;

/// The canonical in-memory collection, always newest first.
///
/// Every mutation leaves the collection in canonical order and hands it back.
#[derive(Debug, Default, Clone)]
pub struct FileRepository {
    records: Vec<FileRecord>,
}

impl FileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, file_id: &str) -> Option<&FileRecord> {
        self.records.iter().find(|r| r.id() == file_id)
    }

    pub fn contains(&self, file_id: &str) -> bool {
        self.get(file_id).is_some()
    }

    /// Replaces the whole collection.
    pub fn reset(&mut self, mut records: Vec<FileRecord>) -> &[FileRecord] {
        Self::canonical_sort(&mut records);
        self.records = records;
        &self.records
    }

    pub fn clear(&mut self) -> &[FileRecord] {
        self.records.clear();
        &self.records
    }

    /// A just-created record carries the newest timestamp, so it goes in
    /// front without a re-sort.
    pub fn prepend(&mut self, record: FileRecord) -> &[FileRecord] {
        self.records.insert(0, record);
        &self.records
    }

    /// Swaps in the record with the same `FILE_ID`. `None` when there is none.
    pub fn replace(&mut self, record: FileRecord) -> Option<&[FileRecord]> {
        let slot = self.records.iter_mut().find(|r| r.id() == record.id())?;
        *slot = record;
        Self::canonical_sort(&mut self.records);
        Some(&self.records)
    }

    /// Drops the record with this `FILE_ID`. `None` when there is none.
    pub fn remove(&mut self, file_id: &str) -> Option<&[FileRecord]> {
        let position = self.records.iter().position(|r| r.id() == file_id)?;
        self.records.remove(position);
        Some(&self.records)
    }

    fn canonical_sort(records: &mut [FileRecord]) {
        sort_records(records, &[SortKey::newest_first()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FileId, Timestamp};
    use chrono::{Duration, Utc};

    fn record_at(id: &str, minutes_ago: i64) -> FileRecord {
        let mut record = FileRecord::draft(FileId::new(id));
        let at = Timestamp::from_datetime(Utc::now() - Duration::minutes(minutes_ago));
        record.set_created_at(at);
        record.set_updated_at(at);
        record
    }

    fn ids(records: &[FileRecord]) -> Vec<&str> {
        records.iter().map(FileRecord::id).collect()
    }

    #[test]
    fn test_reset_orders_newest_first() {
        let mut repo = FileRepository::new();
        let order = repo.reset(vec![record_at("OLD", 30), record_at("NEW", 1), record_at("MID", 10)]);
        assert_eq!(ids(order), vec!["NEW", "MID", "OLD"]);
    }

    #[test]
    fn test_replace_keeps_size_and_order() {
        let mut repo = FileRepository::new();
        repo.reset(vec![record_at("A", 5), record_at("B", 3)]);
        let replacement = record_at("A", 5);
        let order = repo.replace(replacement).unwrap();
        assert_eq!(ids(order), vec!["B", "A"]);
        assert_eq!(repo.len(), 2);
        assert!(repo.replace(record_at("Z", 1)).is_none());
    }

    #[test]
    fn test_remove_exactly_one() {
        let mut repo = FileRepository::new();
        repo.reset(vec![record_at("A", 5), record_at("B", 3)]);
        assert!(repo.remove("Z").is_none());
        assert_eq!(repo.len(), 2);
        let order = repo.remove("A").unwrap();
        assert_eq!(ids(order), vec!["B"]);
        assert!(repo.clear().is_empty());
    }
}
