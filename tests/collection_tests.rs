// ============================================================================
// Integration Tests for the collection engine
// ============================================================================
//
// Test Coverage:
// - Sorting: numeric vs textual order, missing values, stability, idempotence
// - List query: search, status filter and sort combined
// - Dashboard summary tiles and chart data
// - CSV export to a directory
//
// ============================================================================

use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::cmp::Ordering;
use intimation_desk::collection::{compare_text, export_to_dir, sort_records};
use intimation_desk::schema::{ids, statuses};
use intimation_desk::{
    DashboardSummary, FileId, FileRecord, ListQuery, SortDirection, SortKey, StatusFilter,
};
use tempfile::TempDir;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn record(id: &str, fields: &[(&str, &str)]) -> FileRecord {
    let mut record = FileRecord::draft(FileId::new(id));
    for (field, value) in fields {
        record.assign(field, value).unwrap();
    }
    record
}

fn ids_of<R: std::borrow::Borrow<FileRecord>>(records: &[R]) -> Vec<String> {
    records.iter().map(|r| r.borrow().id().to_string()).collect()
}

fn key(field: &str, direction: SortDirection) -> SortKey {
    SortKey::parse(field, direction).unwrap()
}

// ============================================================================
// SORTING
// ============================================================================

#[test]
fn test_numeric_fields_sort_by_value() {
    let mut records = vec![
        record("A", &[(ids::INTIMATION_NO, "100")]),
        record("B", &[(ids::INTIMATION_NO, "25")]),
        record("C", &[(ids::INTIMATION_NO, "3")]),
    ];
    sort_records(&mut records, &[key(ids::INTIMATION_NO, SortDirection::Ascending)]);
    assert_eq!(ids_of(&records), vec!["C", "B", "A"]);

    sort_records(&mut records, &[key(ids::INTIMATION_NO, SortDirection::Descending)]);
    assert_eq!(ids_of(&records), vec!["A", "B", "C"]);
}

#[test]
fn test_text_sorts_case_insensitively_with_missing_last() {
    let mut records = vec![
        record("A", &[(ids::DEATH_PERSON_NAME, "venkat")]),
        record("B", &[]),
        record("C", &[(ids::DEATH_PERSON_NAME, "Anil")]),
        record("D", &[(ids::DEATH_PERSON_NAME, "Babu")]),
    ];
    sort_records(&mut records, &[key(ids::DEATH_PERSON_NAME, SortDirection::Ascending)]);
    assert_eq!(ids_of(&records), vec!["C", "D", "A", "B"]);

    sort_records(&mut records, &[key(ids::DEATH_PERSON_NAME, SortDirection::Descending)]);
    assert_eq!(ids_of(&records), vec!["A", "D", "C", "B"]);
}

#[test]
fn test_sort_is_stable_and_idempotent() {
    let mut records = vec![
        record("A", &[(ids::DISTRICT, "Guntur")]),
        record("B", &[(ids::DISTRICT, "Krishna")]),
        record("C", &[(ids::DISTRICT, "Guntur")]),
        record("D", &[(ids::DISTRICT, "Krishna")]),
    ];
    let keys = [key(ids::DISTRICT, SortDirection::Ascending)];
    sort_records(&mut records, &keys);
    let once = ids_of(&records);
    assert_eq!(once, vec!["A", "C", "B", "D"]);

    sort_records(&mut records, &keys);
    assert_eq!(ids_of(&records), once);
}

#[test]
fn test_secondary_key_breaks_ties() {
    let mut records = vec![
        record("A", &[(ids::DISTRICT, "Guntur"), (ids::MID, "9")]),
        record("B", &[(ids::DISTRICT, "Eluru"), (ids::MID, "5")]),
        record("C", &[(ids::DISTRICT, "Guntur"), (ids::MID, "1")]),
    ];
    sort_records(
        &mut records,
        &[
            key(ids::DISTRICT, SortDirection::Ascending),
            key(ids::MID, SortDirection::Ascending),
        ],
    );
    assert_eq!(ids_of(&records), vec!["B", "C", "A"]);
}

#[test]
fn test_mixed_house_numbers_sort_totally_and_stably() {
    // Deterministic pseudo-random house numbers: plain, suffixed, dashed, blank.
    let mut seed: u64 = 0x5eed;
    let mut next = || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (seed >> 33) as usize
    };
    let values: Vec<String> = (0..400)
        .map(|_| {
            let n = next() % 40;
            match next() % 5 {
                0 => format!("{}a", n),
                1 => format!("{}-{}", n, next() % 4),
                2 => String::new(),
                3 => format!("{}.5", n),
                _ => n.to_string(),
            }
        })
        .collect();

    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        let mut records: Vec<FileRecord> = values
            .iter()
            .enumerate()
            .map(|(i, door)| record(&format!("R{:04}", i), &[("DOOR_NO", door.as_str())]))
            .collect();
        sort_records(&mut records, &[key("DOOR_NO", direction)]);
        assert_eq!(records.len(), values.len());

        for pair in records.windows(2) {
            let (a, b) = (pair[0].text("DOOR_NO"), pair[1].text("DOOR_NO"));
            match compare_text(a, b, direction) {
                Ordering::Greater => panic!("'{}' sorted before '{}'", a, b),
                Ordering::Equal => assert!(pair[0].id() < pair[1].id(), "equal keys reordered"),
                Ordering::Less => {}
            }
        }
        assert!(records.last().unwrap().text("DOOR_NO").is_empty());
    }
}

#[test]
fn test_sequence_fields_are_not_sort_keys() {
    assert!(SortKey::parse(ids::CONTACT_DETAILS, SortDirection::Ascending).is_err());
    assert!(SortKey::parse("RESUBMISSION_REQ_DOCS", SortDirection::Ascending).is_err());
    assert!(SortKey::parse("NOT_A_FIELD", SortDirection::Ascending).is_err());
}

// ============================================================================
// LIST QUERY
// ============================================================================

#[test]
fn test_list_query_filters_then_sorts() {
    let records = vec![
        record(
            "A",
            &[
                (ids::DEATH_PERSON_NAME, "Rama Rao"),
                (ids::INTIMATION_NO, "300"),
            ],
        ),
        record(
            "B",
            &[
                (ids::DEATH_PERSON_NAME, "Ramesh"),
                (ids::INTIMATION_NO, "20"),
                (ids::FILE_STATUS, statuses::COMPENSATED),
            ],
        ),
        record(
            "C",
            &[
                (ids::DEATH_PERSON_NAME, "Ramya"),
                (ids::INTIMATION_NO, "100"),
            ],
        ),
        record("D", &[(ids::DEATH_PERSON_NAME, "Sita")]),
    ];

    let query = ListQuery::new()
        .with_search("ram")
        .with_status(StatusFilter::parse(statuses::WAITING_FOR_DOCUMENTS))
        .with_sort(key(ids::INTIMATION_NO, SortDirection::Ascending));
    assert_eq!(ids_of(&query.apply(&records)), vec!["C", "A"]);

    let everything = ListQuery::new().with_sort(key(ids::INTIMATION_NO, SortDirection::Ascending));
    assert_eq!(ids_of(&everything.apply(&records)), vec!["B", "C", "A", "D"]);
    assert_eq!(records.len(), 4);
}

// ============================================================================
// DASHBOARD
// ============================================================================

#[test]
fn test_dashboard_summary_counts_tiles() {
    let records = vec![
        record("A", &[(ids::FILE_STATUS, statuses::COMPENSATED), (ids::TYPE_OF_ACCIDENT, "Drowning")]),
        record("B", &[(ids::FILE_STATUS, statuses::SUBMITTED_IN_PARTY)]),
        record("C", &[(ids::FILE_STATUS, statuses::COMPENSATED), (ids::TYPE_OF_ACCIDENT, "Drowning")]),
        record("D", &[(ids::TYPE_OF_ACCIDENT, "Electric Shock")]),
    ];
    let summary = DashboardSummary::from_records(&records).unwrap();
    assert_eq!(summary.total, 4);
    assert_eq!(summary.compensated, 2);
    assert_eq!(summary.in_party, 1);
    assert_eq!(summary.forwarded_to_insurance, 0);
    assert_eq!(summary.by_status.len(), 3);
    assert_eq!(summary.by_accident_type[0].value, "Drowning");
    assert_eq!(summary.by_accident_type[0].count, 2);

    let empty = DashboardSummary::from_records(&[]).unwrap();
    assert_eq!(empty.total, 0);
    assert!(empty.by_status.is_empty());
}

// ============================================================================
// EXPORT
// ============================================================================

#[test]
fn test_export_to_dir_writes_dated_csv() {
    let dir = TempDir::new().unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let records = vec![
        record("A1", &[(ids::DEATH_PERSON_NAME, "Rao, Venkata")]),
        record("B2", &[("RESUBMISSION_REQ_DOCS", "FIR, Aadhar")]),
    ];

    let path = export_to_dir(&records, dir.path(), date).unwrap().unwrap();
    assert_eq!(path.file_name().unwrap(), "files_export_2024-03-01.csv");

    let mut reader = ReaderBuilder::new().from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    let expected: Vec<&str> = FileRecord::keys().collect();
    assert_eq!(headers.iter().collect::<Vec<_>>(), expected);

    let rows: Vec<_> = reader.records().map(|row| row.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    let name_column = headers.iter().position(|h| h == ids::DEATH_PERSON_NAME).unwrap();
    assert_eq!(&rows[0][name_column], "Rao, Venkata");
    let docs_column = headers.iter().position(|h| h == "RESUBMISSION_REQ_DOCS").unwrap();
    assert_eq!(&rows[1][docs_column], r#"["FIR","Aadhar"]"#);
}

#[test]
fn test_export_of_empty_collection_creates_no_file() {
    let dir = TempDir::new().unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    assert!(export_to_dir(&[], dir.path(), date).unwrap().is_none());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
