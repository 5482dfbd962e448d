use super::filter::ALL_STATUSES;
use crate::core::{DeskError, FileRecord, Result};
use crate::fields::handlers;
use crate::schema::{Schema, ids, statuses};
use serde::Serialize;

/// Accident types shown on the dashboard chart.
pub const ACCIDENT_CHART_LIMIT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub value: String,
    pub count: usize,
}

/// Counts per distinct value of a scalar field, in first-seen order.
pub fn count_by(records: &[FileRecord], field_id: &str) -> Result<Vec<GroupCount>> {
    let field = Schema::global().require(field_id)?;
    if !handlers().for_field(field)?.sortable() {
        return Err(DeskError::invalid(
            field.id,
            format!("cannot group by a {} field", field.kind),
        ));
    }

    let mut groups: Vec<GroupCount> = Vec::new();
    for record in records {
        let value = record.text(field.id);
        match groups.iter_mut().find(|group| group.value == value) {
            Some(group) => group.count += 1,
            None => groups.push(GroupCount {
                value: value.to_string(),
                count: 1,
            }),
        }
    }
    Ok(groups)
}

/// Choices of the status filter: the sentinel, then the statuses present.
pub fn status_choices(records: &[FileRecord]) -> Vec<String> {
    let mut choices = vec![ALL_STATUSES.to_string()];
    for record in records {
        let status = record.text(ids::FILE_STATUS);
        if !choices.iter().skip(1).any(|seen| seen == status) {
            choices.push(status.to_string());
        }
    }
    choices
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub in_party: usize,
    pub forwarded_to_insurance: usize,
    pub compensated: usize,
    pub by_status: Vec<GroupCount>,
    pub by_accident_type: Vec<GroupCount>,
}

impl DashboardSummary {
    pub fn from_records(records: &[FileRecord]) -> Result<Self> {
        let by_status = count_by(records, ids::FILE_STATUS)?;
        let tile = |status: &str| {
            by_status
                .iter()
                .find(|group| group.value == status)
                .map_or(0, |group| group.count)
        };

        let mut by_accident_type = count_by(records, ids::TYPE_OF_ACCIDENT)?;
        by_accident_type.truncate(ACCIDENT_CHART_LIMIT);

        Ok(Self {
            total: records.len(),
            in_party: tile(statuses::SUBMITTED_IN_PARTY),
            forwarded_to_insurance: tile(statuses::FORWARDED_TO_INSURANCE),
            compensated: tile(statuses::COMPENSATED),
            by_status,
            by_accident_type,
        })
    }
}
