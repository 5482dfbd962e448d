use super::FieldHandler;
use crate::core::{DeskError, FieldValue, Result};
use crate::schema::{FieldDescriptor, FieldKind};
use chrono::{NaiveDate, NaiveDateTime};

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

pub(crate) fn parse_date(field: &FieldDescriptor, input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| {
        DeskError::invalid(field.id, format!("'{}' is not a YYYY-MM-DD date", input))
    })
}

/// Calendar date, stored as `YYYY-MM-DD`.
pub struct DateHandler;

impl FieldHandler for DateHandler {
    fn kind(&self) -> FieldKind {
        FieldKind::Date
    }

    fn parse(&self, field: &FieldDescriptor, input: &str) -> Result<FieldValue> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(FieldValue::text(""));
        }
        let date = parse_date(field, input)?;
        Ok(FieldValue::text(date.format(DATE_FORMAT).to_string()))
    }
}

/// Local date and time, stored as `YYYY-MM-DDTHH:MM`.
pub struct DateTimeHandler;

impl FieldHandler for DateTimeHandler {
    fn kind(&self) -> FieldKind {
        FieldKind::DateTime
    }

    fn parse(&self, field: &FieldDescriptor, input: &str) -> Result<FieldValue> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(FieldValue::text(""));
        }
        DATE_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
            .map(|dt| FieldValue::text(dt.format("%Y-%m-%dT%H:%M").to_string()))
            .ok_or_else(|| {
                DeskError::invalid(
                    field.id,
                    format!("'{}' is not a YYYY-MM-DDTHH:MM date-time", input),
                )
            })
    }

    fn display(&self, _field: &FieldDescriptor, value: &FieldValue) -> String {
        value.to_cell_text().replacen('T', " ", 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;

    #[test]
    fn test_date_validation() {
        let field = Schema::global().require("FWD_DATE").unwrap();
        assert_eq!(
            DateHandler.parse(field, "2024-02-29").unwrap(),
            FieldValue::text("2024-02-29")
        );
        assert!(DateHandler.parse(field, "2023-02-29").is_err());
        assert!(DateHandler.parse(field, "29/02/2024").is_err());
    }

    #[test]
    fn test_date_time_normalizes_separator() {
        let field = Schema::global().require("SCANNED_DATE").unwrap();
        assert_eq!(
            DateTimeHandler.parse(field, "2024-03-01 09:15").unwrap(),
            FieldValue::text("2024-03-01T09:15")
        );
        assert_eq!(
            DateTimeHandler.display(field, &FieldValue::text("2024-03-01T09:15")),
            "2024-03-01 09:15"
        );
        assert!(DateTimeHandler.parse(field, "2024-03-01").is_err());
    }
}
