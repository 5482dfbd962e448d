use super::FieldHandler;
use crate::core::{DeskError, FieldValue, Result};
use crate::schema::{FieldDescriptor, FieldKind};

/// Free text, single line or multi line.
pub struct TextHandler {
    kind: FieldKind,
}

impl TextHandler {
    pub fn short() -> Self {
        Self {
            kind: FieldKind::ShortText,
        }
    }

    pub fn long() -> Self {
        Self {
            kind: FieldKind::LongText,
        }
    }
}

impl FieldHandler for TextHandler {
    fn kind(&self) -> FieldKind {
        self.kind
    }

    fn parse(&self, _field: &FieldDescriptor, input: &str) -> Result<FieldValue> {
        Ok(FieldValue::text(input))
    }
}

/// Digits-style identifiers and phone numbers. Kept as text so leading zeros
/// survive, but the input must read as a finite number.
pub struct NumericHandler;

impl FieldHandler for NumericHandler {
    fn kind(&self) -> FieldKind {
        FieldKind::Numeric
    }

    fn parse(&self, field: &FieldDescriptor, input: &str) -> Result<FieldValue> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(FieldValue::text(""));
        }
        match input.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(FieldValue::text(input)),
            _ => Err(DeskError::invalid(
                field.id,
                format!("'{}' is not a number", input),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;

    #[test]
    fn test_numeric_accepts_digits_and_rejects_words() {
        let field = Schema::global().require("MID").unwrap();
        assert_eq!(
            NumericHandler.parse(field, " 00123456 ").unwrap(),
            FieldValue::text("00123456")
        );
        assert_eq!(NumericHandler.parse(field, "").unwrap(), FieldValue::text(""));
        assert!(NumericHandler.parse(field, "twelve").is_err());
        assert!(NumericHandler.parse(field, "NaN").is_err());
    }

    #[test]
    fn test_text_keeps_input_verbatim() {
        let field = Schema::global().require("ACCIDENT_REMARKS").unwrap();
        let value = TextHandler::long().parse(field, "  line one\nline two").unwrap();
        assert_eq!(value, FieldValue::text("  line one\nline two"));
    }
}
