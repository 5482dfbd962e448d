use super::FieldHandler;
use crate::core::{DeskError, FieldValue, Result};
use crate::schema::{FieldDescriptor, FieldKind};
use reqwest::Url;

/// External http(s) link (photos, testimony videos).
pub struct LinkHandler;

impl FieldHandler for LinkHandler {
    fn kind(&self) -> FieldKind {
        FieldKind::Link
    }

    fn parse(&self, field: &FieldDescriptor, input: &str) -> Result<FieldValue> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(FieldValue::text(""));
        }
        let url = Url::parse(input)
            .map_err(|e| DeskError::invalid(field.id, format!("'{}': {}", input, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(FieldValue::text(input)),
            scheme => Err(DeskError::invalid(
                field.id,
                format!("unsupported link scheme '{}'", scheme),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;

    #[test]
    fn test_link_requires_web_url() {
        let field = Schema::global().require("LTR_LINK1").unwrap();
        assert!(LinkHandler.parse(field, "https://photos.example.com/a/1").is_ok());
        assert!(LinkHandler.parse(field, "ftp://example.com/x").is_err());
        assert!(LinkHandler.parse(field, "not a link").is_err());
    }
}
