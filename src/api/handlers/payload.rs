//! Request payload helpers shared by the handlers.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::db::Id;
use crate::selection::{ALL_CATEGORIES, PageRequest, SelectionError, SelectionResult};

/// HTTP status echoed in every success body.
pub const STATUS_OK: u16 = 200;

/// `?page=` query parameter.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PageParams {
    /// 1-based page number; non-numeric values select page 1
    #[param(example = "1")]
    pub page: Option<String>,
}

impl PageParams {
    pub fn request(&self) -> PageRequest {
        PageRequest::parse(self.page.as_deref())
    }
}

/// An integer that clients may send as a JSON number or a string.
///
/// Form-driven clients post select values as strings (`"3"`), and the quiz
/// screen uses `"all"` for every category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntegerField {
    Number(i64),
    Text(String),
}

impl IntegerField {
    pub fn parse(&self, field: &'static str) -> SelectionResult<i64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(text) => text.trim().parse().map_err(|_| SelectionError::InvalidField {
                field,
                message: format!("'{}' is not an integer", text),
            }),
        }
    }

    /// Like [`IntegerField::parse`], also accepting `"all"` as the
    /// all-categories sentinel.
    pub fn parse_category(&self, field: &'static str) -> SelectionResult<Id> {
        match self {
            Self::Text(text) if text.trim().eq_ignore_ascii_case("all") => Ok(ALL_CATEGORIES),
            _ => self.parse(field),
        }
    }
}

/// Unwrap a required payload field.
pub fn require<T>(value: Option<T>, field: &'static str) -> SelectionResult<T> {
    value.ok_or(SelectionError::MissingField { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_field_accepts_numbers_and_numeric_text() {
        let number: IntegerField = serde_json::from_str("3").unwrap();
        let text: IntegerField = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(number.parse("category"), Ok(3));
        assert_eq!(text.parse("category"), Ok(4));
    }

    #[test]
    fn test_integer_field_rejects_other_text() {
        let text = IntegerField::Text("three".to_string());
        assert!(matches!(
            text.parse("difficulty"),
            Err(SelectionError::InvalidField {
                field: "difficulty",
                ..
            })
        ));
    }

    #[test]
    fn test_category_field_accepts_all() {
        assert_eq!(
            IntegerField::Text("All".to_string()).parse_category("id"),
            Ok(ALL_CATEGORIES)
        );
        assert_eq!(IntegerField::Number(0).parse_category("id"), Ok(0));
        assert_eq!(IntegerField::Number(2).parse_category("id"), Ok(2));
    }

    #[test]
    fn test_require_reports_field_name() {
        assert_eq!(
            require::<i64>(None, "answer"),
            Err(SelectionError::MissingField { field: "answer" })
        );
        assert_eq!(require(Some(1), "answer"), Ok(1));
    }
}
