use crate::catalog::{self, InputKind};
use crate::errors::{Result, SurveyError};
use crate::model::FormFields;

/// A required question left unanswered, with the message to show beside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingField {
    pub key: String,
    pub message: String,
}

impl MissingField {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Check that every key in `required` has an answer
///
/// Reports all missing keys at once, in `required` order. Keys not in the
/// catalog are treated as free text.
pub fn validate_required(fields: &FormFields, required: &[&str]) -> Result<()> {
    let missing: Vec<MissingField> = required
        .iter()
        .filter(|key| !fields.is_answered(key))
        .map(|key| {
            let input = catalog::find(key)
                .map(|spec| spec.input)
                .unwrap_or(InputKind::Text);
            MissingField::new(*key, input.missing_message())
        })
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(SurveyError::Validation { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_answered_passes() {
        let fields = FormFields::new()
            .with("age", "15-17")
            .with("favoriteSubjects", vec!["Math"]);
        assert!(validate_required(&fields, &["age", "favoriteSubjects"]).is_ok());
    }

    #[test]
    fn test_reports_every_missing_field_with_message() {
        let fields = FormFields::new()
            .with("age", "15-17")
            .with("nickname", "   ");
        let err = validate_required(&fields, &["age", "grade", "favoriteSubjects", "nickname"])
            .unwrap_err();

        let SurveyError::Validation { missing } = err else {
            panic!("expected validation error");
        };
        assert_eq!(
            missing,
            vec![
                MissingField::new("grade", "Please select an option"),
                MissingField::new("favoriteSubjects", "Please select at least one option"),
                MissingField::new("nickname", "This field is required"),
            ]
        );
    }

    #[test]
    fn test_empty_required_list_always_passes() {
        assert!(validate_required(&FormFields::new(), &[]).is_ok());
    }
}
