use crate::catalog::{FIELDS, NOT_SPECIFIED};
use crate::model::ResponseRecord;

/// Flatten one record into `(question, answer)` pairs
///
/// Questions come out in catalog order. Unanswered questions read
/// `Not specified`; comment questions are only emitted when answered.
/// Multi-select answers are joined with `", "`.
pub fn to_rows(record: &ResponseRecord) -> Vec<(String, String)> {
    FIELDS
        .iter()
        .filter_map(|spec| match record.data.display(spec.key) {
            Some(value) => Some((spec.label.to_string(), value)),
            None if spec.is_comment() => None,
            None => Some((spec.label.to_string(), NOT_SPECIFIED.to_string())),
        })
        .collect()
}
