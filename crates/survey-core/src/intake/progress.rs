use crate::model::FormFields;

/// Percentage (0–100) of `required` keys that are answered
///
/// An empty required set counts as complete.
pub fn progress(fields: &FormFields, required: &[&str]) -> f64 {
    if required.is_empty() {
        return 100.0;
    }
    let answered = required.iter().filter(|key| fields.is_answered(key)).count();
    answered as f64 / required.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_counts_answered_keys() {
        let fields = FormFields::new()
            .with("age", "15-17")
            .with("grade", "")
            .with("favoriteSubjects", vec!["Art"]);
        let pct = progress(&fields, &["age", "grade", "favoriteSubjects", "safety"]);
        assert!((pct - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_required_keys_is_complete() {
        assert_eq!(progress(&FormFields::new(), &[]), 100.0);
    }
}
