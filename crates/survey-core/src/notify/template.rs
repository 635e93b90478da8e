use std::fmt::Write;

use crate::catalog::{Section, FIELDS, NOT_SPECIFIED};
use crate::model::ResponseRecord;

const FOOTER: &str = "\
--- END OF SURVEY RESPONSE ---
This is an automated notification from the School Life Survey System.
All responses are collected anonymously and sent to the survey administrator.

Best regards,
School Life Survey System";

/// Plain-text notification body for one response
///
/// Sections follow the catalog. Unanswered questions read `Not specified`;
/// the comments section lists only the comments that were given.
pub fn render_body(record: &ResponseRecord) -> String {
    let mut out = String::new();
    out.push_str("NEW SCHOOL LIFE SURVEY RESPONSE RECEIVED\n");
    out.push_str("========================================\n\n");
    let _ = writeln!(
        out,
        "Response submitted on: {}\n",
        record.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    );
    out.push_str("SURVEY RESPONSES:\n================\n");

    let mut current: Option<Section> = None;
    for spec in FIELDS {
        if current != Some(spec.section) {
            let _ = write!(out, "\n{}:\n", spec.section.title().to_uppercase());
            current = Some(spec.section);
        }
        match record.data.display(spec.key) {
            Some(value) if spec.is_comment() => {
                let _ = writeln!(out, "{}: {}", spec.label, value);
            }
            Some(value) => {
                let _ = writeln!(out, "- {}: {}", spec.label, value);
            }
            None if spec.is_comment() => {}
            None => {
                let _ = writeln!(out, "- {}: {}", spec.label, NOT_SPECIFIED);
            }
        }
    }

    out.push('\n');
    out.push_str(FOOTER);
    out
}
