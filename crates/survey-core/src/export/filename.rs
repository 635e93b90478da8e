use chrono::{DateTime, Utc};

pub const SINGLE_EXPORT_PREFIX: &str = "School_Life_Survey";
pub const BULK_EXPORT_PREFIX: &str = "All_Survey_Responses";

/// `<prefix>_<YYYY-MM-DDTHH-MM-SS>.xlsx`
///
/// The ISO timestamp is cut to whole seconds and `:` becomes `-` so the
/// name is valid on every filesystem.
pub fn export_filename(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{}_{}.xlsx", prefix, now.format("%Y-%m-%dT%H-%M-%S"))
}
