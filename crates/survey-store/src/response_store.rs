//! Append-only response collection over a single slot
//!
//! The slot holds a JSON array of `{id, timestamp, data}` objects in
//! insertion order. Every operation reads the slot afresh, so two stores
//! over the same backend (or a store recreated after a restart) see the
//! same records. There is no cross-process locking: concurrent writers can
//! lose each other's appends.

use chrono::{DateTime, Utc};
use std::time::Instant;
use survey_core::config::DEFAULT_STORAGE_KEY;
use survey_core::errors::ExError;
use survey_core::model::{FormFields, ResponseId, ResponseRecord};
use survey_core::{log_op_end, log_op_error, log_op_start};

use crate::errors::{encode_failed, persist_failed, Result};
use crate::slot::SlotStorage;

/// Aggregate figures for the admin view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStats {
    pub total: usize,
    /// Most recent submission time, `None` when the store is empty
    pub latest: Option<DateTime<Utc>>,
}

/// Result of a soft-fail append
///
/// The record always exists (the submitter sees their confirmation); the
/// error says whether it also reached storage.
#[derive(Debug, Clone)]
pub struct AppendOutcome {
    pub record: ResponseRecord,
    pub persist_error: Option<ExError>,
}

impl AppendOutcome {
    pub fn is_persisted(&self) -> bool {
        self.persist_error.is_none()
    }
}

/// Durable, ordered collection of survey responses
pub struct ResponseStore<S: SlotStorage> {
    slots: S,
    key: String,
}

impl<S: SlotStorage> ResponseStore<S> {
    /// Store under the default `school_survey_responses` slot
    pub fn new(slots: S) -> Self {
        Self::with_key(slots, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(slots: S, key: impl Into<String>) -> Self {
        Self {
            slots,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn slots(&self) -> &S {
        &self.slots
    }

    /// Every stored record in insertion order
    ///
    /// An absent slot, a payload that is not a JSON array, and individual
    /// entries that do not decode are all treated as "no data" and logged.
    ///
    /// # Errors
    ///
    /// Only a backend read failure is an error.
    pub fn load_all(&self) -> Result<Vec<ResponseRecord>> {
        let started = Instant::now();
        log_op_start!("load_all", storage_key = %self.key);

        let records = match self.read_slot() {
            Ok(decoded) => decoded.records,
            Err(e) => {
                log_op_error!("load_all", e, started = started, storage_key = %self.key);
                return Err(e);
            }
        };

        log_op_end!(
            "load_all",
            started = started,
            record_count = records.len() as u64
        );
        Ok(records)
    }

    /// Append a new response and persist the whole collection
    ///
    /// # Errors
    ///
    /// Returns a Persistence error when the slot cannot be read or the
    /// write is rejected (e.g. quota exceeded). Nothing is stored then.
    pub fn append(&mut self, fields: FormFields) -> Result<ResponseRecord> {
        let record = ResponseRecord::new(fields);
        self.persist(record)
    }

    /// Append without failing the caller
    ///
    /// A persistence failure is logged and reported in the outcome; the
    /// record is still returned so the submission flow can continue.
    pub fn append_soft(&mut self, fields: FormFields) -> AppendOutcome {
        let record = ResponseRecord::new(fields);
        match self.persist(record.clone()) {
            Ok(record) => AppendOutcome {
                record,
                persist_error: None,
            },
            Err(e) => {
                tracing::warn!(
                    storage_key = %self.key,
                    record_id = %record.id,
                    error = %e,
                    "response kept for this session only"
                );
                AppendOutcome {
                    record,
                    persist_error: Some(e),
                }
            }
        }
    }

    /// Remove every stored response. Irreversible; clearing an empty store
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the slot exists but cannot be removed.
    pub fn clear(&mut self) -> Result<()> {
        let started = Instant::now();
        log_op_start!("clear", storage_key = %self.key);

        match self.slots.remove(&self.key) {
            Ok(()) => {
                log_op_end!("clear", started = started);
                Ok(())
            }
            Err(e) => {
                log_op_error!("clear", e, started = started);
                Err(e)
            }
        }
    }

    /// Look up a record by its rendered id
    ///
    /// # Errors
    ///
    /// Propagates backend read failures.
    pub fn find(&self, id: &str) -> Result<Option<ResponseRecord>> {
        Ok(self.load_all()?.into_iter().find(|r| r.id.matches(id)))
    }

    /// Number of stored records
    ///
    /// # Errors
    ///
    /// Propagates backend read failures.
    pub fn len(&self) -> Result<usize> {
        Ok(self.load_all()?.len())
    }

    /// # Errors
    ///
    /// Propagates backend read failures.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Total count and latest submission time
    ///
    /// # Errors
    ///
    /// Propagates backend read failures.
    pub fn stats(&self) -> Result<StoreStats> {
        let records = self.load_all()?;
        Ok(StoreStats {
            total: records.len(),
            latest: records.iter().map(|r| r.timestamp).max(),
        })
    }

    fn persist(&mut self, mut record: ResponseRecord) -> Result<ResponseRecord> {
        let started = Instant::now();
        log_op_start!("append", storage_key = %self.key);

        let result = self.write_appended(&mut record);
        match result {
            Ok(total) => {
                log_op_end!(
                    "append",
                    started = started,
                    record_id = %record.id,
                    record_count = total as u64
                );
                Ok(record)
            }
            Err(source) => {
                let err = persist_failed(&self.key, &source);
                log_op_error!("append", err, started = started, record_id = %record.id);
                Err(err)
            }
        }
    }

    fn read_slot(&self) -> Result<Decoded> {
        Ok(match self.slots.get(&self.key)? {
            Some(raw) => decode(&self.key, &raw),
            None => Decoded::default(),
        })
    }

    fn write_appended(&mut self, record: &mut ResponseRecord) -> Result<usize> {
        let Decoded {
            mut records,
            skipped,
        } = self.read_slot()?;
        if skipped > 0 {
            // The rewrite below only contains decodable records
            tracing::warn!(
                storage_key = %self.key,
                skipped_count = skipped as u64,
                "dropping malformed response entries on rewrite"
            );
        }

        // Ids must stay unique within the slot even if the generator repeats
        while records.iter().any(|r| r.id == record.id) {
            record.id = ResponseId::generate();
        }

        records.push(record.clone());
        let encoded =
            serde_json::to_string(&records).map_err(|e| encode_failed(&self.key, e))?;
        self.slots.set(&self.key, &encoded)?;
        Ok(records.len())
    }
}

#[derive(Default)]
struct Decoded {
    records: Vec<ResponseRecord>,
    /// Array entries that were not records
    skipped: usize,
}

/// Decode a slot payload, dropping anything that is not a record
fn decode(key: &str, raw: &str) -> Decoded {
    let entries: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(storage_key = %key, error = %e, "unreadable response payload treated as empty");
            return Decoded::default();
        }
    };

    let total = entries.len();
    let records: Vec<ResponseRecord> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();

    let skipped = total - records.len();
    if skipped > 0 {
        tracing::warn!(
            storage_key = %key,
            skipped_count = skipped as u64,
            "skipped malformed response entries"
        );
    }
    Decoded { records, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::MemorySlots;
    use survey_core::logging_facility::test_capture::init_test_capture;
    use survey_core::ExErrorKind;

    fn fields(age: &str) -> FormFields {
        FormFields::new().with("age", age)
    }

    #[test]
    fn test_append_then_load_preserves_order() {
        let mut store = ResponseStore::new(MemorySlots::new());
        let a = store.append(fields("12-14")).unwrap();
        let b = store.append(fields("15-17")).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, vec![a, b]);
    }

    #[test]
    fn test_load_absent_slot_is_empty() {
        let store = ResponseStore::new(MemorySlots::new());
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_payload_is_empty() {
        let mut slots = MemorySlots::new();
        slots.set(DEFAULT_STORAGE_KEY, "{not json").unwrap();
        let store = ResponseStore::new(slots);

        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let mut slots = MemorySlots::new();
        slots
            .set(
                DEFAULT_STORAGE_KEY,
                r#"[
                    {"id": "a", "timestamp": "2024-05-01T10:00:00.000Z", "data": {"age": "15-17"}},
                    {"id": "b", "timestamp": "yesterday"},
                    42
                ]"#,
            )
            .unwrap();
        let store = ResponseStore::new(slots);

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].id.matches("a"));
    }

    #[test]
    fn test_append_logs_entries_dropped_on_rewrite() {
        let capture = init_test_capture();
        let mut slots = MemorySlots::new();
        slots
            .set(
                "rewrite_drop_test",
                r#"[{"id": "kept", "timestamp": "2024-05-01T10:00:00.000Z"}, 7, "x"]"#,
            )
            .unwrap();
        let mut store = ResponseStore::with_key(slots, "rewrite_drop_test");

        store.append(fields("15-17")).unwrap();

        assert_eq!(store.len().unwrap(), 2);
        let dropped = capture.count_events(|e| {
            e.field("storage_key") == Some("rewrite_drop_test")
                && e.field("skipped_count") == Some("2")
                && e.field("message")
                    .is_some_and(|m| m.contains("dropping malformed response entries"))
        });
        assert_eq!(dropped, 1);
    }

    #[test]
    fn test_append_over_corrupt_payload_starts_fresh() {
        let mut slots = MemorySlots::new();
        slots.set(DEFAULT_STORAGE_KEY, "garbage").unwrap();
        let mut store = ResponseStore::new(slots);

        store.append(fields("15-17")).unwrap();

        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_quota_failure_is_persistence_error() {
        let mut store = ResponseStore::new(MemorySlots::with_quota(16));

        let err = store.append(fields("15-17")).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::Persistence);
        assert!(err.message().contains("ERR_QUOTA_EXCEEDED"));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_soft_returns_record_on_failure() {
        let mut store = ResponseStore::new(MemorySlots::with_quota(16));

        let outcome = store.append_soft(fields("15-17"));

        assert!(!outcome.is_persisted());
        assert_eq!(outcome.record.data, fields("15-17"));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut store = ResponseStore::new(MemorySlots::new());
        store.append(fields("15-17")).unwrap();

        store.clear().unwrap();
        store.clear().unwrap();

        assert!(store.load_all().unwrap().is_empty());
        assert!(store.slots().is_empty());
    }

    #[test]
    fn test_stats_reports_latest_timestamp() {
        let mut store = ResponseStore::new(MemorySlots::new());
        assert_eq!(
            store.stats().unwrap(),
            StoreStats {
                total: 0,
                latest: None
            }
        );

        store.append(fields("12-14")).unwrap();
        let last = store.append(fields("15-17")).unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.latest, Some(last.timestamp));
    }

    #[test]
    fn test_find_by_id() {
        let mut store = ResponseStore::new(MemorySlots::new());
        let record = store.append(fields("15-17")).unwrap();

        let found = store.find(&record.id.to_string()).unwrap();
        assert_eq!(found, Some(record));
        assert_eq!(store.find("missing").unwrap(), None);
    }
}
