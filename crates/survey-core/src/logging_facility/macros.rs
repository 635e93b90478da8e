//! Canonical logging macros
//!
//! Every store and engine operation brackets itself with a start event and
//! exactly one of an end or end_error event. Durations are measured from the
//! `Instant` captured by the caller.

/// Log the start of an operation
///
/// ```
/// # use survey_core::log_op_start;
/// log_op_start!("append");
/// log_op_start!("append", storage_key = "school_survey_responses");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = survey_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = survey_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// ```
/// # use survey_core::log_op_end;
/// let started = std::time::Instant::now();
/// log_op_end!("load_all", started = started, record_count = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, started = $started:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = survey_core_types::schema::EVENT_END,
            duration_ms = $started.elapsed().as_millis() as u64,
        );
    };
    ($op:expr, started = $started:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = survey_core_types::schema::EVENT_END,
            duration_ms = $started.elapsed().as_millis() as u64,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `ExError` by reference; the error is
/// cloned so the caller can still return it.
///
/// ```
/// # use survey_core::{log_op_error, errors::SurveyError};
/// let started = std::time::Instant::now();
/// let err = SurveyError::EmptyStore;
/// log_op_error!("export_all", err, started = started);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, started = $started:expr) => {{
        let ex_err: $crate::errors::ExError = ::std::clone::Clone::clone(&$err).into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = survey_core_types::schema::EVENT_END_ERROR,
            duration_ms = $started.elapsed().as_millis() as u64,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, started = $started:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = ::std::clone::Clone::clone(&$err).into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = survey_core_types::schema::EVENT_END_ERROR,
            duration_ms = $started.elapsed().as_millis() as u64,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}
