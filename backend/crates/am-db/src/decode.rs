use crate::{DbError, DbErrorResult};

use chrono::{DateTime, Utc};

/// Unix seconds column → `DateTime<Utc>`.
#[track_caller]
pub(crate) fn timestamp(table: &'static str, column: &str, ts: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
        .ok_or_else(|| DbError::decode(table, format!("invalid timestamp in {column}: {ts}")))
}

#[track_caller]
pub(crate) fn optional_timestamp(
    table: &'static str,
    column: &str,
    ts: Option<i64>,
) -> DbErrorResult<Option<DateTime<Utc>>> {
    ts.map(|ts| timestamp(table, column, ts)).transpose()
}
