// File: crates/timebar-core/src/dataset.rs
// Summary: Raw dataset model (JSON feed) and normalization into typed records.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{ChartError, Result};

/// Date format of the raw feed labels.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One normalized observation. Immutable once built by [`normalize`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    pub instant: NaiveDate,
    /// Finite and non-negative.
    pub magnitude: f64,
}

/// A `[label, value]` pair as it appears in the feed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawRecord(pub String, pub f64);

/// The source document: `{ "data": [["1947-01-01", 243.1], ...] }`.
/// Any other top-level fields are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawDataset {
    pub data: Vec<RawRecord>,
}

impl RawDataset {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Borrowing view of the pairs, suitable for [`normalize`].
    pub fn pairs(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.data.iter().map(|r| (r.0.as_str(), r.1))
    }

    /// Normalize the whole document.
    pub fn normalize(&self) -> Result<Vec<Record>> {
        normalize(self.pairs())
    }
}

/// Convert raw `(label, value)` pairs into records, preserving order.
///
/// The first pair whose label is not a `YYYY-MM-DD` date, or whose value is
/// not a finite non-negative number, aborts the whole batch with
/// [`ChartError::MalformedRecord`]. Nothing is skipped, reordered or deduplicated.
pub fn normalize<I, L>(raw: I) -> Result<Vec<Record>>
where
    I: IntoIterator<Item = (L, f64)>,
    L: AsRef<str>,
{
    raw.into_iter()
        .enumerate()
        .map(|(index, (label, value))| parse_record(index, label.as_ref(), value))
        .collect()
}

fn parse_record(index: usize, label: &str, value: f64) -> Result<Record> {
    let malformed = |reason: String| ChartError::MalformedRecord {
        index,
        label: label.to_string(),
        reason,
    };

    let instant = NaiveDate::parse_from_str(label, DATE_FORMAT)
        .map_err(|e| malformed(format!("invalid date: {e}")))?;
    if !value.is_finite() {
        return Err(malformed(format!("value {value} is not finite")));
    }
    if value < 0.0 {
        return Err(malformed(format!("value {value} is negative")));
    }
    Ok(Record { instant, magnitude: value })
}
