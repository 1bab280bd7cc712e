// File: crates/timebar-core/src/axis.rs
// Summary: Axis label selection (periodic time labels) and value-axis ticks.

use chrono::{Datelike, Month, NaiveDate};

use crate::dataset::Record;
use crate::format::{format_grouped, format_year, quarter_of};
use crate::grid::{nice_ticks, step_precision, tick_step};
use crate::scale::ValueScale;

/// Which instants within a year are eligible for a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recurrence {
    /// Instants in this calendar month.
    Month(Month),
    /// Instants in this quarter (1..=4).
    Quarter(u32),
    /// Every instant.
    Any,
}

impl Recurrence {
    pub fn matches(&self, date: NaiveDate) -> bool {
        match *self {
            Recurrence::Month(m) => date.month() == m.number_from_month(),
            Recurrence::Quarter(q) => quarter_of(date) == q,
            Recurrence::Any => true,
        }
    }
}

/// Label an instant when it falls in `recurrence` and its year is a multiple of `stride`.
/// Independent of the viewport: density does not adapt to available width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelPolicy {
    pub recurrence: Recurrence,
    pub stride: u32,
}

impl LabelPolicy {
    /// Stride 0 is treated as 1.
    pub fn new(recurrence: Recurrence, stride: u32) -> Self {
        Self { recurrence, stride: stride.max(1) }
    }

    pub fn matches(&self, date: NaiveDate) -> bool {
        let stride = i64::from(self.stride.max(1));
        self.recurrence.matches(date) && i64::from(date.year()).rem_euclid(stride) == 0
    }
}

impl Default for LabelPolicy {
    /// January of every fifth year; about one label per 5 years on a quarterly series.
    fn default() -> Self {
        Self::new(Recurrence::Month(Month::January), 5)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub instant: NaiveDate,
    pub text: String,
}

/// Pick the records to label on the time axis, in dataset order.
pub fn select_labels(records: &[Record], policy: &LabelPolicy) -> Vec<AxisLabel> {
    records
        .iter()
        .filter(|r| policy.matches(r.instant))
        .map(|r| AxisLabel { instant: r.instant, text: format_year(r.instant) })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValueTick {
    pub value: f64,
    pub text: String,
}

/// Roughly `count` evenly stepped ticks over the value scale's domain.
pub fn value_ticks(scale: &ValueScale, count: usize) -> Vec<ValueTick> {
    let (lo, hi) = scale.domain();
    let decimals = tick_step(lo, hi, count).map(step_precision).unwrap_or(0);
    nice_ticks(lo, hi, count)
        .into_iter()
        .map(|value| ValueTick { value, text: format_grouped(value, decimals) })
        .collect()
}
