// File: crates/timebar-core/src/scale.rs
// Summary: Time (X) and Value (Y) scale transforms plus the per-render scale bundle.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::dataset::Record;
use crate::error::{ChartError, Result};
use crate::geometry::Size;
use crate::types::{Margin, Viewport};

/// Default fraction of each bar slot covered by the bar.
pub const FILL_FACTOR: f64 = 0.8;

#[inline]
fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Continuous time scale mapping `[start, end]` onto `[0, range_px]`.
/// Positions are computed from day numbers so irregular spacing stays proportional.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub range_px: f64,
}

impl TimeScale {
    pub fn new(start: NaiveDate, end: NaiveDate, range_px: f64) -> Self {
        Self { start, end, range_px }
    }

    /// True when the domain has zero width (a single distinct instant).
    pub fn is_degenerate(&self) -> bool {
        self.end <= self.start
    }

    /// Map an instant to a pixel offset. A degenerate domain maps everything to the middle.
    #[inline]
    pub fn to_px(&self, date: NaiveDate) -> f64 {
        if self.is_degenerate() {
            return self.range_px * 0.5;
        }
        let span = day_number(self.end) - day_number(self.start);
        (day_number(date) - day_number(self.start)) / span * self.range_px
    }

    /// Inverse mapping, rounded to the nearest whole day.
    pub fn from_px(&self, px: f64) -> Option<NaiveDate> {
        if self.is_degenerate() {
            return Some(self.start);
        }
        if !px.is_finite() || self.range_px <= 0.0 {
            return None;
        }
        let span = day_number(self.end) - day_number(self.start);
        let day = day_number(self.start) + px / self.range_px * span;
        i32::try_from(day.round() as i64)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f64, bottom_px: f64, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: f64) -> f64 {
        let span = self.vmax - self.vmin;
        self.bottom_px - (y - self.vmin) / span * (self.bottom_px - self.top_px)
    }
    #[inline]
    pub fn from_px(&self, py: f64) -> f64 {
        let span = self.vmax - self.vmin;
        self.vmin + (self.bottom_px - py) / (self.bottom_px - self.top_px) * span
    }
    pub fn domain(&self) -> (f64, f64) {
        (self.vmin, self.vmax)
    }
}

/// Everything derived from (dataset, viewport, margin) for one render pass.
#[derive(Clone, Copy, Debug)]
pub struct Scales {
    pub plot: Size,
    pub x: TimeScale,
    pub y: ValueScale,
    pub bar_width: f64,
}

impl Scales {
    pub fn build(
        records: &[Record],
        viewport: Viewport,
        margin: &Margin,
        fill_factor: f64,
    ) -> Result<Self> {
        let plot = plot_size(viewport, margin)?;
        if !(fill_factor > 0.0 && fill_factor < 1.0) {
            return Err(ChartError::InvalidOption(format!(
                "fill factor must lie in (0, 1), got {fill_factor}"
            )));
        }
        let first = records.first().ok_or(ChartError::EmptyDataset)?;

        // Scan rather than trusting first/last: the feed is only assumed sorted.
        let (start, end, peak) = records.iter().fold(
            (first.instant, first.instant, first.magnitude),
            |(lo, hi, peak), r| (lo.min(r.instant), hi.max(r.instant), peak.max(r.magnitude)),
        );

        let x = TimeScale::new(start, end, plot.width);
        let y = ValueScale::new_linear(0.0, plot.height, 0.0, peak);
        let bar_width = plot.width / records.len() as f64 * fill_factor;

        debug!(
            records = records.len(),
            plot_width = plot.width,
            plot_height = plot.height,
            bar_width,
            degenerate = x.is_degenerate(),
            "built scales"
        );
        Ok(Self { plot, x, y, bar_width })
    }

    /// Left edge of the bar for `date`. A degenerate time domain centers the bar.
    pub fn bar_x(&self, date: NaiveDate) -> f64 {
        if self.x.is_degenerate() {
            (self.plot.width - self.bar_width) * 0.5
        } else {
            self.x.to_px(date)
        }
    }

    /// Horizontal center of the bar for `date`, where axis ticks sit.
    pub fn bar_center(&self, date: NaiveDate) -> f64 {
        self.bar_x(date) + self.bar_width * 0.5
    }
}

/// Plot-area size inside the margins; fails when either side is not positive.
pub fn plot_size(viewport: Viewport, margin: &Margin) -> Result<Size> {
    let plot_width = viewport.width - margin.hsum();
    let plot_height = viewport.height - margin.vsum();
    if !(plot_width > 0.0 && plot_height > 0.0) || !plot_width.is_finite() || !plot_height.is_finite() {
        return Err(ChartError::DegenerateViewport { plot_width, plot_height });
    }
    Ok(Size::new(plot_width, plot_height))
}
