// File: crates/timebar-core/src/lib.rs
// Summary: Core library entry point; exports the bar chart geometry, interaction and rendering API.

pub mod axis;
pub mod canvas;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod raster;
pub mod scale;
pub mod svg;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::{select_labels, AxisLabel, LabelPolicy, Recurrence};
pub use canvas::Canvas;
pub use chart::{BarChart, BarGeometry, ChartOptions, PointerEvent};
pub use dataset::{normalize, RawDataset, RawRecord, Record};
pub use error::{ChartError, Result};
pub use geometry::{Point, Rect, Size};
pub use raster::RasterCanvas;
pub use scale::{Scales, TimeScale, ValueScale};
pub use svg::SvgCanvas;
pub use theme::Theme;
pub use tooltip::{place_tooltip, Offset, TooltipOptions, TooltipPosition, TooltipState};
pub use types::{Margin, Viewport};
