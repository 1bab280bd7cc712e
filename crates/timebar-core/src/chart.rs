// File: crates/timebar-core/src/chart.rs
// Summary: Render orchestrator: bar layout, pointer handling and draw calls for one render pass.

use tracing::{debug, info};

use crate::axis::{select_labels, value_ticks, AxisLabel, LabelPolicy, ValueTick};
use crate::canvas::{Canvas, TextAnchor, TextRun, TooltipStyle};
use crate::dataset::Record;
use crate::error::{ChartError, Result};
use crate::geometry::{Point, Rect};
use crate::raster::RasterCanvas;
use crate::scale::{Scales, FILL_FACTOR};
use crate::svg::SvgCanvas;
use crate::theme::Theme;
use crate::tooltip::{TooltipOptions, TooltipState};
use crate::types::{Margin, Viewport};

/// Length of axis tick marks in pixels.
const TICK_SIZE: f64 = 6.0;

pub struct ChartOptions {
    pub margin: Margin,
    /// Fraction of each bar slot covered by the bar, in (0, 1).
    pub fill_factor: f64,
    pub title: String,
    pub label_policy: LabelPolicy,
    pub tooltip: TooltipOptions,
    /// Approximate number of value-axis ticks.
    pub value_ticks: usize,
    pub theme: Theme,
    /// Text rendering on/off; off keeps raster output independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            margin: Margin::default(),
            fill_factor: FILL_FACTOR,
            title: "United States GDP".to_string(),
            label_policy: LabelPolicy::default(),
            tooltip: TooltipOptions::default(),
            value_ticks: 10,
            theme: Theme::dark(),
            draw_labels: true,
        }
    }
}

/// Pixel geometry of one bar, relative to the plot area's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub record: Record,
}

impl BarGeometry {
    pub fn rect(&self) -> Rect {
        Rect::from_ltwh(self.x, self.y, self.width, self.height)
    }
}

/// Pointer transitions delivered by the host, in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Enter { bar: usize, pointer: Point },
    Leave,
}

/// One render pass worth of derived state plus the tooltip it drives.
pub struct BarChart {
    options: ChartOptions,
    viewport: Viewport,
    scales: Scales,
    bars: Vec<BarGeometry>,
    labels: Vec<AxisLabel>,
    ticks: Vec<ValueTick>,
    tooltip: TooltipState,
}

impl BarChart {
    /// Derive scales, bar geometry and axis labels for `records` on `viewport`.
    pub fn new(records: &[Record], viewport: Viewport, options: ChartOptions) -> Result<Self> {
        let scales = Scales::build(records, viewport, &options.margin, options.fill_factor)?;
        let bars = layout_bars(records, &scales);
        let labels = select_labels(records, &options.label_policy);
        let ticks = value_ticks(&scales.y, options.value_ticks);
        debug!(bars = bars.len(), labels = labels.len(), ticks = ticks.len(), "laid out chart");
        Ok(Self { options, viewport, scales, bars, labels, ticks, tooltip: TooltipState::default() })
    }

    pub fn options(&self) -> &ChartOptions { &self.options }
    pub fn viewport(&self) -> Viewport { self.viewport }
    pub fn scales(&self) -> &Scales { &self.scales }
    pub fn bars(&self) -> &[BarGeometry] { &self.bars }
    pub fn labels(&self) -> &[AxisLabel] { &self.labels }
    pub fn ticks(&self) -> &[ValueTick] { &self.ticks }
    pub fn tooltip(&self) -> &TooltipState { &self.tooltip }

    /// Top-left corner of the plot area in page coordinates.
    pub fn plot_origin(&self) -> Point {
        Point::new(self.options.margin.left, self.options.margin.top)
    }

    /// Index of the bar under `pointer` (page coordinates), if any.
    /// Overlapping bars resolve to the one drawn last.
    pub fn bar_at(&self, pointer: Point) -> Option<usize> {
        let origin = self.plot_origin();
        let local = Point::new(pointer.x - origin.x, pointer.y - origin.y);
        self.bars.iter().rposition(|b| b.rect().contains(local))
    }

    pub fn pointer_enter(&mut self, bar: usize, pointer: Point) -> Result<()> {
        handle_pointer(
            &mut self.tooltip,
            &self.bars,
            self.viewport,
            &self.options.tooltip,
            PointerEvent::Enter { bar, pointer },
        )
    }

    pub fn pointer_leave(&mut self) {
        self.tooltip.hide();
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<()> {
        handle_pointer(&mut self.tooltip, &self.bars, self.viewport, &self.options.tooltip, event)
    }

    /// Issue every draw call for this pass: background, title, axes, bars, tooltip.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let theme = &self.options.theme;
        let margin = &self.options.margin;
        let plot = self.scales.plot;

        canvas.clear(theme.background);

        if self.options.draw_labels {
            canvas.text(&TextRun {
                id: Some("title"),
                text: &self.options.title,
                at: Point::new(self.viewport.width * 0.5, margin.top * 0.75),
                size: 20.0,
                color: theme.title,
                anchor: TextAnchor::Middle,
                numeric: false,
            });
        }

        // Time axis along the bottom of the plot area.
        canvas.begin_group("x-axis", Point::new(margin.left, margin.top + plot.height));
        canvas.line(Point::new(0.0, 0.0), Point::new(plot.width, 0.0), theme.axis_line, 1.0);
        for label in &self.labels {
            let x = self.scales.bar_center(label.instant);
            canvas.line(Point::new(x, 0.0), Point::new(x, TICK_SIZE), theme.tick, 1.0);
            if self.options.draw_labels {
                canvas.text(&TextRun {
                    id: None,
                    text: &label.text,
                    at: Point::new(x, TICK_SIZE + 14.0),
                    size: 12.0,
                    color: theme.axis_label,
                    anchor: TextAnchor::Middle,
                    numeric: true,
                });
            }
        }
        canvas.end_group();

        // Value axis along the left edge.
        canvas.begin_group("y-axis", Point::new(margin.left, margin.top));
        canvas.line(Point::new(0.0, 0.0), Point::new(0.0, plot.height), theme.axis_line, 1.0);
        for tick in &self.ticks {
            let y = self.scales.y.to_px(tick.value);
            canvas.line(Point::new(-TICK_SIZE, y), Point::new(0.0, y), theme.tick, 1.0);
            if self.options.draw_labels {
                canvas.text(&TextRun {
                    id: None,
                    text: &tick.text,
                    at: Point::new(-TICK_SIZE - 3.0, y + 4.0),
                    size: 12.0,
                    color: theme.axis_label,
                    anchor: TextAnchor::End,
                    numeric: true,
                });
            }
        }
        canvas.end_group();

        let hovered = self.tooltip.bar.filter(|_| self.tooltip.visible);
        canvas.begin_group("bars", Point::new(margin.left, margin.top));
        for (i, bar) in self.bars.iter().enumerate() {
            let color = if hovered == Some(i) { theme.bar_hover } else { theme.bar };
            let attrs = [
                ("data-date", bar.record.instant.to_string()),
                ("data-gdp", bar.record.magnitude.to_string()),
            ];
            canvas.rect(bar.rect(), color, "bar", &attrs);
        }
        canvas.end_group();

        let frame = self
            .tooltip
            .position
            .map(|p| p.resolve(self.viewport, self.options.tooltip.size));
        canvas.tooltip(&self.tooltip, frame, &self.tooltip_style());
    }

    fn tooltip_style(&self) -> TooltipStyle {
        let theme = &self.options.theme;
        TooltipStyle {
            background: theme.tooltip_background,
            border: theme.tooltip_border,
            text: theme.tooltip_text,
            font_size: 13.0,
            padding: 8.0,
            draw_text: self.options.draw_labels,
        }
    }

    /// Render into a fresh SVG document.
    pub fn to_svg(&self) -> String {
        let mut canvas = SvgCanvas::new(self.viewport.width, self.viewport.height);
        self.render(&mut canvas);
        canvas.finish()
    }

    /// Render into a CPU raster surface sized to the viewport and encode as PNG.
    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        let width = self.viewport.width.round() as i32;
        let height = self.viewport.height.round() as i32;
        let mut canvas = RasterCanvas::new(width, height)?;
        self.render(&mut canvas);
        canvas.encode_png()
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes()?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        info!(path = %path.display(), "wrote png");
        Ok(())
    }

    /// Render the chart to an SVG file at `output_svg_path`.
    pub fn render_to_svg(&self, output_svg_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_svg_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_svg())?;
        info!(path = %path.display(), "wrote svg");
        Ok(())
    }
}

/// Project every record into plot-area pixels. Order-independent per record.
/// A bar's left edge sits at `x(instant)`, so the latest bar extends `bar_width`
/// past the plot area's right edge (and may reach past the viewport).
pub fn layout_bars(records: &[Record], scales: &Scales) -> Vec<BarGeometry> {
    let baseline = scales.y.to_px(0.0);
    records
        .iter()
        .map(|&record| {
            let y = scales.y.to_px(record.magnitude);
            BarGeometry {
                x: scales.bar_x(record.instant),
                y,
                width: scales.bar_width,
                height: baseline - y,
                record,
            }
        })
        .collect()
}

/// Apply a pointer transition to `tooltip`. The only state machine in a render pass:
/// `Enter` shows and places the tooltip for that bar, `Leave` hides it.
pub fn handle_pointer(
    tooltip: &mut TooltipState,
    bars: &[BarGeometry],
    viewport: Viewport,
    options: &TooltipOptions,
    event: PointerEvent,
) -> Result<()> {
    match event {
        PointerEvent::Enter { bar, pointer } => {
            let geometry = bars.get(bar).ok_or(ChartError::UnknownBar(bar))?;
            tooltip.show(bar, &geometry.record, pointer, viewport, options);
        }
        PointerEvent::Leave => tooltip.hide(),
    }
    Ok(())
}
