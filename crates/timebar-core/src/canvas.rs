// File: crates/timebar-core/src/canvas.rs
// Summary: Draw-call seam between the render orchestrator and its backends (SVG, raster).

use skia_safe as skia;

use crate::geometry::{Point, Rect};
use crate::tooltip::TooltipState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// A single line of text. `at` is the baseline point the anchor refers to.
#[derive(Clone, Copy, Debug)]
pub struct TextRun<'a> {
    pub id: Option<&'a str>,
    pub text: &'a str,
    pub at: Point,
    pub size: f32,
    pub color: skia::Color,
    pub anchor: TextAnchor,
    /// Prefer tabular digits (tick labels).
    pub numeric: bool,
}

/// Inspectable `name=value` attribute attached to a shape (e.g. `data-date`).
pub type Attr<'a> = (&'a str, String);

#[derive(Clone, Copy, Debug)]
pub struct TooltipStyle {
    pub background: skia::Color,
    pub border: skia::Color,
    pub text: skia::Color,
    pub font_size: f32,
    pub padding: f32,
    pub draw_text: bool,
}

/// Target of one render pass. Coordinates are relative to the innermost open group.
pub trait Canvas {
    fn clear(&mut self, color: skia::Color);
    /// Open a named group whose origin is `origin` in the parent's coordinates.
    fn begin_group(&mut self, id: &str, origin: Point);
    fn end_group(&mut self);
    fn line(&mut self, from: Point, to: Point, color: skia::Color, width: f32);
    fn rect(&mut self, rect: Rect, color: skia::Color, class: &str, attrs: &[Attr<'_>]);
    fn text(&mut self, run: &TextRun<'_>);
    /// `frame` is the resolved box in root coordinates; `None` while nothing was ever hovered.
    fn tooltip(&mut self, state: &TooltipState, frame: Option<Rect>, style: &TooltipStyle);
}
