// File: crates/timebar-core/src/tooltip.rs
// Summary: Overflow-aware tooltip placement, content formatting and tooltip state.

use chrono::NaiveDate;
use tracing::trace;

use crate::dataset::Record;
use crate::format::{format_currency, format_quarter};
use crate::geometry::{Point, Rect, Size};
use crate::types::Viewport;

/// Distance between the pointer and the tooltip's near corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipOptions {
    /// Fixed box size used for overflow checks.
    pub size: Size,
    pub offset: Offset,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self { size: Size::new(100.0, 50.0), offset: Offset::new(20.0, 20.0) }
    }
}

/// Horizontal anchor: distance from the viewport's left or right edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HorizontalAnchor {
    Left(f64),
    Right(f64),
}

/// Vertical anchor: distance from the viewport's top or bottom edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VerticalAnchor {
    Top(f64),
    Bottom(f64),
}

/// Exactly one horizontal and one vertical anchor, by construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipPosition {
    pub horizontal: HorizontalAnchor,
    pub vertical: VerticalAnchor,
}

impl TooltipPosition {
    pub fn left(&self) -> Option<f64> {
        match self.horizontal {
            HorizontalAnchor::Left(v) => Some(v),
            HorizontalAnchor::Right(_) => None,
        }
    }
    pub fn right(&self) -> Option<f64> {
        match self.horizontal {
            HorizontalAnchor::Right(v) => Some(v),
            HorizontalAnchor::Left(_) => None,
        }
    }
    pub fn top(&self) -> Option<f64> {
        match self.vertical {
            VerticalAnchor::Top(v) => Some(v),
            VerticalAnchor::Bottom(_) => None,
        }
    }
    pub fn bottom(&self) -> Option<f64> {
        match self.vertical {
            VerticalAnchor::Bottom(v) => Some(v),
            VerticalAnchor::Top(_) => None,
        }
    }

    /// Concrete box for backends without edge-anchored layout.
    pub fn resolve(&self, viewport: Viewport, size: Size) -> Rect {
        let left = match self.horizontal {
            HorizontalAnchor::Left(l) => l,
            HorizontalAnchor::Right(r) => viewport.width - r - size.width,
        };
        let top = match self.vertical {
            VerticalAnchor::Top(t) => t,
            VerticalAnchor::Bottom(b) => viewport.height - b - size.height,
        };
        Rect::from_ltwh(left, top, size.width, size.height)
    }
}

/// Place a `size` box near `pointer` (page coordinates).
///
/// The box sits below-right of the pointer at `offset`. On an axis where that
/// would cross the viewport edge, the box is anchored from the opposite edge
/// instead, which puts it on the other side of the pointer.
pub fn place_tooltip(pointer: Point, viewport: Viewport, size: Size, offset: Offset) -> TooltipPosition {
    let left = pointer.x + offset.dx;
    let top = pointer.y + offset.dy;
    let overflows_x = left + size.width > viewport.width;
    let overflows_y = top + size.height > viewport.height;

    let horizontal = if overflows_x {
        HorizontalAnchor::Right((viewport.width - pointer.x) + offset.dx)
    } else {
        HorizontalAnchor::Left(left)
    };
    let vertical = if overflows_y {
        VerticalAnchor::Bottom((viewport.height - pointer.y) + offset.dy)
    } else {
        VerticalAnchor::Top(top)
    };
    TooltipPosition { horizontal, vertical }
}

/// Two-line tooltip text: quarter, then amount.
pub fn tooltip_content(record: &Record) -> String {
    format!("{}\n{}", format_quarter(record.instant), format_currency(record.magnitude))
}

/// The floating tooltip. Changed only by pointer enter/leave on bars.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
    pub visible: bool,
    pub content: String,
    /// Instant of the hovered record, exposed like the bars' `data-date`.
    pub date: Option<NaiveDate>,
    /// Index of the hovered bar.
    pub bar: Option<usize>,
    pub position: Option<TooltipPosition>,
}

impl TooltipState {
    /// Pointer entered bar `bar` showing `record`.
    pub fn show(
        &mut self,
        bar: usize,
        record: &Record,
        pointer: Point,
        viewport: Viewport,
        options: &TooltipOptions,
    ) {
        let position = place_tooltip(pointer, viewport, options.size, options.offset);
        trace!(bar, x = pointer.x, y = pointer.y, ?position, "tooltip shown");
        self.visible = true;
        self.content = tooltip_content(record);
        self.date = Some(record.instant);
        self.bar = Some(bar);
        self.position = Some(position);
    }

    /// Pointer left the hovered bar. Content and position are kept for inspection.
    pub fn hide(&mut self) {
        trace!(bar = ?self.bar, "tooltip hidden");
        self.visible = false;
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }
}
