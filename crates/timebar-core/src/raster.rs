// File: crates/timebar-core/src/raster.rs
// Summary: Skia CPU raster backend; renders a pass into a surface and encodes PNG.

use skia_safe as skia;

use crate::canvas::{Attr, Canvas, TextAnchor, TextRun, TooltipStyle};
use crate::error::{ChartError, Result};
use crate::geometry::{Point, Rect};
use crate::text::TextShaper;
use crate::tooltip::TooltipState;

pub struct RasterCanvas {
    surface: skia::Surface,
    shaper: TextShaper,
    groups: usize,
}

impl RasterCanvas {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::Surface { width, height })?;
        Ok(Self { surface, shaper: TextShaper::new(), groups: 0 })
    }

    /// Snapshot the surface as PNG bytes.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }
}

fn sk_rect(r: Rect) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

impl Canvas for RasterCanvas {
    fn clear(&mut self, color: skia::Color) {
        self.surface.canvas().clear(color);
    }

    fn begin_group(&mut self, _id: &str, origin: Point) {
        let canvas = self.surface.canvas();
        canvas.save();
        canvas.translate((origin.x as f32, origin.y as f32));
        self.groups += 1;
    }

    fn end_group(&mut self) {
        if self.groups > 0 {
            self.surface.canvas().restore();
            self.groups -= 1;
        }
    }

    fn line(&mut self, from: Point, to: Point, color: skia::Color, width: f32) {
        let mut paint = skia::Paint::default();
        paint.set_color(color);
        paint.set_anti_alias(true);
        paint.set_stroke_width(width);
        self.surface.canvas().draw_line(
            (from.x as f32, from.y as f32),
            (to.x as f32, to.y as f32),
            &paint,
        );
    }

    fn rect(&mut self, rect: Rect, color: skia::Color, _class: &str, _attrs: &[Attr<'_>]) {
        let mut body = skia::Paint::default();
        body.set_anti_alias(true);
        body.set_style(skia::paint::Style::Fill);
        body.set_color(color);
        self.surface.canvas().draw_rect(sk_rect(rect), &body);
    }

    fn text(&mut self, run: &TextRun<'_>) {
        let canvas = self.surface.canvas();
        self.shaper.draw_anchored(
            canvas,
            run.text,
            run.at.x as f32,
            run.at.y as f32,
            run.anchor,
            run.size,
            run.color,
            run.numeric,
        );
    }

    fn tooltip(&mut self, state: &TooltipState, frame: Option<Rect>, style: &TooltipStyle) {
        let Some(frame) = frame.filter(|_| state.visible) else {
            return;
        };
        let canvas = self.surface.canvas();
        let r = sk_rect(frame);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(style.background);
        canvas.draw_round_rect(r, 4.0, 4.0, &fill);

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        stroke.set_color(style.border);
        canvas.draw_round_rect(r, 4.0, 4.0, &stroke);

        if style.draw_text {
            let x = r.left + style.padding;
            let mut y = r.top + style.padding + style.font_size;
            for line in state.lines() {
                self.shaper.draw_anchored(
                    canvas,
                    line,
                    x,
                    y,
                    TextAnchor::Start,
                    style.font_size,
                    style.text,
                    false,
                );
                y += style.font_size * 1.25;
            }
        }
    }
}
