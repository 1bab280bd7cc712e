// File: crates/timebar-core/src/svg.rs
// Summary: SVG document backend; keeps ids, classes and data-* attributes inspectable.

use std::fmt::Write as _;

use skia_safe as skia;

use crate::canvas::{Attr, Canvas, TextAnchor, TextRun, TooltipStyle};
use crate::geometry::{Point, Rect};
use crate::tooltip::TooltipState;

pub struct SvgCanvas {
    width: f64,
    height: f64,
    body: String,
    depth: usize,
}

impl SvgCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, body: String::new(), depth: 1 }
    }

    /// Close any open groups and return the complete document.
    pub fn finish(mut self) -> String {
        while self.depth > 1 {
            self.end_group();
        }
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = num(self.width),
            h = num(self.height),
            body = self.body,
        )
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.body.push_str("  ");
        }
    }
}

/// Compact coordinate: at most two decimals, no trailing zeros.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn rgb(c: skia::Color) -> String {
    format!("rgb({},{},{})", c.r(), c.g(), c.b())
}

fn opacity(c: skia::Color) -> String {
    num(c.a() as f64 / 255.0)
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

impl Canvas for SvgCanvas {
    fn clear(&mut self, color: skia::Color) {
        self.indent();
        let _ = writeln!(
            self.body,
            "<rect class=\"background\" x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\" fill-opacity=\"{}\"/>",
            num(self.width),
            num(self.height),
            rgb(color),
            opacity(color),
        );
    }

    fn begin_group(&mut self, id: &str, origin: Point) {
        self.indent();
        let _ = writeln!(
            self.body,
            "<g id=\"{}\" transform=\"translate({}, {})\">",
            escape(id),
            num(origin.x),
            num(origin.y),
        );
        self.depth += 1;
    }

    fn end_group(&mut self) {
        if self.depth > 1 {
            self.depth -= 1;
            self.indent();
            self.body.push_str("</g>\n");
        }
    }

    fn line(&mut self, from: Point, to: Point, color: skia::Color, width: f32) {
        self.indent();
        let _ = writeln!(
            self.body,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            num(from.x),
            num(from.y),
            num(to.x),
            num(to.y),
            rgb(color),
            num(width as f64),
        );
    }

    fn rect(&mut self, rect: Rect, color: skia::Color, class: &str, attrs: &[Attr<'_>]) {
        self.indent();
        let _ = write!(
            self.body,
            "<rect class=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"",
            escape(class),
            num(rect.left),
            num(rect.top),
            num(rect.width()),
            num(rect.height()),
            rgb(color),
        );
        for (name, value) in attrs {
            let _ = write!(self.body, " {}=\"{}\"", name, escape(value));
        }
        self.body.push_str("/>\n");
    }

    fn text(&mut self, run: &TextRun<'_>) {
        let anchor = match run.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        self.indent();
        self.body.push_str("<text");
        if let Some(id) = run.id {
            let _ = write!(self.body, " id=\"{}\"", escape(id));
        }
        let _ = writeln!(
            self.body,
            " x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\">{}</text>",
            num(run.at.x),
            num(run.at.y),
            num(run.size as f64),
            rgb(run.color),
            anchor,
            escape(run.text),
        );
    }

    fn tooltip(&mut self, state: &TooltipState, frame: Option<Rect>, style: &TooltipStyle) {
        self.indent();
        let (Some(frame), true) = (frame, state.visible) else {
            self.body.push_str("<g id=\"tooltip\" visibility=\"hidden\"/>\n");
            return;
        };

        self.body.push_str("<g id=\"tooltip\" visibility=\"visible\"");
        if let Some(date) = state.date {
            let _ = write!(self.body, " data-date=\"{date}\"");
        }
        if let Some(pos) = state.position {
            let anchors = [("left", pos.left()), ("right", pos.right()), ("top", pos.top()), ("bottom", pos.bottom())];
            for (name, value) in anchors {
                if let Some(v) = value {
                    let _ = write!(self.body, " data-{}=\"{}\"", name, num(v));
                }
            }
        }
        self.body.push_str(">\n");
        self.depth += 1;

        self.indent();
        let _ = writeln!(
            self.body,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"4\" fill=\"{}\" fill-opacity=\"{}\" stroke=\"{}\"/>",
            num(frame.left),
            num(frame.top),
            num(frame.width()),
            num(frame.height()),
            rgb(style.background),
            opacity(style.background),
            rgb(style.border),
        );
        if style.draw_text {
            let line_height = style.font_size as f64 * 1.25;
            let x = frame.left + style.padding as f64;
            let mut y = frame.top + style.padding as f64 + style.font_size as f64;
            for line in state.lines() {
                self.indent();
                let _ = writeln!(
                    self.body,
                    "<text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
                    num(x),
                    num(y),
                    num(style.font_size as f64),
                    rgb(style.text),
                    escape(line),
                );
                y += line_height;
            }
        }

        self.depth -= 1;
        self.indent();
        self.body.push_str("</g>\n");
    }
}
