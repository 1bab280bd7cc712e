// File: crates/timebar-core/src/theme.rs
// Summary: Light/Dark theming for bar chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub title: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub bar: skia::Color,
    pub bar_hover: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_border: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            title: skia::Color::from_argb(255, 235, 235, 245),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 210, 210, 220),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            bar: skia::Color::from_argb(255, 64, 160, 255),
            bar_hover: skia::Color::from_argb(255, 255, 230, 70),
            tooltip_background: skia::Color::from_argb(230, 40, 40, 45),
            tooltip_border: skia::Color::from_argb(255, 180, 180, 190),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            title: skia::Color::from_argb(255, 20, 20, 30),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            bar: skia::Color::from_argb(255, 32, 120, 200),
            bar_hover: skia::Color::from_argb(255, 30, 160, 90),
            tooltip_background: skia::Color::from_argb(235, 255, 255, 255),
            tooltip_border: skia::Color::from_argb(255, 60, 60, 70),
            tooltip_text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            title: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            bar: skia::Color::from_argb(255, 0x00, 0xaa, 0xff),
            bar_hover: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            tooltip_background: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            tooltip_border: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tooltip_text: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
