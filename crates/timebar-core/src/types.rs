// File: crates/timebar-core/src/types.rs
// Summary: Shared types and constants (viewport size, plot margins).

/// Default viewport width in pixels.
pub const WIDTH: f64 = 1024.0;
/// Default viewport height in pixels.
pub const HEIGHT: f64 = 640.0;

/// Host canvas size, read once per render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Plot-area inset, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    /// Create new margins; negative inputs are clamped to zero.
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top: top.max(0.0),
            right: right.max(0.0),
            bottom: bottom.max(0.0),
            left: left.max(0.0),
        }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(50.0, 50.0, 50.0, 100.0)
    }
}
