// File: crates/timebar-core/src/error.rs
// Summary: Error kinds surfaced by normalization, layout, interaction and rendering.

use thiserror::Error;

/// Every variant is fatal to the current render pass; nothing is retried.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Transport failure while retrieving the dataset.
    #[error("failed to fetch dataset: {0}")]
    Fetch(String),

    /// The dataset document is not `{ "data": [[string, number], ...] }`.
    #[error("failed to decode dataset: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("malformed record #{index} ({label:?}): {reason}")]
    MalformedRecord {
        index: usize,
        label: String,
        reason: String,
    },

    #[error("plot area is degenerate ({plot_width} x {plot_height})")]
    DegenerateViewport { plot_width: f64, plot_height: f64 },

    #[error("dataset has no records")]
    EmptyDataset,

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("no bar at index {0}")]
    UnknownBar(usize),

    #[error("failed to create raster surface ({width} x {height})")]
    Surface { width: i32, height: i32 },

    #[error("failed to encode PNG")]
    Encode,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
