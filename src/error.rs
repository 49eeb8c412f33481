use thiserror::Error;

use crate::source::FetchError;
use orderslip_layout::LayoutError;
use orderslip_render::RenderError;

/// Top-level error for receipt generation and batch archiving.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("layout failed: {0}")]
    Layout(#[from] LayoutError),
    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),
    #[error("archive assembly failed: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Every id in a non-empty batch failed; there is nothing to archive.
    #[error("no receipts could be generated for the requested batch")]
    EmptyBatch,
}
