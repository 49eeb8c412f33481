//! PDF output for laid-out receipt pages, built on `lopdf`.
//!
//! Text uses the base-14 Helvetica family as Type1 fonts with
//! WinAnsiEncoding, so no font files are embedded and the output stays
//! byte-identical for identical input.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF assembly failed: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

mod encoding;
mod writer;

pub use writer::render_pages;
