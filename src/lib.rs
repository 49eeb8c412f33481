//! Orderslip: a receipt document engine.
//!
//! Takes a fully-priced order record and produces a paginated PDF receipt,
//! or a whole batch of them bundled into a zip archive. The work is split
//! across three library crates plus this integration layer:
//!
//! - `orderslip-types`: the order record and the money/date formatters.
//! - `orderslip-layout`: page geometry, the pagination cursor and the
//!   text-wrapping field renderers.
//! - `orderslip-render`: turns laid-out pages into PDF bytes via `lopdf`.
//!
//! This crate composes the document sections (header banner, order info,
//! items table, payment details, totals summary, per-page footer) and owns
//! the fetch/render/archive batch pipeline.

pub mod archive;
pub mod assembler;
pub mod error;
pub mod sections;
pub mod source;

pub use archive::{ARCHIVE_FILENAME, BatchEntry, BatchPolicy, BatchSummary, render_batch};
pub use assembler::{RenderedReceipt, receipt_filename, render_receipt, render_receipt_with};
pub use error::EngineError;
pub use source::{FetchError, ReceiptSource};

pub use orderslip_layout::PageMetrics;
pub use orderslip_types as types;
