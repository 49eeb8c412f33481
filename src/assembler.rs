//! Assembles one receipt document: sections composed top to bottom with a
//! pagination check ahead of each, footer stamped last, then handed to the
//! PDF writer.

use orderslip_layout::{Cursor, PageMetrics, SheetBuilder};
use orderslip_render::render_pages;
use orderslip_types::ReceiptRecord;

use crate::error::EngineError;
use crate::sections::{footer, header, items, order_info, payment, totals};

/// One finished receipt: the PDF bytes plus the archive-safe filename they
/// belong under.
#[derive(Debug, Clone)]
pub struct RenderedReceipt {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// `receipt_<slugified title>_<first 8 chars of id>.pdf`
pub fn receipt_filename(record: &ReceiptRecord) -> String {
    let title = if record.title.is_empty() {
        "order".to_string()
    } else {
        slug::slugify(&record.title)
    };
    let id: String = record.id.chars().take(8).collect();
    format!("receipt_{title}_{id}.pdf")
}

pub fn render_receipt(record: &ReceiptRecord) -> Result<RenderedReceipt, EngineError> {
    render_receipt_with(record, &PageMetrics::default())
}

pub fn render_receipt_with(
    record: &ReceiptRecord,
    metrics: &PageMetrics,
) -> Result<RenderedReceipt, EngineError> {
    metrics.validate()?;

    let mut sheet = SheetBuilder::new(*metrics);
    let mut cursor = Cursor::top_of(metrics);

    cursor = cursor.ensure_space(metrics, header::height());
    cursor = header::compose(&mut sheet, cursor, record);

    cursor = cursor.ensure_space(metrics, order_info::height(record, metrics));
    cursor = order_info::compose(&mut sheet, cursor, record);

    // The table paginates row by row on its own.
    cursor = items::compose(&mut sheet, cursor, record);

    cursor = cursor.ensure_space(metrics, payment::height(record, metrics));
    cursor = payment::compose(&mut sheet, cursor, record);

    cursor = cursor.ensure_space(metrics, totals::height(record));
    totals::compose(&mut sheet, cursor, record);

    footer::stamp(&mut sheet);

    log::debug!(
        "laid out order {} across {} page(s)",
        record.id,
        sheet.page_count()
    );
    let bytes = render_pages(metrics, sheet.pages())?;
    Ok(RenderedReceipt {
        filename: receipt_filename(record),
        bytes,
    })
}
