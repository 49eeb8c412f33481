//! Payment details: how the order was paid, as plain lines under a label.

use orderslip_layout::{
    Cursor, PageMetrics, SheetBuilder, divider, label_with_lines, label_with_lines_height, style,
};
use orderslip_types::ReceiptRecord;

use super::SECTION_GAP;

const NO_PAYMENT: &str = "No payment information on file";
/// Gap between the dividing rule and the section label.
const RULE_GAP: f32 = 6.0;

pub(crate) fn payment_lines(record: &ReceiptRecord) -> Vec<String> {
    let Some(payment) = &record.payment else {
        return vec![NO_PAYMENT.to_string()];
    };

    let mut lines = Vec::new();
    match (
        payment.card_label.as_deref().filter(|l| !l.is_empty()),
        payment.last_four.as_deref().filter(|l| !l.is_empty()),
    ) {
        (Some(label), Some(last_four)) => lines.push(format!("{label} ending in {last_four}")),
        (Some(label), None) => lines.push(label.to_string()),
        (None, Some(last_four)) => lines.push(format!("Card ending in {last_four}")),
        (None, None) => {}
    }
    if let Some(status) = payment.payment_status.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("Payment status: {status}"));
    }

    if lines.is_empty() {
        lines.push(NO_PAYMENT.to_string());
    }
    lines
}

pub fn height(record: &ReceiptRecord, metrics: &PageMetrics) -> f32 {
    label_with_lines_height(
        &payment_lines(record),
        &style::LABEL,
        &style::VALUE,
        metrics.content_width(),
    ) + RULE_GAP
        + SECTION_GAP
}

pub fn compose(sheet: &mut SheetBuilder, cursor: Cursor, record: &ReceiptRecord) -> Cursor {
    let metrics = *sheet.metrics();
    let cursor = cursor.at_x(metrics.margin_left);
    divider(sheet, cursor, &metrics);
    let cursor = label_with_lines(
        sheet,
        cursor.advanced(RULE_GAP),
        "Payment Details",
        &payment_lines(record),
        style::LABEL,
        style::VALUE,
        metrics.content_width(),
    );
    cursor.advanced(SECTION_GAP)
}
