//! The totals summary: a right-anchored block of label/amount rows.
//!
//! Subtotal, Total (before tip) and Total paid always render; fee and tip
//! rows only render when their value is present and non-zero. A voided
//! order renders its Total paid line as a muted placeholder instead of an
//! amount.

use orderslip_layout::{Cursor, SheetBuilder, TextStyle, measure_text, style};
use orderslip_types::{PLACEHOLDER, ReceiptRecord, format_money, percent_from_bps};

use super::SECTION_GAP;

/// The block never grows wider than this, even on wide pages.
const SUMMARY_MAX_WIDTH: f32 = 360.0;
const ROW_GAP: f32 = 4.0;
const RULE_GAP: f32 = 3.0;

pub(crate) struct SummaryRow {
    pub label: String,
    /// `None` renders as a muted placeholder (voided orders).
    pub amount: Option<String>,
    pub emphasized: bool,
}

impl SummaryRow {
    fn plain(label: &str, amount: String) -> Self {
        Self {
            label: label.to_string(),
            amount: Some(amount),
            emphasized: false,
        }
    }

    fn style(&self) -> TextStyle {
        match (self.emphasized, &self.amount) {
            (_, None) => style::MUTED,
            (true, Some(_)) => style::TOTAL,
            (false, Some(_)) => style::VALUE,
        }
    }

    fn height(&self) -> f32 {
        self.style().line_height() + ROW_GAP
    }
}

fn fee_row(rows: &mut Vec<SummaryRow>, label: &str, cents: Option<i64>, currency: &str) {
    if let Some(cents) = cents.filter(|c| *c != 0) {
        rows.push(SummaryRow::plain(label, format_money(Some(cents), currency)));
    }
}

pub(crate) fn summary_rows(record: &ReceiptRecord) -> Vec<SummaryRow> {
    let currency = record.currency();
    let totals = &record.totals;
    let fees = &record.fees;

    let mut rows = vec![SummaryRow::plain(
        "Subtotal",
        format_money(Some(totals.subtotal_cents), currency),
    )];

    fee_row(&mut rows, "Delivery fee", fees.delivery_cents, currency);
    fee_row(&mut rows, "Service fee", fees.service_cents, currency);
    fee_row(&mut rows, "Small order fee", fees.small_order_cents, currency);
    fee_row(&mut rows, "Sales tax", fees.sales_tax_cents, currency);
    fee_row(&mut rows, "Added fee", fees.added_fee_flat_cents, currency);

    // The percentage add-on needs both halves: the computed amount for the
    // value and the basis points for the label.
    if let (Some(amount), Some(percent)) = (
        fees.added_fee_amount_cents.filter(|c| *c != 0),
        percent_from_bps(fees.added_fee_bps),
    ) {
        rows.push(SummaryRow::plain(
            &format!("Added fee ({percent})"),
            format_money(Some(amount), currency),
        ));
    }

    rows.push(SummaryRow::plain(
        "Total (before tip)",
        format_money(Some(totals.total_without_tips_cents), currency),
    ));

    if totals.tip_cents != 0 {
        rows.push(SummaryRow::plain(
            "Tip",
            format_money(Some(totals.tip_cents), currency),
        ));
    }

    rows.push(SummaryRow {
        label: "Total paid".to_string(),
        amount: (!record.is_voided())
            .then(|| format_money(Some(totals.total_with_tip_cents), currency)),
        emphasized: true,
    });

    rows
}

pub fn height(record: &ReceiptRecord) -> f32 {
    let rows = summary_rows(record);
    rows.iter().map(SummaryRow::height).sum::<f32>() + RULE_GAP + SECTION_GAP
}

pub fn compose(sheet: &mut SheetBuilder, cursor: Cursor, record: &ReceiptRecord) -> Cursor {
    let metrics = *sheet.metrics();
    let width = SUMMARY_MAX_WIDTH.min(metrics.content_width());
    let left = metrics.right_edge() - width;
    let right = metrics.right_edge();

    let mut cursor = cursor.at_x(left);
    let rows = summary_rows(record);
    let last = rows.len() - 1;
    for (i, row) in rows.iter().enumerate() {
        if i == last {
            cursor = cursor.advanced(RULE_GAP);
            if row.amount.is_some() {
                sheet.push_line(cursor.page, (left, cursor.y), (right, cursor.y), 0.75, 0.3);
            }
            cursor = cursor.advanced(RULE_GAP);
        }
        let row_style = row.style();
        sheet.push_text(cursor, row.label.clone(), row_style);
        let amount = row.amount.as_deref().unwrap_or(PLACEHOLDER);
        sheet.push_text(
            cursor.at_x(right - measure_text(amount, &row_style)),
            amount,
            row_style,
        );
        cursor = cursor.advanced(row_style.line_height() + ROW_GAP);
    }

    cursor.at_x(metrics.margin_left).advanced(SECTION_GAP - ROW_GAP)
}
