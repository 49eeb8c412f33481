//! The items table: one row per ordered item, wrapping text cells and
//! repeating the column header after every page break.

use orderslip_layout::{Cursor, PageMetrics, SheetBuilder, measure_text, style, wrap_text};
use orderslip_types::{OrderItem, PLACEHOLDER, ReceiptRecord, format_money, unit_breakdown};

use super::SECTION_GAP;

const COLUMN_COUNT: usize = 6;
const COLUMN_FRACTIONS: [f32; COLUMN_COUNT] = [0.26, 0.26, 0.16, 0.08, 0.12, 0.12];
const HEADERS: [&str; COLUMN_COUNT] = [
    "Item",
    "Customizations",
    "Unit Breakdown",
    "Qty",
    "Unit Price",
    "Amount",
];
/// Qty and the money columns are right-aligned against their column edge.
const RIGHT_ALIGNED: [bool; COLUMN_COUNT] = [false, false, false, true, true, true];

const CELL_PAD: f32 = 4.0;
const ROW_VPAD: f32 = 3.0;

struct Columns {
    x: [f32; COLUMN_COUNT],
    width: [f32; COLUMN_COUNT],
}

impl Columns {
    fn new(metrics: &PageMetrics) -> Self {
        let content = metrics.content_width();
        let mut x = [0.0; COLUMN_COUNT];
        let mut width = [0.0; COLUMN_COUNT];
        let mut left = metrics.margin_left;
        for (i, fraction) in COLUMN_FRACTIONS.iter().enumerate() {
            x[i] = left;
            width[i] = content * fraction;
            left += width[i];
        }
        Self { x, width }
    }

    fn text_width(&self, column: usize) -> f32 {
        self.width[column] - 2.0 * CELL_PAD
    }
}

/// Selected options as one comma-joined summary, the way they read on the
/// order page: `"Extra cheese (+$1.00), Large (+$2.50) ×2"`.
pub(crate) fn customizations_text(item: &OrderItem, currency: &str) -> String {
    if item.options.is_empty() {
        return PLACEHOLDER.to_string();
    }
    item.options
        .iter()
        .map(|opt| {
            let money = format_money(Some(opt.price_cents), currency);
            let mut text = if opt.price_cents >= 0 {
                format!("{} (+{money})", opt.name)
            } else {
                format!("{} ({money})", opt.name)
            };
            if let Some(qty) = opt.quantity.filter(|q| *q > 1) {
                text.push_str(&format!(" \u{d7}{qty}"));
            }
            text
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// The per-unit price split into base and extras: `"$8.00 + $1.50"`, or just
/// the base when there are no extras.
pub(crate) fn unit_breakdown_text(item: &OrderItem, currency: &str) -> String {
    let (base, extras) = unit_breakdown(item);
    if extras == 0 {
        format_money(Some(base), currency)
    } else {
        format!(
            "{} + {}",
            format_money(Some(base), currency),
            format_money(Some(extras), currency)
        )
    }
}

fn row_cells(item: &OrderItem, currency: &str) -> [String; COLUMN_COUNT] {
    [
        item.name.clone(),
        customizations_text(item, currency),
        unit_breakdown_text(item, currency),
        item.quantity.to_string(),
        format_money(Some(item.unit_price_cents), currency),
        format_money(Some(item.total_cents), currency),
    ]
}

fn wrap_cells(cells: &[String; COLUMN_COUNT], columns: &Columns) -> Vec<Vec<String>> {
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| wrap_text(cell, &style::VALUE, columns.text_width(i)))
        .collect()
}

fn row_height(wrapped: &[Vec<String>]) -> f32 {
    let lines = wrapped.iter().map(Vec::len).max().unwrap_or(1);
    lines as f32 * style::VALUE.line_height() + 2.0 * ROW_VPAD
}

fn header_height() -> f32 {
    style::TABLE_HEADER.line_height() + 5.0
}

fn draw_header(sheet: &mut SheetBuilder, cursor: Cursor, columns: &Columns) -> Cursor {
    let metrics = *sheet.metrics();
    for (i, label) in HEADERS.iter().enumerate() {
        let x = if RIGHT_ALIGNED[i] {
            columns.x[i] + columns.width[i] - CELL_PAD - measure_text(label, &style::TABLE_HEADER)
        } else {
            columns.x[i] + CELL_PAD
        };
        sheet.push_text(cursor.at_x(x), *label, style::TABLE_HEADER);
    }
    let rule_y = cursor.y + style::TABLE_HEADER.line_height() + 2.0;
    sheet.push_line(
        cursor.page,
        (metrics.margin_left, rule_y),
        (metrics.right_edge(), rule_y),
        0.75,
        0.3,
    );
    cursor.advanced(header_height())
}

fn draw_row(
    sheet: &mut SheetBuilder,
    cursor: Cursor,
    wrapped: &[Vec<String>],
    columns: &Columns,
    height: f32,
) -> Cursor {
    let metrics = *sheet.metrics();
    for (i, lines) in wrapped.iter().enumerate() {
        for (line_index, line) in lines.iter().enumerate() {
            let x = if RIGHT_ALIGNED[i] {
                columns.x[i] + columns.width[i] - CELL_PAD - measure_text(line, &style::VALUE)
            } else {
                columns.x[i] + CELL_PAD
            };
            let y = cursor.y + ROW_VPAD + line_index as f32 * style::VALUE.line_height();
            sheet.push_text(cursor.at_x(x).at_y(y), line.clone(), style::VALUE);
        }
    }
    let rule_y = cursor.y + height;
    sheet.push_line(
        cursor.page,
        (metrics.margin_left, rule_y),
        (metrics.right_edge(), rule_y),
        0.5,
        0.85,
    );
    cursor.advanced(height)
}

pub fn compose(sheet: &mut SheetBuilder, cursor: Cursor, record: &ReceiptRecord) -> Cursor {
    let metrics = *sheet.metrics();
    let columns = Columns::new(&metrics);
    let currency = record.currency();

    // Never strand the header alone at the bottom of a page.
    let first_row_height = record
        .items
        .first()
        .map(|item| row_height(&wrap_cells(&row_cells(item, currency), &columns)))
        .unwrap_or_else(|| style::VALUE.line_height() + 2.0 * ROW_VPAD);
    let mut cursor = cursor.ensure_space(&metrics, header_height() + first_row_height);
    cursor = draw_header(sheet, cursor, &columns);

    for item in &record.items {
        let wrapped = wrap_cells(&row_cells(item, currency), &columns);
        let height = row_height(&wrapped);
        if cursor.y + height > metrics.max_y() {
            cursor = cursor.page_break(&metrics);
            cursor = draw_header(sheet, cursor, &columns);
        }
        cursor = draw_row(sheet, cursor, &wrapped, &columns, height);
    }

    cursor.at_x(metrics.margin_left).advanced(SECTION_GAP)
}
