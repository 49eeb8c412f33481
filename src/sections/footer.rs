//! Footer stamped into the bottom margin of every page once the page count
//! is final.

use orderslip_layout::{Cursor, SheetBuilder, measure_text, style};

pub(crate) const CLOSING_LINE: &str = "Thank you for your order!";
pub(crate) const CREDIT_LINE: &str = "Receipt generated by Orderslip";

const FOOTER_OFFSET: f32 = 8.0;

/// Runs after every section has composed, because "Page N of M" needs the
/// final page count.
pub fn stamp(sheet: &mut SheetBuilder) {
    let metrics = *sheet.metrics();
    let total = sheet.page_count();
    let first_y = metrics.max_y() + FOOTER_OFFSET;
    let second_y = first_y + style::SMALL.line_height();

    for page in 0..total {
        let left = Cursor {
            x: metrics.margin_left,
            y: first_y,
            page,
        };
        sheet.push_text(left, CLOSING_LINE, style::SMALL);
        sheet.push_text(left.at_y(second_y), CREDIT_LINE, style::SMALL.with_gray(0.5));

        let counter = format!("Page {} of {total}", page + 1);
        let x = metrics.right_edge() - measure_text(&counter, &style::SMALL);
        sheet.push_text(left.at_x(x), counter, style::SMALL);
    }
}
