//! Header banner: restaurant identity on the left, order number on the
//! right, over a light gray band.

use orderslip_layout::{Cursor, SheetBuilder, measure_text, style};
use orderslip_types::ReceiptRecord;

use super::SECTION_GAP;

const BANNER_HEIGHT: f32 = 54.0;
const BANNER_GRAY: f32 = 0.92;
const BANNER_PAD: f32 = 10.0;

pub fn height() -> f32 {
    BANNER_HEIGHT + SECTION_GAP
}

pub fn compose(sheet: &mut SheetBuilder, cursor: Cursor, record: &ReceiptRecord) -> Cursor {
    let metrics = *sheet.metrics();
    sheet.push_rect(
        cursor.page,
        metrics.margin_left,
        cursor.y,
        metrics.content_width(),
        BANNER_HEIGHT,
        BANNER_GRAY,
    );

    let inner = cursor
        .at_x(metrics.margin_left + BANNER_PAD)
        .advanced(BANNER_PAD);
    sheet.push_text(inner, record.restaurant.name.clone(), style::BANNER_TITLE);
    sheet.push_text(
        inner.advanced(style::BANNER_TITLE.line_height()),
        record.restaurant.address.clone(),
        style::BANNER_META,
    );

    if !record.order_number.is_empty() {
        let order_no = format!("Order #{}", record.order_number);
        let width = measure_text(&order_no, &style::BANNER_META);
        sheet.push_text(
            inner.at_x(metrics.right_edge() - BANNER_PAD - width),
            order_no,
            style::BANNER_META,
        );
    }

    cursor.advanced(BANNER_HEIGHT + SECTION_GAP)
}
