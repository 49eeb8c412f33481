//! Label/value field renderers.
//!
//! Both renderers return the cursor advanced past the consumed height plus
//! a trailing gap, and both have pure `*_height` twins so composers can
//! size their `ensure_space` calls before drawing anything.

use crate::cursor::{Cursor, PageMetrics};
use crate::page::SheetBuilder;
use crate::style::TextStyle;
use crate::text::{measure_text, wrap_first_rest, wrap_text};

/// Gap between a label and the value that follows it on the same line.
pub const FIELD_GAP: f32 = 6.0;
/// Vertical gap left below every field.
pub const FIELD_TRAILING: f32 = 4.0;

fn inline_lines(
    label: &str,
    value: &str,
    label_style: &TextStyle,
    value_style: &TextStyle,
    column_width: f32,
) -> (f32, Vec<String>) {
    let label_width = measure_text(label, label_style);
    let first_width = (column_width - label_width - FIELD_GAP).max(0.0);
    let lines = wrap_first_rest(value, value_style, first_width, column_width);
    (label_width, lines)
}

/// Label and value sharing one line; continuation lines of a wrapped value
/// fall back to the field's original x, not indented under the label.
pub fn inline_field(
    sheet: &mut SheetBuilder,
    cursor: Cursor,
    label: &str,
    value: &str,
    label_style: TextStyle,
    value_style: TextStyle,
    column_width: f32,
) -> Cursor {
    let (label_width, lines) = inline_lines(label, value, &label_style, &value_style, column_width);
    let first_line_height = label_style.line_height().max(value_style.line_height());

    sheet.push_text(cursor, label, label_style);
    let mut consumed = 0.0;
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            let value_cursor = cursor.at_x(cursor.x + label_width + FIELD_GAP);
            sheet.push_text(value_cursor, line.clone(), value_style);
            consumed += first_line_height;
        } else {
            sheet.push_text(cursor.advanced(consumed), line.clone(), value_style);
            consumed += value_style.line_height();
        }
    }
    cursor.advanced(consumed + FIELD_TRAILING)
}

/// Height [`inline_field`] will consume, trailing gap included.
pub fn inline_field_height(
    label: &str,
    value: &str,
    label_style: &TextStyle,
    value_style: &TextStyle,
    column_width: f32,
) -> f32 {
    let (_, lines) = inline_lines(label, value, label_style, value_style, column_width);
    let first_line_height = label_style.line_height().max(value_style.line_height());
    first_line_height + (lines.len() - 1) as f32 * value_style.line_height() + FIELD_TRAILING
}

/// Label on its own line, followed by pre-supplied value lines, each
/// independently wrapped to the column width.
pub fn label_with_lines(
    sheet: &mut SheetBuilder,
    cursor: Cursor,
    label: &str,
    lines: &[String],
    label_style: TextStyle,
    value_style: TextStyle,
    column_width: f32,
) -> Cursor {
    sheet.push_text(cursor, label, label_style);
    let mut consumed = label_style.line_height();
    for line in lines {
        for wrapped in wrap_text(line, &value_style, column_width) {
            sheet.push_text(cursor.advanced(consumed), wrapped, value_style);
            consumed += value_style.line_height();
        }
    }
    cursor.advanced(consumed + FIELD_TRAILING)
}

/// Height [`label_with_lines`] will consume, trailing gap included.
pub fn label_with_lines_height(
    lines: &[String],
    label_style: &TextStyle,
    value_style: &TextStyle,
    column_width: f32,
) -> f32 {
    let wrapped: usize = lines
        .iter()
        .map(|line| wrap_text(line, value_style, column_width).len())
        .sum();
    label_style.line_height() + wrapped as f32 * value_style.line_height() + FIELD_TRAILING
}

/// Horizontal rule across the content width at the cursor's y. Does not
/// advance the cursor; callers advance separately.
pub fn divider(sheet: &mut SheetBuilder, cursor: Cursor, metrics: &PageMetrics) {
    sheet.push_line(
        cursor.page,
        (metrics.margin_left, cursor.y),
        (metrics.right_edge(), cursor.y),
        0.75,
        0.6,
    );
}
