#![cfg(test)]

use crate::cursor::{Cursor, PageMetrics};
use crate::fields::{
    FIELD_GAP, FIELD_TRAILING, divider, inline_field, inline_field_height, label_with_lines,
    label_with_lines_height,
};
use crate::page::{PositionedElement, SheetBuilder};
use crate::style;
use crate::text::measure_text;

fn sheet() -> (SheetBuilder, Cursor, PageMetrics) {
    let metrics = PageMetrics::default();
    (SheetBuilder::new(metrics), Cursor::top_of(&metrics), metrics)
}

fn text_elements(sheet: &SheetBuilder) -> Vec<(f32, f32, String)> {
    let pages = sheet.pages();
    pages[0]
        .elements
        .iter()
        .filter_map(|el| match el {
            PositionedElement::Text { x, y, text, .. } => Some((*x, *y, text.clone())),
            _ => None,
        })
        .collect()
}

#[test]
fn test_inline_field_places_value_after_label() {
    let (mut sheet, cursor, _) = sheet();
    inline_field(
        &mut sheet,
        cursor,
        "Status",
        "confirmed",
        style::LABEL,
        style::VALUE,
        240.0,
    );
    let texts = text_elements(&sheet);
    assert_eq!(texts.len(), 2);
    let label_width = measure_text("Status", &style::LABEL);
    assert_eq!(texts[0].2, "Status");
    assert!((texts[1].0 - (cursor.x + label_width + FIELD_GAP)).abs() < 0.01);
    assert_eq!(texts[1].1, texts[0].1, "value shares the label's line");
}

#[test]
fn test_inline_field_continuation_lines_align_to_field_x() {
    let (mut sheet, cursor, _) = sheet();
    let value = "a rather long value that is going to wrap onto several continuation lines";
    inline_field(
        &mut sheet,
        cursor,
        "Note",
        value,
        style::LABEL,
        style::VALUE,
        160.0,
    );
    let texts = text_elements(&sheet);
    assert!(texts.len() > 3);
    // Continuation lines are anchored at the field's original x, not under
    // the value start.
    for (x, _, _) in &texts[2..] {
        assert!((x - cursor.x).abs() < 0.01);
    }
}

#[test]
fn test_inline_field_height_matches_drawn_height() {
    let (mut sheet, cursor, _) = sheet();
    let value = "wraps onto a few lines when the column is narrow enough for that";
    let predicted = inline_field_height("Note", value, &style::LABEL, &style::VALUE, 160.0);
    let after = inline_field(
        &mut sheet,
        cursor,
        "Note",
        value,
        style::LABEL,
        style::VALUE,
        160.0,
    );
    assert!((after.y - cursor.y - predicted).abs() < 0.01);
}

#[test]
fn test_label_with_lines_stacks_label_then_lines() {
    let (mut sheet, cursor, _) = sheet();
    let lines = vec!["Springfield High".to_string(), "Falcons Girls Soccer".to_string()];
    let after = label_with_lines(
        &mut sheet,
        cursor,
        "School / Team",
        &lines,
        style::LABEL,
        style::VALUE,
        240.0,
    );
    let texts = text_elements(&sheet);
    assert_eq!(texts.len(), 3);
    assert!(texts[1].1 > texts[0].1);
    assert!(texts[2].1 > texts[1].1);

    let predicted = label_with_lines_height(&lines, &style::LABEL, &style::VALUE, 240.0);
    assert!((after.y - cursor.y - predicted).abs() < 0.01);
}

#[test]
fn test_field_trailing_gap_applied() {
    let (mut sheet, cursor, _) = sheet();
    let after = inline_field(
        &mut sheet,
        cursor,
        "Status",
        "ok",
        style::LABEL,
        style::VALUE,
        240.0,
    );
    let first_line = style::LABEL.line_height().max(style::VALUE.line_height());
    assert!((after.y - cursor.y - first_line - FIELD_TRAILING).abs() < 0.01);
}

#[test]
fn test_divider_spans_content_width_without_advancing() {
    let (mut sheet, cursor, metrics) = sheet();
    divider(&mut sheet, cursor, &metrics);
    let pages = sheet.pages();
    match &pages[0].elements[0] {
        PositionedElement::Line { x1, x2, y1, y2, .. } => {
            assert_eq!(*x1, metrics.margin_left);
            assert_eq!(*x2, metrics.right_edge());
            assert_eq!(y1, y2);
        }
        other => panic!("expected a line, got {other:?}"),
    }
}
