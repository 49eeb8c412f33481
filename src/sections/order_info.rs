//! Order information, laid out as two independent columns that rejoin at
//! the taller of the two.
//!
//! Left column: order date, school/team context, requester. Right column:
//! status, order type, delivery address (delivery orders only) and the
//! tracking link. Blocks with nothing to say are skipped entirely rather
//! than rendered with placeholders.

use orderslip_layout::{
    Cursor, FIELD_TRAILING, PageMetrics, SheetBuilder, inline_field, inline_field_height,
    label_with_lines, label_with_lines_height, measure_text, style,
};
use orderslip_types::{PLACEHOLDER, ReceiptRecord, format_datetime};

use super::SECTION_GAP;

enum Field {
    Inline { label: &'static str, value: String },
    Block { label: &'static str, lines: Vec<String> },
    Link { url: String },
}

impl Field {
    fn height(&self, column_width: f32) -> f32 {
        match self {
            Field::Inline { label, value } => {
                inline_field_height(label, value, &style::LABEL, &style::VALUE, column_width)
            }
            Field::Block { lines, .. } => {
                label_with_lines_height(lines, &style::LABEL, &style::VALUE, column_width)
            }
            Field::Link { .. } => style::LINK.line_height() + FIELD_TRAILING,
        }
    }
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => PLACEHOLDER.to_string(),
    }
}

fn left_fields(record: &ReceiptRecord) -> Vec<Field> {
    let mut fields = vec![Field::Inline {
        label: "Order Date",
        value: format_datetime(record.scheduled_at.as_deref()),
    }];

    let mut school_lines = Vec::new();
    if let Some(school) = record.requester.school_name.as_deref().filter(|s| !s.is_empty()) {
        school_lines.push(school.to_string());
    }
    if let Some(team) = record.requester.team_line() {
        school_lines.push(team);
    }
    if !school_lines.is_empty() {
        fields.push(Field::Block {
            label: "School / Team",
            lines: school_lines,
        });
    }

    let mut requester_lines = Vec::new();
    if let Some(name) = record.requester.full_name() {
        requester_lines.push(name);
    }
    if let Some(email) = record.requester.email.as_deref().filter(|e| !e.is_empty()) {
        requester_lines.push(email.to_string());
    }
    if !requester_lines.is_empty() {
        fields.push(Field::Block {
            label: "Requested By",
            lines: requester_lines,
        });
    }

    fields
}

fn right_fields(record: &ReceiptRecord) -> Vec<Field> {
    let mut fields = vec![
        Field::Inline {
            label: "Status",
            value: capitalize(&record.status),
        },
        Field::Inline {
            label: "Order Type",
            value: capitalize(&record.fulfillment_method),
        },
    ];

    if record.is_delivery() {
        if let Some(address) = &record.delivery_address {
            let lines = address.lines();
            if !lines.is_empty() {
                fields.push(Field::Block {
                    label: "Deliver To",
                    lines,
                });
            }
        }
    }

    if let Some(url) = record.tracking_url.as_deref().filter(|u| !u.is_empty()) {
        fields.push(Field::Link {
            url: url.to_string(),
        });
    }

    fields
}

fn compose_column(
    sheet: &mut SheetBuilder,
    mut cursor: Cursor,
    fields: Vec<Field>,
    column_width: f32,
) -> Cursor {
    for field in fields {
        match field {
            Field::Inline { label, value } => {
                cursor = inline_field(
                    sheet,
                    cursor,
                    label,
                    &value,
                    style::LABEL,
                    style::VALUE,
                    column_width,
                );
            }
            Field::Block { label, lines } => {
                cursor = label_with_lines(
                    sheet,
                    cursor,
                    label,
                    &lines,
                    style::LABEL,
                    style::VALUE,
                    column_width,
                );
            }
            Field::Link { url } => {
                let text = "Track this order";
                let width = measure_text(text, &style::LINK);
                sheet.push_text(cursor, text, style::LINK);
                sheet.push_link(
                    cursor.page,
                    cursor.x,
                    cursor.y,
                    width,
                    style::LINK.line_height(),
                    url,
                );
                cursor = cursor.advanced(style::LINK.line_height() + FIELD_TRAILING);
            }
        }
    }
    cursor
}

fn column_height(fields: &[Field], column_width: f32) -> f32 {
    fields.iter().map(|f| f.height(column_width)).sum()
}

pub fn height(record: &ReceiptRecord, metrics: &PageMetrics) -> f32 {
    let column = metrics.column_width();
    let left = column_height(&left_fields(record), column);
    let right = column_height(&right_fields(record), column);
    left.max(right) + SECTION_GAP
}

pub fn compose(sheet: &mut SheetBuilder, cursor: Cursor, record: &ReceiptRecord) -> Cursor {
    let metrics = *sheet.metrics();
    let column = metrics.column_width();
    let right_x = metrics.margin_left + column + metrics.gutter;

    let left_end = compose_column(
        sheet,
        cursor.at_x(metrics.margin_left),
        left_fields(record),
        column,
    );
    let right_end = compose_column(sheet, cursor.at_x(right_x), right_fields(record), column);

    cursor.at_y(left_end.y.max(right_end.y) + SECTION_GAP)
}
