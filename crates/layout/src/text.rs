//! Deterministic text measurement and wrapping.
//!
//! Widths use a fixed per-character approximation rather than real font
//! metrics, so wrapping is a pure function of (text, width, style) and
//! callers can pre-compute the height a block will occupy before drawing it.

use crate::style::TextStyle;

// Rough Helvetica advance: 0.6 em per character.
const CHAR_WIDTH_FACTOR: f32 = 0.6;

pub fn measure_text(text: &str, style: &TextStyle) -> f32 {
    text.chars().count() as f32 * (style.size * CHAR_WIDTH_FACTOR)
}

/// Greedy word wrap. Words wider than a whole line are hard-split so a
/// pathological token cannot overflow the column.
pub fn wrap_text(text: &str, style: &TextStyle, max_width: f32) -> Vec<String> {
    wrap_first_rest(text, style, max_width, max_width)
}

/// Wraps with a distinct width for the first line. Used by the inline field
/// renderer, where the first line starts after the label but continuation
/// lines fall back to the field's full column width.
pub fn wrap_first_rest(
    text: &str,
    style: &TextStyle,
    first_width: f32,
    rest_width: f32,
) -> Vec<String> {
    let char_width = style.size * CHAR_WIDTH_FACTOR;
    let mut lines = Vec::new();
    let mut current = String::new();
    let width_for = |lines: &Vec<String>| {
        if lines.is_empty() {
            first_width
        } else {
            rest_width
        }
    };

    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        for word in paragraph.split_whitespace() {
            let mut word = word.to_string();
            // Hard-split tokens that can never fit on one line.
            loop {
                let max_chars = (width_for(&lines).max(char_width) / char_width).floor() as usize;
                if word.chars().count() <= max_chars.max(1) {
                    break;
                }
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    continue;
                }
                let head: String = word.chars().take(max_chars.max(1)).collect();
                word = word.chars().skip(max_chars.max(1)).collect();
                lines.push(head);
            }

            let candidate = if current.is_empty() {
                word.clone()
            } else {
                format!("{current} {word}")
            };
            if candidate.chars().count() as f32 * char_width > width_for(&lines)
                && !current.is_empty()
            {
                lines.push(std::mem::take(&mut current));
                current = word;
            } else {
                current = candidate;
            }
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Height the wrapped text will occupy.
pub fn wrapped_height(text: &str, style: &TextStyle, max_width: f32) -> f32 {
    wrap_text(text, style, max_width).len() as f32 * style.line_height()
}
