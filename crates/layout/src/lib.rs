//! Layout primitives for receipt documents: page geometry, the immutable
//! cursor, deterministic text measurement, and the label/value field
//! renderers the section composers are built from.
//!
//! Drawing operations take a [`Cursor`] by value and return the advanced
//! copy, so pagination and ordering are testable without any rendering
//! backend. Styles are always explicit parameters; nothing here keeps
//! mutable drawing state between calls.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error(
        "Page metrics leave no printable area (content width {0:.2}pt, content height {1:.2}pt)"
    )]
    DegenerateGeometry(f32, f32),
}

pub mod cursor;
pub mod fields;
pub mod page;
pub mod style;
pub mod text;

pub use cursor::{Cursor, PageMetrics};
pub use fields::{
    FIELD_GAP, FIELD_TRAILING, divider, inline_field, inline_field_height, label_with_lines,
    label_with_lines_height,
};
pub use page::{Page, PositionedElement, SheetBuilder};
pub use style::{FontFace, TextStyle};
pub use text::{measure_text, wrap_text, wrapped_height};

#[cfg(test)]
mod fields_test;
