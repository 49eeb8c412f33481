//! Page geometry and the layout cursor.

use crate::LayoutError;

/// Page size and margins in points. Parameterized so the engine can target
/// other physical formats without code changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_right: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    /// Horizontal gap between the two order-info columns.
    pub gutter: f32,
}

impl Default for PageMetrics {
    /// US Letter, 36pt margins, 24pt column gutter.
    fn default() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin_top: 36.0,
            margin_right: 36.0,
            margin_bottom: 36.0,
            margin_left: 36.0,
            gutter: 24.0,
        }
    }
}

impl PageMetrics {
    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    /// Width of one of the two order-info columns.
    pub fn column_width(&self) -> f32 {
        (self.content_width() - self.gutter) / 2.0
    }

    /// Lowest writable y position (top-down coordinates).
    pub fn max_y(&self) -> f32 {
        self.height - self.margin_bottom
    }

    pub fn right_edge(&self) -> f32 {
        self.width - self.margin_right
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let content_height = self.height - self.margin_top - self.margin_bottom;
        if self.content_width() <= 0.0 || content_height <= 0.0 || self.column_width() <= 0.0 {
            return Err(LayoutError::DegenerateGeometry(
                self.content_width(),
                content_height,
            ));
        }
        Ok(())
    }
}

/// Current write position: x, y from the top-left of the page, plus the
/// zero-based page index. A value type; drawing operations return the
/// advanced copy instead of mutating shared state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
    pub page: usize,
}

impl Cursor {
    pub fn top_of(metrics: &PageMetrics) -> Self {
        Self {
            x: metrics.margin_left,
            y: metrics.margin_top,
            page: 0,
        }
    }

    /// The pagination check: if `needed` points do not fit above the bottom
    /// margin, returns a cursor at the top of the next page; otherwise
    /// returns `self` untouched.
    pub fn ensure_space(self, metrics: &PageMetrics, needed: f32) -> Self {
        if self.y + needed > metrics.max_y() {
            self.page_break(metrics)
        } else {
            self
        }
    }

    /// Unconditionally moves to the top margin of the next page.
    pub fn page_break(self, metrics: &PageMetrics) -> Self {
        Self {
            x: metrics.margin_left,
            y: metrics.margin_top,
            page: self.page + 1,
        }
    }

    pub fn advanced(self, dy: f32) -> Self {
        Self {
            y: self.y + dy,
            ..self
        }
    }

    pub fn at_x(self, x: f32) -> Self {
        Self { x, ..self }
    }

    pub fn at_y(self, y: f32) -> Self {
        Self { y, ..self }
    }
}
