//! The positioned-element page model the renderer consumes.
//!
//! Coordinates are top-down points; the PDF writer flips them into the
//! bottom-up PDF space. Text y refers to the top of the line box.

use crate::cursor::{Cursor, PageMetrics};
use crate::style::TextStyle;

#[derive(Debug, Clone, PartialEq)]
pub enum PositionedElement {
    Text {
        x: f32,
        y: f32,
        text: String,
        style: TextStyle,
    },
    /// Filled rectangle.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        gray: f32,
    },
    /// Stroked horizontal/vertical rule.
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        gray: f32,
    },
    /// Clickable link region (also underlays the URL as small text where
    /// the composer chooses to show it).
    Link {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        url: String,
    },
}

#[derive(Debug, Default, Clone)]
pub struct Page {
    pub elements: Vec<PositionedElement>,
}

/// Accumulates positioned elements across pages. Pages come into existence
/// as soon as a cursor that crossed a page break writes to them.
#[derive(Debug)]
pub struct SheetBuilder {
    metrics: PageMetrics,
    pages: Vec<Page>,
}

impl SheetBuilder {
    pub fn new(metrics: PageMetrics) -> Self {
        Self {
            metrics,
            pages: vec![Page::default()],
        }
    }

    pub fn metrics(&self) -> &PageMetrics {
        &self.metrics
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_mut(&mut self, index: usize) -> &mut Page {
        while self.pages.len() <= index {
            log::trace!("opened page {}", self.pages.len() + 1);
            self.pages.push(Page::default());
        }
        &mut self.pages[index]
    }

    /// Records one line of text with its top-left corner at the cursor.
    pub fn push_text(&mut self, cursor: Cursor, text: impl Into<String>, style: TextStyle) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.page_mut(cursor.page).elements.push(PositionedElement::Text {
            x: cursor.x,
            y: cursor.y,
            text,
            style,
        });
    }

    pub fn push_rect(&mut self, page: usize, x: f32, y: f32, width: f32, height: f32, gray: f32) {
        self.page_mut(page)
            .elements
            .push(PositionedElement::Rect {
                x,
                y,
                width,
                height,
                gray,
            });
    }

    pub fn push_line(
        &mut self,
        page: usize,
        (x1, y1): (f32, f32),
        (x2, y2): (f32, f32),
        width: f32,
        gray: f32,
    ) {
        self.page_mut(page).elements.push(PositionedElement::Line {
            x1,
            y1,
            x2,
            y2,
            width,
            gray,
        });
    }

    pub fn push_link(&mut self, page: usize, x: f32, y: f32, width: f32, height: f32, url: String) {
        self.page_mut(page).elements.push(PositionedElement::Link {
            x,
            y,
            width,
            height,
            url,
        });
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }
}
