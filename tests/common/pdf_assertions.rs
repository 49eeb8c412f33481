//! Helpers that reload generated PDF bytes through `lopdf` so tests assert
//! on what a reader would actually see.

use lopdf::Document;

pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: Document,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, lopdf::Error> {
        let doc = Document::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Extracted text of one page; page numbers are 1-based.
    pub fn page_text(&self, page: u32) -> Result<String, lopdf::Error> {
        self.doc.extract_text(&[page])
    }

    pub fn all_text(&self) -> Result<String, lopdf::Error> {
        let pages: Vec<u32> = (1..=self.page_count() as u32).collect();
        self.doc.extract_text(&pages)
    }
}
