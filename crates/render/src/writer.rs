use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};
use orderslip_layout::{FontFace, Page, PageMetrics, PositionedElement, TextStyle};
use std::io::Write;

use crate::RenderError;
use crate::encoding::encode_win_ansi;

fn font_resource_name(face: FontFace) -> &'static str {
    match face {
        FontFace::Helvetica => "F1",
        FontFace::HelveticaBold => "F2",
        FontFace::HelveticaOblique => "F3",
    }
}

/// Builds the PDF object graph for the given pages and serializes it.
///
/// Coordinates in [`Page`] are top-down; this is where they flip into the
/// bottom-up PDF space.
pub fn render_pages(metrics: &PageMetrics, pages: &[Page]) -> Result<Vec<u8>, RenderError> {
    let mut document = Document::with_version("1.7");
    let pages_id = document.new_object_id();

    let mut font_dict = Dictionary::new();
    for face in [
        FontFace::Helvetica,
        FontFace::HelveticaBold,
        FontFace::HelveticaOblique,
    ] {
        let font_id = document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.postscript_name(),
            "Encoding" => "WinAnsiEncoding",
        });
        font_dict.set(font_resource_name(face), font_id);
    }
    let resources_id = document.add_object(dictionary! { "Font" => font_dict });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let mut writer = PageWriter::new(metrics);
        for element in &page.elements {
            writer.draw(element);
        }
        let (content, annotations) = writer.finish();

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&content.encode()?)?;
        let compressed = encoder.finish()?;
        let content_id = document.add_object(Stream::new(
            dictionary! { "Filter" => "FlateDecode" },
            compressed,
        ));

        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), metrics.width.into(), metrics.height.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        };
        if !annotations.is_empty() {
            let refs: Vec<Object> = annotations
                .into_iter()
                .map(|annot| document.add_object(annot).into())
                .collect();
            page_dict.set("Annots", refs);
        }
        kids.push(document.add_object(page_dict).into());
    }

    document.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages.len() as i32,
        }),
    );
    let catalog_id = document.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
    document.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    document.save_to(&mut bytes)?;
    log::debug!("rendered {} page(s), {} bytes", pages.len(), bytes.len());
    Ok(bytes)
}

/// Accumulates the content stream for a single page, caching font and fill
/// state so repeated draws do not bloat the stream.
struct PageWriter<'a> {
    metrics: &'a PageMetrics,
    operations: Vec<Operation>,
    annotations: Vec<Dictionary>,
    current_font: Option<(&'static str, f32)>,
    current_gray: Option<f32>,
}

impl<'a> PageWriter<'a> {
    fn new(metrics: &'a PageMetrics) -> Self {
        Self {
            metrics,
            operations: Vec::new(),
            annotations: Vec::new(),
            current_font: None,
            current_gray: None,
        }
    }

    fn finish(self) -> (Content, Vec<Dictionary>) {
        (
            Content {
                operations: self.operations,
            },
            self.annotations,
        )
    }

    fn draw(&mut self, element: &PositionedElement) {
        match element {
            PositionedElement::Text { x, y, text, style } => self.draw_text(*x, *y, text, style),
            PositionedElement::Rect {
                x,
                y,
                width,
                height,
                gray,
            } => self.draw_rect(*x, *y, *width, *height, *gray),
            PositionedElement::Line {
                x1,
                y1,
                x2,
                y2,
                width,
                gray,
            } => self.draw_line(*x1, *y1, *x2, *y2, *width, *gray),
            PositionedElement::Link {
                x,
                y,
                width,
                height,
                url,
            } => self.add_link(*x, *y, *width, *height, url),
        }
    }

    fn set_font(&mut self, style: &TextStyle) {
        let font = (font_resource_name(style.face), style.size);
        if self.current_font != Some(font) {
            self.operations.push(Operation::new(
                "Tf",
                vec![font.0.into(), style.size.into()],
            ));
            self.current_font = Some(font);
        }
    }

    fn set_fill_gray(&mut self, gray: f32) {
        if self.current_gray != Some(gray) {
            self.operations
                .push(Operation::new("g", vec![gray.into()]));
            self.current_gray = Some(gray);
        }
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, style: &TextStyle) {
        if text.trim().is_empty() {
            return;
        }
        self.set_fill_gray(style.gray);
        self.operations.push(Operation::new("BT", vec![]));
        self.set_font(style);
        // Approximate baseline at 80% of the font size below the line top.
        let pdf_y = self.metrics.height - (y + style.size * 0.8);
        self.operations
            .push(Operation::new("Td", vec![x.into(), pdf_y.into()]));
        self.operations.push(Operation::new(
            "Tj",
            vec![Object::String(
                encode_win_ansi(text),
                lopdf::StringFormat::Literal,
            )],
        ));
        self.operations.push(Operation::new("ET", vec![]));
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, gray: f32) {
        self.set_fill_gray(gray);
        let pdf_y = self.metrics.height - (y + height);
        self.operations.push(Operation::new(
            "re",
            vec![x.into(), pdf_y.into(), width.into(), height.into()],
        ));
        self.operations.push(Operation::new("f", vec![]));
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, gray: f32) {
        self.operations
            .push(Operation::new("w", vec![width.into()]));
        self.operations
            .push(Operation::new("G", vec![gray.into()]));
        self.operations.push(Operation::new(
            "m",
            vec![x1.into(), (self.metrics.height - y1).into()],
        ));
        self.operations.push(Operation::new(
            "l",
            vec![x2.into(), (self.metrics.height - y2).into()],
        ));
        self.operations.push(Operation::new("S", vec![]));
    }

    fn add_link(&mut self, x: f32, y: f32, width: f32, height: f32, url: &str) {
        let top = self.metrics.height - y;
        self.annotations.push(dictionary! {
            "Type" => "Annot",
            "Subtype" => "Link",
            "Rect" => vec![
                x.into(),
                (top - height).into(),
                (x + width).into(),
                top.into(),
            ],
            "Border" => vec![0.into(), 0.into(), 0.into()],
            "A" => dictionary! {
                "Type" => "Action",
                "S" => "URI",
                "URI" => Object::string_literal(url),
            },
        });
    }
}
