//! Text styles. Every draw call takes its style explicitly; the named
//! constants below are the document's fixed palette.

/// The base-14 Helvetica family. No font files are embedded; the renderer
/// maps these onto standard Type1 fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl FontFace {
    pub fn postscript_name(self) -> &'static str {
        match self {
            FontFace::Helvetica => "Helvetica",
            FontFace::HelveticaBold => "Helvetica-Bold",
            FontFace::HelveticaOblique => "Helvetica-Oblique",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: FontFace,
    pub size: f32,
    /// Fill gray level, 0.0 (black) to 1.0 (white).
    pub gray: f32,
}

impl TextStyle {
    pub const fn new(face: FontFace, size: f32) -> Self {
        Self {
            face,
            size,
            gray: 0.0,
        }
    }

    pub const fn with_gray(self, gray: f32) -> Self {
        Self { gray, ..self }
    }

    pub fn line_height(&self) -> f32 {
        self.size * 1.2
    }
}

pub const BANNER_TITLE: TextStyle = TextStyle::new(FontFace::HelveticaBold, 12.0);
pub const BANNER_META: TextStyle = TextStyle::new(FontFace::Helvetica, 9.0);
pub const LABEL: TextStyle = TextStyle::new(FontFace::HelveticaBold, 8.0);
pub const VALUE: TextStyle = TextStyle::new(FontFace::Helvetica, 9.0);
pub const SMALL: TextStyle = TextStyle::new(FontFace::Helvetica, 7.5);
pub const TABLE_HEADER: TextStyle = TextStyle::new(FontFace::HelveticaBold, 8.0);
pub const TOTAL: TextStyle = TextStyle::new(FontFace::HelveticaBold, 11.0);
pub const MUTED: TextStyle = TextStyle::new(FontFace::Helvetica, 9.0).with_gray(0.45);
pub const LINK: TextStyle = TextStyle::new(FontFace::HelveticaOblique, 7.5).with_gray(0.25);
