//! Fonts for label text.
//!
//! A label is drawn either with a scalable TTF/OTF font or, when none could
//! be loaded, with the ASCII bitmap fonts compiled into `embedded-graphics`.
//! The built-in font is always available.

use ab_glyph::FontVec;
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{FONT_6X12, FONT_9X15, FONT_10X20};

use crate::ImageEngineError;

/// Font used to draw label text.
pub enum LabelFont {
    Scalable(FontVec),
    Builtin,
}

impl LabelFont {
    /// Parse TTF/OTF bytes (the first face of a collection).
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, ImageEngineError> {
        Ok(Self::Scalable(FontVec::try_from_vec(data)?))
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin)
    }
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalable(_) => f.write_str("LabelFont::Scalable"),
            Self::Builtin => f.write_str("LabelFont::Builtin"),
        }
    }
}

/// Closest built-in bitmap font for a pixel size.
pub fn builtin_font_for_size(size: f32) -> &'static MonoFont<'static> {
    if size >= 20.0 {
        &FONT_10X20
    } else if size >= 15.0 {
        &FONT_9X15
    } else {
        &FONT_6X12
    }
}
