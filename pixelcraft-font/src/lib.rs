//! Font data for the pixelcraft software renderer.
//!
//! This crate knows nothing about surfaces. It provides the built-in 8x8
//! glyph table, a lenient UTF-8 decoder used by the text layout, and a
//! parser for BDF (Glyph Bitmap Distribution Format) fonts.

mod bdf;
pub mod builtin;
mod utf8;

pub use bdf::{BdfFont, BdfGlyph, BoundingBox};
pub use utf8::{REPLACEMENT, Utf8Char, decode_utf8};

/// Error raised while parsing a BDF font.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct BdfError {
    /// 1-based line number where parsing failed; 0 when the whole file is at fault
    pub line: usize,
    /// What went wrong
    pub message: String,
}

impl BdfError {
    pub(crate) fn at(line: usize, message: impl Into<String>) -> Self {
        Self { line, message: message.into() }
    }

    pub(crate) fn missing_char_size() -> Self {
        Self::at(0, "no character size given (FONTBOUNDINGBOX)")
    }

    pub(crate) fn missing_char_count() -> Self {
        Self::at(0, "unknown number of characters (CHARS)")
    }

    pub(crate) fn too_many_bitmaps(line: usize) -> Self {
        Self::at(line, "more bitmaps than characters")
    }

    pub(crate) fn unknown_char_width(line: usize) -> Self {
        Self::at(line, "BITMAP before DWIDTH; unknown character width")
    }

    pub(crate) fn extent_out_of_range(line: usize, keyword: &str) -> Self {
        Self::at(line, format!("{keyword} value outside +/-{}", crate::BdfFont::MAX_EXTENT))
    }
}
