//! The built-in fixed 8x8 font.
//!
//! Glyphs are stored one byte per row; bit `j` of a row byte is column `j`
//! counted from the left. The table covers printable ASCII, block elements,
//! box drawing, Greek, Hiragana, a private-use block and Latin-1, plus a
//! handful of individual codepoints.

mod glyphs;

use std::ops::RangeInclusive;

pub use glyphs::{GLYPH_COUNT, GLYPHS};

/// Glyph cell width in pixels.
pub const GLYPH_WIDTH: i32 = 8;
/// Glyph cell height in pixels.
pub const GLYPH_HEIGHT: i32 = 8;
/// Vertical advance applied for every newline.
pub const LINE_HEIGHT: i32 = 10;

/// Contiguous codepoint ranges and the table index of their first glyph.
#[rustfmt::skip]
const RANGES: [(RangeInclusive<u32>, usize); 7] = [
    (0x0020..=0x007E, 0),   // Basic Latin
    (0x2580..=0x259F, 95),  // Block Elements
    (0x2500..=0x257F, 127), // Box Drawing
    (0x0390..=0x03C9, 255), // Greek
    (0x3040..=0x309F, 313), // Hiragana
    (0xE541..=0xE55A, 409), // Private use (SGA)
    (0x00A1..=0x00FF, 435), // Latin-1 Supplement
];

/// Codepoints outside [`RANGES`] with a glyph of their own, from index 530.
const EXTRA_CODEPOINTS: [u32; 10] = [
    0x20A7, // peseta sign
    0x0192, // f with hook
    0x2376, // APL alpha underbar
    0x235C, // APL circle underbar
    0x2310, // reversed not sign
    0x2264, // less-than or equal to
    0x2265, // greater-than or equal to
    0x0060, // grave accent
    0x1EF2, // Y with grave
    0x1EF3, // y with grave
];
const EXTRA_BASE: usize = 530;

/// Maps a Unicode scalar value to its row in [`GLYPHS`].
///
/// Codepoints without a glyph map to 0 (the blank space glyph).
pub fn glyph_index(codepoint: u32) -> usize {
    RANGES
        .iter()
        .find(|(range, _)| range.contains(&codepoint))
        .map(|(range, base)| base + (codepoint - range.start()) as usize)
        .or_else(|| {
            EXTRA_CODEPOINTS
                .iter()
                .position(|&cp| cp == codepoint)
                .map(|i| EXTRA_BASE + i)
        })
        .unwrap_or(0)
}

/// Returns the 8x8 bitmap for a codepoint.
pub fn glyph(codepoint: u32) -> &'static [u8; 8] {
    &GLYPHS[glyph_index(codepoint)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_maps_to_leading_rows() {
        assert_eq!(glyph_index(' ' as u32), 0);
        assert_eq!(glyph_index('A' as u32), 33);
        assert_eq!(glyph_index('~' as u32), 94);
        assert_eq!(glyph('A' as u32), &[0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00]);
    }

    #[test]
    fn block_ranges_are_split() {
        assert_eq!(glyph_index(0x2580), 95); // upper half block
        assert_eq!(glyph_index(0x259F), 126);
        assert_eq!(glyph_index(0x2500), 127); // light horizontal
        assert_eq!(glyph_index(0x257F), 254);
    }

    #[test]
    fn other_scripts() {
        assert_eq!(glyph_index(0x0390), 255);
        assert_eq!(glyph_index(0x03C9), 312); // omega
        assert_eq!(glyph_index(0x3040), 313);
        assert_eq!(glyph_index(0x309F), 408);
        assert_eq!(glyph_index(0xE541), 409);
        assert_eq!(glyph_index(0xE55A), 434);
        assert_eq!(glyph_index(0x00A1), 435);
        assert_eq!(glyph_index(0x00E9), 435 + 0xE9 - 0xA1);
        assert_eq!(glyph_index(0x00FF), 529);
    }

    #[test]
    fn extra_codepoints_follow_the_ranges() {
        assert_eq!(glyph_index(0x20A7), 530);
        assert_eq!(glyph_index(0x1EF3), 539);
        assert_eq!(glyph_index(0x2264), 535);
    }

    #[test]
    fn unknown_codepoints_render_blank() {
        assert_eq!(glyph_index(0x1F680), 0);
        assert_eq!(glyph_index(0x0000), 0);
        assert_eq!(glyph_index(0x007F), 0);
        assert_eq!(glyph(0x4E2D), &[0; 8]);
    }

    #[test]
    fn every_index_is_in_the_table() {
        let max = (0..0x11000)
            .map(glyph_index)
            .max()
            .unwrap();
        assert_eq!(max, GLYPH_COUNT - 1);
    }
}
