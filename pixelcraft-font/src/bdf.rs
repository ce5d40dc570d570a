use std::str::{FromStr, SplitWhitespace};

use compact_str::{CompactString, ToCompactString};

use crate::BdfError;

/// A BDF bounding box: size plus offset from the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundingBox {
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
    /// Horizontal offset of the lower-left corner
    pub x: i32,
    /// Vertical offset of the lower-left corner from the baseline
    pub y: i32,
}

/// A single glyph of a [`BdfFont`].
///
/// The bitmap is row-packed, most significant bit leftmost, `stride` bytes
/// per row and one row per pixel of `bbx.height`. Any positive x offset has
/// already been applied to the bitmap, so column 0 is the left edge of the
/// character cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BdfGlyph {
    /// The glyph name from `STARTCHAR`
    pub name: CompactString,
    /// The glyph bounding box (`BBX`), with the x offset normalised to 0 or more
    pub bbx: BoundingBox,
    /// Horizontal advance in pixels (`DWIDTH`), widened to cover the bitmap
    pub advance: i32,
    stride: usize,
    bitmap: Vec<u8>,
}

impl BdfGlyph {
    /// Bytes per bitmap row.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns bitmap row `y`, or `None` when `y` lies outside the glyph.
    pub fn row(&self, y: i32) -> Option<&[u8]> {
        if y < 0 || y >= self.bbx.height {
            return None;
        }
        let start = y as usize * self.stride;
        self.bitmap.get(start..start + self.stride)
    }

    /// Tests the bit at column `x` of row `y`.
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        if x < 0 {
            return false;
        }
        let x = x as usize;
        self.row(y)
            .and_then(|row| row.get(x / 8))
            .is_some_and(|byte| byte & (0x80 >> (x % 8)) != 0)
    }
}

/// A bitmap font loaded from the BDF text format.
///
/// `glyphs` and `encodings` are parallel: `encodings[i]` is the Unicode
/// codepoint drawn by `glyphs[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BdfFont {
    /// The font name from the `FONT` record, empty when absent
    pub name: CompactString,
    /// The global font bounding box (`FONTBOUNDINGBOX`)
    pub bounding_box: BoundingBox,
    /// Number of characters announced by `CHARS`
    pub declared_chars: usize,
    /// Glyphs in file order
    pub glyphs: Vec<BdfGlyph>,
    /// Codepoint of each glyph, parallel to `glyphs`
    pub encodings: Vec<u32>,
}

impl BdfFont {
    /// Largest magnitude accepted for any bounding box field.
    pub const MAX_EXTENT: i32 = 4096;

    /// Encoding stored for glyphs with a negative `ENCODING`; never matches a lookup.
    pub const UNENCODED: u32 = u32::MAX;

    /// Parses a font from BDF source text.
    ///
    /// # Errors
    /// Returns a [`BdfError`] when the bounding box or character count is
    /// missing, when a glyph has a bitmap but no `DWIDTH`, when there are
    /// more bitmaps than announced characters, when a bounding box field
    /// exceeds [`BdfFont::MAX_EXTENT`], or when a numeric or hex field is
    /// malformed.
    pub fn parse(source: &str) -> Result<Self, BdfError> {
        Parser::default().parse(source)
    }

    /// Number of glyphs in the font.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns true if the font has no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Index of the glyph drawing `codepoint`, found by linear scan.
    pub fn glyph_index(&self, codepoint: u32) -> Option<usize> {
        self.encodings.iter().position(|&e| e == codepoint)
    }

    /// Returns the glyph for `codepoint`, falling back to the first glyph.
    pub fn glyph(&self, codepoint: u32) -> Option<&BdfGlyph> {
        let index = self.glyph_index(codepoint).unwrap_or(0);
        self.glyphs.get(index)
    }
}

impl FromStr for BdfFont {
    type Err = BdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Glyph under construction between `STARTCHAR` and `ENDCHAR`.
#[derive(Debug, Default)]
struct PendingGlyph {
    name: CompactString,
    encoding: u32,
    advance: Option<i32>,
    bbx: BoundingBox,
    rows: Option<Vec<Vec<u8>>>,
}

#[derive(Debug, Default)]
struct Parser {
    name: CompactString,
    bounding_box: BoundingBox,
    declared_chars: Option<usize>,
    glyphs: Vec<BdfGlyph>,
    encodings: Vec<u32>,
    pending: PendingGlyph,
}

impl Parser {
    fn parse(mut self, source: &str) -> Result<BdfFont, BdfError> {
        for (index, line) in source.lines().enumerate() {
            let line_no = index + 1;
            let mut tokens = line.split_whitespace();
            let Some(keyword) = tokens.next() else {
                continue;
            };

            if self.declared_chars.is_none() {
                self.header_record(line_no, keyword, line, &mut tokens)?;
            } else {
                self.glyph_record(line_no, keyword, &mut tokens)?;
            }
        }

        let declared_chars = self.validate_header()?;
        Ok(BdfFont {
            name: self.name,
            bounding_box: self.bounding_box,
            declared_chars,
            glyphs: self.glyphs,
            encodings: self.encodings,
        })
    }

    fn header_record(
        &mut self,
        line_no: usize,
        keyword: &str,
        line: &str,
        tokens: &mut SplitWhitespace<'_>,
    ) -> Result<(), BdfError> {
        if keyword.eq_ignore_ascii_case("FONT") {
            self.name = line.trim()[keyword.len()..].trim().to_compact_string();
        } else if keyword.eq_ignore_ascii_case("FONTBOUNDINGBOX") {
            self.bounding_box = read_bbox(line_no, keyword, tokens)?;
        } else if keyword.eq_ignore_ascii_case("CHARS") {
            let chars = read_int(line_no, keyword, tokens)?;
            self.declared_chars = Some(chars.max(0) as usize);
            self.validate_header()?;
        }
        Ok(())
    }

    fn validate_header(&self) -> Result<usize, BdfError> {
        if self.bounding_box.width <= 0 || self.bounding_box.height <= 0 {
            return Err(BdfError::missing_char_size());
        }
        match self.declared_chars {
            Some(n) if n > 0 => Ok(n),
            _ => Err(BdfError::missing_char_count()),
        }
    }

    fn glyph_record(
        &mut self,
        line_no: usize,
        keyword: &str,
        tokens: &mut SplitWhitespace<'_>,
    ) -> Result<(), BdfError> {
        let is = |name: &str| keyword.eq_ignore_ascii_case(name);

        if let Some(rows) = self.pending.rows.as_mut()
            && !is("ENDCHAR")
        {
            rows.push(parse_hex_row(line_no, keyword)?);
            return Ok(());
        }

        if is("STARTCHAR") {
            self.pending = PendingGlyph {
                name: tokens.next().unwrap_or_default().to_compact_string(),
                ..PendingGlyph::default()
            };
        } else if is("ENCODING") {
            let encoding = read_int(line_no, keyword, tokens)?;
            self.pending.encoding = u32::try_from(encoding).unwrap_or(BdfFont::UNENCODED);
        } else if is("DWIDTH") {
            self.pending.advance = Some(read_int(line_no, keyword, tokens)?);
        } else if is("BBX") {
            self.pending.bbx = read_bbox(line_no, keyword, tokens)?;
        } else if is("BITMAP") {
            if self.glyphs.len() >= self.declared_chars.unwrap_or(0) {
                return Err(BdfError::too_many_bitmaps(line_no));
            }
            if self.pending.advance.is_none() {
                return Err(BdfError::unknown_char_width(line_no));
            }
            self.pending.rows = Some(Vec::new());
        } else if is("ENDCHAR") {
            self.finish_glyph();
        }
        Ok(())
    }

    fn finish_glyph(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        let Some(rows) = pending.rows else {
            return; // ENDCHAR without BITMAP
        };

        let mut bbx = pending.bbx;
        // bbx fields are bounded by MAX_EXTENT; DWIDTH is not
        let mut advance = pending.advance.unwrap_or(0);
        if bbx.x < 0 {
            advance = advance.saturating_sub(bbx.x);
            bbx.x = 0;
        }
        advance = advance.max(bbx.x + bbx.width);

        let stride = ((bbx.x + bbx.width).max(0) as usize)
            .div_ceil(8)
            .max(self.cell_stride());
        let height = bbx.height.max(0) as usize;

        let mut bitmap = vec![0u8; stride * height];
        for (row, src) in bitmap.chunks_exact_mut(stride).zip(rows.iter()) {
            let n = src.len().min(stride);
            row[..n].copy_from_slice(&src[..n]);
            shift_row_right(row, bbx.x as usize);
        }

        self.glyphs.push(BdfGlyph {
            name: pending.name,
            bbx,
            advance,
            stride,
            bitmap,
        });
        self.encodings.push(pending.encoding);
    }

    fn cell_stride(&self) -> usize {
        (self.bounding_box.width.max(0) as usize).div_ceil(8)
    }
}

/// Shifts a row-packed bitmap row right by `bits`, dropping bits shifted past the end.
fn shift_row_right(row: &mut [u8], bits: usize) {
    if bits == 0 {
        return;
    }
    let (bytes, bits) = (bits / 8, (bits % 8) as u32);
    for i in (0..row.len()).rev() {
        let hi = i.checked_sub(bytes).map_or(0, |j| row[j]);
        let lo = i.checked_sub(bytes + 1).map_or(0, |j| row[j]);
        row[i] = if bits == 0 {
            hi
        } else {
            (hi >> bits) | (lo << (8 - bits))
        };
    }
}

/// Parses a hex scanline. A trailing odd digit is stored as its own nibble value.
fn parse_hex_row(line_no: usize, hex: &str) -> Result<Vec<u8>, BdfError> {
    let digit = |c: u8| {
        (c as char)
            .to_digit(16)
            .map(|d| d as u8)
            .ok_or_else(|| BdfError::at(line_no, format!("invalid hex digit in bitmap row '{hex}'")))
    };

    hex.as_bytes()
        .chunks(2)
        .map(|pair| match *pair {
            [hi, lo] => Ok(digit(hi)? << 4 | digit(lo)?),
            [single] => digit(single),
            _ => unreachable!("chunks(2) yields one or two bytes"),
        })
        .collect()
}

fn read_int(
    line_no: usize,
    keyword: &str,
    tokens: &mut SplitWhitespace<'_>,
) -> Result<i32, BdfError> {
    tokens
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| BdfError::at(line_no, format!("expected integer after {keyword}")))
}

fn read_bbox(
    line_no: usize,
    keyword: &str,
    tokens: &mut SplitWhitespace<'_>,
) -> Result<BoundingBox, BdfError> {
    let bbox = BoundingBox {
        width: read_int(line_no, keyword, tokens)?,
        height: read_int(line_no, keyword, tokens)?,
        x: read_int(line_no, keyword, tokens)?,
        y: read_int(line_no, keyword, tokens)?,
    };

    let limit = -BdfFont::MAX_EXTENT..=BdfFont::MAX_EXTENT;
    if [bbox.width, bbox.height, bbox.x, bbox.y].iter().all(|v| limit.contains(v)) {
        Ok(bbox)
    } else {
        Err(BdfError::extent_out_of_range(line_no, keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FONT: &str = "\
STARTFONT 2.1
FONT -misc-tiny-medium-r-normal--8-80-75-75-c-60-iso10646-1
SIZE 8 75 75
FONTBOUNDINGBOX 6 8 0 -1
STARTPROPERTIES 1
FONT_ASCENT 7
ENDPROPERTIES
CHARS 3
STARTCHAR A
ENCODING 65
SWIDTH 750 0
DWIDTH 6 0
BBX 5 7 0 0
BITMAP
20
50
88
F8
88
88
88
ENDCHAR
STARTCHAR period
ENCODING 46
DWIDTH 6 0
BBX 1 1 2 0
BITMAP
80
ENDCHAR
STARTCHAR bar
ENCODING 124
DWIDTH 3 0
BBX 1 8 -1 -1
BITMAP
80
80
80
80
80
80
80
80
ENDCHAR
ENDFONT
";

    #[test]
    fn parses_header_and_glyphs() {
        let font = BdfFont::parse(FONT).unwrap();

        assert_eq!(
            font.name,
            "-misc-tiny-medium-r-normal--8-80-75-75-c-60-iso10646-1"
        );
        assert_eq!(font.bounding_box, BoundingBox { width: 6, height: 8, x: 0, y: -1 });
        assert_eq!(font.declared_chars, 3);
        assert_eq!(font.len(), 3);
        assert_eq!(font.encodings, vec![65, 46, 124]);
        assert_eq!(font.glyphs[0].name, "A");
        assert_eq!(font.glyphs[0].advance, 6);
        assert_eq!(font.glyphs[0].row(3), Some(&[0xF8][..]));
    }

    #[test]
    fn positive_x_offset_shifts_bitmap() {
        let font = BdfFont::parse(FONT).unwrap();
        let period = font.glyph('.' as u32).unwrap();

        assert_eq!(period.row(0), Some(&[0x20][..]));
        assert!(period.is_set(2, 0));
        assert!(!period.is_set(0, 0));
    }

    #[test]
    fn negative_x_offset_is_clamped_and_widens_advance() {
        let font = BdfFont::parse(FONT).unwrap();
        let bar = font.glyph('|' as u32).unwrap();

        assert_eq!(bar.bbx.x, 0);
        assert_eq!(bar.advance, 4);
        assert!(bar.is_set(0, 7));
    }

    #[test]
    fn lookup_falls_back_to_first_glyph() {
        let font = BdfFont::parse(FONT).unwrap();

        assert_eq!(font.glyph_index('A' as u32), Some(0));
        assert_eq!(font.glyph_index('Z' as u32), None);
        assert_eq!(font.glyph('Z' as u32).unwrap().name, "A");
    }

    #[test]
    fn shift_carries_across_bytes() {
        let mut row = [0b1000_0001, 0b1000_0000, 0];
        shift_row_right(&mut row, 3);
        assert_eq!(row, [0b0001_0000, 0b0011_0000, 0]);

        let mut row = [0xFF, 0x00];
        shift_row_right(&mut row, 8);
        assert_eq!(row, [0x00, 0xFF]);
    }

    #[test]
    fn hex_rows() {
        assert_eq!(parse_hex_row(1, "F8"), Ok(vec![0xF8]));
        assert_eq!(parse_hex_row(1, "0fA0"), Ok(vec![0x0F, 0xA0]));
        assert_eq!(parse_hex_row(1, "ABC"), Ok(vec![0xAB, 0x0C]));
        assert!(parse_hex_row(7, "G0").is_err());
    }

    #[test]
    fn missing_bounding_box() {
        let err = BdfFont::parse("STARTFONT 2.1\nCHARS 1\n").unwrap_err();
        assert_eq!(err, BdfError::missing_char_size());
    }

    #[test]
    fn missing_char_count() {
        let err = BdfFont::parse("FONTBOUNDINGBOX 8 8 0 0\n").unwrap_err();
        assert_eq!(err, BdfError::missing_char_count());

        let err = BdfFont::parse("FONTBOUNDINGBOX 8 8 0 0\nCHARS 0\n").unwrap_err();
        assert_eq!(err, BdfError::missing_char_count());
    }

    #[test]
    fn more_bitmaps_than_chars() {
        let source = "FONTBOUNDINGBOX 8 8 0 0\nCHARS 1\n\
            STARTCHAR a\nENCODING 97\nDWIDTH 8 0\nBBX 8 1 0 0\nBITMAP\nFF\nENDCHAR\n\
            STARTCHAR b\nENCODING 98\nDWIDTH 8 0\nBBX 8 1 0 0\nBITMAP\nFF\nENDCHAR\n";
        let err = BdfFont::parse(source).unwrap_err();
        assert_eq!(err, BdfError::too_many_bitmaps(14));
    }

    #[test]
    fn bitmap_requires_dwidth() {
        let source = "FONTBOUNDINGBOX 8 8 0 0\nCHARS 1\n\
            STARTCHAR a\nENCODING 97\nBBX 8 1 0 0\nBITMAP\nFF\nENDCHAR\n";
        let err = BdfFont::parse(source).unwrap_err();
        assert_eq!(err, BdfError::unknown_char_width(6));
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let source = "fontboundingbox 8 8 0 0\nchars 1\n\
            startchar a\nencoding 97\ndwidth 8 0\nbbx 8 1 0 0\nbitmap\n81\nendchar\n";
        let font: BdfFont = source.parse().unwrap();
        assert!(font.glyphs[0].is_set(0, 0));
        assert!(font.glyphs[0].is_set(7, 0));
        assert!(!font.glyphs[0].is_set(1, 0));
    }

    #[test]
    fn extreme_bounding_boxes_are_rejected() {
        let glyph = |bbx: &str| {
            format!(
                "FONTBOUNDINGBOX 8 8 0 0\nCHARS 1\n\
                 STARTCHAR a\nENCODING 97\nDWIDTH 8 0\nBBX {bbx}\nBITMAP\n80\nENDCHAR\n"
            )
        };

        let err = BdfFont::parse(&glyph("1 1 2147483647 0")).unwrap_err();
        assert_eq!(err, BdfError::extent_out_of_range(6, "BBX"));
        assert!(BdfFont::parse(&glyph("1 -2147483648 0 0")).is_err());
        assert!(BdfFont::parse(&glyph("1 1 0 4096")).is_ok());

        let err = BdfFont::parse("FONTBOUNDINGBOX 8 8 0 -2147483648\nCHARS 1\n").unwrap_err();
        assert_eq!(err, BdfError::extent_out_of_range(1, "FONTBOUNDINGBOX"));
    }

    #[test]
    fn extreme_dwidth_saturates() {
        let source = "FONTBOUNDINGBOX 8 8 0 0\nCHARS 1\n\
            STARTCHAR a\nENCODING 97\nDWIDTH 2147483647 0\nBBX 1 1 -3 0\nBITMAP\n80\nENDCHAR\n";
        let font = BdfFont::parse(source).unwrap();
        assert_eq!(font.glyphs[0].advance, i32::MAX);
    }

    #[test]
    fn malformed_integer() {
        let err = BdfFont::parse("FONTBOUNDINGBOX 8 x 0 0\n").unwrap_err();
        assert_eq!(err.line, 1);
    }
}
