//! Text drawing with the built-in 8x8 font or a loaded BDF font.
//!
//! Both renderers share one [`tokenize`]r: `\n` starts a new line at the
//! original x, and `\x0c(r,g,b[,a])` / `\x08(r,g,b[,a])` switch the
//! foreground / background color mid-string. A background with zero alpha
//! leaves the destination untouched.

mod escape;

use std::path::Path;

use pixelcraft_font::{
    BdfFont, BdfGlyph,
    builtin::{self, GLYPH_HEIGHT, GLYPH_WIDTH, LINE_HEIGHT},
};

pub use escape::{BACKGROUND_ESCAPE, FOREGROUND_ESCAPE, Token, Tokens, tokenize};

use crate::{Color, Error, Result, Surface, codec::read_file};

/// Extra vertical space between BDF text lines, in pixels.
pub const BDF_LINE_GAP: i32 = 2;

impl Surface {
    /// Draws `text` with the built-in font, top-left corner at `(x, y)`.
    ///
    /// Every glyph covers an 8x8 cell: set bits blend `fg`, clear bits blend
    /// `bg`. Glyphs advance 8 pixels and lines 10.
    pub fn write_text(&mut self, x: i32, y: i32, fg: Color, bg: Color, text: &str) {
        let mut pen = Pen::new(x, y, fg, bg);
        for token in tokenize(text) {
            if let Token::Glyph(cp) = token {
                self.draw_builtin_glyph(pen.x, pen.y, builtin::glyph(cp), pen.fg, pen.bg);
                pen.x = pen.x.saturating_add(GLYPH_WIDTH);
            } else {
                pen.apply(token, LINE_HEIGHT);
            }
        }
    }

    /// Draws `text` with a BDF font, top-left corner at `(x, y)`.
    ///
    /// Each glyph paints the whole font bounding box cell, positioned on the
    /// font baseline, and advances by its own `DWIDTH`. Lines are the font
    /// height plus [`BDF_LINE_GAP`] apart. Codepoints missing from the font
    /// draw its first glyph.
    pub fn write_bdf_text(
        &mut self,
        font: &BdfFont,
        x: i32,
        y: i32,
        fg: Color,
        bg: Color,
        text: &str,
    ) {
        let line_height = bdf_line_height(font);
        let mut pen = Pen::new(x, y, fg, bg);
        for token in tokenize(text) {
            if let Token::Glyph(cp) = token {
                let Some(glyph) = font.glyph(cp) else {
                    continue;
                };
                self.draw_bdf_glyph(font, glyph, pen.x, pen.y, pen.fg, pen.bg);
                pen.x = pen.x.saturating_add(glyph.advance);
            } else {
                pen.apply(token, line_height);
            }
        }
    }

    fn draw_builtin_glyph(&mut self, x: i32, y: i32, rows: &[u8; 8], fg: Color, bg: Color) {
        for (dy, &bits) in (0..GLYPH_HEIGHT).zip(rows) {
            for dx in 0..GLYPH_WIDTH {
                let color = if bits & (1 << dx) != 0 { fg } else { bg };
                self.paint(x.saturating_add(dx), y.saturating_add(dy), color);
            }
        }
    }

    fn draw_bdf_glyph(
        &mut self,
        font: &BdfFont,
        glyph: &BdfGlyph,
        x: i32,
        y: i32,
        fg: Color,
        bg: Color,
    ) {
        let cell = font.bounding_box;
        let y_offset = cell
            .height
            .saturating_sub(glyph.bbx.height)
            .saturating_add(cell.y.saturating_sub(glyph.bbx.y));

        // only the part of the cell that lands on the surface
        let (w, h) = (self.width() as i32, self.height() as i32);
        let cols = x.saturating_neg().max(0)..cell.width.min(w.saturating_sub(x));
        let rows = y.saturating_neg().max(0)..cell.height.min(h.saturating_sub(y));
        for dy in rows {
            for dx in cols.clone() {
                let set = glyph.is_set(dx, dy.saturating_sub(y_offset));
                self.paint(x + dx, y + dy, if set { fg } else { bg });
            }
        }
    }

    // zero alpha never paints, even when blending is disabled
    fn paint(&mut self, x: i32, y: i32, color: Color) {
        if color.a() != 0 {
            self.blend(x, y, color);
        }
    }
}

/// Running layout state shared by both fonts.
struct Pen {
    origin_x: i32,
    x: i32,
    y: i32,
    fg: Color,
    bg: Color,
}

impl Pen {
    fn new(x: i32, y: i32, fg: Color, bg: Color) -> Self {
        Self { origin_x: x, x, y, fg, bg }
    }

    fn apply(&mut self, token: Token, line_height: i32) {
        match token {
            Token::Newline => {
                self.x = self.origin_x;
                self.y = self.y.saturating_add(line_height);
            }
            Token::Foreground(c) => self.fg = c,
            Token::Background(c) => self.bg = c,
            Token::Glyph(_) => {}
        }
    }
}

/// Size of `text` in built-in font cells: `(columns, lines)`.
///
/// Columns is the glyph count of the longest line; color escapes take no
/// space. Any string, even an empty one, has at least one line.
#[must_use]
pub fn measure_text(text: &str) -> (u32, u32) {
    let (mut cols, mut lines, mut current) = (0u32, 1u32, 0u32);
    for token in tokenize(text) {
        match token {
            Token::Glyph(_) => current += 1,
            Token::Newline => {
                cols = cols.max(current);
                current = 0;
                lines += 1;
            }
            Token::Foreground(_) | Token::Background(_) => {}
        }
    }
    (cols.max(current), lines)
}

/// Renders `text` with the built-in font into a new surface of exactly
/// `columns * 8` by `lines * 10` pixels, pre-filled with `bg`.
///
/// # Errors
/// [`Error::InvalidParameters`] when the text has no glyphs,
/// [`Error::OutOfMemory`] on allocation failure.
pub fn render_text(fg: Color, bg: Color, text: &str) -> Result<Surface> {
    let (cols, lines) = measure_text(text);
    let width = cols.saturating_mul(GLYPH_WIDTH as u32);
    let height = lines.saturating_mul(LINE_HEIGHT as u32);

    let mut surface = Surface::new(width, height)?;
    surface.fill(opaque_or_clear(bg));
    surface.write_text(0, 0, fg, bg, text);
    Ok(surface)
}

/// Pixel size of `text` drawn with `font`: the widest line's summed glyph
/// advances, and one font line height per line.
#[must_use]
pub fn measure_bdf_text(font: &BdfFont, text: &str) -> (u32, u32) {
    let (mut width, mut lines, mut current) = (0i64, 1i64, 0i64);
    for token in tokenize(text) {
        match token {
            Token::Glyph(cp) => {
                current += font.glyph(cp).map_or(0, |g| i64::from(g.advance));
            }
            Token::Newline => {
                width = width.max(current);
                current = 0;
                lines += 1;
            }
            Token::Foreground(_) | Token::Background(_) => {}
        }
    }

    let height = lines * i64::from(bdf_line_height(font));
    (clamp_u32(width.max(current)), clamp_u32(height))
}

/// Renders `text` with `font` into a new surface sized by
/// [`measure_bdf_text`], pre-filled with `bg`.
///
/// # Errors
/// [`Error::InvalidParameters`] when the text measures zero pixels,
/// [`Error::OutOfMemory`] on allocation failure.
pub fn render_bdf_text(font: &BdfFont, fg: Color, bg: Color, text: &str) -> Result<Surface> {
    let (width, height) = measure_bdf_text(font, text);
    let mut surface = Surface::new(width, height)?;
    surface.fill(opaque_or_clear(bg));
    surface.write_bdf_text(font, 0, 0, fg, bg, text);
    Ok(surface)
}

/// Parses BDF source text.
///
/// # Errors
/// [`Error::InvalidFormat`] describing the first offending line.
pub fn parse_bdf(source: &str) -> Result<BdfFont> {
    BdfFont::parse(source).map_err(|e| Error::font_parse(None, &e))
}

/// Reads and parses a BDF font file.
///
/// # Errors
/// [`Error::FileOpen`] when the file cannot be read and
/// [`Error::InvalidFormat`] when it is not UTF-8 or not a valid font.
pub fn load_bdf(path: impl AsRef<Path>) -> Result<BdfFont> {
    let path = path.as_ref();
    let data = read_file(path)?;
    let source = String::from_utf8(data).map_err(|e| {
        Error::invalid_format(format!("BDF font {} is not UTF-8: {e}", path.display()))
    })?;

    let font = BdfFont::parse(&source).map_err(|e| Error::font_parse(Some(path), &e))?;
    tracing::debug!(
        path = %path.display(),
        name = %font.name,
        glyphs = font.len(),
        "loaded BDF font"
    );
    Ok(font)
}

fn bdf_line_height(font: &BdfFont) -> i32 {
    font.bounding_box.height.saturating_add(BDF_LINE_GAP)
}

fn opaque_or_clear(bg: Color) -> Color {
    if bg.a() == 0 { Color::TRANSPARENT } else { bg }
}

fn clamp_u32(v: i64) -> u32 {
    u32::try_from(v.max(0)).unwrap_or(u32::MAX)
}
