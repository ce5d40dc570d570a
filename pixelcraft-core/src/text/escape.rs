use pixelcraft_font::decode_utf8;

use crate::Color;

/// Form feed; `\x0c(r,g,b[,a])` switches the foreground color.
pub const FOREGROUND_ESCAPE: char = '\x0c';
/// Backspace; `\x08(r,g,b[,a])` switches the background color.
pub const BACKGROUND_ESCAPE: char = '\x08';

/// Longest accepted color span, parentheses included.
const MAX_COLOR_SPAN: usize = 17;

/// One step of text layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Draw the glyph for this codepoint and advance
    Glyph(u32),
    /// Return to the starting column on the next line
    Newline,
    /// Subsequent glyphs use this foreground
    Foreground(Color),
    /// Subsequent glyphs use this background
    Background(Color),
}

/// Splits text into layout [`Token`]s.
///
/// A color escape that is not followed by a well-formed `(r,g,b[,a])` span
/// is dropped on its own and the characters after it are drawn as text.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { rest: text.as_bytes() }
}

/// Iterator returned by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a [u8],
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let ch = decode_utf8(self.rest)?;
            let escape: fn(Color) -> Token = match ch.scalar {
                0x0A => {
                    self.rest = &self.rest[1..];
                    return Some(Token::Newline);
                }
                cp if cp == FOREGROUND_ESCAPE as u32 => Token::Foreground,
                cp if cp == BACKGROUND_ESCAPE as u32 => Token::Background,
                cp => {
                    self.rest = &self.rest[ch.len..];
                    return Some(Token::Glyph(cp));
                }
            };

            match parse_color(&self.rest[1..]) {
                Some((color, used)) => {
                    self.rest = &self.rest[1 + used..];
                    return Some(escape(color));
                }
                None => self.rest = &self.rest[1..],
            }
        }
    }
}

/// Parses `(r,g,b[,a])` at the start of `bytes`, returning the color and
/// the number of bytes consumed.
///
/// Components are one to three decimal digits; alpha defaults to 255 and
/// values past 255 keep their low 8 bits.
fn parse_color(bytes: &[u8]) -> Option<(Color, usize)> {
    if bytes.first() != Some(&b'(') {
        return None;
    }
    let close = bytes
        .iter()
        .take(MAX_COLOR_SPAN)
        .position(|&b| b == b')')?;

    let mut channels = [0, 0, 0, 255];
    let mut count = 0;
    for part in bytes[1..close].split(|&b| b == b',') {
        if count == channels.len() || part.is_empty() || part.len() > 3 {
            return None;
        }
        channels[count] = part.iter().try_fold(0i32, |acc, &b| {
            b.is_ascii_digit().then(|| acc * 10 + i32::from(b - b'0'))
        })?;
        count += 1;
    }
    if count < 3 {
        return None;
    }

    let [r, g, b, a] = channels;
    Some((Color::from_i32_channels(r, g, b, a), close + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<Token> {
        tokenize(text).collect()
    }

    #[test]
    fn plain_text_and_newlines() {
        assert_eq!(
            tokens("a\nb"),
            vec![Token::Glyph('a' as u32), Token::Newline, Token::Glyph('b' as u32)]
        );
        assert_eq!(tokens("é"), vec![Token::Glyph(0xE9)]);
        assert!(tokens("").is_empty());
    }

    #[test]
    fn color_escapes() {
        assert_eq!(
            tokens("\x0c(255,0,0)x\x08(1,2,3,4)"),
            vec![
                Token::Foreground(Color::rgba(255, 0, 0, 255)),
                Token::Glyph('x' as u32),
                Token::Background(Color::rgba(1, 2, 3, 4)),
            ]
        );
    }

    #[test]
    fn oversized_components_are_truncated() {
        assert_eq!(tokens("\x0c(256,999,0)"), vec![Token::Foreground(Color::rgba(0, 0xE7, 0, 255))]);
    }

    #[test]
    fn malformed_escape_skips_one_char() {
        assert_eq!(tokens("\x0cA"), vec![Token::Glyph('A' as u32)]);
        assert_eq!(
            tokens("\x0c(1,2)"),
            "(1,2)".chars().map(|c| Token::Glyph(c as u32)).collect::<Vec<_>>()
        );
        assert_eq!(tokens("\x08(1,x,3)").first(), Some(&Token::Glyph('(' as u32)));
        assert_eq!(tokens("\x08(1,2,3,4,5)").len(), "(1,2,3,4,5)".len());
        assert_eq!(tokens("\x0c").len(), 0);
    }

    #[test]
    fn longest_span_is_accepted() {
        assert_eq!(
            tokens("\x0c(255,255,255,255)"),
            vec![Token::Foreground(Color::rgba(255, 255, 255, 255))]
        );
        assert_eq!(tokens("\x0c(0001,2,3)")[0], Token::Glyph('(' as u32));
    }
}
