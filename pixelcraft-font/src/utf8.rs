/// Scalar produced for bytes that do not form a valid sequence.
pub const REPLACEMENT: u32 = 0xFFFD;

/// A decoded codepoint and the number of bytes it occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Char {
    /// The decoded scalar value, or [`REPLACEMENT`]
    pub scalar: u32,
    /// Bytes consumed
    pub len: usize,
}

impl Utf8Char {
    const fn invalid() -> Self {
        Self { scalar: REPLACEMENT, len: 1 }
    }
}

/// Decodes the first codepoint of `bytes`.
///
/// The lead byte's high bits give the sequence length, from 1 up to the
/// historical 6-byte form. Truncated sequences, missing continuation bytes,
/// overlong encodings and bytes that cannot start a sequence all decode to
/// [`REPLACEMENT`] consuming a single byte, so callers always make progress.
///
/// Returns `None` only for empty input.
pub fn decode_utf8(bytes: &[u8]) -> Option<Utf8Char> {
    let &lead = bytes.first()?;
    if lead < 0x80 {
        return Some(Utf8Char { scalar: lead as u32, len: 1 });
    }

    let len = lead.leading_ones() as usize;
    if !(2..=6).contains(&len) || bytes.len() < len {
        return Some(Utf8Char::invalid());
    }

    let mut scalar = (lead & (0x7F >> len)) as u32;
    for &b in &bytes[1..len] {
        if b & 0xC0 != 0x80 {
            return Some(Utf8Char::invalid());
        }
        scalar = (scalar << 6) | (b & 0x3F) as u32;
    }

    if scalar < min_scalar(len) {
        return Some(Utf8Char::invalid());
    }

    Some(Utf8Char { scalar, len })
}

/// Smallest scalar that legitimately needs a `len`-byte sequence.
const fn min_scalar(len: usize) -> u32 {
    match len {
        2 => 0x80,
        3 => 0x800,
        4 => 0x1_0000,
        5 => 0x20_0000,
        _ => 0x400_0000,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8]) -> (u32, usize) {
        let c = decode_utf8(bytes).unwrap();
        (c.scalar, c.len)
    }

    #[test]
    fn ascii_is_one_byte() {
        assert_eq!(decode(&[0x41]), (65, 1));
        assert_eq!(decode(b"AB"), (65, 1));
    }

    #[test]
    fn multi_byte_sequences() {
        assert_eq!(decode(&[0xC3, 0xA9]), (233, 2)); // é
        assert_eq!(decode("█".as_bytes()), (0x2588, 3));
        assert_eq!(decode("🚀".as_bytes()), (0x1F680, 4));
        assert_eq!(decode(&[0xF8, 0x88, 0x80, 0x80, 0x80]), (0x20_0000, 5));
        assert_eq!(decode(&[0xFC, 0x84, 0x80, 0x80, 0x80, 0x80]), (0x400_0000, 6));
    }

    #[test]
    fn matches_std_for_valid_text() {
        let text = "héllo ▀▄ αβγ ぁ ¿";
        let mut rest = text.as_bytes();
        let mut decoded = Vec::new();
        while let Some(c) = decode_utf8(rest) {
            decoded.push(char::from_u32(c.scalar).unwrap());
            rest = &rest[c.len..];
        }
        assert_eq!(decoded, text.chars().collect::<Vec<_>>());
    }

    #[test]
    fn overlong_encodings_are_rejected() {
        assert_eq!(decode(&[0xC0, 0x80]), (REPLACEMENT, 1)); // overlong NUL
        assert_eq!(decode(&[0xC1, 0xBF]), (REPLACEMENT, 1));
        assert_eq!(decode(&[0xE0, 0x80, 0xAF]), (REPLACEMENT, 1)); // overlong '/'
        assert_eq!(decode(&[0xF0, 0x82, 0x82, 0xAC]), (REPLACEMENT, 1));
    }

    #[test]
    fn invalid_input_does_not_panic() {
        assert_eq!(decode(&[0x80]), (REPLACEMENT, 1)); // stray continuation
        assert_eq!(decode(&[0xFE]), (REPLACEMENT, 1));
        assert_eq!(decode(&[0xFF, 0xFF]), (REPLACEMENT, 1));
        assert_eq!(decode(&[0xC3]), (REPLACEMENT, 1)); // truncated
        assert_eq!(decode(&[0xE2, 0x96]), (REPLACEMENT, 1));
        assert_eq!(decode(&[0xC3, 0x41]), (REPLACEMENT, 1)); // not a continuation
        assert_eq!(decode_utf8(&[]), None);
    }
}
