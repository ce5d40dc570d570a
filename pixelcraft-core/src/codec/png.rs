use std::{io::Cursor, path::Path};

use png::{BitDepth, ColorType, Transformations};

use super::{read_file, write_file};
use crate::{Color, Error, Result, Surface};

/// Decodes a PNG image.
///
/// Palettes and sub-byte depths are expanded and 16-bit samples stripped, so
/// every input ends up as 8-bit gray, gray-alpha, RGB or RGBA before being
/// packed into colors.
///
/// # Errors
/// [`Error::InvalidFormat`] when the stream cannot be decoded.
pub fn decode_png(data: &[u8]) -> Result<Surface> {
    let mut decoder = png::Decoder::new(Cursor::new(data));
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| Error::invalid_format(format!("PNG header: {e}")))?;

    let (color_type, depth) = reader.output_color_type();
    if depth != BitDepth::Eight {
        return Err(Error::unsupported_format(format!(
            "PNG output depth {depth:?} after expansion"
        )));
    }
    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };

    let samples = color_type.samples();
    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(samples))
        .ok_or_else(|| Error::invalid_dimensions(width, height))?;
    let mut buf = Vec::new();
    if buf.try_reserve_exact(len).is_err() {
        return Err(Error::out_of_memory(len));
    }
    buf.resize(len, 0);

    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| Error::invalid_format(format!("PNG image data: {e}")))?;

    let mut surface = Surface::new(width, height)?;
    let row_len = width as usize * samples;
    let rows = buf.chunks(frame.line_size).take(height as usize);
    for (dst, src) in surface.as_raw_mut().chunks_exact_mut(width as usize).zip(rows) {
        let src = &src[..row_len];
        for (px, s) in dst.iter_mut().zip(src.chunks_exact(samples)) {
            let color = match frame.color_type {
                ColorType::Grayscale => Color::rgb(s[0], s[0], s[0]),
                ColorType::GrayscaleAlpha => Color::rgba(s[0], s[0], s[0], s[1]),
                ColorType::Rgb => Color::rgb(s[0], s[1], s[2]),
                ColorType::Rgba => Color::rgba(s[0], s[1], s[2], s[3]),
                ColorType::Indexed => {
                    return Err(Error::unsupported_format("PNG palette was not expanded"));
                }
            };
            *px = color.0;
        }
    }

    Ok(surface)
}

/// Encodes a surface as 8-bit RGBA PNG.
///
/// # Errors
/// [`Error::InvalidParameters`] for a released surface,
/// [`Error::InvalidState`] if the encoder rejects the stream.
pub fn encode_png(surface: &Surface) -> Result<Vec<u8>> {
    if surface.is_empty() {
        return Err(Error::invalid_parameters("cannot encode a released surface"));
    }

    let rgba: Vec<u8> = surface
        .as_raw()
        .iter()
        .flat_map(|&p| Color(p).to_rgba())
        .collect();

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, surface.width(), surface.height());
        encoder.set_color(ColorType::Rgba);
        encoder.set_depth(BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| Error::invalid_state(format!("PNG header: {e}")))?;
        writer
            .write_image_data(&rgba)
            .map_err(|e| Error::invalid_state(format!("PNG image data: {e}")))?;
        writer
            .finish()
            .map_err(|e| Error::invalid_state(format!("PNG trailer: {e}")))?;
    }

    Ok(out)
}

/// Reads and decodes a PNG file.
///
/// # Errors
/// [`Error::FileOpen`] when the file cannot be read, otherwise as
/// [`decode_png`].
pub fn load_png(path: impl AsRef<Path>) -> Result<Surface> {
    let path = path.as_ref();
    let surface = decode_png(&read_file(path)?)?;
    tracing::debug!(
        path = %path.display(),
        width = surface.width(),
        height = surface.height(),
        "loaded PNG"
    );
    Ok(surface)
}

/// Encodes a surface as PNG and writes it to `path`.
///
/// # Errors
/// As [`encode_png`], plus [`Error::FileOpen`] when writing fails.
pub fn save_png(surface: &Surface, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_file(path, &encode_png(surface)?)?;
    tracing::debug!(
        path = %path.display(),
        width = surface.width(),
        height = surface.height(),
        "saved PNG"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_keeps_alpha() {
        let mut s = Surface::new(3, 2).unwrap();
        s.passthru(|x, y, _| Color::from_i32_channels(x * 50, y * 90, 200, 60 + x * 40));
        let back = decode_png(&encode_png(&s).unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn decodes_grayscale() {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, 2, 1);
            encoder.set_color(ColorType::Grayscale);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0, 200]).unwrap();
        }

        let s = decode_png(&out).unwrap();
        assert_eq!(s.pixel(0, 0), Color::rgb(0, 0, 0));
        assert_eq!(s.pixel(1, 0), Color::rgb(200, 200, 200));
    }

    #[test]
    fn garbage_is_invalid_format() {
        assert!(matches!(decode_png(b"not a png"), Err(Error::InvalidFormat(_))));
    }
}
