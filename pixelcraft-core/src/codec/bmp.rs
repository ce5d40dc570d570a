use std::path::Path;

use super::{read_file, write_file};
use crate::{Color, Error, Result, Surface};

const FILE_HEADER_LEN: usize = 14;
const INFO_HEADER_LEN: usize = 40;
const HEADER_LEN: usize = FILE_HEADER_LEN + INFO_HEADER_LEN;
const BI_RGB: u32 = 0;

fn u16_at(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn u32_at(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

fn i32_at(data: &[u8], at: usize) -> i32 {
    u32_at(data, at) as i32
}

/// Rows are padded to a multiple of 4 bytes.
fn row_stride(width: usize, bytes_per_pixel: usize) -> usize {
    (width * bytes_per_pixel + 3) & !3
}

/// Decodes an uncompressed 24 or 32 bpp BMP.
///
/// Positive heights store rows bottom-up, negative heights top-down. 24 bpp
/// pixels come out opaque; 32 bpp pixels keep their fourth byte as alpha.
///
/// # Errors
/// [`Error::InvalidFormat`] for short or truncated data, a bad signature or
/// non-positive width; [`Error::UnsupportedFormat`] for compressed, palette
/// or other bit depths.
pub fn decode_bmp(data: &[u8]) -> Result<Surface> {
    if data.len() < HEADER_LEN {
        return Err(Error::invalid_format(format!(
            "BMP data too short: {} bytes, headers need {HEADER_LEN}",
            data.len()
        )));
    }
    if &data[..2] != b"BM" {
        return Err(Error::invalid_format(format!(
            "bad BMP signature {:#06x}",
            u16_at(data, 0)
        )));
    }

    let pixel_offset = u32_at(data, 10) as usize;
    let info_len = u32_at(data, 14) as usize;
    let width = i32_at(data, 18);
    let height = i32_at(data, 22);
    let bits = u16_at(data, 28);
    let compression = u32_at(data, 30);

    if info_len < INFO_HEADER_LEN {
        return Err(Error::unsupported_format(format!(
            "BMP info header of {info_len} bytes"
        )));
    }
    if compression != BI_RGB {
        return Err(Error::unsupported_format(format!(
            "compressed BMP (compression {compression})"
        )));
    }
    let bytes_per_pixel = match bits {
        24 => 3,
        32 => 4,
        1 | 2 | 4 | 8 => {
            return Err(Error::unsupported_format(format!(
                "palette BMP ({bits} bpp)"
            )));
        }
        _ => return Err(Error::unsupported_format(format!("{bits} bpp BMP"))),
    };
    if width <= 0 || height == 0 {
        return Err(Error::invalid_format(format!(
            "invalid BMP dimensions {width}x{height}"
        )));
    }

    let top_down = height < 0;
    let (w, h) = (width.unsigned_abs(), height.unsigned_abs());
    let stride = row_stride(w as usize, bytes_per_pixel);
    let row_bytes = w as usize * bytes_per_pixel;

    // the last row may omit its padding
    let needed = stride
        .checked_mul(h as usize - 1)
        .and_then(|n| n.checked_add(row_bytes))
        .and_then(|n| n.checked_add(pixel_offset));
    if needed.is_none_or(|n| n > data.len()) {
        return Err(Error::invalid_format(format!(
            "BMP pixel data truncated: {w}x{h} at offset {pixel_offset} needs more than {} bytes",
            data.len()
        )));
    }

    let mut surface = Surface::new(w, h)?;
    for row in 0..h as usize {
        let start = row
            .checked_mul(stride)
            .and_then(|off| off.checked_add(pixel_offset));
        let src = start
            .and_then(|start| data.get(start..start.checked_add(row_bytes)?))
            .ok_or_else(|| {
                Error::invalid_format(format!("BMP pixel data truncated at row {row} of {h}"))
            })?;

        let y = if top_down { row } else { h as usize - 1 - row };
        let dst = &mut surface.as_raw_mut()[y * w as usize..(y + 1) * w as usize];
        for (px, bgr) in dst.iter_mut().zip(src.chunks_exact(bytes_per_pixel)) {
            let alpha = if bytes_per_pixel == 4 { bgr[3] } else { 255 };
            *px = Color::rgba(bgr[2], bgr[1], bgr[0], alpha).0;
        }
    }

    Ok(surface)
}

/// Encodes a surface as a bottom-up 24 bpp BMP. Alpha is dropped.
///
/// # Errors
/// [`Error::InvalidParameters`] for a released surface or one too large for
/// the 32-bit size fields, [`Error::OutOfMemory`] if the output buffer cannot
/// be reserved.
pub fn encode_bmp(surface: &Surface) -> Result<Vec<u8>> {
    if surface.is_empty() {
        return Err(Error::invalid_parameters("cannot encode a released surface"));
    }

    let (w, h) = surface.dimensions();
    let stride = row_stride(w as usize, 3);
    let image_size = stride
        .checked_mul(h as usize)
        .and_then(|n| u32::try_from(n).ok())
        .filter(|n| n.checked_add(HEADER_LEN as u32).is_some())
        .ok_or_else(|| Error::invalid_parameters(format!("{w}x{h} is too large for BMP")))?;
    let file_size = image_size + HEADER_LEN as u32;

    let mut out = Vec::new();
    if out.try_reserve_exact(file_size as usize).is_err() {
        return Err(Error::out_of_memory(file_size as usize));
    }

    // file header
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes());

    // info header
    out.extend_from_slice(&(INFO_HEADER_LEN as u32).to_le_bytes());
    out.extend_from_slice(&(w as i32).to_le_bytes());
    out.extend_from_slice(&(h as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&BI_RGB.to_le_bytes());
    out.extend_from_slice(&image_size.to_le_bytes());
    out.extend_from_slice(&[0; 16]);

    let padding = stride - w as usize * 3;
    for y in (0..h).rev() {
        for &px in surface.row(y) {
            let c = Color(px);
            out.extend_from_slice(&[c.b(), c.g(), c.r()]);
        }
        out.extend(std::iter::repeat_n(0, padding));
    }

    Ok(out)
}

/// Reads and decodes a BMP file.
///
/// # Errors
/// [`Error::FileOpen`] when the file cannot be read, otherwise as
/// [`decode_bmp`].
pub fn load_bmp(path: impl AsRef<Path>) -> Result<Surface> {
    let path = path.as_ref();
    let surface = decode_bmp(&read_file(path)?)?;
    tracing::debug!(
        path = %path.display(),
        width = surface.width(),
        height = surface.height(),
        "loaded BMP"
    );
    Ok(surface)
}

/// Encodes a surface as 24 bpp BMP and writes it to `path`.
///
/// # Errors
/// As [`encode_bmp`], plus [`Error::FileOpen`] when writing fails.
pub fn save_bmp(surface: &Surface, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_file(path, &encode_bmp(surface)?)?;
    tracing::debug!(
        path = %path.display(),
        width = surface.width(),
        height = surface.height(),
        "saved BMP"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bmp_bytes(width: i32, height: i32, bits: u16, compression: u32, pixels: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&((HEADER_LEN + pixels.len()) as u32).to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes());
        out.extend_from_slice(&40u32.to_le_bytes());
        out.extend_from_slice(&width.to_le_bytes());
        out.extend_from_slice(&height.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&bits.to_le_bytes());
        out.extend_from_slice(&compression.to_le_bytes());
        out.extend_from_slice(&[0; 20]);
        out.extend_from_slice(pixels);
        out
    }

    #[test]
    fn encoded_header_fields() {
        let mut s = Surface::new(3, 2).unwrap();
        s.fill(Color::rgb(1, 2, 3));
        let data = encode_bmp(&s).unwrap();

        // 3 px * 3 bytes = 9, padded to 12
        assert_eq!(data.len(), HEADER_LEN + 12 * 2);
        assert_eq!(&data[..2], b"BM");
        assert_eq!(u32_at(&data, 2) as usize, data.len());
        assert_eq!(u32_at(&data, 10), 54);
        assert_eq!(u32_at(&data, 14), 40);
        assert_eq!(i32_at(&data, 18), 3);
        assert_eq!(i32_at(&data, 22), 2);
        assert_eq!(u16_at(&data, 26), 1);
        assert_eq!(u16_at(&data, 28), 24);
        assert_eq!(u32_at(&data, 34), 24);
        assert_eq!(&data[54..57], &[3, 2, 1]);
        assert_eq!(&data[63..66], &[0, 0, 0]);
    }

    #[test]
    fn rows_are_stored_bottom_up() {
        let mut s = Surface::new(1, 2).unwrap();
        s.set_pixel(0, 0, Color::RED);
        s.set_pixel(0, 1, Color::BLUE);
        let data = encode_bmp(&s).unwrap();
        assert_eq!(&data[54..57], &[255, 0, 0]);
        assert_eq!(&data[58..61], &[0, 0, 255]);
    }

    #[test]
    fn round_trip_odd_width() {
        let mut s = Surface::new(5, 3).unwrap();
        s.passthru(|x, y, _| Color::from_i32_channels(x * 40, y * 80, 7, 255));
        let back = decode_bmp(&encode_bmp(&s).unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn decodes_top_down_32bpp() {
        let pixels = [
            10, 20, 30, 40, //
            50, 60, 70, 80,
        ];
        let s = decode_bmp(&bmp_bytes(1, -2, 32, 0, &pixels)).unwrap();
        assert_eq!(s.pixel(0, 0), Color::rgba(30, 20, 10, 40));
        assert_eq!(s.pixel(0, 1), Color::rgba(70, 60, 50, 80));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(decode_bmp(&[0; 10]), Err(Error::InvalidFormat(_))));

        let mut data = bmp_bytes(1, 1, 24, 0, &[0; 4]);
        data[0] = b'X';
        assert!(matches!(decode_bmp(&data), Err(Error::InvalidFormat(_))));

        let data = bmp_bytes(1, 1, 24, 1, &[0; 4]);
        assert!(matches!(decode_bmp(&data), Err(Error::UnsupportedFormat(_))));

        let data = bmp_bytes(1, 1, 8, 0, &[0; 4]);
        assert!(matches!(decode_bmp(&data), Err(Error::UnsupportedFormat(_))));

        let data = bmp_bytes(1, 1, 16, 0, &[0; 4]);
        assert!(matches!(decode_bmp(&data), Err(Error::UnsupportedFormat(_))));

        let data = bmp_bytes(0, 1, 24, 0, &[]);
        assert!(matches!(decode_bmp(&data), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn rejects_truncated_pixels() {
        let data = bmp_bytes(2, 2, 24, 0, &[0; 10]);
        let err = decode_bmp(&data).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)), "{err}");
    }

    #[test]
    fn huge_dimensions_need_matching_data() {
        for (w, h) in [(40_000, 40_000), (i32::MAX, 1), (1, i32::MIN)] {
            let err = decode_bmp(&bmp_bytes(w, h, 32, 0, &[])).unwrap_err();
            assert!(matches!(err, Error::InvalidFormat(_)), "{w}x{h}: {err}");
        }
    }

    #[test]
    fn last_row_may_omit_padding() {
        // stride 4, so 4 + 3 bytes cover two rows
        let s = decode_bmp(&bmp_bytes(1, 2, 24, 0, &[1, 2, 3, 0, 4, 5, 6])).unwrap();
        assert_eq!(s.pixel(0, 1), Color::rgb(3, 2, 1));
        assert_eq!(s.pixel(0, 0), Color::rgb(6, 5, 4));

        assert!(decode_bmp(&bmp_bytes(1, 2, 24, 0, &[1, 2, 3, 0, 4, 5])).is_err());
    }

    #[test]
    fn released_surface_cannot_be_encoded() {
        let mut s = Surface::new(1, 1).unwrap();
        s.release();
        assert!(encode_bmp(&s).is_err());
    }
}
