//! Image file codecs.
//!
//! BMP support is always compiled in; PNG needs the `png` feature (on by
//! default). [`load_image`] and [`save_image`] pick the codec from the file
//! extension.

mod bmp;
#[cfg(feature = "png")]
mod png;

use std::{fs, path::Path};

pub use bmp::{decode_bmp, encode_bmp, load_bmp, save_bmp};
#[cfg(feature = "png")]
pub use self::png::{decode_png, encode_png, load_png, save_png};

use crate::{Error, Result, Surface};

/// Image container formats understood by the codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Windows bitmap, 24 or 32 bits per pixel, uncompressed
    Bmp,
    /// Portable Network Graphics
    Png,
}

impl ImageFormat {
    /// Guesses the format from a path's extension, case-insensitively.
    ///
    /// # Errors
    /// [`Error::UnsupportedFormat`] for a missing or unknown extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("bmp" | "dib") => Ok(Self::Bmp),
            Some("png") => Ok(Self::Png),
            Some(other) => Err(Error::unsupported_format(format!(
                "unknown image extension '.{other}'"
            ))),
            None => Err(Error::unsupported_format(format!(
                "{} has no file extension",
                path.display()
            ))),
        }
    }
}

/// Loads a BMP or PNG file, chosen by extension.
///
/// # Errors
/// [`Error::UnsupportedFormat`] for unknown extensions (or PNG without the
/// `png` feature), otherwise whatever the codec reports.
pub fn load_image(path: impl AsRef<Path>) -> Result<Surface> {
    let path = path.as_ref();
    match ImageFormat::from_path(path)? {
        ImageFormat::Bmp => load_bmp(path),
        #[cfg(feature = "png")]
        ImageFormat::Png => load_png(path),
        #[cfg(not(feature = "png"))]
        ImageFormat::Png => Err(Error::unsupported_format("built without PNG support")),
    }
}

/// Saves to a BMP or PNG file, chosen by extension.
///
/// # Errors
/// As for [`load_image`], plus [`Error::FileOpen`] when writing fails.
pub fn save_image(surface: &Surface, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    match ImageFormat::from_path(path)? {
        ImageFormat::Bmp => save_bmp(surface, path),
        #[cfg(feature = "png")]
        ImageFormat::Png => save_png(surface, path),
        #[cfg(not(feature = "png"))]
        ImageFormat::Png => Err(Error::unsupported_format("built without PNG support")),
    }
}

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path).map_err(|e| Error::file_open(path, e))?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "read file");
    Ok(data)
}

pub(crate) fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).map_err(|e| Error::file_open(path, e))?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("a.bmp")).unwrap(), ImageFormat::Bmp);
        assert_eq!(ImageFormat::from_path(Path::new("dir/A.PNG")).unwrap(), ImageFormat::Png);
        assert!(matches!(
            ImageFormat::from_path(Path::new("photo.jpg")),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(ImageFormat::from_path(&PathBuf::from("noext")).is_err());
    }

    #[test]
    fn missing_file_is_file_open_error() {
        let err = load_image("definitely/not/here.bmp").unwrap_err();
        assert!(matches!(err, Error::FileOpen { .. }), "{err}");
    }
}
