//! A software 2D rendering surface.
//!
//! [`Surface`] owns a grid of packed `0xAARRGGBB` pixels. On top of it this
//! crate provides alpha compositing and blitting, nearest-neighbour resize
//! and rotation, clipped line/circle/rectangle/triangle rasterization, octree
//! color quantization, BMP and PNG codecs, and text drawing with a built-in
//! 8x8 font or BDF fonts.
//!
//! Drawing never fails: coordinates outside the surface are clipped. Fallible
//! operations return [`Result`]; every error is also handed to the hook set
//! with [`set_error_hook`] (or logged through `tracing` when none is set).
//!
//! ```
//! use pixelcraft_core::{Color, Surface};
//!
//! let mut canvas = Surface::new(64, 32)?;
//! canvas.fill(Color::BLACK);
//! canvas.circle(16, 16, 10, Color::rgba(255, 0, 0, 128), true);
//! canvas.write_text(28, 12, Color::WHITE, Color::TRANSPARENT, "hi");
//! let bmp = pixelcraft_core::encode_bmp(&canvas)?;
//! assert_eq!(&bmp[..2], b"BM");
//! # Ok::<(), pixelcraft_core::Error>(())
//! ```

mod blend;
pub mod codec;
mod color;
pub mod error;
mod primitives;
mod quantize;
mod surface;
pub mod text;
mod transform;

pub use blend::BlitOptions;
pub use codec::{ImageFormat, decode_bmp, encode_bmp, load_bmp, load_image, save_bmp, save_image};
#[cfg(feature = "png")]
pub use codec::{decode_png, encode_png, load_png, save_png};
pub use color::Color;
pub use error::{Error, ErrorKind, ErrorReport, Result, clear_error_hook, set_error_hook};
pub use pixelcraft_font::{BdfFont, BdfGlyph, BoundingBox, builtin};
pub use surface::{Rect, Surface};
pub use text::{
    load_bdf, measure_bdf_text, measure_text, parse_bdf, render_bdf_text, render_text,
};
