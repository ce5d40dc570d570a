use crate::{Color, Error, Result};

/// An axis-aligned rectangle; covers `[x, x + width) x [y, y + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns true if the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The overlapping part of two rectangles, or `None` when they are disjoint.
    #[must_use]
    pub fn intersect(self, other: Self) -> Option<Self> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= i64::from(x0) || y1 <= i64::from(y0) {
            return None;
        }

        Some(Self {
            x: x0,
            y: y0,
            width: (x1 - i64::from(x0)) as u32,
            height: (y1 - i64::from(y0)) as u32,
        })
    }

    fn right(self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    fn bottom(self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }
}

/// An owned 2-D grid of packed `0xAARRGGBB` pixels.
///
/// Pixel `(x, y)` lives at `y * width + x` of the raw buffer. Coordinates
/// passed to drawing calls are signed; anything outside the surface is
/// silently clipped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Surface {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl Surface {
    /// Allocates a zeroed (fully transparent) surface.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameters`] when a dimension is zero or the
    /// pixel count overflows, and [`Error::OutOfMemory`] when the buffer
    /// cannot be reserved.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixels = alloc_pixels(width, height)?;
        Ok(Self { pixels, width, height })
    }

    /// Wraps an existing pixel buffer.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameters`] when a dimension is zero or
    /// `pixels.len()` is not `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        match pixel_count(width, height) {
            Some(len) if len == pixels.len() => Ok(Self { pixels, width, height }),
            Some(len) => Err(Error::invalid_parameters(format!(
                "{width}x{height} surface needs {len} pixels, got {}",
                pixels.len()
            ))),
            None => Err(Error::invalid_dimensions(width, height)),
        }
    }

    /// Frees the pixel buffer and zeroes the dimensions.
    pub fn release(&mut self) {
        self.pixels = Vec::new();
        self.width = 0;
        self.height = 0;
    }

    /// Reallocates the buffer in place at a new size, cleared to transparent.
    ///
    /// On failure the surface is left untouched.
    ///
    /// # Errors
    /// Same conditions as [`Surface::new`].
    pub fn reset(&mut self, width: u32, height: u32) -> Result<()> {
        self.pixels = alloc_pixels(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` in pixels.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns true for a released surface.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The whole surface as a rectangle at the origin.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Buffer index of `(x, y)`, or `None` when it lies outside the surface.
    #[inline]
    pub(crate) fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (u32::try_from(x).ok()?, u32::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Reads a pixel; out-of-bounds reads return [`Color::TRANSPARENT`].
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Color {
        self.index(x, y)
            .map_or(Color::TRANSPARENT, |i| Color(self.pixels[i]))
    }

    /// Overwrites a pixel without blending; out-of-bounds writes are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.0;
        }
    }

    /// Overwrites every pixel.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color.0);
    }

    /// Resets every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Replaces every pixel with `f(x, y, current)`.
    pub fn passthru(&mut self, mut f: impl FnMut(i32, i32, Color) -> Color) {
        let width = self.width as usize;
        if width == 0 {
            return;
        }
        for (y, row) in self.pixels.chunks_exact_mut(width).enumerate() {
            for (x, px) in row.iter_mut().enumerate() {
                *px = f(x as i32, y as i32, Color(*px)).0;
            }
        }
    }

    /// The raw pixel buffer, row-major.
    #[must_use]
    pub fn as_raw(&self) -> &[u32] {
        &self.pixels
    }

    /// Mutable access to the raw pixel buffer, row-major.
    pub fn as_raw_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Consumes the surface, returning its buffer.
    #[must_use]
    pub fn into_raw(self) -> Vec<u32> {
        self.pixels
    }

    /// The buffer as bytes in little-endian memory order, `B G R A` per pixel.
    #[must_use]
    pub fn to_bgra_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_le_bytes()).collect()
    }

    /// Pixels of row `y`.
    pub(crate) fn row(&self, y: u32) -> &[u32] {
        let width = self.width as usize;
        let start = y as usize * width;
        &self.pixels[start..start + width]
    }
}

fn pixel_count(width: u32, height: u32) -> Option<usize> {
    if width == 0 || height == 0 {
        return None;
    }
    (width as usize).checked_mul(height as usize)
}

fn alloc_pixels(width: u32, height: u32) -> Result<Vec<u32>> {
    let len = pixel_count(width, height).ok_or_else(|| Error::invalid_dimensions(width, height))?;

    let mut pixels = Vec::new();
    if pixels.try_reserve_exact(len).is_err() {
        return Err(Error::out_of_memory(len.saturating_mul(size_of::<u32>())));
    }
    pixels.resize(len, 0);
    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_surface_is_transparent() {
        for (w, h) in [(1, 1), (3, 7), (64, 2)] {
            let s = Surface::new(w, h).unwrap();
            assert_eq!(s.dimensions(), (w, h));
            assert_eq!(s.as_raw().len(), (w * h) as usize);
            assert!(s.as_raw().iter().all(|&p| p == 0));
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(Surface::new(0, 4), Err(Error::InvalidParameters(_))));
        assert!(matches!(Surface::new(4, 0), Err(Error::InvalidParameters(_))));
    }

    #[test]
    fn release_zeroes_descriptor() {
        let mut s = Surface::new(4, 4).unwrap();
        s.release();
        assert_eq!(s.dimensions(), (0, 0));
        assert!(s.as_raw().is_empty());
        assert!(s.is_empty());
    }

    #[test]
    fn reset_reallocates_cleared() {
        let mut s = Surface::new(2, 2).unwrap();
        s.fill(Color::RED);
        s.reset(3, 5).unwrap();
        assert_eq!(s.dimensions(), (3, 5));
        assert!(s.as_raw().iter().all(|&p| p == 0));

        assert!(s.reset(0, 1).is_err());
        assert_eq!(s.dimensions(), (3, 5));
    }

    #[test]
    fn out_of_bounds_access_is_ignored() {
        let mut s = Surface::new(2, 2).unwrap();
        s.set_pixel(-1, 0, Color::RED);
        s.set_pixel(2, 0, Color::RED);
        s.set_pixel(0, 2, Color::RED);
        assert!(s.as_raw().iter().all(|&p| p == 0));
        assert_eq!(s.pixel(5, 5), Color::TRANSPARENT);
        assert_eq!(s.pixel(-1, -1), Color::TRANSPARENT);

        s.set_pixel(1, 1, Color::RED);
        assert_eq!(s.pixel(1, 1), Color::RED);
        assert_eq!(s.as_raw()[3], Color::RED.0);
    }

    #[test]
    fn from_pixels_checks_length() {
        assert!(Surface::from_pixels(2, 2, vec![0; 4]).is_ok());
        assert!(Surface::from_pixels(2, 2, vec![0; 3]).is_err());
        assert!(Surface::from_pixels(0, 2, Vec::new()).is_err());
    }

    #[test]
    fn passthru_sees_coordinates() {
        let mut s = Surface::new(3, 2).unwrap();
        s.passthru(|x, y, _| Color::from_i32_channels(x, y, 0, 255));
        assert_eq!(s.pixel(2, 1), Color::rgba(2, 1, 0, 255));

        s.passthru(|_, _, c| Color(!c.0 & 0x00FF_FFFF | 0xFF00_0000));
        assert_eq!(s.pixel(0, 0), Color::rgb(255, 255, 255));
    }

    #[test]
    fn bgra_bytes_are_memory_order() {
        let mut s = Surface::new(1, 1).unwrap();
        s.fill(Color::rgba(1, 2, 3, 4));
        assert_eq!(s.to_bgra_bytes(), vec![3, 2, 1, 4]);
    }

    #[test]
    fn rect_intersection() {
        let a = Rect::new(-2, -2, 5, 5);
        let b = Rect::new(0, 0, 4, 4);
        assert_eq!(a.intersect(b), Some(Rect::new(0, 0, 3, 3)));
        assert_eq!(Rect::new(4, 0, 2, 2).intersect(b), None);
        assert!(Rect::new(0, 0, 0, 3).is_empty());
    }
}
