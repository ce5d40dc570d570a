//! Copy, nearest-neighbour resize and rotation.

use crate::{Color, Error, Result, Surface};

// Angles strictly between these bounds (radians) put the rotated image left
// of the origin (x) or above it (y). The bounds are rounded, not exact
// multiples of pi/2.
#[allow(clippy::approx_constant)]
const QUADRANT_II: (f32, f32) = (1.5708, 3.14159);
#[allow(clippy::approx_constant)]
const QUADRANT_III: (f32, f32) = (3.14159, 4.71239);

impl Surface {
    /// Copies the surface into a freshly allocated one.
    ///
    /// # Errors
    /// [`Error::OutOfMemory`] when the copy cannot be allocated, and
    /// [`Error::InvalidParameters`] for a released surface.
    pub fn copy(&self) -> Result<Surface> {
        let mut out = Surface::new(self.width(), self.height())?;
        out.as_raw_mut().copy_from_slice(self.as_raw());
        Ok(out)
    }

    /// Scales to `width x height` by nearest-neighbour sampling.
    ///
    /// Source coordinates are stepped in 16.16 fixed point with a ratio of
    /// `(src << 16) / dst + 1`, clamped to the last row and column.
    ///
    /// # Errors
    /// [`Error::InvalidParameters`] for a zero target dimension or a
    /// released source, [`Error::OutOfMemory`] on allocation failure.
    pub fn resize(&self, width: u32, height: u32) -> Result<Surface> {
        if self.is_empty() {
            return Err(Error::invalid_parameters("cannot resize a released surface"));
        }
        let mut out = Surface::new(width, height)?;

        let (src_w, src_h) = (u64::from(self.width()), u64::from(self.height()));
        let x_ratio = (src_w << 16) / u64::from(width) + 1;
        let y_ratio = (src_h << 16) / u64::from(height) + 1;

        let columns: Vec<usize> = (0..u64::from(width))
            .map(|i| ((i * x_ratio) >> 16).min(src_w - 1) as usize)
            .collect();

        let dst_w = width as usize;
        for (j, dst_row) in out.as_raw_mut().chunks_exact_mut(dst_w).enumerate() {
            let sy = ((j as u64 * y_ratio) >> 16).min(src_h - 1) as u32;
            let src_row = self.row(sy);
            for (px, &sx) in dst_row.iter_mut().zip(&columns) {
                *px = src_row[sx];
            }
        }
        Ok(out)
    }

    /// Rotates by `degrees`, clockwise on screen (y grows downward), returning
    /// a surface sized to the rotated bounding box.
    ///
    /// Every destination pixel centre is mapped back into the source; samples
    /// that fall outside it stay transparent. Multiples of 90 degrees use exact
    /// sines, so quarter turns move pixels without loss.
    ///
    /// # Errors
    /// [`Error::InvalidParameters`] for a released source or a degenerate
    /// bounding box, [`Error::OutOfMemory`] on allocation failure.
    pub fn rotate(&self, degrees: f32) -> Result<Surface> {
        if self.is_empty() {
            return Err(Error::invalid_parameters("cannot rotate a released surface"));
        }
        if !degrees.is_finite() {
            return Err(Error::invalid_parameters(format!("invalid rotation angle {degrees}")));
        }

        let degrees = degrees.rem_euclid(360.0);
        let theta = degrees.to_radians();
        let (s, c) = quarter_turn(degrees).unwrap_or_else(|| theta.sin_cos());
        let (w, h) = (self.width() as f32, self.height() as f32);
        let corners = [(-h * s, h * c), (w * c - h * s, h * c + w * s), (w * c, w * s)];

        let min_x = corners.iter().fold(0.0_f32, |m, p| m.min(p.0));
        let min_y = corners.iter().fold(0.0_f32, |m, p| m.min(p.1));
        let mut max_x = corners.iter().fold(f32::MIN, |m, p| m.max(p.0));
        let mut max_y = corners.iter().fold(f32::MIN, |m, p| m.max(p.1));
        if theta > QUADRANT_II.0 && theta < QUADRANT_II.1 {
            max_x = 0.0;
        }
        if theta > QUADRANT_III.0 && theta < QUADRANT_III.1 {
            max_y = 0.0;
        }

        let out_w = (max_x.abs() - min_x).ceil() as u32;
        let out_h = (max_y.abs() - min_y).ceil() as u32;
        let mut out = Surface::new(out_w, out_h)?;

        for y in 0..out_h as i32 {
            for x in 0..out_w as i32 {
                let (fx, fy) = (x as f32 + 0.5 + min_x, y as f32 + 0.5 + min_y);
                let sx = (fx * c + fy * s).floor() as i32;
                let sy = (fy * c - fx * s).floor() as i32;
                if let Some(i) = self.index(sx, sy) {
                    out.blend(x, y, Color(self.as_raw()[i]));
                }
            }
        }
        Ok(out)
    }
}

/// Exact `(sin, cos)` for angles in `0..360` that are whole quarter turns.
fn quarter_turn(degrees: f32) -> Option<(f32, f32)> {
    if degrees % 90.0 != 0.0 {
        return None;
    }
    // rem_euclid may round a tiny negative angle up to 360
    match (degrees / 90.0) as u32 % 4 {
        0 => Some((0.0, 1.0)),
        1 => Some((1.0, 0.0)),
        2 => Some((0.0, -1.0)),
        _ => Some((-1.0, 0.0)),
    }
}
