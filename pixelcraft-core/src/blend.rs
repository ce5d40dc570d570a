//! Alpha compositing, flood fill and blitting.

use crate::{Color, Rect, Surface};

/// Options for [`Surface::paste_with`] and [`Surface::clip_paste_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlitOptions {
    /// Source pixels equal to this color are skipped instead of blended.
    pub chroma_key: Option<Color>,
}

impl BlitOptions {
    /// Uses [`Color::LIME`] as the chroma key.
    #[must_use]
    pub const fn lime_key() -> Self {
        Self { chroma_key: Some(Color::LIME) }
    }

    /// Uses `key` as the chroma key.
    #[must_use]
    pub const fn chroma_key(key: Color) -> Self {
        Self { chroma_key: Some(key) }
    }
}

impl Surface {
    /// Composites `color` over the pixel at `(x, y)`; see [`Color::over`].
    ///
    /// Out-of-bounds coordinates are ignored. With the `no-alpha` feature
    /// this is a plain [`Surface::set_pixel`].
    #[inline]
    pub fn blend(&mut self, x: i32, y: i32, color: Color) {
        #[cfg(feature = "no-alpha")]
        self.set_pixel(x, y, color);

        #[cfg(not(feature = "no-alpha"))]
        if color.a() != 0
            && let Some(i) = self.index(x, y)
        {
            let dst = Color(self.as_raw()[i]);
            self.as_raw_mut()[i] = color.over(dst).0;
        }
    }

    /// Blends the horizontal span `x0..=x1` (either order) on row `y`, clipped.
    pub fn hline(&mut self, y: i32, x0: i32, x1: i32, color: Color) {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        if y < 0 || y >= self.height() as i32 || x1 < 0 || x0 >= self.width() as i32 {
            return;
        }
        for x in x0.max(0)..=x1.min(self.width() as i32 - 1) {
            self.blend(x, y, color);
        }
    }

    /// Blends the vertical span `y0..=y1` (either order) on column `x`, clipped.
    pub fn vline(&mut self, x: i32, y0: i32, y1: i32, color: Color) {
        let (y0, y1) = (y0.min(y1), y0.max(y1));
        if x < 0 || x >= self.width() as i32 || y1 < 0 || y0 >= self.height() as i32 {
            return;
        }
        for y in y0.max(0)..=y1.min(self.height() as i32 - 1) {
            self.blend(x, y, color);
        }
    }

    /// Replaces the 4-connected region of same-colored pixels around
    /// `(x, y)` with `color`.
    ///
    /// Nothing happens when the seed is out of bounds or already `color`.
    /// The region is filled one horizontal span at a time from an explicit
    /// work stack.
    pub fn flood_fill(&mut self, x: i32, y: i32, color: Color) {
        let Some(seed) = self.index(x, y) else {
            return;
        };
        let target = self.as_raw()[seed];
        if target == color.0 {
            return;
        }

        let (width, height) = (self.width() as usize, self.height() as usize);
        let mut stack = vec![(x as usize, y as usize)];
        while let Some((x, y)) = stack.pop() {
            let row = &mut self.as_raw_mut()[y * width..(y + 1) * width];
            if row[x] != target {
                continue;
            }

            let mut left = x;
            while left > 0 && row[left - 1] == target {
                left -= 1;
            }
            let mut right = x;
            while right + 1 < width && row[right + 1] == target {
                right += 1;
            }
            row[left..=right].fill(color.0);

            if y > 0 {
                self.push_spans(&mut stack, y - 1, left, right, target);
            }
            if y + 1 < height {
                self.push_spans(&mut stack, y + 1, left, right, target);
            }
        }
    }

    /// Queues one seed per run of `target` pixels in `left..=right` of row `y`.
    fn push_spans(
        &self,
        stack: &mut Vec<(usize, usize)>,
        y: usize,
        left: usize,
        right: usize,
        target: u32,
    ) {
        let row = self.row(y as u32);
        let mut in_run = false;
        for (x, &px) in row.iter().enumerate().take(right + 1).skip(left) {
            let matches = px == target;
            if matches && !in_run {
                stack.push((x, y));
            }
            in_run = matches;
        }
    }

    /// Blends all of `src` onto this surface with its top-left corner at `(x, y)`.
    ///
    /// Returns false when no pixel of `src` lands on the surface.
    pub fn paste(&mut self, src: &Surface, x: i32, y: i32) -> bool {
        self.paste_with(src, x, y, BlitOptions::default())
    }

    /// [`Surface::paste`] with blit options.
    pub fn paste_with(&mut self, src: &Surface, x: i32, y: i32, options: BlitOptions) -> bool {
        self.clip_paste_with(src, x, y, src.bounds(), options)
    }

    /// Blends the `rect` region of `src` onto this surface at `(x, y)`.
    ///
    /// `rect` is clipped to `src` first. Returns false when `rect` is empty
    /// or nothing lands on the surface.
    pub fn clip_paste(&mut self, src: &Surface, x: i32, y: i32, rect: Rect) -> bool {
        self.clip_paste_with(src, x, y, rect, BlitOptions::default())
    }

    /// [`Surface::clip_paste`] with blit options.
    pub fn clip_paste_with(
        &mut self,
        src: &Surface,
        x: i32,
        y: i32,
        rect: Rect,
        options: BlitOptions,
    ) -> bool {
        if rect.is_empty() {
            return false;
        }
        let Some(clipped) = rect.intersect(src.bounds()) else {
            return false;
        };

        // where the clipped source rect lands, then what of it is visible
        let dest = Rect::new(
            x.saturating_add(clipped.x.saturating_sub(rect.x)),
            y.saturating_add(clipped.y.saturating_sub(rect.y)),
            clipped.width,
            clipped.height,
        );
        let Some(visible) = dest.intersect(self.bounds()) else {
            return false;
        };

        let sx0 = clipped.x + (visible.x - dest.x);
        let sy0 = clipped.y + (visible.y - dest.y);
        for row in 0..visible.height as i32 {
            for col in 0..visible.width as i32 {
                let c = src.pixel(sx0 + col, sy0 + row);
                if options.chroma_key == Some(c) {
                    continue;
                }
                self.blend(visible.x + col, visible.y + row, c);
            }
        }
        true
    }
}
