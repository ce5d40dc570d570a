//! Line, circle, rectangle and triangle rasterization.
//!
//! Every primitive goes through [`Surface::blend`], so coordinates anywhere
//! in the `i32` range are accepted and clipped.

use crate::{Color, Rect, Surface};

impl Surface {
    /// Draws a line between two points, both inclusive.
    ///
    /// Axis-aligned lines are drawn as clipped spans; anything else uses
    /// integer Bresenham.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        if x0 == x1 {
            self.vline(x0, y0, y1, color);
            return;
        }
        if y0 == y1 {
            self.hline(y0, x0, x1, color);
            return;
        }

        let (x1, y1) = (i64::from(x1), i64::from(y1));
        let (mut x, mut y) = (i64::from(x0), i64::from(y0));
        let (dx, sx) = ((x1 - x).abs(), if x < x1 { 1 } else { -1 });
        let (dy, sy) = ((y1 - y).abs(), if y < y1 { 1 } else { -1 });
        let mut err = (if dx > dy { dx } else { -dy }) / 2;

        loop {
            self.blend(x as i32, y as i32, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = err;
            if e2 > -dx {
                err -= dy;
                x += sx;
            }
            if e2 < dy {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draws a circle of radius `r` centred on `(xc, yc)`.
    ///
    /// When `filled`, each step also draws the horizontal spans joining the
    /// symmetric points above and below the centre. A negative radius draws
    /// nothing.
    pub fn circle(&mut self, xc: i32, yc: i32, r: i32, color: Color, filled: bool) {
        if r < 0 {
            return;
        }

        // walks the second quadrant from (-r, 0) towards (0, r)
        let (mut x, mut y, mut err) = (-r, 0, 2 - 2 * r);
        loop {
            self.blend(xc - x, yc + y, color);
            self.blend(xc - y, yc - x, color);
            self.blend(xc + x, yc - y, color);
            self.blend(xc + y, yc + x, color);

            if filled {
                self.hline(yc - y, xc - x, xc + x, color);
                self.hline(yc + y, xc - x, xc + x, color);
            }

            let e = err;
            if e <= y {
                y += 1;
                err += y * 2 + 1;
            }
            if e > x || err > y {
                x += 1;
                err += x * 2 + 1;
            }
            if x >= 0 {
                break;
            }
        }
    }

    /// Draws the rectangle covering `[x, x + w) x [y, y + h)`.
    ///
    /// The rectangle is clipped to the surface first. Filled, the clipped
    /// area is drawn one span per row; otherwise its four edges are drawn,
    /// blending each corner once. Non-positive sizes draw nothing.
    pub fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color, filled: bool) {
        if w <= 0 || h <= 0 {
            return;
        }
        let Some(area) = Rect::new(x, y, w as u32, h as u32).intersect(self.bounds()) else {
            return;
        };

        let (x0, y0) = (area.x, area.y);
        let (x1, y1) = (x0 + area.width as i32 - 1, y0 + area.height as i32 - 1);
        if filled {
            for row in y0..=y1 {
                self.hline(row, x0, x1, color);
            }
            return;
        }

        self.hline(y0, x0, x1, color);
        if y1 != y0 {
            self.hline(y1, x0, x1, color);
        }
        // vertical edges skip the corners already drawn
        if y1 - y0 >= 2 {
            self.vline(x0, y0 + 1, y1 - 1, color);
            if x1 != x0 {
                self.vline(x1, y0 + 1, y1 - 1, color);
            }
        }
    }

    /// Draws a triangle.
    ///
    /// The outline is three [`Surface::line`]s. The filled form sorts the
    /// vertices by y and, for every scanline from the top vertex down to
    /// (not including) the bottom one, blends the span between the long
    /// edge and the active short edge. A triangle whose vertices share one
    /// y draws nothing.
    #[allow(clippy::too_many_arguments)]
    pub fn tri(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
        filled: bool,
    ) {
        if y0 == y1 && y0 == y2 {
            return;
        }
        if !filled {
            self.line(x0, y0, x1, y1, color);
            self.line(x1, y1, x2, y2, color);
            self.line(x2, y2, x0, y0, color);
            return;
        }

        let mut v = [(x0, y0), (x1, y1), (x2, y2)].map(|(x, y)| (i64::from(x), i64::from(y)));
        v.sort_by_key(|&(_, y)| y);
        let [(x0, y0), (x1, y1), (x2, y2)] = v;

        let total = y2 - y0;
        let upper = y1 - y0;
        for i in 0..total {
            let second_half = i > upper || y1 == y0;
            let (segment, start, from, to) = if second_half {
                (y2 - y1, upper, x1, x2)
            } else {
                (upper, 0, x0, x1)
            };

            let alpha = i as f32 / total as f32;
            let beta = (i - start) as f32 / segment as f32;
            let ax = (x0 as f32 + (x2 - x0) as f32 * alpha) as i32;
            let bx = (from as f32 + (to - from) as f32 * beta) as i32;

            let row = (y0 + i).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
            self.hline(row, ax, bx, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &Surface) -> Vec<(i32, i32)> {
        let (w, h) = s.dimensions();
        let mut out = Vec::new();
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                if s.pixel(x, y) != Color::TRANSPARENT {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn diagonal_line_hits_both_ends() {
        let mut s = Surface::new(5, 5).unwrap();
        s.line(0, 0, 4, 4, Color::RED);
        assert_eq!(lit(&s), vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    }

    #[test]
    fn shallow_line() {
        let mut s = Surface::new(5, 3).unwrap();
        s.line(4, 2, 0, 0, Color::RED);
        let points = lit(&s);
        assert!(points.contains(&(0, 0)));
        assert!(points.contains(&(4, 2)));
        assert_eq!(points.len(), 5);
    }

    #[cfg(not(feature = "no-alpha"))]
    #[test]
    fn axis_lines_are_drawn_once() {
        let mut s = Surface::new(4, 4).unwrap();
        let half = Color::rgba(255, 0, 0, 128);
        s.fill(Color::BLACK);
        s.line(0, 1, 3, 1, half);
        let expected = half.over(Color::BLACK);
        assert_eq!(s.pixel(0, 1), expected);
        assert_eq!(s.pixel(3, 1), expected);

        s.line(2, 0, 2, 3, half);
        assert_eq!(s.pixel(2, 0), expected);
    }

    #[test]
    fn off_surface_line_does_not_panic() {
        let mut s = Surface::new(3, 3).unwrap();
        s.line(-10, -5, 10, 7, Color::RED);
        s.line(i32::MIN, 0, i32::MIN, 1, Color::RED);
        assert!(!lit(&s).is_empty());
    }

    #[test]
    fn filled_circle_radius_two() {
        let mut s = Surface::new(7, 7).unwrap();
        s.circle(3, 3, 2, Color::RED, true);

        let points = lit(&s);
        assert!(points.contains(&(3, 3)));
        assert!(points.contains(&(1, 3)));
        assert!(points.contains(&(5, 4)));
        assert!(points.contains(&(3, 1)));
        assert!(!points.contains(&(1, 1)));
        assert!(!points.contains(&(5, 5)));
        assert_eq!(points.len(), 21);
    }

    #[test]
    fn circle_outline_is_hollow() {
        let mut s = Surface::new(7, 7).unwrap();
        s.circle(3, 3, 2, Color::RED, false);
        let points = lit(&s);
        assert!(!points.contains(&(3, 3)));
        assert!(points.contains(&(5, 3)));
        assert!(points.contains(&(3, 5)));
    }

    #[test]
    fn zero_radius_circle_is_a_point() {
        let mut s = Surface::new(3, 3).unwrap();
        s.circle(1, 1, 0, Color::RED, false);
        assert_eq!(lit(&s), vec![(1, 1)]);

        s.circle(1, 1, -3, Color::BLUE, true);
        assert_eq!(s.pixel(1, 1), Color::RED);
    }

    #[test]
    fn filled_rect_is_clipped() {
        let mut s = Surface::new(4, 4).unwrap();
        s.rect(-1, 2, 3, 5, Color::RED, true);
        assert_eq!(lit(&s), vec![(0, 2), (1, 2), (0, 3), (1, 3)]);
    }

    #[test]
    fn rect_outline() {
        let mut s = Surface::new(5, 5).unwrap();
        s.rect(1, 1, 3, 3, Color::RED, false);
        let points = lit(&s);
        assert_eq!(points.len(), 8);
        assert!(!points.contains(&(2, 2)));
        assert!(points.contains(&(3, 3)));
    }

    #[test]
    fn oversized_rect_outline_follows_clipped_bounds() {
        let mut s = Surface::new(5, 5).unwrap();
        s.rect(-2, -2, 10, 10, Color::RED, false);
        let points = lit(&s);
        for i in 0..5 {
            for edge in [(i, 0), (0, i), (i, 4), (4, i)] {
                assert!(points.contains(&edge), "{edge:?}");
            }
        }
        assert_eq!(points.len(), 16);
        assert_eq!(s.pixel(2, 2), Color::TRANSPARENT);

        let mut s = Surface::new(5, 5).unwrap();
        s.rect(-2, -3, 4, 5, Color::RED, false);
        assert_eq!(lit(&s), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);

        let mut s = Surface::new(5, 5).unwrap();
        s.rect(-2, 1, 10, 2, Color::RED, false);
        assert_eq!(lit(&s).len(), 10);

        s.rect(0, 0, 0, 3, Color::BLUE, true);
        s.rect(0, 0, 3, -1, Color::BLUE, false);
        s.rect(5, 0, 3, 3, Color::BLUE, false);
        assert!(lit(&s).iter().all(|&(x, y)| s.pixel(x, y) == Color::RED));
    }

    #[cfg(not(feature = "no-alpha"))]
    #[test]
    fn clipped_translucent_outline_blends_corners_once() {
        let mut s = Surface::new(4, 4).unwrap();
        s.fill(Color::BLACK);
        let half = Color::rgba(0, 0, 255, 128);
        s.rect(-3, -3, 6, 6, half, false);
        let expected = half.over(Color::BLACK);
        for p in [(0, 0), (2, 0), (0, 2), (2, 2), (1, 2)] {
            assert_eq!(s.pixel(p.0, p.1), expected, "{p:?}");
        }
        assert_eq!(s.pixel(1, 1), Color::BLACK);
        assert_eq!(s.pixel(3, 3), Color::BLACK);
    }

    #[cfg(not(feature = "no-alpha"))]
    #[test]
    fn translucent_outline_corners_blend_once() {
        let mut s = Surface::new(4, 4).unwrap();
        s.fill(Color::BLACK);
        let half = Color::rgba(0, 0, 255, 128);
        s.rect(0, 0, 4, 4, half, false);
        let expected = half.over(Color::BLACK);
        assert_eq!(s.pixel(0, 0), expected);
        assert_eq!(s.pixel(3, 3), expected);
        assert_eq!(s.pixel(0, 2), expected);
    }

    #[test]
    fn filled_triangle_interpolates_both_halves() {
        let mut s = Surface::new(5, 5).unwrap();
        s.tri(0, 0, 4, 0, 0, 4, Color::RED, true);
        let points = lit(&s);
        assert!(points.contains(&(4, 0)));
        assert!(points.contains(&(3, 1)));
        assert!(!points.contains(&(4, 1)));
        assert!(points.contains(&(1, 3)));
        assert!(!points.contains(&(2, 3)));
        // the bottom vertex row is exclusive
        assert!(!points.contains(&(0, 4)));
    }

    #[test]
    fn filled_triangle_with_apex_on_top() {
        let mut s = Surface::new(9, 5).unwrap();
        s.tri(4, 0, 0, 4, 8, 4, Color::RED, true);
        let points = lit(&s);
        assert!(points.contains(&(4, 0)));
        assert!(points.contains(&(2, 2)));
        assert!(points.contains(&(6, 2)));
        assert!(!points.contains(&(0, 2)));
    }

    #[test]
    fn flat_triangle_is_skipped() {
        let mut s = Surface::new(5, 5).unwrap();
        s.tri(0, 2, 2, 2, 4, 2, Color::RED, true);
        s.tri(0, 2, 2, 2, 4, 2, Color::RED, false);
        assert!(lit(&s).is_empty());
    }

    #[test]
    fn triangle_outline_closes() {
        let mut s = Surface::new(5, 5).unwrap();
        s.tri(0, 0, 4, 0, 0, 4, Color::RED, false);
        let points = lit(&s);
        assert!(points.contains(&(0, 4)));
        assert!(points.contains(&(2, 2)));
        assert!(!points.contains(&(1, 1)));
    }
}
