//! CPU pixel surface.
//!
//! An RGBA8 framebuffer the engine rasterizes into once per tick. The viewer
//! blits it to a window; headless callers (tests, benches) can inspect the
//! bytes directly through [`PixelSurface::frame`].
//!
//! Zero-area surfaces are valid: every draw call degenerates to a no-op, so
//! invalid host bounds never panic.

use crate::visuals::Rgba;
use glam::Vec2;

/// Fixed-size RGBA8 raster target.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelSurface {
    /// Create a surface of the given pixel dimensions. Non-positive host
    /// bounds are expected to arrive here as zero.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA8 contents, row-major.
    #[inline]
    pub fn frame(&self) -> &[u8] {
        &self.data
    }

    /// Reset every pixel to transparent black.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Source-over blend of `color` into the pixel at `(x, y)`.
    fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba, alpha: f32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let a = (color.a * alpha).clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let off = (y as usize * self.width as usize + x as usize) * 4;
        let blend = |dst: u8, src: u8| (src as f32 * a + dst as f32 * (1.0 - a)) as u8;
        self.data[off] = blend(self.data[off], color.r);
        self.data[off + 1] = blend(self.data[off + 1], color.g);
        self.data[off + 2] = blend(self.data[off + 2], color.b);
        let dst_a = self.data[off + 3] as f32 / 255.0;
        self.data[off + 3] = ((a + dst_a * (1.0 - a)) * 255.0) as u8;
    }

    /// Fill a soft-edged circle centered at `center`.
    ///
    /// Scans the bounding box and converts distance from the rim into pixel
    /// coverage, which antialiases the edge for the small radii the field
    /// uses.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if radius <= 0.0 || self.width == 0 || self.height == 0 {
            return;
        }
        let min_x = (center.x - radius - 1.0).floor() as i32;
        let max_x = (center.x + radius + 1.0).ceil() as i32;
        let min_y = (center.y - radius - 1.0).floor() as i32;
        let max_y = (center.y + radius + 1.0).ceil() as i32;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5).distance(center);
                let coverage = (radius + 0.5 - d).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend_pixel(x, y, color, coverage);
                }
            }
        }
    }

    /// Stroke a 1px line from `a` to `b` with Bresenham stepping and
    /// alpha-over blending.
    pub fn stroke_line(&mut self, a: Vec2, b: Vec2, color: Rgba) {
        if self.width == 0 || self.height == 0 || color.a <= 0.0 {
            return;
        }
        let (mut x, mut y) = (a.x.round() as i32, a.y.round() as i32);
        let (x1, y1) = (b.x.round() as i32, b.y.round() as i32);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.blend_pixel(x, y, color, 1.0);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}
