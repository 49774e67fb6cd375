//! Minimal raster primitives over an RGB buffer: gradient fill, alpha-blended
//! rounded rectangles, and bitmap text.

use image::{Rgb, RgbImage};

use super::glyphs::{self, TextStyle, GLYPH_COLUMNS, GLYPH_ROWS};

pub type Color = [u8; 3];

/// `0xRRGGBB` → color.
pub const fn hex(rgb: u32) -> Color {
    [(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Grows (or shrinks, for negative `by`) the rectangle on every side.
    pub fn inflate(&self, by: f32) -> Rect {
        Rect {
            x: self.x - by,
            y: self.y - by,
            w: (self.w + 2.0 * by).max(0.0),
            h: (self.h + 2.0 * by).max(0.0),
        }
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// CSS `linear-gradient(<angle>deg, from, to)` over the whole canvas.
    pub fn fill_linear_gradient(&mut self, angle_deg: f32, from: Color, to: Color) {
        let (w, h) = (self.width() as f32, self.height() as f32);
        let theta = angle_deg.to_radians();
        let (dx, dy) = (theta.sin(), -theta.cos());
        let length = (w * dx).abs() + (h * dy).abs();

        for (x, y, px) in self.img.enumerate_pixels_mut() {
            let px_x = x as f32 + 0.5 - w / 2.0;
            let px_y = y as f32 + 0.5 - h / 2.0;
            let t = ((px_x * dx + px_y * dy) / length + 0.5).clamp(0.0, 1.0);
            *px = Rgb([
                lerp(from[0], to[0], t),
                lerp(from[1], to[1], t),
                lerp(from[2], to[2], t),
            ]);
        }
    }

    /// Blends a rounded rectangle with one pixel of edge anti-aliasing.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color, alpha: f32) {
        let radius = radius.min(rect.w / 2.0).min(rect.h / 2.0).max(0.0);
        let x0 = rect.x.floor().max(0.0) as u32;
        let y0 = rect.y.floor().max(0.0) as u32;
        let x1 = ((rect.x + rect.w).ceil().max(0.0) as u32).min(self.width());
        let y1 = ((rect.y + rect.h).ceil().max(0.0) as u32).min(self.height());

        for y in y0..y1 {
            for x in x0..x1 {
                let coverage = rounded_rect_coverage(rect, radius, x as f32 + 0.5, y as f32 + 0.5);
                if coverage > 0.0 {
                    self.blend(x, y, color, alpha * coverage);
                }
            }
        }
    }

    /// Draws folded ASCII text with its top-left corner at `(x, y)`.
    pub fn draw_text(&mut self, x: u32, y: u32, text: &str, style: TextStyle, color: Color) {
        let mut pen_x = x;
        for byte in text.bytes() {
            let columns = glyphs::glyph(byte);
            for (col, &bits) in columns.iter().enumerate().take(GLYPH_COLUMNS as usize) {
                for row in 0..GLYPH_ROWS {
                    if bits >> row & 1 == 0 {
                        continue;
                    }
                    let gx = pen_x + col as u32 * style.scale;
                    let gy = y + row * style.scale;
                    let width = style.scale + u32::from(style.bold);
                    self.fill_block(gx, gy, width, style.scale, color);
                }
            }
            pen_x += style.advance();
        }
    }

    pub fn into_image(self) -> RgbImage {
        self.img
    }

    fn fill_block(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        let x1 = (x + w).min(self.width());
        let y1 = (y + h).min(self.height());
        for py in y..y1 {
            for px in x..x1 {
                self.img.put_pixel(px, py, Rgb(color));
            }
        }
    }

    fn blend(&mut self, x: u32, y: u32, color: Color, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        let px = self.img.get_pixel_mut(x, y);
        for (channel, &src) in px.0.iter_mut().zip(color.iter()) {
            *channel = lerp(*channel, src, alpha);
        }
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
}

/// Fraction of the pixel centred at `(px, py)` covered by the rounded rectangle.
fn rounded_rect_coverage(rect: Rect, radius: f32, px: f32, py: f32) -> f32 {
    // Distance from the point to the rectangle shrunk by `radius`, minus `radius`,
    // gives a signed distance to the rounded outline.
    let cx = rect.x + rect.w / 2.0;
    let cy = rect.y + rect.h / 2.0;
    let qx = (px - cx).abs() - (rect.w / 2.0 - radius);
    let qy = (py - cy).abs() - (rect.h / 2.0 - radius);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    let inside = qx.max(qy).min(0.0);
    let distance = outside + inside - radius;
    (0.5 - distance).clamp(0.0, 1.0)
}
