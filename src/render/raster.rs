use std::path::Path;

use crate::{
    foundation::core::{Point, Rgba, Rgba8Premul, Size},
    foundation::error::{TrailError, TrailResult},
    foundation::math::mul_div255_u8,
    render::primitive::{FrameUniforms, Primitive, RibbonPair},
    render::surface::PresentationSurface,
};

/// Background used when none is configured.
pub const DEFAULT_BACKGROUND: [u8; 4] = [18, 20, 28, 255];

/// CPU rasterizer drawing primitives into a premultiplied RGBA8 buffer.
///
/// Points are anti-aliased discs, lines are anti-aliased capsules and ribbons are
/// Gouraud-shaded triangle pairs. Every draw composites source-over.
#[derive(Clone, Debug)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    background: Rgba8Premul,
    clear_each_frame: bool,
    data: Vec<u8>,
}

impl RasterSurface {
    /// Allocate a `width x height` surface cleared to [`DEFAULT_BACKGROUND`].
    pub fn new(width: u32, height: u32) -> TrailResult<Self> {
        if width == 0 || height == 0 {
            return Err(TrailError::surface("raster surface must be non-empty"));
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| TrailError::surface("raster buffer size overflow"))?;

        let [r, g, b, a] = DEFAULT_BACKGROUND;
        let mut surface = Self {
            width,
            height,
            background: Rgba8Premul::from_straight_rgba(r, g, b, a),
            clear_each_frame: true,
            data: vec![0; len],
        };
        surface.clear();
        Ok(surface)
    }

    /// Replace the clear color (straight RGBA8).
    pub fn with_background(mut self, rgba: [u8; 4]) -> Self {
        let [r, g, b, a] = rgba;
        self.background = Rgba8Premul::from_straight_rgba(r, g, b, a);
        self.clear();
        self
    }

    /// Keep previous frames underneath new ones instead of clearing.
    pub fn accumulate(mut self, on: bool) -> Self {
        self.clear_each_frame = !on;
        self
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Premultiplied RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Premultiplied pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Reset every pixel to the background.
    pub fn clear(&mut self) {
        let bg = self.background.to_array();
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&bg);
        }
    }

    /// Straight-alpha copy of the buffer.
    pub fn to_image(&self) -> TrailResult<image::RgbaImage> {
        let mut straight = self.data.clone();
        for px in straight.chunks_exact_mut(4) {
            let a = px[3];
            for c in &mut px[..3] {
                *c = unpremul(*c, a);
            }
        }
        image::RgbaImage::from_raw(self.width, self.height, straight)
            .ok_or_else(|| TrailError::surface("raster buffer does not match its dimensions"))
    }

    /// Encode the current buffer as PNG.
    pub fn save_png(&self, path: &Path) -> TrailResult<()> {
        self.to_image()?
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| TrailError::surface(format!("write png '{}': {e}", path.display())))
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    fn blend(&mut self, x: i64, y: i64, color: Rgba, coverage: f32) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let coverage = coverage.clamp(0.0, 1.0);
        if coverage <= 0.0 || color.a <= 0.0 {
            return;
        }
        let src = Rgba {
            a: color.a * coverage,
            ..color
        }
        .to_premul8();
        let i = self.offset(x as u32, y as u32);
        let dst = [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ];
        self.data[i..i + 4].copy_from_slice(&over(dst, src.to_array()));
    }

    /// Pixel-center bounding box of `[min, max]`, clipped to the surface.
    fn pixel_span(&self, min: Point, max: Point) -> Option<(i64, i64, i64, i64)> {
        let x0 = (min.x.floor() as i64).max(0);
        let y0 = (min.y.floor() as i64).max(0);
        let x1 = (max.x.ceil() as i64).min(i64::from(self.width) - 1);
        let y1 = (max.y.ceil() as i64).min(i64::from(self.height) - 1);
        (x0 <= x1 && y0 <= y1).then_some((x0, y0, x1, y1))
    }

    fn fill_disc(&mut self, center: Point, diameter: f32, color: Rgba) {
        let r = f64::from(diameter.max(1.0)) * 0.5;
        let reach = r + 1.0;
        let Some((x0, y0, x1, y1)) = self.pixel_span(
            Point::new(center.x - reach, center.y - reach),
            Point::new(center.x + reach, center.y + reach),
        ) else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = Point::new(x as f64 + 0.5, y as f64 + 0.5).distance(center);
                self.blend(x, y, color, (r + 0.5 - d) as f32);
            }
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Rgba) {
        let half = f64::from(width.max(1.0)) * 0.5;
        let reach = half + 1.0;
        let Some((x0, y0, x1, y1)) = self.pixel_span(
            Point::new(from.x.min(to.x) - reach, from.y.min(to.y) - reach),
            Point::new(from.x.max(to.x) + reach, from.y.max(to.y) + reach),
        ) else {
            return;
        };
        let seg = to - from;
        let len2 = seg.hypot2();
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                let t = if len2 > 0.0 {
                    ((p - from).dot(seg) / len2).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let d = p.distance(from + seg * t);
                self.blend(x, y, color, (half + 0.5 - d) as f32);
            }
        }
    }

    fn fill_ribbon(&mut self, pairs: &[RibbonPair]) {
        for w in pairs.windows(2) {
            let (a, b) = (w[0], w[1]);
            self.fill_triangle([(a.left, a.color), (a.right, a.color), (b.left, b.color)]);
            self.fill_triangle([(a.right, a.color), (b.right, b.color), (b.left, b.color)]);
        }
    }

    fn fill_triangle(&mut self, verts: [(Point, Rgba); 3]) {
        let [(p0, c0), (p1, c1), (p2, c2)] = verts;
        let area = edge(p0, p1, p2);
        if area.abs() < 1e-9 {
            return;
        }
        let min = Point::new(p0.x.min(p1.x).min(p2.x), p0.y.min(p1.y).min(p2.y));
        let max = Point::new(p0.x.max(p1.x).max(p2.x), p0.y.max(p1.y).max(p2.y));
        let Some((x0, y0, x1, y1)) = self.pixel_span(min, max) else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                let w0 = edge(p1, p2, p) / area;
                let w1 = edge(p2, p0, p) / area;
                let w2 = edge(p0, p1, p) / area;
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }
                let color = Rgba {
                    r: (c0.r as f64 * w0 + c1.r as f64 * w1 + c2.r as f64 * w2) as f32,
                    g: (c0.g as f64 * w0 + c1.g as f64 * w1 + c2.g as f64 * w2) as f32,
                    b: (c0.b as f64 * w0 + c1.b as f64 * w1 + c2.b as f64 * w2) as f32,
                    a: (c0.a as f64 * w0 + c1.a as f64 * w1 + c2.a as f64 * w2) as f32,
                };
                self.blend(x, y, color, 1.0);
            }
        }
    }
}

impl PresentationSurface for RasterSurface {
    fn viewport(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    fn render(&mut self, primitives: &[Primitive], _uniforms: &FrameUniforms) -> TrailResult<()> {
        if self.clear_each_frame {
            self.clear();
        }
        for prim in primitives {
            match prim {
                Primitive::Point {
                    position,
                    size,
                    color,
                } => self.fill_disc(*position, *size, *color),
                Primitive::Line {
                    from,
                    to,
                    width,
                    color,
                } => self.stroke_line(*from, *to, *width, *color),
                Primitive::Ribbon { pairs } => self.fill_ribbon(pairs),
            }
        }
        Ok(())
    }
}

fn edge(a: Point, b: Point, p: Point) -> f64 {
    (b - a).cross(p - a)
}

/// Source-over for premultiplied RGBA8.
fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    if src[3] == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

fn unpremul(c: u8, a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
