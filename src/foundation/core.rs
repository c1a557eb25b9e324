pub use kurbo::{Point, Size, Vec2};

/// Straight (non-premultiplied) RGB color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl Rgb {
    /// Pure white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Build a color from channel values in `[0, 1]`.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from 8-bit channels.
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Convert an HSL triple (all components normalized to `[0, 1]`) to RGB.
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        crate::foundation::color::hsl_to_rgb(h, s, l)
    }

    /// Linear interpolation toward `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// Attach an alpha channel.
    pub fn with_alpha(self, a: f32) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Quantize to 8-bit channels.
    pub fn to_u8(self) -> [u8; 3] {
        [unit_to_u8(self.r), unit_to_u8(self.g), unit_to_u8(self.b)]
    }

    /// Format as `#rrggbb`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_u8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Straight RGBA color carried by every emitted primitive.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Opacity in `[0, 1]`.
    pub a: f32,
}

impl Rgba {
    /// Drop the alpha channel.
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Quantize to premultiplied RGBA8.
    pub fn to_premul8(self) -> Rgba8Premul {
        let [r, g, b] = self.rgb().to_u8();
        Rgba8Premul::from_straight_rgba(r, g, b, unit_to_u8(self.a))
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba8Premul {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Premultiply straight 8-bit channels.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            crate::foundation::math::mul_div255_u8(u16::from(c), u16::from(a))
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Channels as an `[r, g, b, a]` array.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

fn unit_to_u8(x: f32) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
