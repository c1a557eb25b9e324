use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgb;

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbObj { r: f32, g: f32, b: f32 },
            HslObj { h: f32, s: f32, l: f32 },
            Arr(Vec<f32>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbObj { r, g, b } => Ok(Rgb::new(r, g, b)),
            // Degrees on the wire, normalized internally.
            Repr::HslObj { h, s, l } => Ok(hsl_to_rgb((h % 360.0 + 360.0) % 360.0 / 360.0, s, l)),
            Repr::Arr(v) => {
                if v.len() == 3 {
                    Ok(Rgb::new(v[0], v[1], v[2]))
                } else {
                    Err(serde::de::Error::custom("rgb array must have len 3 ([r,g,b])"))
                }
            }
        }
    }
}

/// Parse `#RRGGBB` (the leading `#` is optional, case-insensitive).
pub fn parse_hex(s: &str) -> Result<Rgb, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if s.len() != 6 || !s.is_ascii() {
        return Err("hex color must be #RRGGBB (case-insensitive)".to_owned());
    }

    Ok(Rgb::from_u8(
        hex_byte(&s[0..2])?,
        hex_byte(&s[2..4])?,
        hex_byte(&s[4..6])?,
    ))
}

/// Standard HSL -> RGB conversion with every component normalized to `[0, 1]`.
///
/// Hue wraps, saturation and lightness clamp.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return Rgb::new(l, l, l);
    }

    fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    Rgb::new(
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
