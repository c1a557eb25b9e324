use crate::{
    effects::{EffectInput, FALLOFF_MAGIC, dot, falloff},
    foundation::core::{Rgb, Vec2},
    render::primitive::Primitive,
};

/// Sparkle jitter amplitude in pixels.
pub const JITTER_PX: f64 = 3.0;

const JITTER_FREQ_X: f64 = 11.0;
const JITTER_FREQ_Y: f64 = 10.0;
const BASE_HUE: f64 = 0.82;
const HUE_SWING: f64 = 0.06;
const TWINKLE_FREQ: f64 = 8.0;

/// Per-point sparkle offset: independent sinusoids on each axis, phase-shifted by index.
pub fn jitter(clock: f64, i: usize) -> Vec2 {
    let i = i as f64;
    Vec2::new(
        JITTER_PX * (JITTER_FREQ_X * clock + 0.9 * i).sin(),
        JITTER_PX * (JITTER_FREQ_Y * clock + 1.3 * i + 0.5).sin(),
    )
}

/// Twinkle multiplier in `[0.4, 1.0]`.
pub fn twinkle(clock: f64, i: usize) -> f32 {
    (0.7 + 0.3 * (TWINKLE_FREQ * clock + 1.7 * i as f64).sin()) as f32
}

/// Purple/pink band color, drifting slowly over time.
pub fn color_at(clock: f64, i: usize) -> Rgb {
    let hue = BASE_HUE + HUE_SWING * (0.5 * clock + 0.1 * i as f64).sin();
    Rgb::from_hsl(hue as f32, 0.85, 0.65)
}

/// Jittering, twinkling sparkles.
pub fn generate(input: &EffectInput<'_>) -> Vec<Primitive> {
    let count = input.points.len();
    let clock = input.clock_seconds;
    let size = input.config.point_size;

    input
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let alpha = p.alpha * falloff(i, count, FALLOFF_MAGIC) * twinkle(clock, i);
            let color = color_at(clock, i).with_alpha(alpha);
            dot(p, jitter(clock, i), size * 0.8, color)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/magic.rs"]
mod tests;
