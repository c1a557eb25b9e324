use crate::{
    effects::{EffectInput, FALLOFF_SOFT, dot, falloff, trail_t},
    foundation::core::{Rgb, Vec2},
    render::primitive::Primitive,
};

/// Hue distance between neighbouring trail points.
pub const HUE_SPREAD: f64 = 0.03;

/// Hue of trail index `i` for a given global offset, wrapped into `[0, 1)`.
pub fn hue_at(hue_offset: f64, i: usize) -> f64 {
    (hue_offset + i as f64 * HUE_SPREAD).rem_euclid(1.0)
}

/// Fully saturated, mid-lightness color for trail index `i`.
pub fn color_at(hue_offset: f64, i: usize) -> Rgb {
    Rgb::from_hsl(hue_at(hue_offset, i) as f32, 1.0, 0.5)
}

/// Dots colored by a rainbow gradient along the trail that cycles with the hue offset.
pub fn generate(input: &EffectInput<'_>) -> Vec<Primitive> {
    let count = input.points.len();
    let size = input.config.point_size;

    input
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let alpha = p.alpha * falloff(i, count, FALLOFF_SOFT);
            let taper = 1.0 - 0.5 * trail_t(i, count);
            let color = color_at(input.hue_offset, i).with_alpha(alpha);
            dot(p, Vec2::ZERO, size * taper, color)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/rainbow.rs"]
mod tests;
