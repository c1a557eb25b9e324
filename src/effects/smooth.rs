use crate::{
    effects::{EffectInput, FALLOFF_SOFT, dot, falloff, trail_t},
    foundation::core::Vec2,
    render::primitive::Primitive,
};

/// One dot per trail point in the primary color, tapering toward the tail.
pub fn generate(input: &EffectInput<'_>) -> Vec<Primitive> {
    let count = input.points.len();
    let color = input.config.primary_color;
    let size = input.config.point_size;

    input
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let alpha = p.alpha * falloff(i, count, FALLOFF_SOFT);
            let taper = 1.0 - 0.5 * trail_t(i, count);
            dot(p, Vec2::ZERO, size * taper, color.with_alpha(alpha))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/smooth.rs"]
mod tests;
