//! Effect generators: pure functions from the live trail to a primitive list.
//!
//! Every generator sees the same [`EffectInput`] and allocates a fresh `Vec<Primitive>`. The
//! only state that survives across frames (the animation clock, the hue offset and the
//! lightning branches) lives in the frame driver and is passed in read-only.

pub(crate) mod branches;
pub(crate) mod lightning;
pub(crate) mod magic;
pub(crate) mod rainbow;
pub(crate) mod smooth;
pub(crate) mod style;

use crate::{
    config::settings::TrailConfig, effects::branches::LightningBranch,
    foundation::core::{Rgba, Vec2}, render::primitive::Primitive, trail::store::TrailPoint,
};

/// Falloff exponent for Smooth and Rainbow.
pub const FALLOFF_SOFT: f32 = 1.5;
/// Falloff exponent for Lightning.
pub const FALLOFF_LIGHTNING: f32 = 1.3;
/// Falloff exponent for Magic.
pub const FALLOFF_MAGIC: f32 = 1.2;

/// Read-only view handed to a generator each frame.
#[derive(Clone, Copy, Debug)]
pub struct EffectInput<'a> {
    /// Live points, newest first.
    pub points: &'a [TrailPoint],
    /// Animation clock in seconds.
    pub clock_seconds: f64,
    /// Rainbow hue offset in `[0, 1)`.
    pub hue_offset: f64,
    /// Active configuration snapshot.
    pub config: &'a TrailConfig,
    /// Live lightning branches (empty unless the branch flag is on).
    pub branches: &'a [LightningBranch],
}

impl EffectInput<'_> {
    /// Run the generator selected by the configured style.
    pub fn generate(&self) -> Vec<Primitive> {
        (self.config.effect_style.generator())(self)
    }
}

/// Position of index `i` along a trail of `count` points, `i / max(1, count)`.
pub fn trail_t(i: usize, count: usize) -> f32 {
    i as f32 / count.max(1) as f32
}

/// The falloff law: `(1 - t)^p`.
pub fn falloff(i: usize, count: usize, p: f32) -> f32 {
    (1.0 - trail_t(i, count)).max(0.0).powf(p)
}

/// Dot primitive helper shared by the point-based styles.
pub(crate) fn dot(point: &TrailPoint, offset: Vec2, size: f32, color: Rgba) -> Primitive {
    Primitive::Point {
        position: point.position + offset,
        size,
        color,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/falloff.rs"]
mod tests;
