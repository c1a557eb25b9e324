use crate::{
    effects::{EffectInput, FALLOFF_LIGHTNING, falloff, trail_t},
    foundation::core::{Rgb, Vec2},
    render::primitive::{Primitive, RibbonPair},
};

/// Newest points left clear so the cursor itself stays unobstructed.
pub const HEAD_SKIP: usize = 3;
/// Every `STRIDE`-th remaining point grows a wisp.
pub const STRIDE: usize = 2;

const BASE_HALF_WIDTH: f64 = 2.5;
const TIP_HALF_WIDTH: f64 = 0.6;
const MAX_RISE_PX: f64 = 18.0;
const MIN_RISE_PX: f64 = 4.0;
const SWAY_PX: f64 = 4.0;
const SWAY_FREQ: f64 = 6.0;
const TIP_ALPHA: f32 = 0.35;
const BRANCH_WIDTH: f32 = 1.5;

const FLAME_ORANGE: Rgb = Rgb::new(1.0, 0.55, 0.1);
const FLAME_TIP: Rgb = Rgb::new(1.0, 0.95, 0.6);
const ARC_WHITE: Rgb = Rgb::new(0.85, 0.92, 1.0);

/// Upward flame wisps along the trail, plus any live side-branches.
pub fn generate(input: &EffectInput<'_>) -> Vec<Primitive> {
    let count = input.points.len();
    let clock = input.clock_seconds;
    let primary = input.config.primary_color;
    let base_rgb = FLAME_ORANGE.lerp(primary, 0.2);

    let mut out: Vec<Primitive> = input
        .points
        .iter()
        .enumerate()
        .skip(HEAD_SKIP)
        .step_by(STRIDE)
        .map(|(i, p)| {
            let alpha = p.alpha * falloff(i, count, FALLOFF_LIGHTNING);
            let t = f64::from(trail_t(i, count));
            let rise = MAX_RISE_PX * (1.0 - t) + MIN_RISE_PX;
            let sway = SWAY_PX * (SWAY_FREQ * clock + 0.7 * i as f64).sin();

            let base = p.position;
            let tip = base + Vec2::new(sway, -rise);
            Primitive::Ribbon {
                pairs: vec![
                    RibbonPair {
                        left: base - Vec2::new(BASE_HALF_WIDTH, 0.0),
                        right: base + Vec2::new(BASE_HALF_WIDTH, 0.0),
                        color: base_rgb.with_alpha(alpha),
                    },
                    RibbonPair {
                        left: tip - Vec2::new(TIP_HALF_WIDTH, 0.0),
                        right: tip + Vec2::new(TIP_HALF_WIDTH, 0.0),
                        color: FLAME_TIP.with_alpha(alpha * TIP_ALPHA),
                    },
                ],
            }
        })
        .collect();

    if input.config.lightning_branches {
        let arc = ARC_WHITE.lerp(primary, 0.3);
        for b in input.branches {
            let color = arc.with_alpha(b.decay * 0.9);
            out.extend(b.points.windows(2).map(|seg| Primitive::Line {
                from: seg[0],
                to: seg[1],
                width: BRANCH_WIDTH,
                color,
            }));
        }
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/effects/lightning.rs"]
mod tests;
