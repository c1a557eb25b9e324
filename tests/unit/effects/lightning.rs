use super::*;
use crate::{
    config::settings::TrailConfig,
    effects::branches::BranchField,
    foundation::core::Point,
    trail::store::TrailStore,
};

fn store_with(n: usize) -> TrailStore {
    let mut store = TrailStore::new(64);
    for i in 0..n {
        store.insert(Point::new(200.0 + i as f64 * 4.0, 300.0), Rgb::WHITE);
    }
    store
}

#[test]
fn head_points_are_left_clear() {
    let cfg = TrailConfig::default();
    let mut store = store_with(HEAD_SKIP);
    let input = EffectInput {
        points: store.as_slice(),
        clock_seconds: 0.0,
        hue_offset: 0.0,
        config: &cfg,
        branches: &[],
    };
    assert!(generate(&input).is_empty());
}

#[test]
fn wisps_sampled_at_stride_rise_upward() {
    let cfg = TrailConfig::default();
    let mut store = store_with(20);
    let input = EffectInput {
        points: store.as_slice(),
        clock_seconds: 0.5,
        hue_offset: 0.0,
        config: &cfg,
        branches: &[],
    };
    let prims = generate(&input);
    assert_eq!(prims.len(), (20 - HEAD_SKIP).div_ceil(STRIDE));

    for prim in &prims {
        let Primitive::Ribbon { pairs } = prim else {
            panic!("wisps are ribbons");
        };
        assert_eq!(pairs.len(), 2);
        let (base, tip) = (pairs[0], pairs[1]);
        assert!(tip.left.y < base.left.y);
        assert!(tip.color.a < base.color.a);
        // Orange base, paler tip.
        assert!(base.color.r > base.color.b);
        assert!(tip.color.b > base.color.b);
    }
}

#[test]
fn branches_only_render_when_enabled() {
    let mut store = store_with(12);
    let mut field = BranchField::new(1);
    assert!(field.spawn_at(store.as_slice(), 5));
    let segments = field.branches()[0].points.len() - 1;

    let off = TrailConfig::default();
    let on = TrailConfig {
        lightning_branches: true,
        ..TrailConfig::default()
    };
    let points = store.as_slice();

    let base = generate(&EffectInput {
        points,
        clock_seconds: 0.0,
        hue_offset: 0.0,
        config: &off,
        branches: field.branches(),
    });
    let with_branches = generate(&EffectInput {
        points,
        clock_seconds: 0.0,
        hue_offset: 0.0,
        config: &on,
        branches: field.branches(),
    });
    assert_eq!(with_branches.len(), base.len() + segments);
    assert!(
        with_branches
            .iter()
            .any(|p| matches!(p, Primitive::Line { .. }))
    );
}
