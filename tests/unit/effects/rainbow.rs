use super::*;
use crate::{config::settings::TrailConfig, foundation::core::Point, trail::store::TrailStore};

#[test]
fn hue_spreads_along_the_trail_and_wraps() {
    assert!((hue_at(0.0, 10) - 0.3).abs() < 1e-12);
    assert!((hue_at(0.99, 1) - 0.02).abs() < 1e-9);
}

#[test]
fn colors_follow_hsl_of_offset_hue() {
    let cfg = TrailConfig::default();
    let mut store = TrailStore::new(32);
    for i in 0..8 {
        store.insert(Point::new(f64::from(i), 0.0), Rgb::WHITE);
    }
    let input = EffectInput {
        points: store.as_slice(),
        clock_seconds: 0.0,
        hue_offset: 0.25,
        config: &cfg,
        branches: &[],
    };
    let prims = generate(&input);
    assert_eq!(prims.len(), 8);
    for (i, prim) in prims.iter().enumerate() {
        let expected = Rgb::from_hsl(hue_at(0.25, i) as f32, 1.0, 0.5);
        let got = prim.color().unwrap().rgb();
        assert!((got.r - expected.r).abs() < 1e-6);
        assert!((got.g - expected.g).abs() < 1e-6);
        assert!((got.b - expected.b).abs() < 1e-6);
    }
}

#[test]
fn head_at_zero_offset_is_red() {
    let c = color_at(0.0, 0);
    assert!((c.r - 1.0).abs() < 1e-6);
    assert!(c.g.abs() < 1e-6);
    assert!(c.b.abs() < 1e-6);
}
