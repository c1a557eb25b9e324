use super::*;
use crate::{
    config::settings::TimeStep,
    driver::clock::HUE_STEP,
    effects::rainbow::HUE_SPREAD,
    foundation::core::{Rgb, Size},
    input::feed::SourceKind,
    render::primitive::Primitive,
    render::recording::RecordingSurface,
};

fn driver(config: TrailConfig) -> FrameDriver<RecordingSurface> {
    let mut d = FrameDriver::new(config);
    d.attach(RecordingSurface::new(Size::new(800.0, 600.0)));
    d
}

fn step() -> Duration {
    Duration::from_millis(16)
}

fn point_hue(p: &Primitive) -> f32 {
    let c = p.color().unwrap();
    let max = c.r.max(c.g).max(c.b);
    let min = c.r.min(c.g).min(c.b);
    let d = max - min;
    let h = if max == c.r {
        ((c.g - c.b) / d).rem_euclid(6.0)
    } else if max == c.g {
        (c.b - c.r) / d + 2.0
    } else {
        (c.r - c.g) / d + 4.0
    };
    h / 6.0
}

#[test]
fn starts_idle_and_animates_once_attached() {
    let mut d: FrameDriver<RecordingSurface> = FrameDriver::new(TrailConfig::default());
    assert_eq!(d.state(), DriverState::Idle);
    assert_eq!(d.tick(step()).unwrap(), FrameReport::idle());

    d.attach(RecordingSurface::new(Size::new(10.0, 10.0)));
    assert_eq!(d.state(), DriverState::Animating);
}

#[test]
fn position_updates_are_admitted_without_a_surface() {
    let mut d: FrameDriver<RecordingSurface> = FrameDriver::new(TrailConfig::default());
    d.on_position_update(1.0, 2.0);
    assert_eq!(d.store().len(), 1);
    // Idle ticks do not age anything.
    d.tick(Duration::from_secs(5)).unwrap();
    assert_eq!(d.store().len(), 1);
}

#[test]
fn empty_trail_skips_the_surface() {
    let mut d = driver(TrailConfig::default());
    let report = d.tick(step()).unwrap();
    assert_eq!(report.state, DriverState::Animating);
    assert!(!report.drawn);
    assert!(d.surface().unwrap().frames().is_empty());
}

#[test]
fn disabling_clears_immediately_and_reenabling_starts_empty() {
    let mut d = driver(TrailConfig::default());
    for i in 0..5 {
        d.on_position_update(f64::from(i), 0.0);
    }
    d.set_enabled(false);
    assert_eq!(d.state(), DriverState::Idle);
    assert!(d.store().is_empty());

    d.on_position_update(9.0, 9.0);
    assert!(d.store().is_empty());
    assert!(!d.tick(step()).unwrap().drawn);

    d.set_enabled(true);
    assert_eq!(d.state(), DriverState::Animating);
    assert!(d.store().is_empty());
}

#[test]
fn detach_returns_surface_and_drops_trail() {
    let mut d = driver(TrailConfig::default());
    d.on_position_update(1.0, 1.0);
    d.tick(step()).unwrap();
    let surface = d.detach().unwrap();
    assert_eq!(surface.frames().len(), 1);
    assert!(d.store().is_empty());
    assert_eq!(d.state(), DriverState::Idle);
}

#[test]
fn small_capacity_scenario() {
    let config = TrailConfig {
        trail_length: 4,
        fade_duration: 1.0,
        effect_style: EffectStyle::Smooth,
        time_step: TimeStep::Fixed { seconds: 0.25 },
        ..TrailConfig::default()
    };
    let mut d = driver(config);
    for i in 0..5 {
        d.on_position_update(f64::from(i), 0.0);
    }
    let xs: Vec<f64> = d.store().iter().map(|p| p.position.x).collect();
    assert_eq!(xs, vec![4.0, 3.0, 2.0, 1.0]);

    for _ in 0..4 {
        d.tick(step()).unwrap();
    }
    assert!(d.store().is_empty());
    assert!((d.clock_seconds() - 1.0).abs() < 1e-12);
}

#[test]
fn smooth_frame_matches_the_trail() {
    let config = TrailConfig {
        primary_color: Rgb::new(0.2, 0.4, 0.8),
        ..TrailConfig::default()
    };
    let mut d = driver(config);
    for i in 0..10 {
        d.on_position_update(f64::from(i) * 5.0, 0.0);
    }
    let report = d.tick(step()).unwrap();
    assert!(report.drawn);
    assert_eq!(report.primitives, report.points);

    let frame = d.surface().unwrap().last().unwrap();
    assert_eq!(frame.uniforms.viewport, Size::new(800.0, 600.0));
    assert_eq!(frame.uniforms.point_size, config.point_size);
    let mut prev_alpha = f32::INFINITY;
    for prim in &frame.primitives {
        let c = prim.color().unwrap();
        assert_eq!(c.rgb(), config.primary_color);
        assert!(c.a <= prev_alpha);
        prev_alpha = c.a;
    }
}

#[test]
fn rainbow_hue_moves_by_one_step_per_frame() {
    let config = TrailConfig {
        effect_style: EffectStyle::Rainbow,
        fade_duration: 3.0,
        ..TrailConfig::default()
    };
    let mut d = driver(config);
    for i in 0..8 {
        d.on_position_update(f64::from(i), 0.0);
    }
    d.tick(step()).unwrap();
    d.tick(step()).unwrap();

    let frames = d.surface().unwrap().frames();
    let (a, b) = (&frames[0].primitives, &frames[1].primitives);
    assert_eq!(a.len(), b.len());
    for i in 0..a.len() {
        let delta = (point_hue(&b[i]) - point_hue(&a[i])).rem_euclid(1.0);
        assert!((delta - HUE_STEP as f32).abs() < 5e-4, "index {i}: {delta}");
    }
    let spread = (point_hue(&a[1]) - point_hue(&a[0])).rem_euclid(1.0);
    assert!((spread - HUE_SPREAD as f32).abs() < 5e-4);
}

#[test]
fn rainbow_colors_repeat_after_the_hue_wraps() {
    let config = TrailConfig {
        effect_style: EffectStyle::Rainbow,
        fade_duration: 3.0,
        time_step: TimeStep::Fixed { seconds: 0.001 },
        ..TrailConfig::default()
    };
    let mut d = driver(config);
    for i in 0..8 {
        d.on_position_update(f64::from(i), 0.0);
    }
    for _ in 0..501 {
        d.tick(step()).unwrap();
    }

    let frames = d.surface().unwrap().frames();
    assert_eq!(frames.len(), 501);
    let (first, wrapped) = (&frames[0].primitives, &frames[500].primitives);
    assert_eq!(first.len(), wrapped.len());
    for i in 0..first.len() {
        let a = first[i].color().unwrap().rgb();
        let b = wrapped[i].color().unwrap().rgb();
        assert!((a.r - b.r).abs() < 1e-4, "index {i}");
        assert!((a.g - b.g).abs() < 1e-4, "index {i}");
        assert!((a.b - b.b).abs() < 1e-4, "index {i}");
    }
}

#[test]
fn rainbow_insertions_take_the_head_hue() {
    let config = TrailConfig {
        effect_style: EffectStyle::Rainbow,
        ..TrailConfig::default()
    };
    let mut d = driver(config);
    d.tick(step()).unwrap();
    d.on_position_update(0.0, 0.0);
    let expected = rainbow::color_at(d.hue_offset(), 0);
    assert_eq!(d.store().head().unwrap().color, expected);
}

#[test]
fn surface_errors_propagate() {
    let mut d = driver(TrailConfig::default());
    d.surface_mut().unwrap().fail_with("device lost");
    d.on_position_update(1.0, 1.0);
    let err = d.tick(step()).unwrap_err();
    assert!(err.to_string().contains("device lost"));
}

#[test]
fn measured_step_uses_elapsed_time() {
    let config = TrailConfig {
        time_step: TimeStep::Measured { max_seconds: 0.1 },
        ..TrailConfig::default()
    };
    let mut d = driver(config);
    let r = d.tick(Duration::from_millis(40)).unwrap();
    assert!((r.dt - 0.04).abs() < 1e-9);
    let r = d.tick(Duration::from_secs(2)).unwrap();
    assert!((r.dt - 0.1).abs() < 1e-9);
}

#[test]
fn measured_step_with_negative_cap_ticks_without_advancing() {
    let config = TrailConfig {
        time_step: TimeStep::Measured { max_seconds: -1.0 },
        ..TrailConfig::default()
    };
    let mut d = driver(config);
    d.on_position_update(3.0, 4.0);
    let r = d.tick(Duration::from_millis(16)).unwrap();
    assert_eq!(r.dt, 0.0);
    assert!(r.drawn);
    assert_eq!(d.clock_seconds(), 0.0);
    assert_eq!(d.store().len(), 1);
}

#[test]
fn shrinking_capacity_truncates() {
    let mut d = driver(TrailConfig::default());
    for i in 0..20 {
        d.on_position_update(f64::from(i), 0.0);
    }
    d.set_config(TrailConfig {
        trail_length: 5,
        ..*d.config()
    });
    assert_eq!(d.store().len(), 5);
    assert_eq!(d.store().head().unwrap().position.x, 19.0);
}

#[test]
fn sync_config_applies_only_new_revisions() {
    let shared = SharedConfig::new(TrailConfig::default());
    let mut d = driver(TrailConfig::default());
    assert!(d.sync_config(&shared));
    assert!(!d.sync_config(&shared));

    shared.update(|c| c.effect_style = EffectStyle::Magic);
    assert!(d.sync_config(&shared));
    assert_eq!(d.config().effect_style, EffectStyle::Magic);

    shared.update(|c| c.enabled = false);
    assert!(d.sync_config(&shared));
    assert_eq!(d.state(), DriverState::Idle);
}

#[test]
fn feed_samples_pass_through_the_arbiter() {
    let (tx, feed) = PositionFeed::channel();
    let mut d = driver(TrailConfig::default());
    assert!(d.connect_feed(feed).is_none());

    tx.send_xy(1.0, 1.0, SourceKind::Hook).unwrap();
    tx.send_xy(50.0, 50.0, SourceKind::Poll).unwrap();
    tx.send_xy(2.0, 2.0, SourceKind::Hook).unwrap();
    d.tick(step()).unwrap();

    let xs: Vec<f64> = d.store().iter().map(|p| p.position.x).collect();
    assert_eq!(xs, vec![2.0, 1.0]);
    assert_eq!(d.arbiter().rejected(), 1);
    assert_eq!(d.arbiter().accepted(), 2);
}

#[test]
fn branches_only_grow_when_enabled() {
    let config = TrailConfig {
        effect_style: EffectStyle::Lightning,
        fade_duration: 3.0,
        seed: 7,
        ..TrailConfig::default()
    };
    let mut d = driver(config);
    for i in 0..40 {
        d.on_position_update(f64::from(i) * 4.0, 100.0);
    }
    for _ in 0..120 {
        d.tick(step()).unwrap();
    }
    assert!(d.branches().is_empty());

    d.set_config(TrailConfig {
        lightning_branches: true,
        ..config
    });
    for i in 0..40 {
        d.on_position_update(f64::from(i) * 4.0, 120.0);
    }
    let mut seen = 0;
    for _ in 0..120 {
        d.tick(step()).unwrap();
        seen = seen.max(d.branches().len());
        assert!(d.branches().len() <= crate::effects::branches::MAX_BRANCHES);
    }
    assert!(seen > 0);

    d.set_config(TrailConfig {
        effect_style: EffectStyle::Smooth,
        ..*d.config()
    });
    assert!(d.branches().is_empty());
}
