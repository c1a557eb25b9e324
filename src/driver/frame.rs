use std::time::Duration;

use crate::{
    config::settings::TrailConfig,
    config::shared::SharedConfig,
    driver::clock::AnimationClock,
    effects::{EffectInput, branches::BranchField, branches::LightningBranch, rainbow},
    effects::style::EffectStyle,
    foundation::core::Point,
    foundation::error::TrailResult,
    input::{arbiter::SourceArbiter, feed::PositionFeed},
    render::primitive::FrameUniforms,
    render::surface::PresentationSurface,
    trail::store::TrailStore,
};

/// Whether the driver is producing frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DriverState {
    /// No surface attached, or the trail is disabled.
    #[default]
    Idle,
    /// Surface attached and enabled; every tick ages, generates and draws.
    Animating,
}

/// What one call to [`FrameDriver::tick`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// State the tick ran in.
    pub state: DriverState,
    /// Seconds the clock advanced by (zero when idle).
    pub dt: f64,
    /// Live points after aging.
    pub points: usize,
    /// Primitives generated.
    pub primitives: usize,
    /// `true` when the surface was asked to draw.
    pub drawn: bool,
    /// Animation frame counter after this tick.
    pub frame: u64,
}

impl FrameReport {
    /// Report for a tick that did nothing.
    pub fn idle() -> Self {
        Self::default()
    }
}

/// Owns the trail and runs the per-frame pipeline against a presentation surface.
///
/// Everything here runs on one timeline: position updates, configuration changes and ticks are
/// all plain `&mut self` calls. Asynchronous capture sources reach the driver through a
/// [`PositionFeed`], drained at the start of every tick.
#[derive(Debug)]
pub struct FrameDriver<S> {
    config: TrailConfig,
    config_revision: Option<u64>,
    store: TrailStore,
    branches: BranchField,
    clock: AnimationClock,
    surface: Option<S>,
    state: DriverState,
    feed: Option<PositionFeed>,
    arbiter: SourceArbiter,
}

impl<S: PresentationSurface> FrameDriver<S> {
    /// Idle driver with no surface. `config` is used as given; normalize it at the boundary.
    pub fn new(config: TrailConfig) -> Self {
        Self {
            config,
            config_revision: None,
            store: TrailStore::new(config.trail_length),
            branches: BranchField::new(config.seed),
            clock: AnimationClock::new(),
            surface: None,
            state: DriverState::Idle,
            feed: None,
            arbiter: SourceArbiter::default(),
        }
    }

    /// Attach a surface, returning the previous one. Starts animating when enabled.
    pub fn attach(&mut self, surface: S) -> Option<S> {
        let previous = self.surface.replace(surface);
        self.refresh_state();
        previous
    }

    /// Detach the surface and drop the trail.
    pub fn detach(&mut self) -> Option<S> {
        let surface = self.surface.take();
        self.store.clear();
        self.branches.clear();
        self.refresh_state();
        surface
    }

    /// Turn the trail on or off. Disabling drops every point and branch immediately.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.config.enabled == enabled {
            return;
        }
        self.config.enabled = enabled;
        if !enabled {
            self.store.clear();
            self.branches.clear();
        }
        self.refresh_state();
    }

    /// Apply a configuration snapshot.
    pub fn set_config(&mut self, config: TrailConfig) {
        let prev = self.config;
        if config.trail_length != prev.trail_length {
            self.store.set_capacity(config.trail_length);
        }
        if config.seed != prev.seed {
            self.branches = BranchField::new(config.seed);
        }
        if config.effect_style != EffectStyle::Lightning || !config.lightning_branches {
            self.branches.clear();
        }
        if config.effect_style != prev.effect_style {
            tracing::debug!(from = %prev.effect_style, to = %config.effect_style, "effect style changed");
        }
        self.config = TrailConfig {
            enabled: prev.enabled,
            ..config
        };
        self.set_enabled(config.enabled);
    }

    /// Pull the shared configuration if it changed since the last sync. Returns `true` when a
    /// new snapshot was applied.
    pub fn sync_config(&mut self, shared: &SharedConfig) -> bool {
        let (config, revision) = shared.snapshot_with_revision();
        if self.config_revision == Some(revision) {
            return false;
        }
        self.config_revision = Some(revision);
        self.set_config(config);
        true
    }

    /// Record a new cursor position. Ignored while disabled.
    pub fn on_position_update(&mut self, x: f64, y: f64) {
        if !self.config.enabled {
            return;
        }
        let hint = match self.config.effect_style {
            EffectStyle::Rainbow => rainbow::color_at(self.clock.hue_offset(), 0),
            _ => self.config.primary_color,
        };
        self.store.insert(Point::new(x, y), hint);
    }

    /// Drain `feed` at the start of every tick. Replaces any previously connected feed.
    pub fn connect_feed(&mut self, feed: PositionFeed) -> Option<PositionFeed> {
        self.feed.replace(feed)
    }

    /// Stop draining the connected feed.
    pub fn disconnect_feed(&mut self) -> Option<PositionFeed> {
        self.feed.take()
    }

    /// Run one frame. `elapsed` is the wall time since the previous tick and only matters for
    /// the measured time step.
    pub fn tick(&mut self, elapsed: Duration) -> TrailResult<FrameReport> {
        self.drain_feed();

        if self.state != DriverState::Animating {
            return Ok(FrameReport::idle());
        }
        let Some(surface) = self.surface.as_mut() else {
            return Ok(FrameReport::idle());
        };

        let dt = self.config.time_step.resolve(elapsed.as_secs_f64());
        self.clock.advance(dt);
        self.store.age_all(dt, self.config.fade_duration);

        let branching =
            self.config.effect_style == EffectStyle::Lightning && self.config.lightning_branches;
        if branching {
            self.branches.step(self.store.as_slice());
        }

        let input = EffectInput {
            points: self.store.as_slice(),
            clock_seconds: self.clock.seconds(),
            hue_offset: self.clock.hue_offset(),
            config: &self.config,
            branches: self.branches.branches(),
        };
        let primitives = input.generate();

        let mut report = FrameReport {
            state: self.state,
            dt,
            points: self.store.len(),
            primitives: primitives.len(),
            drawn: false,
            frame: self.clock.frames(),
        };
        tracing::trace!(
            frame = report.frame,
            points = report.points,
            primitives = report.primitives,
            "tick"
        );

        if primitives.is_empty() {
            return Ok(report);
        }
        let uniforms = FrameUniforms {
            viewport: surface.viewport(),
            point_size: self.config.point_size,
            clock_seconds: self.clock.seconds(),
        };
        surface.render(&primitives, &uniforms)?;
        report.drawn = true;
        Ok(report)
    }

    /// Current state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// The live trail.
    pub fn store(&self) -> &TrailStore {
        &self.store
    }

    /// Animation clock in seconds.
    pub fn clock_seconds(&self) -> f64 {
        self.clock.seconds()
    }

    /// Rainbow hue offset in `[0, 1)`.
    pub fn hue_offset(&self) -> f64 {
        self.clock.hue_offset()
    }

    /// Live lightning branches.
    pub fn branches(&self) -> &[LightningBranch] {
        self.branches.branches()
    }

    /// Active configuration.
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// Source arbitration counters for the connected feed.
    pub fn arbiter(&self) -> &SourceArbiter {
        &self.arbiter
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    fn drain_feed(&mut self) {
        let Some(feed) = self.feed.take() else {
            return;
        };
        for sample in feed.drain() {
            if self.arbiter.accept(&sample) {
                self.on_position_update(sample.position.x, sample.position.y);
            }
        }
        self.feed = Some(feed);
    }

    fn refresh_state(&mut self) {
        let next = if self.surface.is_some() && self.config.enabled {
            DriverState::Animating
        } else {
            DriverState::Idle
        };
        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, "driver state changed");
            self.state = next;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/frame.rs"]
mod tests;
