//! Cursor trail animation engine.
//!
//! A [`FrameDriver`] owns a bounded [`TrailStore`] of recent cursor positions. Every tick it ages
//! the trail, advances the animation clock and hue offset, asks the generator for the configured
//! [`EffectStyle`] for a list of [`Primitive`]s and hands them to a [`PresentationSurface`].
//!
//! Cursor positions arrive either through [`FrameDriver::on_position_update`] or through a
//! [`PositionFeed`], which lets capture threads (a mouse hook, a [`PollingSource`]) deliver
//! samples that are applied on the render timeline.
//!
//! ```
//! use std::time::Duration;
//! use trailfx::{FrameDriver, RecordingSurface, Size, TrailConfig};
//!
//! let mut driver = FrameDriver::new(TrailConfig::default());
//! driver.attach(RecordingSurface::new(Size::new(640.0, 480.0)));
//! driver.on_position_update(10.0, 20.0);
//! let report = driver.tick(Duration::from_millis(16))?;
//! assert!(report.drawn);
//! # Ok::<(), trailfx::TrailError>(())
//! ```

#![forbid(unsafe_code)]

mod config;
mod driver;
mod effects;
mod foundation;
mod input;
mod render;
mod sim;
mod trail;

pub use config::settings::{
    MAX_FADE_SECS, MAX_TRAIL_LENGTH, MIN_FADE_SECS, MIN_TRAIL_LENGTH, NOMINAL_STEP_SECS,
    TimeStep, TrailConfig,
};
pub use config::shared::SharedConfig;
pub use driver::clock::{AnimationClock, HUE_STEP};
pub use driver::frame::{DriverState, FrameDriver, FrameReport};
pub use effects::branches::{
    BRANCH_LIFETIME_FRAMES, BranchField, LightningBranch, MAX_BRANCHES, SPAWN_PROBABILITY,
};
pub use effects::lightning::{HEAD_SKIP, STRIDE};
pub use effects::magic::JITTER_PX;
pub use effects::rainbow::HUE_SPREAD;
pub use effects::style::{EffectGenerator, EffectStyle};
pub use effects::{EffectInput, FALLOFF_LIGHTNING, FALLOFF_MAGIC, FALLOFF_SOFT, falloff, trail_t};
pub use foundation::color::{hsl_to_rgb, parse_hex};
pub use foundation::core::{Point, Rgb, Rgba, Rgba8Premul, Size, Vec2};
pub use foundation::error::{TrailError, TrailResult};
pub use input::arbiter::{DEFAULT_HOOK_STALE_AFTER, SourceArbiter};
pub use input::feed::{PositionFeed, PositionSample, PositionSender, SourceKind};
pub use input::polling::{CursorProbe, DEFAULT_POLL_INTERVAL, PollingSource};
pub use render::primitive::{FrameUniforms, Primitive, RibbonPair};
pub use render::raster::{DEFAULT_BACKGROUND, RasterSurface};
pub use render::recording::{RecordedFrame, RecordingSurface};
pub use render::surface::PresentationSurface;
pub use sim::path::CursorPath;
pub use sim::script::ScriptedRun;
pub use trail::store::{ALPHA_EPSILON, MAX_CAPACITY, TrailPoint, TrailStore, alpha_for_age};
