use std::time::Duration;

use crate::{
    config::settings::NOMINAL_STEP_SECS,
    driver::frame::{FrameDriver, FrameReport},
    foundation::error::TrailResult,
    render::surface::PresentationSurface,
    sim::path::CursorPath,
};

/// A scripted session: move the cursor along `path` and tick once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptedRun {
    /// Trajectory followed by the cursor.
    pub path: CursorPath,
    /// Number of frames to run.
    pub frames: u32,
    /// Simulated wall time between frames.
    pub frame_interval: Duration,
}

impl Default for ScriptedRun {
    fn default() -> Self {
        Self {
            path: CursorPath::default(),
            frames: 90,
            frame_interval: Duration::from_secs_f64(NOMINAL_STEP_SECS),
        }
    }
}

impl ScriptedRun {
    /// Drive `driver` through the script and return the last frame's report.
    ///
    /// The cursor is sampled on the simulated timeline, so runs are reproducible regardless of
    /// how fast the host executes them.
    #[tracing::instrument(skip(driver), fields(path = %self.path))]
    pub fn play<S: PresentationSurface>(
        &self,
        driver: &mut FrameDriver<S>,
    ) -> TrailResult<FrameReport> {
        let viewport = driver
            .surface()
            .map(|s| s.viewport())
            .unwrap_or_default();
        let step = self.frame_interval.as_secs_f64();

        let mut last = FrameReport::idle();
        for frame in 0..self.frames {
            let p = self.path.position_at(f64::from(frame) * step, viewport);
            driver.on_position_update(p.x, p.y);
            last = driver.tick(self.frame_interval)?;
        }
        tracing::debug!(
            frames = self.frames,
            points = last.points,
            primitives = last.primitives,
            "scripted run finished"
        );
        Ok(last)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sim/script.rs"]
mod tests;
