use std::{
    sync::mpsc,
    time::{Duration, Instant},
};

use crate::{
    foundation::core::Point,
    foundation::error::{TrailError, TrailResult},
};

/// Where a position sample came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Event-driven global mouse hook.
    Hook,
    /// Periodic cursor polling.
    Poll,
}

/// One cursor position, already transformed into top-left-origin screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionSample {
    /// Cursor position.
    pub position: Point,
    /// Producing source.
    pub source: SourceKind,
    /// Capture time.
    pub at: Instant,
}

impl PositionSample {
    /// Sample stamped with the current time.
    pub fn now(position: Point, source: SourceKind) -> Self {
        Self {
            position,
            source,
            at: Instant::now(),
        }
    }
}

/// Producer half of the feed. Cheap to clone and safe to move to capture threads.
#[derive(Clone, Debug)]
pub struct PositionSender {
    tx: mpsc::Sender<PositionSample>,
}

impl PositionSender {
    /// Queue a sample; fails once the consuming feed is gone.
    pub fn send(&self, sample: PositionSample) -> TrailResult<()> {
        self.tx
            .send(sample)
            .map_err(|_| TrailError::position_source("position feed closed"))
    }

    /// Queue `(x, y)` from `source`, stamped now.
    pub fn send_xy(&self, x: f64, y: f64, source: SourceKind) -> TrailResult<()> {
        self.send(PositionSample::now(Point::new(x, y), source))
    }
}

/// Consumer half of the feed, drained by the frame driver on the render timeline.
#[derive(Debug)]
pub struct PositionFeed {
    rx: mpsc::Receiver<PositionSample>,
}

impl PositionFeed {
    /// Create a connected sender/feed pair.
    pub fn channel() -> (PositionSender, PositionFeed) {
        let (tx, rx) = mpsc::channel();
        (PositionSender { tx }, PositionFeed { rx })
    }

    /// Every sample queued so far, in arrival order, without blocking.
    pub fn drain(&self) -> impl Iterator<Item = PositionSample> + '_ {
        self.rx.try_iter()
    }

    /// Wait up to `timeout` for the next sample.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<PositionSample> {
        self.rx.recv_timeout(timeout).ok()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/feed.rs"]
mod tests;
