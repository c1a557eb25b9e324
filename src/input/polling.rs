use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use crate::{
    foundation::core::Point,
    foundation::error::{TrailError, TrailResult},
    input::feed::{PositionSample, PositionSender, SourceKind},
};

/// Roughly 60 Hz.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Something that can report the current cursor position on demand.
///
/// Returning `None` means "unavailable right now" (no permission, no display); the poller just
/// tries again on the next interval.
pub trait CursorProbe: Send + 'static {
    /// Current cursor position in top-left-origin screen space.
    fn cursor_position(&mut self) -> Option<Point>;
}

impl<F> CursorProbe for F
where
    F: FnMut() -> Option<Point> + Send + 'static,
{
    fn cursor_position(&mut self) -> Option<Point> {
        self()
    }
}

/// Background thread polling a [`CursorProbe`] and forwarding changed positions to the feed.
#[derive(Debug)]
pub struct PollingSource {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl PollingSource {
    /// Start polling `probe` every `interval`.
    pub fn spawn<P: CursorProbe>(
        mut probe: P,
        sender: PositionSender,
        interval: Duration,
    ) -> TrailResult<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("trailfx-poll".to_owned())
            .spawn(move || {
                let mut last: Option<Point> = None;
                while !stop_flag.load(Ordering::Acquire) {
                    if let Some(p) = probe.cursor_position()
                        && last != Some(p)
                    {
                        if sender
                            .send(PositionSample::now(p, SourceKind::Poll))
                            .is_err()
                        {
                            tracing::debug!("position feed closed; polling stops");
                            break;
                        }
                        last = Some(p);
                    }
                    thread::sleep(interval);
                }
            })
            .map_err(|e| TrailError::position_source(format!("spawn polling thread: {e}")))?;

        tracing::debug!(interval_ms = interval.as_millis() as u64, "polling source started");
        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// `true` until [`PollingSource::stop`] is called or the thread exits on its own.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Signal the thread and wait for it to exit.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            tracing::warn!("polling thread panicked");
        }
    }
}

impl Drop for PollingSource {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/polling.rs"]
mod tests;
