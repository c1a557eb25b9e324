use std::collections::VecDeque;

use crate::foundation::core::{Point, Rgb};

/// Points fainter than this are evicted.
pub const ALPHA_EPSILON: f32 = 0.01;
/// Structural upper bound on store capacity.
pub const MAX_CAPACITY: usize = 256;

/// One historical cursor sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    /// Screen-space position, top-left origin.
    pub position: Point,
    /// Color assigned at insertion time.
    pub color: Rgb,
    /// Opacity in `[0, 1]`, `max(0, 1 - age / fade)`.
    pub alpha: f32,
    /// Seconds since insertion.
    pub age: f64,
}

impl TrailPoint {
    fn fresh(position: Point, color: Rgb) -> Self {
        Self {
            position,
            color,
            alpha: 1.0,
            age: 0.0,
        }
    }
}

/// Bounded deque of trail points, newest at index 0.
#[derive(Clone, Debug)]
pub struct TrailStore {
    points: VecDeque<TrailPoint>,
    capacity: usize,
}

impl TrailStore {
    /// Create an empty store; `capacity` is clamped to `[1, MAX_CAPACITY]`.
    pub fn new(capacity: usize) -> Self {
        let capacity = clamp_capacity(capacity);
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Prepend a fresh point, evicting the oldest one if the store overflows.
    pub fn insert(&mut self, position: Point, color_hint: Rgb) {
        self.points.push_front(TrailPoint::fresh(position, color_hint));
        while self.points.len() > self.capacity {
            self.points.pop_back();
        }
    }

    /// Age every point by `delta_secs`, recompute alpha, and drop faded points.
    pub fn age_all(&mut self, delta_secs: f64, fade_duration: f64) {
        if self.points.is_empty() {
            return;
        }
        for p in &mut self.points {
            p.age += delta_secs;
            p.alpha = alpha_for_age(p.age, fade_duration);
        }
        self.points.retain(|p| p.alpha >= ALPHA_EPSILON);
    }

    /// Change the capacity. Shrinking truncates the oldest points immediately; growing never
    /// touches the contents.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = clamp_capacity(capacity);
        self.points.truncate(self.capacity);
    }

    /// Current capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Number of live points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` when no points are live.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Newest point, if any.
    pub fn head(&self) -> Option<&TrailPoint> {
        self.points.front()
    }

    /// Points from newest to oldest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TrailPoint> + '_ {
        self.points.iter()
    }

    /// Contiguous newest-first view, for generators that index into the trail.
    pub fn as_slice(&mut self) -> &[TrailPoint] {
        self.points.make_contiguous()
    }
}

/// `max(0, 1 - age / fade)`. A non-positive fade duration means "already gone".
pub fn alpha_for_age(age: f64, fade_duration: f64) -> f32 {
    if fade_duration <= 0.0 || !fade_duration.is_finite() {
        return 0.0;
    }
    (1.0 - age / fade_duration).clamp(0.0, 1.0) as f32
}

fn clamp_capacity(n: usize) -> usize {
    n.clamp(1, MAX_CAPACITY)
}

#[cfg(test)]
#[path = "../../tests/unit/trail/store.rs"]
mod tests;
