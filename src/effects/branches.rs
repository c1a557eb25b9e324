use std::f64::consts::TAU;

use crate::{
    effects::lightning::HEAD_SKIP,
    foundation::core::{Point, Vec2},
    foundation::math::Rng64,
    trail::store::TrailPoint,
};

/// Upper bound on concurrently live branches.
pub const MAX_BRANCHES: usize = 6;
/// Frames a branch stays visible.
pub const BRANCH_LIFETIME_FRAMES: u32 = 25;
/// Per-frame spawn probability.
pub const SPAWN_PROBABILITY: f64 = 0.08;

const MIN_VERTICES: usize = 4;
const MAX_VERTICES: usize = 6;
const MIN_SEGMENT_PX: f64 = 6.0;
const MAX_SEGMENT_PX: f64 = 12.0;
const MAX_TURN_RAD: f64 = 0.6;

/// A short forked arc spawned off the trail.
#[derive(Clone, Debug, PartialEq)]
pub struct LightningBranch {
    /// Trail index the branch grew from at spawn time.
    pub origin_index: usize,
    /// Polyline vertices, starting at the origin point.
    pub points: Vec<Point>,
    /// Remaining strength in `[0, 1]`; the branch is dropped at `<= 0`.
    pub decay: f32,
    age_frames: u32,
}

impl LightningBranch {
    fn advance(&mut self) {
        self.age_frames = self.age_frames.saturating_add(1);
        let left = BRANCH_LIFETIME_FRAMES.saturating_sub(self.age_frames);
        self.decay = left as f32 / BRANCH_LIFETIME_FRAMES as f32;
    }
}

/// The set of live branches plus the seeded generator that spawns them.
#[derive(Clone, Debug)]
pub struct BranchField {
    branches: Vec<LightningBranch>,
    rng: Rng64,
}

impl BranchField {
    /// Empty field seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            branches: Vec::with_capacity(MAX_BRANCHES),
            rng: Rng64::new(seed),
        }
    }

    /// Live branches, oldest first.
    pub fn branches(&self) -> &[LightningBranch] {
        &self.branches
    }

    /// Drop every branch.
    pub fn clear(&mut self) {
        self.branches.clear();
    }

    /// One frame: decay existing branches, then maybe spawn a new one.
    pub fn step(&mut self, points: &[TrailPoint]) {
        for b in &mut self.branches {
            b.advance();
        }
        self.branches.retain(|b| b.decay > 0.0);

        if points.len() <= HEAD_SKIP || self.branches.len() >= MAX_BRANCHES {
            return;
        }
        if self.rng.next_f64_01() < SPAWN_PROBABILITY {
            let origin = self.rng.range_usize(HEAD_SKIP, points.len());
            self.spawn_at(points, origin);
        }
    }

    /// Spawn a branch at `origin_index`. Returns `false` when the index is out of range or the
    /// field is full.
    pub fn spawn_at(&mut self, points: &[TrailPoint], origin_index: usize) -> bool {
        let Some(origin) = points.get(origin_index) else {
            return false;
        };
        if self.branches.len() >= MAX_BRANCHES {
            return false;
        }

        let vertices = self.rng.range_usize(MIN_VERTICES, MAX_VERTICES + 1);
        let mut angle = self.rng.range_f64(0.0, TAU);
        let mut cursor = origin.position;
        let mut polyline = Vec::with_capacity(vertices);
        polyline.push(cursor);
        for _ in 1..vertices {
            angle += self.rng.range_f64(-MAX_TURN_RAD, MAX_TURN_RAD);
            let len = self.rng.range_f64(MIN_SEGMENT_PX, MAX_SEGMENT_PX);
            cursor += Vec2::from_angle(angle) * len;
            polyline.push(cursor);
        }

        tracing::trace!(origin_index, vertices, "spawned lightning branch");
        self.branches.push(LightningBranch {
            origin_index,
            points: polyline,
            decay: 1.0,
            age_frames: 0,
        });
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/branches.rs"]
mod tests;
