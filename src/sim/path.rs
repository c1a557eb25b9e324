use std::{f64::consts::TAU, fmt, str::FromStr};

use crate::{
    foundation::core::{Point, Size},
    foundation::error::TrailError,
};

/// A synthetic cursor trajectory parameterized by time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorPath {
    /// One revolution every two seconds around the viewport center.
    #[default]
    Circle,
    /// A 3:2 Lissajous figure filling most of the viewport.
    Lissajous,
    /// Left-to-right sweep across the middle, wrapping every three seconds.
    Line,
}

impl CursorPath {
    /// Every path, in help order.
    pub const ALL: [Self; 3] = [Self::Circle, Self::Lissajous, Self::Line];

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Lissajous => "lissajous",
            Self::Line => "line",
        }
    }

    /// Cursor position at `t` seconds inside `viewport` (top-left origin).
    pub fn position_at(self, t: f64, viewport: Size) -> Point {
        let (w, h) = (viewport.width, viewport.height);
        let center = Point::new(w * 0.5, h * 0.5);
        match self {
            Self::Circle => {
                let r = 0.35 * w.min(h);
                let a = TAU * t * 0.5;
                Point::new(center.x + r * a.cos(), center.y + r * a.sin())
            }
            Self::Lissajous => {
                let a = TAU * t * 0.25;
                Point::new(
                    center.x + 0.4 * w * (3.0 * a).sin(),
                    center.y + 0.4 * h * (2.0 * a).sin(),
                )
            }
            Self::Line => {
                let u = (t / 3.0).rem_euclid(1.0);
                Point::new(w * (0.1 + 0.8 * u), center.y)
            }
        }
    }
}

impl fmt::Display for CursorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CursorPath {
    type Err = TrailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == kind)
            .ok_or_else(|| TrailError::config(format!("unknown cursor path '{kind}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sim/path.rs"]
mod tests;
