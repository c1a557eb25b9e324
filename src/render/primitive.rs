use crate::foundation::core::{Point, Rgba, Size};

/// One renderable unit handed to a presentation surface.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// A round dot.
    Point {
        /// Center in screen space.
        position: Point,
        /// Diameter in pixels.
        size: f32,
        /// Straight RGBA color.
        color: Rgba,
    },
    /// A straight segment of fixed width.
    Line {
        /// Segment start.
        from: Point,
        /// Segment end.
        to: Point,
        /// Stroke width in pixels.
        width: f32,
        /// Straight RGBA color.
        color: Rgba,
    },
    /// A triangle-strip ribbon; consecutive pairs form one quad segment each.
    Ribbon {
        /// Strip cross-sections from base to tip.
        pairs: Vec<RibbonPair>,
    },
}

impl Primitive {
    /// Color of the primitive (the base pair for ribbons).
    pub fn color(&self) -> Option<Rgba> {
        match self {
            Self::Point { color, .. } | Self::Line { color, .. } => Some(*color),
            Self::Ribbon { pairs } => pairs.first().map(|p| p.color),
        }
    }
}

/// One cross-section of a ribbon: two vertices sharing a color.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RibbonPair {
    /// Left edge vertex.
    pub left: Point,
    /// Right edge vertex.
    pub right: Point,
    /// Straight RGBA color at this cross-section.
    pub color: Rgba,
}

/// Per-frame values shared by every primitive in a draw call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameUniforms {
    /// Drawable size of the presentation surface.
    pub viewport: Size,
    /// Nominal point diameter.
    pub point_size: f32,
    /// Animation clock in seconds.
    pub clock_seconds: f64,
}
