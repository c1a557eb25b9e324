use crate::{
    foundation::core::Size,
    foundation::error::{TrailError, TrailResult},
    render::primitive::{FrameUniforms, Primitive},
    render::surface::PresentationSurface,
};

/// One captured draw call.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedFrame {
    /// Primitives in submission order.
    pub primitives: Vec<Primitive>,
    /// Uniforms passed alongside.
    pub uniforms: FrameUniforms,
}

/// In-memory surface for tests and debugging.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    viewport: Size,
    frames: Vec<RecordedFrame>,
    fail_with: Option<String>,
}

impl RecordingSurface {
    /// Create a recorder reporting `viewport` as its size.
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            frames: Vec::new(),
            fail_with: None,
        }
    }

    /// Make every subsequent `render` fail with `msg`.
    pub fn fail_with(&mut self, msg: impl Into<String>) {
        self.fail_with = Some(msg.into());
    }

    /// Captured frames in draw order.
    pub fn frames(&self) -> &[RecordedFrame] {
        &self.frames
    }

    /// Most recent frame, if any.
    pub fn last(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }

    /// Forget captured frames.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl PresentationSurface for RecordingSurface {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn render(&mut self, primitives: &[Primitive], uniforms: &FrameUniforms) -> TrailResult<()> {
        if let Some(msg) = &self.fail_with {
            return Err(TrailError::surface(msg.clone()));
        }
        self.frames.push(RecordedFrame {
            primitives: primitives.to_vec(),
            uniforms: *uniforms,
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/recording.rs"]
mod tests;
