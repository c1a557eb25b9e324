use crate::{
    foundation::core::Size,
    foundation::error::TrailResult,
    render::primitive::{FrameUniforms, Primitive},
};

/// A drawing region that receives one primitive list per frame.
///
/// Implementations own whatever graphics resources they need; the frame driver only hands over
/// geometry. `render` is never called with an empty list.
pub trait PresentationSurface {
    /// Current drawable size in screen units.
    fn viewport(&self) -> Size;

    /// Draw one frame.
    fn render(&mut self, primitives: &[Primitive], uniforms: &FrameUniforms) -> TrailResult<()>;
}

impl<S: PresentationSurface + ?Sized> PresentationSurface for Box<S> {
    fn viewport(&self) -> Size {
        (**self).viewport()
    }

    fn render(&mut self, primitives: &[Primitive], uniforms: &FrameUniforms) -> TrailResult<()> {
        (**self).render(primitives, uniforms)
    }
}
