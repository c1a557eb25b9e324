//! The per-frame pipeline: state machine, animation clock and hand-off to the surface.

pub(crate) mod clock;
pub(crate) mod frame;
