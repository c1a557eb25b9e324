//! Position capture boundary: samples, the feed that carries them onto the render timeline,
//! source arbitration, and a polling fallback source.

pub(crate) mod arbiter;
pub(crate) mod feed;
pub(crate) mod polling;
