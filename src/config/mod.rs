//! Runtime configuration: the value type, its boundary clamping, and the cell shared with the
//! settings layer.

pub(crate) mod settings;
pub(crate) mod shared;
