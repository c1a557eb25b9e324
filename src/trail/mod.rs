//! Trail point storage and its aging/eviction policy.

pub(crate) mod store;
