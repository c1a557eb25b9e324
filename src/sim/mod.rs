//! Headless runs along synthetic cursor paths, used by the CLI and integration tests.

pub(crate) mod path;
pub(crate) mod script;
