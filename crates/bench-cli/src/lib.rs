//! CLI library components for benchq.

pub mod args;
pub mod logging;
pub mod render;
