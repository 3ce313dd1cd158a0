//! CLI library components for the roster intake tool.

pub mod logging;
pub mod pipeline;
