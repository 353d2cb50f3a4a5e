//! Page render orchestration.

pub mod pipeline;
