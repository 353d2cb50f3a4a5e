//! Per-run configuration: the format specification string, dual
//! `landscape~portrait` option values, and the one-time resolution step that
//! collapses them into an immutable [`model::ResolvedConfig`].

pub mod format;
pub mod model;
