//! Headless Host
//!
//! A [`RenderContext`](crate::core::context::RenderContext) that renders
//! nothing and records everything. Each host call is appended to a trace in
//! call order; GPU-side work is additionally queued and only moves into a
//! [`Submission`] when the frame renderer submits.
//!
//! Used by the test suite, the benchmarks and the `frame_trace` demo app.

pub mod context;
pub mod trace;

pub use context::HeadlessContext;
pub use trace::{DrawRecord, HostCall, Submission};
