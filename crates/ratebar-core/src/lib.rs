#![forbid(unsafe_code)]

//! Core: geometry primitives, pointer events, and logging for ratebar.

pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span, warn};
