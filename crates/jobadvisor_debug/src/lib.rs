//! Tracing and explanation for the job advisor.
//!
//! This crate provides:
//! - [`Tracer`] - Records engine events into a bounded [`TraceBuffer`]
//! - [`HumanFormatter`] - Renders trace records one per line
//! - [`explain::why`] - Walks provenance from a fact back to the profile
//! - [`ObservabilityConfig`] - Switches for all of the above

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod explain;
pub mod trace;

pub use config::ObservabilityConfig;
pub use explain::{WhyChain, WhyStep, format_why, why};
pub use trace::{
    HumanFormatter, TraceBuffer, TraceBufferStats, TraceEvent, TraceFormatter, TraceOutput,
    TraceRecord, Tracer, TracerConfig,
};
