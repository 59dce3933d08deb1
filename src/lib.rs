//! Job advisor - forward-chaining rule engine for job recommendations
//!
//! This crate re-exports all layers of the job advisor for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: jobadvisor_runtime    - CLI driver, profile parsing, reports
//! Layer 3: jobadvisor_debug      - Engine tracing, why-explanations
//! Layer 2: jobadvisor_engine     - Pattern matching, agenda, rules, advise
//! Layer 1: jobadvisor_storage    - Typed facts, profile validation, fact store
//! Layer 0: jobadvisor_foundation - Core types (Value, Record, Error)
//! ```

pub use jobadvisor_debug as debug;
pub use jobadvisor_engine as engine;
pub use jobadvisor_foundation as foundation;
pub use jobadvisor_runtime as runtime;
pub use jobadvisor_storage as storage;

pub use jobadvisor_engine::{Advice, AdvisorConfig, advise, advise_record};
pub use jobadvisor_storage::{Job, Profile, Recommendation};
