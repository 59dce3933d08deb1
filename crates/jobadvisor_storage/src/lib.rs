//! Typed facts, profile validation, and the append-only fact store.
//!
//! This crate provides:
//! - [`Fact`] - Closed set of fact variants (profile, branch, recommendation)
//! - [`Attr`] - Compile-time-checked attribute names used by patterns
//! - [`Profile`] - The candidate profile, validated from a [`Record`](jobadvisor_foundation::Record)
//! - [`FactStore`] - Insertion-ordered, append-only fact storage

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod fact;
pub mod profile;
pub mod store;

pub use fact::{Attr, Branch, Fact, FactId, FactKind, Job, Recommendation};
pub use profile::Profile;
pub use store::{FactStore, StoredFact};
