//! Explanations of how an advisory run reached its conclusions.
//!
//! - [`why`] - Derivation chain from a fact back to the seed profile
//! - [`format_why`] - Indented rendering of a chain

pub mod why;

pub use why::{WhyChain, WhyQuery, WhyStep, format_why, why};
