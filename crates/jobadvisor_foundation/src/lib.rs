//! Core values, types, records, and errors for the job advisor.
//!
//! This crate provides:
//! - [`Value`] - Scalar values carried by facts and profile records
//! - [`Type`] - Type descriptors used during profile validation
//! - [`Record`] - Persistent field map describing a profile before validation
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod record;
pub mod types;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind, SemanticLimit};
pub use record::Record;
pub use types::Type;
pub use value::Value;

/// Result type alias using the job advisor error.
pub type Result<T> = std::result::Result<T, Error>;
