//! Integration tests for Layer 2: Engine
//!
//! Tests for pattern matching, conflict resolution, and the run loop.

mod patterns;
mod rules;
