//! Shared service plumbing for SoundCast.
//!
//! Tracing setup, health handlers, and HTTP middleware used by the API
//! service. Keep this crate free of domain types.

pub mod health;
pub mod middleware;
pub mod tracing;
