//! Shared plumbing for foodcart services: health endpoints, tracing setup,
//! request-id middleware, and timestamp serialization.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
