//! Ambient building blocks shared by Quick Click services: configuration
//! loading, the JSON error envelope, health probes, request tracing and
//! serde helpers.

pub mod config;
pub mod error;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
