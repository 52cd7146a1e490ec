//! Test utilities for Quick Click services.
//!
//! Only for `[dev-dependencies]`.

pub mod auth;
