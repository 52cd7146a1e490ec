//! Auth types shared across Quick Click crates.
//!
//! Provides JWT issuing/validation and the `AuthenticatedUser` extractor.

pub mod identity;
pub mod token;
