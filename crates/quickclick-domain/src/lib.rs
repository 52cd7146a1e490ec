//! Domain enumerations shared across Quick Click crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! Stored and transported by their SCREAMING_SNAKE_CASE names.

pub mod advert;
pub mod user;
