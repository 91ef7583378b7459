//! iconlint Core - Foundational types for the icon resource analyzer
//!
//! This crate provides the types that all other iconlint crates depend on:
//! - `ContentHash` - SHA-256 based content identity
//! - `Density` - Screen density buckets and their scale factors
//! - Error types and Result alias

mod density;
mod error;
mod hash;

pub use density::Density;
pub use error::{IconLintError, Result};
pub use hash::ContentHash;
