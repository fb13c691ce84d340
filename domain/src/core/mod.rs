//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — Claude model snapshot identifiers
//! - [`error::RegistryError`] — typed lookup failures

pub mod error;
pub mod model;
