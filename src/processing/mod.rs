//! Algorithms over network prefixes.
//!
//! This module contains the prefix partitioning logic:
//! - [`exclude_subnet`] - carving a nested sub-prefix out of a network

mod exclude;

// Re-export public functions
pub use exclude::exclude_subnet;
