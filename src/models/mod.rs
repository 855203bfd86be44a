//! Domain models for prefix arithmetic.
//!
//! This module contains the core data structures and primitives:
//! - [`Prefix`] - IPv4/IPv6 network prefix with CIDR notation support
//! - [`increment`] / [`decrement`] - address arithmetic
//! - [`canonical`] - address-family normalization

mod addr;
mod prefix;

// Re-export public types
pub use addr::{canonical, decrement, increment};
pub use prefix::{Prefix, MAX_LENGTH_V4, MAX_LENGTH_V6};
