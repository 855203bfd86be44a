//! Exact arithmetic over IPv4/IPv6 network prefixes (CIDR blocks).
//!
//! Supports incrementing and decrementing addresses, computing a
//! prefix's broadcast (highest) address, splitting a prefix into its
//! two sibling children, equality and containment tests, and the core
//! operation, subnet exclusion: the minimal ordered set of disjoint
//! sibling prefixes covering a network minus a nested sub-prefix.
//!
//! Pure computation only — no I/O, no shared state. All operations
//! return fresh values; failures are reported as [`Error`] results,
//! never panics.
//!
//! # Examples
//! ```
//! use subnet_exclude::{exclude_subnet, Prefix};
//!
//! let network = Prefix::new("192.168.0.0/16")?;
//! let other = Prefix::new("192.168.1.0/24")?;
//!
//! let rest = exclude_subnet(&network, &other)?;
//! assert_eq!(rest.len(), 8);
//! assert!(rest.iter().all(|p| network.contains(p) && !p.contains(&other)));
//! # Ok::<(), subnet_exclude::Error>(())
//! ```

mod error;
pub mod models;
pub mod processing;

pub use error::Error;
pub use models::{canonical, decrement, increment, Prefix};
pub use processing::exclude_subnet;
