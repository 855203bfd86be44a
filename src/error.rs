//! Error types for prefix construction and arithmetic.

use std::net::IpAddr;

use crate::models::Prefix;

/// Errors returned by prefix construction, splitting and exclusion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Operands belong to different address families (IPv4 vs IPv6).
    #[error("address family mismatch: {network} and {other}")]
    AddressFamilyMismatch { network: IpAddr, other: IpAddr },

    /// A prefix length is out of range for its address family, or a
    /// host prefix was asked to split further.
    #[error("invalid prefix length /{mask} for a {bits}-bit address")]
    InvalidPrefixLength { mask: u8, bits: u8 },

    /// The sub-prefix is not nested inside the network, so it cannot
    /// be carved out by bisection.
    #[error("{other} is not contained in {network}")]
    NotContained { network: Prefix, other: Prefix },

    /// A CIDR string could not be parsed.
    #[error("invalid CIDR notation: {0}")]
    InvalidCidr(String),
}
