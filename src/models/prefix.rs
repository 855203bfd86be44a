//! Network prefix (CIDR block) type and geometry.
//!
//! Provides [`Prefix`] for representing IPv4/IPv6 networks in CIDR
//! notation, with broadcast address, bisection into sibling prefixes,
//! and containment tests.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::Error;
use crate::models::addr::increment;

/// Maximum prefix length for an IPv4 address (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;

/// Maximum prefix length for an IPv6 address (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// Prefix length of the IPv4-mapped IPv6 block `::ffff:0:0/96`.
const MAPPED_PREFIX_LEN: u8 = 96;

/// Convert a prefix length to an IPv4 subnet mask as u32.
///
/// Callers guarantee `len <= 32`.
fn mask_v4(len: u8) -> u32 {
    let right_len = MAX_LENGTH_V4 - len;
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Convert a prefix length to an IPv6 subnet mask as u128.
///
/// Callers guarantee `len <= 128`.
fn mask_v6(len: u8) -> u128 {
    if len == 0 {
        0
    } else {
        u128::MAX << (MAX_LENGTH_V6 - len)
    }
}

fn family_bits(addr: &IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => MAX_LENGTH_V4,
        IpAddr::V6(_) => MAX_LENGTH_V6,
    }
}

/// IPv4 or IPv6 network prefix with CIDR notation support.
///
/// An immutable value type: the base address and prefix length are
/// validated and family-normalized on construction, so derived
/// equality, ordering and hashing agree with the CIDR text form.
/// A base with host bits set is tolerated; the mask is only applied
/// when deriving the broadcast address.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Prefix {
    addr: IpAddr,
    mask: u8,
}

impl Prefix {
    /// Create a new [`Prefix`] from a CIDR string
    /// (e.g. "10.0.0.0/24" or "2000::/16").
    pub fn new(addr_cidr: &str) -> Result<Prefix, Error> {
        addr_cidr.parse()
    }

    /// Create a prefix from a base address and prefix length.
    ///
    /// An IPv4-mapped IPv6 base whose prefix lies wholly inside
    /// `::ffff:0:0/96` (i.e. `mask >= 96`) is reduced to the
    /// equivalent IPv4 prefix, so both spellings of an IPv4 network
    /// compare equal.
    ///
    /// # Returns
    /// [`Error::InvalidPrefixLength`] if `mask` exceeds the maximum
    /// for the address family.
    pub fn from_parts(addr: IpAddr, mask: u8) -> Result<Prefix, Error> {
        let (addr, mask) = match addr {
            IpAddr::V6(v6) if mask >= MAPPED_PREFIX_LEN => match v6.to_ipv4_mapped() {
                Some(v4) => (IpAddr::V4(v4), mask - MAPPED_PREFIX_LEN),
                None => (addr, mask),
            },
            _ => (addr, mask),
        };
        let bits = family_bits(&addr);
        if mask > bits {
            return Err(Error::InvalidPrefixLength { mask, bits });
        }
        Ok(Prefix { addr, mask })
    }

    /// The base address.
    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    /// The prefix length.
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Maximum prefix length for this prefix's address family
    /// (32 for IPv4, 128 for IPv6).
    pub fn max_length(&self) -> u8 {
        family_bits(&self.addr)
    }

    /// Get the highest (broadcast) address in the prefix.
    ///
    /// Network bits keep the base's bits, host bits are forced to 1.
    pub fn broadcast(&self) -> IpAddr {
        match self.addr {
            IpAddr::V4(a) => {
                let mask = mask_v4(self.mask);
                IpAddr::V4(((u32::from(a) & mask) | !mask).into())
            }
            IpAddr::V6(a) => {
                let mask = mask_v6(self.mask);
                IpAddr::V6(((u128::from(a) & mask) | !mask).into())
            }
        }
    }

    /// Split the prefix into its two equal-sized child prefixes.
    ///
    /// The children are one bit longer and exactly partition this
    /// prefix's range: the first keeps the base address, the second
    /// starts one past the first child's broadcast address.
    ///
    /// # Returns
    /// [`Error::InvalidPrefixLength`] if the prefix is already at the
    /// maximum length for its family and cannot be split further.
    pub fn split(&self) -> Result<(Prefix, Prefix), Error> {
        let bits = self.max_length();
        if self.mask >= bits {
            return Err(Error::InvalidPrefixLength {
                mask: self.mask + 1,
                bits,
            });
        }
        let mask = self.mask + 1;
        let first = Prefix {
            addr: self.addr,
            mask,
        };
        let second = Prefix {
            addr: increment(first.broadcast()),
            mask,
        };
        Ok((first, second))
    }

    /// True if `other`'s entire address range lies within this
    /// prefix's range.
    ///
    /// Reflexive (`p.contains(&p)` holds for all `p`); always false
    /// across address families.
    pub fn contains(&self, other: &Prefix) -> bool {
        if self.addr.is_ipv4() != other.addr.is_ipv4() {
            return false;
        }
        self.addr <= other.addr && self.broadcast() >= other.broadcast()
    }
}

impl FromStr for Prefix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Prefix, Error> {
        let s = s.trim();
        let (addr, mask) = s
            .split_once('/')
            .ok_or_else(|| Error::InvalidCidr(s.to_string()))?;
        let addr: IpAddr = addr
            .parse()
            .map_err(|_| Error::InvalidCidr(s.to_string()))?;
        let mask: u8 = mask
            .parse()
            .map_err(|_| Error::InvalidCidr(s.to_string()))?;
        Prefix::from_parts(addr, mask)
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl Serialize for Prefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D>(deserializer: D) -> Result<Prefix, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
