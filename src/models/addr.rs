//! Address arithmetic: increment, decrement and family normalization.
//!
//! Addresses are treated as big-endian unsigned integers of 32 or 128
//! bits. All functions take and return plain values; caller memory is
//! never aliased or mutated in place.

use std::net::IpAddr;

/// Reduce an IPv4-mapped IPv6 address (`::ffff:a.b.c.d`) to its
/// canonical 4-byte IPv4 form. Any other address is returned unchanged.
///
/// Applied before cross-address comparisons so that both
/// representations of the same IPv4 address compare equal in length
/// and bytes.
pub fn canonical(addr: IpAddr) -> IpAddr {
    match addr {
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => addr,
        },
        IpAddr::V4(_) => addr,
    }
}

/// Add one to an address.
///
/// The carry runs from the least significant byte leftward and stops
/// at the first byte that does not wrap. An all-ones address wraps
/// silently to all zeroes.
pub fn increment(addr: IpAddr) -> IpAddr {
    match canonical(addr) {
        IpAddr::V4(v4) => {
            let mut octets = v4.octets();
            carry_add(&mut octets);
            IpAddr::V4(octets.into())
        }
        IpAddr::V6(v6) => {
            let mut octets = v6.octets();
            carry_add(&mut octets);
            IpAddr::V6(octets.into())
        }
    }
}

/// Subtract one from an address.
///
/// The borrow runs from the least significant byte leftward and stops
/// at the first byte that does not wrap. An all-zeroes address wraps
/// silently to all ones.
pub fn decrement(addr: IpAddr) -> IpAddr {
    match canonical(addr) {
        IpAddr::V4(v4) => {
            let mut octets = v4.octets();
            carry_sub(&mut octets);
            IpAddr::V4(octets.into())
        }
        IpAddr::V6(v6) => {
            let mut octets = v6.octets();
            carry_sub(&mut octets);
            IpAddr::V6(octets.into())
        }
    }
}

fn carry_add(octets: &mut [u8]) {
    for byte in octets.iter_mut().rev() {
        let (value, wrapped) = byte.overflowing_add(1);
        *byte = value;
        if !wrapped {
            break;
        }
    }
}

fn carry_sub(octets: &mut [u8]) {
    for byte in octets.iter_mut().rev() {
        let (value, wrapped) = byte.overflowing_sub(1);
        *byte = value;
        if !wrapped {
            break;
        }
    }
}
