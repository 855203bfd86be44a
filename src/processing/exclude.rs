//! Subnet exclusion.
//!
//! Carves a nested sub-prefix out of a network, producing the minimal
//! ordered set of disjoint sibling prefixes that cover the remainder.

use crate::error::Error;
use crate::models::Prefix;

/// Compute the sibling prefixes covering `network` minus `other`.
///
/// Repeatedly bisects `network`, accumulating the half that does not
/// contain `other` and descending into the half that does, until one
/// half equals `other` exactly. Each step lengthens the working prefix
/// by one bit, so the loop runs at most 32 (IPv4) or 128 (IPv6) times.
///
/// # Arguments
/// * `network` - the enclosing prefix
/// * `other` - the sub-prefix to exclude; must be nested in `network`
///
/// # Returns
/// The remainder prefixes, largest first: pairwise disjoint, their
/// union is `network`'s range minus `other`'s range, and none equals
/// `other`. Excluding a prefix from itself yields an empty vector.
///
/// # Errors
/// * [`Error::AddressFamilyMismatch`] if the operands differ in family
/// * [`Error::NotContained`] if `other` is not nested inside `network`
pub fn exclude_subnet(network: &Prefix, other: &Prefix) -> Result<Vec<Prefix>, Error> {
    if network.addr().is_ipv4() != other.addr().is_ipv4() {
        return Err(Error::AddressFamilyMismatch {
            network: network.addr(),
            other: other.addr(),
        });
    }
    if !network.contains(other) || other.mask() < network.mask() {
        return Err(Error::NotContained {
            network: *network,
            other: *other,
        });
    }
    if network == other {
        return Ok(Vec::new());
    }

    let mut res = Vec::new();
    let (mut s1, mut s2) = network.split()?;
    loop {
        if s1 == *other {
            res.push(s2);
            break;
        }
        if s2 == *other {
            res.push(s1);
            break;
        }
        if s1.contains(other) {
            res.push(s2);
            (s1, s2) = s1.split()?;
        } else if s2.contains(other) {
            res.push(s1);
            (s1, s2) = s2.split()?;
        } else {
            // Only reachable when `other` has host bits set in its
            // base and straddles the bisection boundary; nothing left
            // to descend into, so return the partial cover.
            log::warn!(
                "exclude: {} straddles a bisection of {}, returning partial cover",
                other,
                network
            );
            break;
        }
    }

    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(s: &str) -> Prefix {
        Prefix::new(s).unwrap()
    }

    #[test]
    fn test_exclude_first_sibling() {
        let res = exclude_subnet(&prefix("192.168.0.0/16"), &prefix("192.168.0.0/17")).unwrap();
        assert_eq!(res, vec![prefix("192.168.128.0/17")]);
    }

    #[test]
    fn test_exclude_second_sibling() {
        let res = exclude_subnet(&prefix("192.168.0.0/16"), &prefix("192.168.128.0/17")).unwrap();
        assert_eq!(res, vec![prefix("192.168.0.0/17")]);
    }

    #[test]
    fn test_exclude_nested() {
        let res = exclude_subnet(&prefix("10.0.0.0/8"), &prefix("10.64.0.0/10")).unwrap();
        assert_eq!(res, vec![prefix("10.128.0.0/9"), prefix("10.0.0.0/10")]);
    }

    #[test]
    fn test_exclude_deep_ipv4() {
        let network = prefix("192.168.0.0/16");
        let other = prefix("192.168.1.0/24");
        let res = exclude_subnet(&network, &other).unwrap();

        // One co-sibling per bisection level, largest first
        assert_eq!(res.len(), 8);
        for (i, p) in res.iter().enumerate() {
            assert_eq!(p.mask(), 17 + i as u8);
            assert!(network.contains(p));
            assert!(!p.contains(&other));
            assert_ne!(*p, other);
        }
    }

    #[test]
    fn test_exclude_self_is_empty() {
        let p = prefix("10.0.0.0/8");
        assert_eq!(exclude_subnet(&p, &p).unwrap(), vec![]);
    }

    #[test]
    fn test_exclude_host_prefix() {
        let res = exclude_subnet(&prefix("10.0.0.0/31"), &prefix("10.0.0.1/32")).unwrap();
        assert_eq!(res, vec![prefix("10.0.0.0/32")]);
    }

    #[test]
    fn test_exclude_family_mismatch() {
        let err = exclude_subnet(&prefix("10.0.0.0/8"), &prefix("2000::/16")).unwrap_err();
        assert!(matches!(err, Error::AddressFamilyMismatch { .. }));
    }

    #[test]
    fn test_exclude_not_contained() {
        // Disjoint networks
        let err = exclude_subnet(&prefix("192.169.0.0/16"), &prefix("192.168.128.0/17"))
            .unwrap_err();
        assert!(matches!(err, Error::NotContained { .. }));

        // `other` larger than `network`
        let err = exclude_subnet(&prefix("192.168.0.0/16"), &prefix("192.168.0.0/15"))
            .unwrap_err();
        assert!(matches!(err, Error::NotContained { .. }));
    }

    #[test]
    fn test_exclude_straddling_base_returns_partial_cover() {
        // Host bits in `other`'s base make it straddle the /17
        // bisection of 10.0.0.0/16, so no sibling ever equals it.
        let network = prefix("10.0.0.0/8");
        let other = Prefix::from_parts("10.0.0.1".parse().unwrap(), 16).unwrap();

        let res = exclude_subnet(&network, &other).unwrap();
        assert_eq!(res.len(), 8);
        assert_eq!(res.last().unwrap().mask(), 16);
    }
}
