//! IPv4 address arithmetic.
//!
//! Conversion between dotted-decimal strings and `u32`, and the bitwise
//! network/broadcast/host derivations. Everything is computed on `u32` so
//! `!mask` never picks up sign bits.

use super::mask::SubnetMask;
use crate::error::{Result, SubnetError};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(SubnetError::InvalidPrefix(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Pack a dotted-decimal string into a big-endian `u32`.
///
/// Exactly four decimal octets in `0..=255` are accepted.
pub fn address_to_integer(ip: &str) -> Result<u32> {
    let parts: Vec<&str> = ip.trim().split('.').collect();
    if parts.len() != 4 {
        return Err(SubnetError::InvalidAddressFormat(ip.to_string()));
    }
    let mut bits = 0u32;
    for part in parts {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SubnetError::InvalidAddressFormat(ip.to_string()));
        }
        let octet: u8 = part
            .parse()
            .map_err(|_| SubnetError::InvalidAddressFormat(ip.to_string()))?;
        bits = (bits << 8) | u32::from(octet);
    }
    Ok(bits)
}

/// Unpack a `u32` into dotted-decimal, most significant octet first.
pub fn integer_to_address(n: u32) -> String {
    Ipv4Addr::from(n).to_string()
}

/// Parse a dotted-decimal string into an [`Ipv4Addr`].
pub fn parse_address(ip: &str) -> Result<Ipv4Addr> {
    address_to_integer(ip).map(Ipv4Addr::from)
}

/// Network address: `ip & mask`.
pub fn network_address(ip: Ipv4Addr, mask: SubnetMask) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(ip) & mask.bits())
}

/// Broadcast address: `network | !mask`.
pub fn broadcast_address(network: Ipv4Addr, mask: SubnetMask) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(network) | !mask.bits())
}

/// First host after the network address.
///
/// Wraps for `255.255.255.255`, which the validator never lets through.
pub fn first_host(network: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(network).wrapping_add(1))
}

/// Last host before the broadcast address.
pub fn last_host(broadcast: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(broadcast).wrapping_sub(1))
}

/// Returns the network address of the block following `network`.
pub fn ip_after_subnet(network: Ipv4Addr, mask: SubnetMask) -> Result<Ipv4Addr> {
    let network_bits = u32::from(network) & mask.bits();
    // /0 covers the whole space, there is nothing after it
    let subnet_size = mask.block_size().ok_or(SubnetError::AddressOverflow(network))?;
    let next_subnet_bits = network_bits
        .checked_add(subnet_size)
        .ok_or(SubnetError::AddressOverflow(network))?;
    Ok(Ipv4Addr::from(next_subnet_bits))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(len: u8) -> SubnetMask {
        SubnetMask::from_prefix(len).unwrap()
    }

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert_eq!(get_cidr_mask(33), Err(SubnetError::InvalidPrefix(33)));
    }

    #[test]
    fn test_address_to_integer() {
        assert_eq!(address_to_integer("192.168.1.100").unwrap(), 0xC0A80164);
        assert_eq!(address_to_integer("0.0.0.0").unwrap(), 0);
        assert_eq!(address_to_integer("255.255.255.255").unwrap(), u32::MAX);
        assert_eq!(address_to_integer(" 10.0.0.1 ").unwrap(), 0x0A000001);

        for bad in [
            "",
            "10.0.0",
            "10.0.0.0.1",
            "10.0.0.256",
            "a.b.c.d",
            "10..0.1",
            "10.0.0.-1",
            "10.0.0.+1",
        ] {
            assert_eq!(
                address_to_integer(bad),
                Err(SubnetError::InvalidAddressFormat(bad.to_string())),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_integer_to_address() {
        assert_eq!(integer_to_address(0xC0A80164), "192.168.1.100");
        assert_eq!(integer_to_address(0), "0.0.0.0");
        assert_eq!(integer_to_address(u32::MAX), "255.255.255.255");
    }

    #[test]
    fn test_network_address() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(network_address(ip, mask(24)), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(network_address(ip, mask(16)), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(network_address(ip, mask(8)), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(network_address(ip, mask(32)), ip);
        assert_eq!(
            network_address(Ipv4Addr::new(192, 168, 1, 100), mask(26)),
            Ipv4Addr::new(192, 168, 1, 64)
        );
    }

    #[test]
    fn test_broadcast_address() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_address(ip, mask(24)),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_address(ip, mask(16)),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(
            broadcast_address(Ipv4Addr::new(192, 0, 0, 0), mask(8)),
            Ipv4Addr::new(192, 255, 255, 255)
        );
        assert_eq!(broadcast_address(ip, mask(32)), ip);
        // top bit set in the network must survive the OR
        assert_eq!(
            broadcast_address(Ipv4Addr::new(128, 0, 0, 0), mask(1)),
            Ipv4Addr::new(255, 255, 255, 255)
        );
    }

    #[test]
    fn test_first_last_host() {
        assert_eq!(
            first_host(Ipv4Addr::new(10, 0, 0, 0)),
            Ipv4Addr::new(10, 0, 0, 1)
        );
        assert_eq!(
            last_host(Ipv4Addr::new(10, 0, 0, 255)),
            Ipv4Addr::new(10, 0, 0, 254)
        );
        assert_eq!(
            first_host(Ipv4Addr::new(10, 0, 0, 255)),
            Ipv4Addr::new(10, 0, 1, 0)
        );
    }

    #[test]
    fn test_ip_after_subnet() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            ip_after_subnet(ip, mask(24)).unwrap(),
            Ipv4Addr::new(192, 168, 2, 0)
        );
        assert_eq!(
            ip_after_subnet(ip, mask(16)).unwrap(),
            Ipv4Addr::new(192, 169, 0, 0)
        );
        assert_eq!(
            ip_after_subnet(ip, mask(8)).unwrap(),
            Ipv4Addr::new(193, 0, 0, 0)
        );
        assert_eq!(
            ip_after_subnet(ip, mask(32)).unwrap(),
            Ipv4Addr::new(192, 168, 1, 1)
        );
        assert!(ip_after_subnet(Ipv4Addr::new(255, 255, 255, 0), mask(24)).is_err());
        assert!(ip_after_subnet(Ipv4Addr::new(0, 0, 0, 0), mask(0)).is_err());
    }
}
