//! Subnet masks.
//!
//! A [`SubnetMask`] always holds a contiguous run of one bits followed by
//! zero bits, so it maps one-to-one onto a prefix length `0..=32`.

use super::ipv4::{get_cidr_mask, parse_address, MAX_LENGTH};
use crate::error::{Result, SubnetError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Largest host count that still leaves at least a /8 (2^24 - 2).
pub const MAX_HOST_COUNT: u32 = (1 << 24) - 2;

/// A contiguous IPv4 subnet mask.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct SubnetMask(u32);

impl SubnetMask {
    /// Build the mask for a prefix length (`/0` to `/32`).
    pub fn from_prefix(len: u8) -> Result<SubnetMask> {
        get_cidr_mask(len).map(SubnetMask)
    }

    /// Accepts `bits` only if the ones are contiguous from the top.
    pub fn from_bits(bits: u32) -> Result<SubnetMask> {
        if is_contiguous(bits) {
            Ok(SubnetMask(bits))
        } else {
            Err(SubnetError::InvalidMaskFormat(Ipv4Addr::from(bits).to_string()))
        }
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.0)
    }

    /// Number of leading one bits.
    pub fn prefix_length(&self) -> u8 {
        self.0.leading_ones() as u8
    }

    pub fn host_bits(&self) -> u8 {
        MAX_LENGTH - self.prefix_length()
    }

    /// Inverted mask, as used in ACL notation.
    pub fn wildcard(&self) -> Ipv4Addr {
        Ipv4Addr::from(!self.0)
    }

    /// Addresses per block (`!mask + 1`). `None` for /0, which spans 2^32.
    pub fn block_size(&self) -> Option<u32> {
        (!self.0).checked_add(1)
    }

    /// Dotted binary form, e.g. `11111111.11111111.11111111.11000000`.
    pub fn to_binary_string(&self) -> String {
        self.0
            .to_be_bytes()
            .iter()
            .map(|octet| format!("{octet:08b}"))
            .collect::<Vec<String>>()
            .join(".")
    }
}

fn is_contiguous(bits: u32) -> bool {
    // the zero bits of a valid mask, inverted, are a low run of ones
    let inverted = !bits;
    inverted & inverted.wrapping_add(1) == 0
}

impl TryFrom<Ipv4Addr> for SubnetMask {
    type Error = SubnetError;

    fn try_from(addr: Ipv4Addr) -> Result<SubnetMask> {
        SubnetMask::from_bits(u32::from(addr))
    }
}

impl FromStr for SubnetMask {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<SubnetMask> {
        let addr = parse_address(s).map_err(|_| SubnetError::InvalidMaskFormat(s.to_string()))?;
        SubnetMask::try_from(addr).map_err(|_| SubnetError::InvalidMaskFormat(s.to_string()))
    }
}

impl std::fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.addr())
    }
}

impl Serialize for SubnetMask {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SubnetMask {
    fn deserialize<D>(deserializer: D) -> std::result::Result<SubnetMask, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SubnetMask::from_str(&s).map_err(de::Error::custom)
    }
}

/// Descriptive breakdown of a mask.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MaskInfo {
    pub prefix_length: u8,
    pub network_bits: u8,
    pub host_bits: u8,
    pub binary_string: String,
    pub wildcard: Ipv4Addr,
}

/// Describe a mask by its prefix, bit split and binary form.
pub fn mask_info(mask: SubnetMask) -> MaskInfo {
    MaskInfo {
        prefix_length: mask.prefix_length(),
        network_bits: mask.prefix_length(),
        host_bits: mask.host_bits(),
        binary_string: mask.to_binary_string(),
        wildcard: mask.wildcard(),
    }
}

/// Smallest mask whose block holds `hosts` plus network and broadcast.
///
/// host bits = ceil(log2(hosts + 2)); `hosts` must be in `1..=MAX_HOST_COUNT`.
pub fn mask_from_host_count(hosts: u32) -> Result<SubnetMask> {
    if hosts == 0 || hosts > MAX_HOST_COUNT {
        return Err(SubnetError::HostCountOutOfRange(i64::from(hosts)));
    }
    let host_bits = (u64::from(hosts) + 2).next_power_of_two().trailing_zeros() as u8;
    SubnetMask::from_prefix(MAX_LENGTH - host_bits)
}

/// `2^(host bits) - 2`, unclamped: /31 gives 0 and /32 gives -1.
pub fn host_count_from_mask(mask: SubnetMask) -> i64 {
    (1i64 << mask.host_bits()) - 2
}
