//! Field predicates for calculator input.

use crate::models::{AddressClass, SubnetMask, MAX_HOST_COUNT};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;
use std::str::FromStr;

lazy_static! {
    // four decimal octets 0-255, no leading zeros
    static ref IPV4_RE: Regex = Regex::new(
        r"^((25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.){3}(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])$"
    )
    .expect("Invalid Regex?");
}

/// Dotted-decimal with every octet matching the pattern, octets returned.
fn octets(s: &str) -> Option<Ipv4Addr> {
    let s = s.trim();
    if !IPV4_RE.is_match(s) {
        return None;
    }
    Ipv4Addr::from_str(s).ok()
}

/// Syntactically valid IPv4 that is usable as calculator input.
///
/// `0.0.0.0` and `255.255.255.255` are rejected: neither is a sensible
/// base address or mask here.
pub fn is_valid_ipv4(s: &str) -> bool {
    match octets(s) {
        Some(addr) => !addr.is_unspecified() && !addr.is_broadcast(),
        None => false,
    }
}

/// Valid IPv4 whose bits are contiguous ones then zeros.
pub fn is_valid_subnet_mask(s: &str) -> bool {
    is_valid_ipv4(s) && SubnetMask::from_str(s).is_ok()
}

/// Host count in `1..=16_777_214`.
pub fn is_valid_host_count(hosts: i64) -> bool {
    (1..=i64::from(MAX_HOST_COUNT)).contains(&hosts)
}

/// Classful range by the leading bits of the first octet, `None` for invalid input.
pub fn classify_address(ip: &str) -> Option<AddressClass> {
    if !is_valid_ipv4(ip) {
        return None;
    }
    let first = octets(ip)?.octets()[0];
    match first {
        0..=127 => Some(AddressClass::A),
        128..=191 => Some(AddressClass::B),
        192..=223 => Some(AddressClass::C),
        224..=239 => Some(AddressClass::D),
        240..=255 => Some(AddressClass::E),
    }
}

/// Class A/B/C need their default mask octets set to 255; D and E accept any mask.
pub fn is_mask_appropriate_for_class(ip: &str, mask: &str) -> bool {
    let class = match classify_address(ip) {
        Some(class) => class,
        None => return false,
    };
    let mask = match octets(mask) {
        Some(mask) => mask,
        None => return false,
    };
    mask.octets()
        .iter()
        .take(class.required_mask_octets())
        .all(|octet| *octet == 255)
}
