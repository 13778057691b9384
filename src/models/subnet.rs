//! Computed subnet records.

use super::SubnetMask;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything derived for one subnet.
///
/// Built once by the calculator and never mutated.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetResult {
    /// Input address with the host bits cleared.
    pub network_address: Ipv4Addr,
    /// Mask the subnet was computed with.
    pub subnet_mask: SubnetMask,
    /// Network address with the host bits set.
    pub broadcast_address: Ipv4Addr,
    /// Network address plus one.
    pub first_host_address: Ipv4Addr,
    /// Broadcast address minus one.
    pub last_host_address: Ipv4Addr,
    /// Always the first host.
    pub gateway_address: Ipv4Addr,
    /// `2^(32 - prefix) - 2`, clamped to 0 for /31 and /32.
    pub total_usable_hosts: u32,
    /// Number of leading one bits in `subnet_mask`.
    pub prefix_length: u8,
}

impl SubnetResult {
    /// `network/prefix`
    pub fn cidr(&self) -> String {
        format!("{}/{}", self.network_address, self.prefix_length)
    }

    /// `first - last`
    pub fn host_range(&self) -> String {
        format!("{} - {}", self.first_host_address, self.last_host_address)
    }
}

impl std::fmt::Display for SubnetResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.cidr())
    }
}

/// Classful address range by first octet.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AddressClass {
    A,
    B,
    C,
    D,
    E,
}

impl AddressClass {
    /// Leading mask octets that must be 255 for this class. D and E have none.
    pub fn required_mask_octets(&self) -> usize {
        match self {
            AddressClass::A => 1,
            AddressClass::B => 2,
            AddressClass::C => 3,
            AddressClass::D | AddressClass::E => 0,
        }
    }
}

impl std::fmt::Display for AddressClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D",
            AddressClass::E => "E",
        };
        write!(f, "{name}")
    }
}

/// Mask and fit reported for one host requirement.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    /// Position of the requirement in the caller's input.
    pub index: usize,
    /// Hosts the caller asked for.
    pub hosts_required: u32,
    /// Usable hosts in the chosen block.
    pub hosts_available: u32,
    /// Smallest mask holding `hosts_required`.
    pub mask: SubnetMask,
    /// Prefix length of `mask`.
    pub prefix_length: u8,
    /// `required / available * 100`
    pub efficiency_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_helpers() {
        let result = SubnetResult {
            network_address: Ipv4Addr::new(10, 0, 0, 0),
            subnet_mask: SubnetMask::from_prefix(24).unwrap(),
            broadcast_address: Ipv4Addr::new(10, 0, 0, 255),
            first_host_address: Ipv4Addr::new(10, 0, 0, 1),
            last_host_address: Ipv4Addr::new(10, 0, 0, 254),
            gateway_address: Ipv4Addr::new(10, 0, 0, 1),
            total_usable_hosts: 254,
            prefix_length: 24,
        };
        assert_eq!(result.cidr(), "10.0.0.0/24");
        assert_eq!(result.host_range(), "10.0.0.1 - 10.0.0.254");
        assert_eq!(result.to_string(), "10.0.0.0/24");

        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["networkAddress"], "10.0.0.0");
        assert_eq!(json["subnetMask"], "255.255.255.0");
        assert_eq!(json["gatewayAddress"], "10.0.0.1");
        assert_eq!(json["totalUsableHosts"], 254);
    }

    #[test]
    fn test_required_mask_octets() {
        assert_eq!(AddressClass::A.required_mask_octets(), 1);
        assert_eq!(AddressClass::C.required_mask_octets(), 3);
        assert_eq!(AddressClass::E.required_mask_octets(), 0);
    }
}
