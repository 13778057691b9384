//! Domain models for IPv4 subnet calculation.
//!
//! This module contains the address math and the records it produces:
//! - [`ipv4`] - dotted-decimal ⇄ `u32` conversion and network/broadcast/host derivation
//! - [`SubnetMask`] - contiguous mask with prefix length, host bits and [`MaskInfo`]
//! - [`SubnetResult`], [`AddressClass`], [`AllocationEntry`] - computed records

mod ipv4;
mod mask;
mod subnet;

// Re-export public types
pub use ipv4::{
    address_to_integer, broadcast_address, first_host, get_cidr_mask, integer_to_address,
    ip_after_subnet, last_host, network_address, parse_address, MAX_LENGTH,
};
pub use mask::{
    host_count_from_mask, mask_from_host_count, mask_info, MaskInfo, SubnetMask, MAX_HOST_COUNT,
};
pub use subnet::{AddressClass, AllocationEntry, SubnetResult};
