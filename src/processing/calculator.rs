//! Single-subnet derivation.
//!
//! Inputs are expected to have passed [`crate::validation`] already.

use crate::error::Result;
use crate::models::{
    broadcast_address, first_host, host_count_from_mask, ip_after_subnet, last_host,
    mask_from_host_count, network_address, SubnetMask, SubnetResult,
};
use std::net::Ipv4Addr;

/// Derive every field of the subnet `ip` falls in under `mask`.
pub fn compute_from_mask(ip: Ipv4Addr, mask: SubnetMask) -> SubnetResult {
    let network = network_address(ip, mask);
    let broadcast = broadcast_address(network, mask);
    let first = first_host(network);
    let total_usable_hosts = host_count_from_mask(mask).clamp(0, i64::from(u32::MAX)) as u32;

    log::trace!(
        "compute_from_mask({ip}, {mask}) network={network} broadcast={broadcast} \
         hosts={total_usable_hosts}"
    );

    SubnetResult {
        network_address: network,
        subnet_mask: mask,
        broadcast_address: broadcast,
        first_host_address: first,
        last_host_address: last_host(broadcast),
        gateway_address: first,
        total_usable_hosts,
        prefix_length: mask.prefix_length(),
    }
}

/// Size the subnet for `hosts`, then derive it as [`compute_from_mask`] does.
pub fn compute_from_host_count(ip: Ipv4Addr, hosts: u32) -> Result<SubnetResult> {
    let mask = mask_from_host_count(hosts)?;
    log::debug!("{hosts} hosts need /{}", mask.prefix_length());
    Ok(compute_from_mask(ip, mask))
}

/// `(ip & mask) == network`
pub fn is_address_in_subnet(ip: Ipv4Addr, network: Ipv4Addr, mask: SubnetMask) -> bool {
    network_address(ip, mask) == network
}

/// Start of the adjacent block: network + (`!mask` + 1).
pub fn next_subnet(network: Ipv4Addr, mask: SubnetMask) -> Result<Ipv4Addr> {
    ip_after_subnet(network, mask)
}
