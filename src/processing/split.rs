//! Equal-size subnet division.

use super::calculator::compute_from_mask;
use crate::error::{Result, SubnetError};
use crate::models::{network_address, SubnetMask, SubnetResult, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Longest prefix a split may produce; every block keeps at least 2 host bits.
pub const MAX_SPLIT_PREFIX: u8 = 30;

/// Divide the network of `ip`/`mask` into `subnet_count` equal blocks.
///
/// Each block borrows ceil(log2(subnet_count)) bits from the host part.
/// Blocks are contiguous from the base network; when `subnet_count` is not
/// a power of two the tail of the parent network is left unassigned.
pub fn split_into_subnets(
    ip: Ipv4Addr,
    mask: SubnetMask,
    subnet_count: u32,
) -> Result<Vec<SubnetResult>> {
    if subnet_count == 0 {
        return Ok(Vec::new());
    }

    let prefix = mask.prefix_length();
    let additional_bits = u64::from(subnet_count).next_power_of_two().trailing_zeros() as u8;
    let requested_prefix = prefix + additional_bits;
    if requested_prefix > MAX_SPLIT_PREFIX {
        log::debug!("split /{prefix} into {subnet_count} rejected: needs /{requested_prefix}");
        return Err(SubnetError::SubnetCapacityExceeded {
            prefix,
            requested_prefix,
            subnets: subnet_count,
        });
    }

    let new_mask = SubnetMask::from_prefix(requested_prefix)?;
    let base = u64::from(u32::from(network_address(ip, mask)));
    let block_size = 1u64 << (MAX_LENGTH - requested_prefix);
    log::debug!(
        "split {}/{prefix} into {subnet_count} x /{requested_prefix} (block size {block_size})",
        Ipv4Addr::from(base as u32)
    );

    // all blocks lie inside the parent network, so the sum stays within u32
    let subnets = (0..u64::from(subnet_count))
        .map(|i| {
            let network = Ipv4Addr::from((base + i * block_size) as u32);
            compute_from_mask(network, new_mask)
        })
        .collect();

    Ok(subnets)
}
