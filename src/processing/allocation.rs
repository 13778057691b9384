//! Mask sizing for a batch of host requirements.
//!
//! Requirements are reported largest first, each with the smallest mask that
//! holds it. Nothing is packed into a shared address block.

use crate::error::Result;
use crate::models::{host_count_from_mask, mask_from_host_count, AllocationEntry};
use itertools::Itertools;

/// Size each requirement, largest first.
///
/// The sort is stable: equal requirements keep their input order. `index`
/// refers back to the position in `host_requirements`.
pub fn optimize_allocation(host_requirements: &[u32]) -> Result<Vec<AllocationEntry>> {
    host_requirements
        .iter()
        .copied()
        .enumerate()
        .sorted_by(|(_, a), (_, b)| b.cmp(a))
        .map(|(index, hosts_required)| -> Result<AllocationEntry> {
            let mask = mask_from_host_count(hosts_required)?;
            let hosts_available = host_count_from_mask(mask) as u32;
            let entry = AllocationEntry {
                index,
                hosts_required,
                hosts_available,
                mask,
                prefix_length: mask.prefix_length(),
                efficiency_percent: efficiency(hosts_required, hosts_available),
            };
            log::trace!("allocation {entry:?}");
            Ok(entry)
        })
        .collect()
}

/// Percentage of the block's hosts actually required, two decimals.
fn efficiency(required: u32, available: u32) -> f64 {
    let percent = f64::from(required) / f64::from(available) * 100.0;
    (percent * 100.0).round() / 100.0
}
