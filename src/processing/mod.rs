//! Subnet calculation.
//!
//! This module contains the calculator built on top of [`crate::models`]:
//! - [`calculator`] - one subnet from a mask or a host count, containment, next block
//! - [`split`] - equal-size division of a network
//! - [`allocation`] - mask sizing for a batch of host requirements
//! - [`request`] - validate-then-compute boundary for front ends

mod allocation;
mod calculator;
mod request;
mod split;

// Re-export public functions
pub use allocation::optimize_allocation;
pub use calculator::{compute_from_host_count, compute_from_mask, is_address_in_subnet, next_subnet};
pub use request::{calculate, parse_request, CalculationReport, CalculationRequest};
pub use split::{split_into_subnets, MAX_SPLIT_PREFIX};
