//! # ipv4-subnet-calc
//!
//! IPv4 subnet calculator: network, broadcast, host range, gateway and host
//! count from a base address plus either a host count or a subnet mask.
//!
//! ```
//! use ipv4_subnet_calc::processing::{calculate, CalculationRequest};
//!
//! let report = calculate(&CalculationRequest::hosts("192.168.1.100", 50)).unwrap();
//! assert_eq!(report.cidr, "192.168.1.64/26");
//! assert_eq!(report.result.total_usable_hosts, 62);
//! ```
//!
//! - [`models`] - address math, [`models::SubnetMask`], result records
//! - [`validation`] - field predicates and user-facing messages
//! - [`processing`] - calculator, splitting, allocation, request boundary
//! - [`output`] - text and JSON rendering for the CLI

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod validation;

pub use config::{Config, OutputFormat};
pub use error::{Result, SubnetError};
