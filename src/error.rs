//! Error types for subnet calculation.
//!
//! Every fallible operation in the crate returns [`Result<T>`]. The variants
//! keep their classification so a caller can render a specific message per
//! kind instead of a generic failure.

use crate::validation::ErrorKind;
use std::net::Ipv4Addr;

/// Errors returned by address math, validation and subnet calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubnetError {
    /// The value is not a usable dotted-decimal IPv4 address.
    #[error("Invalid IPv4 address: {0}")]
    InvalidAddressFormat(String),

    /// The value is not a valid subnet mask.
    ///
    /// Includes well-formed addresses whose bits are not a contiguous run of
    /// ones followed by zeros (e.g. `255.0.255.0`).
    #[error("Invalid subnet mask: {0}")]
    InvalidMaskFormat(String),

    /// Requested host count is outside `1..=16_777_214`.
    #[error("Host count {0} is out of range (1 to {max})", max = crate::models::MAX_HOST_COUNT)]
    HostCountOutOfRange(i64),

    /// Splitting would need a prefix longer than /30.
    #[error(
        "Cannot split /{prefix} into {subnets} subnets: would need /{requested_prefix}, \
         longest allowed is /30"
    )]
    SubnetCapacityExceeded {
        prefix: u8,
        requested_prefix: u8,
        subnets: u32,
    },

    /// Prefix length above 32.
    #[error("Network length /{0} is too long")]
    InvalidPrefix(u8),

    /// Address arithmetic ran past 255.255.255.255.
    #[error("Next subnet calculation overflowed after {0}")]
    AddressOverflow(Ipv4Addr),
}

impl SubnetError {
    /// The UI field this error belongs to, if any.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            SubnetError::InvalidAddressFormat(_) | SubnetError::AddressOverflow(_) => {
                Some(ErrorKind::Ip)
            }
            SubnetError::InvalidMaskFormat(_) | SubnetError::InvalidPrefix(_) => {
                Some(ErrorKind::Mask)
            }
            SubnetError::HostCountOutOfRange(_) => Some(ErrorKind::Hosts),
            SubnetError::SubnetCapacityExceeded { .. } => None,
        }
    }
}

/// A specialized Result type for subnet operations.
pub type Result<T> = std::result::Result<T, SubnetError>;
