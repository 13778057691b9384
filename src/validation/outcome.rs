//! Validation outcomes and user-facing messages.

use super::validator::{is_valid_host_count, is_valid_ipv4, is_valid_subnet_mask};
use crate::error::SubnetError;
use crate::models::MAX_HOST_COUNT;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};

/// Which input field failed.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Ip,
    Mask,
    Hosts,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Ip => "ip",
            ErrorKind::Mask => "mask",
            ErrorKind::Hosts => "hosts",
        };
        write!(f, "{name}")
    }
}

/// How the subnet size is given.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Size from a required host count.
    Hosts,
    /// Size from an explicit mask.
    Mask,
}

/// A rejected field with the message to show for it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationFailure {
    pub kind: ErrorKind,
    /// Raw value that failed, empty when the field was missing.
    pub value: String,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(kind: ErrorKind, value: &str) -> ValidationFailure {
        ValidationFailure {
            kind,
            value: value.to_string(),
            message: error_message(kind, value),
        }
    }
}

impl Serialize for ValidationFailure {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let mut state = serializer.serialize_struct("ValidationFailure", 3)?;
        state.serialize_field("valid", &false)?;
        state.serialize_field("errorKind", &self.kind)?;
        state.serialize_field("message", &self.message)?;
        state.end()
    }
}

impl From<ValidationFailure> for SubnetError {
    fn from(failure: ValidationFailure) -> SubnetError {
        match failure.kind {
            ErrorKind::Ip => SubnetError::InvalidAddressFormat(failure.value),
            ErrorKind::Mask => SubnetError::InvalidMaskFormat(failure.value),
            ErrorKind::Hosts => {
                SubnetError::HostCountOutOfRange(failure.value.trim().parse().unwrap_or(0))
            }
        }
    }
}

/// Result of checking one field or a whole request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(ValidationFailure),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn into_result(self) -> Result<(), ValidationFailure> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(failure) => Err(failure),
        }
    }
}

/// Message for a failed field, keyed by kind and the raw value.
pub fn error_message(kind: ErrorKind, value: &str) -> String {
    let value = value.trim();
    match kind {
        ErrorKind::Ip => match value {
            "" => "IP address is required.".to_string(),
            "0.0.0.0" => "0.0.0.0 cannot be used as a base address.".to_string(),
            "255.255.255.255" => {
                "255.255.255.255 is the broadcast address and cannot be used as a base address."
                    .to_string()
            }
            _ => format!(
                "'{value}' is not a valid IPv4 address. Use four numbers from 0 to 255 \
                 separated by dots, e.g. 192.168.1.0."
            ),
        },
        ErrorKind::Mask => match value {
            "" => "Subnet mask is required.".to_string(),
            "0.0.0.0" => "0.0.0.0 is not a usable subnet mask.".to_string(),
            "255.255.255.255" => {
                "255.255.255.255 leaves no room for host addresses.".to_string()
            }
            _ if is_valid_ipv4(value) => format!(
                "{value} is not a valid subnet mask. The 1 bits must be contiguous \
                 from the left, e.g. 255.255.255.0."
            ),
            _ => format!(
                "'{value}' is not a valid subnet mask. Use dotted-decimal form, e.g. 255.255.255.0."
            ),
        },
        ErrorKind::Hosts => match value {
            "" => "Number of hosts is required.".to_string(),
            _ if value.parse::<i64>().is_err() => {
                format!("'{value}' is not a whole number of hosts.")
            }
            _ => format!(
                "Host count {value} is out of range. Enter a number from 1 to {MAX_HOST_COUNT}."
            ),
        },
    }
}

pub fn validate_ip(ip: &str) -> ValidationOutcome {
    if is_valid_ipv4(ip) {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::Invalid(ValidationFailure::new(ErrorKind::Ip, ip))
    }
}

pub fn validate_mask(mask: Option<&str>) -> ValidationOutcome {
    match mask {
        Some(mask) if is_valid_subnet_mask(mask) => ValidationOutcome::Valid,
        Some(mask) => ValidationOutcome::Invalid(ValidationFailure::new(ErrorKind::Mask, mask)),
        None => ValidationOutcome::Invalid(ValidationFailure::new(ErrorKind::Mask, "")),
    }
}

pub fn validate_host_count(hosts: Option<i64>) -> ValidationOutcome {
    match hosts {
        Some(hosts) if is_valid_host_count(hosts) => ValidationOutcome::Valid,
        Some(hosts) => ValidationOutcome::Invalid(ValidationFailure::new(
            ErrorKind::Hosts,
            &hosts.to_string(),
        )),
        None => ValidationOutcome::Invalid(ValidationFailure::new(ErrorKind::Hosts, "")),
    }
}

/// Check the IP, then the field `mode` selects. Stops at the first failure.
pub fn validate_complete_input(
    ip: &str,
    mode: Mode,
    mask: Option<&str>,
    host_count: Option<i64>,
) -> ValidationOutcome {
    let outcome = validate_ip(ip);
    if !outcome.is_valid() {
        log::debug!("validate_complete_input() rejected ip '{ip}'");
        return outcome;
    }
    let outcome = match mode {
        Mode::Hosts => validate_host_count(host_count),
        Mode::Mask => validate_mask(mask),
    };
    if let ValidationOutcome::Invalid(failure) = &outcome {
        log::debug!(
            "validate_complete_input() rejected {} '{}'",
            failure.kind,
            failure.value
        );
    }
    outcome
}
