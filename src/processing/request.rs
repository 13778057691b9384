//! Request/response boundary for a UI or CLI front end.
//!
//! Raw strings come in as a [`CalculationRequest`]. They are validated and
//! computed, and the result goes out as a [`CalculationReport`] or a
//! [`ValidationFailure`].

use super::calculator::{compute_from_host_count, compute_from_mask};
use crate::models::{parse_address, AddressClass, SubnetMask, SubnetResult};
use crate::validation::{
    classify_address, is_mask_appropriate_for_class, validate_complete_input, ErrorKind, Mode,
    ValidationFailure,
};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Input as the front end collects it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub ip: String,
    pub mode: Mode,
    #[serde(default)]
    pub host_count: Option<i64>,
    #[serde(default)]
    pub mask: Option<String>,
}

impl CalculationRequest {
    pub fn hosts(ip: &str, host_count: i64) -> CalculationRequest {
        CalculationRequest {
            ip: ip.to_string(),
            mode: Mode::Hosts,
            host_count: Some(host_count),
            mask: None,
        }
    }

    pub fn mask(ip: &str, mask: &str) -> CalculationRequest {
        CalculationRequest {
            ip: ip.to_string(),
            mode: Mode::Mask,
            host_count: None,
            mask: Some(mask.to_string()),
        }
    }
}

/// A computed subnet plus the display helpers shown next to it.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalculationReport {
    #[serde(flatten)]
    pub result: SubnetResult,
    /// `first - last`
    pub host_range: String,
    /// `network/prefix`
    pub cidr: String,
    pub address_class: Option<AddressClass>,
    pub wildcard_mask: Ipv4Addr,
    /// Mask covers at least the classful default for the address.
    pub mask_matches_class: bool,
}

impl CalculationReport {
    fn new(ip: &str, result: SubnetResult) -> CalculationReport {
        let mask_matches_class =
            is_mask_appropriate_for_class(ip, &result.subnet_mask.to_string());
        CalculationReport {
            host_range: result.host_range(),
            cidr: result.cidr(),
            address_class: classify_address(ip),
            wildcard_mask: result.subnet_mask.wildcard(),
            mask_matches_class,
            result,
        }
    }
}

/// Parse a JSON request, reporting the path of the field that failed.
pub fn parse_request(
    json: &str,
) -> Result<CalculationRequest, serde_path_to_error::Error<serde_json::Error>> {
    let deserializer = &mut serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(deserializer)
}

/// Validate `request` and compute its subnet.
pub fn calculate(request: &CalculationRequest) -> Result<CalculationReport, ValidationFailure> {
    validate_complete_input(
        &request.ip,
        request.mode,
        request.mask.as_deref(),
        request.host_count,
    )
    .into_result()?;

    let ip = parse_address(&request.ip)
        .map_err(|_| ValidationFailure::new(ErrorKind::Ip, &request.ip))?;

    let result = match request.mode {
        Mode::Hosts => {
            let raw = request.host_count.unwrap_or_default();
            let hosts_failure = || ValidationFailure::new(ErrorKind::Hosts, &raw.to_string());
            let hosts = u32::try_from(raw).map_err(|_| hosts_failure())?;
            compute_from_host_count(ip, hosts).map_err(|_| hosts_failure())?
        }
        Mode::Mask => {
            let raw = request.mask.as_deref().unwrap_or_default();
            let mask = SubnetMask::from_str(raw)
                .map_err(|_| ValidationFailure::new(ErrorKind::Mask, raw))?;
            compute_from_mask(ip, mask)
        }
    };

    let report = CalculationReport::new(&request.ip, result);
    if !report.mask_matches_class {
        log::warn!(
            "mask {} is shorter than the class {} default for {}",
            report.result.subnet_mask,
            report
                .address_class
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string()),
            request.ip
        );
    }
    log::info!("calculated {} for {}", report.cidr, request.ip);
    Ok(report)
}
