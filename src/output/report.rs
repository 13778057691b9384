//! Rendering of calculation results as text or JSON.

use super::terminal::{label_row, table_row};
use crate::config::OutputFormat;
use crate::models::{AllocationEntry, MaskInfo, SubnetResult};
use crate::processing::CalculationReport;
use crate::validation::{ErrorKind, ValidationFailure};
use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;

fn render<T, F>(value: &T, format: OutputFormat, text: F) -> Result<String, serde_json::Error>
where
    T: Serialize + ?Sized,
    F: Fn(&T) -> String,
{
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value),
        OutputFormat::Text => Ok(text(value)),
    }
}

pub fn render_report(
    report: &CalculationReport,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    render(report, format, |report| {
        let r = &report.result;
        let class = report
            .address_class
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        let mut lines = vec![
            label_row("Network", report.cidr.green()),
            label_row("Subnet mask", r.subnet_mask),
            label_row("Wildcard mask", report.wildcard_mask),
            label_row("Broadcast", r.broadcast_address),
            label_row("Host range", &report.host_range),
            label_row("Gateway", r.gateway_address),
            label_row("Usable hosts", r.total_usable_hosts),
            label_row("Address class", class),
        ];
        if !report.mask_matches_class {
            lines.push(format!(
                "{} mask is shorter than the classful default",
                "NOTE".on_red()
            ));
        }
        lines.join("\n")
    })
}

pub fn render_subnets(
    subnets: &[SubnetResult],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    const WIDTHS: [usize; 5] = [4, 18, 15, 33, 8];
    render(subnets, format, |subnets| {
        let header = table_row(
            &["#", "subnet", "broadcast", "host range", "hosts"].map(String::from),
            &WIDTHS,
        );
        std::iter::once(header.bold().to_string())
            .chain(subnets.iter().enumerate().map(|(i, s)| {
                table_row(
                    &[
                        (i + 1).to_string(),
                        s.cidr(),
                        s.broadcast_address.to_string(),
                        s.host_range(),
                        s.total_usable_hosts.to_string(),
                    ],
                    &WIDTHS,
                )
            }))
            .join("\n")
    })
}

pub fn render_allocation(
    entries: &[AllocationEntry],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    const WIDTHS: [usize; 6] = [5, 10, 10, 15, 4, 11];
    render(entries, format, |entries| {
        let header = table_row(
            &["input", "required", "available", "mask", "/", "efficiency"].map(String::from),
            &WIDTHS,
        );
        std::iter::once(header.bold().to_string())
            .chain(entries.iter().map(|e| {
                table_row(
                    &[
                        e.index.to_string(),
                        e.hosts_required.to_string(),
                        e.hosts_available.to_string(),
                        e.mask.to_string(),
                        format!("/{}", e.prefix_length),
                        format!("{:.2}%", e.efficiency_percent),
                    ],
                    &WIDTHS,
                )
            }))
            .join("\n")
    })
}

pub fn render_mask_info(
    info: &MaskInfo,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    render(info, format, |info| {
        [
            label_row("Prefix length", format!("/{}", info.prefix_length)),
            label_row("Network bits", info.network_bits),
            label_row("Host bits", info.host_bits),
            label_row("Binary", &info.binary_string),
            label_row("Wildcard mask", info.wildcard),
        ]
        .join("\n")
    })
}

pub fn render_failure(
    failure: &ValidationFailure,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    render(failure, format, |failure| {
        format!("{} [{}] {}", "ERROR".on_red(), failure.kind, failure.message)
    })
}

/// An error outside field validation, in the same `{valid:false, errorKind,
/// message}` shape as a [`ValidationFailure`]. `errorKind` is null when no
/// input field is at fault.
pub fn render_error(
    kind: Option<ErrorKind>,
    message: &str,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "valid": false,
            "errorKind": kind,
            "message": message,
        })),
        OutputFormat::Text => match kind {
            Some(kind) => Ok(format!("{} [{kind}] {message}", "ERROR".on_red())),
            None => Ok(format!("{} {message}", "ERROR".on_red())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubnetError;
    use crate::models::{mask_info, SubnetMask};
    use crate::processing::{calculate, optimize_allocation, split_into_subnets, CalculationRequest};
    use std::net::Ipv4Addr;

    #[test]
    fn test_render_report_text() {
        let report = calculate(&CalculationRequest::hosts("192.168.1.100", 50)).unwrap();
        let text = render_report(&report, OutputFormat::Text).unwrap();
        assert!(text.contains("192.168.1.64/26"));
        assert!(text.contains("255.255.255.192"));
        assert!(text.contains("192.168.1.65 - 192.168.1.126"));
        assert!(text.contains("62"));
        assert!(!text.contains("NOTE"));
    }

    #[test]
    fn test_render_report_loopback_has_no_note() {
        let report = calculate(&CalculationRequest::mask("127.0.0.1", "255.255.255.0")).unwrap();
        let text = render_report(&report, OutputFormat::Text).unwrap();
        assert!(text.contains("127.0.0.0/24"));
        assert!(!text.contains("NOTE"));

        let report = calculate(&CalculationRequest::mask("192.168.1.10", "255.255.0.0")).unwrap();
        let text = render_report(&report, OutputFormat::Text).unwrap();
        assert!(text.contains("NOTE"));
    }

    #[test]
    fn test_render_report_json() {
        let report = calculate(&CalculationRequest::mask("10.0.0.50", "255.255.255.0")).unwrap();
        let json = render_report(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cidr"], "10.0.0.0/24");
        assert_eq!(value["broadcastAddress"], "10.0.0.255");
    }

    #[test]
    fn test_render_subnets() {
        let subnets = split_into_subnets(
            Ipv4Addr::new(192, 168, 1, 0),
            SubnetMask::from_prefix(24).unwrap(),
            4,
        )
        .unwrap();
        let text = render_subnets(&subnets, OutputFormat::Text).unwrap();
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("192.168.1.192/26"));

        let json = render_subnets(&subnets, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_render_allocation() {
        let entries = optimize_allocation(&[50, 10]).unwrap();
        let text = render_allocation(&entries, OutputFormat::Text).unwrap();
        assert!(text.contains("80.65%"));
        assert!(text.contains("/28"));
    }

    #[test]
    fn test_render_mask_info() {
        let info = mask_info(SubnetMask::from_prefix(20).unwrap());
        let text = render_mask_info(&info, OutputFormat::Text).unwrap();
        assert!(text.contains("11111111.11111111.11110000.00000000"));
        assert!(text.contains("0.0.15.255"));
    }

    #[test]
    fn test_render_failure() {
        let failure = ValidationFailure::new(ErrorKind::Ip, "0.0.0.0");
        let text = render_failure(&failure, OutputFormat::Text).unwrap();
        assert!(text.contains("[ip]"));
        let json = render_failure(&failure, OutputFormat::Json).unwrap();
        assert!(json.contains("\"valid\": false"));
    }

    #[test]
    fn test_render_error_capacity() {
        colored::control::set_override(false);
        let error = split_into_subnets(
            Ipv4Addr::new(10, 0, 0, 0),
            SubnetMask::from_prefix(29).unwrap(),
            4,
        )
        .unwrap_err();
        let message = error.to_string();
        let text = render_error(error.kind(), &message, OutputFormat::Text).unwrap();
        assert!(text.starts_with("ERROR Cannot split /29 into 4 subnets"));
        assert!(!text.contains("SubnetCapacityExceeded"));

        let json = render_error(error.kind(), &message, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["valid"], false);
        assert!(value["errorKind"].is_null());
        assert_eq!(value["message"], message);
    }

    #[test]
    fn test_render_error_overflow() {
        colored::control::set_override(false);
        let error = SubnetError::AddressOverflow(Ipv4Addr::new(255, 255, 255, 0));
        let text = render_error(error.kind(), &error.to_string(), OutputFormat::Text).unwrap();
        assert!(text.starts_with("ERROR [ip] Next subnet calculation overflowed"));

        let json = render_error(error.kind(), &error.to_string(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["errorKind"], "ip");
    }
}
