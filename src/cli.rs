use clap::{Parser, Subcommand};
use ipv4_subnet_calc::models::{mask_info, parse_address, SubnetMask};
use ipv4_subnet_calc::output::{
    render_allocation, render_error, render_failure, render_mask_info, render_report,
    render_subnets,
};
use ipv4_subnet_calc::processing::{
    calculate, is_address_in_subnet, next_subnet, optimize_allocation, parse_request,
    split_into_subnets, CalculationRequest,
};
use ipv4_subnet_calc::validation::{validate_ip, validate_mask, ValidationFailure};
use ipv4_subnet_calc::{OutputFormat, SubnetError};
use std::error::Error;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "subnet-calc")]
#[command(about = "IPv4 subnet calculator.")]
pub struct CommandLine {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Smallest subnet around IP that holds COUNT hosts
    #[command(alias = "h")]
    Hosts {
        ip: String,
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },
    /// Subnet of IP under an explicit mask
    #[command(alias = "m")]
    Mask { ip: String, mask: String },
    /// Divide a network into COUNT equal subnets
    #[command(alias = "s")]
    Split { ip: String, mask: String, count: u32 },
    /// Mask needed for each host requirement, largest first
    #[command(alias = "o")]
    Optimize {
        #[arg(required = true)]
        hosts: Vec<u32>,
    },
    /// Check whether IP lies inside NETWORK/MASK
    Contains {
        ip: String,
        network: String,
        mask: String,
    },
    /// Network address of the block after NETWORK/MASK
    Next { network: String, mask: String },
    /// Prefix, bit split and binary form of a mask
    Info { mask: String },
    /// Read a JSON request from FILE or stdin
    #[command(alias = "r")]
    Request { file: Option<PathBuf> },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn address(ip: &str) -> Result<Ipv4Addr, Box<dyn Error>> {
    validate_ip(ip).into_result()?;
    Ok(parse_address(ip)?)
}

fn subnet_mask(mask: &str) -> Result<SubnetMask, Box<dyn Error>> {
    validate_mask(Some(mask)).into_result()?;
    Ok(SubnetMask::from_str(mask)?)
}

fn report(request: &CalculationRequest, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let report = calculate(request)?;
    println!("{}", render_report(&report, format)?);
    Ok(())
}

/// Print any error from [`run`] in the chosen format.
///
/// Validation failures and calculator errors keep their field kind. Other
/// errors (unreadable request file, bad JSON) are reported by message only.
pub fn print_error(error: &(dyn Error + 'static), format: OutputFormat) {
    let rendered = if let Some(failure) = error.downcast_ref::<ValidationFailure>() {
        render_failure(failure, format)
    } else if let Some(error) = error.downcast_ref::<SubnetError>() {
        render_error(error.kind(), &error.to_string(), format)
    } else {
        render_error(None, &error.to_string(), format)
    };
    match rendered {
        Ok(text) => println!("{text}"),
        Err(e) => log::error!("ERR rendering error: {e}"),
    }
}

pub fn run(command: Commands, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Hosts { ip, count } => report(&CalculationRequest::hosts(&ip, count), format),
        Commands::Mask { ip, mask } => report(&CalculationRequest::mask(&ip, &mask), format),
        Commands::Request { file } => {
            let json = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .map_err(|e| format!("Error reading request {}: {e}", path.display()))?,
                None => std::io::read_to_string(std::io::stdin())?,
            };
            let request = parse_request(&json).map_err(|e| format!("Error parsing request: {e}"))?;
            log::debug!("request {request:?}");
            report(&request, format)
        }
        Commands::Split { ip, mask, count } => {
            let subnets = split_into_subnets(address(&ip)?, subnet_mask(&mask)?, count)?;
            println!("{}", render_subnets(&subnets, format)?);
            Ok(())
        }
        Commands::Optimize { hosts } => {
            let entries = optimize_allocation(&hosts)?;
            println!("{}", render_allocation(&entries, format)?);
            Ok(())
        }
        Commands::Contains { ip, network, mask } => {
            let inside =
                is_address_in_subnet(address(&ip)?, address(&network)?, subnet_mask(&mask)?);
            match format {
                OutputFormat::Json => println!("{}", serde_json::json!({ "contains": inside })),
                OutputFormat::Text => println!("{inside}"),
            }
            Ok(())
        }
        Commands::Next { network, mask } => {
            let next = next_subnet(address(&network)?, subnet_mask(&mask)?)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::json!({ "next": next })),
                OutputFormat::Text => println!("{next}"),
            }
            Ok(())
        }
        Commands::Info { mask } => {
            let info = mask_info(subnet_mask(&mask)?);
            println!("{}", render_mask_info(&info, format)?);
            Ok(())
        }
    }
}
