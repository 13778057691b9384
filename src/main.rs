mod cli;

use cli::CommandLine;
use ipv4_subnet_calc::{Config, OutputFormat};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    if config.log_config.exists() {
        log4rs::init_file(&config.log_config, Default::default())?;
        return Ok(());
    }
    // no log4rs file: plain stderr logger so stdout stays clean for results
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(config.log_level))?;
    log4rs::init_config(log_config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs
    dotenv::dotenv().ok();
    let (config, warnings) = Config::from_env();
    init_logging(&config)?;
    for warning in &warnings {
        log::warn!("{warning}");
    }
    log::debug!("#Start main() {config:?}");

    let commands = CommandLine::parse_args();
    let format = if commands.json {
        OutputFormat::Json
    } else {
        config.format
    };

    if let Err(e) = cli::run(commands.command, format) {
        log::debug!("command failed: {e:?}");
        cli::print_error(e.as_ref(), format);
        std::process::exit(1);
    }
    Ok(())
}
