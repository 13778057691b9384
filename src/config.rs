//! Runtime settings for the `subnet-calc` binary.
//!
//! Values come from the environment, after `dotenv` has loaded any `.env`
//! file. Unknown values fall back to their default, and each fallback is
//! returned as a warning for the caller to log once logging is up.

use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";
pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";
pub const ENV_LOG_LEVEL: &str = "SUBNET_CALC_LOG_LEVEL";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<OutputFormat, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// log4rs YAML file, used when it exists.
    pub log_config: PathBuf,
    /// Level for the built-in stderr logger when there is no log4rs file.
    pub log_level: LevelFilter,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from("log4rs.yml"),
            log_level: LevelFilter::Info,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Read settings from the process environment, plus a warning for each
    /// value that was rejected.
    pub fn from_env() -> (Config, Vec<String>) {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, one call per variable name.
    pub fn from_lookup<F>(lookup: F) -> (Config, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = PathBuf::from(path);
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            match format.parse() {
                Ok(format) => config.format = format,
                Err(e) => warnings.push(format!("{ENV_FORMAT}: {e}, using text")),
            }
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            match LevelFilter::from_str(level.trim()) {
                Ok(level) => config.log_level = level,
                Err(_) => {
                    warnings.push(format!("{ENV_LOG_LEVEL}: unknown level '{level}', using info"))
                }
            }
        }

        (config, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let (config, warnings) = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert!(warnings.is_empty());
        assert_eq!(config.log_config, PathBuf::from("log4rs.yml"));
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_config_from_vars() {
        let (config, warnings) = Config::from_lookup(lookup(&[
            (ENV_LOG_CONFIG, "conf/log.yml"),
            (ENV_FORMAT, "JSON"),
            (ENV_LOG_LEVEL, "debug"),
        ]));
        assert!(warnings.is_empty());
        assert_eq!(config.log_config, PathBuf::from("conf/log.yml"));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_config_bad_values_fall_back() {
        let (config, warnings) =
            Config::from_lookup(lookup(&[(ENV_FORMAT, "xml"), (ENV_LOG_LEVEL, "loud")]));
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(
            warnings,
            vec![
                "SUBNET_CALC_FORMAT: unknown output format 'xml', using text".to_string(),
                "SUBNET_CALC_LOG_LEVEL: unknown level 'loud', using info".to_string(),
            ]
        );
    }
}
