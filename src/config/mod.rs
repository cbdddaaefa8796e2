pub mod analyzer;
pub mod etherscan;
pub mod log;
pub mod reporter;

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use toml;

pub use analyzer::AnalyzerConfig;
pub use analyzer::ContractCreationPolicy;
pub use etherscan::EtherscanConfig;
pub use log::LoggingConfig;
pub use reporter::ReporterConfig;

use crate::err_with_loc;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub etherscan: EtherscanConfig,
    pub analyzer: AnalyzerConfig,
    pub reporter: ReporterConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn validate(&self) -> crate::Result<()> {
        self.analyzer.validate()?;
        self.reporter.validate()?;
        if self.etherscan.timeout_ms == 0 {
            return Err(err_with_loc!(ConfigError::InvalidValue("etherscan.timeout_ms must be positive".to_string())));
        }
        Ok(())
    }
}

pub fn load_config(path: impl AsRef<Path>) -> crate::Result<Config> {
    let path = path.as_ref();
    let config_str = std::fs::read_to_string(path)
        .map_err(|e| err_with_loc!(ConfigError::OpenFileError(format!("{}: {}", path.display(), e))))?;
    let config: Config =
        toml::from_str(&config_str).map_err(|e| err_with_loc!(ConfigError::ParseError(e.to_string())))?;
    config.validate()?;
    Ok(config)
}

/// Where a loaded `Config` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Defaults,
}

/// Load the config file if present, defaults otherwise. A file that exists but is invalid is still an error.
/// Runs before logging is set up, so the caller reports a fallback.
pub fn load_config_or_default(path: impl AsRef<Path>) -> crate::Result<(Config, ConfigSource)> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok((Config::default(), ConfigSource::Defaults));
    }
    Ok((load_config(path)?, ConfigSource::File))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[analyzer]\nhigh_value_threshold_eth = 25.0\n\n[reporter]\ntop_n = 3").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.analyzer.high_value_threshold_eth, 25.0);
        assert_eq!(config.analyzer.high_connectivity_threshold, 5);
        assert_eq!(config.reporter.top_n, 3);
        assert_eq!(config.etherscan.timeout_ms, 15_000);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let (config, source) = load_config_or_default("definitely/not/here/Config.toml").unwrap();
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(config.reporter.top_n, 10);
    }

    #[test]
    fn existing_file_reports_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[reporter]\ntop_n = 4").unwrap();

        let (config, source) = load_config_or_default(file.path()).unwrap();
        assert_eq!(source, ConfigSource::File);
        assert_eq!(config.reporter.top_n, 4);
    }

    #[test]
    fn rejects_inverted_activity_thresholds() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[analyzer]\nlow_activity_threshold = 20\nhigh_activity_threshold = 5").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[analyzer\ntop_n = ").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err.downcast_ref::<ConfigError>(), Some(ConfigError::ParseError(_))));
    }
}
