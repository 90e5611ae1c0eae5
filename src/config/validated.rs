//! Validated configuration after merging CLI and TOML sources.
//!
//! All validation is performed during construction.

use std::fmt;
use std::path::Path;

use crate::address::{Exclusions, is_valid_hardware_address, normalize_address};

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// How the binary renders its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The resolved address alone (empty line when none).
    Text,
    /// The full resolution report as JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Fully validated configuration ready for use by the application.
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Addresses rejected as results (normalized to lowercase)
    pub exclusions: Exclusions,

    /// Interface name for the network-interface strategy
    pub interface_name: String,

    /// Output rendering
    pub format: OutputFormat,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ policy: {}, excludes: [{}], interface: {}, format: {} }}",
            self.exclusions.policy(),
            self.exclusions.sorted().join(", "),
            self.interface_name,
            self.format,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An exclusion value is not a hex hardware address
    /// - The interface name is empty or contains whitespace
    /// - The output format is unknown
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let exclusions = Self::resolve_exclusions(cli, toml)?;
        let interface_name = Self::resolve_interface_name(cli, toml)?;
        let format = Self::resolve_format(cli, toml)?;

        Ok(Self {
            exclusions,
            interface_name,
            format,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_exclusions(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Exclusions, ConfigError> {
        // CLI values replace TOML values
        let values: &[String] = if cli.excludes.is_empty() {
            toml
                .map(|t| t.resolver.exclude.as_slice())
                .unwrap_or_default()
        } else {
            &cli.excludes
        };

        values
            .iter()
            .map(|value| parse_address(value))
            .collect::<Result<Vec<_>, _>>()
            .map(Exclusions::new)
    }

    fn resolve_interface_name(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let name = cli
            .interface
            .as_deref()
            .or_else(|| toml.and_then(|t| t.resolver.interface.as_deref()))
            .unwrap_or(defaults::INTERFACE_NAME);

        if name.is_empty() {
            return Err(ConfigError::InvalidInterfaceName {
                value: name.to_string(),
                reason: "must not be empty",
            });
        }

        if name.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidInterfaceName {
                value: name.to_string(),
                reason: "must not contain whitespace",
            });
        }

        Ok(name.to_string())
    }

    fn resolve_format(cli: &Cli, toml: Option<&TomlConfig>) -> Result<OutputFormat, ConfigError> {
        if let Some(format) = cli.format {
            return Ok(format.into());
        }

        let value = toml
            .and_then(|t| t.output.format.as_deref())
            .unwrap_or(defaults::FORMAT);

        parse_format(value)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn parse_address(value: &str) -> Result<String, ConfigError> {
    let normalized = normalize_address(value);
    if is_valid_hardware_address(&normalized) {
        Ok(normalized)
    } else {
        Err(ConfigError::InvalidAddress {
            value: value.to_string(),
        })
    }
}

fn parse_format(s: &str) -> Result<OutputFormat, ConfigError> {
    match s.to_lowercase().as_str() {
        "text" | "plain" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(ConfigError::InvalidFormat {
            value: s.to_string(),
        }),
    }
}
