//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Resolver configuration section
    #[serde(default)]
    pub resolver: ResolverSection,

    /// Output configuration section
    #[serde(default)]
    pub output: OutputSection,
}

/// Resolver configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverSection {
    /// Addresses to reject as results
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Interface name for the network-interface strategy
    pub interface: Option<String>,
}

/// Output configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output format: "text" or "json"
    pub format: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# mac-resolver Configuration File

[resolver]
# Addresses that are not acceptable results.
# Empty (the default) rejects only the placeholder 02:00:00:00:00:00.
# A non-empty list rejects exactly these values; add the placeholder
# yourself if it should still be rejected.
# Note: --exclude CLI values REPLACE this list entirely (not merged)
# exclude = ["02:00:00:00:00:00", "00:00:00:00:00:00"]

# Interface probed by the network-interface strategy (default: wlan0)
# Matched case-insensitively.
# interface = "wlan0"

[output]
# "text" prints the address alone, "json" prints the resolution report
# format = "text"
"#
    .to_string()
}
