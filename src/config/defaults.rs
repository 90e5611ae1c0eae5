//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

/// Default interface name for the network-interface strategy.
pub const INTERFACE_NAME: &str = crate::resolver::DEFAULT_INTERFACE_NAME;

/// Default output format.
pub const FORMAT: &str = "text";

/// Default path written by the `init` subcommand.
pub const CONFIG_FILE: &str = "mac-resolver.toml";
