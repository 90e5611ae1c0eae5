//! Application execution logic.
//!
//! Resolves the address once and renders it to stdout.

use std::io::{self, Write};
use std::process::ExitCode;

use thiserror::Error;

use mac_resolver::config::{OutputFormat, ValidatedConfig};
use mac_resolver::network::{InterfaceSource, WirelessStatus};
use mac_resolver::resolver::{AddressResolver, Resolution};

use crate::app::exit_code;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to serialize the resolution report.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Failed to write the result.
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// Resolves with the platform's queries and prints the result.
///
/// Excluded from coverage - queries the real network stack.
#[cfg(not(tarpaulin_include))]
pub fn execute(config: &ValidatedConfig) -> ExitCode {
    let resolver = AddressResolver::platform().with_interface_name(config.interface_name.clone());
    let mut stdout = io::stdout().lock();

    match run_with(&resolver, config, &mut stdout) {
        Ok(resolution) if resolution.is_resolved() => exit_code::SUCCESS,
        Ok(_) => exit_code::not_found(),
        Err(e) => {
            tracing::error!("Application error: {e}");
            exit_code::runtime_error()
        }
    }
}

/// Resolves with the given resolver and writes the rendered result to `out`.
///
/// Returns the resolution so the caller can pick an exit code.
pub fn run_with<W, I>(
    resolver: &AddressResolver<W, I>,
    config: &ValidatedConfig,
    out: &mut impl Write,
) -> Result<Resolution, RunError>
where
    W: WirelessStatus,
    I: InterfaceSource,
{
    let resolution = resolver.resolve_with_report(&config.exclusions);

    match resolution.strategy() {
        Some(strategy) => {
            tracing::info!(%strategy, address = %resolution.address, "Resolved hardware address");
        }
        None => tracing::warn!(policy = %resolution.policy, "No acceptable hardware address found"),
    }

    let rendered = render(&resolution, config.format)?;
    writeln!(out, "{rendered}").map_err(RunError::Output)?;

    Ok(resolution)
}

/// Renders a resolution in the requested format.
pub fn render(resolution: &Resolution, format: OutputFormat) -> Result<String, RunError> {
    match format {
        OutputFormat::Text => Ok(resolution.address.clone()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(resolution).map_err(RunError::Serialize)
        }
    }
}
