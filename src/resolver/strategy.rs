//! Strategy identifiers and per-strategy probe results.

use std::fmt;

use serde::Serialize;

use crate::address::SENTINEL_ADDRESS;

/// One of the platform queries the resolver can use to find an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// The wireless status object's self-reported hardware address.
    WifiInfo,
    /// The hardware address of the interface with the configured name.
    NetworkInterface,
    /// The hardware address of the interface owning the first up, non-loopback IPv4 address.
    InetAddress,
}

impl Strategy {
    /// All strategies in resolution priority order.
    pub const ORDER: [Self; 3] = [Self::WifiInfo, Self::NetworkInterface, Self::InetAddress];

    /// Returns the stable kebab-case name of this strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WifiInfo => "wifi-info",
            Self::NetworkInterface => "network-interface",
            Self::InetAddress => "inet-address",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of running a single strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "address", rename_all = "kebab-case")]
pub enum Probe {
    /// The strategy produced an address.
    Found(String),
    /// The strategy produced nothing, or its platform query failed.
    NotFound,
}

impl Probe {
    /// Wraps a possibly-empty address, treating blank values as not found.
    #[must_use]
    pub fn from_address(address: Option<String>) -> Self {
        match address {
            Some(address) if !address.trim().is_empty() => Self::Found(address),
            _ => Self::NotFound,
        }
    }

    /// The value validated against exclusions. `NotFound` evaluates as the sentinel.
    #[must_use]
    pub fn candidate(&self) -> &str {
        match self {
            Self::Found(address) => address,
            Self::NotFound => SENTINEL_ADDRESS,
        }
    }

    /// Returns true if the strategy produced an address.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}
