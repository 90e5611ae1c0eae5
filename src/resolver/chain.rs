//! The address resolver and its three strategies.

use std::net::IpAddr;

use crate::address::Exclusions;
use crate::network::platform::PlatformInterfaces;
use crate::network::{InterfaceSource, QueryError, WirelessStatus};

use super::{Attempt, Probe, Resolution, Strategy};

/// Interface name probed by [`Strategy::NetworkInterface`] unless overridden.
pub const DEFAULT_INTERFACE_NAME: &str = "wlan0";

/// Resolves a hardware address by probing strategies in priority order.
///
/// Holds no state between calls; every resolution queries the platform afresh.
/// Safe to share across threads when both collaborators are.
///
/// # Example
///
/// ```ignore
/// use mac_resolver::address::Exclusions;
/// use mac_resolver::resolver::AddressResolver;
///
/// let resolver = AddressResolver::platform();
/// let address = resolver.resolve(&Exclusions::none());
/// println!("{address}");
/// ```
#[derive(Debug, Clone)]
pub struct AddressResolver<W, I> {
    wireless: W,
    interfaces: I,
    interface_name: String,
}

impl AddressResolver<PlatformInterfaces, PlatformInterfaces> {
    /// Creates a resolver backed by the current platform's queries.
    #[must_use]
    pub fn platform() -> Self {
        Self::new(PlatformInterfaces::new(), PlatformInterfaces::new())
    }
}

impl<W, I> AddressResolver<W, I>
where
    W: WirelessStatus,
    I: InterfaceSource,
{
    /// Creates a resolver from explicit collaborators.
    #[must_use]
    pub fn new(wireless: W, interfaces: I) -> Self {
        Self {
            wireless,
            interfaces,
            interface_name: DEFAULT_INTERFACE_NAME.to_string(),
        }
    }

    /// Sets the interface name matched (case-insensitively) by
    /// [`Strategy::NetworkInterface`].
    #[must_use]
    pub fn with_interface_name(mut self, name: impl Into<String>) -> Self {
        self.interface_name = name.into();
        self
    }

    /// Returns the interface name matched by [`Strategy::NetworkInterface`].
    #[must_use]
    pub fn interface_name(&self) -> &str {
        &self.interface_name
    }

    /// Returns the first address accepted by `exclusions`, or the empty string.
    ///
    /// Never fails; platform errors are treated as "nothing found".
    #[must_use]
    pub fn resolve(&self, exclusions: &Exclusions) -> String {
        self.resolve_with_report(exclusions).address
    }

    /// Like [`resolve`](Self::resolve), also reporting every strategy that ran.
    #[must_use]
    pub fn resolve_with_report(&self, exclusions: &Exclusions) -> Resolution {
        let mut attempts = Vec::with_capacity(Strategy::ORDER.len());

        for strategy in Strategy::ORDER {
            let probe = self.probe(strategy);
            let accepted = exclusions.accepts(probe.candidate());
            tracing::debug!(
                strategy = %strategy,
                candidate = probe.candidate(),
                found = probe.is_found(),
                accepted,
                "Probed hardware address"
            );

            let address = accepted.then(|| probe.candidate().to_string());
            attempts.push(Attempt {
                strategy,
                probe,
                accepted,
            });

            if let Some(address) = address {
                return Resolution {
                    address,
                    policy: exclusions.policy(),
                    attempts,
                };
            }
        }

        Resolution {
            address: String::new(),
            policy: exclusions.policy(),
            attempts,
        }
    }

    /// Runs a single strategy, converting query failures to [`Probe::NotFound`].
    #[must_use]
    pub fn probe(&self, strategy: Strategy) -> Probe {
        let result = match strategy {
            Strategy::WifiInfo => self.probe_wifi_info(),
            Strategy::NetworkInterface => self.probe_network_interface(),
            Strategy::InetAddress => self.probe_inet_address(),
        };

        result.unwrap_or_else(|error| {
            tracing::debug!(strategy = %strategy, %error, "Platform query failed");
            Probe::NotFound
        })
    }

    fn probe_wifi_info(&self) -> Result<Probe, QueryError> {
        Ok(Probe::from_address(self.wireless.hardware_address()?))
    }

    fn probe_network_interface(&self) -> Result<Probe, QueryError> {
        let address = self
            .interfaces
            .interfaces()?
            .into_iter()
            .filter(|iface| iface.is_named(&self.interface_name))
            .find_map(|iface| iface.formatted_hardware_address());

        Ok(Probe::from_address(address))
    }

    fn probe_inet_address(&self) -> Result<Probe, QueryError> {
        let Some(ipv4) = self
            .interfaces
            .interfaces()?
            .iter()
            .filter(|iface| iface.is_up)
            .find_map(|iface| iface.first_routable_ipv4())
        else {
            return Ok(Probe::NotFound);
        };

        let address = self
            .interfaces
            .interface_by_address(IpAddr::V4(ipv4))?
            .and_then(|iface| iface.formatted_hardware_address());

        Ok(Probe::from_address(address))
    }
}

/// Resolves the current device's hardware address using the platform's queries.
///
/// An empty `excluded` rejects only the sentinel address; otherwise exactly
/// the given values are rejected.
///
/// # Examples
///
/// ```no_run
/// let address = mac_resolver::resolver::resolve(Vec::<String>::new());
/// let filtered = mac_resolver::resolver::resolve(["02:00:00:00:00:00", "00:00:00:00:00:00"]);
/// ```
#[must_use]
pub fn resolve<E, S>(excluded: E) -> String
where
    E: IntoIterator<Item = S>,
    S: Into<String>,
{
    AddressResolver::platform().resolve(&Exclusions::new(excluded))
}
