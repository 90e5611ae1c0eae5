//! Core network types for interface representation.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use serde::Serialize;

use crate::address::format_hardware_address;

/// Network interface type classification.
///
/// Informational only; the resolver selects interfaces by name, up
/// status, and address, never by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InterfaceKind {
    /// Physical Ethernet interface.
    Ethernet,
    /// Wireless (Wi-Fi) interface.
    Wireless,
    /// Loopback interface (localhost).
    Loopback,
    /// Virtual interface (bridge, tunnel, container veth, etc.).
    Virtual,
    /// Unknown or other interface type, preserving the platform type code for debugging.
    Other(u32),
}

impl InterfaceKind {
    /// Returns true if this is a wireless interface.
    #[must_use]
    pub const fn is_wireless(&self) -> bool {
        matches!(self, Self::Wireless)
    }

    /// Returns true if this is a loopback interface.
    #[must_use]
    pub const fn is_loopback(&self) -> bool {
        matches!(self, Self::Loopback)
    }
}

/// A snapshot of a single network interface at the time of enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceSnapshot {
    /// The interface name (e.g., "wlan0", "eth0", "Wi-Fi").
    pub name: String,
    /// The type of interface.
    pub kind: InterfaceKind,
    /// Whether the interface is administratively and operationally up.
    pub is_up: bool,
    /// Raw hardware-address bytes; empty when the interface has none.
    pub hardware_address: Vec<u8>,
    /// All IPv4 addresses assigned to this interface.
    pub ipv4_addresses: Vec<Ipv4Addr>,
    /// All IPv6 addresses assigned to this interface.
    pub ipv6_addresses: Vec<Ipv6Addr>,
}

impl InterfaceSnapshot {
    /// Creates a snapshot with no hardware address and no IP addresses.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: InterfaceKind, is_up: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            is_up,
            hardware_address: Vec::new(),
            ipv4_addresses: Vec::new(),
            ipv6_addresses: Vec::new(),
        }
    }

    /// Sets the hardware-address bytes.
    #[must_use]
    pub fn with_hardware_address(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.hardware_address = bytes.into();
        self
    }

    /// Adds an IP address, dispatching on its family.
    #[must_use]
    pub fn with_address(mut self, address: IpAddr) -> Self {
        self.push_address(address);
        self
    }

    /// Appends an IP address, dispatching on its family.
    pub fn push_address(&mut self, address: IpAddr) {
        match address {
            IpAddr::V4(v4) => self.ipv4_addresses.push(v4),
            IpAddr::V6(v6) => self.ipv6_addresses.push(v6),
        }
    }

    /// Returns true if this interface's name equals `name`, ignoring ASCII case.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Returns true if `address` is assigned to this interface.
    #[must_use]
    pub fn has_address(&self, address: IpAddr) -> bool {
        match address {
            IpAddr::V4(v4) => self.ipv4_addresses.contains(&v4),
            IpAddr::V6(v6) => self.ipv6_addresses.contains(&v6),
        }
    }

    /// Returns the first non-loopback IPv4 address, if any.
    #[must_use]
    pub fn first_routable_ipv4(&self) -> Option<Ipv4Addr> {
        self.ipv4_addresses
            .iter()
            .copied()
            .find(|addr| !addr.is_loopback())
    }

    /// Returns the formatted hardware address, or `None` if the interface has none.
    #[must_use]
    pub fn formatted_hardware_address(&self) -> Option<String> {
        if self.hardware_address.is_empty() {
            None
        } else {
            Some(format_hardware_address(&self.hardware_address))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod interface_kind {
        use super::*;

        #[test]
        fn wireless_is_wireless() {
            assert!(InterfaceKind::Wireless.is_wireless());
            assert!(!InterfaceKind::Ethernet.is_wireless());
            assert!(!InterfaceKind::Other(71).is_wireless());
        }

        #[test]
        fn loopback_is_loopback() {
            assert!(InterfaceKind::Loopback.is_loopback());
            assert!(!InterfaceKind::Ethernet.is_loopback());
            assert!(!InterfaceKind::Virtual.is_loopback());
        }

        #[test]
        fn other_preserves_type_code() {
            assert_eq!(InterfaceKind::Other(42), InterfaceKind::Other(42));
            assert_ne!(InterfaceKind::Other(42), InterfaceKind::Other(99));
        }
    }

    mod interface_snapshot {
        use super::*;

        fn make_snapshot() -> InterfaceSnapshot {
            InterfaceSnapshot::new("wlan0", InterfaceKind::Wireless, true)
                .with_hardware_address([0x02, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE])
                .with_address("192.168.1.20".parse().unwrap())
                .with_address("fe80::1".parse().unwrap())
        }

        #[test]
        fn builder_sets_fields() {
            let snapshot = make_snapshot();

            assert_eq!(snapshot.name, "wlan0");
            assert_eq!(snapshot.kind, InterfaceKind::Wireless);
            assert!(snapshot.is_up);
            assert_eq!(snapshot.hardware_address.len(), 6);
            assert_eq!(snapshot.ipv4_addresses.len(), 1);
            assert_eq!(snapshot.ipv6_addresses.len(), 1);
        }

        #[test]
        fn is_named_ignores_case() {
            let snapshot = make_snapshot();

            assert!(snapshot.is_named("WLAN0"));
            assert!(snapshot.is_named("wlan0"));
            assert!(!snapshot.is_named("wlan1"));
        }

        #[test]
        fn has_address_checks_both_families() {
            let snapshot = make_snapshot();

            assert!(snapshot.has_address("192.168.1.20".parse().unwrap()));
            assert!(snapshot.has_address("fe80::1".parse().unwrap()));
            assert!(!snapshot.has_address("10.0.0.1".parse().unwrap()));
        }

        #[test]
        fn first_routable_ipv4_skips_loopback() {
            let snapshot = InterfaceSnapshot::new("lo", InterfaceKind::Loopback, true)
                .with_address("127.0.0.1".parse().unwrap())
                .with_address("10.0.0.5".parse().unwrap());

            assert_eq!(
                snapshot.first_routable_ipv4(),
                Some("10.0.0.5".parse().unwrap())
            );
        }

        #[test]
        fn first_routable_ipv4_none_for_ipv6_only() {
            let snapshot = InterfaceSnapshot::new("eth0", InterfaceKind::Ethernet, true)
                .with_address("2001:db8::1".parse().unwrap());

            assert_eq!(snapshot.first_routable_ipv4(), None);
        }

        #[test]
        fn formatted_hardware_address_formats_bytes() {
            assert_eq!(
                make_snapshot().formatted_hardware_address().as_deref(),
                Some("02:aa:bb:cc:dd:ee")
            );
        }

        #[test]
        fn formatted_hardware_address_none_when_empty() {
            let snapshot = InterfaceSnapshot::new("tun0", InterfaceKind::Virtual, true);
            assert_eq!(snapshot.formatted_hardware_address(), None);
        }
    }
}
