//! Shared mock collaborators for resolver tests.

use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::network::{
    InterfaceKind, InterfaceSnapshot, InterfaceSource, QueryError, WirelessStatus,
};

/// Wireless status that returns a fixed answer and counts calls.
pub struct MockWireless {
    answer: Option<Option<String>>,
    calls: AtomicUsize,
}

impl MockWireless {
    /// Reports `address`.
    pub fn returning(address: &str) -> Self {
        Self {
            answer: Some(Some(address.to_string())),
            calls: AtomicUsize::new(0),
        }
    }

    /// Reports no wireless status.
    pub fn absent() -> Self {
        Self {
            answer: Some(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fails every query.
    pub fn failing() -> Self {
        Self {
            answer: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl WirelessStatus for MockWireless {
    fn hardware_address(&self) -> Result<Option<String>, QueryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer
            .clone()
            .ok_or_else(|| QueryError::PermissionDenied {
                context: "wireless status".to_string(),
            })
    }
}

/// Interface source over a fixed snapshot list that counts calls.
///
/// `interface_by_address` is answered from the same list unless
/// configured to fail.
pub struct MockInterfaces {
    snapshots: Option<Vec<InterfaceSnapshot>>,
    lookup_fails: bool,
    enumerations: AtomicUsize,
    lookups: AtomicUsize,
}

impl MockInterfaces {
    pub fn new(snapshots: Vec<InterfaceSnapshot>) -> Self {
        Self {
            snapshots: Some(snapshots),
            lookup_fails: false,
            enumerations: AtomicUsize::new(0),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Fails both enumeration and lookup.
    pub fn failing() -> Self {
        Self {
            snapshots: None,
            lookup_fails: true,
            enumerations: AtomicUsize::new(0),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Enumeration succeeds but the reverse lookup fails.
    pub fn with_failing_lookup(mut self) -> Self {
        self.lookup_fails = true;
        self
    }

    pub fn enumerations(&self) -> usize {
        self.enumerations.load(Ordering::SeqCst)
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl InterfaceSource for MockInterfaces {
    fn interfaces(&self) -> Result<Vec<InterfaceSnapshot>, QueryError> {
        self.enumerations.fetch_add(1, Ordering::SeqCst);
        self.snapshots
            .clone()
            .ok_or(QueryError::Unsupported("interface enumeration"))
    }

    fn interface_by_address(
        &self,
        address: IpAddr,
    ) -> Result<Option<InterfaceSnapshot>, QueryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.lookup_fails {
            return Err(QueryError::Unsupported("address lookup"));
        }
        Ok(self
            .snapshots
            .iter()
            .flatten()
            .find(|iface| iface.has_address(address))
            .cloned())
    }
}

pub fn wlan0(mac: [u8; 6]) -> InterfaceSnapshot {
    InterfaceSnapshot::new("wlan0", InterfaceKind::Wireless, true).with_hardware_address(mac)
}

pub fn loopback() -> InterfaceSnapshot {
    InterfaceSnapshot::new("lo", InterfaceKind::Loopback, true)
        .with_address("127.0.0.1".parse().unwrap())
        .with_address("::1".parse().unwrap())
}

pub fn ethernet(name: &str, mac: [u8; 6], ipv4: &str, is_up: bool) -> InterfaceSnapshot {
    InterfaceSnapshot::new(name, InterfaceKind::Ethernet, is_up)
        .with_hardware_address(mac)
        .with_address(ipv4.parse().unwrap())
}

pub fn ipv6_only(name: &str, mac: [u8; 6]) -> InterfaceSnapshot {
    InterfaceSnapshot::new(name, InterfaceKind::Ethernet, true)
        .with_hardware_address(mac)
        .with_address("2001:db8::5".parse().unwrap())
}
