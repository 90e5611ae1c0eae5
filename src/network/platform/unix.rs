//! Unix interface enumeration using `getifaddrs`.

use std::net::{IpAddr, SocketAddrV4, SocketAddrV6};

use nix::ifaddrs::{InterfaceAddress, getifaddrs};
use nix::net::if_::InterfaceFlags;

use crate::network::{
    InterfaceKind, InterfaceSnapshot, InterfaceSource, QueryError, WirelessStatus,
};

/// Unix implementation of [`InterfaceSource`] and [`WirelessStatus`].
///
/// `getifaddrs` yields one entry per (interface, address) pair; entries are
/// merged by interface name in first-seen order. Hardware addresses come
/// from the link-layer entries (`AF_PACKET` on Linux, `AF_LINK` on BSDs).
///
/// # Example
///
/// ```no_run
/// use mac_resolver::network::{InterfaceSource, platform::PlatformInterfaces};
///
/// let interfaces = PlatformInterfaces::new().interfaces().expect("getifaddrs failed");
/// for iface in interfaces {
///     println!("{}: {:?}", iface.name, iface.formatted_hardware_address());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnixInterfaces {
    _private: (),
}

impl UnixInterfaces {
    /// Creates a new Unix interface source.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl InterfaceSource for UnixInterfaces {
    fn interfaces(&self) -> Result<Vec<InterfaceSnapshot>, QueryError> {
        let entries = getifaddrs()?;
        Ok(merge_entries(entries))
    }
}

impl WirelessStatus for UnixInterfaces {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    fn hardware_address(&self) -> Result<Option<String>, QueryError> {
        super::sysfs::wireless_hardware_address()
    }

    #[cfg(not(any(target_os = "linux", target_os = "android")))]
    fn hardware_address(&self) -> Result<Option<String>, QueryError> {
        Err(QueryError::Unsupported("wireless status"))
    }
}

/// Merges per-address `getifaddrs` entries into one snapshot per interface.
fn merge_entries(entries: impl Iterator<Item = InterfaceAddress>) -> Vec<InterfaceSnapshot> {
    let mut snapshots: Vec<InterfaceSnapshot> = Vec::new();

    for entry in entries {
        let existing = snapshots
            .iter()
            .position(|s| s.name == entry.interface_name);
        let index = if let Some(i) = existing {
            i
        } else {
            let kind = classify(&entry.interface_name, entry.flags);
            snapshots.push(InterfaceSnapshot::new(
                entry.interface_name.clone(),
                kind,
                is_up(entry.flags),
            ));
            snapshots.len() - 1
        };

        let snapshot = &mut snapshots[index];
        let Some(address) = entry.address.as_ref() else {
            continue;
        };

        if let Some(sin) = address.as_sockaddr_in() {
            snapshot.push_address(IpAddr::V4(*SocketAddrV4::from(*sin).ip()));
        } else if let Some(sin6) = address.as_sockaddr_in6() {
            snapshot.push_address(IpAddr::V6(*SocketAddrV6::from(*sin6).ip()));
        } else if let Some(link) = address.as_link_addr() {
            if let Some(bytes) = link.addr() {
                if snapshot.hardware_address.is_empty() {
                    snapshot.hardware_address = bytes.to_vec();
                }
            }
        }
    }

    snapshots
}

/// Up means both administratively up and running.
fn is_up(flags: InterfaceFlags) -> bool {
    flags.contains(InterfaceFlags::IFF_UP) && flags.contains(InterfaceFlags::IFF_RUNNING)
}

fn classify(name: &str, flags: InterfaceFlags) -> InterfaceKind {
    if flags.contains(InterfaceFlags::IFF_LOOPBACK) {
        return InterfaceKind::Loopback;
    }
    if flags.contains(InterfaceFlags::IFF_POINTOPOINT) {
        return InterfaceKind::Virtual;
    }
    classify_by_name(name)
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn classify_by_name(name: &str) -> InterfaceKind {
    if super::sysfs::is_wireless(name) {
        InterfaceKind::Wireless
    } else if super::sysfs::is_virtual(name) {
        InterfaceKind::Virtual
    } else {
        InterfaceKind::Ethernet
    }
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn classify_by_name(_name: &str) -> InterfaceKind {
    InterfaceKind::Ethernet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_up_requires_up_and_running() {
        assert!(is_up(InterfaceFlags::IFF_UP | InterfaceFlags::IFF_RUNNING));
        assert!(!is_up(InterfaceFlags::IFF_UP));
        assert!(!is_up(InterfaceFlags::IFF_RUNNING));
        assert!(!is_up(InterfaceFlags::empty()));
    }

    #[test]
    fn loopback_flag_classifies_as_loopback() {
        let flags = InterfaceFlags::IFF_UP | InterfaceFlags::IFF_LOOPBACK;
        assert_eq!(classify("lo", flags), InterfaceKind::Loopback);
    }

    #[test]
    fn point_to_point_classifies_as_virtual() {
        let flags = InterfaceFlags::IFF_UP | InterfaceFlags::IFF_POINTOPOINT;
        assert_eq!(classify("tun0", flags), InterfaceKind::Virtual);
    }

    #[test]
    fn unix_interfaces_new_creates_instance() {
        let _source = UnixInterfaces::new();
        let _default = UnixInterfaces::default();
    }

    // Integration test: enumerates the real system interfaces.
    #[test]
    fn enumeration_returns_unique_names() {
        let interfaces = UnixInterfaces::new()
            .interfaces()
            .expect("getifaddrs failed");

        let mut names: Vec<&str> = interfaces.iter().map(|i| i.name.as_str()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total, "duplicate names in {interfaces:?}");
    }

    #[test]
    fn wireless_status_does_not_panic() {
        let _ = UnixInterfaces::new().hardware_address();
    }
}
