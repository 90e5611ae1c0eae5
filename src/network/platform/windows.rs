//! Windows interface enumeration using `GetAdaptersAddresses`.

use crate::network::{
    InterfaceKind, InterfaceSnapshot, InterfaceSource, QueryError, WirelessStatus,
};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use windows::Win32::Foundation::WIN32_ERROR;
use windows::Win32::NetworkManagement::IpHelper::{
    GAA_FLAG_SKIP_ANYCAST, GAA_FLAG_SKIP_DNS_SERVER, GAA_FLAG_SKIP_MULTICAST, GetAdaptersAddresses,
    IF_TYPE_ETHERNET_CSMACD, IF_TYPE_IEEE80211, IF_TYPE_SOFTWARE_LOOPBACK, IP_ADAPTER_ADDRESSES_LH,
};
use windows::Win32::NetworkManagement::Ndis::IfOperStatusUp;
use windows::Win32::Networking::WinSock::{
    AF_INET, AF_INET6, AF_UNSPEC, SOCKADDR, SOCKADDR_IN, SOCKADDR_IN6,
};

/// Interface type for PPP (Point-to-Point Protocol) adapters.
/// Value from Windows SDK `iptypes.h` - not exported by the `windows` crate.
const IF_TYPE_PPP: u32 = 23;

/// Interface type for tunnel adapters (VPN, etc.).
/// Value from Windows SDK `iptypes.h` - not exported by the `windows` crate.
const IF_TYPE_TUNNEL: u32 = 131;

/// Buffer size hint for `GetAdaptersAddresses`.
/// The API will tell us the actual required size if this is insufficient.
const INITIAL_BUFFER_SIZE: u32 = 16384;

/// Windows implementation of [`InterfaceSource`] and [`WirelessStatus`].
///
/// Wireless status is the physical address of the first `IEEE 802.11`
/// adapter that reports one.
///
/// # Example
///
/// ```no_run
/// use mac_resolver::network::{InterfaceSource, platform::PlatformInterfaces};
///
/// let interfaces = PlatformInterfaces::new().interfaces().expect("enumeration failed");
/// for iface in interfaces {
///     println!("{}: {:?}", iface.name, iface.formatted_hardware_address());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct WindowsInterfaces {
    _private: (),
}

impl WindowsInterfaces {
    /// Creates a new Windows interface source.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl InterfaceSource for WindowsInterfaces {
    fn interfaces(&self) -> Result<Vec<InterfaceSnapshot>, QueryError> {
        fetch_interfaces()
    }
}

impl WirelessStatus for WindowsInterfaces {
    fn hardware_address(&self) -> Result<Option<String>, QueryError> {
        Ok(fetch_interfaces()?
            .into_iter()
            .filter(|iface| iface.kind.is_wireless())
            .find_map(|iface| iface.formatted_hardware_address()))
    }
}

/// Fetches all adapters using `GetAdaptersAddresses`.
fn fetch_interfaces() -> Result<Vec<InterfaceSnapshot>, QueryError> {
    let raw_adapters = get_adapter_addresses()?;

    let mut interfaces = Vec::new();
    // SAFETY: GetAdaptersAddresses returns a properly aligned buffer for IP_ADAPTER_ADDRESSES_LH.
    #[allow(clippy::cast_ptr_alignment)]
    let mut current = raw_adapters.as_ptr().cast::<IP_ADAPTER_ADDRESSES_LH>();

    // SAFETY: We iterate through a linked list returned by GetAdaptersAddresses.
    // The list is valid as long as the buffer (`raw_adapters`) is alive.
    while !current.is_null() {
        let adapter = unsafe { &*current };

        if let Some(snapshot) = parse_adapter(adapter) {
            interfaces.push(snapshot);
        }

        current = adapter.Next;
    }

    Ok(interfaces)
}

/// Calls `GetAdaptersAddresses` and returns the raw buffer containing adapter data.
///
/// This function handles the two-call pattern:
/// 1. First call with estimated buffer size
/// 2. Retry with exact size if buffer was too small
fn get_adapter_addresses() -> Result<Vec<u8>, QueryError> {
    // Flags to skip data we don't need (anycast, multicast, DNS servers)
    let flags = GAA_FLAG_SKIP_ANYCAST | GAA_FLAG_SKIP_MULTICAST | GAA_FLAG_SKIP_DNS_SERVER;
    let family = u32::from(AF_UNSPEC.0); // Get both IPv4 and IPv6

    let mut buffer: Vec<u8> = vec![0u8; INITIAL_BUFFER_SIZE as usize];
    let mut size = INITIAL_BUFFER_SIZE;

    // SAFETY: We provide a valid buffer and size. The function writes adapter
    // information to the buffer and updates `size` with the required length.
    let result = unsafe {
        GetAdaptersAddresses(
            family,
            flags,
            None,
            Some(buffer.as_mut_ptr().cast()),
            &raw mut size,
        )
    };

    // Handle the result - delegate to helper for buffer overflow case
    handle_api_result(result, &mut buffer, &mut size, flags, family)?;

    Ok(buffer)
}

/// Handles the result of `GetAdaptersAddresses`, potentially retrying with a larger buffer.
///
/// # Coverage Note
///
/// This function is excluded from coverage because:
/// - Buffer overflow case requires a system with network adapter data exceeding 16KB
/// - Error paths require actual Windows API failures which cannot be mocked
#[cfg(not(tarpaulin_include))]
fn handle_api_result(
    result: u32,
    buffer: &mut Vec<u8>,
    size: &mut u32,
    flags: windows::Win32::NetworkManagement::IpHelper::GET_ADAPTERS_ADDRESSES_FLAGS,
    family: u32,
) -> Result<(), QueryError> {
    use windows::Win32::Foundation::{ERROR_BUFFER_OVERFLOW, NO_ERROR};

    if result == ERROR_BUFFER_OVERFLOW.0 {
        buffer.resize(*size as usize, 0);

        // SAFETY: Same as above, but with correctly sized buffer
        let result = unsafe {
            GetAdaptersAddresses(
                family,
                flags,
                None,
                Some(buffer.as_mut_ptr().cast()),
                &raw mut *size,
            )
        };

        if result != NO_ERROR.0 {
            return Err(windows::core::Error::from(WIN32_ERROR(result)).into());
        }
    } else if result != NO_ERROR.0 {
        return Err(windows::core::Error::from(WIN32_ERROR(result)).into());
    }

    Ok(())
}

/// Parses a single `IP_ADAPTER_ADDRESSES_LH` structure into an [`InterfaceSnapshot`].
///
/// Returns `None` if the adapter name cannot be read.
fn parse_adapter(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Option<InterfaceSnapshot> {
    let name = unsafe { adapter.FriendlyName.to_string().ok()? };
    let kind = map_adapter_type(adapter.IfType);
    let is_up = adapter.OperStatus == IfOperStatusUp;

    let length = (adapter.PhysicalAddressLength as usize).min(adapter.PhysicalAddress.len());
    let mut snapshot = InterfaceSnapshot::new(name, kind, is_up)
        .with_hardware_address(&adapter.PhysicalAddress[..length]);
    for address in collect_addresses(adapter) {
        snapshot.push_address(address);
    }

    Some(snapshot)
}

/// Maps Windows `IF_TYPE_*` constants to [`InterfaceKind`].
const fn map_adapter_type(if_type: u32) -> InterfaceKind {
    match if_type {
        IF_TYPE_ETHERNET_CSMACD => InterfaceKind::Ethernet,
        IF_TYPE_IEEE80211 => InterfaceKind::Wireless,
        IF_TYPE_SOFTWARE_LOOPBACK => InterfaceKind::Loopback,
        // Common virtual adapter types (tunnel, PPP, etc.)
        IF_TYPE_TUNNEL | IF_TYPE_PPP => InterfaceKind::Virtual,
        other => InterfaceKind::Other(other),
    }
}

/// Walks the adapter's unicast address list.
fn collect_addresses(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Vec<IpAddr> {
    let mut addresses = Vec::new();
    let mut unicast = adapter.FirstUnicastAddress;

    // SAFETY: Each list entry is valid as long as the parent adapter buffer is alive.
    while let Some(entry) = unsafe { unicast.as_ref() } {
        // SAFETY: lpSockaddr is either null or points to a SOCKADDR of the stated family.
        if let Some(sockaddr) = unsafe { entry.Address.lpSockaddr.as_ref() } {
            addresses.extend(sockaddr_to_ip(sockaddr));
        }
        unicast = entry.Next;
    }

    addresses
}

/// Converts an `AF_INET`/`AF_INET6` socket address; other families yield `None`.
#[allow(clippy::cast_ptr_alignment)]
fn sockaddr_to_ip(sockaddr: &SOCKADDR) -> Option<IpAddr> {
    match sockaddr.sa_family {
        f if f == AF_INET => {
            // SAFETY: The family is AF_INET, so the storage is a SOCKADDR_IN.
            let sockaddr_in = unsafe { &*(std::ptr::from_ref(sockaddr).cast::<SOCKADDR_IN>()) };
            // SAFETY: Every view of the in_addr union is plain bytes.
            let octets = unsafe { sockaddr_in.sin_addr.S_un.S_un_b };
            Some(IpAddr::V4(Ipv4Addr::new(
                octets.s_b1,
                octets.s_b2,
                octets.s_b3,
                octets.s_b4,
            )))
        }
        f if f == AF_INET6 => {
            // SAFETY: The family is AF_INET6, so the storage is a SOCKADDR_IN6.
            let sockaddr_in6 =
                unsafe { &*(std::ptr::from_ref(sockaddr).cast::<SOCKADDR_IN6>()) };
            // SAFETY: Every view of the in6_addr union is plain bytes.
            let octets = unsafe { sockaddr_in6.sin6_addr.u.Byte };
            Some(IpAddr::V6(Ipv6Addr::from(octets)))
        }
        _ => None,
    }
}
