//! Platform-specific interface query implementations.
//!
//! Each platform exposes a `PlatformInterfaces` type implementing both
//! [`InterfaceSource`](super::InterfaceSource) and
//! [`WirelessStatus`](super::WirelessStatus).
//!
//! # Platform Support
//!
//! - **Windows**: `GetAdaptersAddresses` via the `windows` crate. Wireless
//!   status comes from `IEEE 802.11` adapters.
//! - **Unix**: `getifaddrs` via the `nix` crate. Wireless status comes from
//!   sysfs on Linux and Android and is unavailable elsewhere.
//! - **Other**: every query fails with `QueryError::Unsupported`.

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub use windows::WindowsInterfaces as PlatformInterfaces;

#[cfg(unix)]
mod unix;

#[cfg(any(target_os = "linux", target_os = "android"))]
mod sysfs;

#[cfg(unix)]
pub use unix::UnixInterfaces as PlatformInterfaces;

#[cfg(not(any(unix, windows)))]
mod unsupported;

#[cfg(not(any(unix, windows)))]
pub use unsupported::UnsupportedInterfaces as PlatformInterfaces;
