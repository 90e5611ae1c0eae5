//! Platform query traits and error types.

use std::net::IpAddr;

use thiserror::Error;

use super::InterfaceSnapshot;

/// Error type for platform network queries.
///
/// Every variant means the same thing to the resolver: the query produced
/// nothing usable. The variants exist for logging.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Windows API call failed.
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),

    /// Unix system call failed.
    #[cfg(unix)]
    #[error("System call failed: {0}")]
    Errno(#[from] nix::errno::Errno),

    /// Permission denied to access network information.
    #[error("Permission denied: {context}")]
    PermissionDenied {
        /// Additional context about what permission was denied.
        context: String,
    },

    /// Reading a platform-provided file failed.
    #[error("I/O error reading {context}: {source}")]
    Io {
        /// What was being read.
        context: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The query is not available on this platform.
    #[error("Unsupported on this platform: {0}")]
    Unsupported(&'static str),
}

impl QueryError {
    /// Wraps an I/O error, mapping `PermissionDenied` to its own variant.
    #[must_use]
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        let context = context.into();
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            Self::PermissionDenied { context }
        } else {
            Self::Io { context, source }
        }
    }
}

/// Enumerates network interfaces.
///
/// All implementations must be safe to call concurrently; queries are read-only.
///
/// # Example
///
/// ```ignore
/// use mac_resolver::network::{InterfaceSource, InterfaceSnapshot, QueryError};
///
/// struct FixedSource(Vec<InterfaceSnapshot>);
///
/// impl InterfaceSource for FixedSource {
///     fn interfaces(&self) -> Result<Vec<InterfaceSnapshot>, QueryError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
pub trait InterfaceSource: Send + Sync {
    /// Returns every interface on the system, in platform enumeration order.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if the platform enumeration fails.
    fn interfaces(&self) -> Result<Vec<InterfaceSnapshot>, QueryError>;

    /// Returns the interface that owns `address`, or `None` if no interface does.
    ///
    /// The default implementation performs a fresh enumeration and scans it.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if the platform lookup fails.
    fn interface_by_address(
        &self,
        address: IpAddr,
    ) -> Result<Option<InterfaceSnapshot>, QueryError> {
        Ok(self
            .interfaces()?
            .into_iter()
            .find(|iface| iface.has_address(address)))
    }
}

/// Reports the hardware address from the platform's wireless status.
pub trait WirelessStatus: Send + Sync {
    /// Returns the self-reported hardware address of the wireless interface,
    /// or `None` if no wireless status is available.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if the platform query fails.
    fn hardware_address(&self) -> Result<Option<String>, QueryError>;
}

impl<T: InterfaceSource + ?Sized> InterfaceSource for &T {
    fn interfaces(&self) -> Result<Vec<InterfaceSnapshot>, QueryError> {
        (**self).interfaces()
    }

    fn interface_by_address(
        &self,
        address: IpAddr,
    ) -> Result<Option<InterfaceSnapshot>, QueryError> {
        (**self).interface_by_address(address)
    }
}

impl<T: WirelessStatus + ?Sized> WirelessStatus for &T {
    fn hardware_address(&self) -> Result<Option<String>, QueryError> {
        (**self).hardware_address()
    }
}
