//! Fallback for targets without an interface query implementation.

use crate::network::{InterfaceSnapshot, InterfaceSource, QueryError, WirelessStatus};

/// Source whose every query fails with [`QueryError::Unsupported`].
#[derive(Debug, Clone, Default)]
pub struct UnsupportedInterfaces {
    _private: (),
}

impl UnsupportedInterfaces {
    /// Creates a new unsupported-platform source.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl InterfaceSource for UnsupportedInterfaces {
    fn interfaces(&self) -> Result<Vec<InterfaceSnapshot>, QueryError> {
        Err(QueryError::Unsupported("interface enumeration"))
    }
}

impl WirelessStatus for UnsupportedInterfaces {
    fn hardware_address(&self) -> Result<Option<String>, QueryError> {
        Err(QueryError::Unsupported("wireless status"))
    }
}
