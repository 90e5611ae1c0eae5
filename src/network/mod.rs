//! Network layer for enumerating interfaces and querying wireless status.
//!
//! This module provides types and traits for:
//! - Representing interface snapshots ([`InterfaceSnapshot`])
//! - Interface type classification ([`InterfaceKind`])
//! - Enumerating interfaces ([`InterfaceSource`])
//! - Reading the wireless status address ([`WirelessStatus`])
//! - Platform-specific implementations ([`platform`])

mod interface;
pub mod platform;
mod source;

pub use interface::{InterfaceKind, InterfaceSnapshot};
pub use source::{InterfaceSource, QueryError, WirelessStatus};
