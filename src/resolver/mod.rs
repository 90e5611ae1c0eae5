//! Hardware address resolution through a prioritized fallback chain.
//!
//! The resolver probes three [`Strategy`] values in a fixed order and returns
//! the first candidate the caller's [`Exclusions`](crate::address::Exclusions)
//! accept, or the empty string when none is accepted.
//!
//! # Design
//!
//! - **Explicit probe results**: every strategy returns a [`Probe`]. Platform
//!   query failures become [`Probe::NotFound`] at the strategy boundary and
//!   never reach the caller.
//! - **Sentinel equivalence**: for validation, `NotFound` is evaluated as the
//!   sentinel address, so a failing strategy behaves exactly like one that
//!   returned the sentinel.
//! - **Injected collaborators**: wireless status and interface enumeration are
//!   traits ([`WirelessStatus`](crate::network::WirelessStatus),
//!   [`InterfaceSource`](crate::network::InterfaceSource)), so the chain is
//!   testable without a real network stack.

mod chain;
mod report;
mod strategy;

#[cfg(test)]
mod test_fixtures;

pub use chain::{AddressResolver, DEFAULT_INTERFACE_NAME, resolve};
pub use report::{Attempt, Resolution};
pub use strategy::{Probe, Strategy};
