//! mac-resolver: Device Hardware Address Resolver
//!
//! A library for obtaining a stable hardware (MAC) address for the current
//! device by probing platform queries in priority order and filtering out
//! placeholder values.

pub mod address;
pub mod config;
pub mod network;
pub mod resolver;
