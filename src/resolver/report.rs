//! Diagnostic record of a single resolution.

use serde::Serialize;

use super::{Probe, Strategy};
use crate::address::ExclusionPolicy;

/// One strategy run during a resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attempt {
    /// Which strategy ran.
    pub strategy: Strategy,
    /// What it produced.
    pub probe: Probe,
    /// Whether the exclusion set accepted its candidate.
    pub accepted: bool,
}

/// The result of a resolution together with the attempts that led to it.
///
/// Attempts stop at the first accepted one, so strategies after the winner
/// never appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The resolved address, or the empty string if nothing was accepted.
    pub address: String,
    /// The exclusion policy applied.
    pub policy: ExclusionPolicy,
    /// Strategies in the order they ran.
    pub attempts: Vec<Attempt>,
}

impl Resolution {
    /// Returns the strategy that produced the accepted address, if any.
    #[must_use]
    pub fn strategy(&self) -> Option<Strategy> {
        self.attempts
            .iter()
            .find(|attempt| attempt.accepted)
            .map(|attempt| attempt.strategy)
    }

    /// Returns true if an address was resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !self.address.is_empty()
    }
}
