//! Hardware address representation and exclusion rules.
//!
//! Addresses are carried as strings of colon-separated lowercase hex
//! octets (e.g. `"02:00:00:00:00:00"`). The empty string means "not found".

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// Placeholder address reported when a real hardware address is unavailable
/// or access to it is restricted.
pub const SENTINEL_ADDRESS: &str = "02:00:00:00:00:00";

/// Formats raw hardware-address bytes as lowercase hex pairs joined by `:`.
///
/// # Examples
///
/// ```
/// use mac_resolver::address::format_hardware_address;
///
/// assert_eq!(format_hardware_address(&[0x02, 0xAA, 0xBB]), "02:aa:bb");
/// assert_eq!(format_hardware_address(&[]), "");
/// ```
#[must_use]
pub fn format_hardware_address(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(":")
}

/// Returns true if `address` is one or more colon-separated two-digit hex octets.
///
/// Case is not checked; use [`normalize_address`] to lowercase.
#[must_use]
pub fn is_valid_hardware_address(address: &str) -> bool {
    !address.is_empty()
        && address
            .split(':')
            .all(|octet| octet.len() == 2 && octet.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Trims surrounding whitespace and lowercases an address string.
#[must_use]
pub fn normalize_address(address: &str) -> String {
    address.trim().to_ascii_lowercase()
}

/// Which rule an [`Exclusions`] set applies to candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExclusionPolicy {
    /// No caller values: reject exactly [`SENTINEL_ADDRESS`].
    DefaultSentinel,
    /// Reject exactly the caller's values. The sentinel is accepted unless listed.
    Custom,
}

impl fmt::Display for ExclusionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DefaultSentinel => write!(f, "default-sentinel"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

/// Caller-supplied set of addresses that are not acceptable results.
///
/// Comparison is exact string equality; no normalization is applied here.
///
/// # Examples
///
/// ```
/// use mac_resolver::address::{Exclusions, SENTINEL_ADDRESS};
///
/// let default = Exclusions::none();
/// assert!(!default.accepts(SENTINEL_ADDRESS));
///
/// let custom = Exclusions::new(["11:22:33:44:55:66"]);
/// assert!(!custom.accepts("11:22:33:44:55:66"));
/// assert!(custom.accepts(SENTINEL_ADDRESS));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusions {
    addresses: HashSet<String>,
}

impl Exclusions {
    /// Creates an exclusion set from the given addresses.
    #[must_use]
    pub fn new<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            addresses: addresses.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an empty set, which rejects only the sentinel.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns the policy this set applies.
    #[must_use]
    pub fn policy(&self) -> ExclusionPolicy {
        if self.addresses.is_empty() {
            ExclusionPolicy::DefaultSentinel
        } else {
            ExclusionPolicy::Custom
        }
    }

    /// Returns true if `candidate` is an acceptable result under this set.
    #[must_use]
    pub fn accepts(&self, candidate: &str) -> bool {
        match self.policy() {
            ExclusionPolicy::DefaultSentinel => candidate != SENTINEL_ADDRESS,
            ExclusionPolicy::Custom => !self.addresses.contains(candidate),
        }
    }

    /// Returns true if no caller values are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Returns the number of caller values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Returns the caller values in sorted order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut values: Vec<&str> = self.addresses.iter().map(String::as_str).collect();
        values.sort_unstable();
        values
    }
}

impl<S: Into<String>> FromIterator<S> for Exclusions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod formatting {
        use super::*;

        #[test]
        fn formats_lowercase_without_trailing_separator() {
            assert_eq!(format_hardware_address(&[0x02, 0x00, 0xAA]), "02:00:aa");
        }

        #[test]
        fn formats_full_mac() {
            let bytes = [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01];
            assert_eq!(format_hardware_address(&bytes), "de:ad:be:ef:00:01");
        }

        #[test]
        fn single_byte_has_no_separator() {
            assert_eq!(format_hardware_address(&[0x0F]), "0f");
        }

        #[test]
        fn empty_bytes_format_as_empty_string() {
            assert_eq!(format_hardware_address(&[]), "");
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn accepts_standard_mac() {
            assert!(is_valid_hardware_address("aa:bb:cc:dd:ee:ff"));
            assert!(is_valid_hardware_address("AA:BB:CC:DD:EE:FF"));
            assert!(is_valid_hardware_address(SENTINEL_ADDRESS));
        }

        #[test]
        fn rejects_malformed_values() {
            assert!(!is_valid_hardware_address(""));
            assert!(!is_valid_hardware_address("aa:bb:cc:"));
            assert!(!is_valid_hardware_address("aa-bb-cc-dd-ee-ff"));
            assert!(!is_valid_hardware_address("a:bb:cc"));
            assert!(!is_valid_hardware_address("zz:bb:cc"));
        }

        #[test]
        fn normalize_trims_and_lowercases() {
            assert_eq!(normalize_address("  AA:Bb:cc \n"), "aa:bb:cc");
        }
    }

    mod exclusions {
        use super::*;

        #[test]
        fn empty_set_uses_default_sentinel_policy() {
            let exclusions = Exclusions::none();

            assert_eq!(exclusions.policy(), ExclusionPolicy::DefaultSentinel);
            assert!(!exclusions.accepts(SENTINEL_ADDRESS));
            assert!(exclusions.accepts("aa:bb:cc:dd:ee:ff"));
        }

        #[test]
        fn custom_set_rejects_listed_values() {
            let exclusions = Exclusions::new(["11:22:33:44:55:66", "aa:aa:aa:aa:aa:aa"]);

            assert_eq!(exclusions.policy(), ExclusionPolicy::Custom);
            assert!(!exclusions.accepts("11:22:33:44:55:66"));
            assert!(!exclusions.accepts("aa:aa:aa:aa:aa:aa"));
            assert!(exclusions.accepts("bb:bb:bb:bb:bb:bb"));
        }

        #[test]
        fn custom_set_without_sentinel_lets_sentinel_through() {
            let exclusions = Exclusions::new(["11:22:33:44:55:66"]);
            assert!(exclusions.accepts(SENTINEL_ADDRESS));
        }

        #[test]
        fn comparison_is_exact() {
            let exclusions = Exclusions::new(["aa:bb:cc:dd:ee:ff"]);
            assert!(exclusions.accepts("AA:BB:CC:DD:EE:FF"));
        }

        #[test]
        fn duplicates_collapse() {
            let exclusions: Exclusions = ["aa:bb", "aa:bb"].into_iter().collect();
            assert_eq!(exclusions.len(), 1);
        }

        #[test]
        fn sorted_returns_values_in_order() {
            let exclusions = Exclusions::new(["cc:cc", "aa:aa", "bb:bb"]);
            assert_eq!(exclusions.sorted(), vec!["aa:aa", "bb:bb", "cc:cc"]);
        }

        #[test]
        fn policy_display() {
            assert_eq!(ExclusionPolicy::DefaultSentinel.to_string(), "default-sentinel");
            assert_eq!(ExclusionPolicy::Custom.to_string(), "custom");
        }
    }
}
