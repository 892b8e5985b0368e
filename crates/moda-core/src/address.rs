//! EVM address validation.
//!
//! Addresses must have the canonical `0x` + 40 hex digit shape before they are
//! allowed anywhere near the RPC layer. Letter case is ignored, so checksummed
//! and lowercase spellings of the same account compare equal once parsed.

use std::fmt;

use alloy::primitives::Address;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AddressError;

/// Length of `0x` followed by 40 hex digits.
const ADDRESS_LEN: usize = 42;

/// Returns `true` iff `candidate` is `0x` followed by exactly 40 hex digits.
pub fn is_valid_address(candidate: &str) -> bool {
    candidate.len() == ADDRESS_LEN
        && candidate.starts_with("0x")
        && candidate[2..].bytes().all(|b| b.is_ascii_hexdigit())
}

/// Validates `candidate` and parses it, reporting `invalid` on failure.
///
/// `invalid` names which field was malformed, so callers can tell a bad
/// profile address from a bad caller address.
pub fn parse_address(candidate: &str, invalid: AddressError) -> Result<Address, AddressError> {
    if !is_valid_address(candidate) {
        return Err(invalid);
    }
    candidate.parse().map_err(|_| invalid)
}

/// A validated EVM address wrapper.
///
/// Deserializes from a `0x`-prefixed 40 hex-char string and serializes back to
/// checksum format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvmAddress(pub Address);

impl EvmAddress {
    pub fn inner(&self) -> Address {
        self.0
    }
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EvmAddress {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid_address(s) {
            return Err(format!(
                "invalid EVM address '{s}': expected 0x-prefixed 40 hex chars"
            ));
        }
        s.parse().map(EvmAddress).map_err(|e| format!("{e}"))
    }
}

impl Serialize for EvmAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for EvmAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EvmAddressVisitor;

        impl Visitor<'_> for EvmAddressVisitor {
            type Value = EvmAddress;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 0x-prefixed 40 hex char EVM address")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<EvmAddress, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(EvmAddressVisitor)
    }
}
