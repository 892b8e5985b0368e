//! Supported chain identifiers.
//!
//! Profiles and drops are deployed on Polygon and its Mumbai testnet only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chains the profile contracts are deployed on.
///
/// Each variant carries its well-known numeric chain ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub enum Chain {
    /// Polygon PoS mainnet
    Polygon = 137,
    /// Polygon Mumbai testnet
    Mumbai = 80001,
}

impl Chain {
    /// All supported chains.
    pub const ALL: [Chain; 2] = [Self::Polygon, Self::Mumbai];

    /// Returns the numeric chain ID.
    pub const fn as_u64(self) -> u64 {
        self as u64
    }

    /// Human-readable chain name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Polygon => "Polygon",
            Self::Mumbai => "Mumbai",
        }
    }

    pub const fn is_testnet(self) -> bool {
        matches!(self, Self::Mumbai)
    }
}

impl TryFrom<u64> for Chain {
    type Error = UnsupportedChainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            137 => Ok(Self::Polygon),
            80001 => Ok(Self::Mumbai),
            _ => Err(UnsupportedChainError(value.to_string())),
        }
    }
}

impl From<Chain> for u64 {
    fn from(chain: Chain) -> u64 {
        chain.as_u64()
    }
}

/// Parses a chain selector.
///
/// Accepts a numeric chain ID, a chain name, or the `mainnet` / `testnet`
/// aliases. Matching is case-insensitive and ignores surrounding whitespace.
impl FromStr for Chain {
    type Err = UnsupportedChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selector = s.trim();
        if let Ok(id) = selector.parse::<u64>() {
            return Self::try_from(id).map_err(|_| UnsupportedChainError(s.to_string()));
        }
        match selector.to_ascii_lowercase().as_str() {
            "polygon" | "matic" | "mainnet" => Ok(Self::Polygon),
            "mumbai" | "testnet" => Ok(Self::Mumbai),
            _ => Err(UnsupportedChainError(s.to_string())),
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_u64())
    }
}

/// Error when a chain selector does not name a supported chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedChainError(pub String);

impl fmt::Display for UnsupportedChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported chain '{}'; supported chains: {}",
            self.0,
            Chain::ALL
                .iter()
                .map(|c| format!("{} ({})", c.as_u64(), c.name()))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for UnsupportedChainError {}
