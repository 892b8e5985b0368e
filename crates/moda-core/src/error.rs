//! Error taxonomy for profile reads.
//!
//! Each concern gets its own closed enum so callers can match exhaustively.
//! [`ReadError`] is the union returned by every contract accessor.

use thiserror::Error;

/// The configuration could not be resolved to a usable client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no chain selected")]
    MissingChain,
    #[error("unsupported chain '{0}'")]
    UnsupportedChain(String),
    #[error("no client handle or RPC endpoint configured")]
    MissingClient,
    #[error("invalid RPC URL '{url}': {reason}")]
    InvalidRpcUrl { url: String, reason: String },
}

/// A supplied address failed shape validation, tagged by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("profile address is invalid")]
    ProfileAddressInvalid,
    #[error("profile registry address is invalid")]
    RegistryAddressInvalid,
    #[error("caller address is invalid")]
    CallerAddressInvalid,
}

/// The call reached the chain but produced no usable profile value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("profile name is undefined")]
    NameUndefined,
    #[error("profile name could not be decoded: {0}")]
    NameUndecodable(String),
}

/// Transport-level failure talking to the RPC endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("RPC error: {0}")]
    Rpc(String),
    /// Elapsed limit in milliseconds.
    #[error("RPC request timed out after {0}ms")]
    Timeout(u64),
}

/// Every way a contract accessor can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Address(#[from] AddressError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Network(#[from] NetworkError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_is_transparent() {
        let err: ReadError = AddressError::ProfileAddressInvalid.into();
        assert_eq!(err.to_string(), "profile address is invalid");

        let err: ReadError = ConfigError::UnsupportedChain("goerli".into()).into();
        assert!(err.to_string().contains("goerli"));
    }

    #[test]
    fn network_timeout_message() {
        assert_eq!(
            NetworkError::Timeout(300).to_string(),
            "RPC request timed out after 300ms"
        );
    }
}
