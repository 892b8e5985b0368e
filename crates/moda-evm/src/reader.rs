//! The read-only chain access seam.
//!
//! Accessors only ever talk to the chain through [`ContractReader`], which
//! keeps them independent of the transport and lets tests count how many
//! requests actually reach the network layer.

use alloy::primitives::{Address, Bytes, B256};
use async_trait::async_trait;
use moda_core::NetworkError;

/// Filter for a single `eth_getLogs` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    /// Contract that emitted the logs.
    pub address: Address,
    /// Event signature hash (topic 0).
    pub event_signature: B256,
    /// Required value of topic 1, if any.
    pub topic1: Option<B256>,
    /// Required value of topic 2, if any.
    pub topic2: Option<B256>,
    /// First block to scan. Scans from genesis when unset.
    pub from_block: Option<u64>,
}

impl LogQuery {
    pub fn new(address: Address, event_signature: B256) -> Self {
        Self {
            address,
            event_signature,
            topic1: None,
            topic2: None,
            from_block: None,
        }
    }

    pub fn topic1(mut self, topic: B256) -> Self {
        self.topic1 = Some(topic);
        self
    }

    pub fn topic2(mut self, topic: B256) -> Self {
        self.topic2 = Some(topic);
        self
    }

    pub fn from_block(mut self, block: u64) -> Self {
        self.from_block = Some(block);
        self
    }
}

/// A log entry stripped down to what the accessors decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLog {
    pub topics: Vec<B256>,
    pub data: Bytes,
    pub block_number: Option<u64>,
    pub transaction_hash: Option<B256>,
}

/// Read-only access to contract state and event history.
#[async_trait]
pub trait ContractReader: Send + Sync {
    /// Performs an `eth_call` against `to` with ABI-encoded `input`.
    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes, NetworkError>;

    /// Fetches logs matching `query`.
    async fn logs(&self, query: &LogQuery) -> Result<Vec<RawLog>, NetworkError>;
}
