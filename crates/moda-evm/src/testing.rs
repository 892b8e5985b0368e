//! In-memory [`ContractReader`] double for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use alloy::primitives::{Address, Bytes, B256};
use alloy::sol_types::SolValue;
use async_trait::async_trait;
use moda_core::NetworkError;

use crate::abi::IProfile;
use crate::reader::{ContractReader, LogQuery, RawLog};

/// Canned responses plus a count of every request that reached it.
pub struct MockReader {
    call_response: Result<Bytes, NetworkError>,
    logs_response: Result<Vec<RawLog>, NetworkError>,
    calls: AtomicUsize,
    last_query: Mutex<Option<LogQuery>>,
}

impl MockReader {
    /// Answers every call with `data` and every log query with no logs.
    pub fn returning(data: Bytes) -> Self {
        Self {
            call_response: Ok(data),
            logs_response: Ok(Vec::new()),
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    /// Answers `name()` with the ABI encoding of `name`.
    pub fn returning_name(name: &str) -> Self {
        Self::returning((name.to_string(),).abi_encode_params().into())
    }

    /// Answers every call with empty return data, as an account without code does.
    pub fn returning_nothing() -> Self {
        Self::returning(Bytes::new())
    }

    /// Fails every request with `err`.
    pub fn failing(err: NetworkError) -> Self {
        Self {
            call_response: Err(err.clone()),
            logs_response: Err(err),
            ..Self::returning_nothing()
        }
    }

    pub fn with_logs(mut self, logs: Vec<RawLog>) -> Self {
        self.logs_response = Ok(logs);
        self
    }

    /// Number of requests received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<LogQuery> {
        self.last_query.lock().ok().and_then(|q| q.clone())
    }
}

#[async_trait]
impl ContractReader for MockReader {
    async fn call(&self, _to: Address, _input: Bytes) -> Result<Bytes, NetworkError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.call_response.clone()
    }

    async fn logs(&self, query: &LogQuery) -> Result<Vec<RawLog>, NetworkError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_query.lock() {
            *last = Some(query.clone());
        }
        self.logs_response.clone()
    }
}

/// Builds a `ProfileChangedFor(kontract, caller)` log as the registry emits it.
pub fn profile_changed_log(kontract: Address, caller: Address) -> RawLog {
    RawLog {
        topics: vec![
            <IProfile::ProfileChangedFor as alloy::sol_types::SolEvent>::SIGNATURE_HASH,
            kontract.into_word(),
            caller.into_word(),
        ],
        data: Bytes::new(),
        block_number: Some(1),
        transaction_hash: Some(B256::ZERO),
    }
}
