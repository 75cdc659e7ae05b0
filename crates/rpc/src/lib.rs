#![warn(missing_docs)]

//! Typed wrappers for the JSON-RPC methods of an Anvil node.
//!
//! Every wrapper is a thin call-site over [`AnvilRpcClient::call`]; results are
//! decoded without further validation.

mod anvil;
mod eth;
mod evm;
mod otterscan;
mod txpool;
mod types;

use std::sync::Arc;

pub use anvil_rpc_client::{NO_PARAMS, RpcClient, RpcClientError, jsonrpc, quantity};
use serde::{Serialize, de::DeserializeOwned};

pub use self::types::{ContractCreator, ForkingOptions, InternalOperation, TxpoolStatus};

/// A client for the methods exposed by an Anvil node over HTTP.
#[derive(Clone, Debug)]
pub struct AnvilRpcClient {
    inner: Arc<RpcClient>,
}

impl AnvilRpcClient {
    /// Creates a new instance, given the node's HTTP URL.
    pub fn new(url: &str) -> Result<Self, RpcClientError> {
        RpcClient::new(url).map(|client| Self::with_client(Arc::new(client)))
    }

    /// Creates a new instance that shares an existing HTTP client.
    pub fn with_client(inner: Arc<RpcClient>) -> Self {
        Self { inner }
    }

    /// The underlying HTTP client.
    pub fn inner(&self) -> &Arc<RpcClient> {
        &self.inner
    }

    /// Calls an arbitrary method with positional parameters and decodes its
    /// result.
    pub async fn call<ParamsT: Serialize, SuccessT: DeserializeOwned>(
        &self,
        method: &str,
        params: ParamsT,
    ) -> Result<SuccessT, RpcClientError> {
        self.inner.call(method, params).await
    }

    /// Rejects all subsequent calls, including those made through clones.
    pub fn close(&self) {
        self.inner.close();
    }

    /// Calls a method whose result carries no information.
    async fn call_without_result<ParamsT: Serialize>(
        &self,
        method: &str,
        params: ParamsT,
    ) -> Result<(), RpcClientError> {
        self.inner
            .call::<_, serde::de::IgnoredAny>(method, params)
            .await
            .map(|_ignored| ())
    }
}
