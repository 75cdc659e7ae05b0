use anvil_rpc_client::{NO_PARAMS, RpcClientError};
use serde_json::{Map, Value};

use crate::{AnvilRpcClient, types::TxpoolStatus};

/// `txpool_*` methods.
impl AnvilRpcClient {
    /// Calls `txpool_status`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn txpool_status(&self) -> Result<TxpoolStatus, RpcClientError> {
        self.call("txpool_status", NO_PARAMS).await
    }

    /// Calls `txpool_inspect`, a textual summary of pending and queued
    /// transactions keyed by sender and nonce.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn txpool_inspect(&self) -> Result<Map<String, Value>, RpcClientError> {
        self.call("txpool_inspect", NO_PARAMS).await
    }

    /// Calls `txpool_content`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn txpool_content(&self) -> Result<Map<String, Value>, RpcClientError> {
        self.call("txpool_content", NO_PARAMS).await
    }
}
