use alloy_primitives::{B256, U64};
use anvil_rpc_client::{NO_PARAMS, RpcClientError};
use serde::Serialize;

use crate::AnvilRpcClient;

/// `eth_*` and `web3_*` methods.
impl AnvilRpcClient {
    /// Calls `eth_blockNumber`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn block_number(&self) -> Result<u64, RpcClientError> {
        self.inner.block_number().await
    }

    /// Calls `eth_chainId`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn chain_id(&self) -> Result<u64, RpcClientError> {
        self.call::<_, U64>("eth_chainId", NO_PARAMS)
            .await
            .map(|chain_id| chain_id.to::<u64>())
    }

    /// Calls `web3_clientVersion`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn client_version(&self) -> Result<String, RpcClientError> {
        self.call("web3_clientVersion", NO_PARAMS).await
    }

    /// Calls `eth_sendUnsignedTransaction`, executing a transaction request
    /// from any sender regardless of its signature.
    ///
    /// The request has the shape accepted by `eth_sendTransaction`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, transaction))
    )]
    pub async fn send_unsigned_transaction<TransactionT: Serialize>(
        &self,
        transaction: &TransactionT,
    ) -> Result<B256, RpcClientError> {
        self.call("eth_sendUnsignedTransaction", (transaction,))
            .await
    }
}
