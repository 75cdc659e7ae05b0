use alloy_primitives::{Address, B256, Bytes};
use anvil_rpc_client::{NO_PARAMS, RpcClientError, quantity};
use serde_json::Value;

use crate::{
    AnvilRpcClient,
    types::{ContractCreator, InternalOperation},
};

/// `ots_*` methods, the Otterscan block explorer API.
///
/// Reference: <https://github.com/otterscan/otterscan/blob/develop/docs/custom-jsonrpc.md>
impl AnvilRpcClient {
    /// Calls `ots_getApiLevel`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn ots_get_api_level(&self) -> Result<u64, RpcClientError> {
        self.call("ots_getApiLevel", NO_PARAMS).await
    }

    /// Calls `ots_getInternalOperations`, listing the ETH transfers made by
    /// internal calls of a transaction.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn ots_get_internal_operations(
        &self,
        transaction_hash: B256,
    ) -> Result<Vec<InternalOperation>, RpcClientError> {
        self.call("ots_getInternalOperations", (transaction_hash,))
            .await
    }

    /// Calls `ots_hasCode`. The block tag is a number or a tag such as
    /// `latest`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn ots_has_code(
        &self,
        address: Address,
        block_tag: &str,
    ) -> Result<bool, RpcClientError> {
        self.call("ots_hasCode", (address, block_tag)).await
    }

    /// Calls `ots_getTransactionError`, returning the raw revert data. Empty
    /// for successful transactions and reverts without a reason.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn ots_get_transaction_error(
        &self,
        transaction_hash: B256,
    ) -> Result<Bytes, RpcClientError> {
        self.call("ots_getTransactionError", (transaction_hash,))
            .await
    }

    /// Calls `ots_traceTransaction`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn ots_trace_transaction(
        &self,
        transaction_hash: B256,
    ) -> Result<Value, RpcClientError> {
        self.call("ots_traceTransaction", (transaction_hash,)).await
    }

    /// Calls `ots_getBlockDetails`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn ots_get_block_details(&self, block_number: u64) -> Result<Value, RpcClientError> {
        self.call(
            "ots_getBlockDetails",
            (quantity::from_u64(block_number),),
        )
        .await
    }

    /// Calls `ots_getBlockTransactions`, returning one page of the block's
    /// transactions and receipts.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn ots_get_block_transactions(
        &self,
        block_number: u64,
        page_number: u64,
        page_size: u64,
    ) -> Result<Value, RpcClientError> {
        self.call(
            "ots_getBlockTransactions",
            (quantity::from_u64(block_number), page_number, page_size),
        )
        .await
    }

    /// Calls `ots_searchTransactionsBefore`, paging backwards through the
    /// transactions touching `address` from `block_number`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn ots_search_transactions_before(
        &self,
        address: Address,
        block_number: u64,
        page_size: u64,
    ) -> Result<Value, RpcClientError> {
        self.call(
            "ots_searchTransactionsBefore",
            (address, block_number, page_size),
        )
        .await
    }

    /// Calls `ots_searchTransactionsAfter`, paging forwards through the
    /// transactions touching `address` from `block_number`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn ots_search_transactions_after(
        &self,
        address: Address,
        block_number: u64,
        page_size: u64,
    ) -> Result<Value, RpcClientError> {
        self.call(
            "ots_searchTransactionsAfter",
            (address, block_number, page_size),
        )
        .await
    }

    /// Calls `ots_getTransactionBySenderAndNonce`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn ots_get_transaction_by_sender_and_nonce(
        &self,
        sender: Address,
        nonce: u64,
    ) -> Result<Option<B256>, RpcClientError> {
        self.call("ots_getTransactionBySenderAndNonce", (sender, nonce))
            .await
    }

    /// Calls `ots_getContractCreator`. Returns `None` if `address` is not a
    /// contract.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn ots_get_contract_creator(
        &self,
        address: Address,
    ) -> Result<Option<ContractCreator>, RpcClientError> {
        self.call("ots_getContractCreator", (address,)).await
    }
}
