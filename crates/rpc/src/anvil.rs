use alloy_primitives::{Address, B256, Bytes, U256};
use anvil_rpc_client::{NO_PARAMS, RpcClientError, quantity};
use serde_json::{Map, Value};

use crate::{
    AnvilRpcClient,
    types::{ForkingOptions, ResetRequest},
};

/// `anvil_*` methods.
impl AnvilRpcClient {
    /// Calls `anvil_impersonateAccount`, allowing transactions to be sent on
    /// behalf of `address` without its private key.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn impersonate_account(&self, address: Address) -> Result<(), RpcClientError> {
        self.call_without_result("anvil_impersonateAccount", (address,))
            .await
    }

    /// Calls `anvil_stopImpersonatingAccount`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn stop_impersonating_account(
        &self,
        address: Address,
    ) -> Result<(), RpcClientError> {
        self.call_without_result("anvil_stopImpersonatingAccount", (address,))
            .await
    }

    /// Calls `anvil_autoImpersonateAccount`. While enabled, the sender of
    /// every transaction is impersonated.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn auto_impersonate_account(&self, enabled: bool) -> Result<(), RpcClientError> {
        self.call_without_result("anvil_autoImpersonateAccount", (enabled,))
            .await
    }

    /// Calls `anvil_getAutomine`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_automine(&self) -> Result<bool, RpcClientError> {
        self.call("anvil_getAutomine", NO_PARAMS).await
    }

    /// Calls `anvil_getBlobByHash` with a KZG commitment versioned hash.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_blob_by_hash(&self, hash: B256) -> Result<Option<Bytes>, RpcClientError> {
        self.call("anvil_getBlobByHash", (hash,)).await
    }

    /// Calls `anvil_getBlobsByTransactionHash`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_blobs_by_transaction_hash(
        &self,
        transaction_hash: B256,
    ) -> Result<Option<Vec<Bytes>>, RpcClientError> {
        self.call("anvil_getBlobsByTransactionHash", (transaction_hash,))
            .await
    }

    /// Calls `anvil_getBlobSidecarsByBlockId`. The block id is a number, hash
    /// or tag such as `latest`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_blob_sidecars_by_block_id(
        &self,
        block_id: &str,
    ) -> Result<Value, RpcClientError> {
        self.call("anvil_getBlobSidecarsByBlockId", (block_id,))
            .await
    }

    /// Calls `anvil_getBlobsByBlockId`, optionally filtered by versioned
    /// hashes. The filter is only sent when non-empty.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_blobs_by_block_id(
        &self,
        block_id: &str,
        versioned_hashes: &[B256],
    ) -> Result<Value, RpcClientError> {
        if versioned_hashes.is_empty() {
            self.call("anvil_getBlobsByBlockId", (block_id,)).await
        } else {
            self.call("anvil_getBlobsByBlockId", (block_id, versioned_hashes))
                .await
        }
    }

    /// Calls `anvil_mine`, mining `blocks` blocks (one when absent) spaced by
    /// `interval` seconds.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn mine(
        &self,
        blocks: Option<U256>,
        interval: Option<U256>,
    ) -> Result<(), RpcClientError> {
        // Positional: a missing block count is sent as `null` when an
        // interval follows it.
        let params: Vec<Option<String>> = match (blocks, interval) {
            (None, None) => Vec::new(),
            (Some(blocks), None) => vec![Some(quantity::from_u256(blocks))],
            (blocks, Some(interval)) => vec![
                blocks.map(quantity::from_u256),
                Some(quantity::from_u256(interval)),
            ],
        };

        self.call_without_result("anvil_mine", params).await
    }

    /// Calls `anvil_dropTransaction`, returning the hash of the removed
    /// transaction if it was in the pool.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn drop_transaction(
        &self,
        transaction_hash: B256,
    ) -> Result<Option<B256>, RpcClientError> {
        self.call("anvil_dropTransaction", (transaction_hash,)).await
    }

    /// Calls `anvil_reset`. Resets to a fresh forked state with the provided
    /// options, or disables forking when `None`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn reset(&self, forking: Option<&ForkingOptions>) -> Result<(), RpcClientError> {
        match forking {
            Some(forking) => {
                self.call_without_result("anvil_reset", (ResetRequest { forking },))
                    .await
            }
            None => self.call_without_result("anvil_reset", NO_PARAMS).await,
        }
    }

    /// Calls `anvil_setRpcUrl`, replacing the remote endpoint used for
    /// forking.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn set_rpc_url(&self, url: &str) -> Result<(), RpcClientError> {
        self.call_without_result("anvil_setRpcUrl", (url,)).await
    }

    /// Calls `anvil_setBalance`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn set_balance(&self, address: Address, balance: U256) -> Result<(), RpcClientError> {
        self.call_without_result(
            "anvil_setBalance",
            (address, quantity::from_u256(balance)),
        )
        .await
    }

    /// Calls `anvil_setCode`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn set_code(&self, address: Address, code: &Bytes) -> Result<(), RpcClientError> {
        self.call_without_result("anvil_setCode", (address, code))
            .await
    }

    /// Calls `anvil_setNonce`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn set_nonce(&self, address: Address, nonce: u64) -> Result<(), RpcClientError> {
        self.call_without_result("anvil_setNonce", (address, quantity::from_u64(nonce)))
            .await
    }

    /// Calls `anvil_setStorageAt`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn set_storage_at(
        &self,
        address: Address,
        slot: U256,
        value: B256,
    ) -> Result<bool, RpcClientError> {
        self.call(
            "anvil_setStorageAt",
            (address, quantity::from_u256(slot), value),
        )
        .await
    }

    /// Calls `anvil_setCoinbase`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn set_coinbase(&self, address: Address) -> Result<(), RpcClientError> {
        self.call_without_result("anvil_setCoinbase", (address,))
            .await
    }

    /// Calls `anvil_setLoggingEnabled`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn set_logging_enabled(&self, enabled: bool) -> Result<(), RpcClientError> {
        self.call_without_result("anvil_setLoggingEnabled", (enabled,))
            .await
    }

    /// Calls `anvil_setMinGasPrice`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn set_min_gas_price(&self, price: U256) -> Result<(), RpcClientError> {
        self.call_without_result("anvil_setMinGasPrice", (quantity::from_u256(price),))
            .await
    }

    /// Calls `anvil_setNextBlockBaseFeePerGas`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn set_next_block_base_fee_per_gas(
        &self,
        base_fee: U256,
    ) -> Result<(), RpcClientError> {
        self.call_without_result(
            "anvil_setNextBlockBaseFeePerGas",
            (quantity::from_u256(base_fee),),
        )
        .await
    }

    /// Calls `anvil_setChainId`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn set_chain_id(&self, chain_id: u64) -> Result<(), RpcClientError> {
        self.call_without_result("anvil_setChainId", (quantity::from_u64(chain_id),))
            .await
    }

    /// Calls `anvil_dumpState`. The returned snapshot can be passed to
    /// [`AnvilRpcClient::load_state`] of a fresh node.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn dump_state(&self) -> Result<Bytes, RpcClientError> {
        self.call("anvil_dumpState", NO_PARAMS).await
    }

    /// Calls `anvil_loadState`. Colliding accounts and storage slots are
    /// overwritten.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn load_state(&self, state: &Bytes) -> Result<bool, RpcClientError> {
        self.call("anvil_loadState", (state,)).await
    }

    /// Calls `anvil_nodeInfo`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn node_info(&self) -> Result<Map<String, Value>, RpcClientError> {
        self.call("anvil_nodeInfo", NO_PARAMS).await
    }

    /// Calls `anvil_metadata`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn metadata(&self) -> Result<Map<String, Value>, RpcClientError> {
        self.call("anvil_metadata", NO_PARAMS).await
    }

    /// Calls `anvil_setTime`, returning the applied offset in seconds.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn set_time(&self, timestamp: u64) -> Result<u64, RpcClientError> {
        self.call("anvil_setTime", (timestamp,)).await
    }

    /// Calls `anvil_setBlockTimestampInterval`. Subsequent block timestamps
    /// are the previous timestamp plus `interval` seconds.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn set_block_timestamp_interval(&self, interval: u64) -> Result<(), RpcClientError> {
        self.call_without_result(
            "anvil_setBlockTimestampInterval",
            (quantity::from_u64(interval),),
        )
        .await
    }

    /// Calls `anvil_removeBlockTimestampInterval`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn remove_block_timestamp_interval(&self) -> Result<bool, RpcClientError> {
        self.call("anvil_removeBlockTimestampInterval", NO_PARAMS)
            .await
    }

    /// Calls `anvil_enableTraces`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn enable_traces(&self) -> Result<(), RpcClientError> {
        self.call_without_result("anvil_enableTraces", NO_PARAMS)
            .await
    }
}
