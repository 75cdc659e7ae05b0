use alloy_primitives::U256;
use anvil_rpc_client::{NO_PARAMS, RpcClientError, quantity};

use crate::AnvilRpcClient;

/// `evm_*` methods.
impl AnvilRpcClient {
    /// Calls `evm_setAutomine`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn set_automine(&self, enabled: bool) -> Result<(), RpcClientError> {
        self.call_without_result("evm_setAutomine", (enabled,)).await
    }

    /// Calls `evm_setIntervalMining`, mining a block every `interval` seconds.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn set_interval_mining(&self, interval: u64) -> Result<(), RpcClientError> {
        self.call_without_result("evm_setIntervalMining", (quantity::from_u64(interval),))
            .await
    }

    /// Calls `evm_snapshot`, returning the id of the snapshot of the current
    /// state.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn snapshot(&self) -> Result<U256, RpcClientError> {
        self.call("evm_snapshot", NO_PARAMS).await
    }

    /// Calls `evm_revert`, returning whether the snapshot existed.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn revert(&self, snapshot_id: U256) -> Result<bool, RpcClientError> {
        self.call("evm_revert", (quantity::from_u256(snapshot_id),))
            .await
    }

    /// Calls `evm_increaseTime`, returning the total time adjustment in
    /// seconds.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn increase_time(&self, seconds: i64) -> Result<i64, RpcClientError> {
        self.call("evm_increaseTime", (seconds,)).await
    }

    /// Calls `evm_setNextBlockTimestamp`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn set_next_block_timestamp(&self, timestamp: u64) -> Result<(), RpcClientError> {
        self.call_without_result(
            "evm_setNextBlockTimestamp",
            (quantity::from_u64(timestamp),),
        )
        .await
    }

    /// Calls `evm_setBlockGasLimit`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn set_block_gas_limit(&self, gas_limit: U256) -> Result<(), RpcClientError> {
        self.call_without_result("evm_setBlockGasLimit", (quantity::from_u256(gas_limit),))
            .await
    }

    /// Calls `evm_mine`, mining a single block at `timestamp` if provided.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn evm_mine(&self, timestamp: Option<u64>) -> Result<(), RpcClientError> {
        match timestamp {
            Some(timestamp) => {
                self.call_without_result("evm_mine", (quantity::from_u64(timestamp),))
                    .await
            }
            None => self.call_without_result("evm_mine", NO_PARAMS).await,
        }
    }
}
