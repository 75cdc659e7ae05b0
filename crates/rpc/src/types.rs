use alloy_primitives::{Address, B256, U64, U256};
use serde::{Deserialize, Serialize};

/// Fork settings accepted by `anvil_reset`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForkingOptions {
    /// Remote endpoint to fork from. Keeps the current one when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_rpc_url: Option<String>,
    /// Block to fork from. Forks from the latest block when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
}

/// The single parameter of `anvil_reset`.
#[derive(Debug, Serialize)]
pub(crate) struct ResetRequest<'options> {
    pub forking: &'options ForkingOptions,
}

/// Result of `txpool_status`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TxpoolStatus {
    /// Number of transactions ready for inclusion.
    pub pending: U64,
    /// Number of transactions waiting on a nonce gap.
    pub queued: U64,
}

/// An internal ETH transfer reported by `ots_getInternalOperations`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct InternalOperation {
    /// Operation kind: 0 transfer, 1 self-destruct, 2 create, 3 create2.
    #[serde(rename = "type")]
    pub kind: u8,
    /// Sender
    pub from: Address,
    /// Recipient
    pub to: Address,
    /// Transferred amount in wei.
    pub value: U256,
}

/// Result of `ots_getContractCreator`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContractCreator {
    /// Hash of the deploying transaction.
    pub hash: B256,
    /// The account that deployed the contract.
    pub creator: Address,
}
