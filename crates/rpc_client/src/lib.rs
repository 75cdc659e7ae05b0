#![warn(missing_docs)]

//! JSON-RPC 2.0 clients for a locally running Anvil node

mod client;
mod ws;

/// Types specific to JSON-RPC
pub mod jsonrpc;
pub mod quantity;

pub use self::{
    client::{NO_PARAMS, RpcClient, RpcClientError},
    ws::WsRpcClient,
};
