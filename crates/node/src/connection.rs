use std::sync::Arc;

use anvil_config::{Config, Endpoints};
use anvil_rpc_client::{RpcClient, RpcClientError, WsRpcClient};
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

/// The general-purpose JSON-RPC connection of a node.
///
/// Uses the WebSocket endpoint when the node forks a WebSocket URL and the
/// HTTP endpoint otherwise.
#[derive(Debug)]
pub enum Connection {
    /// Shares the HTTP client of the node's forwarder
    Http(Arc<RpcClient>),
    /// A dedicated WebSocket connection
    Ws(WsRpcClient),
}

impl Connection {
    pub(crate) fn open(
        config: &Config,
        endpoints: &Endpoints,
        http: &Arc<RpcClient>,
    ) -> Result<Self, RpcClientError> {
        if config.uses_websocket() {
            WsRpcClient::new(endpoints.ws.as_str()).map(Self::Ws)
        } else {
            Ok(Self::Http(Arc::clone(http)))
        }
    }

    /// The URL of the endpoint.
    pub fn url(&self) -> &Url {
        match self {
            Self::Http(client) => client.url(),
            Self::Ws(client) => client.url(),
        }
    }

    /// Whether the connection uses the WebSocket endpoint.
    pub fn is_websocket(&self) -> bool {
        matches!(self, Self::Ws(_))
    }

    /// Calls a method with positional parameters and decodes its result.
    pub async fn call<ParamsT: Serialize, SuccessT: DeserializeOwned>(
        &self,
        method: &str,
        params: ParamsT,
    ) -> Result<SuccessT, RpcClientError> {
        match self {
            Self::Http(client) => client.call(method, params).await,
            Self::Ws(client) => client.call(method, params).await,
        }
    }

    /// Calls `eth_blockNumber`.
    pub async fn block_number(&self) -> Result<u64, RpcClientError> {
        match self {
            Self::Http(client) => client.block_number().await,
            Self::Ws(client) => client.block_number().await,
        }
    }

    pub(crate) async fn close(&self) {
        match self {
            Self::Http(client) => client.close(),
            Self::Ws(client) => client.close().await,
        }
    }

    /// Whether the connection has been closed.
    pub fn is_closed(&self) -> bool {
        match self {
            Self::Http(client) => client.is_closed(),
            Self::Ws(client) => client.is_closed(),
        }
    }
}
