use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use alloy_primitives::U64;
use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tokio::{net::TcpStream, sync::Mutex};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message,
};
use url::Url;

use crate::{
    NO_PARAMS, RpcClientError,
    client::{parse_response_str, serialize_request},
    jsonrpc,
};

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// The part of a frame needed to correlate it with a request.
#[derive(Deserialize)]
struct Correlation {
    #[serde(default)]
    id: Option<jsonrpc::Id>,
    #[serde(default)]
    method: Option<serde::de::IgnoredAny>,
}

impl Correlation {
    fn answers(&self, request_id: &jsonrpc::Id) -> bool {
        match &self.id {
            Some(id) => id == request_id,
            // Notifications carry a method, early errors carry neither
            None => self.method.is_none(),
        }
    }
}

/// A JSON-RPC 2.0 client for a node's WebSocket endpoint.
///
/// The socket is opened by the first call and reopened by the next call after
/// a transport failure, so the client can be created before the node listens.
/// Calls are serialized over the single socket.
#[derive(Debug)]
pub struct WsRpcClient {
    url: Url,
    socket: Mutex<Option<Socket>>,
    next_id: AtomicU64,
    closed: AtomicBool,
}

impl WsRpcClient {
    /// Creates a new instance, given the node's WebSocket URL. No connection
    /// is made until the first call.
    pub fn new(url: &str) -> Result<Self, RpcClientError> {
        Ok(Self {
            url: url.parse()?,
            socket: Mutex::new(None),
            next_id: AtomicU64::new(1),
            closed: AtomicBool::new(false),
        })
    }

    /// The URL the socket connects to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Calls a method with positional parameters and decodes its result.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, params))
    )]
    pub async fn call<ParamsT: Serialize, SuccessT: DeserializeOwned>(
        &self,
        method: &str,
        params: ParamsT,
    ) -> Result<SuccessT, RpcClientError> {
        if self.is_closed() {
            return Err(RpcClientError::Closed);
        }

        let id = jsonrpc::Id::Num(self.next_id.fetch_add(1, Ordering::Relaxed));
        let request = serialize_request(method, params, id.clone())?;

        let mut guard = self.socket.lock().await;
        let mut socket = match guard.take() {
            Some(socket) => socket,
            None => {
                log::debug!("Connecting to {}", self.url);
                let (socket, _response) = connect_async(self.url.as_str()).await?;
                socket
            }
        };

        let result = exchange(&mut socket, &request, &id).await;
        // A broken socket is dropped so that the next call reconnects
        if !matches!(
            result,
            Err(RpcClientError::WebSocket(_) | RpcClientError::ConnectionClosed)
        ) {
            *guard = Some(socket);
        }
        drop(guard);

        parse_response_str::<SuccessT>(result?)?
            .data
            .into_result()
            .map_err(|error| RpcClientError::JsonRpcError { error, request })
    }

    /// Calls `eth_blockNumber`.
    pub async fn block_number(&self) -> Result<u64, RpcClientError> {
        self.call::<_, U64>("eth_blockNumber", NO_PARAMS)
            .await
            .map(|number| number.to::<u64>())
    }

    /// Sends a close frame if a socket is open and rejects all subsequent
    /// calls with [`RpcClientError::Closed`].
    pub async fn close(&self) {
        self.closed.store(true, Ordering::Release);

        if let Some(mut socket) = self.socket.lock().await.take() {
            if let Err(error) = socket.close(None).await {
                log::debug!("Failed to close WebSocket connection to {}: {error}", self.url);
            }
        }
    }

    /// Whether [`WsRpcClient::close`] was called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

/// Sends a request and waits for the text frame carrying its response.
/// Frames for other ids, such as subscription notifications, are skipped.
async fn exchange(
    socket: &mut Socket,
    request: &str,
    id: &jsonrpc::Id,
) -> Result<String, RpcClientError> {
    socket.send(Message::Text(request.to_owned())).await?;

    while let Some(message) = socket.next().await {
        match message? {
            Message::Text(text) => {
                let matches_request = serde_json::from_str::<Correlation>(&text)
                    .map(|correlation| correlation.answers(id))
                    // Let the caller report the unparsable response
                    .unwrap_or(true);

                if matches_request {
                    return Ok(text);
                }
            }
            Message::Close(_) => return Err(RpcClientError::ConnectionClosed),
            Message::Binary(_) | Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => {}
        }
    }

    Err(RpcClientError::ConnectionClosed)
}
