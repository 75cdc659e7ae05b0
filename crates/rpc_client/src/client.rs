use std::{
    fmt::Debug,
    sync::atomic::{AtomicBool, AtomicU64, Ordering},
};

use alloy_primitives::U64;
use reqwest::{
    Client as HttpClient,
    header::{self, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use crate::jsonrpc;

/// Positional parameters of a method that takes none. Serializes as `[]`.
pub const NO_PARAMS: [(); 0] = [];

const USER_AGENT: &str = concat!("anvil-harness/", env!("CARGO_PKG_VERSION"));

/// Specialized error types
#[derive(Debug, thiserror::Error)]
pub enum RpcClientError {
    /// The HTTP client could not be constructed
    #[error("Failed to construct the HTTP client: {0}")]
    ClientConstruction(reqwest::Error),

    /// The message could not be sent to the node
    #[error(transparent)]
    FailedToSend(reqwest::Error),

    /// The node failed to reply with the body of the response
    #[error("The response text was corrupted: {0}.")]
    CorruptedResponse(reqwest::Error),

    /// The server returned an error code.
    #[error("The Http server returned error status code: {0}")]
    HttpStatus(reqwest::Error),

    /// The request cannot be serialized as JSON.
    #[error(transparent)]
    InvalidJsonRequest(serde_json::Error),

    /// The server returned an invalid JSON-RPC response.
    #[error(
        "Response '{response}' failed to parse with expected type '{expected_type}', due to error: '{error}'"
    )]
    InvalidResponse {
        /// The response text
        response: String,
        /// The expected type of the response
        expected_type: &'static str,
        /// The parse error
        error: serde_json::Error,
    },

    /// Invalid URL format
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),

    /// The JSON-RPC returned an error.
    #[error("{error}. Request: {request}")]
    JsonRpcError {
        /// The JSON-RPC error
        error: jsonrpc::Error,
        /// The request JSON
        request: String,
    },

    /// The WebSocket transport failed.
    #[error(transparent)]
    WebSocket(Box<tokio_tungstenite::tungstenite::Error>),

    /// The node closed the WebSocket connection before replying.
    #[error("The WebSocket connection was closed by the node")]
    ConnectionClosed,

    /// The client was closed.
    #[error("The RPC client was closed")]
    Closed,
}

impl From<tokio_tungstenite::tungstenite::Error> for RpcClientError {
    fn from(error: tokio_tungstenite::tungstenite::Error) -> Self {
        Self::WebSocket(Box::new(error))
    }
}

/// A JSON-RPC 2.0 client that POSTs requests to a node's HTTP endpoint.
///
/// Requests are independent, so the client can be shared between tasks.
#[derive(Debug)]
pub struct RpcClient {
    url: Url,
    client: HttpClient,
    next_id: AtomicU64,
    closed: AtomicBool,
}

impl RpcClient {
    /// Creates a new instance, given the node's HTTP URL.
    pub fn new(url: &str) -> Result<Self, RpcClientError> {
        let mut headers = HeaderMap::new();
        headers.append(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.append(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));

        let client = HttpClient::builder()
            .default_headers(headers)
            .build()
            .map_err(RpcClientError::ClientConstruction)?;

        Ok(Self {
            url: url.parse()?,
            client,
            next_id: AtomicU64::new(1),
            closed: AtomicBool::new(false),
        })
    }

    /// The URL requests are sent to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Calls a method with positional parameters and decodes its result.
    ///
    /// Parameters must serialize as a JSON array, e.g. a tuple, a slice or
    /// [`NO_PARAMS`].
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
        let request = serialize_request(method, params, id)?;

        log::trace!("Sending request to {}: {request}", self.url);

        let response = self.send_request_body(&request).await?;
        parse_response_str(response)?
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

    /// Rejects all subsequent calls with [`RpcClientError::Closed`].
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }

    /// Whether [`RpcClient::close`] was called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    async fn send_request_body(&self, request_body: &str) -> Result<String, RpcClientError> {
        self.client
            .post(self.url.clone())
            .body(request_body.to_owned())
            .send()
            .await
            .map_err(RpcClientError::FailedToSend)?
            .error_for_status()
            .map_err(RpcClientError::HttpStatus)?
            .text()
            .await
            .map_err(RpcClientError::CorruptedResponse)
    }
}

pub(crate) fn serialize_request<ParamsT: Serialize>(
    method: &str,
    params: ParamsT,
    id: jsonrpc::Id,
) -> Result<String, RpcClientError> {
    serde_json::to_string(&jsonrpc::Request {
        jsonrpc: jsonrpc::Version::V2_0,
        method,
        params,
        id,
    })
    .map_err(RpcClientError::InvalidJsonRequest)
}

pub(crate) fn parse_response_str<SuccessT: DeserializeOwned>(
    response: String,
) -> Result<jsonrpc::Response<SuccessT>, RpcClientError> {
    serde_json::from_str(&response).map_err(|error| RpcClientError::InvalidResponse {
        response,
        expected_type: std::any::type_name::<SuccessT>(),
        error,
    })
}
