//! Mocked JSON-RPC endpoints backed by a `mockito` server.

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{Value, json};

/// The id of the first request made by a freshly created client.
pub const FIRST_REQUEST_ID: u64 = 1;

/// Mocks a single successful call. The request must carry exactly the
/// provided id, method and positional parameters.
pub async fn mock_call(
    server: &mut ServerGuard,
    id: u64,
    method: &str,
    params: Value,
    result: Value,
) -> Mock {
    server
        .mock("POST", "/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": result,
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await
}

/// Mocks the first call of a freshly created client.
pub async fn mock_first_call(
    server: &mut ServerGuard,
    method: &str,
    params: Value,
    result: Value,
) -> Mock {
    mock_call(server, FIRST_REQUEST_ID, method, params, result).await
}

/// Mocks a call, with any parameters, that the node rejects with a JSON-RPC
/// error.
pub async fn mock_error(server: &mut ServerGuard, method: &str, code: i64, message: &str) -> Mock {
    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({ "method": method })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "jsonrpc": "2.0",
                "id": FIRST_REQUEST_ID,
                "error": { "code": code, "message": message },
            })
            .to_string(),
        )
        .create_async()
        .await
}

/// Mocks `eth_blockNumber` returning the provided block number, for any
/// number of calls.
pub async fn mock_block_number(server: &mut ServerGuard, block_number: u64) -> Mock {
    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({ "method": "eth_blockNumber" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "jsonrpc": "2.0",
                "id": FIRST_REQUEST_ID,
                "result": format!("{block_number:#x}"),
            })
            .to_string(),
        )
        .expect_at_least(1)
        .create_async()
        .await
}

/// The port a mockito server listens on.
pub fn port_of(server: &ServerGuard) -> u16 {
    server
        .host_with_port()
        .rsplit_once(':')
        .and_then(|(_, port)| port.parse().ok())
        .expect("mockito listens on a port")
}
