//! Local TCP endpoints for tests

use std::{net::TcpListener as StdTcpListener, time::Duration};

use serde_json::{Value, json};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    task::JoinHandle,
};

/// Returns a port on the loopback interface that nothing listens on.
pub fn unused_port() -> u16 {
    StdTcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("failed to reserve a local port")
        .port()
}

/// Starts listening on `port` after `delay` and answers every HTTP JSON-RPC
/// request with `block_number`, regardless of its method.
pub fn serve_block_number_after(port: u16, delay: Duration, block_number: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let listener = TcpListener::bind(("127.0.0.1", port))
            .await
            .expect("failed to bind delayed responder");
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(respond(stream, block_number));
        }
    })
}

async fn respond(mut stream: TcpStream, block_number: u64) {
    let mut request = Vec::new();
    let mut buffer = [0u8; 4096];

    let body = loop {
        let read = match stream.read(&mut buffer).await {
            Ok(0) | Err(_) => return,
            Ok(read) => read,
        };
        request.extend_from_slice(buffer.get(..read).unwrap_or_default());

        if let Some(body) = request_body(&request) {
            break body;
        }
    };

    let id = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|request| request.get("id").cloned())
        .unwrap_or(Value::Null);
    let body = json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": format!("{block_number:#x}"),
    })
    .to_string();

    let response = format!(
        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

/// Returns the body of an HTTP request once it has been fully received.
fn request_body(request: &[u8]) -> Option<&[u8]> {
    let header_end = request.windows(4).position(|window| window == b"\r\n\r\n")? + 4;
    let headers = std::str::from_utf8(request.get(..header_end)?).ok()?;
    let content_length = headers.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if name.eq_ignore_ascii_case("content-length") {
            value.trim().parse::<usize>().ok()
        } else {
            None
        }
    })?;

    request.get(header_end..header_end + content_length)
}
