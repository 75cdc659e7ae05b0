use url::Url;

use crate::Config;

/// The port `anvil` listens on when [`Config::port`] is unset.
pub const DEFAULT_PORT: u16 = 8545;

/// The host used to reach the node when [`Config::host`] is unset or binds
/// to all interfaces.
pub const DEFAULT_HOST: &str = "localhost";

/// The endpoints a node started with a [`Config`] is reachable at.
///
/// Both URLs are normalized with an empty path, so they render with a
/// trailing slash, e.g. `http://localhost:8545/`. Use
/// [`Url::origin`](url::Url::origin) for the bare `scheme://host:port` form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    /// `http://<host>:<port>`
    pub http: Url,
    /// `ws://<host>:<port>`
    pub ws: Url,
}

impl Endpoints {
    /// The endpoint the harness connects to. A fork URL using a `ws` scheme
    /// selects the WebSocket endpoint, anything else selects HTTP.
    pub fn rpc_url(&self, config: &Config) -> &Url {
        if config.uses_websocket() {
            &self.ws
        } else {
            &self.http
        }
    }
}

impl Config {
    /// The port the node listens on.
    pub fn port_or_default(&self) -> u16 {
        if self.port == 0 {
            DEFAULT_PORT
        } else {
            self.port
        }
    }

    /// Whether the harness connects to the node over WebSocket.
    pub fn uses_websocket(&self) -> bool {
        self.fork_url.starts_with("ws")
    }

    /// Computes the HTTP and WebSocket endpoints of the node.
    pub fn endpoints(&self) -> Result<Endpoints, url::ParseError> {
        let host = match self.host.as_str() {
            "" | "0.0.0.0" | "::" | "[::]" => DEFAULT_HOST,
            host => host,
        };
        // IPv6 literals need brackets inside a URL authority
        let authority = if host.contains(':') && !host.starts_with('[') {
            format!("[{host}]:{}", self.port_or_default())
        } else {
            format!("{host}:{}", self.port_or_default())
        };

        Ok(Endpoints {
            http: Url::parse(&format!("http://{authority}"))?,
            ws: Url::parse(&format!("ws://{authority}"))?,
        })
    }
}
