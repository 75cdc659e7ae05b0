use std::{
    ops::{ControlFlow, Deref},
    process::ExitStatus,
    sync::Arc,
};

use anvil_config::{Config, Endpoints};
use anvil_rpc::AnvilRpcClient;
use anvil_rpc_client::{RpcClient, RpcClientError};
use tokio::process::Child;
use url::Url;

use crate::{ShutdownError, StartupError, connection::Connection, process, readiness};

/// A running Anvil node.
///
/// Dereferences to the [`AnvilRpcClient`] forwarding to the node's HTTP
/// endpoint. The node keeps running when the instance is dropped; call
/// [`AnvilInstance::stop`] to terminate it.
#[derive(Debug)]
pub struct AnvilInstance {
    config: Config,
    endpoints: Endpoints,
    child: Child,
    forwarder: AnvilRpcClient,
    connection: Connection,
    stopped: bool,
}

impl AnvilInstance {
    /// Launches a node with the default configuration.
    pub async fn spawn_default() -> Result<Self, StartupError> {
        Self::spawn(Config::default()).await
    }

    /// Launches a node and waits until it answers `eth_blockNumber`.
    ///
    /// On failure, the launched process is signalled to exit.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
    pub async fn spawn(config: Config) -> Result<Self, StartupError> {
        let endpoints = config.endpoints().map_err(RpcClientError::from)?;
        let mut child = process::spawn(&config)?;

        match connect(&config, &endpoints, &mut child).await {
            Ok((forwarder, connection)) => Ok(Self {
                config,
                endpoints,
                child,
                forwarder,
                connection,
                stopped: false,
            }),
            Err(error) => {
                log::error!("Failed to start node, shutting down: {error}");
                if let Err(shutdown_error) = process::terminate(&mut child) {
                    log::warn!("{shutdown_error}");
                }
                Err(error)
            }
        }
    }

    /// The configuration the node was launched with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The node's HTTP endpoint. Renders as `http://<host>:<port>/`.
    pub fn http_url(&self) -> &Url {
        &self.endpoints.http
    }

    /// The node's WebSocket endpoint. Renders as `ws://<host>:<port>/`.
    pub fn ws_url(&self) -> &Url {
        &self.endpoints.ws
    }

    /// The general-purpose connection used to wait for readiness.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// The OS id of the node process, if it has not been reaped.
    pub fn pid(&self) -> Option<u32> {
        self.child.id()
    }

    /// Signals the node to exit and closes its RPC clients. Does not wait for
    /// the process to exit. Stopping a stopped node is a no-op.
    ///
    /// After a successful stop, every call fails with
    /// [`RpcClientError::Closed`].
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
    pub async fn stop(&mut self) -> Result<(), ShutdownError> {
        if self.stopped {
            return Ok(());
        }

        process::terminate(&mut self.child)?;
        self.stopped = true;

        self.forwarder.close();
        self.connection.close().await;

        Ok(())
    }

    /// Waits for the node process to exit.
    pub async fn wait(&mut self) -> std::io::Result<ExitStatus> {
        self.child.wait().await
    }
}

impl Deref for AnvilInstance {
    type Target = AnvilRpcClient;

    fn deref(&self) -> &Self::Target {
        &self.forwarder
    }
}

async fn connect(
    config: &Config,
    endpoints: &Endpoints,
    child: &mut Child,
) -> Result<(AnvilRpcClient, Connection), StartupError> {
    let http = Arc::new(RpcClient::new(endpoints.http.as_str())?);
    let connection = Connection::open(config, endpoints, &http)?;
    log::debug!("Waiting for node at {}", connection.url());

    let connection_ref = &connection;
    let block_number = readiness::poll_until_ready(&config.readiness, move |attempt| {
        let status = child.try_wait();
        async move {
            match status {
                Ok(Some(status)) => return Err(StartupError::ProcessExited { status }),
                Ok(None) => {}
                Err(error) => log::warn!("Failed to query node process status: {error}"),
            }

            match connection_ref.block_number().await {
                Ok(block_number) => Ok(ControlFlow::Break(block_number)),
                Err(error) => {
                    log::trace!("Readiness attempt {attempt} failed: {error}");
                    Ok(ControlFlow::Continue(()))
                }
            }
        }
    })
    .await?;

    log::debug!("Node ready at block {block_number}");
    Ok((AnvilRpcClient::with_client(http), connection))
}
