use std::{path::PathBuf, process::ExitStatus};

use anvil_rpc_client::RpcClientError;

/// An error that occurs while starting a node. A launched process has been
/// signalled to exit when it is returned.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The node binary could not be launched.
    #[error("Failed to launch '{}': {source}", program.display())]
    Spawn {
        /// The binary that was launched
        program: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },
    /// The RPC connection could not be set up.
    #[error(transparent)]
    Connection(#[from] RpcClientError),
    /// The node exited while waiting for it to become ready.
    #[error("Node exited before becoming ready: {status}")]
    ProcessExited {
        /// Exit status of the node process
        status: ExitStatus,
    },
    /// The node did not answer `eth_blockNumber` within the readiness budget.
    #[error("Node did not become ready in time after {attempts} attempts")]
    NotReady {
        /// The number of attempts made
        attempts: u32,
    },
}

/// An error that occurs while stopping a node.
#[derive(Debug, thiserror::Error)]
pub enum ShutdownError {
    /// The termination signal could not be delivered. The RPC connections
    /// remain open so that stopping can be retried.
    #[error("Failed to signal node process {pid}: {source}")]
    Signal {
        /// Id of the node process
        pid: u32,
        /// The underlying OS error
        source: std::io::Error,
    },
}
