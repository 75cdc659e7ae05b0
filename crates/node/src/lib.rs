//! Launches and supervises a local Anvil development node.
//!
//! [`AnvilInstance::spawn`] starts the `anvil` binary with the command line
//! derived from a [`Config`], waits until it serves JSON-RPC and hands out
//! typed access to its methods.

mod connection;
mod error;
mod instance;
mod process;
mod readiness;

pub use anvil_config::{Config, ReadinessPolicy};
pub use anvil_rpc::{AnvilRpcClient, RpcClientError};

pub use self::{
    connection::Connection,
    error::{ShutdownError, StartupError},
    instance::AnvilInstance,
};
