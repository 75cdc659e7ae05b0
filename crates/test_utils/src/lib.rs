//! Helpers shared by the tests of the workspace crates

pub mod accounts;
pub mod env;
pub mod net;
#[cfg(unix)]
pub mod process;
pub mod rpc;
mod tracing;

pub use self::tracing::init_tracing_for_tests;
