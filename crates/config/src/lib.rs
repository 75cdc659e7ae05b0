#![warn(missing_docs)]

//! Configuration for launching an Anvil development node.
//!
//! Every field of [`Config`] maps to at most one command-line flag of the
//! `anvil` binary. A field holding its zero or empty value is omitted from the
//! command line, leaving the default up to `anvil` itself.

mod args;
mod endpoints;
mod readiness;

use std::path::{Path, PathBuf};

pub use self::{
    endpoints::{Endpoints, DEFAULT_HOST, DEFAULT_PORT},
    readiness::ReadinessPolicy,
};

/// Name of the node binary, resolved through `PATH`.
pub const DEFAULT_PROGRAM: &str = "anvil";

/// An error that occurs while loading a [`Config`] from a file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration file '{}': {source}", path.display())]
    Io {
        /// Path of the configuration file
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML or contains unknown values.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

/// Configures how the Anvil process is started.
///
/// Reference: <https://getfoundry.sh/anvil/reference/>
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Number of dev accounts to generate and configure.
    ///
    /// CLI: `--accounts`
    pub accounts: u64,
    /// Block time in seconds for interval mining.
    ///
    /// CLI: `--block-time`
    pub block_time: u64,
    /// The balance of every dev account in Ether.
    ///
    /// CLI: `--balance`
    pub balance: String,
    /// Writes output of `anvil` as JSON to the provided file.
    ///
    /// CLI: `--config-out`
    pub config_out: String,
    /// Derivation path of the child key to be derived.
    ///
    /// CLI: `--derivation-path`
    pub derivation_path: String,
    /// Dump the state and block environment of the chain on exit to the given
    /// path. If the value is a directory, the state is written to
    /// `<value>/state.json`.
    ///
    /// CLI: `--dump-state`
    pub dump_state_path: String,
    /// EVM hardfork to use, e.g. `prague`, `cancun` or `latest`.
    ///
    /// CLI: `--hardfork`
    pub hardfork: String,
    /// Initialize the genesis block with the given `genesis.json` file.
    ///
    /// CLI: `--init`
    pub init_path: String,
    /// Launch an IPC server.
    ///
    /// CLI: `--ipc [<PATH>]`
    pub ipc: bool,
    /// Path of the IPC socket. Only used when [`Config::ipc`] is enabled;
    /// `anvil` falls back to `/tmp/anvil.ipc` when empty.
    pub ipc_path: String,
    /// Number of threads to use. Zero lets `anvil` use the number of logical
    /// cores.
    ///
    /// CLI: `--threads`
    pub threads: u64,
    /// Initialize the chain from a previously saved state snapshot.
    ///
    /// CLI: `--load-state`
    pub load_state_path: String,
    /// BIP39 mnemonic phrase used for generating accounts.
    ///
    /// Mutually exclusive with [`Config::mnemonic_random`] and
    /// [`Config::mnemonic_seed_unsafe`]; `anvil` rejects combinations.
    ///
    /// CLI: `--mnemonic`
    pub mnemonic: String,
    /// Max number of states to persist on disk.
    ///
    /// CLI: `--max-persisted-states`
    pub max_persisted_states: u64,
    /// Enable mixed mining.
    ///
    /// CLI: `--mixed-mining`
    pub mixed_mining: bool,
    /// Automatically generate a BIP39 mnemonic phrase and derive accounts
    /// from it.
    ///
    /// CLI: `--mnemonic-random [<WORDS>]`
    pub mnemonic_random: bool,
    /// Number of words of the random mnemonic. Only used when
    /// [`Config::mnemonic_random`] is enabled.
    pub mnemonic_random_words: u64,
    /// Generate a BIP39 mnemonic phrase from the given seed. Never use the
    /// resulting keys outside of testing.
    ///
    /// CLI: `--mnemonic-seed-unsafe`
    pub mnemonic_seed_unsafe: String,
    /// Disable auto and interval mining, and mine on demand instead.
    ///
    /// CLI: `--no-mining`
    pub no_mining: bool,
    /// The number of the genesis block.
    ///
    /// CLI: `--number`
    pub number: u64,
    /// How transactions are sorted in the mempool, e.g. `fees` or `fifo`.
    ///
    /// CLI: `--order`
    pub order: String,
    /// Port number to listen on.
    ///
    /// CLI: `--port`
    pub port: u16,
    /// Preserve historical state snapshots when dumping the state.
    ///
    /// CLI: `--preserve-historical-states`
    pub preserve_historical_states: bool,
    /// Don't keep full chain history.
    ///
    /// CLI: `--prune-history [<STATES>]`
    pub prune_history: bool,
    /// Maximum number of states to keep in memory. Only used when
    /// [`Config::prune_history`] is enabled.
    pub prune_history_states: u64,
    /// Interval in seconds at which the state and block environment is
    /// dumped to disk.
    ///
    /// CLI: `--state-interval`
    pub state_interval: u64,
    /// Slots in an epoch.
    ///
    /// CLI: `--slots-in-an-epoch`
    pub slots_in_epoch: u64,
    /// Alias for both `--load-state` and `--dump-state`.
    ///
    /// CLI: `--state`
    pub state_path: String,
    /// Timestamp of the genesis block.
    ///
    /// CLI: `--timestamp`
    pub timestamp: u64,
    /// Number of blocks with transactions to keep in memory.
    ///
    /// CLI: `--transaction-block-keeper`
    pub transaction_block_keeper: u64,
    /// Log color mode: `auto`, `always` or `never`.
    ///
    /// CLI: `--color`
    pub color: String,
    /// Format log messages as JSON.
    ///
    /// CLI: `--json`
    pub json_logs: bool,
    /// Format log messages as Markdown.
    ///
    /// CLI: `--md`
    pub markdown_logs: bool,
    /// Do not print log messages.
    ///
    /// CLI: `--quiet`
    pub quiet: bool,
    /// Verbosity level of log messages, passed as a repeated `-v`.
    ///
    /// CLI: `-v...`
    pub verbosity: u8,
    /// CORS `allow_origin` header.
    ///
    /// CLI: `--allow-origin`
    pub allow_origin: String,
    /// Path to the cache directory where states are stored.
    ///
    /// CLI: `--cache-path`
    pub cache_path: String,
    /// Host the server will listen on.
    ///
    /// CLI: `--host`
    pub host: String,
    /// Disable CORS.
    ///
    /// CLI: `--no-cors`
    pub no_cors: bool,
    /// Disable the default request body size limit.
    ///
    /// CLI: `--no-request-size-limit`
    pub no_request_size_limit: bool,
    /// Number of assumed available compute units per second for the fork
    /// provider.
    ///
    /// CLI: `--compute-units-per-second`
    pub compute_units_per_second: u64,
    /// Fetch state over a remote endpoint instead of starting from an empty
    /// state. A `ws` URL makes the harness connect over WebSocket as well.
    ///
    /// CLI: `--fork-url`
    pub fork_url: String,
    /// Fetch state from a specific block number of the remote endpoint. A
    /// negative value is subtracted from the latest block.
    ///
    /// CLI: `--fork-block-number`
    pub fork_block_number: i64,
    /// Chain ID of the remote endpoint, skips fetching it.
    ///
    /// CLI: `--fork-chain-id`
    pub fork_chain_id: u64,
    /// Headers for the fork RPC client, e.g. `User-Agent: test-agent`. Each
    /// header is passed as a separate `--fork-header` flag.
    ///
    /// CLI: `--fork-header`
    pub fork_headers: Vec<String>,
    /// Initial retry backoff on encountering errors, in milliseconds.
    ///
    /// CLI: `--fork-retry-backoff`
    pub fork_retry_backoff: String,
    /// Fetch state from after a specific transaction hash has been applied.
    ///
    /// CLI: `--fork-transaction-hash`
    pub fork_transaction_hash: String,
    /// Disable rate limiting for the fork provider.
    ///
    /// CLI: `--no-rate-limit`
    pub no_rate_limit: bool,
    /// Explicitly disable the use of RPC caching.
    ///
    /// CLI: `--no-storage-caching`
    pub no_storage_caching: bool,
    /// Number of retry requests for spurious networks.
    ///
    /// CLI: `--retries`
    pub retries: u64,
    /// Timeout in milliseconds for requests sent to the remote endpoint.
    ///
    /// CLI: `--timeout`
    pub timeout: String,
    /// The base fee in a block.
    ///
    /// CLI: `--block-base-fee-per-gas`
    pub block_base_fee_per_gas: String,
    /// The chain ID.
    ///
    /// CLI: `--chain-id`
    pub chain_id: u64,
    /// EIP-170 contract code size limit in bytes, passed in hexadecimal.
    ///
    /// CLI: `--code-size-limit`
    pub code_size_limit: u64,
    /// Disable the `call.gas_limit <= block.gas_limit` constraint.
    ///
    /// CLI: `--disable-block-gas-limit`
    pub disable_block_gas_limit: bool,
    /// Disable the EIP-170 code size limit.
    ///
    /// CLI: `--disable-code-size-limit`
    pub disable_code_size_limit: bool,
    /// Disable the enforcement of a minimum suggested priority fee.
    ///
    /// CLI: `--disable-min-priority-fee`
    pub disable_min_priority_fee: bool,
    /// The block gas limit.
    ///
    /// CLI: `--gas-limit`
    pub gas_limit: u64,
    /// The gas price.
    ///
    /// CLI: `--gas-price`
    pub gas_price: String,
    /// Enable autoImpersonate on startup.
    ///
    /// CLI: `--auto-impersonate`
    pub auto_impersonate: bool,
    /// Disable printing of `console.log` invocations to stdout.
    ///
    /// CLI: `--disable-console-log`
    pub disable_console_log: bool,
    /// Disable the default CREATE2 deployer.
    ///
    /// CLI: `--disable-default-create2-deployer`
    pub disable_default_create2_deployer: bool,
    /// Disable pool balance checks.
    ///
    /// CLI: `--disable-pool-balance-checks`
    pub disable_pool_balance_checks: bool,
    /// The memory limit per EVM execution in bytes.
    ///
    /// CLI: `--memory-limit`
    pub memory_limit: u64,
    /// Enable printing of traces for executed transactions and `eth_call`.
    ///
    /// CLI: `--print-traces`
    pub print_traces: bool,
    /// Enable steps tracing used for debug calls returning geth-style traces.
    ///
    /// CLI: `--steps-tracing`
    pub steps_tracing: bool,
    /// Enable Celo network features.
    ///
    /// CLI: `--celo`
    pub celo: bool,
    /// Enable Optimism network features.
    ///
    /// CLI: `--optimism`
    pub optimism: bool,

    /// Forward the node's stdout and stderr to the current process instead of
    /// discarding them.
    pub show_logs: bool,
    /// Path of the node binary. Defaults to [`DEFAULT_PROGRAM`] on `PATH`.
    pub program: Option<PathBuf>,
    /// How long to wait for the node to become reachable.
    pub readiness: ReadinessPolicy,
}

impl Config {
    /// Parses a configuration from a TOML string. Missing keys keep their
    /// zero value.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(ConfigError::from)
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&contents)
    }

    /// The node binary to launch.
    pub fn program(&self) -> &Path {
        self.program
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_PROGRAM))
    }

    /// Enables the IPC server at the provided path.
    pub fn with_ipc(mut self, path: impl Into<String>) -> Self {
        self.ipc = true;
        self.ipc_path = path.into();
        self
    }

    /// Appends a header to the fork RPC client's headers.
    pub fn add_fork_header(mut self, header: impl Into<String>) -> Self {
        self.fork_headers.push(header.into());
        self
    }

    /// Sets the path of the node binary.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = Some(program.into());
        self
    }
}

/// Generates chained setters, one per field.
macro_rules! setters {
    (values { $($value_field:ident: $value_ty:ty),* $(,)? } strings { $($string_field:ident),* $(,)? }) => {
        impl Config {
            $(
                #[doc = concat!("Sets [`Config::", stringify!($value_field), "`].")]
                pub fn $value_field(mut self, $value_field: $value_ty) -> Self {
                    self.$value_field = $value_field;
                    self
                }
            )*
            $(
                #[doc = concat!("Sets [`Config::", stringify!($string_field), "`].")]
                pub fn $string_field(mut self, $string_field: impl Into<String>) -> Self {
                    self.$string_field = $string_field.into();
                    self
                }
            )*
        }
    };
}

setters! {
    values {
        accounts: u64,
        block_time: u64,
        ipc: bool,
        threads: u64,
        max_persisted_states: u64,
        mixed_mining: bool,
        mnemonic_random: bool,
        mnemonic_random_words: u64,
        no_mining: bool,
        number: u64,
        port: u16,
        preserve_historical_states: bool,
        prune_history: bool,
        prune_history_states: u64,
        state_interval: u64,
        slots_in_epoch: u64,
        timestamp: u64,
        transaction_block_keeper: u64,
        json_logs: bool,
        markdown_logs: bool,
        quiet: bool,
        verbosity: u8,
        no_cors: bool,
        no_request_size_limit: bool,
        compute_units_per_second: u64,
        fork_block_number: i64,
        fork_chain_id: u64,
        fork_headers: Vec<String>,
        no_rate_limit: bool,
        no_storage_caching: bool,
        retries: u64,
        chain_id: u64,
        code_size_limit: u64,
        disable_block_gas_limit: bool,
        disable_code_size_limit: bool,
        disable_min_priority_fee: bool,
        gas_limit: u64,
        auto_impersonate: bool,
        disable_console_log: bool,
        disable_default_create2_deployer: bool,
        disable_pool_balance_checks: bool,
        memory_limit: u64,
        print_traces: bool,
        steps_tracing: bool,
        celo: bool,
        optimism: bool,
        show_logs: bool,
        readiness: ReadinessPolicy,
    }
    strings {
        balance,
        config_out,
        derivation_path,
        dump_state_path,
        hardfork,
        init_path,
        ipc_path,
        load_state_path,
        mnemonic,
        mnemonic_seed_unsafe,
        order,
        state_path,
        color,
        allow_origin,
        cache_path,
        host,
        fork_url,
        fork_retry_backoff,
        fork_transaction_hash,
        timeout,
        block_base_fee_per_gas,
        gas_price,
    }
}
