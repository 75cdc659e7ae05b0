use crate::Config;

/// A value whose zero or empty state means "omit the flag".
trait IsUnset {
    fn is_unset(&self) -> bool;
}

macro_rules! impl_is_unset_for_int {
    ($($ty:ty),*) => {
        $(
            impl IsUnset for $ty {
                fn is_unset(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_is_unset_for_int!(u8, u16, u64, i64);

impl IsUnset for String {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

#[derive(Default)]
struct ArgsBuilder {
    args: Vec<String>,
}

impl ArgsBuilder {
    /// `<flag> <value>` when the value is set.
    fn value<T: IsUnset + ToString>(&mut self, flag: &str, value: &T) -> &mut Self {
        if !value.is_unset() {
            self.args.push(flag.to_string());
            self.args.push(value.to_string());
        }
        self
    }

    /// `<flag> 0x<value>` when the value is set.
    fn hex_value(&mut self, flag: &str, value: u64) -> &mut Self {
        if value != 0 {
            self.args.push(flag.to_string());
            self.args.push(format!("{value:#x}"));
        }
        self
    }

    /// `<flag>` when enabled.
    fn switch(&mut self, flag: &str, enabled: bool) -> &mut Self {
        if enabled {
            self.args.push(flag.to_string());
        }
        self
    }

    /// `<flag> [<value>]` when enabled; the value is only emitted when set.
    fn optional_value<T: IsUnset + ToString>(
        &mut self,
        flag: &str,
        enabled: bool,
        value: &T,
    ) -> &mut Self {
        if enabled {
            self.args.push(flag.to_string());
            if !value.is_unset() {
                self.args.push(value.to_string());
            }
        }
        self
    }

    /// `<flag> <value>` once per entry.
    fn repeated(&mut self, flag: &str, values: &[String]) -> &mut Self {
        for value in values.iter().filter(|value| !value.is_empty()) {
            self.args.push(flag.to_string());
            self.args.push(value.clone());
        }
        self
    }

    /// A single `-vvv` token.
    fn verbosity(&mut self, level: u8) -> &mut Self {
        if level > 0 {
            self.args.push(format!("-{}", "v".repeat(usize::from(level))));
        }
        self
    }

    fn build(&mut self) -> Vec<String> {
        std::mem::take(&mut self.args)
    }
}

impl Config {
    /// Translates the configuration into the `anvil` command line, excluding
    /// the program name.
    ///
    /// Flags are emitted in a fixed order. Fields holding their zero or empty
    /// value produce no tokens.
    pub fn args(&self) -> Vec<String> {
        ArgsBuilder::default()
            .value("--accounts", &self.accounts)
            .value("--block-time", &self.block_time)
            .value("--balance", &self.balance)
            .value("--config-out", &self.config_out)
            .value("--derivation-path", &self.derivation_path)
            .value("--dump-state", &self.dump_state_path)
            .value("--hardfork", &self.hardfork)
            .value("--init", &self.init_path)
            .optional_value("--ipc", self.ipc, &self.ipc_path)
            .value("--threads", &self.threads)
            .value("--load-state", &self.load_state_path)
            .value("--mnemonic", &self.mnemonic)
            .value("--max-persisted-states", &self.max_persisted_states)
            .switch("--mixed-mining", self.mixed_mining)
            .optional_value(
                "--mnemonic-random",
                self.mnemonic_random,
                &self.mnemonic_random_words,
            )
            .value("--mnemonic-seed-unsafe", &self.mnemonic_seed_unsafe)
            .switch("--no-mining", self.no_mining)
            .value("--number", &self.number)
            .value("--order", &self.order)
            .value("--port", &self.port)
            .switch(
                "--preserve-historical-states",
                self.preserve_historical_states,
            )
            .optional_value(
                "--prune-history",
                self.prune_history,
                &self.prune_history_states,
            )
            .value("--state-interval", &self.state_interval)
            .value("--slots-in-an-epoch", &self.slots_in_epoch)
            .value("--state", &self.state_path)
            .value("--timestamp", &self.timestamp)
            .value("--transaction-block-keeper", &self.transaction_block_keeper)
            .value("--color", &self.color)
            .switch("--json", self.json_logs)
            .switch("--md", self.markdown_logs)
            .switch("--quiet", self.quiet)
            .verbosity(self.verbosity)
            .value("--allow-origin", &self.allow_origin)
            .value("--cache-path", &self.cache_path)
            .value("--host", &self.host)
            .switch("--no-cors", self.no_cors)
            .switch("--no-request-size-limit", self.no_request_size_limit)
            .value("--compute-units-per-second", &self.compute_units_per_second)
            .value("--fork-url", &self.fork_url)
            .value("--fork-block-number", &self.fork_block_number)
            .value("--fork-chain-id", &self.fork_chain_id)
            .repeated("--fork-header", &self.fork_headers)
            .value("--fork-retry-backoff", &self.fork_retry_backoff)
            .value("--fork-transaction-hash", &self.fork_transaction_hash)
            .switch("--no-rate-limit", self.no_rate_limit)
            .switch("--no-storage-caching", self.no_storage_caching)
            .value("--retries", &self.retries)
            .value("--timeout", &self.timeout)
            .value("--block-base-fee-per-gas", &self.block_base_fee_per_gas)
            .value("--chain-id", &self.chain_id)
            .hex_value("--code-size-limit", self.code_size_limit)
            .switch("--disable-block-gas-limit", self.disable_block_gas_limit)
            .switch("--disable-code-size-limit", self.disable_code_size_limit)
            .switch("--disable-min-priority-fee", self.disable_min_priority_fee)
            .value("--gas-limit", &self.gas_limit)
            .value("--gas-price", &self.gas_price)
            .switch("--auto-impersonate", self.auto_impersonate)
            .switch("--disable-console-log", self.disable_console_log)
            .switch(
                "--disable-default-create2-deployer",
                self.disable_default_create2_deployer,
            )
            .switch(
                "--disable-pool-balance-checks",
                self.disable_pool_balance_checks,
            )
            .value("--memory-limit", &self.memory_limit)
            .switch("--print-traces", self.print_traces)
            .switch("--steps-tracing", self.steps_tracing)
            .switch("--celo", self.celo)
            .switch("--optimism", self.optimism)
            .build()
    }
}
