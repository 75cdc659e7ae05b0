//! The accounts `anvil` derives from its default mnemonic.

use alloy_primitives::{Address, B256, address, b256};

/// The mnemonic `anvil` uses when none is configured.
pub const DEFAULT_MNEMONIC: &str = "test test test test test test test test test test test junk";

/// Balance of every default account in wei: 10,000 ETH.
pub const DEFAULT_BALANCE_WEI: u128 = 10_000 * 10u128.pow(18);

/// Account #0
pub const ACCOUNT_0: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
/// Private key of [`ACCOUNT_0`]
pub const ACCOUNT_0_SECRET_KEY: B256 =
    b256!("ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80");

/// Account #1
pub const ACCOUNT_1: Address = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");
/// Private key of [`ACCOUNT_1`]
pub const ACCOUNT_1_SECRET_KEY: B256 =
    b256!("59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d");

/// Account #2
pub const ACCOUNT_2: Address = address!("3C44CdDdB6a900fa2b585dd299e03d12FA4293BC");
/// Private key of [`ACCOUNT_2`]
pub const ACCOUNT_2_SECRET_KEY: B256 =
    b256!("5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a");
