//! Encoding of JSON-RPC quantities: `0x`-prefixed lowercase hexadecimal
//! without leading zeros.

use alloy_primitives::U256;

/// Encodes an unsigned integer as a quantity.
pub fn from_u64(value: u64) -> String {
    format!("{value:#x}")
}

/// Encodes a big number as a quantity.
pub fn from_u256(value: U256) -> String {
    format!("0x{value:x}")
}

/// Encodes an optional big number as a quantity. An absent value encodes as
/// `0x0`.
pub fn from_optional_u256(value: Option<U256>) -> String {
    from_u256(value.unwrap_or_default())
}
