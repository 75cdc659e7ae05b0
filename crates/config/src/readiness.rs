use std::time::Duration;

/// Bounds the number of `eth_blockNumber` attempts made while waiting for a
/// freshly started node to become reachable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ReadinessPolicy {
    /// Maximum number of attempts before giving up.
    pub max_attempts: u32,
    /// Pause between two consecutive attempts, in milliseconds when
    /// serialized.
    #[serde(with = "millis")]
    pub interval: Duration,
}

impl ReadinessPolicy {
    /// 1000 attempts, 100 ms apart.
    pub const DEFAULT: Self = Self {
        max_attempts: 1000,
        interval: Duration::from_millis(100),
    };
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(duration.as_millis()).map_err(serde::ser::Error::custom)?;
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
