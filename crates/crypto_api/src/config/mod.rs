//! Range sampler configuration.

use crate::{CryptoError, CryptoResult};

/// Candidates at most this many bits wide skip the continuous self-test.
pub const DEFAULT_CONTINUITY_THRESHOLD_BITS: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RangeConfig {
    continuity_threshold_bits: u32,
    max_discards: Option<u64>,
}

impl Default for RangeConfig {
    fn default() -> Self {
        RangeConfig {
            continuity_threshold_bits: DEFAULT_CONTINUITY_THRESHOLD_BITS,
            max_discards: None,
        }
    }
}

impl RangeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from json, missing fields take their defaults.
    ///
    /// ```
    /// use strongrand_crypto_api::RangeConfig;
    ///
    /// let config = RangeConfig::from_json(r#"{ "max_discards": 4096 }"#).unwrap();
    /// assert_eq!(Some(4096), config.max_discards());
    /// assert_eq!(15, config.continuity_threshold_bits());
    /// ```
    pub fn from_json(json: &str) -> CryptoResult<Self> {
        serde_json::from_str(json).map_err(|e| CryptoError::Generic(format!("{}", e)))
    }

    pub fn with_continuity_threshold_bits(mut self, bits: u32) -> Self {
        self.continuity_threshold_bits = bits;
        self
    }

    /// Give up with `SourceUnavailable` after this many rejected candidates
    /// in one call. `None` keeps the loop unbounded.
    pub fn with_max_discards(mut self, max_discards: Option<u64>) -> Self {
        self.max_discards = max_discards;
        self
    }

    pub fn continuity_threshold_bits(&self) -> u32 {
        self.continuity_threshold_bits
    }

    pub fn max_discards(&self) -> Option<u64> {
        self.max_discards
    }
}
