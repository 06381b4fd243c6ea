//! Chain-specific decoding bounds
//!
//! Decoders that depend on altchain parameters receive a `CodecConfig`
//! explicitly. Defaults match the protocol limits; a TOML document may
//! tighten them.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{CodecError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Minimum altchain hash width in bytes
    pub alt_hash_min: usize,
    /// Maximum altchain hash width in bytes
    pub alt_hash_max: usize,
    pub max_context_vbk_blocks: usize,
    pub max_vtbs: usize,
    pub max_atvs: usize,
    /// Bitcoin context blocks per VbkPopTx
    pub max_btc_context: usize,
    pub max_payouts: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            alt_hash_min: MIN_ALT_HASH_SIZE,
            alt_hash_max: MAX_ALT_HASH_SIZE,
            max_context_vbk_blocks: MAX_POPDATA_VBK,
            max_vtbs: MAX_POPDATA_VTB,
            max_atvs: MAX_POPDATA_ATV,
            max_btc_context: MAX_BTC_CONTEXT,
            max_payouts: MAX_PAYOUT,
        }
    }
}

impl CodecConfig {
    /// Parse a TOML document; absent keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: CodecConfig =
            toml::from_str(raw).map_err(|e| CodecError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject inverted ranges and limits above the hard protocol constants.
    pub fn validate(&self) -> Result<()> {
        if self.alt_hash_min > self.alt_hash_max {
            return Err(CodecError::Config(format!(
                "alt_hash_min {} exceeds alt_hash_max {}",
                self.alt_hash_min, self.alt_hash_max
            )));
        }
        let limits = [
            ("alt_hash_max", self.alt_hash_max, MAX_ALT_HASH_SIZE),
            ("max_context_vbk_blocks", self.max_context_vbk_blocks, MAX_POPDATA_VBK),
            ("max_vtbs", self.max_vtbs, MAX_POPDATA_VTB),
            ("max_atvs", self.max_atvs, MAX_POPDATA_ATV),
            ("max_btc_context", self.max_btc_context, MAX_BTC_CONTEXT),
            ("max_payouts", self.max_payouts, MAX_PAYOUT),
        ];
        for (name, value, limit) in limits {
            if value > limit {
                return Err(CodecError::Config(format!(
                    "{name} {value} exceeds protocol limit {limit}"
                )));
            }
        }
        Ok(())
    }
}
