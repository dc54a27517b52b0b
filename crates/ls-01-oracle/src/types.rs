use crate::error::{OracleError, OracleResult};
use serde::{Deserialize, Serialize};
use shared_types::math::{PPM_DENOMINATOR, PPT_DENOMINATOR};
use shared_types::{Amount, BlockNumber, ONE_ETHER};

/// Largest accepted finalization delta (blocks)
pub const FINALIZATION_BLOCK_DELTA_UPPER_BOUND: u64 = 2048;

/// Plausibility limits applied between consecutive records
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanityConfig {
    /// Shortest window accepted without review; shorter windows are too
    /// noisy for the per-block gain bounds to be meaningful
    pub min_report_size_blocks: u64,
    /// Lower bound on deposits per newly observed validator
    pub min_deposit_per_validator: Amount,
    /// Upper bound on deposits per newly observed validator
    pub max_deposit_per_validator: Amount,
    /// Largest tolerated loss over one window (parts per million)
    pub max_consensus_layer_loss_ppm: u128,
    /// Smallest expected gain per block (parts per trillion)
    pub min_consensus_layer_gain_per_block_ppt: u128,
    /// Largest plausible gain per block (parts per trillion)
    pub max_consensus_layer_gain_per_block_ppt: u128,
}

impl Default for SanityConfig {
    fn default() -> Self {
        Self {
            min_report_size_blocks: 100,
            min_deposit_per_validator: 32 * ONE_ETHER,
            max_deposit_per_validator: 32 * ONE_ETHER,
            max_consensus_layer_loss_ppm: 1_000,           // 0.1%
            min_consensus_layer_gain_per_block_ppt: 1_903, // ~0.1x expected APR
            max_consensus_layer_gain_per_block_ppt: 190_250, // ~10x expected APR
        }
    }
}

impl SanityConfig {
    /// Range-check every field. Nothing is applied when this fails.
    pub fn validate(&self) -> OracleResult<()> {
        if self.max_consensus_layer_loss_ppm > PPM_DENOMINATOR {
            return Err(OracleError::config("max loss must not exceed 1e6 ppm"));
        }
        if self.min_consensus_layer_gain_per_block_ppt > PPT_DENOMINATOR
            || self.max_consensus_layer_gain_per_block_ppt > PPT_DENOMINATOR
        {
            return Err(OracleError::config("gain per block must not exceed 1e12 ppt"));
        }
        if self.min_consensus_layer_gain_per_block_ppt > self.max_consensus_layer_gain_per_block_ppt {
            return Err(OracleError::config("min gain per block exceeds max gain per block"));
        }
        if self.min_deposit_per_validator > self.max_deposit_per_validator {
            return Err(OracleError::config("min deposit per validator exceeds max"));
        }
        Ok(())
    }
}

/// Oracle configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// End block of the bootstrap record
    pub initialization_block: BlockNumber,
    /// Blocks a window end must trail the current height by
    pub finalization_block_delta: u64,
    /// Sanity bounds
    pub sanity: SanityConfig,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            initialization_block: 0,
            finalization_block_delta: 64,
            sanity: SanityConfig::default(),
        }
    }
}

impl OracleConfig {
    pub fn validate(&self) -> OracleResult<()> {
        validate_finalization_delta(self.finalization_block_delta)?;
        self.sanity.validate()
    }
}

pub(crate) fn validate_finalization_delta(delta: u64) -> OracleResult<()> {
    if delta == 0 || delta > FINALIZATION_BLOCK_DELTA_UPPER_BOUND {
        return Err(OracleError::config(format!(
            "finalization delta {} outside 1..={}",
            delta, FINALIZATION_BLOCK_DELTA_UPPER_BOUND
        )));
    }
    Ok(())
}
