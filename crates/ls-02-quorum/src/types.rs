//! Configuration for the Quorum subsystem

use crate::error::{QuorumError, QuorumResult};
use serde::{Deserialize, Serialize};
use shared_types::math::BASIS_POINTS_DENOMINATOR;

/// Quorum thresholds
///
/// Both must hold for a hash to reach quorum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuorumConfig {
    /// Minimum number of reporters agreeing on a hash
    pub absolute_threshold: u16,
    /// Minimum share of the reporter set agreeing on a hash, in basis points
    pub relative_threshold_bps: u16,
    /// Window length reporters are expected to target. Advisory only.
    pub target_report_window_blocks: u64,
}

impl Default for QuorumConfig {
    fn default() -> Self {
        Self {
            absolute_threshold: 1,
            relative_threshold_bps: 0,
            target_report_window_blocks: 2400,
        }
    }
}

impl QuorumConfig {
    pub fn validate(&self) -> QuorumResult<()> {
        validate_relative_threshold(self.relative_threshold_bps)?;
        validate_target_window(self.target_report_window_blocks)
    }
}

pub(crate) fn validate_relative_threshold(bps: u16) -> QuorumResult<()> {
    if u128::from(bps) > BASIS_POINTS_DENOMINATOR {
        return Err(QuorumError::config(format!(
            "relative threshold {} bps exceeds {}",
            bps, BASIS_POINTS_DENOMINATOR
        )));
    }
    Ok(())
}

pub(crate) fn validate_target_window(blocks: u64) -> QuorumResult<()> {
    if blocks == 0 {
        return Err(QuorumError::config("target report window must be non-zero"));
    }
    Ok(())
}
