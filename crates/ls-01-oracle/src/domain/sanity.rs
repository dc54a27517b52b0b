//! Sanity bounds between consecutive records
//!
//! Pure function of the previous record, the candidate record and the
//! configured limits. A violation carries the offending value and the bound
//! it crossed so resolution tooling can diagnose it without re-deriving.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! ```text
//! window size ──→ validator counts ──→ deposits ──→ consensus-layer balance
//! ```

use crate::types::SanityConfig;
use serde::{Deserialize, Serialize};
use shared_types::math::{mul_div, PPM_DENOMINATOR, PPT_DENOMINATOR};
use shared_types::{Amount, OracleRecord};
use std::fmt;

/// Which bound a record crossed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    ReportTooSmall,
    WithdrawableValidatorsDecreased,
    TotalValidatorsDecreased,
    ProcessedDepositDecreased,
    DepositsBelowMinimum,
    DepositsAboveMaximum,
    BalanceBelowLowerBound,
    BalanceAboveUpperBound,
}

impl ViolationKind {
    /// Human-readable rejection reason
    pub fn reason(&self) -> &'static str {
        match self {
            ViolationKind::ReportTooSmall => "Report blocks below minimum bound",
            ViolationKind::WithdrawableValidatorsDecreased => {
                "Cumulative number of withdrawable validators decreased"
            }
            ViolationKind::TotalValidatorsDecreased => "Total number of validators decreased",
            ViolationKind::ProcessedDepositDecreased => "Processed deposit amount decreased",
            ViolationKind::DepositsBelowMinimum => "New deposits below min deposit per validator",
            ViolationKind::DepositsAboveMaximum => "New deposits above max deposit per validator",
            ViolationKind::BalanceBelowLowerBound => {
                "Consensus layer change below min gain or max loss"
            }
            ViolationKind::BalanceAboveUpperBound => "Consensus layer change above max gain",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// A failed sanity check
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanityViolation {
    pub kind: ViolationKind,
    /// The value that crossed the bound
    pub value: u128,
    /// The bound that was crossed
    pub bound: u128,
}

impl SanityViolation {
    fn new(kind: ViolationKind, value: u128, bound: u128) -> Self {
        Self { kind, value, bound }
    }

    pub fn reason(&self) -> &'static str {
        self.kind.reason()
    }
}

impl fmt::Display for SanityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (value {}, bound {})", self.kind, self.value, self.bound)
    }
}

/// Balance window implied by the previous record and the configured rates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BalanceBounds {
    /// Previous balance plus deposits processed during the window
    pub baseline: Amount,
    pub lower: Amount,
    pub upper: Amount,
}

/// Compute the tolerated range for `observed = balance + principal + reward`.
pub fn balance_bounds(
    prev: &OracleRecord,
    new: &OracleRecord,
    config: &SanityConfig,
) -> BalanceBounds {
    let new_deposits = new
        .cumulative_processed_deposit_amount
        .saturating_sub(prev.cumulative_processed_deposit_amount);
    let baseline = prev.current_total_validator_balance.saturating_add(new_deposits);
    let window = u128::from(new.window_size());

    let max_loss = mul_div(config.max_consensus_layer_loss_ppm, baseline, PPM_DENOMINATOR);
    let min_gain = mul_div(
        config.min_consensus_layer_gain_per_block_ppt.saturating_mul(window),
        baseline,
        PPT_DENOMINATOR,
    );
    let max_gain = mul_div(
        config.max_consensus_layer_gain_per_block_ppt.saturating_mul(window),
        baseline,
        PPT_DENOMINATOR,
    );

    BalanceBounds {
        baseline,
        lower: baseline.saturating_sub(max_loss).saturating_add(min_gain),
        upper: baseline.saturating_add(max_gain),
    }
}

/// Run every sanity check; `None` means the record may be committed.
pub fn sanity_check(
    prev: &OracleRecord,
    new: &OracleRecord,
    config: &SanityConfig,
) -> Option<SanityViolation> {
    let report_size = new.window_size();
    if report_size < config.min_report_size_blocks {
        return Some(SanityViolation::new(
            ViolationKind::ReportTooSmall,
            report_size.into(),
            config.min_report_size_blocks.into(),
        ));
    }

    if new.cumulative_num_validators_withdrawable < prev.cumulative_num_validators_withdrawable {
        return Some(SanityViolation::new(
            ViolationKind::WithdrawableValidatorsDecreased,
            new.cumulative_num_validators_withdrawable.into(),
            prev.cumulative_num_validators_withdrawable.into(),
        ));
    }

    let prev_validators = prev.total_validators();
    let new_validators_total = new.total_validators();
    if new_validators_total < prev_validators {
        return Some(SanityViolation::new(
            ViolationKind::TotalValidatorsDecreased,
            new_validators_total.into(),
            prev_validators.into(),
        ));
    }

    if new.cumulative_processed_deposit_amount < prev.cumulative_processed_deposit_amount {
        return Some(SanityViolation::new(
            ViolationKind::ProcessedDepositDecreased,
            new.cumulative_processed_deposit_amount,
            prev.cumulative_processed_deposit_amount,
        ));
    }

    let new_deposits =
        new.cumulative_processed_deposit_amount - prev.cumulative_processed_deposit_amount;
    let new_validators = u128::from(new_validators_total - prev_validators);

    let min_deposits = new_validators.saturating_mul(config.min_deposit_per_validator);
    if new_deposits < min_deposits {
        return Some(SanityViolation::new(
            ViolationKind::DepositsBelowMinimum,
            new_deposits,
            min_deposits,
        ));
    }

    let max_deposits = new_validators.saturating_mul(config.max_deposit_per_validator);
    if new_deposits > max_deposits {
        return Some(SanityViolation::new(
            ViolationKind::DepositsAboveMaximum,
            new_deposits,
            max_deposits,
        ));
    }

    let bounds = balance_bounds(prev, new, config);
    let observed = new
        .current_total_validator_balance
        .saturating_add(new.window_withdrawn_principal_amount)
        .saturating_add(new.window_withdrawn_reward_amount);

    if observed < bounds.lower {
        return Some(SanityViolation::new(
            ViolationKind::BalanceBelowLowerBound,
            observed,
            bounds.lower,
        ));
    }

    if observed > bounds.upper {
        return Some(SanityViolation::new(
            ViolationKind::BalanceAboveUpperBound,
            observed,
            bounds.upper,
        ));
    }

    None
}
