//! Structural validation
//!
//! A record failing any check here is malformed or out of order and is
//! rejected outright; the oracle state is left untouched.

use crate::error::{OracleError, OracleResult};
use shared_types::{Amount, BlockNumber, OracleRecord};

/// Deposit and validator counters read from the local staking ledger
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExternalCounters {
    /// Total value ever sent to the remote chain as validator deposits
    pub total_deposited: Amount,
    /// Number of validators ever initiated
    pub num_initiated_validators: u64,
}

/// Check that `new` can follow `prev` and is consistent with the local
/// counters.
pub fn validate_update(
    prev: &OracleRecord,
    new: &OracleRecord,
    counters: &ExternalCounters,
) -> OracleResult<()> {
    if new.update_end_block <= new.update_start_block {
        return Err(OracleError::InvalidWindow {
            start: new.update_start_block,
            end: new.update_end_block,
        });
    }

    let expected_start = prev.update_end_block.saturating_add(1);
    if new.update_start_block != expected_start {
        return Err(OracleError::InvalidStartBlock {
            expected: expected_start,
            actual: new.update_start_block,
        });
    }

    if new.cumulative_processed_deposit_amount > counters.total_deposited {
        return Err(OracleError::MoreDepositsProcessedThanSent {
            processed: new.cumulative_processed_deposit_amount,
            sent: counters.total_deposited,
        });
    }

    let reported = new.total_validators();
    if reported > counters.num_initiated_validators {
        return Err(OracleError::MoreValidatorsThanInitiated {
            reported,
            initiated: counters.num_initiated_validators,
        });
    }

    Ok(())
}

/// Reject windows whose end block is not yet behind the finality horizon.
pub fn check_window_final(
    record: &OracleRecord,
    finalization_block_delta: u64,
    current_height: BlockNumber,
) -> OracleResult<()> {
    let finalizing_block = record
        .update_end_block
        .saturating_add(finalization_block_delta);
    if current_height < finalizing_block {
        return Err(OracleError::WindowNotFinal {
            finalizing_block,
            current_height,
        });
    }
    Ok(())
}
