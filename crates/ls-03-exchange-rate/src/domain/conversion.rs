//! Share/value conversion
//!
//! Both directions floor. Before any share exists the rate is 1:1.

use crate::error::{RateError, RateResult};
use shared_types::math::{mul_div, mul_div_wide, BASIS_POINTS_DENOMINATOR};
use shared_types::Amount;

/// Shares minted for `amount` of value
pub fn value_to_shares(
    amount: Amount,
    supply: Amount,
    total_controlled: Amount,
    adjustment_bps: u16,
) -> RateResult<Amount> {
    if supply == 0 {
        return Ok(amount);
    }
    if total_controlled == 0 {
        return Err(RateError::ZeroControlledValue { supply });
    }
    let kept_bps = BASIS_POINTS_DENOMINATOR.saturating_sub(u128::from(adjustment_bps));
    Ok(mul_div_wide(
        amount,
        supply,
        kept_bps,
        total_controlled,
        BASIS_POINTS_DENOMINATOR,
    ))
}

/// Value redeemable for `shares`
pub fn shares_to_value(shares: Amount, supply: Amount, total_controlled: Amount) -> RateResult<Amount> {
    if supply == 0 {
        return Ok(shares);
    }
    if total_controlled == 0 {
        return Err(RateError::ZeroControlledValue { supply });
    }
    Ok(mul_div(shares, total_controlled, supply))
}
