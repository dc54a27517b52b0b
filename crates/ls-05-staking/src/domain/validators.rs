//! Validator initiation bookkeeping

use crate::error::{StakingError, StakingResult};
use serde::{Deserialize, Serialize};
use shared_types::Amount;
use std::collections::HashSet;

/// One validator to fund on the remote chain
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorDeposit {
    pub pubkey: Vec<u8>,
    pub amount: Amount,
}

/// Public keys of every validator ever initiated
#[derive(Debug, Default)]
pub struct ValidatorSet {
    used: HashSet<Vec<u8>>,
}

impl ValidatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, pubkey: &[u8]) -> bool {
        self.used.contains(pubkey)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Check a batch against the deposit bounds and against every key seen
    /// so far, including earlier keys in the same batch. Returns the total.
    pub fn check_batch(
        &self,
        deposits: &[ValidatorDeposit],
        minimum: Amount,
        maximum: Amount,
    ) -> StakingResult<Amount> {
        let mut seen: HashSet<&[u8]> = HashSet::with_capacity(deposits.len());
        let mut total: Amount = 0;
        for deposit in deposits {
            if deposit.amount < minimum || deposit.amount > maximum {
                return Err(StakingError::InvalidDepositAmount {
                    amount: deposit.amount,
                    minimum,
                    maximum,
                });
            }
            if self.contains(&deposit.pubkey) || !seen.insert(deposit.pubkey.as_slice()) {
                return Err(StakingError::PreviouslyUsedValidator {
                    pubkey: hex::encode(&deposit.pubkey),
                });
            }
            total = total.saturating_add(deposit.amount);
        }
        Ok(total)
    }

    pub fn insert_batch(&mut self, deposits: &[ValidatorDeposit]) {
        self.used
            .extend(deposits.iter().map(|deposit| deposit.pubkey.clone()));
    }
}
