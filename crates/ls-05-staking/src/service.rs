//! Staking Service - Core business logic
//!
//! Mutations are serialized by `op_lock`. The shared ledger is locked only
//! for single reads and writes, never across a call into the token, the
//! rate engine or the redemption queue: the queue calls back into the
//! ledger when it hands surplus back.

use crate::adapters::PauseSwitch;
use crate::domain::{LedgerBalances, ValidatorDeposit};
use crate::error::{StakingError, StakingResult};
use crate::events::StakingEvent;
use crate::ledger::StakingLedger;
use crate::metrics;
use crate::ports::inbound::StakingApi;
use crate::ports::outbound::ShareToken;
use crate::types::{validate_deposit_bounds, StakingConfig};
use ls_03_exchange_rate::{ControlledValueBreakdown, ExchangeRateApi};
use ls_04_redemption_queue::{QueueAccessHandler, RedemptionQueueApi, RequestId, UnstakeRequest};
use parking_lot::{Mutex, RwLock};
use shared_types::{Address, Amount};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Accounts the service acts as
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StakingAccounts {
    /// Holds `Role::StakingContract` on the redemption queue
    pub contract: Address,
    /// Where unstaked shares wait until claimed or cancelled
    pub queue_escrow: Address,
}

pub struct StakingService<T, Q, E>
where
    T: ShareToken,
    Q: RedemptionQueueApi,
    E: ExchangeRateApi,
{
    config: RwLock<StakingConfig>,
    op_lock: Mutex<()>,
    accounts: StakingAccounts,
    ledger: Arc<StakingLedger>,
    token: Arc<T>,
    queue: Arc<QueueAccessHandler<Q>>,
    rate: Arc<E>,
    pause: Arc<PauseSwitch>,
}

impl<T, Q, E> StakingService<T, Q, E>
where
    T: ShareToken,
    Q: RedemptionQueueApi,
    E: ExchangeRateApi,
{
    pub fn new(
        config: StakingConfig,
        accounts: StakingAccounts,
        ledger: Arc<StakingLedger>,
        token: Arc<T>,
        queue: Arc<QueueAccessHandler<Q>>,
        rate: Arc<E>,
        pause: Arc<PauseSwitch>,
    ) -> StakingResult<Self> {
        config.validate()?;
        info!(
            minimum_stake_bound = config.minimum_stake_bound,
            maximum_share_supply = config.maximum_share_supply,
            contract = %hex::encode(accounts.contract),
            "[ls-05] staking service initialized"
        );
        Ok(Self {
            config: RwLock::new(config),
            op_lock: Mutex::new(()),
            accounts,
            ledger,
            token,
            queue,
            rate,
            pause,
        })
    }

    /// Take and clear buffered events, including those raised by the
    /// oracle and the queue through the shared ledger
    pub fn take_events(&self) -> Vec<StakingEvent> {
        self.ledger.take_events()
    }

    pub fn shared_ledger(&self) -> &Arc<StakingLedger> {
        &self.ledger
    }

    fn ensure_not_paused(&self) -> StakingResult<()> {
        if self.pause.is_paused() {
            return Err(StakingError::Paused);
        }
        Ok(())
    }

    fn observe<R>(&self, operation: &str, result: StakingResult<R>) -> StakingResult<R> {
        if let Err(e) = &result {
            debug!(operation, error = %e, "[ls-05] call rejected");
            metrics::record_error(e.label());
        }
        result
    }

    fn publish_controlled_value(&self) {
        metrics::record_total_controlled(self.total_controlled_value());
    }

    fn set_setting(&self, setting: &str, value: Amount, apply: impl FnOnce(&mut StakingConfig)) {
        apply(&mut self.config.write());
        self.ledger.push_event(StakingEvent::ConfigurationChanged {
            setting: setting.to_string(),
            value,
        });
        info!(setting, value, "[ls-05] configuration changed");
    }

    fn do_stake(&self, staker: Address, value: Amount, min_shares: Amount) -> StakingResult<Amount> {
        let _op = self.op_lock.lock();
        self.ensure_not_paused()?;
        let config = self.config.read().clone();
        if value < config.minimum_stake_bound {
            return Err(StakingError::MinimumStakeBoundNotSatisfied {
                value,
                minimum: config.minimum_stake_bound,
            });
        }

        // priced before the new value lands in the ledger
        let supply = self.token.total_supply();
        let shares = self
            .rate
            .value_to_shares(value, supply, &self.ledger.balances().local())?;

        let supply_after = supply.saturating_add(shares);
        if supply_after > config.maximum_share_supply {
            return Err(StakingError::MaximumSupplyExceeded {
                supply: supply_after,
                maximum: config.maximum_share_supply,
            });
        }
        if shares < min_shares {
            return Err(StakingError::StakeBelowMinimumShares {
                shares,
                minimum: min_shares,
            });
        }

        self.token.mint(&staker, shares)?;
        self.ledger.credit(value);
        self.ledger.push_event(StakingEvent::Staked {
            staker,
            value,
            shares,
        });

        metrics::record_stake(value);
        self.publish_controlled_value();
        info!(staker = %hex::encode(staker), value, shares, "[ls-05] staked");
        Ok(shares)
    }

    fn do_unstake_request(
        &self,
        requester: Address,
        shares: Amount,
        min_value: Amount,
    ) -> StakingResult<RequestId> {
        let _op = self.op_lock.lock();
        self.ensure_not_paused()?;
        let minimum = self.config.read().minimum_unstake_bound;
        if shares < minimum {
            return Err(StakingError::MinimumUnstakeBoundNotSatisfied { shares, minimum });
        }

        let value = self.rate.shares_to_value(
            shares,
            self.token.total_supply(),
            &self.ledger.balances().local(),
        )?;
        if value < min_value {
            return Err(StakingError::UnstakeBelowMinimumValue {
                value,
                minimum: min_value,
            });
        }

        let escrow = self.accounts.queue_escrow;
        self.token.transfer(&requester, &escrow, shares)?;

        let id = match self
            .queue
            .create(&self.accounts.contract, requester, shares, value)
        {
            Ok(id) => id,
            Err(e) => {
                if let Err(undo) = self.token.transfer(&escrow, &requester, shares) {
                    error!(
                        requester = %hex::encode(requester),
                        shares,
                        error = %undo,
                        "[ls-05] failed to return escrowed shares"
                    );
                }
                return Err(e.into());
            }
        };

        self.ledger.push_event(StakingEvent::UnstakeRequested {
            id,
            requester,
            shares,
            value,
        });
        metrics::record_unstake_request();
        info!(id, requester = %hex::encode(requester), shares, value, "[ls-05] unstake requested");
        Ok(id)
    }

    fn do_claim(&self, id: RequestId, requester: &Address) -> StakingResult<UnstakeRequest> {
        let _op = self.op_lock.lock();
        self.ensure_not_paused()?;
        let request = self.queue.claim(&self.accounts.contract, id, requester)?;
        self.ledger.push_event(StakingEvent::UnstakeRequestClaimed {
            id,
            requester: *requester,
        });
        self.publish_controlled_value();
        Ok(request)
    }

    fn do_allocate(&self, to_queue: Amount, to_deposits: Amount) -> StakingResult<()> {
        let _op = self.op_lock.lock();
        self.ledger.allocate(to_queue, to_deposits)?;

        if to_queue > 0 {
            if let Err(e) = self.queue.allocate(&self.accounts.contract, to_queue) {
                error!(to_queue, error = %e, "[ls-05] queue allocation failed, reverting");
                self.ledger.revert_allocation(to_queue, to_deposits);
                return Err(e.into());
            }
        }

        self.ledger.push_event(StakingEvent::Allocated {
            to_queue,
            to_deposits,
        });
        info!(to_queue, to_deposits, "[ls-05] value allocated");
        Ok(())
    }

    fn do_initiate_validators(&self, deposits: Vec<ValidatorDeposit>) -> StakingResult<Amount> {
        let _op = self.op_lock.lock();
        self.ensure_not_paused()?;
        if deposits.is_empty() {
            return Ok(0);
        }
        let (minimum, maximum) = {
            let config = self.config.read();
            (config.minimum_deposit_amount, config.maximum_deposit_amount)
        };

        let total = self.ledger.initiate_validators(&deposits, minimum, maximum)?;
        metrics::record_validators_initiated(deposits.len());
        info!(
            count = deposits.len(),
            total,
            initiated = self.ledger.balances().num_initiated_validators,
            "[ls-05] validators initiated"
        );
        Ok(total)
    }
}

impl<T, Q, E> StakingApi for StakingService<T, Q, E>
where
    T: ShareToken,
    Q: RedemptionQueueApi,
    E: ExchangeRateApi,
{
    fn stake(&self, staker: Address, value: Amount, min_shares: Amount) -> StakingResult<Amount> {
        self.observe("stake", self.do_stake(staker, value, min_shares))
    }

    fn unstake_request(
        &self,
        requester: Address,
        shares: Amount,
        min_value: Amount,
    ) -> StakingResult<RequestId> {
        self.observe(
            "unstake_request",
            self.do_unstake_request(requester, shares, min_value),
        )
    }

    fn claim_unstake_request(
        &self,
        id: RequestId,
        requester: &Address,
    ) -> StakingResult<UnstakeRequest> {
        self.observe("claim_unstake_request", self.do_claim(id, requester))
    }

    fn allocate(&self, to_queue: Amount, to_deposits: Amount) -> StakingResult<()> {
        self.observe("allocate", self.do_allocate(to_queue, to_deposits))
    }

    fn initiate_validators(&self, deposits: Vec<ValidatorDeposit>) -> StakingResult<Amount> {
        self.observe("initiate_validators", self.do_initiate_validators(deposits))
    }

    fn reclaim_allocated_surplus(&self) -> StakingResult<Amount> {
        let _op = self.op_lock.lock();
        let result = self
            .queue
            .withdraw_allocated_surplus(&self.accounts.contract)
            .map_err(StakingError::from);
        self.observe("reclaim_allocated_surplus", result)
    }

    fn unpause(&self) {
        if self.pause.unpause() {
            self.ledger.push_event(StakingEvent::Unpaused);
        }
    }

    fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    fn ledger(&self) -> LedgerBalances {
        self.ledger.balances()
    }

    fn controlled_value_breakdown(&self) -> ControlledValueBreakdown {
        self.rate
            .controlled_value_breakdown(&self.ledger.balances().local())
    }

    fn value_to_shares(&self, amount: Amount) -> StakingResult<Amount> {
        Ok(self.rate.value_to_shares(
            amount,
            self.token.total_supply(),
            &self.ledger.balances().local(),
        )?)
    }

    fn shares_to_value(&self, shares: Amount) -> StakingResult<Amount> {
        Ok(self.rate.shares_to_value(
            shares,
            self.token.total_supply(),
            &self.ledger.balances().local(),
        )?)
    }

    fn config(&self) -> StakingConfig {
        self.config.read().clone()
    }

    fn set_minimum_stake_bound(&self, amount: Amount) {
        self.set_setting("minimum_stake_bound", amount, |config| {
            config.minimum_stake_bound = amount
        });
    }

    fn set_minimum_unstake_bound(&self, shares: Amount) {
        self.set_setting("minimum_unstake_bound", shares, |config| {
            config.minimum_unstake_bound = shares
        });
    }

    fn set_maximum_share_supply(&self, supply: Amount) {
        self.set_setting("maximum_share_supply", supply, |config| {
            config.maximum_share_supply = supply
        });
    }

    fn set_deposit_bounds(&self, minimum: Amount, maximum: Amount) -> StakingResult<()> {
        validate_deposit_bounds(minimum, maximum)?;
        self.set_setting("minimum_deposit_amount", minimum, |config| {
            config.minimum_deposit_amount = minimum
        });
        self.set_setting("maximum_deposit_amount", maximum, |config| {
            config.maximum_deposit_amount = maximum
        });
        Ok(())
    }

    fn set_exchange_adjustment_bps(&self, bps: u16) -> StakingResult<()> {
        self.rate.set_exchange_adjustment_bps(bps)?;
        self.ledger.push_event(StakingEvent::ConfigurationChanged {
            setting: "exchange_adjustment_bps".to_string(),
            value: Amount::from(bps),
        });
        info!(bps, "[ls-05] exchange adjustment changed");
        Ok(())
    }
}
