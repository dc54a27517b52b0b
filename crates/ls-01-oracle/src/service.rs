//! Oracle Service - Core business logic
//!
//! Mutating operations are serialized by `op_lock`. A commit holds the state
//! write lock from the append through the returns sink call and its possible
//! revert, so readers only ever see a record whose returns were forwarded.
//! Outbound ports invoked under the lock must not call back into the oracle.

use crate::domain::{
    check_window_final, sanity_check, validate_update, ExternalCounters, OracleState,
    PendingSlot, PendingUpdate, RecordStore,
};
use crate::error::{OracleError, OracleResult};
use crate::events::OracleEvent;
use crate::metrics;
use crate::ports::inbound::{OracleApi, ReceiveOutcome};
use crate::ports::outbound::{DepositCounters, PauseSink, ReturnsSink, WindowReturns};
use crate::types::{validate_finalization_delta, OracleConfig, SanityConfig};
use parking_lot::{Mutex, RwLock};
use shared_types::{BlockClock, EventBuffer, OracleRecord};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Internal state for the oracle
struct OracleServiceState {
    records: RecordStore,
    pending: PendingSlot,
    config: OracleConfig,
    /// Events not yet drained by `take_events`
    events: EventBuffer<OracleEvent>,
}

/// Oracle Service implementation
pub struct OracleService<D, P, R, C>
where
    D: DepositCounters,
    P: PauseSink,
    R: ReturnsSink,
    C: BlockClock,
{
    state: Arc<RwLock<OracleServiceState>>,
    op_lock: Mutex<()>,
    deposits: Arc<D>,
    pauser: Arc<P>,
    returns: Arc<R>,
    clock: Arc<C>,
}

impl<D, P, R, C> OracleService<D, P, R, C>
where
    D: DepositCounters,
    P: PauseSink,
    R: ReturnsSink,
    C: BlockClock,
{
    /// Create an oracle seeded with the bootstrap record
    pub fn new(
        config: OracleConfig,
        deposits: Arc<D>,
        pauser: Arc<P>,
        returns: Arc<R>,
        clock: Arc<C>,
    ) -> OracleResult<Self> {
        config.validate()?;
        info!(
            initialization_block = config.initialization_block,
            finalization_block_delta = config.finalization_block_delta,
            "[ls-01] oracle initialized"
        );
        Ok(Self {
            state: Arc::new(RwLock::new(OracleServiceState {
                records: RecordStore::new(config.initialization_block),
                pending: PendingSlot::default(),
                config,
                events: EventBuffer::new(),
            })),
            op_lock: Mutex::new(()),
            deposits,
            pauser,
            returns,
            clock,
        })
    }

    /// Take and clear buffered events
    pub fn take_events(&self) -> Vec<OracleEvent> {
        self.state.write().events.take()
    }

    /// Snapshot of the full record log
    pub fn records(&self) -> Vec<OracleRecord> {
        self.state.read().records.iter().copied().collect()
    }

    /// The pending record together with the violation that held it back
    pub fn pending_detail(&self) -> Option<PendingUpdate> {
        self.state.read().pending.get().copied()
    }

    fn external_counters(&self) -> ExternalCounters {
        ExternalCounters {
            total_deposited: self.deposits.total_deposited(),
            num_initiated_validators: self.deposits.num_initiated_validators(),
        }
    }

    /// Append `record` and forward its windowed returns.
    ///
    /// Runs under the caller's write guard. On a sink failure the append is
    /// undone and `restore` (the pending update being accepted, if any) is
    /// put back before the guard is released.
    fn commit(
        &self,
        state: &mut OracleServiceState,
        record: OracleRecord,
        restore: Option<PendingUpdate>,
    ) -> OracleResult<usize> {
        let index = state.records.push(record);

        let returns = WindowReturns {
            reward_amount: record.window_withdrawn_reward_amount,
            principal_amount: record.window_withdrawn_principal_amount,
            include_external_rewards: true,
        };
        if let Err(e) = self.returns.process_returns(returns) {
            error!(index, error = %e, "[ls-01] returns forwarding failed, reverting commit");
            state.records.revert_push(index);
            if let Some(pending) = restore {
                state.pending.set(pending);
            }
            return Err(e);
        }

        state.events.push(OracleEvent::RecordAdded { index, record });
        metrics::record_committed(record.update_end_block);
        info!(
            index,
            start = record.update_start_block,
            end = record.update_end_block,
            balance = record.current_total_validator_balance,
            "[ls-01] record committed"
        );
        Ok(index)
    }

    fn try_receive(&self, record: OracleRecord) -> OracleResult<ReceiveOutcome> {
        let _op = self.op_lock.lock();
        let counters = self.external_counters();
        let current_height = self.clock.current_height();

        let mut state = self.state.write();
        if state.pending.is_occupied() {
            return Err(OracleError::UpdatePending);
        }
        let prev = *state.records.latest();
        validate_update(&prev, &record, &counters)?;
        check_window_final(&record, state.config.finalization_block_delta, current_height)?;

        match sanity_check(&prev, &record, &state.config.sanity) {
            Some(violation) => {
                state.pending.set(PendingUpdate { record, violation });
                state
                    .events
                    .push(OracleEvent::failed_sanity_check(&violation, record));
                warn!(
                    end = record.update_end_block,
                    reason = violation.reason(),
                    value = violation.value,
                    bound = violation.bound,
                    "[ls-01] record failed sanity check, pausing protocol"
                );
                metrics::record_pending(violation.reason());
                self.pauser.request_pause_all();
                Ok(ReceiveOutcome::Pending(violation))
            }
            None => {
                let index = self.commit(&mut state, record, None)?;
                Ok(ReceiveOutcome::Committed { index })
            }
        }
    }
}

impl<D, P, R, C> OracleApi for OracleService<D, P, R, C>
where
    D: DepositCounters,
    P: PauseSink,
    R: ReturnsSink,
    C: BlockClock,
{
    fn receive_record(&self, record: OracleRecord) -> OracleResult<ReceiveOutcome> {
        let result = self.try_receive(record);
        if let Err(e) = &result {
            debug!(end = record.update_end_block, error = %e, "[ls-01] record rejected");
            metrics::record_rejected(e.label());
        }
        result
    }

    fn accept_pending_update(&self) -> OracleResult<usize> {
        let _op = self.op_lock.lock();
        let mut state = self.state.write();
        let pending = state.pending.take().ok_or(OracleError::NoPendingUpdate)?;
        info!(
            end = pending.record.update_end_block,
            reason = pending.violation.reason(),
            "[ls-01] pending update accepted"
        );
        self.commit(&mut state, pending.record, Some(pending))
    }

    fn reject_pending_update(&self) -> OracleResult<OracleRecord> {
        let _op = self.op_lock.lock();
        let mut state = self.state.write();
        let pending = state.pending.take().ok_or(OracleError::NoPendingUpdate)?;
        state.events.push(OracleEvent::PendingUpdateRejected {
            record: pending.record,
        });
        info!(
            end = pending.record.update_end_block,
            "[ls-01] pending update rejected"
        );
        Ok(pending.record)
    }

    fn modify_existing_record(&self, index: usize, record: OracleRecord) -> OracleResult<()> {
        let _op = self.op_lock.lock();
        let counters = self.external_counters();

        let mut state = self.state.write();
        if index == 0 {
            return Err(OracleError::CannotModifyInitialRecord);
        }
        let existing = *state
            .records
            .get(index)
            .ok_or(OracleError::RecordNotFound { index })?;
        if existing.update_start_block != record.update_start_block
            || existing.update_end_block != record.update_end_block
        {
            return Err(OracleError::InvalidRecordModification);
        }
        let prev = *state
            .records
            .get(index - 1)
            .ok_or(OracleError::RecordNotFound { index: index - 1 })?;
        validate_update(&prev, &record, &counters)?;
        let old = state.records.replace(index, record)?;

        // decreases are not clawed back; only increases are drawn again
        let missing = WindowReturns {
            reward_amount: record
                .window_withdrawn_reward_amount
                .saturating_sub(old.window_withdrawn_reward_amount),
            principal_amount: record
                .window_withdrawn_principal_amount
                .saturating_sub(old.window_withdrawn_principal_amount),
            include_external_rewards: false,
        };
        if !missing.is_empty() {
            if let Err(e) = self.returns.process_returns(missing) {
                error!(index, error = %e, "[ls-01] correction forwarding failed, restoring record");
                state.records.replace(index, old)?;
                return Err(e);
            }
        }

        state.events.push(OracleEvent::RecordModified { index, record });
        info!(
            index,
            missing_reward = missing.reward_amount,
            missing_principal = missing.principal_amount,
            "[ls-01] record modified"
        );
        Ok(())
    }

    fn latest_record(&self) -> OracleRecord {
        *self.state.read().records.latest()
    }

    fn record_at(&self, index: usize) -> OracleResult<OracleRecord> {
        self.state
            .read()
            .records
            .get(index)
            .copied()
            .ok_or(OracleError::RecordNotFound { index })
    }

    fn num_records(&self) -> usize {
        self.state.read().records.num_records()
    }

    fn pending_update(&self) -> OracleResult<OracleRecord> {
        self.state
            .read()
            .pending
            .get()
            .map(|p| p.record)
            .ok_or(OracleError::NoPendingUpdate)
    }

    fn has_pending_update(&self) -> bool {
        self.state.read().pending.is_occupied()
    }

    fn state(&self) -> OracleState {
        self.state.read().pending.state()
    }

    fn set_finalization_block_delta(&self, delta: u64) -> OracleResult<()> {
        validate_finalization_delta(delta)?;
        let mut state = self.state.write();
        state.config.finalization_block_delta = delta;
        state
            .events
            .push(OracleEvent::config_changed("finalization_block_delta", delta));
        Ok(())
    }

    fn finalization_block_delta(&self) -> u64 {
        self.state.read().config.finalization_block_delta
    }

    fn set_sanity_config(&self, config: SanityConfig) -> OracleResult<()> {
        config.validate()?;
        let mut state = self.state.write();
        let old = std::mem::replace(&mut state.config.sanity, config.clone());

        let changes: [(&str, u128, u128); 6] = [
            (
                "min_report_size_blocks",
                old.min_report_size_blocks.into(),
                config.min_report_size_blocks.into(),
            ),
            (
                "min_deposit_per_validator",
                old.min_deposit_per_validator,
                config.min_deposit_per_validator,
            ),
            (
                "max_deposit_per_validator",
                old.max_deposit_per_validator,
                config.max_deposit_per_validator,
            ),
            (
                "max_consensus_layer_loss_ppm",
                old.max_consensus_layer_loss_ppm,
                config.max_consensus_layer_loss_ppm,
            ),
            (
                "min_consensus_layer_gain_per_block_ppt",
                old.min_consensus_layer_gain_per_block_ppt,
                config.min_consensus_layer_gain_per_block_ppt,
            ),
            (
                "max_consensus_layer_gain_per_block_ppt",
                old.max_consensus_layer_gain_per_block_ppt,
                config.max_consensus_layer_gain_per_block_ppt,
            ),
        ];
        for (setting, before, after) in changes {
            if before != after {
                state.events.push(OracleEvent::config_changed(setting, after));
            }
        }
        Ok(())
    }

    fn sanity_config(&self) -> SanityConfig {
        self.state.read().config.sanity.clone()
    }
}
