//! Redemption Queue Service - Core business logic
//!
//! Mutations are serialized by `op_lock`. Each one holds the state write lock
//! from the aggregate update through its port calls and any compensation, so
//! readers never observe a change whose ports later failed. Outbound ports
//! invoked under the lock must not call back into the queue.

use crate::domain::{FundingLedger, RequestInfo, RequestQueue, UnstakeRequest};
use crate::error::{QueueError, QueueResult, RequestId};
use crate::events::QueueEvent;
use crate::metrics;
use crate::ports::inbound::RedemptionQueueApi;
use crate::ports::outbound::{OracleHorizon, ShareEscrow, SurplusReceiver, ValueTransfer};
use crate::types::QueueConfig;
use parking_lot::{Mutex, RwLock};
use shared_types::{Address, Amount, BlockClock, EventBuffer};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

struct QueueServiceState {
    queue: RequestQueue,
    config: QueueConfig,
    events: EventBuffer<QueueEvent>,
}

pub struct RedemptionQueueService<H, S, V, R, C>
where
    H: OracleHorizon,
    S: ShareEscrow,
    V: ValueTransfer,
    R: SurplusReceiver,
    C: BlockClock,
{
    state: Arc<RwLock<QueueServiceState>>,
    op_lock: Mutex<()>,
    horizon: Arc<H>,
    shares: Arc<S>,
    value: Arc<V>,
    surplus: Arc<R>,
    clock: Arc<C>,
}

impl<H, S, V, R, C> RedemptionQueueService<H, S, V, R, C>
where
    H: OracleHorizon,
    S: ShareEscrow,
    V: ValueTransfer,
    R: SurplusReceiver,
    C: BlockClock,
{
    pub fn new(
        config: QueueConfig,
        horizon: Arc<H>,
        shares: Arc<S>,
        value: Arc<V>,
        surplus: Arc<R>,
        clock: Arc<C>,
    ) -> Self {
        info!(
            finalize_delay_blocks = config.finalize_delay_blocks,
            "[ls-04] redemption queue initialized"
        );
        Self {
            state: Arc::new(RwLock::new(QueueServiceState {
                queue: RequestQueue::new(),
                config,
                events: EventBuffer::new(),
            })),
            op_lock: Mutex::new(()),
            horizon,
            shares,
            value,
            surplus,
            clock,
        }
    }

    /// Take and clear buffered events
    pub fn take_events(&self) -> Vec<QueueEvent> {
        self.state.write().events.take()
    }

    /// Whether the request is finalized; tombstones are
    pub fn is_finalized(&self, id: RequestId) -> QueueResult<bool> {
        self.request_info(id).map(|info| info.finalized)
    }

    /// Burn then pay. A failed payout re-issues the burned shares so the
    /// claim unwinds completely.
    fn settle_claim(
        &self,
        state: &mut QueueServiceState,
        request: &UnstakeRequest,
    ) -> QueueResult<()> {
        if let Err(e) = self.shares.burn(request.locked_shares) {
            error!(id = request.id, error = %e, "[ls-04] share burn failed, reverting claim");
            state.queue.revert_claim(*request);
            return Err(e);
        }

        let Err(e) = self.value.send_value(&request.requester, request.requested_value) else {
            return Ok(());
        };
        match self.shares.restore(request.locked_shares) {
            Ok(()) => {
                error!(id = request.id, error = %e, "[ls-04] value transfer failed, claim reverted");
                state.queue.revert_claim(*request);
            }
            Err(restore) => {
                error!(
                    id = request.id,
                    error = %e,
                    restore_error = %restore,
                    "[ls-04] value transfer failed and burned shares could not be restored"
                );
                state.queue.revert_claim(UnstakeRequest {
                    locked_shares: 0,
                    ..*request
                });
                state.events.push(QueueEvent::ClaimPartiallyReverted {
                    id: request.id,
                    requester: request.requester,
                });
            }
        }
        Err(e)
    }
}

impl<H, S, V, R, C> RedemptionQueueApi for RedemptionQueueService<H, S, V, R, C>
where
    H: OracleHorizon,
    S: ShareEscrow,
    V: ValueTransfer,
    R: SurplusReceiver,
    C: BlockClock,
{
    fn create(&self, requester: Address, locked_shares: Amount, requested_value: Amount) -> RequestId {
        let _op = self.op_lock.lock();
        let block = self.clock.current_height();
        let mut state = self.state.write();
        let request = state
            .queue
            .create(requester, locked_shares, requested_value, block);
        state.events.push(QueueEvent::RequestCreated { request });
        metrics::record_transition("created", 1);
        metrics::record_funding(state.queue.ledger());
        info!(
            id = request.id,
            requester = %hex::encode(requester),
            requested_value,
            cumulative = request.cumulative_requested_value,
            "[ls-04] unstake request created"
        );
        request.id
    }

    fn claim(&self, id: RequestId, requester: &Address) -> QueueResult<UnstakeRequest> {
        let _op = self.op_lock.lock();
        let horizon = self.horizon.latest_end_block();

        let mut state = self.state.write();
        let delay = state.config.finalize_delay_blocks;
        let request = state
            .queue
            .begin_claim(id, requester, horizon, delay)
            .map_err(|e| {
                debug!(id, error = %e, "[ls-04] claim rejected");
                e
            })?;

        self.settle_claim(&mut state, &request)?;
        state.events.push(QueueEvent::RequestClaimed { request });
        drop(state);

        metrics::record_transition("claimed", 1);
        info!(
            id,
            requested_value = request.requested_value,
            "[ls-04] unstake request claimed"
        );
        Ok(request)
    }

    fn cancel_unfinalized_requests(&self, max_cancel: usize) -> QueueResult<bool> {
        let _op = self.op_lock.lock();
        let horizon = self.horizon.latest_end_block();

        let mut state = self.state.write();
        let delay = state.config.finalize_delay_blocks;
        let batch = state.queue.pop_unfinalized(max_cancel, horizon, delay);

        // newest first, so an unreturned remainder is contiguous with the tail
        for (returned, request) in batch.cancelled.iter().enumerate() {
            if let Err(e) = self
                .shares
                .transfer_shares(&request.requester, request.locked_shares)
            {
                let unreturned = &batch.cancelled[returned..];
                error!(
                    id = request.id,
                    restored = unreturned.len(),
                    error = %e,
                    "[ls-04] share return failed, restoring unreturned requests"
                );
                state.queue.restore_cancelled(unreturned);
                metrics::record_transition("cancelled", returned);
                metrics::record_funding(state.queue.ledger());
                return Err(e);
            }
            state
                .events
                .push(QueueEvent::RequestCancelled { request: *request });
        }

        metrics::record_transition("cancelled", batch.cancelled.len());
        metrics::record_funding(state.queue.ledger());
        drop(state);
        if !batch.cancelled.is_empty() {
            warn!(
                cancelled = batch.cancelled.len(),
                value = batch.cancelled_value(),
                has_more = batch.has_more,
                "[ls-04] unfinalized requests cancelled"
            );
        }
        Ok(batch.has_more)
    }

    fn allocate(&self, amount: Amount) {
        let _op = self.op_lock.lock();
        let mut state = self.state.write();
        state.queue.allocate(amount);
        state.events.push(QueueEvent::Allocated { amount });
        metrics::record_funding(state.queue.ledger());
        debug!(
            amount,
            allocated = state.queue.ledger().allocated_for_claims,
            "[ls-04] funds allocated"
        );
    }

    fn withdraw_allocated_surplus(&self) -> QueueResult<Amount> {
        let _op = self.op_lock.lock();
        let mut state = self.state.write();
        let amount = state.queue.take_surplus();
        if amount == 0 {
            return Ok(0);
        }

        if let Err(e) = self.surplus.receive_surplus(amount) {
            error!(amount, error = %e, "[ls-04] surplus receiver failed, restoring allocation");
            state.queue.revert_surplus(amount);
            return Err(e);
        }

        state.events.push(QueueEvent::SurplusWithdrawn { amount });
        metrics::record_funding(state.queue.ledger());
        drop(state);
        info!(amount, "[ls-04] allocated surplus withdrawn");
        Ok(amount)
    }

    fn allocated_surplus(&self) -> Amount {
        self.state.read().queue.ledger().surplus()
    }

    fn allocated_deficit(&self) -> Amount {
        self.state.read().queue.ledger().deficit()
    }

    fn balance(&self) -> Amount {
        self.state.read().queue.ledger().balance()
    }

    fn funding(&self) -> FundingLedger {
        *self.state.read().queue.ledger()
    }

    fn request_info(&self, id: RequestId) -> QueueResult<RequestInfo> {
        let horizon = self.horizon.latest_end_block();
        let state = self.state.read();
        state
            .queue
            .request_info(id, horizon, state.config.finalize_delay_blocks)
    }

    fn request_by_id(&self, id: RequestId) -> QueueResult<Option<UnstakeRequest>> {
        self.state.read().queue.get(id).map(|slot| slot.copied())
    }

    fn num_requests(&self) -> usize {
        self.state.read().queue.num_requests()
    }

    fn finalize_delay_blocks(&self) -> u64 {
        self.state.read().config.finalize_delay_blocks
    }

    fn set_finalize_delay_blocks(&self, blocks: u64) {
        let mut state = self.state.write();
        state.config.finalize_delay_blocks = blocks;
        state.events.push(QueueEvent::ConfigurationChanged {
            setting: "finalize_delay_blocks".to_string(),
            value: blocks,
        });
    }
}
