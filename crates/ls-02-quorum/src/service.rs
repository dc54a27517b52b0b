//! Quorum Service - Core business logic
//!
//! Submissions are serialized by `op_lock`. The tally is updated under the
//! state lock, which is released before the record sink is called. Once a
//! window is known to be committed, votes for earlier windows are dropped.

use crate::domain::{quorum_reached, ReportTally, TallyChange};
use crate::error::QuorumResult;
use crate::events::QuorumEvent;
use crate::metrics;
use crate::ports::inbound::{QuorumApi, QuorumOutcome};
use crate::ports::outbound::{RecordSink, ReporterDirectory};
use crate::types::{validate_relative_threshold, validate_target_window, QuorumConfig};
use parking_lot::{Mutex, RwLock};
use shared_types::{short_hash, Address, BlockNumber, EventBuffer, Hash, OracleRecord};
use std::sync::Arc;
use tracing::{debug, info, warn};

struct QuorumServiceState {
    tally: ReportTally,
    config: QuorumConfig,
    events: EventBuffer<QuorumEvent>,
}

/// Quorum Service implementation
pub struct QuorumService<S, D>
where
    S: RecordSink,
    D: ReporterDirectory,
{
    state: Arc<RwLock<QuorumServiceState>>,
    op_lock: Mutex<()>,
    sink: Arc<S>,
    directory: Arc<D>,
}

impl<S, D> QuorumService<S, D>
where
    S: RecordSink,
    D: ReporterDirectory,
{
    pub fn new(config: QuorumConfig, sink: Arc<S>, directory: Arc<D>) -> QuorumResult<Self> {
        config.validate()?;
        info!(
            absolute_threshold = config.absolute_threshold,
            relative_threshold_bps = config.relative_threshold_bps,
            "[ls-02] quorum aggregator initialized"
        );
        Ok(Self {
            state: Arc::new(RwLock::new(QuorumServiceState {
                tally: ReportTally::new(),
                config,
                events: EventBuffer::new(),
            })),
            op_lock: Mutex::new(()),
            sink,
            directory,
        })
    }

    /// Take and clear buffered events
    pub fn take_events(&self) -> Vec<QuorumEvent> {
        self.state.write().events.take()
    }

    fn prune_below(&self, block: BlockNumber) {
        let pruned = self.state.write().tally.prune_below(block);
        if pruned > 0 {
            debug!(block, pruned, "[ls-02] votes behind committed window pruned");
        }
    }

    fn forward(&self, block: BlockNumber, hash: Hash, record: OracleRecord) -> QuorumOutcome {
        self.state
            .write()
            .events
            .push(QuorumEvent::QuorumReached { block, hash });
        metrics::record_quorum_reached();
        info!(block, hash = %short_hash(&hash), "[ls-02] quorum reached, forwarding record");

        match self.sink.receive_record(record) {
            Ok(()) => QuorumOutcome::Forwarded,
            Err(e) => {
                let reason = e.to_string();
                warn!(block, reason = %reason, "[ls-02] oracle refused forwarded record");
                metrics::record_forward_failure();
                self.state.write().events.push(QuorumEvent::ForwardingFailed {
                    block,
                    hash,
                    reason: reason.clone(),
                });
                QuorumOutcome::ForwardingFailed { reason }
            }
        }
    }
}

impl<S, D> QuorumApi for QuorumService<S, D>
where
    S: RecordSink,
    D: ReporterDirectory,
{
    fn submit_report(&self, reporter: Address, record: OracleRecord) -> QuorumOutcome {
        let _op = self.op_lock.lock();
        let block = record.update_end_block;
        let hash = record.content_hash();
        metrics::record_report();

        let (count, config) = {
            let mut state = self.state.write();
            state.events.push(QuorumEvent::ReportReceived {
                block,
                reporter,
                hash,
                record,
            });
            if let TallyChange::Recorded { previous } = state.tally.record(block, reporter, hash) {
                debug!(
                    block,
                    hash = %short_hash(&hash),
                    replaced = previous.is_some(),
                    "[ls-02] reporter vote recorded"
                );
            }
            (state.tally.count(block, &hash), state.config.clone())
        };

        let total_reporters = self.directory.reporter_count();
        if !quorum_reached(
            count,
            total_reporters,
            config.absolute_threshold,
            config.relative_threshold_bps,
        ) {
            return QuorumOutcome::NoQuorum {
                count,
                total_reporters,
            };
        }

        if self.sink.has_received(block) {
            debug!(block, "[ls-02] window already received by oracle");
            self.prune_below(block);
            return QuorumOutcome::AlreadyReceived;
        }

        let outcome = self.forward(block, hash, record);
        if outcome == QuorumOutcome::Forwarded {
            self.prune_below(block);
        }
        outcome
    }

    fn record_hash_by_block_and_reporter(
        &self,
        block: BlockNumber,
        reporter: &Address,
    ) -> Option<Hash> {
        self.state.read().tally.hash_of(block, reporter)
    }

    fn record_hash_count(&self, block: BlockNumber, hash: &Hash) -> u64 {
        self.state.read().tally.count(block, hash)
    }

    fn config(&self) -> QuorumConfig {
        self.state.read().config.clone()
    }

    fn set_quorum_thresholds(&self, absolute: u16, relative_bps: u16) -> QuorumResult<()> {
        validate_relative_threshold(relative_bps)?;
        let mut state = self.state.write();
        state.config.absolute_threshold = absolute;
        state.config.relative_threshold_bps = relative_bps;
        state.events.push(QuorumEvent::ConfigurationChanged {
            setting: "absolute_threshold".to_string(),
            value: u64::from(absolute),
        });
        state.events.push(QuorumEvent::ConfigurationChanged {
            setting: "relative_threshold_bps".to_string(),
            value: u64::from(relative_bps),
        });
        Ok(())
    }

    fn set_target_report_window_blocks(&self, blocks: u64) -> QuorumResult<()> {
        validate_target_window(blocks)?;
        let mut state = self.state.write();
        state.config.target_report_window_blocks = blocks;
        state.events.push(QuorumEvent::ConfigurationChanged {
            setting: "target_report_window_blocks".to_string(),
            value: blocks,
        });
        Ok(())
    }
}
