//! Oracle Forwarder Adapter
//!
//! Implements `RecordSink` by calling the oracle through its access handler
//! under the aggregator's own identity, which must hold `OracleUpdater`.

use crate::error::{QuorumError, QuorumResult};
use crate::ports::outbound::RecordSink;
use ls_01_oracle::{OracleAccessHandler, OracleApi, ReceiveOutcome};
use shared_types::{Address, BlockNumber, OracleRecord};
use std::sync::Arc;
use tracing::debug;

pub struct OracleForwarder<A>
where
    A: OracleApi,
{
    oracle: Arc<OracleAccessHandler<A>>,
    identity: Address,
}

impl<A> OracleForwarder<A>
where
    A: OracleApi,
{
    pub fn new(oracle: Arc<OracleAccessHandler<A>>, identity: Address) -> Self {
        Self { oracle, identity }
    }
}

impl<A> RecordSink for OracleForwarder<A>
where
    A: OracleApi,
{
    fn receive_record(&self, record: OracleRecord) -> QuorumResult<()> {
        match self.oracle.receive_record(&self.identity, record) {
            Ok(ReceiveOutcome::Committed { index }) => {
                debug!(index, "[ls-02] forwarded record committed");
                Ok(())
            }
            Ok(ReceiveOutcome::Pending(violation)) => {
                debug!(reason = violation.reason(), "[ls-02] forwarded record pending");
                Ok(())
            }
            Err(e) => Err(QuorumError::ForwardingRejected {
                reason: e.to_string(),
            }),
        }
    }

    fn has_received(&self, block: BlockNumber) -> bool {
        let oracle = self.oracle.oracle();
        if oracle.latest_record().update_end_block >= block {
            return true;
        }
        oracle
            .pending_update()
            .map(|pending| pending.update_end_block >= block)
            .unwrap_or(false)
    }
}
