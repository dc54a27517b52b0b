//! Access handler for the Oracle subsystem
//!
//! Every mutating entry point checks the caller's role before touching the
//! service. Reads are not gated.

use crate::error::OracleResult;
use crate::ports::inbound::{OracleApi, ReceiveOutcome};
use crate::types::SanityConfig;
use shared_types::{Address, OracleRecord, Role, RoleRegistry};
use std::sync::Arc;
use tracing::warn;

/// Access handler for the Oracle subsystem
///
/// Authorized callers:
/// - receive_record: OracleUpdater (the quorum aggregator) ONLY
/// - accept/reject pending: OraclePendingResolver ONLY
/// - modify_existing_record, setters: OracleManager ONLY
pub struct OracleAccessHandler<F>
where
    F: OracleApi,
{
    oracle: Arc<F>,
    roles: Arc<RoleRegistry>,
}

impl<F> OracleAccessHandler<F>
where
    F: OracleApi,
{
    pub fn new(oracle: Arc<F>, roles: Arc<RoleRegistry>) -> Self {
        Self { oracle, roles }
    }

    /// The wrapped service, for unrestricted reads
    pub fn oracle(&self) -> &Arc<F> {
        &self.oracle
    }

    fn authorize(&self, caller: &Address, role: Role) -> OracleResult<()> {
        self.roles.ensure_role(role, caller).map_err(|e| {
            warn!(role = ?role, "[ls-01] unauthorized call rejected");
            e.into()
        })
    }

    pub fn receive_record(
        &self,
        caller: &Address,
        record: OracleRecord,
    ) -> OracleResult<ReceiveOutcome> {
        self.authorize(caller, Role::OracleUpdater)?;
        self.oracle.receive_record(record)
    }

    pub fn accept_pending_update(&self, caller: &Address) -> OracleResult<usize> {
        self.authorize(caller, Role::OraclePendingResolver)?;
        self.oracle.accept_pending_update()
    }

    pub fn reject_pending_update(&self, caller: &Address) -> OracleResult<OracleRecord> {
        self.authorize(caller, Role::OraclePendingResolver)?;
        self.oracle.reject_pending_update()
    }

    pub fn modify_existing_record(
        &self,
        caller: &Address,
        index: usize,
        record: OracleRecord,
    ) -> OracleResult<()> {
        self.authorize(caller, Role::OracleManager)?;
        self.oracle.modify_existing_record(index, record)
    }

    pub fn set_finalization_block_delta(&self, caller: &Address, delta: u64) -> OracleResult<()> {
        self.authorize(caller, Role::OracleManager)?;
        self.oracle.set_finalization_block_delta(delta)
    }

    pub fn set_sanity_config(&self, caller: &Address, config: SanityConfig) -> OracleResult<()> {
        self.authorize(caller, Role::OracleManager)?;
        self.oracle.set_sanity_config(config)
    }
}
