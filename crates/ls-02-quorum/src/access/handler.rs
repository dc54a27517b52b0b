//! Access handler for the Quorum subsystem

use crate::error::QuorumResult;
use crate::ports::inbound::{QuorumApi, QuorumOutcome};
use shared_types::{Address, OracleRecord, Role, RoleRegistry};
use std::sync::Arc;
use tracing::warn;

/// Authorized callers:
/// - submit_report: Reporter ONLY, submitting under its own address
/// - threshold and window setters: QuorumManager ONLY
pub struct QuorumAccessHandler<Q>
where
    Q: QuorumApi,
{
    quorum: Arc<Q>,
    roles: Arc<RoleRegistry>,
}

impl<Q> QuorumAccessHandler<Q>
where
    Q: QuorumApi,
{
    pub fn new(quorum: Arc<Q>, roles: Arc<RoleRegistry>) -> Self {
        Self { quorum, roles }
    }

    pub fn quorum(&self) -> &Arc<Q> {
        &self.quorum
    }

    fn authorize(&self, caller: &Address, role: Role) -> QuorumResult<()> {
        self.roles.ensure_role(role, caller).map_err(|e| {
            warn!(role = ?role, "[ls-02] unauthorized call rejected");
            e.into()
        })
    }

    pub fn submit_report(
        &self,
        caller: &Address,
        record: OracleRecord,
    ) -> QuorumResult<QuorumOutcome> {
        self.authorize(caller, Role::Reporter)?;
        Ok(self.quorum.submit_report(*caller, record))
    }

    pub fn set_quorum_thresholds(
        &self,
        caller: &Address,
        absolute: u16,
        relative_bps: u16,
    ) -> QuorumResult<()> {
        self.authorize(caller, Role::QuorumManager)?;
        self.quorum.set_quorum_thresholds(absolute, relative_bps)
    }

    pub fn set_target_report_window_blocks(&self, caller: &Address, blocks: u64) -> QuorumResult<()> {
        self.authorize(caller, Role::QuorumManager)?;
        self.quorum.set_target_report_window_blocks(blocks)
    }
}
