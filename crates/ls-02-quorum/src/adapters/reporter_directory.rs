//! Reporter Directory Adapter
//!
//! Implements `ReporterDirectory` over the shared role registry.

use crate::ports::outbound::ReporterDirectory;
use shared_types::{Role, RoleRegistry};
use std::sync::Arc;

/// Counts holders of `Role::Reporter` at call time
pub struct RoleReporterDirectory {
    roles: Arc<RoleRegistry>,
}

impl RoleReporterDirectory {
    pub fn new(roles: Arc<RoleRegistry>) -> Self {
        Self { roles }
    }
}

impl ReporterDirectory for RoleReporterDirectory {
    fn reporter_count(&self) -> u64 {
        self.roles.member_count(Role::Reporter) as u64
    }
}
