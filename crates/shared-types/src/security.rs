//! # Role Registry
//!
//! The permission layer that sits in front of every staking subsystem.
//!
//! Services never check roles themselves: each crate's access handler asks
//! the registry whether the caller holds the required role and only then
//! forwards the already-authorized call to the service.
//!
//! ## Live Membership
//!
//! `member_count` reflects the set at the moment it is called. The quorum
//! aggregator reads the reporter count this way on every submission, so a
//! reporter joining or leaving changes the relative threshold for hashes
//! that are already being tallied.

use crate::entities::Address;
use crate::errors::AccessError;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tracing::info;

/// Roles gating privileged entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Grants and revokes every other role.
    Admin,
    /// May push records into the oracle (normally the quorum aggregator).
    OracleUpdater,
    /// May change oracle configuration and correct committed records.
    OracleManager,
    /// May accept or reject a pending oracle update.
    OraclePendingResolver,
    /// Independent off-chain reporter feeding the quorum aggregator.
    Reporter,
    /// May change quorum thresholds.
    QuorumManager,
    /// May cancel unfinalized redemption requests and tune the queue.
    QueueManager,
    /// The staking entry point, sole caller of queue mutations.
    StakingContract,
    /// May allocate funds and initiate validators.
    AllocatorService,
    /// May change staking bounds and the exchange adjustment.
    StakingManager,
}

/// Thread-safe role membership table.
#[derive(Debug, Default)]
pub struct RoleRegistry {
    members: RwLock<HashMap<Role, BTreeSet<Address>>>,
}

impl RoleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with a single admin.
    pub fn with_admin(admin: Address) -> Self {
        let registry = Self::new();
        registry.members.write().entry(Role::Admin).or_default().insert(admin);
        registry
    }

    /// Grant `role` to `account`. Requires `caller` to be an admin.
    pub fn grant_role(&self, caller: &Address, role: Role, account: Address) -> Result<(), AccessError> {
        self.ensure_role(Role::Admin, caller)?;
        let inserted = self.members.write().entry(role).or_default().insert(account);
        if inserted {
            info!(role = ?role, account = %hex::encode(account), "[access] role granted");
        }
        Ok(())
    }

    /// Revoke `role` from `account`. Requires `caller` to be an admin.
    pub fn revoke_role(&self, caller: &Address, role: Role, account: &Address) -> Result<(), AccessError> {
        self.ensure_role(Role::Admin, caller)?;
        let removed = self
            .members
            .write()
            .get_mut(&role)
            .map(|set| set.remove(account))
            .unwrap_or(false);
        if removed {
            info!(role = ?role, account = %hex::encode(account), "[access] role revoked");
        }
        Ok(())
    }

    /// Whether `account` currently holds `role`.
    pub fn has_role(&self, role: Role, account: &Address) -> bool {
        self.members
            .read()
            .get(&role)
            .map(|set| set.contains(account))
            .unwrap_or(false)
    }

    /// Fail with [`AccessError::Unauthorized`] unless `account` holds `role`.
    pub fn ensure_role(&self, role: Role, account: &Address) -> Result<(), AccessError> {
        if self.has_role(role, account) {
            Ok(())
        } else {
            Err(AccessError::Unauthorized {
                account: *account,
                role,
            })
        }
    }

    /// Current number of accounts holding `role`.
    pub fn member_count(&self, role: Role) -> usize {
        self.members.read().get(&role).map(BTreeSet::len).unwrap_or(0)
    }

    /// Accounts holding `role`, in address order.
    pub fn members(&self, role: Role) -> Vec<Address> {
        self.members
            .read()
            .get(&role)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }
}
