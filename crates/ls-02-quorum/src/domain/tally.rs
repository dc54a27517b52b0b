//! Per-block tally of reporter hashes
//!
//! Each reporter holds at most one live hash per block. Replacing it moves
//! the reporter's vote from the old hash to the new one in a single step.
//! Blocks behind the oracle's committed horizon are pruned.

use serde::{Deserialize, Serialize};
use shared_types::math::BASIS_POINTS_DENOMINATOR;
use shared_types::{Address, BlockNumber, Hash};
use std::collections::HashMap;

/// What a submission did to the tally
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TallyChange {
    /// The reporter resubmitted the hash it already holds
    Unchanged,
    /// The reporter's vote now counts for the submitted hash
    Recorded { previous: Option<Hash> },
}

#[derive(Clone, Debug, Default)]
pub struct ReportTally {
    by_reporter: HashMap<(BlockNumber, Address), Hash>,
    counts: HashMap<(BlockNumber, Hash), u64>,
}

impl ReportTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `reporter`'s hash for `block`
    pub fn record(&mut self, block: BlockNumber, reporter: Address, hash: Hash) -> TallyChange {
        let previous = self.by_reporter.insert((block, reporter), hash);
        if previous == Some(hash) {
            return TallyChange::Unchanged;
        }

        if let Some(old) = previous {
            if let Some(count) = self.counts.get_mut(&(block, old)) {
                *count = count.saturating_sub(1);
                if *count == 0 {
                    self.counts.remove(&(block, old));
                }
            }
        }
        *self.counts.entry((block, hash)).or_insert(0) += 1;

        TallyChange::Recorded { previous }
    }

    /// Live hash `reporter` holds for `block`
    pub fn hash_of(&self, block: BlockNumber, reporter: &Address) -> Option<Hash> {
        self.by_reporter.get(&(block, *reporter)).copied()
    }

    /// Number of reporters currently agreeing on `hash` for `block`
    pub fn count(&self, block: BlockNumber, hash: &Hash) -> u64 {
        self.counts.get(&(block, *hash)).copied().unwrap_or(0)
    }

    /// Drop every vote for a block before `block`
    pub fn prune_below(&mut self, block: BlockNumber) -> usize {
        let before = self.by_reporter.len();
        self.by_reporter.retain(|(b, _), _| *b >= block);
        self.counts.retain(|(b, _), _| *b >= block);
        before - self.by_reporter.len()
    }

    /// Live votes across all blocks
    pub fn len(&self) -> usize {
        self.by_reporter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_reporter.is_empty()
    }
}

/// Both thresholds must hold.
///
/// `total_reporters` is the live reporter-set size; a change in membership
/// moves the relative bar for hashes already being tallied.
pub fn quorum_reached(
    count: u64,
    total_reporters: u64,
    absolute_threshold: u16,
    relative_threshold_bps: u16,
) -> bool {
    if count < u64::from(absolute_threshold) {
        return false;
    }
    let agreed = u128::from(count) * BASIS_POINTS_DENOMINATOR;
    let required = u128::from(total_reporters) * u128::from(relative_threshold_bps);
    agreed >= required
}
