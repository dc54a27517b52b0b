//! Configuration for the redemption queue

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Blocks after creation before a request can be finalized by the oracle
    pub finalize_delay_blocks: u64,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            finalize_delay_blocks: 64,
        }
    }
}
