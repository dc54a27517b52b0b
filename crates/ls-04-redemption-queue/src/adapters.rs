//! # Adapters Layer
//!
//! `OracleHorizon` on top of the oracle.

use crate::ports::outbound::OracleHorizon;
use ls_01_oracle::OracleApi;
use shared_types::BlockNumber;
use std::sync::Arc;

/// Finalization horizon from the latest committed record; pending updates do
/// not count
pub struct OracleHorizonAdapter<A>
where
    A: OracleApi,
{
    oracle: Arc<A>,
}

impl<A> OracleHorizonAdapter<A>
where
    A: OracleApi,
{
    pub fn new(oracle: Arc<A>) -> Self {
        Self { oracle }
    }
}

impl<A> OracleHorizon for OracleHorizonAdapter<A>
where
    A: OracleApi,
{
    fn latest_end_block(&self) -> BlockNumber {
        self.oracle.latest_record().update_end_block
    }
}
