//! # Adapters Layer
//!
//! `LatestRecordSource` on top of the oracle.

use crate::ports::outbound::LatestRecordSource;
use ls_01_oracle::OracleApi;
use shared_types::OracleRecord;
use std::sync::Arc;

/// Reads the oracle's latest committed record; pending updates are ignored
pub struct OracleRecordSource<A>
where
    A: OracleApi,
{
    oracle: Arc<A>,
}

impl<A> OracleRecordSource<A>
where
    A: OracleApi,
{
    pub fn new(oracle: Arc<A>) -> Self {
        Self { oracle }
    }
}

impl<A> LatestRecordSource for OracleRecordSource<A>
where
    A: OracleApi,
{
    fn latest_record(&self) -> OracleRecord {
        self.oracle.latest_record()
    }
}
