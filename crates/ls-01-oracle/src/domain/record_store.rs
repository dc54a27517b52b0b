//! Append-only record log
//!
//! Index 0 always holds the zero-valued bootstrap record, so the log is never
//! empty and every later record has a predecessor to validate against.

use crate::error::{OracleError, OracleResult};
use serde::{Deserialize, Serialize};
use shared_types::{BlockNumber, OracleRecord};

/// Ordered sequence of committed oracle records
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordStore {
    records: Vec<OracleRecord>,
}

impl RecordStore {
    /// Create a log holding only the bootstrap record
    pub fn new(initialization_block: BlockNumber) -> Self {
        Self {
            records: vec![OracleRecord::bootstrap(initialization_block)],
        }
    }

    /// Most recently committed record
    pub fn latest(&self) -> &OracleRecord {
        // never empty: construction seeds the bootstrap record and nothing removes it
        &self.records[self.records.len() - 1]
    }

    /// Index of the latest record
    pub fn latest_index(&self) -> usize {
        self.records.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&OracleRecord> {
        self.records.get(index)
    }

    /// Number of records including the bootstrap record
    pub fn num_records(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OracleRecord> {
        self.records.iter()
    }

    /// Append a record and return its index
    pub(crate) fn push(&mut self, record: OracleRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Undo the most recent `push`. The bootstrap record is never removed.
    pub(crate) fn revert_push(&mut self, index: usize) {
        if index > 0 && index == self.latest_index() {
            self.records.pop();
        }
    }

    /// Overwrite a committed, non-initial record keeping its window bounds.
    /// Returns the replaced record.
    pub(crate) fn replace(&mut self, index: usize, record: OracleRecord) -> OracleResult<OracleRecord> {
        if index == 0 {
            return Err(OracleError::CannotModifyInitialRecord);
        }
        let slot = self
            .records
            .get_mut(index)
            .ok_or(OracleError::RecordNotFound { index })?;
        if slot.update_start_block != record.update_start_block
            || slot.update_end_block != record.update_end_block
        {
            return Err(OracleError::InvalidRecordModification);
        }
        Ok(std::mem::replace(slot, record))
    }
}
