//! In-memory reference ledger
//!
//! Backed by a `BTreeMap`, so range scans come back in lexicographic key
//! order, the same ordering contract a production ledger provides.

use std::collections::BTreeMap;

use super::errors::{LedgerError, LedgerResult};
use super::{Ledger, RangeCursor};

/// Transient ordered key-value store implementing [`Ledger`].
#[derive(Debug, Default, Clone)]
pub struct MemoryLedger {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates all entries in key order. Test and inspection helper.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Vec<u8>)> {
        self.entries.iter()
    }
}

impl Ledger for MemoryLedger {
    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> LedgerResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn range_scan(&self, start: &str, end: &str) -> LedgerResult<Box<dyn RangeCursor + '_>> {
        let entries: Vec<(String, Vec<u8>)> = self
            .entries
            .range(start.to_string()..end.to_string())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(Box::new(MemoryCursor {
            entries,
            position: 0,
            closed: false,
        }))
    }
}

/// Cursor over a snapshot of the scanned range.
struct MemoryCursor {
    entries: Vec<(String, Vec<u8>)>,
    position: usize,
    closed: bool,
}

impl RangeCursor for MemoryCursor {
    fn has_next(&self) -> bool {
        !self.closed && self.position < self.entries.len()
    }

    fn next(&mut self) -> LedgerResult<(String, Vec<u8>)> {
        if self.closed {
            return Err(LedgerError::new("cursor is closed"));
        }
        if self.position >= self.entries.len() {
            return Err(LedgerError::new("cursor is exhausted"));
        }
        let entry = self.entries[self.position].clone();
        self.position += 1;
        Ok(entry)
    }

    fn close(&mut self) {
        self.closed = true;
        self.entries.clear();
    }
}
