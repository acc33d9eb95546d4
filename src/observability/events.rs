//! Observable events
//!
//! Typed names for the events the state machine emits, so call sites cannot
//! drift on spelling.

use std::fmt;

/// Observable events during contract execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// One seed row written to the ledger
    SeedRecordWritten,
    /// Seed operation finished
    SeedComplete,
    /// Range query assembled its result array
    RangeScanComplete,
    /// An invocation was rejected before reaching the ledger
    InvokeRejected,
}

impl Event {
    /// String form used in log output
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SeedRecordWritten => "SEED_RECORD_WRITTEN",
            Event::SeedComplete => "SEED_COMPLETE",
            Event::RangeScanComplete => "RANGE_SCAN_COMPLETE",
            Event::InvokeRejected => "INVOKE_REJECTED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
