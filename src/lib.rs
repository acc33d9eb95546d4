//! lpnstore - A record-management state machine for serialized LPN trace
//! records on an ordered key-value ledger
//!
//! The ledger itself (durability, consensus, multi-version concurrency) is an
//! external capability consumed through the [`ledger::Ledger`] trait. This
//! crate owns the record schema, the key scheme, and the operation handlers
//! that a host transport invokes by name with string arguments.

pub mod contract;
pub mod keys;
pub mod ledger;
pub mod observability;
pub mod record;
pub mod schema;
