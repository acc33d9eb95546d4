//! Contract execution layer
//!
//! The invocation surface a host transport drives:
//!
//! - [`ContractHandler::init`] — instantiation, always trivially successful
//! - [`ContractHandler::invoke`] — exact-name dispatch to one of the five
//!   operations (seed, create, point query, range query, field update)
//!
//! Handlers validate argument counts, touch the ledger in written order, and
//! recover every error into a failure [`Response`] at the boundary. No
//! retries; retry policy belongs to the transport.
//!
//! ```
//! use lpnstore::contract::ContractHandler;
//! use lpnstore::ledger::MemoryLedger;
//! use lpnstore::schema::catalog;
//!
//! let handler = ContractHandler::new(catalog::lpn()).unwrap();
//! let mut ledger = MemoryLedger::new();
//!
//! let resp = handler.invoke(&mut ledger, "initLedger", &[]);
//! assert!(resp.is_success());
//! ```

mod errors;
mod handler;
mod response;
mod router;

pub use errors::{ContractError, ContractResult};
pub use handler::ContractHandler;
pub use response::Response;
pub use router::{Operation, Router};
