//! Contract schema layer
//!
//! A [`ContractDefinition`] describes everything variant-specific about a
//! deployed contract: key prefix, ordered record fields, seed rows, and the
//! operation-name table. Definitions are validated data, loadable from disk
//! or taken from the built-in [`catalog`].

pub mod catalog;
mod errors;
mod loader;
mod types;

pub use errors::{DefinitionError, DefinitionResult};
pub use loader::DefinitionLoader;
pub use types::{ContractDefinition, OperationNames};
