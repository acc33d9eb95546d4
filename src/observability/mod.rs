//! Observability
//!
//! Structured logging for contract execution:
//!
//! - one line = one event, as a single JSON object
//! - explicit severity levels
//! - deterministic key ordering (`event`, `severity`, then sorted fields)
//! - synchronous, no buffering
//!
//! ```
//! use lpnstore::observability::{Event, Logger};
//!
//! Logger::info(Event::SeedComplete.as_str(), &[("rows", "4")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
