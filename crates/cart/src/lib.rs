//! Cart domain module.
//!
//! This crate contains the cart ledger: line items keyed by product id, updated
//! through pure value-in/value-out transitions (no IO, no rendering).

pub mod command;
pub mod ledger;

pub use command::CartCommand;
pub use ledger::{CartLedger, LineItem};
