//! `shopcart-app`
//!
//! **Responsibility:** the terminal storefront.
//!
//! Wires the catalog source, the cart ledger and the text display together:
//! configuration, command-line arguments, the interactive session and its
//! line-oriented driver. The `shopcart` binary is a thin shell around it.

pub mod cli;
pub mod config;
pub mod repl;
pub mod session;

pub use cli::{Args, Command};
pub use config::{AppConfig, ConfigError};
pub use repl::{load, run};
pub use session::{Outcome, Session, SessionCommand, SessionError};
