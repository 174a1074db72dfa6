//! CLI module - Command-line interface for the application.
//!
//! - `serve` - Create missing tables and start the HTTP server
//! - `migrate` - Manual schema management

pub mod args;

pub use args::{Cli, Commands};
