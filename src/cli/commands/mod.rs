//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands write their report to
//! one writer and out-of-band problems to another, so they can be tested
//! against in-memory buffers.

pub mod check;
pub mod dispatcher;
pub mod fixtures;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
