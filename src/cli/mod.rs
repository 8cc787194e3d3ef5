//! Command-line interface components
//!
//! This module contains CLI-specific code for the Frontpage Fetcher
//! application: argument parsing and the fetch command handler.

pub mod args;
pub mod commands;

pub use args::{Cli, FetchArgs, GlobalArgs};
pub use commands::handle_fetch;
