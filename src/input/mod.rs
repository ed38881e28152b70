//! Input adapters.
//!
//! Receive user input from a source and translate it into view commands.

pub mod cli;
pub mod commands;
