//! View controller for interactive zooming.
//!
//! Holds the current viewport and the zoom history, applies the zoom rule,
//! and pushes a fresh frame to a [`DisplaySink`] after every change.
//!
//! # Architecture
//!
//! - **Input**: [`ViewCommand`] values, one per user action
//! - **Output**: the [`DisplaySink`] port
//! - **Core**: grid rendering from `core/`

pub mod commands;
mod controller;
pub mod data;
pub mod errors;
pub mod history;
pub mod ports;

pub use commands::{ViewCommand, ViewTransition};
pub use controller::ViewController;
pub use data::frame::Frame;
pub use errors::ViewError;
pub use history::ViewHistory;
pub use ports::display_sink::{DisplayError, DisplaySink};
