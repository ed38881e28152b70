//! Port definitions for the view controller.

pub mod display_sink;
