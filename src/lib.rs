pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;
pub mod storage;

pub use crate::controllers::view::{
    DisplayError, DisplaySink, Frame, ViewCommand, ViewController, ViewError, ViewHistory,
    ViewTransition,
};
pub use crate::core::actions::render_grid::errors::RenderGridError;
pub use crate::core::actions::render_grid::render_grid;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_grid::EscapeGrid;
pub use crate::core::data::extent::Extent;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, escape_iterations};
pub use crate::input::cli::args::Args;
pub use crate::input::commands::{SessionError, SessionSummary, run_session};
pub use crate::presenters::file::ppm::PpmDisplaySink;
