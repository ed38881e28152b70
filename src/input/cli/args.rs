use std::path::PathBuf;

use clap::Parser;

use crate::core::data::viewport::{DEFAULT_MAX_ITERATIONS, Viewport, ViewportError};

/// Interactive Mandelbrot zoom.
///
/// Reads one command per line (`click <x> <y>`, `b` to go back, `quit`) and
/// rewrites the output image after every change of view.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "mandelbrot_zoom", version)]
pub struct Args {
    /// Left edge of the initial view
    #[arg(long, default_value_t = -2.0, allow_negative_numbers = true)]
    pub x_min: f64,

    /// Right edge of the initial view
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub x_max: f64,

    /// Bottom edge of the initial view
    #[arg(long, default_value_t = -1.5, allow_negative_numbers = true)]
    pub y_min: f64,

    /// Top edge of the initial view
    #[arg(long, default_value_t = 1.5, allow_negative_numbers = true)]
    pub y_max: f64,

    /// Grid width in samples
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Grid height in samples
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Escape-time budget of the initial view
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Image rewritten on every refresh
    #[arg(long, default_value = "mandelbrot.ppm")]
    pub output: PathBuf,

    /// Read commands from this file instead of stdin
    #[arg(long)]
    pub commands: Option<PathBuf>,
}

impl Args {
    pub fn viewport(&self) -> Result<Viewport, ViewportError> {
        Viewport::new(
            self.x_min,
            self.x_max,
            self.y_min,
            self.y_max,
            self.max_iterations,
        )
    }
}
