use std::fs::File;
use std::io::{self, BufReader};

use clap::Parser;
use mandelbrot_zoom::{Args, PpmDisplaySink, ViewController, run_session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let args = Args::parse();
    let viewport = args.viewport()?;

    tracing::info!(
        width = args.width,
        height = args.height,
        output = %args.output.display(),
        threads = rayon::current_num_threads(),
        "starting"
    );

    let sink = PpmDisplaySink::new(&args.output);
    let mut controller =
        ViewController::new(viewport, args.width as usize, args.height as usize, sink)?;
    controller.refresh()?;

    let summary = match &args.commands {
        Some(path) => run_session(&mut controller, BufReader::new(File::open(path)?))?,
        None => run_session(&mut controller, io::stdin().lock())?,
    };

    tracing::info!(
        zoomed_in = summary.zoomed_in,
        zoomed_out = summary.zoomed_out,
        ignored = summary.ignored,
        malformed = summary.malformed,
        history_depth = controller.history().len(),
        "session finished"
    );

    Ok(())
}
