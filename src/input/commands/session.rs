use std::io::BufRead;

use thiserror::Error;

use crate::controllers::view::{DisplaySink, ViewCommand, ViewController, ViewError, ViewTransition};
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::input::commands::parser::{InputEvent, parse_line};

/// The key bound to "go back one view".
pub const GO_BACK_KEY: char = 'b';

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read commands: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    View(#[from] ViewError),
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub zoomed_in: usize,
    pub zoomed_out: usize,
    /// Events that reached no command or changed nothing.
    pub ignored: usize,
    pub malformed: usize,
}

/// Maps an input event onto a controller command as the display would:
/// clicks off the plotted region and unbound keys produce nothing.
#[must_use]
pub fn to_view_command(event: InputEvent, viewport: &Viewport) -> Option<ViewCommand> {
    match event {
        InputEvent::Click { x, y } if viewport.contains(Complex::new(x, y)) => {
            Some(ViewCommand::ZoomIn { x, y })
        }
        InputEvent::Key(GO_BACK_KEY) => Some(ViewCommand::ZoomOut),
        InputEvent::Click { .. } | InputEvent::Key(_) | InputEvent::Quit => None,
    }
}

/// Feeds commands from `reader` to `controller` one line at a time until
/// `quit` or end of input.
///
/// Malformed lines and zooms past what `f64` can represent are logged and
/// skipped. Render and display failures end the session.
pub fn run_session<S, R>(
    controller: &mut ViewController<S>,
    reader: R,
) -> Result<SessionSummary, SessionError>
where
    S: DisplaySink,
    R: BufRead,
{
    let mut summary = SessionSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;

        let event = match parse_line(&line) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!(line = index + 1, error = %e, "skipping malformed command");
                summary.malformed += 1;
                continue;
            }
        };

        if event == InputEvent::Quit {
            break;
        }

        let Some(command) = to_view_command(event, controller.viewport()) else {
            tracing::debug!(?event, "event has no command in the current view");
            summary.ignored += 1;
            continue;
        };

        match controller.dispatch(command) {
            Ok(ViewTransition::ZoomedIn) => summary.zoomed_in += 1,
            Ok(ViewTransition::ZoomedOut) => summary.zoomed_out += 1,
            Ok(ViewTransition::Unchanged | ViewTransition::Ignored) => summary.ignored += 1,
            Err(ViewError::Viewport(e)) => {
                tracing::warn!(line = index + 1, error = %e, "view cannot zoom any further");
                summary.ignored += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::view::{DisplayError, Frame};
    use std::io::Cursor;

    #[derive(Default)]
    struct CountingSink {
        presented: usize,
    }

    impl DisplaySink for CountingSink {
        fn present(&mut self, _: &Frame) -> Result<(), DisplayError> {
            self.presented += 1;
            Ok(())
        }
    }

    fn controller() -> ViewController<CountingSink> {
        ViewController::new(Viewport::default(), 8, 8, CountingSink::default()).unwrap()
    }

    #[test]
    fn test_to_view_command_filters_clicks_off_the_plot() {
        let viewport = Viewport::default();

        assert_eq!(
            to_view_command(InputEvent::Click { x: 0.0, y: 0.0 }, &viewport),
            Some(ViewCommand::ZoomIn { x: 0.0, y: 0.0 })
        );
        assert_eq!(to_view_command(InputEvent::Click { x: 3.0, y: 0.0 }, &viewport), None);
    }

    #[test]
    fn test_to_view_command_binds_only_the_go_back_key() {
        let viewport = Viewport::default();

        assert_eq!(
            to_view_command(InputEvent::Key('b'), &viewport),
            Some(ViewCommand::ZoomOut)
        );
        assert_eq!(to_view_command(InputEvent::Key('r'), &viewport), None);
        assert_eq!(to_view_command(InputEvent::Quit, &viewport), None);
    }

    #[test]
    fn test_run_session_applies_commands_in_order() {
        let mut controller = controller();
        let input = Cursor::new("click 0 0\nclick 0.1 0.1\nb\n# comment\nb\nb\n");

        let summary = run_session(&mut controller, input).unwrap();

        assert_eq!(
            summary,
            SessionSummary {
                zoomed_in: 2,
                zoomed_out: 2,
                ignored: 1,
                malformed: 0
            }
        );
        assert_eq!(*controller.viewport(), Viewport::default());
        assert_eq!(controller.sink().presented, 4);
    }

    #[test]
    fn test_run_session_stops_at_quit() {
        let mut controller = controller();
        let input = Cursor::new("click 0 0\nquit\nclick 0 0\n");

        let summary = run_session(&mut controller, input).unwrap();

        assert_eq!(summary.zoomed_in, 1);
        assert_eq!(controller.history().len(), 1);
    }

    #[test]
    fn test_run_session_skips_malformed_and_off_plot_input() {
        let mut controller = controller();
        let input = Cursor::new("wiggle\nclick 5 5\nkey x\nclick 0\n");

        let summary = run_session(&mut controller, input).unwrap();

        assert_eq!(summary.malformed, 2);
        assert_eq!(summary.ignored, 2);
        assert_eq!(controller.sink().presented, 0);
    }

    #[test]
    fn test_run_session_survives_zoom_past_f64_precision() {
        let x_max = f64::from_bits(0.1_f64.to_bits() + 1);
        let y_max = f64::from_bits(0.2_f64.to_bits() + 1);
        let narrow = Viewport::new(0.1, x_max, 0.2, y_max, 10).unwrap();
        let mut controller = ViewController::new(narrow, 2, 2, CountingSink::default()).unwrap();
        let input = Cursor::new("click 0.1 0.2\nclick 0.1 0.2\n");

        let summary = run_session(&mut controller, input).unwrap();

        assert_eq!(summary.ignored, 2);
        assert_eq!(summary.zoomed_in, 0);
        assert_eq!(*controller.viewport(), narrow);
        assert!(controller.history().is_empty());
        assert_eq!(controller.sink().presented, 0);
    }
}
