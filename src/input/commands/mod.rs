//! Line-oriented input source: each line is a click or a key press.

pub mod parser;
pub mod session;

pub use parser::{CommandParseError, InputEvent, parse_line};
pub use session::{GO_BACK_KEY, SessionError, SessionSummary, run_session, to_view_command};
