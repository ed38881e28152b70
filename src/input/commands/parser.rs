use thiserror::Error;

/// One user action read from a command line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse click at a plane coordinate.
    Click { x: f64, y: f64 },
    /// Key press.
    Key(char),
    /// End of the session.
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{command}` expects {expected} argument(s), got {got}")]
    WrongArgumentCount {
        command: String,
        expected: usize,
        got: usize,
    },
    #[error("`{0}` is not a finite number")]
    InvalidNumber(String),
    #[error("`{0}` is not a single key")]
    InvalidKey(String),
}

/// Parses one line of input. Blank lines and `#` comments yield `None`.
///
/// ```text
/// click -0.5 0.25
/// zoom 0 0
/// key b
/// b
/// quit
/// ```
pub fn parse_line(line: &str) -> Result<Option<InputEvent>, CommandParseError> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();
    let command = command.to_ascii_lowercase();

    let event = match command.as_str() {
        "click" | "zoom" => {
            expect_args(&command, &args, 2)?;
            InputEvent::Click {
                x: parse_number(args[0])?,
                y: parse_number(args[1])?,
            }
        }
        "key" => {
            expect_args(&command, &args, 1)?;
            InputEvent::Key(parse_key(args[0])?)
        }
        "quit" | "exit" => {
            expect_args(&command, &args, 0)?;
            InputEvent::Quit
        }
        _ if args.is_empty() && command.chars().count() == 1 => {
            InputEvent::Key(parse_key(&command)?)
        }
        _ => return Err(CommandParseError::UnknownCommand(command)),
    };

    Ok(Some(event))
}

fn expect_args(command: &str, args: &[&str], expected: usize) -> Result<(), CommandParseError> {
    if args.len() != expected {
        return Err(CommandParseError::WrongArgumentCount {
            command: command.to_string(),
            expected,
            got: args.len(),
        });
    }

    Ok(())
}

fn parse_number(word: &str) -> Result<f64, CommandParseError> {
    word.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CommandParseError::InvalidNumber(word.to_string()))
}

fn parse_key(word: &str) -> Result<char, CommandParseError> {
    let mut chars = word.chars();

    match (chars.next(), chars.next()) {
        (Some(key), None) => Ok(key.to_ascii_lowercase()),
        _ => Err(CommandParseError::InvalidKey(word.to_string())),
    }
}
