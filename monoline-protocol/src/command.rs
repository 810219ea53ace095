//! Command table and line parser
//!
//! A line is split on [`DELIMITERS`]. The first token must match a
//! [`CommandSpec`] name exactly (case-sensitive); the remaining tokens are
//! decimal integers and there must be exactly as many as the command
//! takes.

use heapless::Vec;

/// Token separators
pub const DELIMITERS: &[char] = &[' ', ',', '\t'];

/// Most arguments any command takes
pub const MAX_ARGS: usize = 4;

// Command names as typed on the console
pub const CMD_DRAW_SCREEN_LINE: &str = "nokLcdDrawScrnLine";
pub const CMD_DRAW_LINE: &str = "nokLcdDrawLine";
pub const CMD_CLEAR: &str = "nokLcdClear";
pub const CMD_SET_PIXEL: &str = "nokLcdSetPixel";
pub const CMD_CLEAR_PIXEL: &str = "nokLcdClearPixel";

/// One entry of the command table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Name matched against the first token
    pub name: &'static str,
    /// Number of integer arguments
    pub args: usize,
}

/// Every command the console accepts
pub const COMMANDS: [CommandSpec; 5] = [
    CommandSpec {
        name: CMD_DRAW_SCREEN_LINE,
        args: 3,
    },
    CommandSpec {
        name: CMD_DRAW_LINE,
        args: 4,
    },
    CommandSpec {
        name: CMD_CLEAR,
        args: 0,
    },
    CommandSpec {
        name: CMD_SET_PIXEL,
        args: 2,
    },
    CommandSpec {
        name: CMD_CLEAR_PIXEL,
        args: 2,
    },
];

/// A validated console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Ray from `(x, y)` to the panel edge; `mode` 0 is horizontal, 1 vertical
    ScreenLine { x: i32, y: i32, mode: i32 },
    /// Segment between two points
    Line { x0: i32, y0: i32, x1: i32, y1: i32 },
    /// Blank the panel
    Clear,
    /// Turn one pixel on
    SetPixel { x: i32, y: i32 },
    /// Turn one pixel off
    ClearPixel { x: i32, y: i32 },
}

impl Command {
    /// Name of this command in the table
    pub fn name(&self) -> &'static str {
        match self {
            Command::ScreenLine { .. } => CMD_DRAW_SCREEN_LINE,
            Command::Line { .. } => CMD_DRAW_LINE,
            Command::Clear => CMD_CLEAR,
            Command::SetPixel { .. } => CMD_SET_PIXEL,
            Command::ClearPixel { .. } => CMD_CLEAR_PIXEL,
        }
    }

    /// Numeric status reported when this command fails
    ///
    /// Pixel commands report `1`, line and clear commands `-1`. Success is
    /// always `0`.
    pub fn failure_code(&self) -> i32 {
        match self {
            Command::SetPixel { .. } | Command::ClearPixel { .. } => 1,
            _ => -1,
        }
    }

    fn from_args(index: usize, args: &[i32]) -> Result<Self, ParseError> {
        let command = match (index, args) {
            (0, &[x, y, mode]) => Command::ScreenLine { x, y, mode },
            (1, &[x0, y0, x1, y1]) => Command::Line { x0, y0, x1, y1 },
            (2, &[]) => Command::Clear,
            (3, &[x, y]) => Command::SetPixel { x, y },
            (4, &[x, y]) => Command::ClearPixel { x, y },
            _ => return Err(ParseError::UnknownCommand),
        };
        Ok(command)
    }
}

/// Why a line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Nothing but delimiters
    Empty,
    /// First token is not in [`COMMANDS`]
    UnknownCommand,
    /// Too few or too many arguments
    WrongArgumentCount { expected: usize, found: usize },
    /// Argument at this position is not a decimal `i32`
    InvalidArgument { position: usize },
}

/// Look up a command name
pub fn find_command(name: &str) -> Option<(usize, &'static CommandSpec)> {
    COMMANDS.iter().enumerate().find(|(_, spec)| spec.name == name)
}

fn tokens(line: &str) -> impl Iterator<Item = &str> + Clone {
    line.split(DELIMITERS).filter(|token| !token.is_empty())
}

/// Parse one console line
///
/// A trailing line terminator is ignored.
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    let mut tokens = tokens(line);

    let name = tokens.next().ok_or(ParseError::Empty)?;
    let (index, spec) = find_command(name).ok_or(ParseError::UnknownCommand)?;

    let found = tokens.clone().count();
    if found != spec.args {
        return Err(ParseError::WrongArgumentCount {
            expected: spec.args,
            found,
        });
    }

    let mut args: Vec<i32, MAX_ARGS> = Vec::new();
    for (position, token) in tokens.enumerate() {
        let value = token
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidArgument { position })?;
        args.push(value).map_err(|_| ParseError::WrongArgumentCount {
            expected: spec.args,
            found,
        })?;
    }

    Command::from_args(index, &args)
}
