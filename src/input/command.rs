//! Game commands decoded from keystrokes.

use crate::game::Direction;

/// One discrete action requested by the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move the cursor one row up.
    MoveUp,
    /// Move the cursor one row down.
    MoveDown,
    /// Move the cursor one column left.
    MoveLeft,
    /// Move the cursor one column right.
    MoveRight,
    /// Mark the cell under the cursor.
    Select,
    /// Start a new game (only honored once a game has finished).
    Restart,
    /// Leave the program.
    Quit,
    /// Unrecognized input.
    Noop,
}

impl Command {
    /// Cursor direction for movement commands.
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::MoveUp => Some(Direction::Up),
            Self::MoveDown => Some(Direction::Down),
            Self::MoveLeft => Some(Direction::Left),
            Self::MoveRight => Some(Direction::Right),
            _ => None,
        }
    }
}
