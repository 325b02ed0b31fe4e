//! Key bindings.

use crossterm::event::KeyCode;
use intersections_core::{Action, Position};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the pool cursor by this many cards (wraps).
    Cursor(isize),
    /// Toggle selection of the card under the cursor.
    Pick,
    /// Forward an intent to the game.
    Game(Action),
    /// Leave the game.
    Quit,
}

/// Key help shown under the board.
pub const KEY_HELP: &str =
    "←/→ move  Space pick  w/d/s/a place  W/D/S/A remove  Enter submit  r reset  q quit";

/// Maps a key to a command. Unbound keys map to `None`.
///
/// `w`/`d`/`s`/`a` follow the board's diamond: top, right, bottom, left.
/// Shifted, they take the card back off.
pub fn command_for(key: KeyCode) -> Option<Command> {
    use Position::*;

    let command = match key {
        KeyCode::Left | KeyCode::Char('h') => Command::Cursor(-1),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Command::Cursor(1),
        KeyCode::BackTab => Command::Cursor(-1),
        KeyCode::Char(' ') => Command::Pick,

        KeyCode::Char('w') | KeyCode::Up => Command::Game(Action::Place(Top)),
        KeyCode::Char('d') => Command::Game(Action::Place(Right)),
        KeyCode::Char('s') | KeyCode::Down => Command::Game(Action::Place(Bottom)),
        KeyCode::Char('a') => Command::Game(Action::Place(Left)),

        KeyCode::Char('W') => Command::Game(Action::Remove(Top)),
        KeyCode::Char('D') => Command::Game(Action::Remove(Right)),
        KeyCode::Char('S') => Command::Game(Action::Remove(Bottom)),
        KeyCode::Char('A') => Command::Game(Action::Remove(Left)),

        KeyCode::Enter => Command::Game(Action::Submit),
        KeyCode::Char('r') => Command::Game(Action::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diamond_keys_place_and_remove() {
        assert_eq!(
            command_for(KeyCode::Char('w')),
            Some(Command::Game(Action::Place(Position::Top)))
        );
        assert_eq!(
            command_for(KeyCode::Char('a')),
            Some(Command::Game(Action::Place(Position::Left)))
        );
        assert_eq!(
            command_for(KeyCode::Char('D')),
            Some(Command::Game(Action::Remove(Position::Right)))
        );
    }

    #[test]
    fn test_cursor_and_control_keys() {
        assert_eq!(command_for(KeyCode::Left), Some(Command::Cursor(-1)));
        assert_eq!(command_for(KeyCode::Tab), Some(Command::Cursor(1)));
        assert_eq!(command_for(KeyCode::Char(' ')), Some(Command::Pick));
        assert_eq!(
            command_for(KeyCode::Enter),
            Some(Command::Game(Action::Submit))
        );
        assert_eq!(command_for(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(command_for(KeyCode::Char('z')), None);
        assert_eq!(command_for(KeyCode::Char('7')), None);
    }
}
