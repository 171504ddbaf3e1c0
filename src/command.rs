use crate::game::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Esc,
    N,
    P,
    Q,
    R,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if (ev.modifiers, ev.code) == (KeyModifiers::CONTROL, KeyCode::Char('c')) {
            return Some(Command::Quit);
        }
        if !normal_modifiers.contains(ev.modifiers) {
            return None;
        }
        match ev.code {
            KeyCode::Char('w' | 'W' | 'k' | 'K') | KeyCode::Up => Some(Command::Up),
            KeyCode::Char('s' | 'S' | 'j' | 'J') | KeyCode::Down => Some(Command::Down),
            KeyCode::Char('a' | 'A' | 'h' | 'H') | KeyCode::Left => Some(Command::Left),
            KeyCode::Char('d' | 'D' | 'l' | 'L') | KeyCode::Right => Some(Command::Right),
            KeyCode::Enter => Some(Command::Enter),
            KeyCode::Char(' ') => Some(Command::Space),
            KeyCode::Esc => Some(Command::Esc),
            KeyCode::Char('n' | 'N') => Some(Command::N),
            KeyCode::Char('p' | 'P') => Some(Command::P),
            KeyCode::Char('q' | 'Q') => Some(Command::Q),
            KeyCode::Char('r' | 'R') => Some(Command::R),
            _ => None,
        }
    }

    /// The game input this command stands for, if any.  Quitting is handled
    /// by the application rather than the game.
    pub(crate) fn intent(self) -> Option<Intent> {
        match self {
            Command::Up => Some(Intent::Up),
            Command::Down => Some(Intent::Down),
            Command::Left => Some(Intent::Left),
            Command::Right => Some(Intent::Right),
            Command::Space | Command::Esc | Command::P => Some(Intent::TogglePause),
            Command::Enter | Command::N | Command::R => Some(Intent::NewGame),
            Command::Quit | Command::Q => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, KeyModifiers::NONE, Some(Command::Up))]
    #[case(KeyCode::Char('w'), KeyModifiers::NONE, Some(Command::Up))]
    #[case(KeyCode::Char('K'), KeyModifiers::SHIFT, Some(Command::Up))]
    #[case(KeyCode::Char('j'), KeyModifiers::NONE, Some(Command::Down))]
    #[case(KeyCode::Left, KeyModifiers::NONE, Some(Command::Left))]
    #[case(KeyCode::Char('d'), KeyModifiers::NONE, Some(Command::Right))]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Command::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::NONE, None)]
    #[case(KeyCode::Char('w'), KeyModifiers::CONTROL, None)]
    #[case(KeyCode::Char('w'), KeyModifiers::ALT, None)]
    #[case(KeyCode::Char(' '), KeyModifiers::NONE, Some(Command::Space))]
    #[case(KeyCode::Esc, KeyModifiers::NONE, Some(Command::Esc))]
    #[case(KeyCode::Enter, KeyModifiers::NONE, Some(Command::Enter))]
    #[case(KeyCode::Char('q'), KeyModifiers::NONE, Some(Command::Q))]
    #[case(KeyCode::Char('r'), KeyModifiers::NONE, Some(Command::R))]
    #[case(KeyCode::Tab, KeyModifiers::NONE, None)]
    fn test_from_key_event(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] cmd: Option<Command>,
    ) {
        assert_eq!(Command::from_key_event(KeyEvent::new(code, modifiers)), cmd);
    }

    #[rstest]
    #[case(Command::Up, Some(Intent::Up))]
    #[case(Command::Right, Some(Intent::Right))]
    #[case(Command::P, Some(Intent::TogglePause))]
    #[case(Command::Space, Some(Intent::TogglePause))]
    #[case(Command::Esc, Some(Intent::TogglePause))]
    #[case(Command::N, Some(Intent::NewGame))]
    #[case(Command::Enter, Some(Intent::NewGame))]
    #[case(Command::Q, None)]
    #[case(Command::Quit, None)]
    fn test_intent(#[case] cmd: Command, #[case] intent: Option<Intent>) {
        assert_eq!(cmd.intent(), intent);
    }
}
