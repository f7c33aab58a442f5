//! Keyboard reading and key-to-command translation.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use petri_engine::{Command, Direction, Phase};
use std::io;

/// Blocks until a key press arrives.
///
/// Repeat and release events are filtered out so the universe advances
/// exactly once per physical press.
pub fn read_key() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

/// True for Ctrl-C, which bails out of any phase.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c' | 'C'))
}

/// Maps a key press to a session command for the current phase.
///
/// `None` means the key has no meaning right now and is dropped, which
/// keeps stray input harmless. While running, any key other than `x`
/// advances a generation.
pub fn command_for(phase: Phase, key: &KeyEvent) -> Option<Command> {
    match phase {
        Phase::AwaitingSymbols { .. } | Phase::AwaitingSeedMode => match key.code {
            KeyCode::Char(ch) => Some(Command::Input(ch)),
            _ => None,
        },
        Phase::ManualSeeding => match key.code {
            KeyCode::Char('a') | KeyCode::Left => Some(Command::Move(Direction::Left)),
            KeyCode::Char('d') | KeyCode::Right => Some(Command::Move(Direction::Right)),
            KeyCode::Char('w') | KeyCode::Up => Some(Command::Move(Direction::Up)),
            KeyCode::Char('x') | KeyCode::Down => Some(Command::Move(Direction::Down)),
            KeyCode::Char('s') => Some(Command::PlaceSeed),
            KeyCode::Char('q') => Some(Command::FinishSeeding),
            _ => None,
        },
        Phase::Running => match key.code {
            KeyCode::Char('x') => Some(Command::Quit),
            _ => Some(Command::Advance),
        },
        Phase::Terminated => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_prompt_phases_accept_any_character() {
        let phase = Phase::AwaitingSymbols {
            role: petri_engine::SymbolRole::Live,
        };
        assert_eq!(
            command_for(phase, &key(KeyCode::Char('#'))),
            Some(Command::Input('#'))
        );
        assert_eq!(
            command_for(Phase::AwaitingSeedMode, &key(KeyCode::Char('5'))),
            Some(Command::Input('5'))
        );
        assert_eq!(command_for(phase, &key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_manual_seeding_bindings() {
        let cases = [
            (KeyCode::Char('a'), Command::Move(Direction::Left)),
            (KeyCode::Char('d'), Command::Move(Direction::Right)),
            (KeyCode::Char('w'), Command::Move(Direction::Up)),
            (KeyCode::Char('x'), Command::Move(Direction::Down)),
            (KeyCode::Left, Command::Move(Direction::Left)),
            (KeyCode::Right, Command::Move(Direction::Right)),
            (KeyCode::Up, Command::Move(Direction::Up)),
            (KeyCode::Down, Command::Move(Direction::Down)),
            (KeyCode::Char('s'), Command::PlaceSeed),
            (KeyCode::Char('q'), Command::FinishSeeding),
        ];
        for (code, expected) in cases {
            assert_eq!(command_for(Phase::ManualSeeding, &key(code)), Some(expected));
        }
        assert_eq!(command_for(Phase::ManualSeeding, &key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_running_any_key_advances_x_quits() {
        assert_eq!(
            command_for(Phase::Running, &key(KeyCode::Char('x'))),
            Some(Command::Quit)
        );
        assert_eq!(
            command_for(Phase::Running, &key(KeyCode::Char(' '))),
            Some(Command::Advance)
        );
        assert_eq!(
            command_for(Phase::Running, &key(KeyCode::Enter)),
            Some(Command::Advance)
        );
    }

    #[test]
    fn test_terminated_drops_everything() {
        assert_eq!(command_for(Phase::Terminated, &key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_is_an_interrupt() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_interrupt(&ctrl_c));
        assert!(!is_interrupt(&key(KeyCode::Char('c'))));
        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert!(!is_interrupt(&ctrl_x));
    }
}
