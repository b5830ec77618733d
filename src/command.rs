use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Pause,
    Restart,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (KeyModifiers::NONE, KeyCode::Char('p' | ' ')) | (_, KeyCode::Esc) => {
                Some(Command::Pause)
            }
            (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Command::Restart),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), Some(Command::Quit))]
    #[case(KeyEvent::from(KeyCode::Char('q')), Some(Command::Quit))]
    #[case(KeyEvent::from(KeyCode::Up), Some(Command::Up))]
    #[case(KeyEvent::from(KeyCode::Char('a')), Some(Command::Left))]
    #[case(KeyEvent::from(KeyCode::Char('j')), Some(Command::Down))]
    #[case(KeyEvent::from(KeyCode::Right), Some(Command::Right))]
    #[case(KeyEvent::from(KeyCode::Esc), Some(Command::Pause))]
    #[case(KeyEvent::from(KeyCode::Char('r')), Some(Command::Restart))]
    #[case(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL), None)]
    #[case(KeyEvent::from(KeyCode::Char('x')), None)]
    fn test_from_key_event(#[case] ev: KeyEvent, #[case] r: Option<Command>) {
        assert_eq!(Command::from_key_event(ev), r);
    }
}
