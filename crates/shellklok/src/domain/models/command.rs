use super::Key;

/// Single-key commands understood by the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Menu,
    CycleColor,
    CycleFont,
    ToggleSeconds,
    ToggleMode,
}

impl Command {
    pub fn parse(key: Key) -> Option<Command> {
        return match key {
            Key::Char('q') | Key::Char('x') | Key::Interrupt => Some(Command::Quit),
            Key::Char('h') => Some(Command::Help),
            Key::Char('m') => Some(Command::Menu),
            Key::Char('c') => Some(Command::CycleColor),
            Key::Char('f') => Some(Command::CycleFont),
            Key::Char('s') => Some(Command::ToggleSeconds),
            Key::Char('a') => Some(Command::ToggleMode),
            _ => None,
        };
    }
}

/// Keys understood inside the settings menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Decrease,
    Increase,
    Commit,
}

impl MenuInput {
    pub fn parse(key: Key) -> Option<MenuInput> {
        return match key {
            Key::Up | Key::Char('k') => Some(MenuInput::Up),
            Key::Down | Key::Char('j') => Some(MenuInput::Down),
            Key::Left | Key::Char('h') => Some(MenuInput::Decrease),
            Key::Right | Key::Char('l') => Some(MenuInput::Increase),
            Key::Enter | Key::Char('m') | Key::Interrupt => Some(MenuInput::Commit),
            _ => None,
        };
    }
}
