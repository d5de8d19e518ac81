use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Input;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Game(Input),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Game(Input::MoveUp),
            KeyCode::Down => KeyAction::Game(Input::MoveDown),
            KeyCode::Left => KeyAction::Game(Input::MoveLeft),
            KeyCode::Right => KeyAction::Game(Input::MoveRight),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Game(Input::MoveUp),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Game(Input::MoveDown),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Game(Input::MoveLeft),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Game(Input::MoveRight),

            // Controls
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
                KeyAction::Game(Input::Restart)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
