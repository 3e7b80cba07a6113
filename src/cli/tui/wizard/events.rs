//! Terminal events and the key actions steps react to

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events fed to the orchestrator by the render loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Emitted when no input arrived within the poll interval
    Tick,
}

impl WizardEvent {
    /// Key press with no modifiers
    pub fn key(code: KeyCode) -> Self {
        WizardEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    pub fn ctrl(c: char) -> Self {
        WizardEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }
}

/// What a key means to a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Confirm,
    Down,
    Up,
    Other,
}

impl KeyAction {
    pub fn from_key(key: &KeyEvent) -> Self {
        if key.kind == KeyEventKind::Release {
            return KeyAction::Other;
        }
        match key_name(key).as_str() {
            "ctrl+c" | "q" | "esc" => KeyAction::Quit,
            "enter" => KeyAction::Confirm,
            "down" | "j" => KeyAction::Down,
            "up" | "k" => KeyAction::Up,
            _ => KeyAction::Other,
        }
    }
}

/// Textual name of a key, e.g. `"ctrl+c"`, `"enter"`, `"j"`
pub fn key_name(key: &KeyEvent) -> String {
    let base = match key.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "shift+tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdown".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::F(n) => format!("f{}", n),
        other => format!("{:?}", other).to_lowercase(),
    };

    let mut name = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        name.push_str("ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        name.push_str("alt+");
    }
    name.push_str(&base);
    name
}
