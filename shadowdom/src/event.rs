use crate::document::NodeId;

/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event, targeted at focused element
    Key {
        target: Option<NodeId>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Mouse click event, targeted at the deepest clickable element
    Click {
        target: Option<NodeId>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Mouse wheel event, targeted at the nearest scroll container
    Scroll {
        target: Option<NodeId>,
        x: u16,
        y: u16,
        delta_y: i16,
    },
    /// Element gained focus
    Focus { target: NodeId },
    /// Element lost focus
    Blur {
        target: NodeId,
        new_target: Option<NodeId>,
    },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

impl Event {
    /// The element the event is addressed to, if any.
    pub fn target(&self) -> Option<NodeId> {
        match self {
            Event::Key { target, .. }
            | Event::Click { target, .. }
            | Event::Scroll { target, .. } => *target,
            Event::Focus { target } | Event::Blur { target, .. } => Some(*target),
            Event::Resize { .. } => None,
        }
    }
}

/// Keys the document routes. Space arrives as `Char(' ')`; anything without
/// a variant here (function keys, paging, media keys) is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Other,
}

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            _ => Key::Other,
        }
    }
}

/// Modifier keys held during a key press. Shift is folded into `Char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }

    /// No modifier held.
    pub fn none(&self) -> bool {
        *self == Self::default()
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(button: crossterm::event::MouseButton) -> Self {
        match button {
            crossterm::event::MouseButton::Left => MouseButton::Left,
            crossterm::event::MouseButton::Right => MouseButton::Right,
            crossterm::event::MouseButton::Middle => MouseButton::Middle,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    #[test]
    fn unmapped_keys_become_other() {
        assert_eq!(Key::from(KeyCode::Char(' ')), Key::Char(' '));
        assert_eq!(Key::from(KeyCode::Esc), Key::Escape);
        assert_eq!(Key::from(KeyCode::F(5)), Key::Other);
        assert_eq!(Key::from(KeyCode::PageDown), Key::Other);
    }

    #[test]
    fn modifiers_from_crossterm() {
        let mods = Modifiers::from(KeyModifiers::CONTROL | KeyModifiers::SHIFT);
        assert!(mods.ctrl && mods.shift && !mods.alt);
        assert!(!mods.none());
        assert!(Modifiers::from(KeyModifiers::NONE).none());
    }
}
