//! Event handling for the select component.

use shadowdom::{Key, Modifiers};

use super::state::{SelectionChange, Transition, VisibilityChange};

/// What a key press does while the widget has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Space: open or close the list.
    Toggle,
    /// ArrowUp.
    Previous,
    /// ArrowDown.
    Next,
    /// Enter or Escape.
    Close,
    /// A printable character for type-ahead search.
    Search(char),
    /// Not handled by the widget.
    Ignore,
}

/// Map a key press to its widget behavior.
pub fn key_action(key: Key, modifiers: Modifiers) -> KeyAction {
    match key {
        Key::Char(' ') => KeyAction::Toggle,
        Key::Up => KeyAction::Previous,
        Key::Down => KeyAction::Next,
        Key::Enter | Key::Escape => KeyAction::Close,
        Key::Char(c) if !modifiers.ctrl && !modifiers.alt && !c.is_control() => {
            KeyAction::Search(c)
        }
        _ => KeyAction::Ignore,
    }
}

/// Pending notifications produced by one dispatched event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetEvents {
    pub selection_change: Option<SelectionChange>,
    pub visibility_change: Option<VisibilityChange>,
}

impl WidgetEvents {
    pub fn is_empty(&self) -> bool {
        self.selection_change.is_none() && self.visibility_change.is_none()
    }

    /// Fold a transition in, keeping the earliest `previous` of each kind.
    /// Changes that cancel out are dropped.
    pub(super) fn absorb(&mut self, transition: Transition) {
        if let Some(change) = transition.selection {
            self.selection_change = match self.selection_change.take() {
                Some(first) if first.previous == change.current => None,
                Some(first) => Some(SelectionChange {
                    previous: first.previous,
                    previous_value: first.previous_value,
                    ..change
                }),
                None => Some(change),
            };
        }
        if let Some(change) = transition.visibility {
            self.visibility_change = match self.visibility_change.take() {
                Some(first) if first.previous == change.current => None,
                Some(first) => Some(VisibilityChange {
                    previous: first.previous,
                    current: change.current,
                }),
                None => Some(change),
            };
        }
    }

    /// Fold in the events of a later step.
    pub(super) fn merge(&mut self, later: WidgetEvents) {
        self.absorb(Transition {
            selection: later.selection_change,
            visibility: later.visibility_change,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_toggles_and_letters_search() {
        let none = Modifiers::new();
        assert_eq!(key_action(Key::Char(' '), none), KeyAction::Toggle);
        assert_eq!(key_action(Key::Char('b'), none), KeyAction::Search('b'));
        assert_eq!(
            key_action(Key::Char('B'), Modifiers::shift()),
            KeyAction::Search('B')
        );
        assert_eq!(key_action(Key::Char('c'), Modifiers::ctrl()), KeyAction::Ignore);
        assert_eq!(key_action(Key::Tab, none), KeyAction::Ignore);
        assert_eq!(key_action(Key::Escape, none), KeyAction::Close);
    }
}
