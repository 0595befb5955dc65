use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::document::{Document, NodeId};
use crate::event::{Event, Key, Modifiers};
use crate::hit::{hit_test, hit_test_any, hit_test_focusable};
use crate::layout::LayoutResult;
use crate::scroll::find_scroll_container;

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<NodeId>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Programmatically focus an element.
    /// Returns the focus-change events, empty if focus did not move.
    pub fn focus(&mut self, id: NodeId) -> Vec<Event> {
        if self.focused == Some(id) {
            return Vec::new();
        }
        let mut events = Vec::new();
        if let Some(old) = self.focused.replace(id) {
            events.push(Event::Blur {
                target: old,
                new_target: Some(id),
            });
        }
        events.push(Event::Focus { target: id });
        events
    }

    /// Clear focus.
    /// Returns the blur event if something was focused.
    pub fn blur(&mut self) -> Option<Event> {
        self.focused.take().map(|old| Event::Blur {
            target: old,
            new_target: None,
        })
    }

    /// Focus the next focusable element (Tab navigation).
    pub fn focus_next(&mut self, doc: &Document) -> Vec<Event> {
        let focusable = collect_focusable(doc);
        if focusable.is_empty() {
            return Vec::new();
        }

        let new_focus = match self.focused {
            None => focusable[0],
            Some(current) => match focusable.iter().position(|&id| id == current) {
                Some(i) => focusable[(i + 1) % focusable.len()],
                None => focusable[0],
            },
        };
        self.focus(new_focus)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    pub fn focus_prev(&mut self, doc: &Document) -> Vec<Event> {
        let focusable = collect_focusable(doc);
        if focusable.is_empty() {
            return Vec::new();
        }

        let last = focusable.len() - 1;
        let new_focus = match self.focused {
            None => focusable[last],
            Some(current) => match focusable.iter().position(|&id| id == current) {
                Some(0) | None => focusable[last],
                Some(i) => focusable[i - 1],
            },
        };
        self.focus(new_focus)
    }

    /// Process raw crossterm events and produce high-level events.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        doc: &Document,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let key: Key = key_event.code.into();
                    let modifiers: Modifiers = key_event.modifiers.into();

                    match key {
                        Key::Tab => events.extend(self.focus_next(doc)),
                        Key::BackTab => events.extend(self.focus_prev(doc)),
                        _ => events.push(Event::Key {
                            target: self.focused,
                            key,
                            modifiers,
                        }),
                    }
                }

                CrosstermEvent::Mouse(mouse_event) => {
                    let x = mouse_event.column;
                    let y = mouse_event.row;

                    match mouse_event.kind {
                        MouseEventKind::Down(button) => {
                            // Clicking moves focus to the focusable ancestor under
                            // the pointer, or clears it when there is none.
                            match hit_test_focusable(layout, doc, x, y) {
                                Some(id) => events.extend(self.focus(id)),
                                None => events.extend(self.blur()),
                            }
                            events.push(Event::Click {
                                target: hit_test(layout, doc, x, y),
                                x,
                                y,
                                button: button.into(),
                            });
                        }
                        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                            let delta_y = if mouse_event.kind == MouseEventKind::ScrollUp {
                                -1
                            } else {
                                1
                            };
                            let target = hit_test_any(layout, doc, x, y).and_then(|id| {
                                if doc.get(id).is_ok_and(|el| el.viewport_rows.is_some()) {
                                    Some(id)
                                } else {
                                    find_scroll_container(doc, id)
                                }
                            });
                            events.push(Event::Scroll {
                                target,
                                x,
                                y,
                                delta_y,
                            });
                        }
                        _ => {}
                    }
                }

                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }

                _ => {}
            }
        }

        if !events.is_empty() {
            log::trace!("[focus] produced {} events, focused={:?}", events.len(), self.focused);
        }
        events
    }
}

/// Collect displayed, focusable elements in document order.
pub fn collect_focusable(doc: &Document) -> Vec<NodeId> {
    doc.descendants(doc.root())
        .into_iter()
        .filter(|&id| doc.is_displayed(id) && doc.get(id).is_ok_and(|el| el.focusable()))
        .collect()
}
