//! The demo event loop.

use std::time::Duration;

use anyhow::Result;
use shadowdom::{Document, Event, FocusState, Key, scroll_by};
use shadowselect::SelectWidget;

use crate::options::Form;
use crate::terminal::{Emphasis, Terminal};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// What the loop does after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Leave and print the current value.
    Submit,
}

/// Whether `event` ends the session before the widget sees it.
pub fn flow_for(event: &Event, form: &Form, widget_open: bool) -> Flow {
    match event {
        Event::Key {
            key: Key::Char('c'),
            modifiers,
            ..
        } if modifiers.ctrl => Flow::Submit,
        Event::Key {
            key: Key::Char('q'),
            modifiers,
            ..
        } if modifiers.none() && !widget_open => Flow::Submit,
        Event::Key {
            target: Some(target),
            key: Key::Enter,
            ..
        } if *target == form.submit => Flow::Submit,
        Event::Click {
            target: Some(target),
            ..
        } if *target == form.submit => Flow::Submit,
        _ => Flow::Continue,
    }
}

pub struct App {
    doc: Document,
    form: Form,
    widget: SelectWidget,
    focus: FocusState,
}

impl App {
    pub fn new(doc: Document, form: Form, widget: SelectWidget) -> Self {
        Self {
            doc,
            form,
            widget,
            focus: FocusState::new(),
        }
    }

    /// Run until the form is submitted, returning the source value.
    pub fn run(mut self, term: &mut Terminal) -> Result<Option<String>> {
        // Nothing was focused before, so this yields a lone Focus event.
        self.focus.focus(self.widget.container());
        log::debug!("[demo] initial focus on {}", self.widget.container());

        loop {
            self.widget.tick();
            self.draw(term)?;

            let raw = term.poll(Some(POLL_INTERVAL))?;
            if raw.is_empty() {
                continue;
            }
            let events = self.focus.process_events(&raw, &self.doc, term.layout());
            for event in &events {
                if flow_for(event, &self.form, self.widget.is_open()) == Flow::Submit {
                    log::info!("[demo] submitted");
                    return Ok(self.doc.select_value(self.form.select));
                }
                self.handle(event)?;
            }
        }
    }

    fn handle(&mut self, event: &Event) -> Result<()> {
        if let Event::Scroll {
            target: Some(target),
            delta_y,
            ..
        } = event
            && self.widget.owns(&self.doc, *target)
        {
            scroll_by(&mut self.doc, *target, *delta_y)?;
        }

        let out = self.widget.dispatch(&mut self.doc, event)?;
        if let Some(change) = &out.selection_change {
            log::info!(
                "[demo] selection {:?} -> {:?}",
                change.previous_value,
                change.value
            );
        }
        if let Some(change) = &out.visibility_change {
            log::info!("[demo] list {:?}", change.current);
        }
        Ok(())
    }

    fn draw(&self, term: &mut Terminal) -> Result<()> {
        let focused = self.focus.focused();
        let widget = &self.widget;
        let selected_class = &widget.config().classes.selected;
        let doc = &self.doc;

        term.render(doc, |id, el| {
            let parent = doc.parent(id);
            if parent == Some(widget.list()) && el.classes.contains(selected_class) {
                Emphasis::Reverse
            } else if focused.is_some_and(|f| f == id || parent == Some(f)) {
                Emphasis::Bold
            } else {
                Emphasis::Plain
            }
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use shadowdom::{Modifiers, MouseButton, NodeId};

    use super::*;

    fn form() -> Form {
        let mut doc = Document::new();
        let select = doc.create(shadowdom::Element::select());
        let submit = doc.create(shadowdom::Element::span("submit"));
        Form { select, submit }
    }

    fn key(target: Option<NodeId>, key: Key, modifiers: Modifiers) -> Event {
        Event::Key {
            target,
            key,
            modifiers,
        }
    }

    #[test]
    fn q_quits_only_while_closed() {
        let form = form();
        let q = key(None, Key::Char('q'), Modifiers::new());
        assert_eq!(flow_for(&q, &form, false), Flow::Submit);
        assert_eq!(flow_for(&q, &form, true), Flow::Continue);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let form = form();
        let ctrl_c = key(None, Key::Char('c'), Modifiers::ctrl());
        assert_eq!(flow_for(&ctrl_c, &form, true), Flow::Submit);
        let c = key(None, Key::Char('c'), Modifiers::new());
        assert_eq!(flow_for(&c, &form, false), Flow::Continue);
    }

    #[test]
    fn submit_line_submits() {
        let form = form();
        let enter = key(Some(form.submit), Key::Enter, Modifiers::new());
        assert_eq!(flow_for(&enter, &form, false), Flow::Submit);
        let enter_elsewhere = key(Some(form.select), Key::Enter, Modifiers::new());
        assert_eq!(flow_for(&enter_elsewhere, &form, false), Flow::Continue);
        let click = Event::Click {
            target: Some(form.submit),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        };
        assert_eq!(flow_for(&click, &form, true), Flow::Submit);
    }
}
