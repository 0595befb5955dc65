//! A select component mounted over a source element.
//!
//! Routes document events through the state machine and reconciles each
//! transition onto the document.

use shadowdom::{Document, Event, NodeId};

use crate::clock::{Clock, SystemClock};
use crate::config::SelectConfig;
use crate::error::SelectError;

use super::events::{KeyAction, WidgetEvents, key_action};
use super::item::{OptionList, OptionRecord};
use super::render::{self, Rendered};
use super::state::{Action, SelectState, SelectionChange, Visibility, VisibilityChange};
use super::typeahead::TypeAhead;

/// A mounted select widget.
///
/// The widget owns its shadow state and the elements it inserted; the
/// document is borrowed for each call that touches it.
#[derive(Debug)]
pub struct SelectWidget {
    source: NodeId,
    state: SelectState,
    rendered: Rendered,
    typeahead: TypeAhead,
    config: SelectConfig,
    clock: Box<dyn Clock>,
}

impl SelectWidget {
    /// Mount a widget over the `select` element `source`.
    ///
    /// Fails without touching the document if the configuration is invalid,
    /// the source is not a select, or its options do not have exactly one
    /// selected entry with unique values.
    pub fn mount(
        doc: &mut Document,
        source: NodeId,
        config: SelectConfig,
    ) -> Result<Self, SelectError> {
        Self::mount_with_clock(doc, source, config, Box::new(SystemClock))
    }

    /// Mount with a custom time source for the type-ahead reset.
    pub fn mount_with_clock(
        doc: &mut Document,
        source: NodeId,
        config: SelectConfig,
        clock: Box<dyn Clock>,
    ) -> Result<Self, SelectError> {
        let prepared = config
            .validate()
            .map_err(SelectError::from)
            .and_then(|()| OptionList::snapshot(doc, source));
        let options = match prepared {
            Ok(options) => options,
            Err(e) => {
                log::warn!("[select] cannot mount over {source}: {e}");
                return Err(e);
            }
        };

        let state = SelectState::new(options);
        let rendered = render::mount(doc, source, &state, &config)?;
        Ok(Self {
            source,
            state,
            rendered,
            typeahead: TypeAhead::new(config.debounce),
            config,
            clock,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The source `select` element.
    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn container(&self) -> NodeId {
        self.rendered.container
    }

    pub fn label(&self) -> NodeId {
        self.rendered.label
    }

    pub fn list(&self) -> NodeId {
        self.rendered.list
    }

    pub fn rows(&self) -> &[NodeId] {
        &self.rendered.rows
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    pub fn state(&self) -> &SelectState {
        &self.state
    }

    pub fn options(&self) -> &OptionList {
        self.state.options()
    }

    pub fn selected_option(&self) -> Option<&OptionRecord> {
        self.state.selected_option()
    }

    pub fn selected_option_index(&self) -> Option<usize> {
        self.state.selected_option_index()
    }

    pub fn visibility(&self) -> Visibility {
        self.state.visibility()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Current type-ahead buffer.
    pub fn search(&self) -> &str {
        self.typeahead.buffer()
    }

    /// Whether `id` is one of the elements this widget inserted.
    pub fn owns(&self, doc: &Document, id: NodeId) -> bool {
        id == self.rendered.container || doc.is_descendant_of(id, self.rendered.container)
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Select the option with `value`, updating the label, row markers,
    /// scroll position and the source element.
    ///
    /// `Ok(None)` when it was already selected.
    pub fn select_value(
        &mut self,
        doc: &mut Document,
        value: &str,
    ) -> Result<Option<SelectionChange>, SelectError> {
        let events = self.apply(doc, Action::Select(value.to_string()))?;
        Ok(events.selection_change)
    }

    pub fn open(&mut self, doc: &mut Document) -> Result<Option<VisibilityChange>, SelectError> {
        Ok(self.apply(doc, Action::Open)?.visibility_change)
    }

    pub fn close(&mut self, doc: &mut Document) -> Result<Option<VisibilityChange>, SelectError> {
        Ok(self.apply(doc, Action::Close)?.visibility_change)
    }

    pub fn toggle(&mut self, doc: &mut Document) -> Result<Option<VisibilityChange>, SelectError> {
        Ok(self.apply(doc, Action::Toggle)?.visibility_change)
    }

    /// Clear the type-ahead buffer if it has been idle long enough.
    /// Returns true if it was cleared.
    pub fn tick(&mut self) -> bool {
        let expired = self.typeahead.expire(self.clock.now());
        if expired {
            log::trace!("[select] type-ahead buffer reset");
        }
        expired
    }

    /// Route a document event to the widget.
    ///
    /// Handles clicks on the label and rows, key presses on the focused
    /// container, and the container losing focus. Anything else returns an
    /// empty [`WidgetEvents`].
    pub fn dispatch(
        &mut self,
        doc: &mut Document,
        event: &Event,
    ) -> Result<WidgetEvents, SelectError> {
        match event {
            Event::Click {
                target: Some(target),
                ..
            } => self.on_click(doc, *target),
            Event::Key {
                target: Some(target),
                key,
                modifiers,
            } if *target == self.rendered.container => {
                self.on_key(doc, key_action(*key, *modifiers))
            }
            Event::Blur { target, .. } if *target == self.rendered.container => {
                self.apply(doc, Action::Close)
            }
            _ => {
                log::trace!("[select] {} ignoring {event:?}", self.rendered.container);
                Ok(WidgetEvents::default())
            }
        }
    }

    fn on_click(&mut self, doc: &mut Document, target: NodeId) -> Result<WidgetEvents, SelectError> {
        if target == self.rendered.label {
            return self.apply(doc, Action::Toggle);
        }
        if doc.parent(target) != Some(self.rendered.list) {
            return Ok(WidgetEvents::default());
        }

        let Some(value) = doc
            .get(target)?
            .get_data(&self.config.data_key)
            .map(str::to_string)
        else {
            return Ok(WidgetEvents::default());
        };
        let mut events = self.apply(doc, Action::Select(value))?;
        events.merge(self.apply(doc, Action::Close)?);
        Ok(events)
    }

    fn on_key(&mut self, doc: &mut Document, action: KeyAction) -> Result<WidgetEvents, SelectError> {
        match action {
            KeyAction::Toggle => self.apply(doc, Action::Toggle),
            KeyAction::Previous => self.apply(doc, Action::SelectPrevious),
            KeyAction::Next => self.apply(doc, Action::SelectNext),
            KeyAction::Close => self.apply(doc, Action::Close),
            KeyAction::Search(c) => {
                let prefix = self.typeahead.push(c, self.clock.now()).to_string();
                log::trace!("[select] type-ahead {prefix:?}");
                self.apply(doc, Action::SelectPrefix(prefix))
            }
            KeyAction::Ignore => Ok(WidgetEvents::default()),
        }
    }

    /// Run one action through the state machine and reconcile the result.
    fn apply(&mut self, doc: &mut Document, action: Action) -> Result<WidgetEvents, SelectError> {
        let transition = self.state.apply(action)?;
        if !transition.is_noop() {
            render::reconcile(doc, &self.rendered, &self.state, &transition, &self.config)?;
        }
        let mut events = WidgetEvents::default();
        events.absorb(transition);
        Ok(events)
    }
}
