//! The select component.
//!
//! `item` holds the option records, `state` the pure selection state
//! machine, `typeahead` the keyboard search buffer, `events` the input
//! handling, `render` the document side, and `widget` ties them to a
//! mounted instance.

mod events;
mod item;
pub mod render;
mod state;
mod typeahead;
mod widget;

pub use events::{KeyAction, WidgetEvents, key_action};
pub use item::{OptionList, OptionRecord};
pub use state::{Action, SelectState, SelectionChange, Transition, Visibility, VisibilityChange};
pub use typeahead::TypeAhead;
pub use widget::SelectWidget;
