//! A custom select widget that mirrors a native `select` element.
//!
//! [`SelectWidget`] snapshots the options of a source `select`, hides it, and
//! renders a focusable replacement right after it. Selection changes made
//! through the widget are mirrored back onto the source options so code that
//! reads the native control keeps seeing the current value.
//!
//! The selection logic lives in [`SelectState`], which does not touch the
//! document; [`select::render`] applies its transitions to a
//! [`shadowdom::Document`].

pub mod clock;
pub mod config;
pub mod error;
pub mod select;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ClassNames, SelectConfig};
pub use error::{ConfigError, SelectError};
pub use select::{
    Action, OptionList, OptionRecord, SelectState, SelectWidget, SelectionChange, Transition,
    TypeAhead, Visibility, VisibilityChange, WidgetEvents,
};
