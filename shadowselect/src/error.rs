//! Error types for the select widget.

use shadowdom::{DomError, NodeId};
use thiserror::Error;

/// Errors raised while mounting or driving a select widget.
///
/// All of these are integration errors: the caller handed the widget input
/// that breaks one of its preconditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The source node is not a `select` element.
    #[error("{0} is not a select element")]
    NotASelect(NodeId),

    /// The source element contains no options.
    #[error("select element has no options")]
    NoOptions,

    /// No option is marked selected.
    #[error("no option selected")]
    NoSelection,

    /// More than one option is marked selected.
    #[error("{count} options selected, expected exactly one")]
    MultipleSelected { count: usize },

    /// Two options share the same value.
    #[error("duplicate option value '{0}'")]
    DuplicateValue(String),

    /// `select_value` was called with a value no option has.
    #[error("unknown value passed to select_value: '{0}'")]
    UnknownValue(String),

    /// The source element has no parent to insert the widget into.
    #[error("select element is detached from the document")]
    Detached,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Invalid widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("type-ahead debounce must be longer than zero")]
    ZeroDebounce,

    #[error("the option list must show at least one row")]
    ZeroVisibleRows,

    #[error("class name for {0} must not be empty")]
    EmptyClassName(&'static str),

    #[error("data attribute key must not be empty")]
    EmptyDataKey,
}
