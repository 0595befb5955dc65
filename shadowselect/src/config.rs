//! Widget configuration.

use std::time::Duration;

use crate::error::ConfigError;

/// Idle time after which the type-ahead buffer resets.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Rows of the option list visible before it scrolls.
pub const DEFAULT_VISIBLE_ROWS: u16 = 8;

/// Class names applied to the rendered structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    /// The focusable wrapper inserted after the source element.
    pub container: String,
    /// The element showing the current label.
    pub label: String,
    /// The option list.
    pub list: String,
    /// Each option row.
    pub row: String,
    /// Marker on the row of the current selection.
    pub selected: String,
    /// Marker on the list while it is open.
    pub show: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            container: "custom-select-container".into(),
            label: "custom-select-value".into(),
            list: "custom-select-options".into(),
            row: "custom-select-option".into(),
            selected: "selected".into(),
            show: "show".into(),
        }
    }
}

/// Per-widget configuration.
#[derive(Debug, Clone)]
pub struct SelectConfig {
    /// Idle time after the last keystroke before the search buffer clears.
    pub debounce: Duration,

    /// Height of the option list viewport, in rows.
    pub visible_rows: u16,

    /// Class names for the rendered elements.
    pub classes: ClassNames,

    /// `data-*` key carrying each row's option value.
    pub data_key: String,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            visible_rows: DEFAULT_VISIBLE_ROWS,
            classes: ClassNames::default(),
            data_key: "value".into(),
        }
    }
}

impl SelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the type-ahead idle reset.
    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Set the option list viewport height.
    pub fn visible_rows(mut self, rows: u16) -> Self {
        self.visible_rows = rows;
        self
    }

    pub fn classes(mut self, classes: ClassNames) -> Self {
        self.classes = classes;
        self
    }

    pub fn data_key(mut self, key: impl Into<String>) -> Self {
        self.data_key = key.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce.is_zero() {
            return Err(ConfigError::ZeroDebounce);
        }
        if self.visible_rows == 0 {
            return Err(ConfigError::ZeroVisibleRows);
        }
        let classes = [
            ("container", &self.classes.container),
            ("label", &self.classes.label),
            ("list", &self.classes.list),
            ("row", &self.classes.row),
            ("selected", &self.classes.selected),
            ("show", &self.classes.show),
        ];
        if let Some((name, _)) = classes.iter().find(|(_, class)| class.is_empty()) {
            return Err(ConfigError::EmptyClassName(name));
        }
        if self.data_key.is_empty() {
            return Err(ConfigError::EmptyDataKey);
        }
        Ok(())
    }
}
