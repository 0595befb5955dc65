//! Select component state.
//!
//! `SelectState` owns the option list and the open/closed flag and knows
//! nothing about the document. Every input is an [`Action`]; applying it
//! yields a [`Transition`] describing what changed, which the renderer then
//! reconciles onto the document.

use crate::error::SelectError;

use super::item::{OptionList, OptionRecord};

/// Visibility of the option list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Closed => Visibility::Open,
            Visibility::Open => Visibility::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Visibility::Open
    }
}

/// A state-machine input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Select the option with this value.
    Select(String),
    /// Select the option right before the current one, if any.
    SelectPrevious,
    /// Select the option right after the current one, if any.
    SelectNext,
    /// Select the first option whose label starts with the prefix, if any.
    SelectPrefix(String),
    Open,
    Close,
    Toggle,
}

/// Selection moved from one record to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub previous: usize,
    pub current: usize,
    pub previous_value: String,
    pub value: String,
}

/// Option list visibility changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityChange {
    pub previous: Visibility,
    pub current: Visibility,
}

/// What an applied action changed. Both fields are `None` for a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    pub selection: Option<SelectionChange>,
    pub visibility: Option<VisibilityChange>,
}

impl Transition {
    pub fn is_noop(&self) -> bool {
        self.selection.is_none() && self.visibility.is_none()
    }
}

/// Selection and visibility of one select widget.
#[derive(Debug, Clone)]
pub struct SelectState {
    options: OptionList,
    visibility: Visibility,
}

impl SelectState {
    /// Start closed with the list's current selection.
    pub fn new(options: OptionList) -> Self {
        Self {
            options,
            visibility: Visibility::Closed,
        }
    }

    pub fn options(&self) -> &OptionList {
        &self.options
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    pub fn selected_option(&self) -> Option<&OptionRecord> {
        self.options.selected()
    }

    pub fn selected_option_index(&self) -> Option<usize> {
        self.options.selected_index()
    }

    /// Apply one action.
    ///
    /// Only `Select` can fail; navigation and search actions that find no
    /// target are no-ops.
    pub fn apply(&mut self, action: Action) -> Result<Transition, SelectError> {
        let mut transition = Transition::default();
        match action {
            Action::Select(value) => {
                transition.selection = self.select_value(&value)?;
            }
            Action::SelectPrevious => {
                if let Some(index) = self.selected_option_index().and_then(|i| i.checked_sub(1)) {
                    transition.selection = self.select_index(index);
                }
            }
            Action::SelectNext => {
                if let Some(index) = self.selected_option_index().map(|i| i + 1)
                    && index < self.options.len()
                {
                    transition.selection = self.select_index(index);
                }
            }
            Action::SelectPrefix(prefix) => match self.options.find_prefix(&prefix) {
                Some(index) => transition.selection = self.select_index(index),
                None => log::trace!("[select] no option starts with {prefix:?}"),
            },
            Action::Open => transition.visibility = self.set_visibility(Visibility::Open),
            Action::Close => transition.visibility = self.set_visibility(Visibility::Closed),
            Action::Toggle => {
                transition.visibility = self.set_visibility(self.visibility.toggled())
            }
        }
        Ok(transition)
    }

    /// Select the option with `value`.
    ///
    /// Returns `Ok(None)` when it is already selected, and
    /// [`SelectError::UnknownValue`] without touching anything when no option
    /// has that value.
    pub fn select_value(&mut self, value: &str) -> Result<Option<SelectionChange>, SelectError> {
        let index = self
            .options
            .position(value)
            .ok_or_else(|| SelectError::UnknownValue(value.to_string()))?;
        Ok(self.select_index(index))
    }

    fn select_index(&mut self, index: usize) -> Option<SelectionChange> {
        let previous = self.selected_option_index()?;
        if previous == index {
            return None;
        }
        self.options.set_selected(index);

        let change = SelectionChange {
            previous,
            current: index,
            previous_value: self.options.get(previous)?.value.clone(),
            value: self.options.get(index)?.value.clone(),
        };
        log::debug!(
            "[select] selection {} -> {} ({:?} -> {:?})",
            change.previous,
            change.current,
            change.previous_value,
            change.value
        );
        Some(change)
    }

    fn set_visibility(&mut self, next: Visibility) -> Option<VisibilityChange> {
        if self.visibility == next {
            return None;
        }
        let previous = std::mem::replace(&mut self.visibility, next);
        log::debug!("[select] visibility {previous:?} -> {next:?}");
        Some(VisibilityChange {
            previous,
            current: next,
        })
    }
}
