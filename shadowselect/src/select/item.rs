//! Option records snapshotted from the source element.

use std::collections::HashSet;

use shadowdom::{Document, NodeId};

use crate::error::SelectError;

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRecord {
    /// Unique identifier, taken from the option's value.
    pub value: String,
    /// Display text.
    pub label: String,
    /// Whether this is the current selection.
    pub selected: bool,
    /// The source `option` element this record mirrors onto.
    pub source: NodeId,
}

/// Options in source declaration order.
///
/// Once built, exactly one record is selected and values are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionList {
    records: Vec<OptionRecord>,
}

impl OptionList {
    /// Build a list from records, checking the selection and uniqueness rules.
    pub fn new(records: Vec<OptionRecord>) -> Result<Self, SelectError> {
        if records.is_empty() {
            return Err(SelectError::NoOptions);
        }

        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.value.as_str()) {
                return Err(SelectError::DuplicateValue(record.value.clone()));
            }
        }

        match records.iter().filter(|r| r.selected).count() {
            0 => Err(SelectError::NoSelection),
            1 => Ok(Self { records }),
            count => Err(SelectError::MultipleSelected { count }),
        }
    }

    /// Snapshot every option under `source`.
    pub fn snapshot(doc: &Document, source: NodeId) -> Result<Self, SelectError> {
        if !doc.get(source)?.is("select") {
            return Err(SelectError::NotASelect(source));
        }

        let records = doc
            .options(source)
            .into_iter()
            .map(|option| -> Result<OptionRecord, SelectError> {
                Ok(OptionRecord {
                    value: doc.option_value(option)?,
                    label: doc.option_label(option)?,
                    selected: doc.get(option)?.selected,
                    source: option,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&OptionRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionRecord> {
        self.records.iter()
    }

    /// The first selected record.
    pub fn selected(&self) -> Option<&OptionRecord> {
        self.records.iter().find(|r| r.selected)
    }

    /// Position of the selected record.
    pub fn selected_index(&self) -> Option<usize> {
        self.records.iter().position(|r| r.selected)
    }

    /// Position of the record with `value`.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.records.iter().position(|r| r.value == value)
    }

    /// First record whose label starts with `prefix`, ignoring case.
    pub fn find_prefix(&self, prefix: &str) -> Option<usize> {
        let prefix = prefix.to_lowercase();
        self.records
            .iter()
            .position(|r| r.label.to_lowercase().starts_with(&prefix))
    }

    /// Move the selection to `index`. Returns the previously selected index.
    pub(crate) fn set_selected(&mut self, index: usize) -> Option<usize> {
        let previous = self.selected_index();
        if let Some(prev) = previous {
            self.records[prev].selected = false;
        }
        self.records[index].selected = true;
        previous
    }
}
