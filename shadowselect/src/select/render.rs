//! Select component rendering.
//!
//! `mount` builds the replacement structure once; `reconcile` applies a
//! [`Transition`] to it and mirrors selection onto the source options.

use shadowdom::{Display, Document, Element, NodeId, scroll_into_view_nearest};

use crate::config::SelectConfig;
use crate::error::SelectError;

use super::state::{SelectState, SelectionChange, Transition, Visibility};

/// Handles to the elements a mounted widget owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Focusable wrapper, inserted right after the source element.
    pub container: NodeId,
    /// Shows the selected option's label.
    pub label: NodeId,
    /// The option list.
    pub list: NodeId,
    /// One row per option, in option order.
    pub rows: Vec<NodeId>,
}

/// Build the widget structure for `state`, hide `source`, and insert the
/// structure right after it.
pub fn mount(
    doc: &mut Document,
    source: NodeId,
    state: &SelectState,
    config: &SelectConfig,
) -> Result<Rendered, SelectError> {
    if doc.parent(source).is_none() {
        return Err(SelectError::Detached);
    }
    let classes = &config.classes;
    let current = state.selected_option().ok_or(SelectError::NoSelection)?;

    let container = doc.create(Element::div().class(&classes.container).tab_index(0));
    let label = doc.append(
        container,
        Element::span(current.label.clone())
            .class(&classes.label)
            .clickable(true),
    )?;
    let list = doc.append(
        container,
        Element::new("ul")
            .class(&classes.list)
            .viewport_rows(config.visible_rows)
            .display(Display::None),
    )?;

    let mut rows = Vec::with_capacity(state.options().len());
    for record in state.options().iter() {
        let mut row = Element::new("li")
            .class(&classes.row)
            .text(record.label.clone())
            .data(config.data_key.clone(), record.value.clone())
            .clickable(true);
        row.classes.set(&classes.selected, record.selected);
        rows.push(doc.append(list, row)?);
    }

    // The source stays in the document for form reads, just out of layout.
    doc.get_mut(source)?.display = Display::None;
    doc.insert_after(source, container)?;

    if let Some(index) = state.selected_option_index() {
        scroll_into_view_nearest(doc, rows[index])?;
    }

    log::debug!(
        "[select] mounted {} options after {} as {}",
        rows.len(),
        source,
        container
    );
    Ok(Rendered {
        container,
        label,
        list,
        rows,
    })
}

/// Apply `transition` to the rendered structure and the source options.
pub fn reconcile(
    doc: &mut Document,
    rendered: &Rendered,
    state: &SelectState,
    transition: &Transition,
    config: &SelectConfig,
) -> Result<(), SelectError> {
    if let Some(change) = &transition.selection {
        apply_selection(doc, rendered, state, change, config)?;
    }
    if let Some(change) = &transition.visibility {
        apply_visibility(doc, rendered, change.current, config)?;
    }
    Ok(())
}

fn apply_selection(
    doc: &mut Document,
    rendered: &Rendered,
    state: &SelectState,
    change: &SelectionChange,
    config: &SelectConfig,
) -> Result<(), SelectError> {
    let options = state.options();
    let previous = options
        .get(change.previous)
        .ok_or_else(|| SelectError::UnknownValue(change.previous_value.clone()))?;
    let next = options
        .get(change.current)
        .ok_or_else(|| SelectError::UnknownValue(change.value.clone()))?;

    // Mirror onto the source so native reads and form submission agree.
    doc.set_option_selected(previous.source, false)?;
    doc.set_option_selected(next.source, true)?;

    doc.get_mut(rendered.label)?.text = Some(next.label.clone());

    let selected = &config.classes.selected;
    doc.get_mut(rendered.rows[change.previous])?
        .classes
        .remove(selected);
    let row = rendered.rows[change.current];
    doc.get_mut(row)?.classes.add(selected);
    scroll_into_view_nearest(doc, row)?;
    Ok(())
}

fn apply_visibility(
    doc: &mut Document,
    rendered: &Rendered,
    visibility: Visibility,
    config: &SelectConfig,
) -> Result<(), SelectError> {
    let list = doc.get_mut(rendered.list)?;
    list.classes.set(&config.classes.show, visibility.is_open());
    list.display = if visibility.is_open() {
        Display::Block
    } else {
        Display::None
    };
    Ok(())
}
