use crate::document::{Document, NodeId};
use crate::error::DomError;
use crate::layout::content_rows;

/// Nearest ancestor of `id` that clips its children to a viewport.
pub fn find_scroll_container(doc: &Document, id: NodeId) -> Option<NodeId> {
    let mut cursor = doc.parent(id);
    while let Some(node) = cursor {
        if doc.get(node).is_ok_and(|el| el.viewport_rows.is_some()) {
            return Some(node);
        }
        cursor = doc.parent(node);
    }
    None
}

/// Row offset of `id` from the top of `container`'s scrollable content.
fn offset_within(doc: &Document, container: NodeId, id: NodeId) -> Option<usize> {
    let mut offset = 0usize;
    let mut cursor = id;
    while cursor != container {
        let parent = doc.parent(cursor)?;
        for &sibling in doc.children(parent) {
            if sibling == cursor {
                break;
            }
            offset += content_rows(doc, sibling);
        }
        if parent != container && doc.get(parent).is_ok_and(|el| el.text.is_some()) {
            offset += 1;
        }
        cursor = parent;
    }
    Some(offset)
}

/// Scroll the nearest scroll container so `id` is fully visible, moving only
/// as far as needed. Nothing moves when the element is already visible.
///
/// Returns true if a scroll offset changed.
pub fn scroll_into_view_nearest(doc: &mut Document, id: NodeId) -> Result<bool, DomError> {
    doc.get(id)?;
    let Some(container) = find_scroll_container(doc, id) else {
        return Ok(false);
    };
    let Some(item_top) = offset_within(doc, container, id) else {
        return Ok(false);
    };
    let item_bottom = item_top + content_rows(doc, id).max(1);

    let el = doc.get_mut(container)?;
    let viewport = usize::from(el.viewport_rows.unwrap_or(0));
    if viewport == 0 {
        return Ok(false);
    }

    // If item is above viewport, scroll up
    if item_top < el.scroll_top {
        el.scroll_top = item_top;
    }
    // If item is below viewport, scroll down
    else if item_bottom > el.scroll_top.saturating_add(viewport) {
        el.scroll_top = item_bottom.saturating_sub(viewport);
    } else {
        return Ok(false);
    }

    log::trace!("[scroll] {} scroll_top={} to reveal {}", container, el.scroll_top, id);
    Ok(true)
}

/// Scroll a viewport element by `delta` rows, clamped to its content.
/// Returns true if the scroll offset changed.
pub fn scroll_by(doc: &mut Document, container: NodeId, delta: i16) -> Result<bool, DomError> {
    let content: usize = doc
        .children(container)
        .iter()
        .map(|&c| content_rows(doc, c))
        .sum();
    let el = doc.get_mut(container)?;
    let Some(viewport) = el.viewport_rows else {
        return Ok(false);
    };
    let max = content.saturating_sub(usize::from(viewport));
    let step = usize::from(delta.unsigned_abs());
    let next = if delta < 0 {
        el.scroll_top.saturating_sub(step)
    } else {
        el.scroll_top.saturating_add(step).min(max)
    };
    if next == el.scroll_top {
        return Ok(false);
    }
    el.scroll_top = next;
    Ok(true)
}
