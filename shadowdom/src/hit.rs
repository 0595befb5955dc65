use crate::document::{Document, NodeId};
use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
pub fn hit_test(layout: &LayoutResult, doc: &Document, x: u16, y: u16) -> Option<NodeId> {
    hit_test_where(layout, doc, doc.root(), x, y, &|el| el.clickable)
}

/// Find any element (clickable or not) at the given coordinates.
/// Returns the deepest element containing the point.
pub fn hit_test_any(layout: &LayoutResult, doc: &Document, x: u16, y: u16) -> Option<NodeId> {
    hit_test_where(layout, doc, doc.root(), x, y, &|_| true)
}

/// Find the focusable element at the given coordinates.
/// Returns None if no focusable element contains the point.
pub fn hit_test_focusable(
    layout: &LayoutResult,
    doc: &Document,
    x: u16,
    y: u16,
) -> Option<NodeId> {
    hit_test_where(layout, doc, doc.root(), x, y, &|el| el.focusable())
}

fn hit_test_where(
    layout: &LayoutResult,
    doc: &Document,
    id: NodeId,
    x: u16,
    y: u16,
    accept: &dyn Fn(&Element) -> bool,
) -> Option<NodeId> {
    let rect = layout.get(id)?;

    if !rect.contains(x, y) {
        return None;
    }

    // Check children in reverse order (last laid out = on top)
    for &child in doc.children(id).iter().rev() {
        if let Some(found) = hit_test_where(layout, doc, child, x, y, accept) {
            return Some(found);
        }
    }

    match doc.get(id) {
        Ok(el) if accept(el) => Some(id),
        _ => None,
    }
}
