//! Row-based block layout.
//!
//! Every displayed element that carries text occupies one row; its children
//! stack below it. Top-level elements shrink to their widest row and their
//! descendants stretch to that width. Elements with `viewport_rows` clip their children to a
//! window starting at `scroll_top`, and children not fully inside that window
//! get no rect.

use std::collections::HashMap;

use unicode_width::UnicodeWidthStr;

use crate::document::{Document, NodeId};
use crate::element::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Computed rects keyed by node.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<NodeId, Rect>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: NodeId) -> Option<&Rect> {
        self.rects.get(&id)
    }

    pub fn insert(&mut self, id: NodeId, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Lay out the whole document inside `area`.
pub fn layout(doc: &Document, area: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let root = doc.root();
    let height = layout_node(doc, root, area.x, area.y, area.width, &mut result);
    result.insert(root, Rect::new(area.x, area.y, area.width, height.min(area.height)));
    result
}

/// Widest text row in the subtree of `id`, in terminal cells.
pub fn intrinsic_width(doc: &Document, id: NodeId) -> u16 {
    let own = doc
        .get(id)
        .ok()
        .and_then(|el| el.text.as_deref())
        .map(|t| u16::try_from(t.width()).unwrap_or(u16::MAX))
        .unwrap_or(0);
    doc.children(id)
        .iter()
        .filter(|&&c| shown(doc, c))
        .map(|&c| intrinsic_width(doc, c))
        .fold(own, u16::max)
}

/// Number of rows a node's content occupies before any viewport clipping.
///
/// Only the node's own `display` is consulted, so rows inside a hidden list
/// can still be measured for scrolling.
pub fn content_rows(doc: &Document, id: NodeId) -> usize {
    if !shown(doc, id) {
        return 0;
    }
    let own = match doc.get(id) {
        Ok(el) if el.text.is_some() => 1,
        _ => 0,
    };
    let children: usize = doc.children(id).iter().map(|&c| content_rows(doc, c)).sum();
    let children = match doc.get(id).ok().and_then(|el| el.viewport_rows) {
        Some(rows) => children.min(usize::from(rows)),
        None => children,
    };
    own + children
}

fn layout_node(
    doc: &Document,
    id: NodeId,
    x: u16,
    y: u16,
    width: u16,
    out: &mut LayoutResult,
) -> u16 {
    let Ok(el) = doc.get(id) else {
        return 0;
    };
    if el.display == Display::None {
        return 0;
    }

    let is_root = id == doc.root();
    let child_width = |child: NodeId| {
        if is_root {
            intrinsic_width(doc, child).min(width)
        } else {
            width
        }
    };
    let mut height = if el.text.is_some() { 1 } else { 0 };

    match el.viewport_rows {
        Some(rows) => {
            // Content offsets can exceed the screen, so they are counted in
            // usize and only children fully inside the window get a rect.
            let top = el.scroll_top;
            let bottom = top.saturating_add(usize::from(rows));
            let mut offset = 0usize;
            for &child in doc.children(id) {
                let start = offset;
                offset += content_rows(doc, child);
                if offset == start || start < top || offset > bottom {
                    continue;
                }
                let child_y = y.saturating_add(height).saturating_add(clamp_rows(start - top));
                layout_node(doc, child, x, child_y, child_width(child), out);
            }
            let visible = offset.saturating_sub(top).min(usize::from(rows));
            height = height.saturating_add(clamp_rows(visible));
        }
        None => {
            for &child in doc.children(id) {
                let child_y = y.saturating_add(height);
                let rows = layout_node(doc, child, x, child_y, child_width(child), out);
                height = height.saturating_add(rows);
            }
        }
    }

    out.insert(id, Rect::new(x, y, width, height));
    height
}

fn clamp_rows(rows: usize) -> u16 {
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn shown(doc: &Document, id: NodeId) -> bool {
    doc.get(id).is_ok_and(|el| el.display != Display::None)
}
