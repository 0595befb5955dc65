//! Arena-backed document tree.
//!
//! Nodes are never freed; removing a node only detaches it. Handles stay valid
//! for the lifetime of the document, which lets widgets keep non-owning
//! references to elements they did not create.

use crate::element::{Display, Element};
use crate::error::DomError;

/// Handle to a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    element: Element,
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with an empty `body` root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                element: Element::new("body"),
            }],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    // -------------------------------------------------------------------------
    // Node access
    // -------------------------------------------------------------------------

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn get(&self, id: NodeId) -> Result<&Element, DomError> {
        self.nodes
            .get(id.0)
            .map(|n| &n.element)
            .ok_or(DomError::InvalidNode(id))
    }

    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut Element, DomError> {
        self.nodes
            .get_mut(id.0)
            .map(|n| &mut n.element)
            .ok_or(DomError::InvalidNode(id))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// All descendants of `id` in document order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_descendants(id, &mut out);
        out
    }

    fn collect_descendants(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for &child in self.children(id) {
            out.push(child);
            self.collect_descendants(child, out);
        }
    }

    pub fn is_descendant_of(&self, id: NodeId, ancestor: NodeId) -> bool {
        let mut cursor = self.parent(id);
        while let Some(node) = cursor {
            if node == ancestor {
                return true;
            }
            cursor = self.parent(node);
        }
        false
    }

    /// Whether `id` is attached under the document root.
    pub fn is_connected(&self, id: NodeId) -> bool {
        id == self.root || self.is_descendant_of(id, self.root)
    }

    /// First direct child of `parent` whose `data-{key}` equals `value`.
    pub fn find_child_by_data(&self, parent: NodeId, key: &str, value: &str) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|&id| self.nodes[id.0].element.get_data(key) == Some(value))
    }

    /// Concatenated text of `id` and its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Ok(el) = self.get(id)
            && let Some(text) = &el.text
        {
            out.push_str(text);
        }
        for &child in self.children(id) {
            out.push_str(&self.text_content(child));
        }
        out
    }

    /// Whether `id` and all of its ancestors take part in layout.
    pub fn is_displayed(&self, id: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(node) = cursor {
            match self.nodes.get(node.0) {
                Some(n) if n.element.display == Display::None => return false,
                Some(n) => cursor = n.parent,
                None => return false,
            }
        }
        true
    }

    // -------------------------------------------------------------------------
    // Tree mutation
    // -------------------------------------------------------------------------

    /// Create a detached node.
    pub fn create(&mut self, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            element,
        });
        id
    }

    /// Create a node and append it to `parent`.
    pub fn append(&mut self, parent: NodeId, element: Element) -> Result<NodeId, DomError> {
        self.check(parent)?;
        let id = self.create(element);
        self.append_child(parent, id)?;
        Ok(id)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.check_insertable(parent, child)?;
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: NodeId,
    ) -> Result<(), DomError> {
        self.check(reference)?;
        if self.parent(reference) != Some(parent) {
            return Err(DomError::NotAChild {
                parent,
                child: reference,
            });
        }
        if child == reference {
            return Ok(());
        }
        self.check_insertable(parent, child)?;
        self.detach(child);

        let index = self.nodes[parent.0]
            .children
            .iter()
            .position(|&id| id == reference)
            .ok_or(DomError::NotAChild {
                parent,
                child: reference,
            })?;
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.insert(index, child);
        Ok(())
    }

    /// Insert `child` as the next sibling of `target`.
    pub fn insert_after(&mut self, target: NodeId, child: NodeId) -> Result<(), DomError> {
        self.check(target)?;
        let parent = self.parent(target).ok_or(DomError::Detached(target))?;
        let pos = self.nodes[parent.0]
            .children
            .iter()
            .position(|&id| id == target)
            .ok_or(DomError::Detached(target))?;
        let next = self.nodes[parent.0].children.get(pos + 1).copied();
        match next {
            Some(next) if next != child => self.insert_before(parent, child, next),
            Some(_) => Ok(()),
            None => self.append_child(parent, child),
        }
    }

    /// Detach `id` from its parent. The handle stays valid.
    pub fn remove(&mut self, id: NodeId) -> Result<(), DomError> {
        self.check(id)?;
        if id == self.root {
            return Err(DomError::RootImmovable);
        }
        self.detach(id);
        Ok(())
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(old_parent) = self.nodes[id.0].parent.take() {
            self.nodes[old_parent.0].children.retain(|&c| c != id);
        }
    }

    fn check(&self, id: NodeId) -> Result<(), DomError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(DomError::InvalidNode(id))
        }
    }

    fn check_insertable(&self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.check(parent)?;
        self.check(child)?;
        if child == self.root {
            return Err(DomError::RootImmovable);
        }
        // Parent must not be inside child's subtree.
        if parent == child || self.is_descendant_of(parent, child) {
            return Err(DomError::Cycle { parent, child });
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Form controls
    // -------------------------------------------------------------------------

    /// All `option` descendants of `select`, in document order.
    pub fn options(&self, select: NodeId) -> Vec<NodeId> {
        self.descendants(select)
            .into_iter()
            .filter(|&id| self.nodes[id.0].element.is("option"))
            .collect()
    }

    /// The `value` attribute of an option, falling back to its text.
    pub fn option_value(&self, option: NodeId) -> Result<String, DomError> {
        let el = self.get(option)?;
        Ok(match el.get_attr("value") {
            Some(value) => value.to_string(),
            None => self.text_content(option),
        })
    }

    /// The `label` attribute of an option, falling back to its text.
    pub fn option_label(&self, option: NodeId) -> Result<String, DomError> {
        let el = self.get(option)?;
        Ok(match el.get_attr("label") {
            Some(label) => label.to_string(),
            None => self.text_content(option),
        })
    }

    pub fn set_option_selected(&mut self, option: NodeId, selected: bool) -> Result<(), DomError> {
        self.get_mut(option)?.selected = selected;
        Ok(())
    }

    /// The value of the selected option of `select`.
    ///
    /// Falls back to the first option when none is flagged, as a native
    /// single-select does. `None` when the select has no options.
    pub fn select_value(&self, select: NodeId) -> Option<String> {
        let options = self.options(select);
        let chosen = options
            .iter()
            .copied()
            .find(|&id| self.nodes[id.0].element.selected)
            .or_else(|| options.first().copied())?;
        self.option_value(chosen).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_after_last_child_appends() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = doc.append(root, Element::div()).unwrap();
        let b = doc.create(Element::div());
        doc.insert_after(a, b).unwrap();
        assert_eq!(doc.children(root), &[a, b]);
    }

    #[test]
    fn append_rejects_cycles() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = doc.append(root, Element::div()).unwrap();
        let b = doc.append(a, Element::div()).unwrap();
        assert_eq!(
            doc.append_child(b, a),
            Err(DomError::Cycle { parent: b, child: a })
        );
    }
}
