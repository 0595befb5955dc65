use thiserror::Error;

use crate::document::NodeId;

/// Errors raised by structural document operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The node handle does not belong to this document.
    #[error("node {0} does not exist")]
    InvalidNode(NodeId),

    /// The operation needs a parent but the node has none.
    #[error("node {0} is detached from the document")]
    Detached(NodeId),

    /// The document root cannot be moved or removed.
    #[error("the document root cannot be moved")]
    RootImmovable,

    /// Inserting the node would make it its own ancestor.
    #[error("inserting {child} under {parent} would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },

    /// The reference node is not a direct child of the parent.
    #[error("node {child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },
}
