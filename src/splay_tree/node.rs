use crate::arena::Index;

/// A single vertex of the tree: one stored element and its three structural links.
///
/// The child links are the owning relations for the purpose of traversal; the parent link is a
/// non-owning back-reference used only for navigation while splaying. A vertex with no parent is
/// the root.
#[derive(Clone)]
pub struct Vertex<T> {
    pub element: T,
    pub left: Option<Index>,
    pub right: Option<Index>,
    pub parent: Option<Index>,
}

impl<T> Vertex<T> {
    pub fn new(element: T, parent: Option<Index>) -> Self {
        Vertex {
            element,
            left: None,
            right: None,
            parent,
        }
    }
}

/// Which child slot of its parent a vertex hangs from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Branch {
    Left,
    Right,
}

/// The structural configuration of a vertex relative to its parent and grandparent.
///
/// Computed once per splay iteration from the four relevant link relations and dispatched with an
/// exhaustive `match`, so every reachable configuration has exactly one rotation sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SplayStep {
    /// The parent is the root; a single rotation promotes the vertex. Terminal step.
    Zig(Branch),
    /// Vertex and parent are both left children.
    ZigZigLeft,
    /// Vertex and parent are both right children.
    ZigZigRight,
    /// Vertex is a left child while its parent is a right child.
    ZigZagLeftRight,
    /// Vertex is a right child while its parent is a left child.
    ZigZagRightLeft,
}
