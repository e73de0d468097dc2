use std::fmt;

use super::iter::{Children, Descendants, Preorder};

/// A node in an annotated tree.
///
/// Every node pairs an annotation with a syntactic label and an ordered
/// sequence of child subtrees. A node without children is a leaf. Annotation
/// and structure are supplied together at construction and are immutable
/// afterwards; a partially annotated node cannot be observed.
///
/// Each node exclusively owns its children, so a `Tree` is a strict tree:
/// no sharing between subtrees and no cycles.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tree<L, A> {
    annotation: A,
    label:      L,
    children:   Vec<Tree<L, A>>,
}

impl<L, A> Tree<L, A> {
    /// Creates a new node from its annotation, label and children.
    #[inline]
    pub fn new(annotation: A, label: L, children: Vec<Tree<L, A>>) -> Self {
        Tree {
            annotation,
            label,
            children,
        }
    }

    /// Creates a node without children.
    #[inline]
    pub fn leaf(annotation: A, label: L) -> Self {
        Self::new(annotation, label, Vec::new())
    }

    /// The annotation attached to this node.
    #[inline]
    pub fn annotation(&self) -> &A {
        &self.annotation
    }

    /// The syntactic tag of this node.
    #[inline]
    pub fn label(&self) -> &L {
        &self.label
    }

    /// `true` if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterator over the children of this node, in their stored order.
    #[inline]
    pub fn children(&self) -> Children<'_, L, A> {
        Children {
            inner: self.children.iter(),
        }
    }

    /// Traverses the subtree rooted at this node in pre-order, yielding a
    /// [`WalkEvent`](super::WalkEvent) on entering and on leaving each node.
    ///
    /// Every call starts a fresh traversal.
    #[inline]
    pub fn preorder(&self) -> Preorder<'_, L, A> {
        Preorder::new(self)
    }

    /// The nodes of this subtree in pre-order: each node before its children,
    /// children in their stored order.
    #[inline]
    pub fn descendants(&self) -> Descendants<'_, L, A> {
        Descendants::new(self)
    }

    /// Produces a tree of identical shape and labels with every annotation
    /// replaced through `f`, applied to each node before its children.
    ///
    /// Consumes the tree; `tree.map(|a| a)` returns an equal tree.
    pub fn map<B, F>(self, mut f: F) -> Tree<L, B>
    where
        F: FnMut(A) -> B,
    {
        self.map_with(&mut f)
    }

    fn map_with<B, F>(self, f: &mut F) -> Tree<L, B>
    where
        F: FnMut(A) -> B,
    {
        let Tree {
            annotation,
            label,
            children,
        } = self;
        let annotation = f(annotation);
        let children = children.into_iter().map(|child| child.map_with(f)).collect();
        Tree {
            annotation,
            label,
            children,
        }
    }

    /// Decomposes this node into its annotation, label and children.
    #[inline]
    pub fn into_parts(self) -> (A, L, Vec<Tree<L, A>>) {
        (self.annotation, self.label, self.children)
    }
}

impl<L: fmt::Debug, A: fmt::Debug> fmt::Debug for Tree<L, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("annotation", &self.annotation)
            .field("label", &self.label)
            .field("children", &self.children)
            .finish()
    }
}
