//! Tree iterators.

use std::{iter::FusedIterator, slice};

use super::Tree;

/// `WalkEvent` describes tree walking process.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WalkEvent<T> {
    /// Fired before traversing the node.
    Enter(T),
    /// Fired after the node is traversed.
    Leave(T),
}

impl<T> WalkEvent<T> {
    pub fn map<F: FnOnce(T) -> U, U>(self, f: F) -> WalkEvent<U> {
        match self {
            WalkEvent::Enter(it) => WalkEvent::Enter(f(it)),
            WalkEvent::Leave(it) => WalkEvent::Leave(f(it)),
        }
    }
}

/// An iterator over a [`Tree`]'s direct children.
#[derive(Debug, Clone)]
pub struct Children<'a, L, A> {
    pub(super) inner: slice::Iter<'a, Tree<L, A>>,
}

// NB: forward everything stable that iter::Slice specializes
impl<L, A> ExactSizeIterator for Children<'_, L, A> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, L, A> Iterator for Children<'a, L, A> {
    type Item = &'a Tree<L, A>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.inner.count()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth(n)
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }

    #[inline]
    fn fold<Acc, Fold>(self, init: Acc, f: Fold) -> Acc
    where
        Fold: FnMut(Acc, Self::Item) -> Acc,
    {
        self.inner.fold(init, f)
    }
}

impl<'a, L, A> DoubleEndedIterator for Children<'a, L, A> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth_back(n)
    }

    #[inline]
    fn rfold<Acc, Fold>(self, init: Acc, f: Fold) -> Acc
    where
        Fold: FnMut(Acc, Self::Item) -> Acc,
    {
        self.inner.rfold(init, f)
    }
}

impl<L, A> FusedIterator for Children<'_, L, A> {}

/// A pre-order walk over a [`Tree`], yielding a [`WalkEvent`] both on entering
/// and on leaving each node.
///
/// The tree has no parent pointers, so the walk keeps the path to the current
/// node on an explicit stack.
#[derive(Debug, Clone)]
pub struct Preorder<'a, L, A> {
    start: Option<&'a Tree<L, A>>,
    stack: Vec<(&'a Tree<L, A>, Children<'a, L, A>)>,
}

impl<'a, L, A> Preorder<'a, L, A> {
    pub(super) fn new(root: &'a Tree<L, A>) -> Self {
        Preorder {
            start: Some(root),
            stack: Vec::new(),
        }
    }
}

impl<'a, L, A> Iterator for Preorder<'a, L, A> {
    type Item = WalkEvent<&'a Tree<L, A>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.start.take() {
            self.stack.push((root, root.children()));
            return Some(WalkEvent::Enter(root));
        }
        let (_, children) = self.stack.last_mut()?;
        match children.next() {
            Some(child) => {
                self.stack.push((child, child.children()));
                Some(WalkEvent::Enter(child))
            }
            None => {
                let (node, _) = self.stack.pop()?;
                Some(WalkEvent::Leave(node))
            }
        }
    }
}

impl<L, A> FusedIterator for Preorder<'_, L, A> {}

/// The nodes of a [`Tree`] in pre-order: each node is yielded before its
/// children, children in their stored order.
#[derive(Debug, Clone)]
pub struct Descendants<'a, L, A> {
    inner: Preorder<'a, L, A>,
}

impl<'a, L, A> Descendants<'a, L, A> {
    pub(super) fn new(root: &'a Tree<L, A>) -> Self {
        Descendants {
            inner: Preorder::new(root),
        }
    }
}

impl<'a, L, A> Iterator for Descendants<'a, L, A> {
    type Item = &'a Tree<L, A>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(|event| match event {
            WalkEvent::Enter(node) => Some(node),
            WalkEvent::Leave(_) => None,
        })
    }
}

impl<L, A> FusedIterator for Descendants<'_, L, A> {}
